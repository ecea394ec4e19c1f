//! Google Places response formatting.
//!
//! The Places API (New) returns `searchNearby` results as a `places` array.
//! Money amounts in `priceRange` carry their whole-dollar part as a string
//! `units` field, so a lower bound of $20 arrives as `{"units": "20"}`.

use menu_synth::{PriceLevel, RestaurantMetadata};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ToolError;

/// Places `includedTypes` filter used for sushi searches.
pub const INCLUDED_TYPES: [&str; 2] = ["japanese_restaurant", "sushi_restaurant"];

/// Maximum results a single `searchNearby` call returns.
pub const MAX_RESULT_COUNT: usize = 10;

/// Reviews kept in a details result.
pub const MAX_DETAIL_REVIEWS: usize = 3;

/// Largest search radius Places accepts, in meters.
pub const MAX_RADIUS_METERS: u32 = 50_000;

/// Convert miles to whole meters, clamped to the Places maximum radius.
pub fn miles_to_meters(miles: f64) -> u32 {
    let meters = (miles * 1609.34).max(0.0) as u64;
    meters.min(u64::from(MAX_RADIUS_METERS)) as u32
}

fn money_units(money: Option<&Value>) -> Option<u32> {
    let money = money?.as_object().filter(|m| !m.is_empty())?;
    match money.get("units") {
        Some(Value::String(s)) => s.parse().ok(),
        Some(Value::Number(n)) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        // A present price object without units means zero dollars.
        None => Some(0),
        _ => None,
    }
}

/// Format one Places result into restaurant metadata.
pub fn format_restaurant(place: &Value) -> RestaurantMetadata {
    let location = place.get("location");
    let price_range = place.get("priceRange");

    RestaurantMetadata {
        id: Some(place.get("id").and_then(Value::as_str).unwrap_or("").to_string()),
        name: Some(
            place
                .pointer("/displayName/text")
                .and_then(Value::as_str)
                .unwrap_or("Unknown")
                .to_string(),
        ),
        address: Some(
            place
                .get("formattedAddress")
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_string(),
        ),
        latitude: location.and_then(|l| l.get("latitude")).and_then(Value::as_f64),
        longitude: location.and_then(|l| l.get("longitude")).and_then(Value::as_f64),
        rating: place.get("rating").and_then(Value::as_f64),
        review_count: Some(place.get("userRatingCount").and_then(Value::as_u64).unwrap_or(0)),
        price_level: place
            .get("priceLevel")
            .and_then(Value::as_str)
            .and_then(PriceLevel::parse),
        price_range_low: money_units(price_range.and_then(|r| r.get("startPrice"))),
        price_range_high: money_units(price_range.and_then(|r| r.get("endPrice"))),
        delivery: place.get("delivery").and_then(Value::as_bool),
        types: place
            .get("types")
            .and_then(Value::as_array)
            .map(|types| {
                types
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default(),
    }
}

/// One user review from a place's details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub rating: Option<f64>,
    pub text: String,
    /// Relative publish time, e.g. "a week ago".
    pub time: String,
}

/// Everything known about one place: the search fields plus service
/// options, opening hours, summary and the first few reviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantDetails {
    #[serde(flatten)]
    pub restaurant: RestaurantMetadata,
    pub takeout: Option<bool>,
    pub dine_in: Option<bool>,
    pub website: Option<String>,
    pub google_maps_url: Option<String>,
    /// One line per weekday, as Places words them.
    #[serde(default)]
    pub hours: Vec<String>,
    pub summary: Option<String>,
    pub primary_type: Option<String>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

fn string_field(place: &Value, pointer: &str) -> Option<String> {
    place.pointer(pointer).and_then(Value::as_str).map(str::to_string)
}

fn format_review(review: &Value) -> Review {
    Review {
        rating: review.get("rating").and_then(Value::as_f64),
        text: string_field(review, "/text/text").unwrap_or_default(),
        time: string_field(review, "/relativePublishTimeDescription").unwrap_or_default(),
    }
}

/// Format a Places place-details result.
///
/// Missing service flags stay `None`; only the first
/// [`MAX_DETAIL_REVIEWS`] reviews are kept.
pub fn format_restaurant_details(place: &Value) -> RestaurantDetails {
    let hours = place
        .pointer("/currentOpeningHours/weekdayDescriptions")
        .and_then(Value::as_array)
        .map(|days| days.iter().filter_map(Value::as_str).map(str::to_string).collect())
        .unwrap_or_default();
    let reviews = place
        .get("reviews")
        .and_then(Value::as_array)
        .map(|reviews| {
            reviews
                .iter()
                .take(MAX_DETAIL_REVIEWS)
                .map(format_review)
                .collect()
        })
        .unwrap_or_default();

    RestaurantDetails {
        restaurant: format_restaurant(place),
        takeout: place.get("takeout").and_then(Value::as_bool),
        dine_in: place.get("dineIn").and_then(Value::as_bool),
        website: string_field(place, "/websiteUri"),
        google_maps_url: string_field(place, "/googleMapsUri"),
        hours,
        summary: string_field(place, "/editorialSummary/text"),
        primary_type: string_field(place, "/primaryType"),
        reviews,
    }
}

/// Whether a place is tagged with one of [`INCLUDED_TYPES`].
///
/// Places without any type tags are kept.
pub fn is_sushi_place(restaurant: &RestaurantMetadata) -> bool {
    restaurant.types.is_empty()
        || restaurant
            .types
            .iter()
            .any(|t| INCLUDED_TYPES.contains(&t.as_str()))
}

/// Raw place objects from a `searchNearby` response body.
///
/// A response without a `places` key means no results.
pub fn response_places(body: &str) -> Result<Vec<Value>, ToolError> {
    let data: Value = serde_json::from_str(body)?;
    match data {
        Value::Object(mut fields) => match fields.remove("places") {
            Some(Value::Array(places)) => Ok(places),
            _ => Ok(Vec::new()),
        },
        _ => Err(ToolError::SearchFailed(
            "expected a JSON object with a 'places' array".to_string(),
        )),
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_miles_to_meters() {
        assert_eq!(miles_to_meters(2.0), 3218);
        assert_eq!(miles_to_meters(100.0), MAX_RADIUS_METERS);
        assert_eq!(miles_to_meters(-1.0), 0);
    }

    #[test]
    fn test_format_full_place() {
        let place = json!({
            "id": "ChIJ123",
            "displayName": {"text": "Sushi Zone", "languageCode": "en"},
            "formattedAddress": "1 Market St, San Francisco, CA",
            "location": {"latitude": 37.79, "longitude": -122.39},
            "rating": 4.6,
            "userRatingCount": 812,
            "priceLevel": "PRICE_LEVEL_MODERATE",
            "priceRange": {
                "startPrice": {"currencyCode": "USD", "units": "20"},
                "endPrice": {"currencyCode": "USD", "units": "30"}
            },
            "delivery": true,
            "types": ["sushi_restaurant", "restaurant"]
        });

        let restaurant = format_restaurant(&place);
        assert_eq!(restaurant.id.as_deref(), Some("ChIJ123"));
        assert_eq!(restaurant.name.as_deref(), Some("Sushi Zone"));
        assert_eq!(restaurant.latitude, Some(37.79));
        assert_eq!(restaurant.review_count, Some(812));
        assert_eq!(restaurant.price_level, Some(PriceLevel::Moderate));
        assert_eq!(restaurant.price_range_low, Some(20));
        assert_eq!(restaurant.price_range_high, Some(30));
        assert_eq!(restaurant.delivery, Some(true));
        assert_eq!(restaurant.types.len(), 2);
    }

    #[test]
    fn test_format_sparse_place() {
        let restaurant = format_restaurant(&json!({}));
        assert_eq!(restaurant.id.as_deref(), Some(""));
        assert_eq!(restaurant.name.as_deref(), Some("Unknown"));
        assert_eq!(restaurant.review_count, Some(0));
        assert_eq!(restaurant.price_level, None);
        assert_eq!(restaurant.price_range_low, None);
        assert_eq!(restaurant.delivery, None);
        assert!(restaurant.types.is_empty());
    }

    #[test]
    fn test_price_without_units_is_zero() {
        let place = json!({"priceRange": {"startPrice": {"currencyCode": "USD"}}});
        assert_eq!(format_restaurant(&place).price_range_low, Some(0));

        let empty = json!({"priceRange": {"startPrice": {}}});
        assert_eq!(format_restaurant(&empty).price_range_low, None);
    }

    fn sample_detail() -> Value {
        json!({
            "id": "ChIJ86TL",
            "displayName": {"text": "Mensho Tokyo SF"},
            "formattedAddress": "672 Geary St, San Francisco, CA 94102, USA",
            "priceLevel": "PRICE_LEVEL_MODERATE",
            "delivery": true,
            "takeout": true,
            "dineIn": false,
            "websiteUri": "https://mensho.com/",
            "googleMapsUri": "https://maps.google.com/?cid=12345",
            "primaryType": "ramen_restaurant",
            "editorialSummary": {"text": "American spin-off of a Tokyo ramen brand."},
            "currentOpeningHours": {
                "weekdayDescriptions": [
                    "Monday: 11:30 AM - 9:00 PM",
                    "Tuesday: 11:30 AM - 9:00 PM"
                ]
            },
            "reviews": [
                {"rating": 5, "text": {"text": "Tuna appetizers!"}, "relativePublishTimeDescription": "a week ago"},
                {"rating": 4, "text": {"text": "A bit pricey."}, "relativePublishTimeDescription": "2 weeks ago"},
                {"rating": 3},
                {"rating": 1, "text": {"text": "Never again."}}
            ]
        })
    }

    #[test]
    fn test_format_details() {
        let details = format_restaurant_details(&sample_detail());
        assert_eq!(details.restaurant.name.as_deref(), Some("Mensho Tokyo SF"));
        assert_eq!(details.restaurant.delivery, Some(true));
        assert_eq!(details.takeout, Some(true));
        assert_eq!(details.dine_in, Some(false));
        assert_eq!(details.website.as_deref(), Some("https://mensho.com/"));
        assert_eq!(details.primary_type.as_deref(), Some("ramen_restaurant"));
        assert!(details.summary.unwrap().contains("spin-off"));
        assert_eq!(details.hours.len(), 2);
        assert!(details.hours[0].starts_with("Monday"));
    }

    #[test]
    fn test_details_keep_first_three_reviews() {
        let details = format_restaurant_details(&sample_detail());
        assert_eq!(details.reviews.len(), MAX_DETAIL_REVIEWS);
        assert_eq!(details.reviews[0].rating, Some(5.0));
        assert_eq!(details.reviews[0].time, "a week ago");
        assert_eq!(details.reviews[2].text, "");
        assert_eq!(details.reviews[2].time, "");
    }

    #[test]
    fn test_sparse_details() {
        let place = json!({"displayName": {"text": "Bare Minimum"}, "formattedAddress": "456 Oak Ave"});
        let details = format_restaurant_details(&place);
        assert_eq!(details.restaurant.name.as_deref(), Some("Bare Minimum"));
        assert_eq!(details.restaurant.delivery, None);
        assert_eq!(details.takeout, None);
        assert_eq!(details.website, None);
        assert!(details.hours.is_empty());
        assert!(details.reviews.is_empty());
        assert_eq!(details.summary, None);
    }

    #[test]
    fn test_details_serialize_flat() {
        let value = serde_json::to_value(format_restaurant_details(&sample_detail())).unwrap();
        assert_eq!(value["name"], "Mensho Tokyo SF");
        assert_eq!(value["price_level"], "PRICE_LEVEL_MODERATE");
        assert_eq!(value["dine_in"], false);
        assert_eq!(value["reviews"][1]["text"], "A bit pricey.");
    }

    #[test]
    fn test_is_sushi_place() {
        let mut restaurant = RestaurantMetadata::new("a");
        assert!(is_sushi_place(&restaurant));
        restaurant.types = vec!["cafe".to_string()];
        assert!(!is_sushi_place(&restaurant));
        restaurant.types.push("japanese_restaurant".to_string());
        assert!(is_sushi_place(&restaurant));
    }

    #[test]
    fn test_response_places() {
        let body = r#"{"places": [{"id": "a"}, {"id": "b"}]}"#;
        let places = response_places(body).unwrap();
        assert_eq!(places.len(), 2);
        assert_eq!(format_restaurant(&places[1]).id.as_deref(), Some("b"));

        assert!(response_places("{}").unwrap().is_empty());
        assert!(response_places(r#"{"places": null}"#).unwrap().is_empty());
        assert!(response_places("[]").is_err());
        assert!(response_places("not json").is_err());
    }
}
