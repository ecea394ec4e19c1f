//! Restaurant-search providers.
//!
//! The search tool does not talk to Google directly. It asks a
//! [`RestaurantSearch`] provider for the restaurants around a point and
//! leaves transport, credentials and quotas to the provider.

use std::path::Path;

use async_trait::async_trait;
use menu_synth::{PriceLevel, RestaurantMetadata};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::ToolError;
use crate::places::{
    format_restaurant, format_restaurant_details, is_sushi_place, miles_to_meters,
    response_places, RestaurantDetails, MAX_RESULT_COUNT,
};

/// Default search radius, in miles.
pub const DEFAULT_RADIUS_MILES: f64 = 2.0;

/// Circle to search within.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchArea {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_miles: f64,
}

impl SearchArea {
    /// Validate and build a search area.
    pub fn new(latitude: f64, longitude: f64, radius_miles: f64) -> Result<Self, ToolError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ToolError::invalid("latitude", "must be between -90 and 90"));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ToolError::invalid("longitude", "must be between -180 and 180"));
        }
        if radius_miles.is_nan() || radius_miles <= 0.0 {
            return Err(ToolError::invalid("radius_miles", "must be greater than 0"));
        }
        Ok(Self {
            latitude,
            longitude,
            radius_miles,
        })
    }

    /// Radius as sent to Places, clamped to its 50 km limit.
    pub fn radius_meters(&self) -> u32 {
        miles_to_meters(self.radius_miles)
    }
}

/// A source of restaurants near a point.
#[async_trait]
pub trait RestaurantSearch: Send + Sync {
    /// Short provider name for logs.
    fn name(&self) -> &str;

    /// Restaurants within `area`, at most [`MAX_RESULT_COUNT`].
    async fn search(&self, area: &SearchArea) -> Result<Vec<RestaurantMetadata>, ToolError>;

    /// Full details for one place, or `None` when the provider has no such id.
    async fn details(&self, place_id: &str) -> Result<Option<RestaurantDetails>, ToolError>;
}

/// Five sample San Francisco restaurants, returned for any area.
#[derive(Debug, Clone, Default)]
pub struct DemoRestaurants;

impl DemoRestaurants {
    pub fn new() -> Self {
        Self
    }
}

#[allow(clippy::too_many_arguments)]
fn demo(
    id: &str,
    name: &str,
    address: &str,
    coords: (f64, f64),
    rating: f64,
    review_count: u64,
    price_level: PriceLevel,
    price_range: (u32, u32),
    delivery: bool,
    types: &[&str],
) -> RestaurantMetadata {
    RestaurantMetadata {
        id: Some(id.to_string()),
        name: Some(name.to_string()),
        address: Some(address.to_string()),
        latitude: Some(coords.0),
        longitude: Some(coords.1),
        rating: Some(rating),
        review_count: Some(review_count),
        price_level: Some(price_level),
        price_range_low: Some(price_range.0),
        price_range_high: Some(price_range.1),
        delivery: Some(delivery),
        types: types.iter().map(|t| t.to_string()).collect(),
    }
}

/// The built-in sample restaurants.
pub fn demo_restaurants() -> Vec<RestaurantMetadata> {
    vec![
        demo(
            "demo_sf_sushi_1",
            "Tokyo Express",
            "123 Market St, San Francisco, CA",
            (37.7749, -122.4194),
            4.2,
            450,
            PriceLevel::Inexpensive,
            (12, 20),
            true,
            &["sushi_restaurant", "japanese_restaurant"],
        ),
        demo(
            "demo_sf_sushi_2",
            "Sushi Palace",
            "456 Geary St, San Francisco, CA",
            (37.7864, -122.4134),
            4.5,
            820,
            PriceLevel::Moderate,
            (20, 35),
            true,
            &["sushi_restaurant", "japanese_restaurant"],
        ),
        demo(
            "demo_sf_sushi_3",
            "Zen Omakase",
            "789 Mission St, San Francisco, CA",
            (37.7853, -122.4000),
            4.8,
            1200,
            PriceLevel::Expensive,
            (60, 120),
            false,
            &["sushi_restaurant", "japanese_restaurant"],
        ),
        demo(
            "demo_sf_sushi_4",
            "Roll House",
            "321 Valencia St, San Francisco, CA",
            (37.7685, -122.4218),
            4.0,
            290,
            PriceLevel::Inexpensive,
            (10, 18),
            true,
            &["sushi_restaurant"],
        ),
        demo(
            "demo_sf_sushi_5",
            "Sakura Garden",
            "555 Hayes St, San Francisco, CA",
            (37.7763, -122.4246),
            4.3,
            650,
            PriceLevel::Moderate,
            (22, 30),
            true,
            &["japanese_restaurant", "sushi_restaurant"],
        ),
    ]
}

const DEMO_HOURS: [&str; 7] = [
    "Monday: 11:30 AM - 9:30 PM",
    "Tuesday: 11:30 AM - 9:30 PM",
    "Wednesday: 11:30 AM - 9:30 PM",
    "Thursday: 11:30 AM - 9:30 PM",
    "Friday: 11:30 AM - 10:30 PM",
    "Saturday: 12:00 - 10:30 PM",
    "Sunday: 12:00 - 9:00 PM",
];

fn demo_details(restaurant: RestaurantMetadata) -> RestaurantDetails {
    let primary_type = restaurant.types.first().cloned();
    RestaurantDetails {
        restaurant,
        takeout: Some(true),
        dine_in: Some(true),
        website: None,
        google_maps_url: None,
        hours: DEMO_HOURS.iter().map(|h| h.to_string()).collect(),
        summary: None,
        primary_type,
        reviews: Vec::new(),
    }
}

#[async_trait]
impl RestaurantSearch for DemoRestaurants {
    fn name(&self) -> &str {
        "demo"
    }

    async fn search(&self, area: &SearchArea) -> Result<Vec<RestaurantMetadata>, ToolError> {
        debug!(
            "Demo search at ({}, {}) radius {}m",
            area.latitude,
            area.longitude,
            area.radius_meters()
        );
        Ok(demo_restaurants())
    }

    async fn details(&self, place_id: &str) -> Result<Option<RestaurantDetails>, ToolError> {
        Ok(demo_restaurants()
            .into_iter()
            .find(|r| r.id.as_deref() == Some(place_id))
            .map(demo_details))
    }
}

/// Replays a saved Places `searchNearby` response.
///
/// Non-sushi places are dropped and results are capped at
/// [`MAX_RESULT_COUNT`], the same shape a live search returns. Details are
/// formatted from the same saved place objects, so a response captured with
/// the details field mask also answers `details`.
#[derive(Debug, Clone)]
pub struct PlacesFixture {
    places: Vec<Value>,
}

impl PlacesFixture {
    /// Build from a response body.
    pub fn from_response(body: &str) -> Result<Self, ToolError> {
        let places = response_places(body)?;
        Ok(Self { places })
    }

    /// Load a response body saved to disk.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ToolError> {
        let path = path.as_ref();
        let body = tokio::fs::read_to_string(path).await.map_err(|e| {
            ToolError::SearchFailed(format!("cannot read {}: {}", path.display(), e))
        })?;
        let fixture = Self::from_response(&body)?;
        info!(
            "Loaded {} places from {}",
            fixture.places.len(),
            path.display()
        );
        Ok(fixture)
    }
}

#[async_trait]
impl RestaurantSearch for PlacesFixture {
    fn name(&self) -> &str {
        "places-fixture"
    }

    async fn search(&self, area: &SearchArea) -> Result<Vec<RestaurantMetadata>, ToolError> {
        debug!(
            "Replaying places fixture for ({}, {}) radius {}m",
            area.latitude,
            area.longitude,
            area.radius_meters()
        );
        Ok(self
            .places
            .iter()
            .map(format_restaurant)
            .filter(is_sushi_place)
            .take(MAX_RESULT_COUNT)
            .collect())
    }

    async fn details(&self, place_id: &str) -> Result<Option<RestaurantDetails>, ToolError> {
        Ok(self
            .places
            .iter()
            .find(|place| place.get("id").and_then(Value::as_str) == Some(place_id))
            .map(format_restaurant_details))
    }
}
