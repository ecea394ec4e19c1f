//! Cheapest-tuna-roll ranking across restaurants.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::menu::generate_menu;
use crate::pricing::round_cents;
use crate::restaurant::RestaurantMetadata;

/// Disclaimer attached to every ranking report.
pub const RANKING_NOTE: &str =
    "Prices are synthetic but calibrated to each restaurant's real price tier";

/// One available tuna roll, flattened with its restaurant's delivery terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TunaOption {
    pub restaurant_name: String,
    pub restaurant_id: String,
    pub item_name: String,
    pub price: f64,
    pub pieces: u32,
    pub price_per_piece: f64,
    pub delivery_available: bool,
    pub delivery_time_minutes: Option<u32>,
    pub delivery_fee: Option<f64>,
    /// Item price plus delivery fee (zero when not delivering).
    pub total_with_delivery: f64,
}

/// Result of ranking every available tuna roll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheapestReport {
    pub cheapest: Option<TunaOption>,
    pub all_options: Vec<TunaOption>,
    pub total_restaurants_checked: usize,
    pub total_options_found: usize,
    pub note: String,
}

/// Every available tuna roll across `restaurants`, cheapest first.
///
/// Sorting is stable, so equal prices keep restaurant order and then menu order.
pub fn find_tuna_options(restaurants: &[RestaurantMetadata]) -> Vec<TunaOption> {
    let mut options: Vec<TunaOption> = restaurants
        .iter()
        .flat_map(|restaurant| {
            let menu = generate_menu(restaurant);
            let available: Vec<TunaOption> = menu
                .available_tuna_rolls()
                .map(|item| TunaOption {
                    restaurant_name: menu.restaurant_name.clone(),
                    restaurant_id: menu.restaurant_id.clone(),
                    item_name: item.name.clone(),
                    price: item.price,
                    pieces: item.pieces,
                    price_per_piece: round_cents(item.price / f64::from(item.pieces.max(1))),
                    delivery_available: menu.delivery_available,
                    delivery_time_minutes: menu.delivery_time_minutes,
                    delivery_fee: menu.delivery_fee,
                    total_with_delivery: round_cents(item.price + menu.delivery_fee.unwrap_or(0.0)),
                })
                .collect();
            available
        })
        .collect();

    options.sort_by(|a, b| a.price.total_cmp(&b.price));
    options
}

/// Rank `restaurants` and report the single cheapest available tuna roll.
pub fn find_cheapest(restaurants: &[RestaurantMetadata]) -> CheapestReport {
    let all_options = find_tuna_options(restaurants);
    let cheapest = all_options.first().cloned();

    debug!(
        restaurants = restaurants.len(),
        options = all_options.len(),
        cheapest = cheapest.as_ref().map(|c| c.price),
        "Ranked tuna rolls"
    );

    CheapestReport {
        cheapest,
        total_restaurants_checked: restaurants.len(),
        total_options_found: all_options.len(),
        all_options,
        note: RANKING_NOTE.to_string(),
    }
}

/// First option whose restaurant delivers.
pub fn next_deliverable(options: &[TunaOption]) -> Option<&TunaOption> {
    options.iter().find(|option| option.delivery_available)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::restaurant::PriceLevel;

    fn restaurants() -> Vec<RestaurantMetadata> {
        vec![
            RestaurantMetadata::new("rank-1")
                .with_name("Cheap Eats")
                .with_price_level(PriceLevel::Inexpensive)
                .with_delivery(true),
            RestaurantMetadata::new("rank-2")
                .with_name("Middle Ground")
                .with_price_level(PriceLevel::Moderate)
                .with_delivery(false),
        ]
    }

    #[test]
    fn test_options_sorted_by_price() {
        let options = find_tuna_options(&restaurants());
        assert!(!options.is_empty());
        for pair in options.windows(2) {
            assert!(pair[0].price <= pair[1].price);
        }
    }

    #[test]
    fn test_only_available_items_are_ranked() {
        let menus: usize = restaurants()
            .iter()
            .map(|r| generate_menu(r).available_tuna_rolls().count())
            .sum();
        assert_eq!(find_tuna_options(&restaurants()).len(), menus);
    }

    #[test]
    fn test_option_totals() {
        for option in find_tuna_options(&restaurants()) {
            let fee = option.delivery_fee.unwrap_or(0.0);
            assert!((option.total_with_delivery - (option.price + fee)).abs() < 0.006);
            let per_piece = option.price / option.pieces as f64;
            assert!((option.price_per_piece - per_piece).abs() < 0.006);
        }
    }

    #[test]
    fn test_report_counts() {
        let report = find_cheapest(&restaurants());
        assert_eq!(report.total_restaurants_checked, 2);
        assert_eq!(report.total_options_found, report.all_options.len());
        assert_eq!(report.cheapest.as_ref(), report.all_options.first());
        assert_eq!(report.note, RANKING_NOTE);
    }

    #[test]
    fn test_empty_restaurant_list() {
        let report = find_cheapest(&[]);
        assert!(report.cheapest.is_none());
        assert_eq!(report.total_options_found, 0);
        assert_eq!(report.total_restaurants_checked, 0);
    }

    #[test]
    fn test_next_deliverable_skips_non_delivering() {
        let restaurants = vec![
            RestaurantMetadata::new("pickup-1")
                .with_price_level(PriceLevel::Free)
                .with_delivery(false),
            RestaurantMetadata::new("delivers-1")
                .with_price_level(PriceLevel::Moderate)
                .with_delivery(true),
        ];
        let options = find_tuna_options(&restaurants);
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].restaurant_id, "pickup-1");
        assert_eq!(options[0].price, 4.99);

        let option = next_deliverable(&options).unwrap();
        assert!(option.delivery_available);
        assert_eq!(option.restaurant_id, "delivers-1");
        assert_eq!(option.item_name, "Tuna Avocado Roll");
        assert_eq!(option.price, 8.49);
    }
}
