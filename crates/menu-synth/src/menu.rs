//! Menu assembly.

use rand::seq::index;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{
    Category, FillerItem, TunaVariant, DELIVERY_FEE_RANGE, DELIVERY_PROBABILITY,
    DELIVERY_TIME_CHOICES, OTHER_ITEM_AVAILABILITY, OTHER_ITEM_MULTIPLIER, OTHER_SUSHI_ITEMS,
    TUNA_AVAILABILITY, TUNA_ROLL_VARIANTS,
};
use crate::pricing::{calibrated_price, round_cents, snap_price, uniform};
use crate::restaurant::{PriceLevel, RestaurantMetadata};
use crate::seed::{seed_hex, seeded_rng, SeededRng, BASE_SUB_KEY, FALLBACK_RESTAURANT_ID};

/// Disclaimer attached to every generated menu.
pub const MENU_NOTE: &str = "Menu data is synthetic, calibrated to restaurant price tier";

/// A tuna roll on a generated menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuLineItem {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub pieces: u32,
    pub available: bool,
    pub category: Category,
}

/// A non-tuna item on a generated menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherItem {
    pub name: String,
    pub price: f64,
    pub category: Category,
    pub available: bool,
}

/// Synthetic menu for one restaurant.
///
/// `delivery_time_minutes` and `delivery_fee` are both `Some` exactly when
/// `delivery_available` is true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedMenu {
    pub restaurant_id: String,
    pub restaurant_name: String,
    pub delivery_available: bool,
    pub delivery_time_minutes: Option<u32>,
    pub delivery_fee: Option<f64>,
    pub tuna_rolls: Vec<MenuLineItem>,
    pub other_items: Vec<OtherItem>,
    pub menu_note: String,
}

impl GeneratedMenu {
    /// Tuna rolls that are currently in stock.
    pub fn available_tuna_rolls(&self) -> impl Iterator<Item = &MenuLineItem> {
        self.tuna_rolls.iter().filter(|item| item.available)
    }
}

/// Generate the synthetic menu for `restaurant`.
///
/// Draw order is fixed: the base stream picks the number of tuna variants,
/// then which variants (index sampling without replacement), then delivery
/// status if unknown, then delivery time and fee. Each item draws its price
/// and then its availability from a stream keyed by its own name.
pub fn generate_menu(restaurant: &RestaurantMetadata) -> GeneratedMenu {
    let place_id = restaurant.id.as_deref().unwrap_or(FALLBACK_RESTAURANT_ID);
    let price_level = restaurant.price_level;
    let price_range_low = restaurant.price_range_low;

    let mut base = seeded_rng(place_id, BASE_SUB_KEY);

    // u32 draws consume the same words on 32- and 64-bit targets; usize would not.
    let count = base.gen_range(1..=TUNA_ROLL_VARIANTS.len() as u32) as usize;
    let offered = index::sample(&mut base, TUNA_ROLL_VARIANTS.len(), count);
    let tuna_rolls: Vec<MenuLineItem> = offered
        .iter()
        .map(|i| tuna_item(place_id, &TUNA_ROLL_VARIANTS[i], price_level, price_range_low))
        .collect();

    let other_items = OTHER_SUSHI_ITEMS
        .iter()
        .map(|item| other_item(place_id, item, price_level, price_range_low))
        .collect();

    let delivery_available = restaurant
        .delivery
        .unwrap_or_else(|| base.gen::<f64>() < DELIVERY_PROBABILITY);
    let (delivery_time_minutes, delivery_fee) = if delivery_available {
        delivery_terms(&mut base)
    } else {
        (None, None)
    };

    debug!(
        restaurant_id = place_id,
        seed = %seed_hex(place_id, BASE_SUB_KEY),
        tuna_variants = tuna_rolls.len(),
        delivery_available,
        "Generated synthetic menu"
    );

    GeneratedMenu {
        restaurant_id: place_id.to_string(),
        restaurant_name: restaurant.display_name().to_string(),
        delivery_available,
        delivery_time_minutes,
        delivery_fee,
        tuna_rolls,
        other_items,
        menu_note: MENU_NOTE.to_string(),
    }
}

fn tuna_item(
    place_id: &str,
    variant: &TunaVariant,
    price_level: Option<PriceLevel>,
    price_range_low: Option<u32>,
) -> MenuLineItem {
    let mut rng = seeded_rng(place_id, variant.name);
    let price = calibrated_price(&mut rng, price_level, price_range_low);
    let available = rng.gen::<f64>() < TUNA_AVAILABILITY;

    MenuLineItem {
        name: variant.name.to_string(),
        description: variant.description.to_string(),
        price,
        pieces: variant.pieces,
        available,
        category: Category::TunaRolls,
    }
}

fn other_item(
    place_id: &str,
    item: &FillerItem,
    price_level: Option<PriceLevel>,
    price_range_low: Option<u32>,
) -> OtherItem {
    let mut rng = seeded_rng(place_id, item.name);
    let base_price = calibrated_price(&mut rng, price_level, price_range_low);
    let multiplier = uniform(&mut rng, OTHER_ITEM_MULTIPLIER.0, OTHER_ITEM_MULTIPLIER.1);
    let available = rng.gen::<f64>() < OTHER_ITEM_AVAILABILITY;

    OtherItem {
        name: item.name.to_string(),
        price: snap_price(base_price * multiplier),
        category: item.category,
        available,
    }
}

fn delivery_terms(base: &mut SeededRng) -> (Option<u32>, Option<f64>) {
    let slot = base.gen_range(0..DELIVERY_TIME_CHOICES.len() as u32) as usize;
    let minutes = DELIVERY_TIME_CHOICES[slot];
    let fee = round_cents(uniform(base, DELIVERY_FEE_RANGE.0, DELIVERY_FEE_RANGE.1));
    (Some(minutes), Some(fee))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn sample_restaurants() -> Vec<RestaurantMetadata> {
        vec![
            RestaurantMetadata::new("demo_sf_sushi_1")
                .with_name("Tokyo Express")
                .with_price_level(PriceLevel::Inexpensive)
                .with_price_range_low(12)
                .with_delivery(true),
            RestaurantMetadata::new("demo_sf_sushi_2")
                .with_name("Sushi Palace")
                .with_price_level(PriceLevel::Moderate)
                .with_price_range_low(20)
                .with_delivery(true),
            RestaurantMetadata::new("demo_sf_sushi_3")
                .with_name("Zen Omakase")
                .with_price_level(PriceLevel::Expensive)
                .with_price_range_low(60)
                .with_delivery(false),
        ]
    }

    #[test]
    fn test_generates_menu_with_tuna_rolls() {
        for restaurant in sample_restaurants() {
            let menu = generate_menu(&restaurant);
            assert!((1..=3).contains(&menu.tuna_rolls.len()));
            let names: HashSet<_> = menu.tuna_rolls.iter().map(|i| i.name.as_str()).collect();
            assert_eq!(names.len(), menu.tuna_rolls.len(), "duplicate tuna variant");
        }
    }

    #[test]
    fn test_tuna_rolls_have_catalog_fields() {
        let menu = generate_menu(&sample_restaurants()[0]);
        for item in &menu.tuna_rolls {
            let variant = TUNA_ROLL_VARIANTS
                .iter()
                .find(|v| v.name == item.name)
                .expect("item comes from the catalog");
            assert_eq!(item.description, variant.description);
            assert_eq!(item.pieces, variant.pieces);
            assert_eq!(item.category, Category::TunaRolls);
            assert!(item.price > 0.0);
        }
    }

    #[test]
    fn test_other_items_follow_catalog_order() {
        let menu = generate_menu(&sample_restaurants()[1]);
        let names: Vec<_> = menu.other_items.iter().map(|i| i.name.as_str()).collect();
        let expected: Vec<_> = OTHER_SUSHI_ITEMS.iter().map(|i| i.name).collect();
        assert_eq!(names, expected);
        assert_eq!(menu.other_items[4].category, Category::Appetizers);
    }

    #[test]
    fn test_deterministic_output() {
        let restaurant = &sample_restaurants()[0];
        assert_eq!(generate_menu(restaurant), generate_menu(restaurant));
    }

    #[test]
    fn test_different_restaurants_get_different_menus() {
        let restaurants = sample_restaurants();
        let a = generate_menu(&restaurants[0]);
        let b = generate_menu(&restaurants[1]);
        let prices_a: Vec<f64> = a.tuna_rolls.iter().map(|i| i.price).collect();
        let prices_b: Vec<f64> = b.tuna_rolls.iter().map(|i| i.price).collect();
        assert_ne!(prices_a, prices_b);
    }

    #[test]
    fn test_availability_depends_only_on_restaurant_and_item() {
        // Changing the tier moves prices but not the availability draw order.
        let cheap = generate_menu(&RestaurantMetadata::new("same").with_price_level(PriceLevel::Free));
        let pricey =
            generate_menu(&RestaurantMetadata::new("same").with_price_level(PriceLevel::VeryExpensive));
        let avail = |menu: &GeneratedMenu| -> Vec<(String, bool)> {
            menu.other_items.iter().map(|i| (i.name.clone(), i.available)).collect()
        };
        assert_eq!(avail(&cheap), avail(&pricey));
    }

    #[test]
    fn test_no_delivery_restaurant() {
        let restaurant = RestaurantMetadata::new("d1")
            .with_price_level(PriceLevel::Moderate)
            .with_delivery(false);
        let menu = generate_menu(&restaurant);
        assert!(!menu.delivery_available);
        assert_eq!(menu.delivery_time_minutes, None);
        assert_eq!(menu.delivery_fee, None);
    }

    #[test]
    fn test_unknown_delivery_is_derived_consistently() {
        for i in 0..50 {
            let menu = generate_menu(&RestaurantMetadata::new(format!("unknown-delivery-{}", i)));
            assert_eq!(menu.delivery_available, menu.delivery_time_minutes.is_some());
            assert_eq!(menu.delivery_available, menu.delivery_fee.is_some());
        }
    }

    #[test]
    fn test_menu_includes_synthetic_note() {
        let menu = generate_menu(&RestaurantMetadata::new("test"));
        assert!(menu.menu_note.to_lowercase().contains("synthetic"));
    }

    #[test]
    fn test_serialized_shape() {
        let menu = generate_menu(&sample_restaurants()[2]);
        let value = serde_json::to_value(&menu).unwrap();
        assert_eq!(value["restaurant_name"], "Zen Omakase");
        assert!(value["delivery_fee"].is_null());
        assert_eq!(value["tuna_rolls"][0]["category"], "tuna_rolls");
    }

    fn tuna_summary(menu: &GeneratedMenu) -> Vec<(&str, f64, bool)> {
        menu.tuna_rolls
            .iter()
            .map(|i| (i.name.as_str(), i.price, i.available))
            .collect()
    }

    #[test]
    fn test_pinned_menu_values() {
        // Fixed values: any change to draw widths or order shows up here.
        let menu = generate_menu(&sample_restaurants()[1]);
        assert_eq!(
            tuna_summary(&menu),
            vec![
                ("Tuna Roll", 9.49, true),
                ("Tuna Avocado Roll", 9.99, false),
                ("Spicy Tuna Roll", 10.49, true),
            ]
        );
        assert_eq!(menu.delivery_time_minutes, Some(45));
        assert_eq!(menu.delivery_fee, Some(4.36));
        assert_eq!(menu.other_items[0].price, 11.49);
        assert_eq!(menu.other_items[5].price, 7.49);
    }

    #[test]
    fn test_pinned_unknown_delivery() {
        let menu = generate_menu(&RestaurantMetadata::new("sushi-42"));
        assert_eq!(
            tuna_summary(&menu),
            vec![("Tuna Avocado Roll", 9.49, true), ("Spicy Tuna Roll", 10.49, true)]
        );
        assert!(!menu.delivery_available);
        assert_eq!(menu.other_items[0].price, 19.49);
    }
}
