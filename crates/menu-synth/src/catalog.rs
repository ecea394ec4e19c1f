//! Fixed menu catalogs shared by every restaurant.

use serde::{Deserialize, Serialize};

/// Menu section an item is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    TunaRolls,
    Rolls,
    SpecialtyRolls,
    Appetizers,
    Soup,
}

/// A tuna roll a restaurant may offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TunaVariant {
    pub name: &'static str,
    pub description: &'static str,
    pub pieces: u32,
}

/// A non-tuna item listed on every menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillerItem {
    pub name: &'static str,
    pub category: Category,
}

pub const TUNA_ROLL_VARIANTS: [TunaVariant; 3] = [
    TunaVariant {
        name: "Tuna Roll",
        description: "Classic tuna roll with sushi rice and nori",
        pieces: 6,
    },
    TunaVariant {
        name: "Spicy Tuna Roll",
        description: "Tuna with spicy mayo, cucumber, and sesame seeds",
        pieces: 8,
    },
    TunaVariant {
        name: "Tuna Avocado Roll",
        description: "Fresh tuna with avocado and sushi rice",
        pieces: 8,
    },
];

pub const OTHER_SUSHI_ITEMS: [FillerItem; 6] = [
    FillerItem { name: "California Roll", category: Category::Rolls },
    FillerItem { name: "Salmon Roll", category: Category::Rolls },
    FillerItem { name: "Rainbow Roll", category: Category::SpecialtyRolls },
    FillerItem { name: "Dragon Roll", category: Category::SpecialtyRolls },
    FillerItem { name: "Edamame", category: Category::Appetizers },
    FillerItem { name: "Miso Soup", category: Category::Soup },
];

/// Delivery time choices, in minutes.
pub const DELIVERY_TIME_CHOICES: [u32; 7] = [15, 20, 25, 30, 35, 40, 45];

/// Delivery fee bounds, in dollars.
pub const DELIVERY_FEE_RANGE: (f64, f64) = (1.99, 5.99);

/// Probability that a tuna roll is in stock.
pub const TUNA_AVAILABILITY: f64 = 0.90;

/// Probability that a filler item is in stock.
pub const OTHER_ITEM_AVAILABILITY: f64 = 0.95;

/// Probability that a restaurant with unknown delivery status delivers.
pub(crate) const DELIVERY_PROBABILITY: f64 = 0.70;

/// Filler prices are scaled from a tuna-calibrated base by a factor in this range.
pub(crate) const OTHER_ITEM_MULTIPLIER: (f64, f64) = (0.6, 1.4);
