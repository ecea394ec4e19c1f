//! Deterministic synthetic menus for sushi restaurants.
//!
//! Real structured menu data is rarely available for a restaurant, but its
//! coarse public metadata usually is: a price tier, sometimes the lower bound
//! of a per-person price range, and whether it delivers. This crate turns that
//! metadata into a plausible, stable menu so callers can rank restaurants by
//! the price of their cheapest tuna roll.
//!
//! - [`RestaurantMetadata`] / [`PriceLevel`] - the input shape
//! - [`seeded_rng`] - per `(restaurant, sub-key)` reproducible random streams
//! - [`calibrated_price`] - tier and price-range based price sampling
//! - [`generate_menu`] - assembles a [`GeneratedMenu`]
//! - [`find_cheapest`] - ranks available tuna rolls across restaurants
//!
//! Everything here is pure: no I/O, no shared state, no wall clock. The same
//! metadata always produces the same menu, so calls can be fanned out across
//! threads freely.
//!
//! # Example
//!
//! ```rust
//! use menu_synth::{generate_menu, PriceLevel, RestaurantMetadata};
//!
//! let restaurant = RestaurantMetadata::new("place-123")
//!     .with_name("Sushi Palace")
//!     .with_price_level(PriceLevel::Moderate)
//!     .with_price_range_low(20)
//!     .with_delivery(true);
//!
//! let menu = generate_menu(&restaurant);
//! assert!(!menu.tuna_rolls.is_empty());
//! assert_eq!(menu, generate_menu(&restaurant));
//! ```

mod catalog;
mod menu;
mod pricing;
mod ranking;
mod restaurant;
mod seed;

pub use catalog::{
    Category, FillerItem, TunaVariant, DELIVERY_FEE_RANGE, DELIVERY_TIME_CHOICES,
    OTHER_ITEM_AVAILABILITY, OTHER_SUSHI_ITEMS, TUNA_AVAILABILITY, TUNA_ROLL_VARIANTS,
};
pub use menu::{generate_menu, GeneratedMenu, MenuLineItem, OtherItem, MENU_NOTE};
pub use pricing::{
    calibrated_price, price_bounds, round_cents, snap_price, uniform, DEFAULT_PRICE_RANGE,
    TUNA_SHARE_OF_SPEND,
};
pub use ranking::{
    find_cheapest, find_tuna_options, next_deliverable, CheapestReport, TunaOption, RANKING_NOTE,
};
pub use restaurant::{PriceLevel, RestaurantMetadata, DEFAULT_RESTAURANT_NAME};
pub use seed::{seed_hex, seeded_rng, SeededRng, BASE_SUB_KEY, FALLBACK_RESTAURANT_ID};
