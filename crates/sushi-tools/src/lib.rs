//! Tool registry and tools for the sushi-scout agent.
//!
//! This crate exposes the cheapest-tuna-roll workflow as tools a
//! tool-calling model can invoke by name with JSON arguments. Tools are
//! registered in a [`ToolRegistry`], described to a model with
//! [`ToolRegistry::tool_definitions`] and dispatched with
//! [`ToolRegistry::execute`] or [`ToolRegistry::execute_json`].
//!
//! # Built-in Tools
//!
//! - [`SearchNearbyRestaurants`] - Sushi restaurants near a point, via a
//!   [`RestaurantSearch`] provider ([`DemoRestaurants`] or [`PlacesFixture`]).
//! - [`GetRestaurantDetails`] - Service options, hours and reviews for one place.
//! - [`GetRestaurantMenu`] - Synthetic menu calibrated to the price tier.
//! - [`FindCheapestTunaRoll`] - Ranks available tuna rolls across restaurants.
//! - [`PlaceOrder`] - Simulated order confirmation with tax and delivery fee.
//! - [`CheckOrderStatus`] - Simulated order status timeline.
//!
//! # Example
//!
//! ```rust,ignore
//! use sushi_tools::default_registry;
//!
//! #[tokio::main]
//! async fn main() {
//!     let registry = default_registry();
//!
//!     let result = registry
//!         .execute_json(
//!             "get_restaurant_menu",
//!             r#"{"restaurant_id": "abc", "price_level": "PRICE_LEVEL_MODERATE"}"#,
//!         )
//!         .await
//!         .unwrap();
//!     println!("{}", result.content);
//! }
//! ```

mod error;
pub mod ordering;
pub mod places;
mod registry;
pub mod search;
mod tool;
pub mod tools;

use std::sync::Arc;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use search::{DemoRestaurants, PlacesFixture, RestaurantSearch, SearchArea};
pub use tool::{Tool, ToolArgs, ToolOutput};
pub use tools::{
    CheckOrderStatus, FindCheapestTunaRoll, GetRestaurantDetails, GetRestaurantMenu, PlaceOrder,
    SearchNearbyRestaurants,
};

// Re-export async_trait for convenience
pub use async_trait::async_trait;

/// Create a registry with all sushi tools, searching `provider`.
pub fn registry_with_search(provider: Arc<dyn RestaurantSearch>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    registry.register(SearchNearbyRestaurants::new(provider.clone()));
    registry.register(GetRestaurantDetails::new(provider));
    registry.register(GetRestaurantMenu::new());
    registry.register(FindCheapestTunaRoll::new());
    registry.register(PlaceOrder::new());
    registry.register(CheckOrderStatus::new());

    registry
}

/// Create a registry with all sushi tools over the built-in demo restaurants.
pub fn default_registry() -> ToolRegistry {
    registry_with_search(Arc::new(DemoRestaurants::new()))
}
