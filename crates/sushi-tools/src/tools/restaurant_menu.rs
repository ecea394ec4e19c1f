//! Restaurant menu tool.

use async_trait::async_trait;
use menu_synth::{generate_menu, PriceLevel, RestaurantMetadata};
use serde_json::{json, Value};
use tracing::debug;

use crate::error::ToolError;
use crate::tool::{Tool, ToolArgs, ToolOutput};

/// Get a restaurant's menu, including tuna roll options with prices.
///
/// Menu data is synthetic but calibrated to the restaurant's price tier, and
/// identical arguments always return the identical menu.
///
/// # Parameters
///
/// - `restaurant_id` (required): Places id of the restaurant.
/// - `restaurant_name` (optional): Display name. Defaults to `""`.
/// - `price_level` (optional): Tier from search results, e.g. `PRICE_LEVEL_MODERATE`.
///   Unrecognized values fall back to the default price band.
/// - `price_range_low` (optional): Low end of the per-person price range, in dollars.
/// - `delivery` (optional): Whether the restaurant delivers.
pub struct GetRestaurantMenu;

impl GetRestaurantMenu {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GetRestaurantMenu {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for GetRestaurantMenu {
    fn name(&self) -> &str {
        "get_restaurant_menu"
    }

    fn description(&self) -> &str {
        "Get the menu for a restaurant, including tuna roll options with prices. Parameters: \
         restaurant_id, restaurant_name, price_level, price_range_low, delivery (all from \
         search results). Prices are synthetic, calibrated to the restaurant's price tier, \
         and deterministic per restaurant."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "restaurant_id": {"type": "string", "description": "Places id of the restaurant"},
                "restaurant_name": {"type": "string", "description": "Display name of the restaurant"},
                "price_level": {
                    "type": "string",
                    "enum": PriceLevel::ALL.iter().map(|level| level.as_str()).collect::<Vec<_>>(),
                    "description": "Price tier from search results"
                },
                "price_range_low": {
                    "type": "integer",
                    "minimum": 0,
                    "description": "Low end of the per-person price range, in dollars"
                },
                "delivery": {"type": "boolean", "description": "Whether the restaurant delivers"}
            },
            "required": ["restaurant_id"]
        })
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let restaurant_id = args.get_string("restaurant_id")?;
        let restaurant_name = args.get_string_opt("restaurant_name")?.unwrap_or_default();
        let price_level = args.get_string_opt("price_level")?;

        let restaurant = RestaurantMetadata {
            id: Some(restaurant_id),
            name: Some(restaurant_name),
            price_level: price_level.as_deref().and_then(PriceLevel::parse),
            price_range_low: args.get_u32_opt("price_range_low")?,
            delivery: args.get_bool_opt("delivery")?,
            ..RestaurantMetadata::default()
        };

        if price_level.is_some() && restaurant.price_level.is_none() {
            debug!("Unrecognized price level {:?}, using default band", price_level);
        }

        ToolOutput::json(&generate_menu(&restaurant))
    }
}
