//! Simulated order placement tool.

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::info;

use crate::error::ToolError;
use crate::ordering::{current_unix_minute, place_order, OrderRequest};
use crate::tool::{Tool, ToolArgs, ToolOutput};

/// Place a simulated delivery order for a menu item.
///
/// # Parameters
///
/// - `restaurant_id`, `restaurant_name`, `item_name` (required)
/// - `item_price` (required): Price of the item, in dollars.
/// - `delivery_address` (required)
/// - `delivery_fee` (optional): Defaults to 0.0.
/// - `special_instructions` (optional): Empty means none.
///
/// Returns an order id, the delivery estimate and a cost breakdown including
/// 8.75% tax on the item. No real order is placed.
pub struct PlaceOrder {
    /// Fixed clock minute for order ids; `None` reads the system clock.
    fixed_minute: Option<u64>,
}

impl PlaceOrder {
    pub fn new() -> Self {
        Self { fixed_minute: None }
    }

    /// Use a fixed clock minute so order ids are reproducible.
    pub fn with_fixed_minute(minute: u64) -> Self {
        Self {
            fixed_minute: Some(minute),
        }
    }
}

impl Default for PlaceOrder {
    fn default() -> Self {
        Self::new()
    }
}

fn non_negative(name: &str, value: f64) -> Result<f64, ToolError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ToolError::invalid(name, "must be a non-negative amount"))
    }
}

#[async_trait]
impl Tool for PlaceOrder {
    fn name(&self) -> &str {
        "place_order"
    }

    fn description(&self) -> &str {
        "Place a simulated delivery order for a menu item. Parameters: restaurant_id, \
         restaurant_name, item_name, item_price, delivery_address, delivery_fee (default 0), \
         special_instructions. Returns order id, estimated delivery time and cost breakdown."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "restaurant_id": {"type": "string", "description": "Places id of the restaurant"},
                "restaurant_name": {"type": "string", "description": "Display name of the restaurant"},
                "item_name": {"type": "string", "description": "Menu item to order"},
                "item_price": {"type": "number", "minimum": 0, "description": "Item price in dollars"},
                "delivery_address": {"type": "string", "description": "Where to deliver the order"},
                "delivery_fee": {"type": "number", "minimum": 0, "default": 0, "description": "Delivery fee in dollars"},
                "special_instructions": {"type": "string", "description": "Notes for the restaurant"}
            },
            "required": ["restaurant_id", "restaurant_name", "item_name", "item_price", "delivery_address"]
        })
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let request = OrderRequest {
            restaurant_id: args.get_string("restaurant_id")?,
            restaurant_name: args.get_string("restaurant_name")?,
            item_name: args.get_string("item_name")?,
            item_price: non_negative("item_price", args.get_f64("item_price")?)?,
            delivery_address: args.get_string("delivery_address")?,
            delivery_fee: non_negative(
                "delivery_fee",
                args.get_number_opt("delivery_fee")?.unwrap_or(0.0),
            )?,
            special_instructions: args.get_string_opt("special_instructions")?,
        };

        let minute = self.fixed_minute.unwrap_or_else(current_unix_minute);
        let confirmation = place_order(request, minute);
        info!(
            "Simulated order {} for '{}' at {}",
            confirmation.order_id, confirmation.item.name, confirmation.restaurant.name
        );

        ToolOutput::json(&confirmation)
    }
}
