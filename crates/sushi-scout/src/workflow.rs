//! Search, rank and order through the tool registry.

use menu_synth::{next_deliverable, CheapestReport, RestaurantMetadata, TunaOption};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use sushi_tools::ordering::OrderConfirmation;
use sushi_tools::places::RestaurantDetails;
use sushi_tools::{SearchArea, ToolError, ToolRegistry};
use tracing::{debug, info};

/// Errors from a workflow step.
#[derive(Debug, thiserror::Error)]
pub enum ScoutError {
    #[error(transparent)]
    Tool(#[from] ToolError),

    #[error("Tool '{tool}' failed: {message}")]
    ToolFailed { tool: String, message: String },

    #[error("Cannot encode arguments for '{tool}': {source}")]
    Encode {
        tool: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unexpected output from '{tool}': {source}")]
    Decode {
        tool: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Drives the tools the way a tool-calling model would.
pub struct Scout {
    registry: ToolRegistry,
}

impl Scout {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    /// Definitions of the tools this scout can call.
    pub fn tool_definitions(&self) -> Vec<Value> {
        self.registry.tool_definitions()
    }

    async fn call<T: DeserializeOwned>(&self, tool: &str, args: Value) -> Result<T, ScoutError> {
        debug!("Calling {} with {}", tool, args);
        let output = self.registry.execute_json(tool, &args.to_string()).await?;
        if !output.success {
            return Err(ScoutError::ToolFailed {
                tool: tool.to_string(),
                message: output.content,
            });
        }
        serde_json::from_str(&output.content).map_err(|source| ScoutError::Decode {
            tool: tool.to_string(),
            source,
        })
    }

    /// Sushi restaurants in `area`.
    pub async fn search(&self, area: &SearchArea) -> Result<Vec<RestaurantMetadata>, ScoutError> {
        #[derive(serde::Deserialize)]
        struct SearchResult {
            restaurants: Vec<RestaurantMetadata>,
        }

        let result: SearchResult = self
            .call(
                "search_nearby_restaurants",
                json!({
                    "latitude": area.latitude,
                    "longitude": area.longitude,
                    "radius_miles": area.radius_miles,
                }),
            )
            .await?;
        info!("Found {} restaurants", result.restaurants.len());
        Ok(result.restaurants)
    }

    /// Hours, service options and reviews for one restaurant.
    pub async fn details(&self, place_id: &str) -> Result<RestaurantDetails, ScoutError> {
        self.call("get_restaurant_details", json!({ "place_id": place_id }))
            .await
    }

    /// Rank the available tuna rolls across `restaurants`.
    pub async fn rank(
        &self,
        restaurants: &[RestaurantMetadata],
    ) -> Result<CheapestReport, ScoutError> {
        let encoded = serde_json::to_string(restaurants).map_err(|source| ScoutError::Encode {
            tool: "find_cheapest_tuna_roll".to_string(),
            source,
        })?;
        let report: CheapestReport = self
            .call(
                "find_cheapest_tuna_roll",
                json!({ "restaurants_json": encoded }),
            )
            .await?;
        info!(
            "Ranked {} tuna options from {} restaurants",
            report.total_options_found, report.total_restaurants_checked
        );
        Ok(report)
    }

    /// Place a simulated order for `option`, delivered to `address`.
    pub async fn order(
        &self,
        option: &TunaOption,
        address: &str,
    ) -> Result<OrderConfirmation, ScoutError> {
        let confirmation: OrderConfirmation = self
            .call(
                "place_order",
                json!({
                    "restaurant_id": option.restaurant_id,
                    "restaurant_name": option.restaurant_name,
                    "item_name": option.item_name,
                    "item_price": option.price,
                    "delivery_address": address,
                    "delivery_fee": option.delivery_fee.unwrap_or(0.0),
                }),
            )
            .await?;
        info!("Order {} confirmed", confirmation.order_id);
        Ok(confirmation)
    }
}

/// The option to order: the cheapest if it delivers, otherwise the next
/// cheapest that does.
pub fn order_choice(report: &CheapestReport) -> Option<&TunaOption> {
    match report.cheapest.as_ref() {
        Some(cheapest) if cheapest.delivery_available => Some(cheapest),
        _ => next_deliverable(&report.all_options),
    }
}
