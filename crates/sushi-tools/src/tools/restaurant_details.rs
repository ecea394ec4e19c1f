//! Restaurant details tool.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::error::ToolError;
use crate::search::RestaurantSearch;
use crate::tool::{Tool, ToolArgs, ToolOutput};

/// Get delivery, takeout and dine-in flags, opening hours, a summary and up
/// to three reviews for one restaurant found by `search_nearby_restaurants`.
///
/// # Parameters
///
/// - `place_id` (required): Places id from the search results.
///
/// An id the provider does not know returns a failed output with an
/// `error` message rather than an error, so a model can pick another place.
pub struct GetRestaurantDetails {
    provider: Arc<dyn RestaurantSearch>,
}

impl GetRestaurantDetails {
    /// Create the tool over a search provider.
    pub fn new(provider: Arc<dyn RestaurantSearch>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Tool for GetRestaurantDetails {
    fn name(&self) -> &str {
        "get_restaurant_details"
    }

    fn description(&self) -> &str {
        "Get detailed information about a specific restaurant: delivery, takeout and dine-in \
         availability, opening hours, a summary and recent reviews. Use this after \
         search_nearby_restaurants, passing a restaurant's id as place_id."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "place_id": {
                    "type": "string",
                    "description": "Places id of the restaurant, from search results"
                }
            },
            "required": ["place_id"]
        })
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let place_id = args.get_string("place_id")?;
        if place_id.trim().is_empty() {
            return Err(ToolError::invalid("place_id", "must not be empty"));
        }

        match self.provider.details(&place_id).await? {
            Some(details) => {
                debug!(
                    "Provider '{}' returned details for {} with {} reviews",
                    self.provider.name(),
                    place_id,
                    details.reviews.len()
                );
                ToolOutput::json(&details)
            }
            None => {
                warn!("No place with id '{}'", place_id);
                Ok(ToolOutput::failure(
                    json!({"error": format!("No restaurant found with id '{}'", place_id)})
                        .to_string(),
                ))
            }
        }
    }
}
