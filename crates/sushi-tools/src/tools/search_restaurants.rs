//! Nearby restaurant search tool.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::error::ToolError;
use crate::search::{RestaurantSearch, SearchArea, DEFAULT_RADIUS_MILES};
use crate::tool::{Tool, ToolArgs, ToolOutput};

/// Search for sushi and Japanese restaurants near a location.
///
/// # Parameters
///
/// - `latitude` (required): Latitude of the search center.
/// - `longitude` (required): Longitude of the search center.
/// - `radius_miles` (optional): Search radius in miles. Defaults to 2.0.
///
/// # Output
///
/// ```json
/// {"count": 5, "radius_miles": 2.0,
///  "center": {"latitude": 37.77, "longitude": -122.42},
///  "restaurants": [{"id": "...", "name": "...", "price_level": "PRICE_LEVEL_MODERATE", ...}]}
/// ```
///
/// The `restaurants` array can be passed unchanged to `find_cheapest_tuna_roll`.
pub struct SearchNearbyRestaurants {
    provider: Arc<dyn RestaurantSearch>,
}

impl SearchNearbyRestaurants {
    /// Create the tool over a search provider.
    pub fn new(provider: Arc<dyn RestaurantSearch>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Tool for SearchNearbyRestaurants {
    fn name(&self) -> &str {
        "search_nearby_restaurants"
    }

    fn description(&self) -> &str {
        "Search for sushi and Japanese restaurants near a location. Parameters: latitude, \
         longitude, radius_miles (default 2.0, max ~31). Returns ratings, price tiers and \
         price ranges. Use this as the first step to find cheap tuna rolls nearby."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "latitude": {"type": "number", "minimum": -90, "maximum": 90, "description": "Latitude of the search center"},
                "longitude": {"type": "number", "minimum": -180, "maximum": 180, "description": "Longitude of the search center"},
                "radius_miles": {
                    "type": "number",
                    "exclusiveMinimum": 0,
                    "default": DEFAULT_RADIUS_MILES,
                    "description": "Search radius in miles (max ~31)"
                }
            },
            "required": ["latitude", "longitude"]
        })
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let latitude = args.get_f64("latitude")?;
        let longitude = args.get_f64("longitude")?;
        let radius_miles = args
            .get_number_opt("radius_miles")?
            .unwrap_or(DEFAULT_RADIUS_MILES);

        let area = SearchArea::new(latitude, longitude, radius_miles).map_err(|e| {
            warn!("Rejected search area: {}", e);
            e
        })?;

        let restaurants = self.provider.search(&area).await?;
        debug!(
            "Provider '{}' returned {} restaurants",
            self.provider.name(),
            restaurants.len()
        );

        ToolOutput::json(&json!({
            "count": restaurants.len(),
            "radius_miles": radius_miles,
            "center": {"latitude": latitude, "longitude": longitude},
            "restaurants": restaurants,
        }))
    }
}
