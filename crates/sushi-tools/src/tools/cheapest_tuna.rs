//! Cheapest tuna roll tool.

use async_trait::async_trait;
use menu_synth::{find_cheapest, RestaurantMetadata};
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::error::ToolError;
use crate::tool::{Tool, ToolArgs, ToolOutput};

const INVALID_JSON: &str = "Invalid JSON. Pass the 'restaurants' array as a JSON string.";

/// Find the cheapest available tuna roll across several restaurants.
///
/// # Parameters
///
/// - `restaurants_json` (required): The `restaurants` array from
///   `search_nearby_restaurants`, as a JSON string. A bare JSON array is
///   accepted too.
///
/// Malformed input produces a failed output with an `error` message rather
/// than a tool error, so the model can correct its call.
pub struct FindCheapestTunaRoll;

impl FindCheapestTunaRoll {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FindCheapestTunaRoll {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_restaurants(raw: &Value) -> Option<Vec<RestaurantMetadata>> {
    match raw {
        Value::String(s) => serde_json::from_str(s).ok(),
        Value::Array(_) => serde_json::from_value(raw.clone()).ok(),
        _ => None,
    }
}

#[async_trait]
impl Tool for FindCheapestTunaRoll {
    fn name(&self) -> &str {
        "find_cheapest_tuna_roll"
    }

    fn description(&self) -> &str {
        "Find the cheapest tuna roll across multiple restaurants. Parameter: restaurants_json, \
         the 'restaurants' array from search_nearby_restaurants as a JSON string. Returns all \
         available tuna rolls ranked by price with delivery info."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "restaurants_json": {
                    "type": ["string", "array"],
                    "description": "The 'restaurants' array from search_nearby_restaurants, as a JSON string"
                }
            },
            "required": ["restaurants_json"]
        })
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let raw = args
            .get_value("restaurants_json")
            .ok_or_else(|| ToolError::MissingParameter("restaurants_json".to_string()))?;

        let Some(restaurants) = parse_restaurants(raw) else {
            warn!("find_cheapest_tuna_roll received unparsable restaurants_json");
            return Ok(ToolOutput::failure(json!({ "error": INVALID_JSON }).to_string()));
        };

        debug!("Ranking tuna rolls across {} restaurants", restaurants.len());
        ToolOutput::json(&find_cheapest(&restaurants))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::demo_restaurants;
    use std::collections::HashMap;

    fn make_args(restaurants_json: Value) -> ToolArgs {
        let mut params = HashMap::new();
        params.insert("restaurants_json".to_string(), restaurants_json);
        ToolArgs::new(params)
    }

    #[tokio::test]
    async fn test_finds_cheapest() {
        let restaurants = serde_json::to_string(&demo_restaurants()).unwrap();
        let output = FindCheapestTunaRoll::new()
            .execute(make_args(Value::String(restaurants)))
            .await
            .unwrap();
        assert!(output.success);

        let report = output.parse_json().unwrap();
        assert_eq!(report["total_restaurants_checked"], 5);
        let options = report["all_options"].as_array().unwrap();
        assert_eq!(report["total_options_found"], options.len());
        let cheapest = report["cheapest"]["price"].as_f64().unwrap();
        for option in options {
            assert!(option["price"].as_f64().unwrap() >= cheapest);
        }
        assert_ne!(report["cheapest"]["restaurant_name"], "Zen Omakase");
    }

    #[tokio::test]
    async fn test_accepts_bare_array() {
        let output = FindCheapestTunaRoll::new()
            .execute(make_args(json!([{"id": "a", "price_level": "PRICE_LEVEL_FREE"}])))
            .await
            .unwrap();
        assert!(output.success);
        assert_eq!(output.parse_json().unwrap()["total_restaurants_checked"], 1);
    }

    #[tokio::test]
    async fn test_accepts_float_and_negative_price_range() {
        let restaurants = r#"[
            {"id": "a", "price_level": "PRICE_LEVEL_MODERATE", "price_range_low": 20.0},
            {"id": "b", "price_level": "PRICE_LEVEL_MODERATE", "price_range_low": -1}
        ]"#;
        let output = FindCheapestTunaRoll::new()
            .execute(make_args(Value::String(restaurants.to_string())))
            .await
            .unwrap();
        assert!(output.success);
        assert_eq!(output.parse_json().unwrap()["total_restaurants_checked"], 2);
    }

    #[tokio::test]
    async fn test_empty_list() {
        let output = FindCheapestTunaRoll::new()
            .execute(make_args(Value::String("[]".to_string())))
            .await
            .unwrap();
        let report = output.parse_json().unwrap();
        assert!(report["cheapest"].is_null());
        assert_eq!(report["total_options_found"], 0);
    }

    #[tokio::test]
    async fn test_invalid_json() {
        let output = FindCheapestTunaRoll::new()
            .execute(make_args(Value::String("not json".to_string())))
            .await
            .unwrap();
        assert!(!output.success);
        assert_eq!(output.parse_json().unwrap()["error"], INVALID_JSON);
    }

    #[tokio::test]
    async fn test_missing_parameter() {
        let result = FindCheapestTunaRoll::new().execute(ToolArgs::default()).await;
        assert!(matches!(result, Err(ToolError::MissingParameter(_))));
    }
}
