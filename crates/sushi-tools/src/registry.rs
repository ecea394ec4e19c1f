//! Tool registry: dispatch by name and tool definitions for a model.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{json, Value};
use tracing::{debug, info};

use crate::error::ToolError;
use crate::tool::{Tool, ToolArgs, ToolOutput};

/// Registry of the tools a model may call.
///
/// Dispatch checks the arguments named `required` in a tool's
/// [`Tool::parameters_schema`] before the tool runs, so every tool reports a
/// missing argument the same way.
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

fn required_parameters(schema: &Value) -> impl Iterator<Item = &str> {
    schema
        .get("required")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool, replacing any tool with the same name.
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        let name = tool.name().to_string();
        info!("Registering tool: {}", name);
        self.tools.insert(name, Arc::new(tool));
    }

    /// Registered tool names, sorted.
    pub fn list_tools(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Function-calling definitions for every tool, sorted by name.
    ///
    /// Each entry has the shape
    /// `{"name": ..., "description": ..., "parameters": <JSON Schema>}`.
    pub fn tool_definitions(&self) -> Vec<Value> {
        let mut tools: Vec<&Arc<dyn Tool>> = self.tools.values().collect();
        tools.sort_unstable_by(|a, b| a.name().cmp(b.name()));
        tools
            .into_iter()
            .map(|t| {
                json!({
                    "name": t.name(),
                    "description": t.description(),
                    "parameters": t.parameters_schema(),
                })
            })
            .collect()
    }

    /// Execute a tool by name with the given parameters.
    pub async fn execute(
        &self,
        name: &str,
        params: HashMap<String, Value>,
    ) -> Result<ToolOutput, ToolError> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| ToolError::NotFound(name.to_string()))?;

        let schema = tool.parameters_schema();
        if let Some(missing) = required_parameters(&schema)
            .find(|key| params.get(*key).map_or(true, Value::is_null))
        {
            return Err(ToolError::MissingParameter(missing.to_string()));
        }

        debug!("Executing tool '{}' with {} params", name, params.len());

        let result = tool.execute(ToolArgs::new(params)).await?;

        debug!(
            "Tool '{}' completed: success={}, content_len={}",
            name,
            result.success,
            result.content.len()
        );

        Ok(result)
    }

    /// Execute a tool with a JSON object of arguments, as a model sends them.
    pub async fn execute_json(
        &self,
        name: &str,
        args_json: &str,
    ) -> Result<ToolOutput, ToolError> {
        let params: HashMap<String, Value> = serde_json::from_str(args_json)?;
        self.execute(name, params).await
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{CheckOrderStatus, GetRestaurantMenu, PlaceOrder};

    fn registry() -> ToolRegistry {
        let mut registry = ToolRegistry::new();
        registry.register(PlaceOrder::new());
        registry.register(CheckOrderStatus::new());
        registry.register(GetRestaurantMenu::new());
        registry
    }

    #[test]
    fn test_list_tools_sorted() {
        assert_eq!(
            registry().list_tools(),
            vec!["check_order_status", "get_restaurant_menu", "place_order"]
        );
    }

    #[test]
    fn test_tool_definitions() {
        let definitions = registry().tool_definitions();
        assert_eq!(definitions.len(), 3);
        assert_eq!(definitions[0]["name"], "check_order_status");
        assert_eq!(definitions[0]["parameters"]["required"], json!(["order_id"]));

        let menu = &definitions[1];
        assert_eq!(menu["parameters"]["type"], "object");
        assert_eq!(
            menu["parameters"]["properties"]["price_level"]["enum"][2],
            "PRICE_LEVEL_MODERATE"
        );
        for definition in &definitions {
            assert!(!definition["description"].as_str().unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn test_execute_json() {
        let result = registry()
            .execute_json("check_order_status", r#"{"order_id": "SS-1234ABCD"}"#)
            .await
            .unwrap();
        assert!(result.success);
        assert_eq!(result.parse_json().unwrap()["order_id"], "SS-1234ABCD");
    }

    #[tokio::test]
    async fn test_not_found() {
        let result = registry().execute("order_pizza", HashMap::new()).await;
        assert!(matches!(result, Err(ToolError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_required_checked_before_dispatch() {
        let args = json!({
            "restaurant_id": "r1",
            "restaurant_name": "R1",
            "item_name": "Tuna Roll",
            "item_price": 8.49,
            "delivery_address": null
        });
        let result = registry().execute_json("place_order", &args.to_string()).await;
        assert!(
            matches!(result, Err(ToolError::MissingParameter(name)) if name == "delivery_address")
        );
    }

    #[tokio::test]
    async fn test_optional_arguments_may_be_omitted() {
        let result = registry()
            .execute_json("get_restaurant_menu", r#"{"restaurant_id": "abc"}"#)
            .await
            .unwrap();
        assert!(result.success);
    }
}
