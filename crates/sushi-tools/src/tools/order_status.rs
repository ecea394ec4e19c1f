//! Simulated order status tool.

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::ToolError;
use crate::ordering::order_status;
use crate::tool::{Tool, ToolArgs, ToolOutput};

/// Check the status of a simulated order.
///
/// Every order id reports the same "preparing" timeline.
pub struct CheckOrderStatus;

impl CheckOrderStatus {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CheckOrderStatus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for CheckOrderStatus {
    fn name(&self) -> &str {
        "check_order_status"
    }

    fn description(&self) -> &str {
        "Check the status of a simulated order. Parameter: order_id from the place_order \
         confirmation."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "order_id": {
                    "type": "string",
                    "description": "Order id from the place_order confirmation"
                }
            },
            "required": ["order_id"]
        })
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let order_id = args.get_string("order_id")?;
        ToolOutput::json(&order_status(&order_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_status() {
        let mut params = HashMap::new();
        params.insert("order_id".to_string(), Value::String("SS-1234ABCD".to_string()));
        let output = CheckOrderStatus::new().execute(ToolArgs::new(params)).await.unwrap();
        let value = output.parse_json().unwrap();
        assert_eq!(value["order_id"], "SS-1234ABCD");
        assert_eq!(value["status"], "preparing");
        assert_eq!(value["timeline"].as_array().unwrap().len(), 4);
    }
}
