//! Tool trait definition and types.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ToolError;

/// Arguments passed to a tool for execution.
///
/// Optional getters treat an explicit JSON `null` the same as a missing key,
/// since model-generated tool calls often spell out unset arguments.
#[derive(Debug, Clone, Default)]
pub struct ToolArgs {
    /// Parameters as key-value pairs.
    pub params: HashMap<String, Value>,
}

impl ToolArgs {
    /// Create new tool arguments with the given parameters.
    pub fn new(params: HashMap<String, Value>) -> Self {
        Self { params }
    }

    fn present(&self, key: &str) -> Option<&Value> {
        self.params.get(key).filter(|v| !v.is_null())
    }

    /// Get a string parameter, returning an error if missing or not a string.
    pub fn get_string(&self, key: &str) -> Result<String, ToolError> {
        self.present(key)
            .ok_or_else(|| ToolError::MissingParameter(key.to_string()))?
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| ToolError::invalid(key, "expected string"))
    }

    /// Get an optional string parameter.
    pub fn get_string_opt(&self, key: &str) -> Result<Option<String>, ToolError> {
        match self.present(key) {
            Some(v) => v
                .as_str()
                .map(|s| Some(s.to_string()))
                .ok_or_else(|| ToolError::invalid(key, "expected string")),
            None => Ok(None),
        }
    }

    /// Get an f64 parameter, returning an error if missing or not a number.
    pub fn get_f64(&self, key: &str) -> Result<f64, ToolError> {
        self.present(key)
            .ok_or_else(|| ToolError::MissingParameter(key.to_string()))?
            .as_f64()
            .ok_or_else(|| ToolError::invalid(key, "expected number"))
    }

    /// Get an optional f64 parameter.
    pub fn get_number_opt(&self, key: &str) -> Result<Option<f64>, ToolError> {
        match self.present(key) {
            Some(v) => {
                let num = v
                    .as_f64()
                    .ok_or_else(|| ToolError::invalid(key, "expected number"))?;
                Ok(Some(num))
            }
            None => Ok(None),
        }
    }

    /// Get an optional non-negative integer parameter.
    ///
    /// Whole-valued floats such as `20.0` are accepted.
    pub fn get_u32_opt(&self, key: &str) -> Result<Option<u32>, ToolError> {
        let Some(num) = self.get_number_opt(key)? else {
            return Ok(None);
        };
        if num < 0.0 || num.fract() != 0.0 || num > f64::from(u32::MAX) {
            return Err(ToolError::invalid(key, "expected a non-negative whole number"));
        }
        Ok(Some(num as u32))
    }

    /// Get an optional boolean parameter.
    pub fn get_bool_opt(&self, key: &str) -> Result<Option<bool>, ToolError> {
        match self.present(key) {
            Some(v) => {
                let b = v
                    .as_bool()
                    .ok_or_else(|| ToolError::invalid(key, "expected boolean"))?;
                Ok(Some(b))
            }
            None => Ok(None),
        }
    }

    /// Raw parameter value, if present and not null.
    pub fn get_value(&self, key: &str) -> Option<&Value> {
        self.present(key)
    }
}

/// Output from a tool execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolOutput {
    /// The result content (text or JSON).
    pub content: String,
    /// Whether the execution was successful.
    pub success: bool,
}

impl ToolOutput {
    /// Create a successful output.
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            success: true,
        }
    }

    /// Create a failed output.
    pub fn failure(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            success: false,
        }
    }

    /// Create a successful output holding `value` serialized as JSON.
    pub fn json<T: Serialize>(value: &T) -> Result<Self, ToolError> {
        Ok(Self::success(serde_json::to_string(value)?))
    }

    /// Parse the content back into a JSON value.
    pub fn parse_json(&self) -> Result<Value, ToolError> {
        Ok(serde_json::from_str(&self.content)?)
    }
}

/// Trait for tools exposed to a tool-calling model.
///
/// Tools take JSON parameters and return JSON content. Tools that only
/// compute (menus, ranking, ordering) never fail for well-typed input.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The tool's unique name (used for dispatch).
    fn name(&self) -> &str;

    /// Human-readable description of what the tool does.
    fn description(&self) -> &str;

    /// JSON Schema for the tool's arguments.
    ///
    /// Names listed under `required` are checked by the registry before
    /// dispatch.
    fn parameters_schema(&self) -> Value;

    /// Execute the tool with the given arguments.
    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError>;
}
