//! Error types for tool operations.

use thiserror::Error;

/// Errors that can occur during tool execution.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Tool not found in registry.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Missing required parameter.
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    /// Invalid parameter value.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// JSON parsing or serialization failed.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The restaurant-search provider could not produce results.
    #[error("Restaurant search failed: {0}")]
    SearchFailed(String),
}

impl ToolError {
    pub(crate) fn invalid(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
