pub mod etherscan;
pub mod registry;
pub mod schema;

pub use registry::{RegisteredTool, RegistryError, ToolRegistry};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[async_trait::async_trait]
pub trait ToolHandler: Send + Sync {
    /// Runs the tool on schema-validated input. Failures come back as an
    /// error-flagged result, never as a panic or `Err`.
    async fn call(&self, args: Map<String, Value>) -> ToolResult;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Content {
    Text { text: String },
}

/// Payload of a `tools/call` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResult {
    pub content: Vec<Content>,
    #[serde(rename = "isError", default, skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

impl ToolResult {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![Content::Text { text: text.into() }],
            is_error: None,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            content: vec![Content::Text { text: text.into() }],
            is_error: Some(true),
        }
    }

    pub fn failed(&self) -> bool {
        self.is_error.unwrap_or(false)
    }

    /// Text of the first content block.
    pub fn first_text(&self) -> Option<&str> {
        self.content.first().map(|Content::Text { text }| text.as_str())
    }
}
