use super::{schema, ToolHandler, ToolResult};
use jsonschema::Validator;
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("tool already registered: {0}")]
    DuplicateTool(String),

    #[error("invalid input schema for {tool}: {reason}")]
    InvalidSchema { tool: String, reason: String },

    #[error("Tool not found: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments for {tool}: {reason}")]
    InvalidArguments { tool: String, reason: String },
}

pub struct RegisteredTool {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
    validator: Validator,
    handler: Arc<dyn ToolHandler>,
}

impl RegisteredTool {
    /// Entry for a `tools/list` response.
    pub fn definition(&self) -> Value {
        json!({
            "name": self.name,
            "description": self.description,
            "inputSchema": self.input_schema
        })
    }

    pub async fn invoke(&self, args: Map<String, Value>) -> ToolResult {
        self.handler.call(args).await
    }
}

/// Tools keyed by name, listed in registration order.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<RegisteredTool>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: Value,
        handler: Arc<dyn ToolHandler>,
    ) -> Result<&RegisteredTool, RegistryError> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(RegistryError::DuplicateTool(name));
        }
        let validator = schema::compile(&input_schema).map_err(|reason| {
            RegistryError::InvalidSchema {
                tool: name.clone(),
                reason,
            }
        })?;

        let position = self.tools.len();
        self.index.insert(name.clone(), position);
        self.tools.push(RegisteredTool {
            name,
            description: description.into(),
            input_schema,
            validator,
            handler,
        });
        Ok(&self.tools[position])
    }

    pub fn get(&self, name: &str) -> Option<&RegisteredTool> {
        self.index.get(name).map(|&i| &self.tools[i])
    }

    pub fn tools(&self) -> &[RegisteredTool] {
        &self.tools
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Validates `arguments` against the tool's schema, then runs it.
    pub async fn call(&self, name: &str, arguments: Value) -> Result<ToolResult, RegistryError> {
        let tool = self
            .get(name)
            .ok_or_else(|| RegistryError::UnknownTool(name.to_string()))?;
        let args = schema::validate(&tool.validator, &tool.input_schema, arguments).map_err(|reason| {
            RegistryError::InvalidArguments {
                tool: name.to_string(),
                reason,
            }
        })?;
        Ok(tool.invoke(args).await)
    }
}
