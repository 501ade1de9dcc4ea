use super::{schema, RegistryError, ToolHandler, ToolRegistry, ToolResult};
use crate::api::{self, Operation};
use crate::etherscan::OperationClient;
use serde_json::{Map, Value};
use std::fmt::Display;
use std::sync::Arc;
use tracing::{info, warn};

pub const TOOL_PREFIX: &str = "ETHERSCAN_";

pub fn tool_name(operation: &Operation) -> String {
    format!("{}{}", TOOL_PREFIX, operation.name)
}

/// Forwards validated tool input to one catalog operation.
pub struct OperationTool {
    name: String,
    operation: &'static Operation,
    client: Arc<dyn OperationClient>,
}

impl OperationTool {
    pub fn new(operation: &'static Operation, client: Arc<dyn OperationClient>) -> Self {
        Self {
            name: tool_name(operation),
            operation,
            client,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn failure(&self, err: impl Display) -> ToolResult {
        warn!(tool = %self.name, error = %err, "Tool call failed");
        ToolResult::error(format!("Error in {}: {}", self.name, err))
    }
}

#[async_trait::async_trait]
impl ToolHandler for OperationTool {
    async fn call(&self, args: Map<String, Value>) -> ToolResult {
        match self.client.execute(self.operation, &args).await {
            Ok(body) => match serde_json::to_string_pretty(&body) {
                Ok(text) => ToolResult::text(text),
                Err(e) => self.failure(e),
            },
            Err(e) => self.failure(e),
        }
    }
}

/// Registers one tool per operation in `operations`.
pub fn register_operations(
    registry: &mut ToolRegistry,
    client: Arc<dyn OperationClient>,
    operations: impl IntoIterator<Item = &'static Operation>,
) -> Result<usize, RegistryError> {
    let mut count = 0;
    for operation in operations {
        let tool = OperationTool::new(operation, Arc::clone(&client));
        registry.register(
            tool.name().to_string(),
            operation.description,
            schema::input_schema(operation),
            Arc::new(tool),
        )?;
        count += 1;
    }
    Ok(count)
}

/// Registers the whole Etherscan catalog.
pub fn register_etherscan_tools(
    registry: &mut ToolRegistry,
    client: Arc<dyn OperationClient>,
) -> Result<usize, RegistryError> {
    let count = register_operations(registry, client, api::catalog())?;
    info!(count, "Registered Etherscan tools");
    Ok(count)
}
