use crate::tools::{RegistryError, ToolRegistry};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

pub const PROTOCOL_VERSION: &str = "2024-11-05";

pub const PARSE_ERROR: i32 = -32700;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
    #[serde(default)]
    pub id: Option<Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
    pub id: Value,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcResponse {
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".into(),
            result: Some(result),
            error: None,
            id,
        }
    }

    pub fn error(id: Value, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".into(),
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
                data: None,
            }),
            id,
        }
    }
}

/// Serves MCP over stdin/stdout until stdin closes.
pub async fn run(registry: ToolRegistry) -> Result<()> {
    let reader = BufReader::new(tokio::io::stdin());
    serve(Arc::new(registry), reader, tokio::io::stdout()).await
}

/// Reads newline-delimited JSON-RPC from `reader` and writes responses to
/// `writer`. Tool calls run concurrently; everything else is answered inline.
pub async fn serve<R, W>(registry: Arc<ToolRegistry>, reader: R, mut writer: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let (tx, mut rx) = mpsc::unbounded_channel::<JsonRpcResponse>();
    let mut tx = Some(tx);
    let mut lines = reader.lines();
    let mut in_flight: HashMap<String, JoinHandle<()>> = HashMap::new();

    info!(tools = registry.len(), "MCP Server Ready. Waiting for JSON-RPC requests on stdin...");

    loop {
        tokio::select! {
            line = lines.next_line(), if tx.is_some() => {
                match line? {
                    Some(line) => {
                        if let Some(sender) = &tx {
                            in_flight.retain(|_, task| !task.is_finished());
                            dispatch(&line, &registry, sender, &mut in_flight);
                        }
                    }
                    None => {
                        debug!(pending = in_flight.len(), "stdin closed, draining in-flight calls");
                        // Dropping our sender lets the channel close once every task is done.
                        tx = None;
                    }
                }
            }
            Some(response) = rx.recv() => {
                let mut frame = serde_json::to_string(&response)?;
                frame.push('\n');
                writer.write_all(frame.as_bytes()).await?;
                writer.flush().await?;
            }
            else => break,
        }
    }

    Ok(())
}

fn dispatch(
    line: &str,
    registry: &Arc<ToolRegistry>,
    tx: &mpsc::UnboundedSender<JsonRpcResponse>,
    in_flight: &mut HashMap<String, JoinHandle<()>>,
) {
    if line.trim().is_empty() {
        return;
    }

    debug!(bytes = line.len(), "Received request");

    let req: JsonRpcRequest = match serde_json::from_str(line) {
        Ok(r) => r,
        Err(e) => {
            error!("Failed to parse JSON-RPC request: {}", e);
            let _ = tx.send(JsonRpcResponse::error(
                Value::Null,
                PARSE_ERROR,
                format!("Parse error: {}", e),
            ));
            return;
        }
    };

    let Some(id) = req.id.clone() else {
        handle_notification(&req, in_flight);
        return;
    };

    if req.method == "tools/call" {
        let key = id.to_string();
        if in_flight.contains_key(&key) {
            warn!(id = %key, "Rejected tools/call reusing an in-flight id");
            let _ = tx.send(JsonRpcResponse::error(
                id,
                INVALID_PARAMS,
                "Request id is already in use by a running call",
            ));
            return;
        }
        let registry = Arc::clone(registry);
        let tx = tx.clone();
        let task = tokio::spawn(async move {
            let response = call_tool(&registry, id, req.params).await;
            let _ = tx.send(response);
        });
        in_flight.insert(key, task);
        return;
    }

    let _ = tx.send(handle_request(&req, id, registry));
}

fn handle_notification(req: &JsonRpcRequest, in_flight: &mut HashMap<String, JoinHandle<()>>) {
    match req.method.as_str() {
        "notifications/cancelled" => {
            let request_id = req
                .params
                .as_ref()
                .and_then(|p| p.get("requestId"))
                .map(Value::to_string);
            if let Some(task) = request_id.and_then(|id| in_flight.remove(&id)) {
                task.abort();
                info!("Cancelled in-flight tool call");
            }
        }
        other => debug!(method = other, "Ignoring notification"),
    }
}

pub fn handle_request(req: &JsonRpcRequest, id: Value, registry: &ToolRegistry) -> JsonRpcResponse {
    match req.method.as_str() {
        "initialize" => JsonRpcResponse::success(
            id,
            json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": { "tools": {} },
                "serverInfo": {
                    "name": env!("CARGO_PKG_NAME"),
                    "version": env!("CARGO_PKG_VERSION")
                }
            }),
        ),
        "ping" => JsonRpcResponse::success(id, json!({})),
        "tools/list" => {
            let tool_list: Vec<Value> = registry.tools().iter().map(|t| t.definition()).collect();
            JsonRpcResponse::success(id, json!({ "tools": tool_list }))
        }
        _ => JsonRpcResponse::error(id, METHOD_NOT_FOUND, "Method not found"),
    }
}

pub async fn call_tool(registry: &ToolRegistry, id: Value, params: Option<Value>) -> JsonRpcResponse {
    let Some(params) = params else {
        return JsonRpcResponse::error(id, INVALID_PARAMS, "Missing params");
    };
    let Some(tool_name) = params.get("name").and_then(Value::as_str) else {
        return JsonRpcResponse::error(id, INVALID_PARAMS, "Missing 'name' parameter");
    };
    let args = params.get("arguments").cloned().unwrap_or(Value::Null);

    match registry.call(tool_name, args).await {
        Ok(result) => match serde_json::to_value(&result) {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(e) => JsonRpcResponse::error(id, INTERNAL_ERROR, e.to_string()),
        },
        Err(e @ RegistryError::UnknownTool(_)) => {
            warn!(tool = tool_name, "Unknown tool requested");
            JsonRpcResponse::error(id, METHOD_NOT_FOUND, e.to_string())
        }
        Err(e) => JsonRpcResponse::error(id, INVALID_PARAMS, e.to_string()),
    }
}
