//! Tool invocation client: one MCP call against a child-process server.
//!
//! Each call spawns the tool server as a child process, opens a stdio
//! session, issues exactly one `call_tool`, decodes the first text
//! content block, and tears the session down — on success, tool error,
//! decode failure, and timeout alike. Every failure surfaces as a
//! [`ToolError`]; nothing raises past this boundary, and there are no
//! internal retries (retry policy belongs to the caller's model, which
//! sees the failure in its history).

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use rmcp::model::{CallToolRequestParam, CallToolResult};
use rmcp::service::{RoleClient, RunningService};
use rmcp::transport::{ConfigureCommandExt, TokioChildProcess};
use rmcp::ServiceExt;
use serde_json::Value;
use tokio::process::Command;

use crate::agent::{JsonObject, ToolError, ToolInvoker};
use crate::config::AgentConfig;

/// MCP client that spawns the configured server command per call.
pub struct McpToolClient {
    program: PathBuf,
    args: Vec<String>,
    timeout: Duration,
}

impl McpToolClient {
    /// Resolve the server command from config. An empty `server_command`
    /// means the current executable with the `serve` argument — the
    /// binary is its own tool server.
    pub fn from_config(config: &AgentConfig) -> Result<Self> {
        let (program, args) = match config.server_command.split_first() {
            None => {
                let exe = std::env::current_exe()
                    .context("cannot resolve current executable for the tool server")?;
                (exe, vec!["serve".to_string()])
            }
            Some((program, rest)) => (PathBuf::from(program), rest.to_vec()),
        };

        Ok(Self {
            program,
            args,
            timeout: Duration::from_secs(config.tool_timeout_secs),
        })
    }

    async fn open_session(&self) -> Result<RunningService<RoleClient, ()>, ToolError> {
        let transport = TokioChildProcess::new(Command::new(&self.program).configure(|cmd| {
            for arg in &self.args {
                cmd.arg(arg);
            }
        }))
        .map_err(|e| ToolError::new(format!("failed to spawn tool server: {e}")))?;

        ().serve(transport)
            .await
            .map_err(|e| ToolError::new(format!("tool session initialization failed: {e}")))
    }

    async fn call_once(
        &self,
        session: &RunningService<RoleClient, ()>,
        tool: &str,
        arguments: JsonObject,
    ) -> Result<Value, ToolError> {
        let request = CallToolRequestParam {
            name: tool.to_string().into(),
            arguments: Some(arguments),
            meta: None,
            task: None,
        };

        let result = match tokio::time::timeout(self.timeout, session.call_tool(request)).await {
            Ok(Ok(result)) => result,
            Ok(Err(e)) => return Err(ToolError::new(format!("tool call failed: {e}"))),
            Err(_) => {
                return Err(ToolError::new(format!(
                    "tool call timed out after {}s",
                    self.timeout.as_secs()
                )))
            }
        };

        decode_result(result)
    }
}

#[async_trait::async_trait]
impl ToolInvoker for McpToolClient {
    async fn invoke(&self, tool: &str, arguments: JsonObject) -> Result<Value, ToolError> {
        tracing::debug!(tool, server = %self.program.display(), "opening tool session");
        let session = self.open_session().await?;

        let outcome = self.call_once(&session, tool, arguments).await;

        // Teardown runs on every exit path, including timeout and decode
        // failure above.
        if let Err(e) = session.cancel().await {
            tracing::debug!(error = %e, "tool session teardown reported an error");
        }

        outcome
    }
}

/// Decode the response's primary content block.
///
/// Works on the MCP wire shape of the result: the first `text` content
/// block is the payload. Structured text parses back into structured
/// data; text that is not valid JSON is wrapped as `{"result": <text>}`
/// rather than discarded.
fn decode_result(result: CallToolResult) -> Result<Value, ToolError> {
    let wire = serde_json::to_value(&result)
        .map_err(|e| ToolError::new(format!("malformed tool response: {e}")))?;

    let text = wire["content"]
        .as_array()
        .into_iter()
        .flatten()
        .find_map(|block| block["text"].as_str())
        .map(str::to_string);

    if wire["isError"].as_bool().unwrap_or(false) {
        return Err(ToolError::new(
            text.unwrap_or_else(|| "tool reported an error".to_string()),
        ));
    }

    let Some(text) = text else {
        return Err(ToolError::new("tool response contained no text content"));
    };

    Ok(serde_json::from_str(&text)
        .unwrap_or_else(|_| serde_json::json!({ "result": text })))
}
