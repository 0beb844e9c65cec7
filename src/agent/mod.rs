//! The agentic tool-dispatch loop.
//!
//! A question drives zero or more tool invocations through a bounded
//! decide/execute/observe cycle: the decision engine reads the question
//! plus the accumulated history and either requests a tool call or emits
//! the final answer. Tool failures are informative context, not fatal
//! conditions — they are appended to history so the model can adapt.
//!
//! The loop is generic over [`llm::ChatModel`] and [`ToolInvoker`], so
//! tests drive it with a scripted model and a recording invoker.

pub mod catalog;
pub mod coerce;
pub mod decision;
pub mod llm;

use serde_json::Value;

use catalog::ToolCatalog;
use decision::{Decision, ToolCallRecord};
use llm::{ChatMessage, ChatModel};

/// An untyped JSON argument map, as produced by the model and consumed by
/// coercion and the tool transport.
pub type JsonObject = serde_json::Map<String, Value>;

/// Any transport, session, decode, or dispatch failure of one tool call.
/// Recoverable: recorded in history, never propagated past the loop.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ToolError {
    pub message: String,
}

impl ToolError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// One tool invocation against the external tool process.
///
/// Implementations own their session end-to-end and must guarantee
/// teardown on every exit path; they do not retry internally.
#[async_trait::async_trait]
pub trait ToolInvoker: Send + Sync {
    async fn invoke(&self, tool: &str, arguments: JsonObject) -> Result<Value, ToolError>;
}

#[async_trait::async_trait]
impl<T: ToolInvoker + ?Sized> ToolInvoker for std::sync::Arc<T> {
    async fn invoke(&self, tool: &str, arguments: JsonObject) -> Result<Value, ToolError> {
        (**self).invoke(tool, arguments).await
    }
}

/// The orchestration loop: `Deciding → {Invoking → Deciding}* → Answered`,
/// hard-capped at `max_rounds` tool invocations per question.
pub struct Agent<M, T> {
    model: M,
    invoker: T,
    max_rounds: u32,
}

impl<M: ChatModel, T: ToolInvoker> Agent<M, T> {
    pub fn new(model: M, invoker: T, max_rounds: u32) -> Self {
        Self {
            model,
            invoker,
            max_rounds,
        }
    }

    /// Answer one question. Always yields some text: a real answer, or a
    /// degraded partial answer when the round budget or the model backend
    /// gives out. The history lives exactly as long as this call.
    pub async fn answer(&self, question: &str) -> String {
        let mut history: Vec<ToolCallRecord> = Vec::new();
        let mut round: u32 = 0;
        let system = decision::system_prompt();

        loop {
            let messages = [
                ChatMessage::system(system.clone()),
                ChatMessage::user(decision::user_prompt(question, &history)),
            ];

            let response = match self.model.complete(&messages).await {
                Ok(text) => text,
                Err(err) => {
                    // Terminal for this question: with the backend gone
                    // there is no model left to adapt to the failure.
                    tracing::error!(error = %err, calls = history.len(), "decision call failed");
                    return format!(
                        "I couldn't finish answering: the language model request failed ({err}). \
                         {} tool call(s) had completed before the failure.",
                        history.len()
                    );
                }
            };

            let (name, raw_args) = match decision::parse_decision(&response) {
                Decision::ToolCall { name, arguments } => (name, arguments),
                Decision::FinalAnswer(text) | Decision::Unparseable(text) => {
                    tracing::info!(rounds = round, "final answer");
                    return text;
                }
            };

            round += 1;
            if round > self.max_rounds {
                tracing::warn!(calls = history.len(), "round budget exhausted");
                return format!(
                    "I couldn't reach a final answer within the tool-call budget \
                     ({} call(s) attempted). The gathered results may be partial; \
                     try a more specific question.",
                    history.len()
                );
            }

            history.push(self.invoke_round(round, &name, &raw_args).await);
        }
    }

    /// One `Invoking` transition: unknown-tool check, coercion, invocation.
    /// Always produces a record — a failed call is context for the next
    /// decision, not an abort.
    async fn invoke_round(&self, round: u32, name: &str, raw_args: &JsonObject) -> ToolCallRecord {
        let Some(spec) = ToolCatalog::get(name) else {
            tracing::warn!(round, tool = %name, "unknown tool requested");
            return ToolCallRecord {
                tool: name.to_string(),
                arguments: raw_args.clone(),
                outcome: Err(ToolError::new(format!(
                    "unknown tool: {name}. Available tools: {}",
                    ToolCatalog::names().join(", ")
                ))),
            };
        };

        let coerced = coerce::coerce(spec, raw_args);
        if !coerced.skipped.is_empty() {
            tracing::warn!(
                round,
                tool = %name,
                skipped = ?coerced.skipped,
                "dropped arguments that failed coercion"
            );
        }

        tracing::info!(round, tool = %name, args = ?coerced.arguments, "invoking tool");
        let outcome = self.invoker.invoke(name, coerced.arguments.clone()).await;
        match &outcome {
            Ok(_) => tracing::info!(round, tool = %name, "tool call succeeded"),
            Err(err) => tracing::warn!(round, tool = %name, error = %err, "tool call failed"),
        }

        ToolCallRecord {
            tool: name.to_string(),
            arguments: coerced.arguments,
            outcome,
        }
    }
}
