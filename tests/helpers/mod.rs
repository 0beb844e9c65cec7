#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use kith::agent::llm::{ChatMessage, ChatModel, LlmError};
use kith::agent::{JsonObject, ToolError, ToolInvoker};
use kith::directory::types::{Gender, Person};
use serde_json::Value;

/// Build a person record with a derived email.
pub fn person(id: u32, name: &str, age: u32, gender: Gender) -> Person {
    Person {
        id,
        name: name.into(),
        email: format!("{}@example.com", name.to_lowercase()),
        age,
        gender,
    }
}

/// A chat model that replays a fixed script of responses and records
/// every user prompt it was shown.
pub struct ScriptedModel {
    responses: Mutex<VecDeque<String>>,
    repeat: Option<String>,
    pub seen_prompts: Mutex<Vec<String>>,
}

impl ScriptedModel {
    /// Replay `responses` in order; a call past the end is an error.
    pub fn new(responses: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.iter().map(|s| s.to_string()).collect()),
            repeat: None,
            seen_prompts: Mutex::new(Vec::new()),
        })
    }

    /// Return the same response on every call, forever.
    pub fn repeating(response: &str) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(VecDeque::new()),
            repeat: Some(response.to_string()),
            seen_prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.seen_prompts.lock().unwrap().len()
    }

    pub fn prompt(&self, index: usize) -> String {
        self.seen_prompts.lock().unwrap()[index].clone()
    }
}

#[async_trait]
impl ChatModel for ScriptedModel {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, LlmError> {
        let user_prompt = messages
            .last()
            .map(|m| m.content.clone())
            .unwrap_or_default();
        self.seen_prompts.lock().unwrap().push(user_prompt);

        if let Some(next) = self.responses.lock().unwrap().pop_front() {
            return Ok(next);
        }
        match &self.repeat {
            Some(response) => Ok(response.clone()),
            None => Err(LlmError::Api("script exhausted".into())),
        }
    }
}

/// A tool invoker that records every call and returns a canned outcome.
pub struct RecordingInvoker {
    outcome: Result<Value, ToolError>,
    pub calls: Mutex<Vec<(String, JsonObject)>>,
}

impl RecordingInvoker {
    pub fn succeeding(result: Value) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(result),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(ToolError::new(message)),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ToolInvoker for RecordingInvoker {
    async fn invoke(&self, tool: &str, arguments: JsonObject) -> Result<Value, ToolError> {
        self.calls
            .lock()
            .unwrap()
            .push((tool.to_string(), arguments));
        self.outcome.clone()
    }
}
