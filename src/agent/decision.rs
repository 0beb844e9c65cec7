//! Decision decoding and prompt construction.
//!
//! There is no explicit "is this a tool call" flag from the model:
//! parseability is the discriminator. The response text is probed for a
//! strict single-object JSON payload with a string `"tool"` and an object
//! `"arguments"`; exactly that shape is a tool invocation. Plain text is
//! the final answer, and JSON of any other shape is
//! [`Decision::Unparseable`], which the orchestration loop folds into the
//! final answer. Parse failure never raises.

use serde_json::Value;

use crate::agent::catalog::{ParamKind, ToolCatalog};
use crate::agent::{JsonObject, ToolError};

/// The decision engine's per-round output.
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    /// The model wants a tool invoked with these raw (uncoerced) arguments.
    ToolCall {
        name: String,
        arguments: JsonObject,
    },
    /// The model answered the question directly.
    FinalAnswer(String),
    /// The response was not a tool-call payload. Folded into
    /// [`Decision::FinalAnswer`] by the caller.
    Unparseable(String),
}

/// One completed round: the tool, the coerced arguments it was invoked
/// with, and the result or failure. Append-only for the lifetime of one
/// question; never mutated once appended.
#[derive(Debug, Clone)]
pub struct ToolCallRecord {
    pub tool: String,
    pub arguments: JsonObject,
    pub outcome: Result<Value, ToolError>,
}

/// Probe the response text for a tool-call payload.
///
/// Plain non-JSON text is a [`Decision::FinalAnswer`]; JSON that parses
/// but is not the `{"tool", "arguments"}` shape is
/// [`Decision::Unparseable`]. A leading Markdown code fence is stripped
/// before parsing; models asked for bare JSON still fence it often enough
/// that refusing to look inside would misclassify real tool calls as
/// answers.
pub fn parse_decision(raw: &str) -> Decision {
    let text = strip_code_fence(raw.trim());

    let Ok(parsed) = serde_json::from_str::<Value>(text) else {
        return Decision::FinalAnswer(raw.trim().to_string());
    };
    let Value::Object(mut obj) = parsed else {
        return Decision::Unparseable(raw.trim().to_string());
    };

    let name = match obj.get("tool") {
        Some(Value::String(name)) => name.clone(),
        _ => return Decision::Unparseable(raw.trim().to_string()),
    };
    let arguments = match obj.remove("arguments") {
        Some(Value::Object(args)) => args,
        _ => return Decision::Unparseable(raw.trim().to_string()),
    };

    Decision::ToolCall { name, arguments }
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.trim_start_matches('\n')
        .trim_end()
        .strip_suffix("```")
        .unwrap_or(text)
        .trim()
}

/// The fixed instruction preamble: every tool's name, parameters, and
/// semantics, plus the strict calling convention.
pub fn system_prompt() -> String {
    let mut prompt = String::from(
        "You are an assistant that answers questions about a user directory. \
         Users have an id, name, email, age, and gender, and are connected by \
         typed relations (spouse, friend, sibling, parent_of, child_of).\n\n\
         Available tools:\n",
    );

    for (i, tool) in ToolCatalog::iter().enumerate() {
        prompt.push_str(&format!("{}. {} - {}\n", i + 1, tool.name, tool.doc));
        if tool.params.is_empty() {
            prompt.push_str("   Parameters: none\n");
        } else {
            prompt.push_str("   Parameters:\n");
            for p in tool.params {
                let kind = match p.kind {
                    ParamKind::Integer => "integer",
                    ParamKind::String => "string",
                };
                let need = if p.required { "required" } else { "optional" };
                prompt.push_str(&format!("   - {}: {} ({need}) - {}\n", p.name, kind, p.doc));
            }
        }
    }

    prompt.push_str(
        "\nTo call a tool, reply with ONLY a single JSON object and nothing else:\n\
         {\"tool\": \"<tool name>\", \"arguments\": {<parameters>}}\n\n\
         Rules:\n\
         - Integer parameters must be bare numbers, not quoted strings.\n\
         - Omit parameters you do not need (or set them to null).\n\
         - One tool call at a time; you will receive the result and may call again.\n\
         - When you have enough information (or the question needs no lookup), \
         reply with the plain-text answer instead of JSON.\n",
    );

    prompt
}

/// Serialize the question and the full calling-order transcript into the
/// user message for this round.
pub fn user_prompt(question: &str, history: &[ToolCallRecord]) -> String {
    if history.is_empty() {
        return question.to_string();
    }

    let mut prompt = format!("Question: {question}\n\nTool calls so far:\n");
    for (i, record) in history.iter().enumerate() {
        let args =
            serde_json::to_string(&record.arguments).unwrap_or_else(|_| "{}".to_string());
        prompt.push_str(&format!("{}. tool: {}\n   arguments: {}\n", i + 1, record.tool, args));
        match &record.outcome {
            Ok(result) => {
                let result =
                    serde_json::to_string(result).unwrap_or_else(|_| "null".to_string());
                prompt.push_str(&format!("   result: {result}\n"));
            }
            Err(err) => prompt.push_str(&format!("   error: {err}\n")),
        }
    }
    prompt.push_str(
        "\nEither call another tool (JSON only) or reply with the final plain-text answer.",
    );
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strict_payload_is_a_tool_call() {
        let d = parse_decision(r#"{"tool": "get_user_by_id", "arguments": {"user_id": 3}}"#);
        match d {
            Decision::ToolCall { name, arguments } => {
                assert_eq!(name, "get_user_by_id");
                assert_eq!(arguments["user_id"], json!(3));
            }
            other => panic!("expected tool call, got {other:?}"),
        }
    }

    #[test]
    fn fenced_payload_is_still_a_tool_call() {
        let d = parse_decision(
            "```json\n{\"tool\": \"query_users\", \"arguments\": {\"name\": \"Mia\"}}\n```",
        );
        assert!(matches!(d, Decision::ToolCall { name, .. } if name == "query_users"));
    }

    #[test]
    fn free_text_is_a_final_answer() {
        let d = parse_decision("Alice is 30 years old.");
        assert_eq!(
            d,
            Decision::FinalAnswer("Alice is 30 years old.".to_string())
        );
    }

    #[test]
    fn json_of_the_wrong_shape_is_unparseable() {
        assert!(matches!(
            parse_decision(r#"{"answer": "42"}"#),
            Decision::Unparseable(_)
        ));
        assert!(matches!(
            parse_decision(r#"{"tool": "query_users"}"#),
            Decision::Unparseable(_)
        ));
        assert!(matches!(
            parse_decision(r#"[{"tool": "query_users", "arguments": {}}]"#),
            Decision::Unparseable(_)
        ));
    }

    #[test]
    fn transcript_includes_results_and_errors_in_order() {
        let history = vec![
            ToolCallRecord {
                tool: "query_users".into(),
                arguments: json!({"min_age": 30}).as_object().unwrap().clone(),
                outcome: Ok(json!({"count": 2})),
            },
            ToolCallRecord {
                tool: "get_user_by_id".into(),
                arguments: json!({"user_id": 99}).as_object().unwrap().clone(),
                outcome: Err(ToolError::new("tool call timed out after 60s")),
            },
        ];
        let prompt = user_prompt("who is over 30?", &history);
        assert!(prompt.contains("Question: who is over 30?"));
        assert!(prompt.contains("1. tool: query_users"));
        assert!(prompt.contains(r#"result: {"count":2}"#));
        assert!(prompt.contains("2. tool: get_user_by_id"));
        assert!(prompt.contains("error: tool call timed out after 60s"));
    }

    #[test]
    fn bare_question_when_history_is_empty() {
        assert_eq!(user_prompt("hi", &[]), "hi");
    }

    #[test]
    fn system_prompt_enumerates_every_tool() {
        let prompt = system_prompt();
        for tool in ToolCatalog::iter() {
            assert!(prompt.contains(tool.name), "missing {}", tool.name);
        }
    }
}
