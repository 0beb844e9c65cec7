//! Best-effort argument coercion.
//!
//! The decision engine's output is generated text, so individual argument
//! fields may be malformed even when the call intent is correct. Coercion
//! therefore never fails a call outright: a field that cannot be coerced
//! to its declared type is dropped and reported, and the call proceeds
//! with the remaining valid fields.

use serde_json::Value;

use crate::agent::catalog::{ParamKind, ToolSpec};
use crate::agent::JsonObject;

/// Outcome of coercing one argument map: the typed arguments plus the
/// names of fields that were dropped because they failed to parse.
#[derive(Debug)]
pub struct Coerced {
    pub arguments: JsonObject,
    pub skipped: Vec<String>,
}

/// Normalize `raw` against the tool's declared parameters.
///
/// Integer parameters accept JSON integers or numeric strings; on parse
/// failure the field lands in `skipped`. String parameters pass strings
/// through and stringify any other value. Nulls and keys not declared by
/// the tool are silently dropped.
pub fn coerce(spec: &ToolSpec, raw: &JsonObject) -> Coerced {
    let mut arguments = JsonObject::new();
    let mut skipped = Vec::new();

    for param in spec.params {
        let Some(value) = raw.get(param.name) else {
            continue;
        };
        if value.is_null() {
            continue;
        }

        match param.kind {
            ParamKind::Integer => match coerce_integer(value) {
                Some(n) => {
                    arguments.insert(param.name.to_string(), Value::from(n));
                }
                None => skipped.push(param.name.to_string()),
            },
            ParamKind::String => {
                let s = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                arguments.insert(param.name.to_string(), Value::String(s));
            }
        }
    }

    Coerced { arguments, skipped }
}

fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::catalog::ToolCatalog;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> JsonObject {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn integers_parse_from_strings() {
        let spec = ToolCatalog::get("query_users").unwrap();
        let out = coerce(spec, &raw(json!({"min_age": "30", "max_age": 35})));
        assert_eq!(out.arguments["min_age"], json!(30));
        assert_eq!(out.arguments["max_age"], json!(35));
        assert!(out.skipped.is_empty());
    }

    #[test]
    fn unparseable_integer_is_dropped_not_fatal() {
        let spec = ToolCatalog::get("query_users").unwrap();
        let out = coerce(spec, &raw(json!({"min_age": "thirty", "name": "Alice"})));
        assert!(!out.arguments.contains_key("min_age"));
        assert_eq!(out.skipped, vec!["min_age"]);
        assert_eq!(out.arguments["name"], json!("Alice"));
    }

    #[test]
    fn strings_are_stringified_from_other_types() {
        let spec = ToolCatalog::get("query_users").unwrap();
        let out = coerce(spec, &raw(json!({"name": 42})));
        assert_eq!(out.arguments["name"], json!("42"));
    }

    #[test]
    fn nulls_and_unknown_keys_are_silently_dropped() {
        let spec = ToolCatalog::get("query_users").unwrap();
        let out = coerce(spec, &raw(json!({"name": null, "favorite_color": "red"})));
        assert!(out.arguments.is_empty());
        assert!(out.skipped.is_empty());
    }

    #[test]
    fn float_integer_is_dropped() {
        let spec = ToolCatalog::get("get_user_by_id").unwrap();
        let out = coerce(spec, &raw(json!({"user_id": 3.7})));
        assert!(out.arguments.is_empty());
        assert_eq!(out.skipped, vec!["user_id"]);
    }
}
