//! Best-effort JSON recovery for completion output.
//!
//! Completion endpoints are known to wrap JSON in prose or code fences
//! despite instructions. Recovery is two-tier: strip a markdown fence, then
//! fall back to slicing from the first `{` to the last `}`. Anything smarter
//! (a tolerant JSON5-style parse) is deliberately out of scope — pathological
//! inputs surface as a parse error instead of a guess.

use serde_json::Value;

use crate::llm_client::LlmError;

/// Recovers a JSON value from raw completion text.
///
/// Attempt order is fixed:
/// 1. trim surrounding whitespace
/// 2. strip one leading fence line (optionally tagged `json`) and one
///    trailing fence line, when the text begins with a fence
/// 3. direct decode of the cleaned text
/// 4. decode the substring from the first `{` to the last `}` inclusive
///
/// No schema validation happens here: any well-formed JSON value is returned
/// as-is. Callers convert into their own (lenient) typed model afterwards.
pub fn extract_json(text: &str) -> Result<Value, LlmError> {
    let clean = strip_fences(text.trim());

    if let Ok(value) = serde_json::from_str(clean) {
        return Ok(value);
    }

    if let (Some(first), Some(last)) = (clean.find('{'), clean.rfind('}')) {
        if last > first {
            if let Ok(value) = serde_json::from_str(&clean[first..=last]) {
                return Ok(value);
            }
        }
    }

    Err(LlmError::Parse(
        "response could not be interpreted as JSON".to_string(),
    ))
}

/// Strips ```json ... ``` or ``` ... ``` fences wrapping the payload.
/// Only applies when the text starts with a fence; the trailing fence is
/// only removed in that case.
fn strip_fences(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_prefix('\n').unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.strip_suffix('\n').unwrap_or(rest).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_plain_json() {
        let value = extract_json(r#"{"key": "value"}"#).unwrap();
        assert_eq!(value, json!({"key": "value"}));
    }

    #[test]
    fn test_extract_fenced_json_with_tag() {
        let value = extract_json("```json\n{\"key\": \"value\"}\n```").unwrap();
        assert_eq!(value, json!({"key": "value"}));
    }

    #[test]
    fn test_extract_fenced_json_without_tag() {
        let value = extract_json("```\n{\"key\": \"value\"}\n```").unwrap();
        assert_eq!(value, json!({"key": "value"}));
    }

    #[test]
    fn test_extract_json_surrounded_by_prose() {
        let text = "Here is the result you asked for:\n{\"a\": 1, \"b\": [2, 3]}\nHope that helps!";
        let value = extract_json(text).unwrap();
        assert_eq!(value, json!({"a": 1, "b": [2, 3]}));
    }

    #[test]
    fn test_extract_recovers_exact_value_with_nested_braces() {
        let text = "prefix {\"outer\": {\"inner\": {\"n\": 1}}} suffix";
        let value = extract_json(text).unwrap();
        assert_eq!(value, json!({"outer": {"inner": {"n": 1}}}));
    }

    #[test]
    fn test_extract_prose_before_fence() {
        // A fence that is not at the start is not stripped; brace-slicing
        // still recovers the payload.
        let text = "Sure!\n```json\n{\"ok\": true}\n```";
        let value = extract_json(text).unwrap();
        assert_eq!(value, json!({"ok": true}));
    }

    #[test]
    fn test_extract_fails_without_braces() {
        let err = extract_json("no json here at all").unwrap_err();
        assert!(matches!(err, LlmError::Parse(_)));
    }

    #[test]
    fn test_extract_fails_on_undecodable_fragment() {
        let err = extract_json("{this is not json}").unwrap_err();
        assert!(matches!(err, LlmError::Parse(_)));
    }

    #[test]
    fn test_extract_fails_on_empty_input() {
        assert!(extract_json("").is_err());
        assert!(extract_json("   \n  ").is_err());
    }

    #[test]
    fn test_extract_fails_on_reversed_braces() {
        assert!(extract_json("} before {").is_err());
    }

    #[test]
    fn test_strip_fences_leaves_unfenced_text_alone() {
        assert_eq!(strip_fences("{\"key\": 1}"), "{\"key\": 1}");
    }

    #[test]
    fn test_strip_fences_without_trailing_fence() {
        // Matches the original behavior: a leading fence is stripped even if
        // the trailing one is missing (e.g. a truncated completion).
        assert_eq!(strip_fences("```json\n{\"key\": 1}"), "{\"key\": 1}");
    }
}
