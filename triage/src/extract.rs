//! Tolerant JSON extraction from free-form model output.
//!
//! Models wrap JSON in markdown code blocks or surround it with prose. The
//! extractor strips fence markers, then takes the span from the first `{`
//! to the last `}` so explanatory text with embedded braces still resolves
//! to the outermost object.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no JSON object found in model output")]
    NoJsonFound,
    #[error("malformed JSON in model output: {0}")]
    MalformedJson(#[from] serde_json::Error),
}

/// Extract and parse the first-`{`-to-last-`}` JSON object in `text`.
///
/// The returned value is not validated against any expected shape.
pub fn extract_json(text: &str) -> Result<Value, ExtractError> {
    let cleaned = strip_code_fences(text);
    let cleaned = cleaned.trim();

    let start = cleaned.find('{').ok_or(ExtractError::NoJsonFound)?;
    let end = cleaned.rfind('}').ok_or(ExtractError::NoJsonFound)?;
    if end < start {
        return Err(ExtractError::NoJsonFound);
    }

    Ok(serde_json::from_str(&cleaned[start..=end])?)
}

/// Drop markdown fence markers wherever they appear, `json`-tagged or bare.
fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_fenced_json() {
        let text = "```json\n{\"difficulty\":\"easy\"}\n```";
        let value = extract_json(text).unwrap();
        assert_eq!(value, json!({"difficulty": "easy"}));
    }

    #[test]
    fn test_extract_bare_fence() {
        let text = "```\n{\"difficulty\":\"medium\"}\n```";
        let value = extract_json(text).unwrap();
        assert_eq!(value, json!({"difficulty": "medium"}));
    }

    #[test]
    fn test_extract_json_with_surrounding_prose() {
        let text = r#"Here is the result: {"difficulty":"medium"} thanks"#;
        let value = extract_json(text).unwrap();
        assert_eq!(value, json!({"difficulty": "medium"}));
    }

    #[test]
    fn test_extract_multiline_object() {
        let text = "The issue looks involved.\n{\n  \"difficulty\": \"difficult\"\n}\nLet me know.";
        let value = extract_json(text).unwrap();
        assert_eq!(value, json!({"difficulty": "difficult"}));
    }

    #[test]
    fn test_no_braces_fails() {
        let err = extract_json("no braces here").unwrap_err();
        assert!(matches!(err, ExtractError::NoJsonFound));
    }

    #[test]
    fn test_close_brace_before_open_fails() {
        let err = extract_json("} nothing useful {").unwrap_err();
        assert!(matches!(err, ExtractError::NoJsonFound));
    }

    #[test]
    fn test_invalid_syntax_fails() {
        let err = extract_json("{not valid json}").unwrap_err();
        assert!(matches!(err, ExtractError::MalformedJson(_)));
    }

    #[test]
    fn test_shape_is_not_validated() {
        // Any parseable object is returned as-is.
        let value = extract_json(r#"{"severity": 3}"#).unwrap();
        assert_eq!(value, json!({"severity": 3}));
    }
}
