//! Prompt template for issue difficulty classification.

use crate::classifier::ClassificationRequest;

/// Render the classification prompt for an issue.
///
/// Pure and deterministic: identical requests produce byte-identical
/// output, so callers may cache on the rendered prompt.
pub fn build_prompt(request: &ClassificationRequest) -> String {
    let labels = if request.labels.is_empty() {
        "None".to_string()
    } else {
        request.labels.join(", ")
    };

    format!(
        r#"You are an experienced open source maintainer triaging GitHub issues.

Classify the difficulty of the issue below into exactly one of three tiers:
- easy: small, self-contained change needing little codebase knowledge, with a clear description (typo fixes, documentation updates, config tweaks, trivial bugs)
- medium: touches a few files or one subsystem, requires understanding existing behavior, moderate testing effort (ordinary bug fixes, small features)
- difficult: cross-cutting change requiring deep domain or architectural knowledge, unclear reproduction, or risky migration (core refactors, concurrency bugs, protocol changes)

ISSUE:
Title: {}
Description: {}
Language: {}
Labels: {}

Respond ONLY with a JSON object in this exact format (no markdown, no code blocks, just pure JSON):
{{"difficulty": "easy"}}

where the value is one of "easy", "medium" or "difficult"."#,
        request.title, request.description, request.language, labels
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ClassificationRequest {
        ClassificationRequest::new(
            "Panic on empty config",
            "Running with an empty config file panics instead of reporting an error.",
            "Rust",
        )
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let req = request().with_labels(vec!["bug".into(), "cli".into()]);
        assert_eq!(build_prompt(&req), build_prompt(&req));
    }

    #[test]
    fn test_prompt_contains_issue_fields() {
        let req = request();
        let prompt = build_prompt(&req);
        assert!(prompt.contains("Title: Panic on empty config"));
        assert!(prompt.contains("Language: Rust"));
    }

    #[test]
    fn test_empty_labels_render_as_none() {
        let prompt = build_prompt(&request());
        assert!(prompt.contains("Labels: None"));
    }

    #[test]
    fn test_labels_joined_in_input_order() {
        let req = request().with_labels(vec!["bug".into(), "good first issue".into()]);
        let prompt = build_prompt(&req);
        assert!(prompt.contains("Labels: bug, good first issue"));
    }
}
