//! Text normalization ahead of structural parsing.
//!
//! Normalization strips what models wrap around their payload: surrounding
//! whitespace, a markdown code fence, and one layer of outer double quotes.
//! It is applied until the text stops changing, so it is idempotent.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

// A language tag only counts when it ends the fence line, so a one-line
// "```Hello```" keeps its text. `json` may run straight into the payload.
static OPENING_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*```(?:[a-z0-9_+.-]+[ \t]*(?:\r?\n|$)|json)?\s*").unwrap()
});
static CLOSING_FENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*```\s*$").unwrap());

/// Escape sequences models leave in text that should have been raw.
///
/// Order matters: `\n` is replaced before `\"`.
const ESCAPES: &[(&str, &str)] = &[
    ("\\n", "\n"),
    ("\\r", "\r"),
    ("\\t", "\t"),
    ("\\\"", "\""),
    ("\\'", "'"),
];

/// Normalize raw model output.
///
/// Every pass either leaves the text unchanged or makes it strictly
/// shorter, so the loop always terminates.
pub fn normalize(raw: &str) -> String {
    let mut current = normalize_once(raw);
    loop {
        let next = normalize_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn normalize_once(text: &str) -> String {
    let trimmed = text.trim();
    let unfenced = OPENING_FENCE.replace(trimmed, "");
    let unfenced = CLOSING_FENCE.replace(&unfenced, "");
    strip_outer_quotes(&unfenced)
}

/// Remove one pair of enclosing double quotes.
///
/// If the quoted text is a valid JSON string literal it is decoded exactly,
/// which undoes double-encoding without corrupting escapes nested inside
/// the payload. Otherwise the two quote characters are sliced off.
fn strip_outer_quotes(text: &str) -> String {
    if text.len() < 2 || !text.starts_with('"') || !text.ends_with('"') {
        return text.to_string();
    }

    match serde_json::from_str::<Value>(text) {
        Ok(Value::String(decoded)) => decoded,
        _ => text[1..text.len() - 1].to_string(),
    }
}

/// Decode literal `\n`, `\r`, `\t`, `\"` and `\'` sequences.
pub fn decode_escapes(text: &str) -> String {
    ESCAPES
        .iter()
        .fold(text.to_string(), |acc, (from, to)| acc.replace(from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(normalize("  \n{\"a\":1}\n\t"), "{\"a\":1}");
    }

    #[test]
    fn test_strips_json_fence() {
        assert_eq!(normalize("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(normalize("```JSON\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(normalize("```\n[1,2]\n```"), "[1,2]");
    }

    #[test]
    fn test_strips_any_language_tag() {
        assert_eq!(normalize("```Markdown\nHello\n```"), "Hello");
        assert_eq!(normalize("```text\r\nJust go.\r\n```"), "Just go.");
        assert_eq!(normalize("```javascript\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(normalize("```c++\nx\n```"), "x");
    }

    #[test]
    fn test_inline_fence_keeps_first_word() {
        assert_eq!(normalize("```Hello world```"), "Hello world");
        assert_eq!(normalize("```json{\"a\":1}```"), "{\"a\":1}");
    }

    #[test]
    fn test_fence_only_at_edges() {
        let text = "Intro\n```json\n{}\n```\nOutro";
        assert_eq!(normalize(text), text);
    }

    #[test]
    fn test_strips_quotes_by_slicing_when_not_a_literal() {
        assert_eq!(normalize(r#""{\n  "a": 1\n}""#), r#"{\n  "a": 1\n}"#);
    }

    #[test]
    fn test_decodes_quoted_json_string_exactly() {
        let inner = r#"{"title":"line\nbreak \"quoted\""}"#;
        let encoded = serde_json::to_string(inner).unwrap();
        assert_eq!(normalize(&encoded), inner);
    }

    #[test]
    fn test_unwraps_nested_encodings() {
        let inner = r#"{"routes":[]}"#;
        let twice = serde_json::to_string(&serde_json::to_string(inner).unwrap()).unwrap();
        assert_eq!(normalize(&twice), inner);
    }

    #[test]
    fn test_single_quote_char_untouched() {
        assert_eq!(normalize("\""), "\"");
    }

    #[test]
    fn test_is_idempotent_on_tricky_input() {
        for input in [
            "```json\n```json\n{}\n```\n```",
            "\"\"a\"\"",
            "\" \"x\" \"",
            "```",
            "```md\n```text\nhi\n```\n```",
            "```markdown",
            "",
        ] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_decode_escapes() {
        assert_eq!(decode_escapes(r#"a\nb\tc\"d\'e\rf"#), "a\nb\tc\"d'e\rf");
        assert_eq!(decode_escapes("no escapes"), "no escapes");
    }
}
