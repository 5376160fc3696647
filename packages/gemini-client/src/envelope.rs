//! Locating the model's text inside a response envelope.
//!
//! The REST API nests the text a few levels deep, and proxies or older API
//! versions use slightly different shapes. Known shapes are tried in order;
//! when none matches, the whole envelope is returned re-serialized so the
//! caller still has something to show.

use serde_json::Value;

/// JSON pointers to the text field, most common shape first.
pub const TEXT_POINTERS: &[&str] = &[
    "/candidates/0/content/parts/0/text",
    "/candidates/0/content/0/parts/0/text",
    "/output/0/content/0/text",
    "/candidates/0/content/0/text",
];

/// Text payload of `envelope`, or the envelope itself as JSON.
pub fn locate_text(envelope: &Value) -> String {
    TEXT_POINTERS
        .iter()
        .find_map(|pointer| envelope.pointer(pointer).and_then(Value::as_str))
        .map(str::to_string)
        .unwrap_or_else(|| envelope.to_string())
}
