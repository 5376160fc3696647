//! Extraction outcome.

use serde::Serialize;

use super::itinerary::ItineraryDocument;

/// Result of running the extractor over model output.
///
/// `Fallback` carries display text: either pretty-printed JSON (some JSON
/// was recovered but had no usable routes) or the normalized model output
/// (nothing structural was found).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ExtractionOutcome {
    Structured(ItineraryDocument),
    Fallback(String),
}

impl ExtractionOutcome {
    pub fn is_structured(&self) -> bool {
        matches!(self, Self::Structured(_))
    }

    /// The document, if one was recovered.
    pub fn document(&self) -> Option<&ItineraryDocument> {
        match self {
            Self::Structured(doc) => Some(doc),
            Self::Fallback(_) => None,
        }
    }

    /// The fallback text, if no document was recovered.
    pub fn fallback_text(&self) -> Option<&str> {
        match self {
            Self::Structured(_) => None,
            Self::Fallback(text) => Some(text),
        }
    }
}
