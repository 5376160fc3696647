//! Resilient itinerary extraction from LLM output
//!
//! Models asked for "JSON only" still wrap it in markdown fences, escape it
//! as a string inside a string, or surround it with commentary. This crate
//! recovers a structured [`ItineraryDocument`] from whatever came back, or
//! degrades to display text when nothing usable is there.
//!
//! # Usage
//!
//! ```rust
//! use itinerary_extract::{extract, ExtractionOutcome};
//!
//! let raw = "```json\n{\"city\": \"Lisbon\", \"routes\": [{\"title\": \"Classic\"}]}\n```";
//!
//! match extract(raw) {
//!     ExtractionOutcome::Structured(doc) => assert_eq!(doc.city.as_deref(), Some("Lisbon")),
//!     ExtractionOutcome::Fallback(text) => println!("{}", text),
//! }
//! ```
//!
//! # Recovery order
//!
//! 1. Normalize: trim, strip a ```` ```lang ```` fence, strip outer quotes
//! 2. Bounded loop over [`Strategy::LOOP`]: direct parse, unescape,
//!    `{...}` span, `[...]` span
//! 3. Greedy `{...}` regex sweep
//! 4. Shape check: an object with a non-empty `routes` array is
//!    structured; any other JSON is pretty-printed; no JSON at all returns
//!    the normalized text
//!
//! # Modules
//!
//! - [`mod@normalize`] - Fence/quote stripping and escape decoding
//! - [`strategy`] - Individual recovery strategies
//! - [`shape`] - Structural shape check
//! - [`mod@extract`] - The driver loop
//! - [`view`] - Renderer selection
//! - [`types`] - Document, outcome and config types

pub mod error;
pub mod extract;
pub mod normalize;
pub mod shape;
pub mod strategy;
pub mod types;
pub mod view;

pub use error::ExtractError;
pub use extract::{ExtractionReport, Extractor};
pub use normalize::{decode_escapes, normalize};
pub use shape::check_shape;
pub use strategy::{Attempt, Strategy};
pub use types::{
    config::{ExtractorConfig, DEFAULT_MAX_ROUNDS},
    itinerary::{DayPlan, ItineraryDocument, Route},
    outcome::ExtractionOutcome,
};
pub use view::{DisplayContext, View};

/// Extract with the default configuration.
pub fn extract(raw: &str) -> ExtractionOutcome {
    Extractor::default().extract(raw)
}
