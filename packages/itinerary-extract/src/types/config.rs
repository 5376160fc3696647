//! Extractor configuration.

use serde::{Deserialize, Serialize};

/// Default bound on parse rounds.
pub const DEFAULT_MAX_ROUNDS: usize = 6;

/// Configuration for the extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Maximum rounds of the parse loop.
    ///
    /// Each round is one direct parse, or one unescape pass, or one
    /// substring attempt. Values below 1 are treated as 1.
    /// Default: 6.
    pub max_rounds: usize,

    /// Demote documents with malformed routes or day plans to fallback.
    ///
    /// When false, malformed sub-parts are skipped at render time.
    /// When true, any route that is not an object, or an `itinerary` /
    /// `places` of the wrong kind, turns the whole result into a
    /// pretty-printed fallback.
    ///
    /// Default: false.
    pub strict_shape: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
            strict_shape: false,
        }
    }
}

impl ExtractorConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the round limit.
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Set strict shape checking.
    pub fn with_strict_shape(mut self, strict: bool) -> Self {
        self.strict_shape = strict;
        self
    }

    /// Round limit actually applied.
    pub fn effective_max_rounds(&self) -> usize {
        self.max_rounds.max(1)
    }
}
