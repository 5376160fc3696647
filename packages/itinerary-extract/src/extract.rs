//! Extraction driver.
//!
//! Runs the recovery strategies in a bounded loop, then classifies the
//! candidate (if any) into an [`ExtractionOutcome`].

use serde_json::Value;
use tracing::debug;

use crate::error::ExtractError;
use crate::normalize::normalize;
use crate::shape::check_shape;
use crate::strategy::{Attempt, Strategy};
use crate::types::config::ExtractorConfig;
use crate::types::outcome::ExtractionOutcome;

/// A JSON value recovered by one of the strategies.
#[derive(Debug)]
struct Candidate {
    strategy: Strategy,
    value: Value,
}

/// Outcome plus diagnostics about how it was reached.
#[derive(Debug)]
pub struct ExtractionReport {
    /// What the caller should render
    pub outcome: ExtractionOutcome,

    /// Model output after normalization
    pub normalized: String,

    /// Parse-loop rounds used
    pub rounds: usize,

    /// Strategy that produced the candidate, if any
    pub resolved_by: Option<Strategy>,

    /// Why the outcome is a fallback; `None` when structured
    pub fallback_reason: Option<ExtractError>,
}

/// Recovers itineraries from model output.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractorConfig,
}

impl Extractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract an outcome from raw model output. Never fails.
    pub fn extract(&self, raw: &str) -> ExtractionOutcome {
        self.extract_with_report(raw).outcome
    }

    /// Like [`Extractor::extract`], keeping the diagnostics.
    pub fn extract_with_report(&self, raw: &str) -> ExtractionReport {
        let normalized = normalize(raw);
        let (candidate, rounds) = self.search(&normalized);

        let (outcome, fallback_reason) = match &candidate {
            Some(candidate) => match check_shape(&candidate.value, self.config.strict_shape) {
                Ok(document) => (ExtractionOutcome::Structured(document), None),
                Err(e) => {
                    debug!(reason = %e, "recovered JSON is not a usable itinerary");
                    let pretty = serde_json::to_string_pretty(&candidate.value)
                        .unwrap_or_else(|_| normalized.clone());
                    (ExtractionOutcome::Fallback(pretty), Some(e))
                }
            },
            None => (
                ExtractionOutcome::Fallback(normalized.trim().to_string()),
                Some(ExtractError::NoRecoverableStructure),
            ),
        };

        debug!(
            rounds,
            resolved_by = candidate.as_ref().map(|c| c.strategy.name()),
            structured = outcome.is_structured(),
            "extraction finished"
        );

        ExtractionReport {
            outcome,
            normalized,
            rounds,
            resolved_by: candidate.map(|c| c.strategy),
            fallback_reason,
        }
    }

    /// Run the bounded strategy loop, then the regex sweep.
    ///
    /// Returns the candidate and the number of rounds used.
    fn search(&self, normalized: &str) -> (Option<Candidate>, usize) {
        let max_rounds = self.config.effective_max_rounds();
        let mut current = normalized.to_string();
        let mut rounds = 0;

        'rounds: while rounds < max_rounds {
            rounds += 1;

            for strategy in Strategy::LOOP {
                match strategy.apply(&current) {
                    Attempt::Matched(value) => {
                        return (Some(Candidate { strategy, value }), rounds);
                    }
                    Attempt::Rewrite(next) => {
                        current = next;
                        continue 'rounds;
                    }
                    Attempt::NoMatch => {}
                }
            }

            break;
        }

        // Sweep the loop's final text first, then the untouched normalized
        // text in case unescaping damaged string contents.
        let mut sweep_targets = vec![current.as_str()];
        if current != normalized {
            sweep_targets.push(normalized);
        }

        let candidate = sweep_targets.into_iter().find_map(|text| {
            match Strategy::RegexSweep.apply(text) {
                Attempt::Matched(value) => Some(Candidate {
                    strategy: Strategy::RegexSweep,
                    value,
                }),
                _ => None,
            }
        });

        (candidate, rounds)
    }
}
