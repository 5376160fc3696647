//! Named recovery strategies.
//!
//! Each strategy looks at the current text and either recovers a JSON
//! value, rewrites the text for the next round, or declines. The driver in
//! [`crate::Extractor`] runs [`Strategy::LOOP`] in order every round and
//! falls back to [`Strategy::RegexSweep`] once the loop gives up.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::{json, Value};
use tracing::debug;

use crate::error::Result;
use crate::normalize::decode_escapes;

static GREEDY_BRACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)\{.*\}").unwrap());

/// A single way of recovering JSON from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Parse the whole text. A JSON string result is fed back as new text.
    DirectParse,
    /// Decode literal escape sequences left in the text.
    Unescape,
    /// Parse from the first `{` to the last `}`.
    BraceSpan,
    /// Parse from the first `[` to the last `]`, wrapping an array as routes.
    BracketSpan,
    /// Greedy `{...}` regex match, used once after the loop.
    RegexSweep,
}

/// What a strategy made of the text.
#[derive(Debug, Clone, PartialEq)]
pub enum Attempt {
    /// A candidate value was recovered
    Matched(Value),
    /// The text changed; try again from the top
    Rewrite(String),
    /// Nothing to do here
    NoMatch,
}

impl Strategy {
    /// Strategies tried each round, cheapest and most precise first.
    pub const LOOP: [Strategy; 4] = [
        Strategy::DirectParse,
        Strategy::Unescape,
        Strategy::BraceSpan,
        Strategy::BracketSpan,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::DirectParse => "direct_parse",
            Strategy::Unescape => "unescape",
            Strategy::BraceSpan => "brace_span",
            Strategy::BracketSpan => "bracket_span",
            Strategy::RegexSweep => "regex_sweep",
        }
    }

    /// Run this strategy against `text`.
    pub fn apply(&self, text: &str) -> Attempt {
        let attempt = match self {
            Strategy::DirectParse => direct_parse(text),
            Strategy::Unescape => unescape(text),
            Strategy::BraceSpan => brace_span(text),
            Strategy::BracketSpan => bracket_span(text),
            Strategy::RegexSweep => regex_sweep(text),
        };

        if !matches!(attempt, Attempt::NoMatch) {
            debug!(strategy = self.name(), "strategy made progress");
        }
        attempt
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Strict JSON parse of `text`.
pub fn parse_structure(text: &str) -> Result<Value> {
    Ok(serde_json::from_str(text)?)
}

fn parse_or_log(strategy: Strategy, text: &str) -> Option<Value> {
    match parse_structure(text) {
        Ok(value) => Some(value),
        Err(e) => {
            debug!(strategy = strategy.name(), error = %e, "parse attempt failed");
            None
        }
    }
}

fn direct_parse(text: &str) -> Attempt {
    match parse_or_log(Strategy::DirectParse, text) {
        Some(Value::String(inner)) => Attempt::Rewrite(inner),
        Some(value) => Attempt::Matched(value),
        None => Attempt::NoMatch,
    }
}

fn unescape(text: &str) -> Attempt {
    let decoded = decode_escapes(text);
    if decoded == text {
        Attempt::NoMatch
    } else {
        Attempt::Rewrite(decoded)
    }
}

fn brace_span(text: &str) -> Attempt {
    span(text, '{', '}')
        .and_then(|candidate| parse_or_log(Strategy::BraceSpan, candidate))
        .map_or(Attempt::NoMatch, Attempt::Matched)
}

fn bracket_span(text: &str) -> Attempt {
    match span(text, '[', ']').and_then(|candidate| parse_or_log(Strategy::BracketSpan, candidate))
    {
        Some(Value::Array(routes)) => Attempt::Matched(json!({ "routes": routes })),
        _ => Attempt::NoMatch,
    }
}

fn regex_sweep(text: &str) -> Attempt {
    GREEDY_BRACES
        .find(text)
        .and_then(|m| parse_or_log(Strategy::RegexSweep, m.as_str()))
        .map_or(Attempt::NoMatch, Attempt::Matched)
}

/// Slice from the first `open` to the last `close`, inclusive.
fn span(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    (end > start).then(|| &text[start..=end])
}
