use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use itinerary_extract::ExtractorConfig;
use std::env;

/// CLI configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub extractor: ExtractorConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let max_rounds = match get("ROTEIRO_MAX_ROUNDS") {
            Some(value) => value
                .trim()
                .parse()
                .context("ROTEIRO_MAX_ROUNDS must be a valid number")?,
            None => itinerary_extract::DEFAULT_MAX_ROUNDS,
        };

        let strict_shape = match get("ROTEIRO_STRICT") {
            Some(value) => parse_flag(&value).context("ROTEIRO_STRICT must be true or false")?,
            None => false,
        };

        Ok(Self {
            gemini_api_key: get("GEMINI_API_KEY").filter(|key| !key.trim().is_empty()),
            gemini_model: get("GEMINI_MODEL")
                .unwrap_or_else(|| gemini_client::DEFAULT_MODEL.to_string()),
            gemini_base_url: get("GEMINI_BASE_URL")
                .unwrap_or_else(|| gemini_client::DEFAULT_BASE_URL.to_string()),
            extractor: ExtractorConfig::new()
                .with_max_rounds(max_rounds)
                .with_strict_shape(strict_shape),
        })
    }

    /// API key, required for anything that calls the model.
    pub fn require_api_key(&self) -> Result<&str> {
        self.gemini_api_key
            .as_deref()
            .context("GEMINI_API_KEY must be set")
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("unrecognized flag value: {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.gemini_api_key, None);
        assert_eq!(config.gemini_model, "gemini-2.5-flash");
        assert_eq!(config.extractor, ExtractorConfig::default());
        assert!(config.require_api_key().is_err());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "abc"),
            ("GEMINI_MODEL", "gemini-2.0-flash"),
            ("ROTEIRO_MAX_ROUNDS", "3"),
            ("ROTEIRO_STRICT", "yes"),
        ]))
        .unwrap();

        assert_eq!(config.require_api_key().unwrap(), "abc");
        assert_eq!(config.gemini_model, "gemini-2.0-flash");
        assert_eq!(config.extractor.max_rounds, 3);
        assert!(config.extractor.strict_shape);
    }

    #[test]
    fn test_blank_api_key_is_missing() {
        let config = Config::from_lookup(lookup(&[("GEMINI_API_KEY", "  ")])).unwrap();
        assert!(config.gemini_api_key.is_none());
    }

    #[test]
    fn test_invalid_rounds_rejected() {
        assert!(Config::from_lookup(lookup(&[("ROTEIRO_MAX_ROUNDS", "many")])).is_err());
    }

    #[test]
    fn test_invalid_flag_rejected() {
        assert!(Config::from_lookup(lookup(&[("ROTEIRO_STRICT", "maybe")])).is_err());
    }
}
