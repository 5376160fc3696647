//! `roteiro generate`: ask the model for an itinerary and render it.

use anyhow::{bail, Result};
use gemini_client::{GeminiClient, GenerateContentRequest};
use itinerary_extract::{DisplayContext, Extractor, View};
use std::process::ExitCode;
use tracing::{error, info};

use crate::config::Config;
use crate::output::print_view;
use crate::prompt::itinerary_prompt;

/// Reject blank city names before anything goes over the network.
pub fn validate_city(city: &str) -> Result<&str> {
    let city = city.trim();
    if city.is_empty() {
        bail!("Please fill in the city name");
    }
    Ok(city)
}

pub async fn run(config: &Config, city: &str, days: u32, json: bool) -> Result<ExitCode> {
    let city = validate_city(city)?;

    let client = GeminiClient::new(config.require_api_key()?)
        .with_base_url(&config.gemini_base_url)
        .with_model(&config.gemini_model);

    let request = GenerateContentRequest::prompt(itinerary_prompt(city, days));
    info!(city, days, model = client.model(), "Requesting itinerary");

    let text = match client.generate_text(&request).await {
        Ok(text) => text,
        Err(e) => {
            error!(error = %e, "Itinerary generation failed");
            print_view(&View::error(&e), json)?;
            return Ok(ExitCode::FAILURE);
        }
    };

    let report = Extractor::new(config.extractor.clone()).extract_with_report(&text);
    info!(
        rounds = report.rounds,
        structured = report.outcome.is_structured(),
        "Model response processed"
    );

    let view = View::select(report.outcome, DisplayContext::new(city, days));
    print_view(&view, json)?;
    Ok(ExitCode::SUCCESS)
}
