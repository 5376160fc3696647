//! Prompt asking the model for a JSON itinerary.

/// Allowed trip lengths, in days.
pub const MIN_DAYS: u32 = 1;
pub const MAX_DAYS: u32 = 7;
pub const DEFAULT_DAYS: u32 = 3;

/// Build the itinerary prompt for `city` over `days` days.
///
/// The shape described here is what the extractor's shape check expects.
pub fn itinerary_prompt(city: &str, days: u32) -> String {
    format!(
        r#"Please generate ONLY valid JSON (no extra text) with itinerary ideas for the city {city} for {days} days.
The JSON must have exactly this format:
{{
  "city": "<city name>",
  "days": <number of days>,
  "routes": [
    {{
      "title": "<short route title>",
      "itinerary": [
         {{"day": 1, "places": ["Place A - short note", "Place B - short note"]}},
         {{"day": 2, "places": ["Place C", "Place D"]}}
      ]
    }}
  ]
}}
Return only the JSON."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_mentions_city_and_days() {
        let prompt = itinerary_prompt("Florianópolis", 5);
        assert!(prompt.contains("for the city Florianópolis for 5 days"));
        assert!(prompt.contains("\"routes\": ["));
        assert!(prompt.ends_with("Return only the JSON."));
    }
}
