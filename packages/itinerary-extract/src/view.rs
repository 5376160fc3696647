//! Renderer selection.
//!
//! Picks one of three presentations for an extraction outcome and renders
//! it as plain text. Absent fields get explicit defaults here; the data
//! model never assumes presence.

use std::fmt;

use serde::Serialize;

use crate::types::itinerary::ItineraryDocument;
use crate::types::outcome::ExtractionOutcome;

/// Display parameters supplied alongside the model output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DisplayContext {
    /// City the user asked about
    pub city: Option<String>,

    /// Day count the user asked for
    pub requested_days: Option<u32>,
}

impl DisplayContext {
    pub fn new(city: impl Into<String>, requested_days: u32) -> Self {
        Self {
            city: Some(city.into()),
            requested_days: Some(requested_days),
        }
    }
}

/// What to show the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum View {
    /// Structured itinerary
    Itinerary {
        document: ItineraryDocument,
        context: DisplayContext,
    },
    /// Cleaned model text or pretty-printed JSON
    Text { text: String },
    /// The request itself failed
    Error { message: String },
}

impl View {
    /// Select the view for an extraction outcome.
    pub fn select(outcome: ExtractionOutcome, context: DisplayContext) -> Self {
        match outcome {
            ExtractionOutcome::Structured(document) => View::Itinerary { document, context },
            ExtractionOutcome::Fallback(text) => View::Text { text },
        }
    }

    /// View for a failed generation request.
    pub fn error(error: impl fmt::Display) -> Self {
        View::Error {
            message: error.to_string(),
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            View::Itinerary { .. } | View::Text { .. } => "Trip itinerary",
            View::Error { .. } => "Something went wrong",
        }
    }

    /// Body text without the heading.
    pub fn body(&self) -> String {
        match self {
            View::Itinerary { document, context } => render_itinerary(document, context),
            View::Text { text } => text.clone(),
            View::Error { message } => format!(
                "An error occurred while generating the itinerary.\n{}",
                message
            ),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n\n{}", self.heading(), self.body())
    }
}

fn render_itinerary(document: &ItineraryDocument, context: &DisplayContext) -> String {
    let mut lines = Vec::new();

    if let Some(city) = document.city.as_deref().or(context.city.as_deref()) {
        let days = document
            .days
            .or(context.requested_days.map(i64::from));
        match days {
            Some(days) => lines.push(format!("{} - {} days", city, days)),
            None => lines.push(city.to_string()),
        }
        lines.push(String::new());
    }

    if !document.has_routes() {
        lines.push("No itinerary found in the JSON.".to_string());
        return lines.join("\n");
    }

    for (r, route) in document.routes().iter().enumerate() {
        if r > 0 {
            lines.push(String::new());
        }
        match route.title.as_deref() {
            Some(title) => lines.push(title.to_string()),
            None => lines.push(format!("Route {}", r + 1)),
        }

        for (d, plan) in route.days().iter().enumerate() {
            let day = plan.day.unwrap_or(d as i64 + 1);
            lines.push(format!("  Day {}:", day));
            for place in plan.places() {
                lines.push(format!("    • {}", place));
            }
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::itinerary::{DayPlan, Route};

    fn sample() -> ItineraryDocument {
        ItineraryDocument {
            city: Some("Porto".into()),
            days: Some(2),
            routes: Some(vec![Route {
                title: Some("Riverside".into()),
                itinerary: Some(vec![
                    DayPlan {
                        day: Some(1),
                        places: Some(vec!["Ribeira".into(), "Dom Luís I Bridge".into()]),
                    },
                    DayPlan {
                        day: None,
                        places: None,
                    },
                ]),
            }]),
        }
    }

    #[test]
    fn test_select_structured() {
        let view = View::select(
            ExtractionOutcome::Structured(sample()),
            DisplayContext::new("Porto", 2),
        );
        assert!(matches!(view, View::Itinerary { .. }));
    }

    #[test]
    fn test_select_fallback() {
        let view = View::select(
            ExtractionOutcome::Fallback("plain".into()),
            DisplayContext::default(),
        );
        assert_eq!(view, View::Text { text: "plain".into() });
        assert_eq!(view.body(), "plain");
    }

    #[test]
    fn test_render_itinerary() {
        let view = View::select(
            ExtractionOutcome::Structured(sample()),
            DisplayContext::default(),
        );
        assert_eq!(
            view.body(),
            "Porto - 2 days\n\nRiverside\n  Day 1:\n    • Ribeira\n    • Dom Luís I Bridge\n  Day 2:"
        );
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let document = ItineraryDocument {
            city: None,
            days: None,
            routes: Some(vec![Route::default(), Route::default()]),
        };
        let view = View::select(
            ExtractionOutcome::Structured(document),
            DisplayContext::new("Recife", 4),
        );
        assert_eq!(view.body(), "Recife - 4 days\n\nRoute 1\n\nRoute 2");
    }

    #[test]
    fn test_no_routes_message() {
        let view = View::Itinerary {
            document: ItineraryDocument::default(),
            context: DisplayContext::default(),
        };
        assert_eq!(view.body(), "No itinerary found in the JSON.");
    }

    #[test]
    fn test_error_view() {
        let view = View::error("HTTP 500: boom");
        assert_eq!(view.heading(), "Something went wrong");
        assert!(view.to_string().ends_with("HTTP 500: boom"));
    }
}
