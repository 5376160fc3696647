//! Itinerary document types.
//!
//! Every field is optional at every level: model output is only loosely
//! shaped, and the renderer decides what to show when something is absent.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A recovered itinerary document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItineraryDocument {
    /// Destination city as named by the model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// Trip length in days as reported by the model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<i64>,

    /// Alternative routes for the trip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routes: Option<Vec<Route>>,
}

/// One suggested route through the city.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Short route title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Day-by-day plan
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub itinerary: Option<Vec<DayPlan>>,
}

/// Places to visit on a single day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    /// Day number (1-based, as written by the model)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<i64>,

    /// Places, each usually "Name - short note"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub places: Option<Vec<String>>,
}

impl ItineraryDocument {
    /// Build a document from an arbitrary JSON value, keeping whatever
    /// has the expected kind and leaving the rest absent.
    ///
    /// Non-object values produce an empty document.
    pub fn from_value(value: &Value) -> Self {
        Self {
            city: string_field(value, "city"),
            days: integer_field(value, "days"),
            routes: value
                .get("routes")
                .and_then(Value::as_array)
                .map(|routes| routes.iter().map(Route::from_value).collect()),
        }
    }

    /// Routes, or an empty slice when absent.
    pub fn routes(&self) -> &[Route] {
        self.routes.as_deref().unwrap_or_default()
    }

    /// True when at least one route is present.
    pub fn has_routes(&self) -> bool {
        !self.routes().is_empty()
    }
}

impl Route {
    /// Lenient conversion; a non-object entry becomes an empty route so
    /// positions in the sequence are preserved.
    pub fn from_value(value: &Value) -> Self {
        Self {
            title: string_field(value, "title"),
            itinerary: value
                .get("itinerary")
                .and_then(Value::as_array)
                .map(|days| days.iter().map(DayPlan::from_value).collect()),
        }
    }

    /// Day plans, or an empty slice when absent.
    pub fn days(&self) -> &[DayPlan] {
        self.itinerary.as_deref().unwrap_or_default()
    }
}

impl DayPlan {
    /// Lenient conversion. Non-string places are dropped.
    pub fn from_value(value: &Value) -> Self {
        Self {
            day: integer_field(value, "day"),
            places: value.get("places").and_then(Value::as_array).map(|places| {
                places
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            }),
        }
    }

    /// Places, or an empty slice when absent.
    pub fn places(&self) -> &[String] {
        self.places.as_deref().unwrap_or_default()
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

fn integer_field(value: &Value, key: &str) -> Option<i64> {
    value.get(key).and_then(as_integer)
}

/// Integers, plus floats with no fractional part (`3.0`).
pub(crate) fn as_integer(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.is_finite() && f.fract() == 0.0)
            .filter(|f| *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
            .map(|f| f as i64)
    })
}
