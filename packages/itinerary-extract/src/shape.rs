//! Structural shape check for recovered values.
//!
//! Only container kinds are checked, never content. A value passes when it
//! is an object whose `routes` is a non-empty array; in strict mode every
//! route and day plan must also have the expected kinds.

use serde_json::Value;

use crate::error::{ExtractError, Result};
use crate::types::itinerary::{as_integer, ItineraryDocument};

/// Check `candidate` and build the document from it.
pub fn check_shape(candidate: &Value, strict: bool) -> Result<ItineraryDocument> {
    let object = candidate.as_object().ok_or_else(|| {
        ExtractError::shape(format!("top-level value is {}, not an object", kind(candidate)))
    })?;

    let routes = match object.get("routes") {
        None => return Err(ExtractError::shape("missing `routes`")),
        Some(Value::Array(routes)) => routes,
        Some(other) => {
            return Err(ExtractError::shape(format!(
                "`routes` is {}, not an array",
                kind(other)
            )))
        }
    };

    if routes.is_empty() {
        return Err(ExtractError::shape("`routes` is empty"));
    }

    if strict {
        if let Some(problem) = malformations(routes).into_iter().next() {
            return Err(ExtractError::shape(problem));
        }
    }

    Ok(ItineraryDocument::from_value(candidate))
}

/// Every place where routes or day plans have an unexpected kind.
///
/// Absent fields are fine; present fields of the wrong kind are not.
pub fn malformations(routes: &[Value]) -> Vec<String> {
    let mut problems = Vec::new();

    for (r, route) in routes.iter().enumerate() {
        let Some(route) = route.as_object() else {
            problems.push(format!("routes[{}] is {}, not an object", r, kind(route)));
            continue;
        };

        if let Some(title) = route.get("title").filter(|t| !t.is_string()) {
            problems.push(format!("routes[{}].title is {}", r, kind(title)));
        }

        let days = match route.get("itinerary") {
            None => continue,
            Some(Value::Array(days)) => days,
            Some(other) => {
                problems.push(format!("routes[{}].itinerary is {}, not an array", r, kind(other)));
                continue;
            }
        };

        for (d, day) in days.iter().enumerate() {
            let Some(day) = day.as_object() else {
                problems.push(format!(
                    "routes[{}].itinerary[{}] is {}, not an object",
                    r,
                    d,
                    kind(day)
                ));
                continue;
            };

            if let Some(number) = day.get("day").filter(|n| as_integer(n).is_none()) {
                problems.push(format!("routes[{}].itinerary[{}].day is {}", r, d, kind(number)));
            }

            match day.get("places") {
                None => {}
                Some(Value::Array(places)) => {
                    if let Some(p) = places.iter().position(|p| !p.is_string()) {
                        problems.push(format!(
                            "routes[{}].itinerary[{}].places[{}] is {}",
                            r,
                            d,
                            p,
                            kind(&places[p])
                        ));
                    }
                }
                Some(other) => problems.push(format!(
                    "routes[{}].itinerary[{}].places is {}, not an array",
                    r,
                    d,
                    kind(other)
                )),
            }
        }
    }

    problems
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
