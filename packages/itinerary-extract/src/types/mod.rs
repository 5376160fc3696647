//! Data types for recovered itineraries.

pub mod config;
pub mod itinerary;
pub mod outcome;
