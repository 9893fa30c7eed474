//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{Cell, DepartureRecord};
use crate::engine::{NearestDepartures, StationDepartures};

/// Query for departures by stop name.
#[derive(Debug, Deserialize)]
pub struct StationQuery {
    /// Stop name or part of one
    #[serde(default)]
    pub station: String,
}

/// Query for departures at the nearest stop.
///
/// Coordinates are taken as text so that bad input gets a clear message.
#[derive(Debug, Deserialize)]
pub struct CoordinateQuery {
    /// Latitude in degrees
    pub lat: String,

    /// Longitude in degrees
    pub lon: String,
}

/// Search form posted by the index page.
///
/// When both `lat` and `lon` are present the form is a location search,
/// otherwise it is a station name search.
#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    pub station: Option<String>,
    pub lat: Option<String>,
    pub lon: Option<String>,
}

/// One departure in a JSON response.
#[derive(Debug, Serialize, PartialEq)]
pub struct DepartureResult {
    /// Stop name
    pub stop_name: String,

    /// Minutes since midnight; 99999 if the time could not be read
    pub departure_minutes: u32,

    /// Departure time, "HH:MM"
    pub departure_time: String,

    /// Arrival time, "HH:MM"
    pub arrival_time: String,

    /// Pass-through column, with its source type
    pub field4: Value,

    /// Pass-through column, with its source type
    pub field5: Value,
}

/// Response for a station search.
#[derive(Debug, Serialize)]
pub struct DeparturesResponse {
    /// The trimmed query
    pub station: String,

    /// Up-direction departures, earliest first
    pub up: Vec<DepartureResult>,

    /// Down-direction departures, earliest first
    pub down: Vec<DepartureResult>,
}

/// Response for a nearest-stop search.
#[derive(Debug, Serialize)]
pub struct NearestResponse {
    /// Resolved stop name, or null if no stop is known
    pub station: Option<String>,

    /// Distance to the resolved stop in kilometres
    pub distance_km: Option<f64>,

    /// Up-direction departures, earliest first
    pub up: Vec<DepartureResult>,

    /// Down-direction departures, earliest first
    pub down: Vec<DepartureResult>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl DepartureResult {
    /// Create from a domain DepartureRecord.
    pub fn from_record(record: &DepartureRecord) -> Self {
        Self {
            stop_name: record.stop_name.clone(),
            departure_minutes: record.departure_minutes.sort_key(),
            departure_time: record.departure_time.clone(),
            arrival_time: record.arrival_time.clone(),
            field4: cell_to_json(&record.field4),
            field5: cell_to_json(&record.field5),
        }
    }
}

impl DeparturesResponse {
    /// Create from search results.
    pub fn new(station: impl Into<String>, departures: &StationDepartures) -> Self {
        Self {
            station: station.into(),
            up: convert_all(&departures.up),
            down: convert_all(&departures.down),
        }
    }
}

impl NearestResponse {
    /// Create from a coordinate search.
    pub fn from_nearest(nearest: &NearestDepartures) -> Self {
        Self {
            station: nearest.stop.as_ref().map(|s| s.name.clone()),
            distance_km: nearest.stop.as_ref().map(|s| s.distance_km),
            up: convert_all(&nearest.departures.up),
            down: convert_all(&nearest.departures.down),
        }
    }
}

fn convert_all(records: &[DepartureRecord]) -> Vec<DepartureResult> {
    records.iter().map(DepartureResult::from_record).collect()
}

/// JSON value for a pass-through cell, keeping numbers as numbers.
fn cell_to_json(cell: &Cell) -> Value {
    match cell {
        Cell::Empty => Value::Null,
        Cell::Text(s) => Value::String(s.clone()),
        Cell::Integer(n) => Value::from(*n),
        Cell::Float(x) => Value::from(*x),
        Cell::Time(_) => Value::String(cell.to_string()),
    }
}

/// Parse a coordinate given as text.
///
/// Returns a message suitable for a 400 response on failure.
pub fn parse_coordinate(name: &str, raw: &str) -> Result<f64, String> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(format!("Invalid {name}: {raw:?}")),
    }
}
