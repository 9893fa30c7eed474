//! Timetable query engine.
//!
//! The engine answers two questions against the loaded timetable:
//!
//! - "which buses leave from stops called something like X?"
//!   ([`QueryEngine::search_by_station_name`])
//! - "which stop is closest to me, and which buses leave from it?"
//!   ([`QueryEngine::search_by_coordinate`])
//!
//! The engine owns the schedule table and stop index, both immutable after
//! construction, so one instance can be shared across threads behind an
//! `Arc` and queried without locking.

mod nearest;
mod station;

use std::path::Path;

use tracing::debug;

use crate::schedule::ScheduleTable;
use crate::source::LoadError;
use crate::stops::StopIndex;

pub use nearest::{NearestStop, nearest_stop};
pub use station::{StationDepartures, search_station};

/// Result of a coordinate search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NearestDepartures {
    /// The resolved stop, or `None` if no stop is known.
    pub stop: Option<NearestStop>,

    /// Departures at the resolved stop. Empty when `stop` is `None`.
    pub departures: StationDepartures,
}

/// Read-only query engine over a loaded timetable.
#[derive(Debug, Clone, Default)]
pub struct QueryEngine {
    schedule: ScheduleTable,
    stops: StopIndex,
}

impl QueryEngine {
    /// Create an engine from loaded tables.
    pub fn new(schedule: ScheduleTable, stops: StopIndex) -> Self {
        Self { schedule, stops }
    }

    /// Load both sheets from CSV files.
    ///
    /// Fails only if a file cannot be opened or read; bad rows are skipped.
    pub fn load(schedule_path: &Path, stops_path: &Path) -> Result<Self, LoadError> {
        let schedule = ScheduleTable::load(schedule_path)?;
        let stops = StopIndex::load(stops_path)?;
        Ok(Self::new(schedule, stops))
    }

    /// The schedule table.
    pub fn schedule(&self) -> &ScheduleTable {
        &self.schedule
    }

    /// The stop coordinate index.
    pub fn stops(&self) -> &StopIndex {
        &self.stops
    }

    /// Departures at every stop whose name contains `query`.
    ///
    /// See [`search_station`] for the matching rules.
    pub fn search_by_station_name(&self, query: &str) -> StationDepartures {
        search_station(self.schedule.rows(), query)
    }

    /// Departures at the stop nearest to a point.
    ///
    /// The nearest stop's exact name is used as the station query. If the
    /// index is empty the result has no stop and no departures.
    pub fn search_by_coordinate(&self, latitude: f64, longitude: f64) -> NearestDepartures {
        let Some((stop, distance_km)) = nearest_stop(self.stops.stops(), latitude, longitude)
        else {
            debug!(latitude, longitude, "No stop found near point");
            return NearestDepartures::default();
        };

        debug!(
            latitude,
            longitude,
            stop = %stop.name,
            distance_km,
            "Resolved nearest stop"
        );

        NearestDepartures {
            stop: Some(NearestStop {
                name: stop.name.clone(),
                distance_km,
            }),
            departures: self.search_by_station_name(&stop.name),
        }
    }
}
