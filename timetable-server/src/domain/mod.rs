//! Domain types for the bus timetable.
//!
//! This module contains the value types shared by the loaders and the query
//! engine: source cells, departure times, departure records and stop
//! coordinates. Parsing helpers here never fail; malformed source values
//! degrade to explicit "unknown" or "missing" variants instead.

mod cell;
mod departure;
mod stop;
mod time;

pub use cell::Cell;
pub use departure::{DepartureRecord, Direction};
pub use stop::{EARTH_RADIUS_KM, StopCoordinate, haversine_km};
pub use time::{DepartureMinutes, UNKNOWN_MINUTES_SENTINEL, format_time, time_to_minutes};
