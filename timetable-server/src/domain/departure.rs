//! Departure records.

use std::fmt;

use super::{Cell, DepartureMinutes};

/// Direction of travel for one half of a timetable row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Columns 0-4 of the timetable sheet.
    Up,
    /// Columns 5-9 of the timetable sheet.
    Down,
}

impl Direction {
    /// Both directions, in sheet column order.
    pub const ALL: [Direction; 2] = [Direction::Up, Direction::Down];

    /// Lowercase name used in logs and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scheduled trip in one direction at one stop.
///
/// Records are only built from a complete half-row, so every field was
/// present in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct DepartureRecord {
    /// Stop name as written in the timetable.
    pub stop_name: String,

    /// Sort key for the departure.
    pub departure_minutes: DepartureMinutes,

    /// Departure time as "HH:MM" (best effort for malformed cells).
    pub departure_time: String,

    /// Arrival time as "HH:MM" (best effort for malformed cells).
    pub arrival_time: String,

    /// Fourth column of the half-row, passed through untouched.
    pub field4: Cell,

    /// Fifth column of the half-row, passed through untouched.
    pub field5: Cell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_names() {
        assert_eq!(Direction::Up.to_string(), "up");
        assert_eq!(Direction::Down.as_str(), "down");
        assert_eq!(Direction::ALL, [Direction::Up, Direction::Down]);
    }
}
