//! Substring search over the schedule.

use tracing::debug;

use crate::domain::{DepartureRecord, Direction};
use crate::schedule::ScheduleRow;

/// Departures at the matching stops, split by direction.
///
/// Both lists are sorted by departure minute, unknown times last, with
/// sheet order kept between equal times.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationDepartures {
    pub up: Vec<DepartureRecord>,
    pub down: Vec<DepartureRecord>,
}

impl StationDepartures {
    /// No departures in either direction.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether both lists are empty.
    pub fn is_empty(&self) -> bool {
        self.up.is_empty() && self.down.is_empty()
    }

    /// The list for one direction.
    pub fn direction(&self, direction: Direction) -> &[DepartureRecord] {
        match direction {
            Direction::Up => &self.up,
            Direction::Down => &self.down,
        }
    }
}

/// Find departures at every stop whose name contains `query`.
///
/// The query is trimmed first; an empty query matches nothing and skips the
/// scan. Matching is plain case-sensitive substring containment. Each half
/// of each row is considered on its own, and only complete halves can match.
pub fn search_station(rows: &[ScheduleRow], query: &str) -> StationDepartures {
    let key = query.trim();
    if key.is_empty() {
        return StationDepartures::empty();
    }

    let mut result = StationDepartures::empty();
    let mut incomplete = 0usize;

    for row in rows {
        for direction in Direction::ALL {
            let half = row.half(direction);

            if !half.is_complete() {
                incomplete += 1;
                continue;
            }

            if !half.stop_name().contains(key) {
                continue;
            }

            let list = match direction {
                Direction::Up => &mut result.up,
                Direction::Down => &mut result.down,
            };
            list.extend(half.to_record());
        }
    }

    // Stable sort keeps sheet order between equal times
    result.up.sort_by_key(|r| r.departure_minutes);
    result.down.sort_by_key(|r| r.departure_minutes);

    debug!(
        query = key,
        up = result.up.len(),
        down = result.down.len(),
        incomplete,
        "Station search complete"
    );

    result
}
