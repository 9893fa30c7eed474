//! Fixed-width timetable rows.

use crate::domain::{Cell, DepartureRecord, Direction, format_time, time_to_minutes};

/// Columns per direction: stop, departure, arrival and two pass-through
/// columns.
pub const HALF_ROW_WIDTH: usize = 5;

/// Columns read from each sheet row. Anything past this is ignored.
pub const SCHEDULE_COLUMNS: usize = 2 * HALF_ROW_WIDTH;

/// One direction's five cells of a timetable row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HalfRow {
    pub stop: Cell,
    pub departure: Cell,
    pub arrival: Cell,
    pub field4: Cell,
    pub field5: Cell,
}

impl HalfRow {
    fn cells(&self) -> [&Cell; HALF_ROW_WIDTH] {
        [
            &self.stop,
            &self.departure,
            &self.arrival,
            &self.field4,
            &self.field5,
        ]
    }

    /// Whether every cell is present and not blank.
    ///
    /// Only complete halves ever become departure records.
    pub fn is_complete(&self) -> bool {
        self.cells().iter().all(|c| !c.is_blank())
    }

    /// Stop name as text.
    pub fn stop_name(&self) -> String {
        self.stop.to_string()
    }

    /// Build the departure record for this half, or `None` if any cell is
    /// missing or blank.
    pub fn to_record(&self) -> Option<DepartureRecord> {
        if !self.is_complete() {
            return None;
        }

        Some(DepartureRecord {
            stop_name: self.stop_name(),
            departure_minutes: time_to_minutes(&self.departure),
            departure_time: format_time(&self.departure),
            arrival_time: format_time(&self.arrival),
            field4: self.field4.clone(),
            field5: self.field5.clone(),
        })
    }
}

/// One timetable row: an up half and a down half.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleRow {
    pub up: HalfRow,
    pub down: HalfRow,
}

impl ScheduleRow {
    /// Shape a raw row into up and down halves.
    ///
    /// Cells past [`SCHEDULE_COLUMNS`] are dropped; missing trailing cells
    /// are treated as empty.
    pub fn from_cells(cells: Vec<Cell>) -> Self {
        let mut cells = cells.into_iter().take(SCHEDULE_COLUMNS);
        let mut next = || cells.next().unwrap_or_default();

        let up = HalfRow {
            stop: next(),
            departure: next(),
            arrival: next(),
            field4: next(),
            field5: next(),
        };
        let down = HalfRow {
            stop: next(),
            departure: next(),
            arrival: next(),
            field4: next(),
            field5: next(),
        };

        Self { up, down }
    }

    /// The half for a direction.
    pub fn half(&self, direction: Direction) -> &HalfRow {
        match direction {
            Direction::Up => &self.up,
            Direction::Down => &self.down,
        }
    }
}
