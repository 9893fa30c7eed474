//! The schedule table.
//!
//! Each timetable row lists an up-direction trip in columns 0-4 and a
//! down-direction trip in columns 5-9. The table is loaded once and never
//! changes afterwards.

mod row;

use std::io::Read;
use std::path::Path;

use tracing::info;

use crate::domain::Cell;
use crate::source::{self, LoadError, SheetRows};

pub use row::{HALF_ROW_WIDTH, HalfRow, SCHEDULE_COLUMNS, ScheduleRow};

/// Immutable in-memory schedule.
#[derive(Debug, Clone, Default)]
pub struct ScheduleTable {
    rows: Vec<ScheduleRow>,
    skipped_rows: usize,
}

impl ScheduleTable {
    /// Create a table from already-shaped rows.
    pub fn new(rows: Vec<ScheduleRow>) -> Self {
        Self {
            rows,
            skipped_rows: 0,
        }
    }

    /// Create a table from raw rows of cells, truncating or padding each
    /// row to [`SCHEDULE_COLUMNS`].
    pub fn from_cell_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = Vec<Cell>>,
    {
        Self::new(rows.into_iter().map(ScheduleRow::from_cells).collect())
    }

    /// Load the schedule from a CSV export of the timetable sheet.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        Ok(Self::from_sheet(source::read_sheet(reader)?))
    }

    /// Load the schedule from a CSV file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let table = Self::from_sheet(source::open_sheet(path)?);
        info!(
            path = %path.display(),
            rows = table.len(),
            skipped = table.skipped_rows,
            "Loaded schedule"
        );
        Ok(table)
    }

    fn from_sheet(sheet: SheetRows) -> Self {
        let mut table = Self::from_cell_rows(sheet.rows);
        table.skipped_rows = sheet.skipped;
        table
    }

    /// All rows, in sheet order.
    pub fn rows(&self) -> &[ScheduleRow] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of source rows that could not be read and were left out.
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }
}
