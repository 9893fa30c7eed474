//! The stop coordinate index.
//!
//! Built once from the coordinate sheet. Rows whose latitude or longitude
//! is not a number are dropped for good; there is no repair path.

use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use crate::domain::{Cell, StopCoordinate};
use crate::source::{self, LoadError, SheetRows};

/// Canonical labels for the three coordinate columns. Source headers are
/// ignored and columns are read by position under these names.
pub const STOP_COLUMNS: [&str; 3] = ["name", "latitude", "longitude"];

/// Immutable list of stops with usable coordinates, in sheet order.
#[derive(Debug, Clone, Default)]
pub struct StopIndex {
    stops: Vec<StopCoordinate>,
    dropped_rows: usize,
}

impl StopIndex {
    /// Create an index from already-validated stops.
    pub fn new(stops: Vec<StopCoordinate>) -> Self {
        Self {
            stops,
            dropped_rows: 0,
        }
    }

    /// Create an index from raw rows of `name, latitude, longitude` cells.
    ///
    /// A row is kept only if it has a non-blank name and both coordinates
    /// are finite numbers.
    pub fn from_cell_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = Vec<Cell>>,
    {
        let mut stops = Vec::new();
        let mut dropped_rows = 0;

        for (i, row) in rows.into_iter().enumerate() {
            match stop_from_cells(&row) {
                Some(stop) => stops.push(stop),
                None => {
                    dropped_rows += 1;
                    debug!(row = i + 1, cells = ?row, "Dropping stop without usable coordinates");
                }
            }
        }

        Self {
            stops,
            dropped_rows,
        }
    }

    /// Load stops from a CSV export of the coordinate sheet.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        Ok(Self::from_sheet(source::read_sheet(reader)?))
    }

    /// Load stops from a CSV file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let index = Self::from_sheet(source::open_sheet(path)?);
        info!(
            path = %path.display(),
            stops = index.len(),
            dropped = index.dropped_rows,
            "Loaded stop coordinates"
        );
        Ok(index)
    }

    fn from_sheet(sheet: SheetRows) -> Self {
        debug!(header = ?sheet.header, columns = ?STOP_COLUMNS, "Reading stop sheet by position");
        let mut index = Self::from_cell_rows(sheet.rows);
        index.dropped_rows += sheet.skipped;
        index
    }

    /// All stops, in sheet order.
    pub fn stops(&self) -> &[StopCoordinate] {
        &self.stops
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Whether no stop survived cleaning.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Number of source rows left out of the index.
    pub fn dropped_rows(&self) -> usize {
        self.dropped_rows
    }
}

fn stop_from_cells(row: &[Cell]) -> Option<StopCoordinate> {
    let [name, latitude, longitude] = [0, 1, 2].map(|i| row.get(i));
    let name = name.filter(|c| !c.is_blank())?;
    let latitude = latitude?.as_f64()?;
    let longitude = longitude?.as_f64()?;
    StopCoordinate::new(name.to_string(), latitude, longitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(raw: &[&str]) -> Vec<Cell> {
        raw.iter().map(|s| Cell::parse(s)).collect()
    }

    #[test]
    fn keeps_numeric_rows() {
        let index = StopIndex::from_cell_rows(vec![
            cells(&["Central", "37.50", "127.00"]),
            cells(&["Market", "37", "127"]),
        ]);

        assert_eq!(index.len(), 2);
        assert_eq!(index.dropped_rows(), 0);
        assert_eq!(index.stops()[0].name, "Central");
        assert_eq!(index.stops()[1].latitude, 37.0);
    }

    #[test]
    fn drops_non_numeric_coordinates() {
        let index = StopIndex::from_cell_rows(vec![
            cells(&["Central", "37.50", "127.00"]),
            cells(&["Depot", "north", "127.00"]),
            cells(&["Garage", "37.50", ""]),
            cells(&["Terminal", "nan", "127.00"]),
            cells(&["Short", "37.50"]),
            cells(&["", "37.50", "127.00"]),
        ]);

        assert_eq!(index.len(), 1);
        assert_eq!(index.dropped_rows(), 5);
        assert_eq!(index.stops()[0].name, "Central");
    }

    #[test]
    fn all_rows_dropped_gives_empty_index() {
        let index = StopIndex::from_cell_rows(vec![
            cells(&["Central", "n/a", "n/a"]),
            cells(&["Market", "?", "?"]),
        ]);

        assert!(index.is_empty());
        assert_eq!(index.dropped_rows(), 2);
    }

    #[test]
    fn loads_from_csv_ignoring_header_labels() {
        let csv = "정류장명,위도,경도\nCentral,37.50,127.00\nMarket,37.60,127.10\nDepot,,\n";
        let index = StopIndex::from_reader(csv.as_bytes()).unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(index.dropped_rows(), 1);
        assert_eq!(index.stops()[1].name, "Market");
        assert_eq!(index.stops()[1].longitude, 127.10);
    }

    #[test]
    fn undecodable_name_drops_only_that_stop() {
        let mut bytes = b"name,lat,lon\nCentral,37.50,127.00\n".to_vec();
        bytes.extend_from_slice(b"\xff,37.60,127.10\n");

        let index = StopIndex::from_reader(bytes.as_slice()).unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.dropped_rows(), 1);
        assert_eq!(index.stops()[0].name, "Central");
    }

    #[test]
    fn load_missing_file_fails() {
        assert!(StopIndex::load("/nonexistent/stops.csv").is_err());
    }
}
