//! CSV sheet reader.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, warn};

use crate::domain::Cell;

use super::error::LoadError;

/// Rows read from one sheet.
#[derive(Debug, Clone, Default)]
pub struct SheetRows {
    /// Header labels, as written in the export.
    pub header: Vec<String>,

    /// Data rows. Rows may have different lengths.
    pub rows: Vec<Vec<Cell>>,

    /// Rows that could not be parsed as CSV and were left out.
    pub skipped: usize,

    /// Cells that were not valid UTF-8 and were read as empty.
    pub bad_cells: usize,
}

/// Read a sheet from CSV.
///
/// The first record is the header. Ragged rows are accepted as-is; callers
/// pad or truncate to the width they need. A cell that is not valid UTF-8
/// is read as [`Cell::Empty`], so only the part of the row it belongs to
/// is lost. A record the CSV parser rejects is skipped and counted. Only
/// I/O failures abort the read.
pub fn read_sheet<R: Read>(reader: R) -> Result<SheetRows, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let header = rdr
        .byte_headers()?
        .iter()
        .map(|label| String::from_utf8_lossy(label).into_owned())
        .collect();

    let mut rows = Vec::new();
    let mut skipped = 0;
    let mut bad_cells = 0;

    for (i, result) in rdr.byte_records().enumerate() {
        match result {
            Ok(record) => {
                let row = record
                    .iter()
                    .enumerate()
                    .map(|(column, bytes)| match std::str::from_utf8(bytes) {
                        Ok(raw) => Cell::parse(raw),
                        Err(e) => {
                            bad_cells += 1;
                            warn!(row = i + 1, column, error = %e, "Reading undecodable cell as empty");
                            Cell::Empty
                        }
                    })
                    .collect();
                rows.push(row);
            }
            Err(e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => return Err(e.into()),
            Err(e) => {
                skipped += 1;
                warn!(row = i + 1, error = %e, "Skipping unreadable row");
            }
        }
    }

    debug!(rows = rows.len(), skipped, bad_cells, "Read sheet");

    Ok(SheetRows {
        header,
        rows,
        skipped,
        bad_cells,
    })
}

/// Open and read a sheet from a CSV file.
pub fn open_sheet(path: &Path) -> Result<SheetRows, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_sheet(file)
}
