//! Source loading error types.

use std::path::PathBuf;

/// Errors that stop a sheet from being loaded at all.
///
/// Individual bad rows never produce these; they are skipped and counted.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The sheet file could not be opened
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The sheet could not be read as CSV
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
