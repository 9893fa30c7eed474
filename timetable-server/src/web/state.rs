//! Application state for the web layer.

use std::sync::Arc;

use crate::engine::QueryEngine;

/// Shared application state.
///
/// The engine is read-only, so handlers share it without locking.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Timetable query engine
    pub engine: Arc<QueryEngine>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(engine: QueryEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}
