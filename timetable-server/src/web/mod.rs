//! Web layer for the bus timetable.
//!
//! Serves the search page (station name or current location) and a small
//! JSON API over the same query engine.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
