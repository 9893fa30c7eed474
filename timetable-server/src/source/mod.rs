//! Sheet sources for the timetable.
//!
//! The timetable workbook has two sheets: the schedule and the stop
//! coordinates. Each is read from its CSV export into rows of [`Cell`]s,
//! which the schedule and stop loaders then shape into their own types.
//!
//! [`Cell`]: crate::domain::Cell

mod error;
mod sheet;

pub use error::LoadError;
pub use sheet::{SheetRows, open_sheet, read_sheet};
