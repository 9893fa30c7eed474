//! Bus timetable server.
//!
//! A web application that answers: "when do buses leave from this stop?",
//! either for a stop named by the user or for the stop nearest to them.

pub mod config;
pub mod domain;
pub mod engine;
pub mod schedule;
pub mod source;
pub mod stops;
pub mod web;
