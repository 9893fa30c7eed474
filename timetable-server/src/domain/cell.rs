//! Source cell values.
//!
//! Timetable sheets are exported from a spreadsheet, so a single column can
//! hold clock times, numbers, free text or nothing at all. `Cell` keeps the
//! kind of value the exporter wrote so that pass-through columns reach the
//! caller with their original type.

use std::fmt;

use chrono::{NaiveDateTime, NaiveTime};

/// One cell of a source row.
///
/// Apart from time cells, the text form of a cell is always exactly the
/// source text: a value is only classified as a number when printing the
/// number gives back the same characters.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    /// Missing value.
    #[default]
    Empty,
    /// Free text that is not a number or a clock time.
    Text(String),
    /// Whole number.
    Integer(i64),
    /// Finite floating point number.
    Float(f64),
    /// Time-of-day value, as written by spreadsheet exports (`HH:MM:SS`
    /// or a full date-time).
    Time(NaiveTime),
}

impl Cell {
    /// Classify a raw cell string.
    ///
    /// # Examples
    ///
    /// ```
    /// use timetable_server::domain::Cell;
    /// use chrono::NaiveTime;
    ///
    /// assert_eq!(Cell::parse(""), Cell::Empty);
    /// assert_eq!(Cell::parse("12"), Cell::Integer(12));
    /// assert_eq!(Cell::parse("37.5"), Cell::Float(37.5));
    /// // Leading zeros would be lost as a number
    /// assert_eq!(Cell::parse("007"), Cell::Text("007".into()));
    /// assert_eq!(
    ///     Cell::parse("08:05:00"),
    ///     Cell::Time(NaiveTime::from_hms_opt(8, 5, 0).unwrap())
    /// );
    /// // Without seconds it stays text; the time helpers read the prefix.
    /// assert_eq!(Cell::parse("08:05"), Cell::Text("08:05".into()));
    /// ```
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Cell::Empty;
        }

        let trimmed = raw.trim();

        if let Some(time) = parse_time_of_day(trimmed) {
            return Cell::Time(time);
        }

        // "007", "1.50" and " 12 " stay text so their characters survive
        if let Ok(n) = raw.parse::<i64>()
            && n.to_string() == raw
        {
            return Cell::Integer(n);
        }

        if let Ok(x) = raw.parse::<f64>()
            && x.is_finite()
            && format!("{x:?}") == raw
        {
            return Cell::Float(x);
        }

        Cell::Text(raw.to_string())
    }

    /// Whether the cell is missing or only whitespace.
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Integer(_) | Cell::Float(_) | Cell::Time(_) => false,
        }
    }

    /// The embedded time-of-day, if this is a time cell.
    pub fn time_of_day(&self) -> Option<NaiveTime> {
        match self {
            Cell::Time(t) => Some(*t),
            _ => None,
        }
    }

    /// Numeric value of the cell, if it holds or reads as a finite number.
    ///
    /// Text such as `"37.50"` or `" 127 "` is read as a number here even
    /// though the cell keeps it as text.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Integer(n) => Some(*n as f64),
            Cell::Float(x) => Some(*x),
            Cell::Text(s) => s.trim().parse::<f64>().ok().filter(|x| x.is_finite()),
            Cell::Empty | Cell::Time(_) => None,
        }
    }
}

impl From<&str> for Cell {
    fn from(raw: &str) -> Self {
        Cell::parse(raw)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(s) => f.write_str(s),
            Cell::Integer(n) => write!(f, "{n}"),
            // Debug keeps the fractional part ("1.0"), Display would drop it
            Cell::Float(x) => write!(f, "{x:?}"),
            Cell::Time(t) => write!(f, "{}", t.format("%H:%M:%S")),
        }
    }
}

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

fn parse_time_of_day(s: &str) -> Option<NaiveTime> {
    if let Ok(t) = NaiveTime::parse_from_str(s, "%H:%M:%S") {
        return Some(t);
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.time())
}
