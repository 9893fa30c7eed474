//! Departure time normalization.
//!
//! Timetable cells carry times either as real time-of-day values or as text
//! that starts with "HH:MM". Two helpers turn a cell into what the rest of
//! the crate needs: [`time_to_minutes`] gives the sort key and
//! [`format_time`] gives the display text. Neither fails; a cell that cannot
//! be read degrades to [`DepartureMinutes::Unknown`] and a best-effort string.

use std::fmt;

use chrono::Timelike;

use super::Cell;

/// Sort key reported for departures whose time could not be read.
///
/// It is larger than any minute of the day, so unknown departures sort last
/// wherever only the integer key is available.
pub const UNKNOWN_MINUTES_SENTINEL: u32 = 99_999;

const MINUTES_PER_HOUR: u32 = 60;
const HOURS_PER_DAY: u32 = 24;

/// Number of characters read from a text cell as "HH:MM".
const HHMM_LEN: usize = 5;

/// Minutes since midnight of a departure, or `Unknown` if the source time
/// could not be parsed.
///
/// Ordering puts every known minute before `Unknown`, matching the ordering
/// of [`sort_key`](Self::sort_key).
///
/// # Examples
///
/// ```
/// use timetable_server::domain::{DepartureMinutes, UNKNOWN_MINUTES_SENTINEL};
///
/// let early = DepartureMinutes::from_hm(7, 50).unwrap();
/// let late = DepartureMinutes::from_hm(23, 59).unwrap();
///
/// assert!(early < late);
/// assert!(late < DepartureMinutes::Unknown);
/// assert_eq!(early.sort_key(), 470);
/// assert_eq!(DepartureMinutes::Unknown.sort_key(), UNKNOWN_MINUTES_SENTINEL);
///
/// assert!(DepartureMinutes::from_hm(24, 0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DepartureMinutes {
    /// A minute of the day, 0-1439.
    At(u16),
    /// The time could not be parsed.
    Unknown,
}

impl DepartureMinutes {
    /// Build from an hour (0-23) and minute (0-59).
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour >= HOURS_PER_DAY || minute >= MINUTES_PER_HOUR {
            return None;
        }
        let total = hour * MINUTES_PER_HOUR + minute;
        u16::try_from(total).ok().map(DepartureMinutes::At)
    }

    /// Integer sort key: the minute of the day, or
    /// [`UNKNOWN_MINUTES_SENTINEL`].
    pub fn sort_key(&self) -> u32 {
        match self {
            DepartureMinutes::At(m) => u32::from(*m),
            DepartureMinutes::Unknown => UNKNOWN_MINUTES_SENTINEL,
        }
    }
}

impl fmt::Display for DepartureMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepartureMinutes::At(m) => {
                let m = u32::from(*m);
                write!(f, "{:02}:{:02}", m / MINUTES_PER_HOUR, m % MINUTES_PER_HOUR)
            }
            DepartureMinutes::Unknown => f.write_str("unknown"),
        }
    }
}

/// Render a cell as display text.
///
/// A time-of-day cell renders as zero-padded "HH:MM". Anything else renders
/// as the first five characters of its text, which is "HH:MM" for the usual
/// "HH:MM" or "HH:MM:SS" strings and garbled but harmless otherwise.
///
/// # Examples
///
/// ```
/// use timetable_server::domain::{Cell, format_time};
///
/// assert_eq!(format_time(&Cell::parse("07:05:00")), "07:05");
/// assert_eq!(format_time(&Cell::parse("08:10")), "08:10");
/// assert_eq!(format_time(&Cell::parse("late evening")), "late ");
/// ```
pub fn format_time(cell: &Cell) -> String {
    match cell.time_of_day() {
        Some(t) => format!("{:02}:{:02}", t.hour(), t.minute()),
        None => hhmm_prefix(cell),
    }
}

/// Compute the sort key of a cell.
///
/// A time-of-day cell gives `hour * 60 + minute`. Otherwise the first five
/// characters are split on ':' into exactly two integer parts; anything
/// else, including a time outside the day, gives
/// [`DepartureMinutes::Unknown`].
///
/// Past-midnight times written as "24:xx" or later are treated as unknown
/// and sort last, as are minutes of 60 or more such as "07:75".
///
/// # Examples
///
/// ```
/// use timetable_server::domain::{Cell, DepartureMinutes, time_to_minutes};
///
/// assert_eq!(time_to_minutes(&Cell::parse("08:00")), DepartureMinutes::At(480));
/// assert_eq!(time_to_minutes(&Cell::parse("8:05")), DepartureMinutes::At(485));
/// assert_eq!(time_to_minutes(&Cell::parse("soon")), DepartureMinutes::Unknown);
/// assert_eq!(time_to_minutes(&Cell::parse("25:00")), DepartureMinutes::Unknown);
/// assert_eq!(time_to_minutes(&Cell::parse("24:30")), DepartureMinutes::Unknown);
/// ```
pub fn time_to_minutes(cell: &Cell) -> DepartureMinutes {
    if let Some(t) = cell.time_of_day() {
        return DepartureMinutes::from_hm(t.hour(), t.minute()).unwrap_or(DepartureMinutes::Unknown);
    }

    parse_hhmm(&hhmm_prefix(cell)).unwrap_or(DepartureMinutes::Unknown)
}

/// First five characters of the cell's text form.
fn hhmm_prefix(cell: &Cell) -> String {
    cell.to_string().chars().take(HHMM_LEN).collect()
}

fn parse_hhmm(s: &str) -> Option<DepartureMinutes> {
    let mut parts = s.split(':');
    let hour = parts.next()?.trim().parse::<u32>().ok()?;
    let minute = parts.next()?.trim().parse::<u32>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    DepartureMinutes::from_hm(hour, minute)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn time_cell(h: u32, m: u32) -> Cell {
        Cell::Time(NaiveTime::from_hms_opt(h, m, 0).unwrap())
    }

    #[test]
    fn format_time_cell() {
        assert_eq!(format_time(&time_cell(9, 5)), "09:05");
        assert_eq!(format_time(&time_cell(0, 0)), "00:00");
        assert_eq!(format_time(&time_cell(23, 59)), "23:59");
    }

    #[test]
    fn format_text_takes_prefix() {
        assert_eq!(format_time(&Cell::Text("14:30 (school days)".into())), "14:30");
        assert_eq!(format_time(&Cell::Text("9:5".into())), "9:5");
        assert_eq!(format_time(&Cell::Empty), "");
    }

    #[test]
    fn format_counts_characters_not_bytes() {
        assert_eq!(format_time(&Cell::Text("첫차 06:00".into())), "첫차 06");
    }

    #[test]
    fn format_numbers_use_text_form() {
        assert_eq!(format_time(&Cell::Integer(123456)), "12345");
        assert_eq!(format_time(&Cell::Float(0.25)), "0.25");
    }

    #[test]
    fn minutes_from_time_cell() {
        assert_eq!(time_to_minutes(&time_cell(7, 50)), DepartureMinutes::At(470));
        assert_eq!(time_to_minutes(&time_cell(0, 0)), DepartureMinutes::At(0));
        assert_eq!(time_to_minutes(&time_cell(23, 59)), DepartureMinutes::At(1439));
    }

    #[test]
    fn minutes_from_text() {
        assert_eq!(time_to_minutes(&Cell::Text("08:00".into())), DepartureMinutes::At(480));
        assert_eq!(time_to_minutes(&Cell::Text("08:00 via depot".into())), DepartureMinutes::At(480));
        assert_eq!(time_to_minutes(&Cell::Text(" 8:05".into())), DepartureMinutes::At(485));
    }

    #[test]
    fn unparseable_minutes_are_unknown() {
        for raw in ["", "soon", "0800", "8:0:0", "ab:cd", ":30", "12:", "-1:30"] {
            assert_eq!(
                time_to_minutes(&Cell::Text(raw.into())),
                DepartureMinutes::Unknown,
                "input {raw:?}"
            );
        }
        assert_eq!(time_to_minutes(&Cell::Empty), DepartureMinutes::Unknown);
        assert_eq!(time_to_minutes(&Cell::Integer(800)), DepartureMinutes::Unknown);
    }

    #[test]
    fn out_of_day_minutes_are_unknown() {
        assert_eq!(time_to_minutes(&Cell::Text("24:00".into())), DepartureMinutes::Unknown);
        assert_eq!(time_to_minutes(&Cell::Text("24:30".into())), DepartureMinutes::Unknown);
        assert_eq!(time_to_minutes(&Cell::Text("07:75".into())), DepartureMinutes::Unknown);
        assert_eq!(time_to_minutes(&Cell::Text("07:60".into())), DepartureMinutes::Unknown);
    }

    #[test]
    fn malformed_source_degrades_consistently() {
        let cell = Cell::Text("about 8".into());
        assert_eq!(time_to_minutes(&cell).sort_key(), UNKNOWN_MINUTES_SENTINEL);
        assert_eq!(format_time(&cell), "about");
    }

    #[test]
    fn unknown_sorts_last() {
        let mut keys = vec![
            DepartureMinutes::Unknown,
            DepartureMinutes::At(1439),
            DepartureMinutes::At(0),
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![
                DepartureMinutes::At(0),
                DepartureMinutes::At(1439),
                DepartureMinutes::Unknown
            ]
        );
    }

    #[test]
    fn display() {
        assert_eq!(DepartureMinutes::At(485).to_string(), "08:05");
        assert_eq!(DepartureMinutes::Unknown.to_string(), "unknown");
    }
}
