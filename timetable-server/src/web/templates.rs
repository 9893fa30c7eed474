//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::{DepartureRecord, Direction};
use crate::engine::StationDepartures;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Search page, with results when a search was made.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Station searched for, or resolved from the user's location
    pub station: String,

    /// Distance to the resolved stop, for location searches
    pub distance: Option<String>,

    /// Whether a search was made (controls the "no results" message)
    pub searched: bool,

    /// Up then down departures
    pub directions: Vec<DirectionView>,
}

impl IndexTemplate {
    /// The empty search page.
    pub fn blank() -> Self {
        Self {
            station: String::new(),
            distance: None,
            searched: false,
            directions: Vec::new(),
        }
    }

    /// Page showing the results of a search.
    pub fn with_results(
        station: impl Into<String>,
        distance_km: Option<f64>,
        departures: &StationDepartures,
    ) -> Self {
        Self {
            station: station.into(),
            distance: distance_km.map(format_distance),
            searched: true,
            directions: Direction::ALL
                .iter()
                .map(|&d| DirectionView::new(d, departures.direction(d)))
                .collect(),
        }
    }
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// One direction's departures.
#[derive(Debug, Clone)]
pub struct DirectionView {
    pub heading: &'static str,
    pub rows: Vec<DepartureView>,
}

impl DirectionView {
    fn new(direction: Direction, records: &[DepartureRecord]) -> Self {
        let heading = match direction {
            Direction::Up => "Up",
            Direction::Down => "Down",
        };
        Self {
            heading,
            rows: records.iter().map(DepartureView::from_record).collect(),
        }
    }
}

/// Departure row view model.
#[derive(Debug, Clone)]
pub struct DepartureView {
    pub stop_name: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub field4: String,
    pub field5: String,
}

impl DepartureView {
    /// Create from a domain DepartureRecord.
    pub fn from_record(record: &DepartureRecord) -> Self {
        Self {
            stop_name: record.stop_name.clone(),
            departure_time: record.departure_time.clone(),
            arrival_time: record.arrival_time.clone(),
            field4: record.field4.to_string(),
            field5: record.field5.to_string(),
        }
    }
}

/// Format a distance for display, e.g. "350 m" or "1.4 km".
fn format_distance(km: f64) -> String {
    if km < 1.0 {
        format!("{:.0} m", km * 1000.0)
    } else {
        format!("{:.1} km", km)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Cell, DepartureMinutes};

    fn departures() -> StationDepartures {
        StationDepartures {
            up: vec![DepartureRecord {
                stop_name: "Central".into(),
                departure_minutes: DepartureMinutes::At(470),
                departure_time: "07:50".into(),
                arrival_time: "07:55".into(),
                field4: Cell::Text("A".into()),
                field5: Cell::Float(1.0),
            }],
            down: vec![],
        }
    }

    #[test]
    fn format_distance_units() {
        assert_eq!(format_distance(0.35), "350 m");
        assert_eq!(format_distance(1.42), "1.4 km");
    }

    #[test]
    fn departure_view_from_record() {
        let view = DepartureView::from_record(&departures().up[0]);
        assert_eq!(view.departure_time, "07:50");
        assert_eq!(view.field4, "A");
        assert_eq!(view.field5, "1.0");
    }

    #[test]
    fn blank_page_renders_form_only() {
        let html = IndexTemplate::blank().render().unwrap();
        assert!(html.contains("name=\"station\""));
        assert!(!html.contains("No departures"));
        assert!(!html.contains("<table"));
    }

    #[test]
    fn results_page_lists_departures() {
        let html = IndexTemplate::with_results("Central", Some(1.42), &departures())
            .render()
            .unwrap();

        assert!(html.contains("07:50"));
        assert!(html.contains("07:55"));
        assert!(html.contains("1.4 km"));
        assert!(html.contains("No departures"));
    }

    #[test]
    fn station_name_is_escaped() {
        let html = IndexTemplate::with_results("<b>Central</b>", None, &StationDepartures::empty())
            .render()
            .unwrap();
        assert!(!html.contains("<b>Central</b>"));
        assert!(html.contains("&lt;b&gt;Central&lt;/b&gt;"));
    }

    #[test]
    fn location_search_without_stop() {
        let html = IndexTemplate::with_results("", None, &StationDepartures::empty())
            .render()
            .unwrap();
        assert!(html.contains("No stop found"));
    }

    #[test]
    fn directions_in_order() {
        let page = IndexTemplate::with_results("Central", None, &departures());
        let headings: Vec<_> = page.directions.iter().map(|d| d.heading).collect();
        assert_eq!(headings, vec!["Up", "Down"]);
        assert_eq!(page.directions[0].rows.len(), 1);
        assert!(page.directions[1].rows.is_empty());
    }
}
