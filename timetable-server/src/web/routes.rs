//! HTTP route handlers.

use std::path::Path;

use askama::Template;
use axum::{
    Form, Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tracing::{info, warn};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(index_page).post(search_page))
        .route("/health", get(health))
        .route("/api/departures", get(departures))
        .route("/api/nearest", get(nearest))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the search forms.
async fn index_page() -> Result<Html<String>, AppError> {
    render(&IndexTemplate::blank())
}

/// Search posted from the index page.
///
/// A form carrying coordinates is a nearest-stop search; anything else is a
/// station name search.
async fn search_page(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>, AppError> {
    let has_coordinates = [&form.lat, &form.lon]
        .iter()
        .any(|v| v.as_deref().is_some_and(|s| !s.trim().is_empty()));

    if has_coordinates {
        let (lat, lon) = coordinates(
            form.lat.as_deref().unwrap_or_default(),
            form.lon.as_deref().unwrap_or_default(),
        )?;
        let nearest = state.engine.search_by_coordinate(lat, lon);
        info!(
            lat,
            lon,
            station = ?nearest.stop.as_ref().map(|s| &s.name),
            "Location search"
        );

        let page = match &nearest.stop {
            Some(stop) => IndexTemplate::with_results(
                stop.name.clone(),
                Some(stop.distance_km),
                &nearest.departures,
            ),
            None => IndexTemplate::with_results("", None, &nearest.departures),
        };
        return render(&page);
    }

    let station = form.station.unwrap_or_default();
    let station = station.trim();
    if station.is_empty() {
        return render(&IndexTemplate::blank());
    }

    let departures = state.engine.search_by_station_name(station);
    info!(
        station,
        up = departures.up.len(),
        down = departures.down.len(),
        "Station search"
    );

    render(&IndexTemplate::with_results(station, None, &departures))
}

/// Departures at stops matching a name.
async fn departures(
    State(state): State<AppState>,
    Query(req): Query<StationQuery>,
) -> Json<DeparturesResponse> {
    let station = req.station.trim();
    let departures = state.engine.search_by_station_name(station);

    Json(DeparturesResponse::new(station, &departures))
}

/// Departures at the stop nearest to a point.
async fn nearest(
    State(state): State<AppState>,
    Query(req): Query<CoordinateQuery>,
) -> Result<Json<NearestResponse>, AppError> {
    let (lat, lon) = coordinates(&req.lat, &req.lon)?;
    let nearest = state.engine.search_by_coordinate(lat, lon);

    Ok(Json(NearestResponse::from_nearest(&nearest)))
}

fn coordinates(lat: &str, lon: &str) -> Result<(f64, f64), AppError> {
    let lat = parse_coordinate("lat", lat).map_err(|message| AppError::BadRequest { message })?;
    let lon = parse_coordinate("lon", lon).map_err(|message| AppError::BadRequest { message })?;
    Ok((lat, lon))
}

fn render<T: Template>(template: &T) -> Result<Html<String>, AppError> {
    template.render().map(Html).map_err(|e| AppError::Internal {
        message: format!("Template error: {e}"),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(status = status.as_u16(), %message, "Request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
