//! Stop coordinates and great-circle distance.

/// Mean Earth radius used for distances, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A named stop with a geographic position.
///
/// Latitude and longitude are degrees. Both are finite by construction: the
/// loader drops rows whose coordinates are not numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct StopCoordinate {
    /// Stop name, matching the name used in the timetable sheet.
    pub name: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl StopCoordinate {
    /// Create a stop. Returns `None` if either coordinate is not finite.
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Option<Self> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return None;
        }
        Some(Self {
            name: name.into(),
            latitude,
            longitude,
        })
    }

    /// Distance in kilometres from this stop to a point.
    pub fn distance_km(&self, latitude: f64, longitude: f64) -> f64 {
        haversine_km(latitude, longitude, self.latitude, self.longitude)
    }
}

/// Great-circle distance in kilometres between two points given in degrees.
///
/// # Examples
///
/// ```
/// use timetable_server::domain::haversine_km;
///
/// assert_eq!(haversine_km(37.5, 127.0, 37.5, 127.0), 0.0);
///
/// // One degree of latitude is about 111 km
/// let d = haversine_km(37.0, 127.0, 38.0, 127.0);
/// assert!((d - 111.19).abs() < 0.01);
/// ```
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    // Rounding can push `a` just past 1 for near-antipodal points.
    // `clamp` keeps NaN, so a NaN coordinate gives a NaN distance.
    let a = ((delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
