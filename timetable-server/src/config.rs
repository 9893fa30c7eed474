//! Server configuration.
//!
//! Settings come from environment variables, optionally seeded from a
//! `.env` file in the working directory.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Default listen port.
const DEFAULT_PORT: u16 = 5000;

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed
    #[error("invalid {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Configuration for the timetable server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub host: IpAddr,

    /// Port to listen on.
    pub port: u16,

    /// CSV export of the timetable sheet.
    pub schedule_path: PathBuf,

    /// CSV export of the stop coordinate sheet.
    pub stops_path: PathBuf,

    /// Directory served under `/static`.
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// Loads `.env` first if present. Unset variables fall back to the
    /// defaults; set-but-invalid ones are an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("HOST") {
            config.host = value
                .parse()
                .map_err(|_| ConfigError::Invalid { name: "HOST", value })?;
        }

        if let Some(value) = lookup("PORT") {
            config.port = value
                .parse()
                .map_err(|_| ConfigError::Invalid { name: "PORT", value })?;
        }

        if let Some(path) = lookup("TIMETABLE_SCHEDULE_CSV") {
            config.schedule_path = path.into();
        }

        if let Some(path) = lookup("TIMETABLE_STOPS_CSV") {
            config.stops_path = path.into();
        }

        if let Some(path) = lookup("TIMETABLE_STATIC_DIR") {
            config.static_dir = path.into();
        }

        Ok(config)
    }

    /// Socket address to bind.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            schedule_path: PathBuf::from("data/schedule.csv"),
            stops_path: PathBuf::from("data/stops.csv"),
            static_dir: PathBuf::from("static"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.port, 5000);
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:5000");
        assert_eq!(config.schedule_path, PathBuf::from("data/schedule.csv"));
        assert_eq!(config.stops_path, PathBuf::from("data/stops.csv"));
    }

    #[test]
    fn reads_variables() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("TIMETABLE_SCHEDULE_CSV", "/srv/bus/schedule.csv"),
            ("TIMETABLE_STOPS_CSV", "/srv/bus/stops.csv"),
            ("TIMETABLE_STATIC_DIR", "/srv/bus/static"),
        ]))
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.schedule_path, PathBuf::from("/srv/bus/schedule.csv"));
        assert_eq!(config.stops_path, PathBuf::from("/srv/bus/stops.csv"));
        assert_eq!(config.static_dir, PathBuf::from("/srv/bus/static"));
    }

    #[test]
    fn invalid_port_is_an_error() {
        let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                name: "PORT",
                value: "http".into()
            }
        );
        assert_eq!(err.to_string(), "invalid PORT: \"http\"");
    }

    #[test]
    fn invalid_host_is_an_error() {
        assert!(ServerConfig::from_lookup(lookup(&[("HOST", "not an ip")])).is_err());
    }
}
