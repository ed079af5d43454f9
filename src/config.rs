use std::path::Path;

use chrono_tz::Tz;
use serde::Deserialize;
use tracing::warn;

use crate::error::Error;

/// Wire form of the config file. Every key is optional on disk; resolution
/// decides what is usable.
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(rename = "LATITUDE")]
    latitude: Option<f64>,
    #[serde(rename = "LONGITUDE")]
    longitude: Option<f64>,
    #[serde(rename = "TIME_ZONE")]
    time_zone: Option<String>,
}

/// Resolved location configuration, immutable for the process lifetime.
/// The timezone is fixed at load time: absent or empty `TIME_ZONE` becomes
/// UTC once, not on every read.
#[derive(Debug, Clone)]
pub struct Config {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: Tz,
}

impl Config {
    /// Load and resolve the config file.
    ///
    /// A missing file or missing coordinates resolve to `Ok(None)` and the
    /// program runs without a location; unreadable or invalid content is an
    /// error.
    pub fn load(path: &Path) -> Result<Option<Self>, Error> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("no config file at {}; running without a location", path.display());
                return Ok(None);
            }
            Err(e) => {
                return Err(Error::Config(format!("cannot read {}: {e}", path.display())));
            }
        };
        let raw: RawConfig = serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("invalid JSON in {}: {e}", path.display())))?;
        Self::resolve(raw)
    }

    fn resolve(raw: RawConfig) -> Result<Option<Self>, Error> {
        let (latitude, longitude) = match (raw.latitude, raw.longitude) {
            (Some(lat), Some(lon)) => (lat, lon),
            (None, _) => {
                warn!("config has no LATITUDE; running without a location");
                return Ok(None);
            }
            (_, None) => {
                warn!("config has no LONGITUDE; running without a location");
                return Ok(None);
            }
        };
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(Error::Config(format!(
                "LATITUDE {latitude} outside [-90, 90]"
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::Config(format!(
                "LONGITUDE {longitude} outside [-180, 180]"
            )));
        }
        let timezone = match raw.time_zone.as_deref().filter(|s| !s.is_empty()) {
            Some(name) => name
                .parse::<Tz>()
                .map_err(|_| Error::Config(format!("unknown TIME_ZONE {name:?}")))?,
            None => Tz::UTC,
        };
        Ok(Some(Self {
            latitude,
            longitude,
            timezone,
        }))
    }
}
