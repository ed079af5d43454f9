use std::time::Duration;

use chrono::{DateTime, FixedOffset};
use tracing::debug;

use crate::error::Error;
use crate::models::sun::SunriseSunsetResponse;

const API_BASE_URL: &str = "https://api.sunrise-sunset.org/json";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Where today's sunrise/sunset instants come from.
///
/// The estimator reaches the time service through this trait; tests
/// substitute canned answers for the real HTTP call.
pub trait SunTimesProvider {
    /// Today's (sunrise, sunset) pair for the given coordinates, carrying
    /// whatever UTC offset the service reports.
    async fn fetch_sun_times(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<(DateTime<FixedOffset>, DateTime<FixedOffset>), Error>;
}

// ─── api.sunrise-sunset.org client ───────────────────────────────────────────

/// Thin client for api.sunrise-sunset.org. Requests carry a bounded
/// timeout; a stalled service surfaces as a fetch error instead of hanging
/// the caller.
pub struct SunriseSunsetClient {
    client: reqwest::Client,
}

impl SunriseSunsetClient {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("solar-radiation/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build sunrise-sunset HTTP client");
        Self { client }
    }

    fn request_url(latitude: f64, longitude: f64) -> String {
        format!("{API_BASE_URL}?lat={latitude}&lng={longitude}&date=today&formatted=0")
    }
}

impl Default for SunriseSunsetClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SunTimesProvider for SunriseSunsetClient {
    async fn fetch_sun_times(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<(DateTime<FixedOffset>, DateTime<FixedOffset>), Error> {
        let url = Self::request_url(latitude, longitude);
        debug!("requesting sunrise/sunset: {url}");
        let response = self.client.get(&url).send().await?.error_for_status()?;
        let body = response.text().await?;
        parse_response(&body)
    }
}

/// Decode a raw response body: service-level status first, then both
/// RFC 3339 timestamps.
pub fn parse_response(
    body: &str,
) -> Result<(DateTime<FixedOffset>, DateTime<FixedOffset>), Error> {
    let response: SunriseSunsetResponse = serde_json::from_str(body)?;
    if response.status != "OK" {
        return Err(Error::ApiStatus(response.status));
    }
    let sunrise = DateTime::parse_from_rfc3339(&response.results.sunrise)?;
    let sunset = DateTime::parse_from_rfc3339(&response.results.sunset)?;
    Ok((sunrise, sunset))
}
