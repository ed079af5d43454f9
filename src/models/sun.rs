use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;
use serde::Deserialize;

// ─── sunrise-sunset.org wire types ───────────────────────────────────────────

/// Top-level response of `GET /json?...&formatted=0`. The service reports
/// request-level failures in `status` rather than the HTTP status code.
#[derive(Debug, Deserialize)]
pub struct SunriseSunsetResponse {
    pub results: SunriseSunsetResults,
    pub status: String,
}

/// Timestamps arrive as ISO 8601 strings with an offset (`formatted=0`)
/// and stay strings here; parsing happens one step later, where a bad
/// timestamp gets its own error. The response carries more fields (solar
/// noon, twilight times); only the two used ones are modeled.
#[derive(Debug, Deserialize)]
pub struct SunriseSunsetResults {
    pub sunrise: String,
    pub sunset: String,
}

// ─── Cached sun times ────────────────────────────────────────────────────────

/// One day's sunrise/sunset window in the configured timezone.
///
/// `cached_on` is the local calendar date at the moment the fetch succeeded;
/// the cache is fresh exactly while it matches today. The whole value is
/// replaced in one assignment, never field by field.
#[derive(Debug, Clone, PartialEq)]
pub struct SunTimes {
    pub sunrise: DateTime<Tz>,
    pub sunset: DateTime<Tz>,
    pub cached_on: NaiveDate,
}
