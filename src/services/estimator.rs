use chrono::{DateTime, Datelike, NaiveDate, Timelike};
use chrono_tz::Tz;
use tracing::info;

use crate::config::Config;
use crate::error::Error;
use crate::models::sun::SunTimes;
use crate::services::clock::Clock;
use crate::services::solar_algorithm;
use crate::services::sun_times::SunTimesProvider;

/// Clear-sky irradiance estimator for one configured location.
///
/// Wraps four pieces in a single flow: the loaded configuration, time
/// resolution in the configured timezone, the once-a-day sunrise/sunset
/// cache, and the irradiance formulae. Provider and clock are injected;
/// tests run the whole flow against stubs.
///
/// With no configuration (`config` = `None`) every derived value resolves
/// to `None` and nothing is ever fetched.
pub struct SolarEstimator<P, C> {
    config: Option<Config>,
    provider: P,
    clock: C,
    sun_times: Option<SunTimes>,
}

impl<P: SunTimesProvider, C: Clock> SolarEstimator<P, C> {
    pub fn new(config: Option<Config>, provider: P, clock: C) -> Self {
        Self {
            config,
            provider,
            clock,
            sun_times: None,
        }
    }

    // ─── Time resolution ─────────────────────────────────────────────────────

    fn timezone(&self) -> Tz {
        self.config.as_ref().map_or(Tz::UTC, |c| c.timezone)
    }

    /// Current instant in the configured timezone (UTC when unconfigured).
    pub fn current_instant(&self) -> DateTime<Tz> {
        self.clock.now_utc().with_timezone(&self.timezone())
    }

    /// Local calendar date of `current_instant`.
    pub fn today(&self) -> NaiveDate {
        self.current_instant().date_naive()
    }

    /// Hour of the local day with minutes as the fraction, in [0, 24).
    /// Seconds do not contribute.
    pub fn current_fractional_hour(&self) -> f64 {
        let now = self.current_instant();
        now.hour() as f64 + now.minute() as f64 / 60.0
    }

    /// Ordinal day of the year (1–366) of the local date.
    pub fn day_of_year(&self) -> u32 {
        self.current_instant().ordinal()
    }

    // ─── Sunrise/sunset cache ────────────────────────────────────────────────

    /// Bring the cached sunrise/sunset up to date: fetch when there is no
    /// entry yet or the entry belongs to an earlier local date, otherwise do
    /// nothing. Without configuration this is a no-op.
    ///
    /// The entry is replaced in one assignment after a successful fetch; a
    /// failed refresh leaves the previous entry (and its date) untouched.
    pub async fn ensure_fresh(&mut self) -> Result<(), Error> {
        let Some(config) = &self.config else {
            return Ok(());
        };
        let today = self.today();
        if self.sun_times.as_ref().is_some_and(|s| s.cached_on == today) {
            return Ok(());
        }
        let (sunrise, sunset) = self
            .provider
            .fetch_sun_times(config.latitude, config.longitude)
            .await?;
        let tz = config.timezone;
        let entry = SunTimes {
            sunrise: sunrise.with_timezone(&tz),
            sunset: sunset.with_timezone(&tz),
            cached_on: today,
        };
        info!(
            "sun times refreshed for {}: sunrise {}, sunset {}",
            today,
            entry.sunrise.format("%H:%M:%S %Z"),
            entry.sunset.format("%H:%M:%S %Z")
        );
        self.sun_times = Some(entry);
        Ok(())
    }

    /// Today's (sunrise, sunset) in the configured timezone; `None` when no
    /// location is configured.
    pub async fn sunrise_sunset(
        &mut self,
    ) -> Result<Option<(DateTime<Tz>, DateTime<Tz>)>, Error> {
        self.ensure_fresh().await?;
        Ok(self.sun_times.as_ref().map(|s| (s.sunrise, s.sunset)))
    }

    // ─── Day/night classification ────────────────────────────────────────────

    /// Whether `current_instant` falls inside the cached sun window, sunrise
    /// and sunset included. Reads the cache as-is; callers wanting a fresh
    /// answer go through `ensure_fresh`/`sunrise_sunset` first. `None` while
    /// nothing has been fetched.
    pub fn is_daytime(&self) -> Option<bool> {
        let sun = self.sun_times.as_ref()?;
        let now = self.current_instant();
        Some(sun.sunrise <= now && now <= sun.sunset)
    }

    // ─── Irradiance estimation ───────────────────────────────────────────────

    /// Instantaneous clear-sky irradiance estimate in W/m².
    ///
    /// Refreshes the sun-time cache, then gates on daylight: `Ok(None)` when
    /// no location is configured or the sun is down (night is "no reading",
    /// not zero). The formula takes latitude in radians.
    pub async fn estimate_irradiance(&mut self) -> Result<Option<f64>, Error> {
        self.ensure_fresh().await?;
        let Some(config) = &self.config else {
            return Ok(None);
        };
        if self.is_daytime() != Some(true) {
            return Ok(None);
        }
        let air_mass = solar_algorithm::air_mass(
            self.current_fractional_hour(),
            self.day_of_year(),
            config.latitude.to_radians(),
        );
        Ok(Some(solar_algorithm::clear_sky_irradiance(air_mass)))
    }
}
