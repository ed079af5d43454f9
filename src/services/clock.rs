use chrono::{DateTime, Utc};

/// Source of the current instant.
///
/// The estimator reads wall time through this trait; tests pin "now" to a
/// chosen moment instead of the real clock.
pub trait Clock {
    fn now_utc(&self) -> DateTime<Utc>;
}

/// The real system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
