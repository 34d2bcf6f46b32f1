//! Injectable source of "today" and "now".
//!
//! Default schedules and calendar export depend on the current date. Library
//! functions take that date as an argument; a [`Clock`] is how the outermost
//! caller obtains it. Tests use [`FixedClock`].

use crate::date::Date;
use chrono::{DateTime, Utc};
use od_core::errors::Result;

/// A source of the current date and instant.
pub trait Clock: std::fmt::Debug + Send + Sync {
    /// The current local calendar date.
    fn today(&self) -> Result<Date>;

    /// The current instant, used for generation timestamps.
    fn now_utc(&self) -> DateTime<Utc>;
}

/// Reads the operating-system clock (local time zone for the date).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Result<Date> {
        Date::from_naive(chrono::Local::now().date_naive())
    }

    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a given date and instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    today: Date,
    now: DateTime<Utc>,
}

impl FixedClock {
    /// Freeze the clock at `today`, with "now" at midnight UTC of that day.
    pub fn new(today: Date) -> Self {
        let now = chrono::NaiveDate::from_ymd_opt(
            today.year() as i32,
            today.month() as u32,
            today.day_of_month() as u32,
        )
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_default();
        Self { today, now }
    }

    /// Override the instant returned by [`Clock::now_utc`].
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }
}

impl Clock for FixedClock {
    fn today(&self) -> Result<Date> {
        Ok(self.today)
    }

    fn now_utc(&self) -> DateTime<Utc> {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn fixed_clock_is_fixed() {
        let today = Date::from_ymd(2025, 1, 6).unwrap();
        let clock = FixedClock::new(today);
        assert_eq!(clock.today().unwrap(), today);
        assert_eq!(clock.now_utc(), Utc.with_ymd_and_hms(2025, 1, 6, 0, 0, 0).unwrap());

        let later = Utc.with_ymd_and_hms(2025, 1, 6, 9, 30, 0).unwrap();
        assert_eq!(clock.with_now(later).now_utc(), later);
    }

    #[test]
    fn system_clock_is_in_range() {
        let today = SystemClock.today().unwrap();
        assert!(today.year() >= 2024);
    }
}
