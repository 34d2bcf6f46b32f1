//! `HolidayCalendar` trait and the weekend-only base calendar.
//!
//! A holiday calendar knows which dates are bank holidays. Office-day
//! evaluation consults it after the weekend check and before any rotation
//! logic, so a holiday always wins over a scheduled office day.

use crate::date::Date;
use crate::date_range::DateRange;

/// A source of non-working calendar dates.
pub trait HolidayCalendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"England and Wales"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a bank holiday in this calendar.
    ///
    /// Weekends are not holidays unless explicitly listed.
    fn is_bank_holiday(&self, date: Date) -> bool;

    /// Return `true` if `date` is a Saturday or Sunday.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Return `true` if `date` is neither a weekend nor a bank holiday.
    fn is_working_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.is_bank_holiday(date)
    }

    /// Collect the bank holidays that fall on working weekdays in `range`.
    fn holidays_in(&self, range: DateRange) -> Vec<Date> {
        range
            .days()
            .filter(|&d| !self.is_weekend(d) && self.is_bank_holiday(d))
            .collect()
    }
}

/// A calendar with no bank holidays: only Saturdays and Sundays are off.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl HolidayCalendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_bank_holiday(&self, _date: Date) -> bool {
        false
    }
}
