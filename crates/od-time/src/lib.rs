//! # od-time
//!
//! Date, weekday, date-range, clock-time, holiday calendar, and clock types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `HolidayCalendar` trait and the weekend-only calendar.
pub mod calendar;

/// Concrete holiday calendars (explicit tables, national presets).
pub mod calendars;

/// Injectable "today" / "now".
pub mod clock;

/// `ClockTime`: time of day.
pub mod clock_time;

/// `Date` type.
pub mod date;

/// `DateRange`: inclusive span of dates.
pub mod date_range;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{HolidayCalendar, WeekendsOnly};
pub use calendars::bank_holiday_table::BankHolidayTable;
pub use clock::{Clock, FixedClock, SystemClock};
pub use clock_time::ClockTime;
pub use date::Date;
pub use date_range::DateRange;
pub use weekday::{day_name, NameLength, Weekday};
