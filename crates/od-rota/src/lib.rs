//! # od-rota
//!
//! The office-day rotation engine.
//!
//! Clicked dates go through [`classifier::deduce`] to become a
//! [`RotationPattern`], which is applied to a [`ScheduleData`]. The schedule
//! is then evaluated day by day with [`oracle::is_office_day`], shared as a
//! shortcode ([`shortcode::encode_shortcode`] / [`shortcode::parse_shortcode`])
//! or exported as iCalendar text ([`ical::export_calendar`]).
//!
//! ```
//! use od_rota::{deduce, is_office_day, ScheduleData};
//! use od_time::{Date, WeekendsOnly};
//!
//! let d = |s: &str| Date::parse_iso(s).unwrap();
//! let mut schedule = ScheduleData::with_defaults("Me", d("2025-01-01"));
//! schedule.apply_pattern(deduce(&[d("2025-01-06"), d("2025-01-08")]));
//!
//! assert!(is_office_day(d("2025-02-05"), &schedule, &WeekendsOnly));
//! assert!(!is_office_day(d("2025-02-04"), &schedule, &WeekendsOnly));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Pattern classifier.
pub mod classifier;

/// Compact wire shape.
pub mod compact;

/// iCalendar export.
pub mod ical;

/// Office-day oracle.
pub mod oracle;

/// `PatternType`: rotation shapes.
pub mod pattern_type;

/// `ScheduleData` and its overlays.
pub mod schedule;

/// `Selections`: the four cycle weeks.
pub mod selections;

/// Share-link shortcodes.
pub mod shortcode;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use classifier::{deduce, deduce_from_strings, describe, RotationPattern};
pub use compact::CompactSchedule;
pub use ical::{export_calendar, export_calendar_now};
pub use oracle::{
    is_bank_holiday, is_festive_break, is_office_day, is_office_day_internal, is_summer_hours_day,
    office_days_in,
};
pub use pattern_type::PatternType;
pub use schedule::{FestiveBreak, ScheduleData, SummerHours};
pub use selections::Selections;
pub use shortcode::{
    encode_shortcode, parse_shortcode, parse_shortcode_value, ShortcodeError, ShortcodeStage,
};
