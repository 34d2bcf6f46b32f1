//! # officedays
//!
//! Rotating hybrid-work office schedules.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `od-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! officedays = "0.1"
//! ```
//!
//! ```rust
//! use officedays::rota::{deduce, encode_shortcode, is_office_day, parse_shortcode, ScheduleData};
//! use officedays::time::calendars::united_kingdom::england_and_wales;
//! use officedays::time::Date;
//!
//! let d = |s: &str| Date::parse_iso(s).unwrap();
//! let today = d("2025-04-01");
//!
//! // Office on Mondays and Tuesdays, every week
//! let mut schedule = ScheduleData::with_defaults("Team", today);
//! schedule.apply_pattern(deduce(&[d("2025-04-07"), d("2025-04-08")]));
//!
//! let holidays = england_and_wales();
//! assert!(is_office_day(d("2025-04-14"), &schedule, &holidays));
//! // Easter Monday
//! assert!(!is_office_day(d("2025-04-21"), &schedule, &holidays));
//!
//! let code = encode_shortcode(&schedule).unwrap();
//! let shared = parse_shortcode(&code, today).unwrap();
//! assert_eq!(shared.selections, schedule.selections);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and text helpers.
pub use od_core as core;

/// Dates, weekdays, holiday calendars, and clocks.
pub use od_time as time;

/// Pattern deduction, office-day evaluation, share codes, and calendar export.
pub use od_rota as rota;
