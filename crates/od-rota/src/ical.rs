//! iCalendar (RFC 5545) export of upcoming office days.
//!
//! One all-day `VEVENT` per office day over the next [`EXPORT_WINDOW_DAYS`]
//! days, plus a single reminder the day after the window closes asking the
//! user to export again.

use crate::oracle::is_office_day;
use crate::schedule::ScheduleData;
use chrono::{DateTime, Utc};
use od_core::errors::Result;
use od_time::{Clock, Date, DateRange, HolidayCalendar};
use tracing::debug;

/// Days covered by an export, starting today.
pub const EXPORT_WINDOW_DAYS: i32 = 365;

/// Host part of every event UID.
pub const UID_HOST: &str = "officeschedule.site";

/// `PRODID` of the exported calendar.
pub const PRODUCT_ID: &str = "-//OfficeDaysApp//EN";

/// Summary of office-day events.
pub const OFFICE_DAY_SUMMARY: &str = "In Office";

/// Summary of the closing reminder event.
pub const REMINDER_SUMMARY: &str = "Reminder: Re-add office days for next year";

const CRLF: &str = "\r\n";

/// Render the calendar for `schedule` starting at `today`.
///
/// `generated_at` becomes every event's `DTSTAMP`. Fails only if the window
/// runs past the last representable date.
pub fn export_calendar(
    schedule: &ScheduleData,
    holidays: &dyn HolidayCalendar,
    today: Date,
    generated_at: DateTime<Utc>,
) -> Result<String> {
    let uid_name = uid_name(&schedule.name);
    let stamp = generated_at.format("%Y%m%dT%H%M%SZ").to_string();

    let last = today.add_days(EXPORT_WINDOW_DAYS - 1)?;
    let mut events: Vec<String> = DateRange::new(today, last)
        .days()
        .filter(|&d| is_office_day(d, schedule, holidays))
        .map(|d| {
            let uid = format!("{uid_name}-{}", d.to_compact_string());
            all_day_event(&uid, &stamp, d, OFFICE_DAY_SUMMARY)
        })
        .collect::<Result<_>>()?;
    let office_days = events.len();

    let reminder = today.add_days(EXPORT_WINDOW_DAYS)?;
    events.push(all_day_event(
        &format!("{uid_name}-reminder-{}", reminder.to_compact_string()),
        &stamp,
        reminder,
        REMINDER_SUMMARY,
    )?);

    debug!(name = %schedule.name, %today, office_days, "exported calendar");

    let header = [
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{PRODUCT_ID}"),
        format!("X-WR-CALNAME:Office Schedule - {}", calendar_name(&schedule.name)),
        "CALSCALE:GREGORIAN".to_string(),
    ]
    .join(CRLF);

    Ok(format!("{header}{CRLF}{}{CRLF}END:VCALENDAR", events.join(CRLF)))
}

/// [`export_calendar`] reading today and the timestamp from `clock`.
pub fn export_calendar_now(
    schedule: &ScheduleData,
    holidays: &dyn HolidayCalendar,
    clock: &dyn Clock,
) -> Result<String> {
    export_calendar(schedule, holidays, clock.today()?, clock.now_utc())
}

fn all_day_event(uid: &str, stamp: &str, day: Date, summary: &str) -> Result<String> {
    let next = day.add_days(1)?;
    Ok([
        "BEGIN:VEVENT".to_string(),
        format!("UID:{uid}@{UID_HOST}"),
        format!("DTSTAMP:{stamp}"),
        format!("DTSTART;VALUE=DATE:{}", day.to_compact_string()),
        format!("DTEND;VALUE=DATE:{}", next.to_compact_string()),
        format!("SUMMARY:{summary}"),
        "END:VEVENT".to_string(),
    ]
    .join(CRLF))
}

/// Letters and digits only; `"schedule"` when the name is empty.
fn uid_name(name: &str) -> String {
    if name.is_empty() {
        return "schedule".to_string();
    }
    name.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}

/// Letters, digits, `_`, space and `-`; `"Office Schedule"` when empty.
fn calendar_name(name: &str) -> String {
    if name.is_empty() {
        return "Office Schedule".to_string();
    }
    name.chars()
        .filter(|&c| c.is_ascii_alphanumeric() || matches!(c, '_' | ' ' | '-'))
        .collect()
}
