//! Office-day oracle: is a given date an office day under a schedule?
//!
//! [`is_office_day`] applies the checks cheapest and most authoritative
//! first: weekend, bank holiday, festive break, then the rotation itself.
//! Summer hours are a separate question ([`is_summer_hours_day`]) and never
//! affect presence.

use crate::pattern_type::PatternType;
use crate::schedule::ScheduleData;
use od_time::{Date, DateRange, HolidayCalendar};
use tracing::warn;

/// Return `true` if `date` is a listed bank holiday in `holidays`.
pub fn is_bank_holiday(date: Date, holidays: &dyn HolidayCalendar) -> bool {
    holidays.is_bank_holiday(date)
}

/// Return `true` if the schedule's festive break is enabled and covers `date`.
pub fn is_festive_break(date: Date, schedule: &ScheduleData) -> bool {
    let fb = &schedule.festive_break;
    fb.enabled && overlay_contains(fb.range(), date, "festive break")
}

/// Return `true` if `date` is an early-finish day: summer hours are enabled,
/// `date` is within their range, and its weekday is an affected day.
pub fn is_summer_hours_day(date: Date, schedule: &ScheduleData) -> bool {
    let sh = &schedule.summer_hours;
    sh.enabled
        && sh.affected_days.contains(&date.weekday().day_number())
        && overlay_contains(sh.range(), date, "summer hours")
}

/// Return `true` if `date` is an office day under `schedule`.
pub fn is_office_day(date: Date, schedule: &ScheduleData, holidays: &dyn HolidayCalendar) -> bool {
    if date.weekday().is_weekend() {
        return false;
    }
    if is_bank_holiday(date, holidays) {
        return false;
    }
    if is_festive_break(date, schedule) {
        return false;
    }
    is_office_day_internal(date, schedule)
}

/// Evaluate the rotation alone, ignoring holidays and overlays.
///
/// The week of `date` is located relative to the anchor week and mapped onto
/// a cycle slot whose length depends on the pattern: 1 for constant
/// patterns, 2 for A/B, 4 otherwise.
pub fn is_office_day_internal(date: Date, schedule: &ScheduleData) -> bool {
    let Some(anchor) = schedule.pattern_anchor_date else {
        return false;
    };
    if schedule.pattern_type == PatternType::None {
        return false;
    }
    let weekday = date.weekday();
    if weekday.is_weekend() {
        return false;
    }

    let week_offset = anchor
        .monday_of_week()
        .days_between(date.monday_of_week())
        .div_euclid(7);
    let slot = week_offset.rem_euclid(schedule.pattern_type.cycle_length());

    let sel = &schedule.selections;
    let target: &[u8] = match (schedule.pattern_type, slot) {
        (PatternType::None, _) => return false,
        (PatternType::Constant | PatternType::ConstantSingleDay, _) => &sel.week1,
        (PatternType::Ab, 0) => &sel.week1,
        (PatternType::Ab, _) => &sel.week2,
        (PatternType::AaBb, 0 | 1) => &sel.week1,
        (PatternType::AaBb, _) => &sel.week3,
        (PatternType::Abba, 0 | 3) => &sel.week1,
        (PatternType::Abba, _) => &sel.week2,
        (PatternType::Custom4Week, n) => sel.week(n as usize),
    };
    target.contains(&weekday.day_number())
}

/// Every office day in `range`, in date order.
pub fn office_days_in(
    range: DateRange,
    schedule: &ScheduleData,
    holidays: &dyn HolidayCalendar,
) -> Vec<Date> {
    range
        .days()
        .filter(|&d| is_office_day(d, schedule, holidays))
        .collect()
}

fn overlay_contains(range: DateRange, date: Date, overlay: &str) -> bool {
    if range.is_reversed() {
        warn!(
            overlay,
            start = %range.start_date,
            end = %range.end_date,
            "overlay range ends before it starts; treating as empty"
        );
        return false;
    }
    range.contains(date)
}
