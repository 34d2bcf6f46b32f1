//! `ScheduleData`: the schedule value object and its overlays.
//!
//! A schedule is created fresh with [`ScheduleData::with_defaults`], updated in
//! place by [`ScheduleData::apply_pattern`] whenever the clicked-date set
//! changes, and read (never written) by the oracle and the calendar export.

use crate::classifier::{describe, RotationPattern};
use crate::pattern_type::PatternType;
use crate::selections::Selections;
use od_core::ensure;
use od_core::errors::Result;
use od_time::{ClockTime, Date, DateRange};
use serde::{Deserialize, Serialize};

/// Description shown before any pattern has been set.
pub const NO_SCHEDULE_DESCRIPTION: &str = "No schedule set.";

/// Name given to a shared schedule that arrives without one.
pub const SHARED_SCHEDULE_NAME: &str = "Shared Schedule";

/// Early-finish overlay. Never changes whether a day is an office day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummerHours {
    /// Whether the overlay is active.
    pub enabled: bool,
    /// First day of summer hours (inclusive).
    pub start_date: Date,
    /// Last day of summer hours (inclusive).
    pub end_date: Date,
    /// Sunday-first day numbers that finish early.
    pub affected_days: Vec<u8>,
    /// Early finish time.
    pub finish_time: ClockTime,
}

impl SummerHours {
    /// Disabled overlay running from the Monday of `today`'s week to
    /// 29 August, Fridays finishing at 15:00.
    pub fn defaults(today: Date) -> Self {
        let end_date = Date::from_ymd(today.year(), 8, 29).expect("29 August exists in every year");
        Self {
            enabled: false,
            start_date: today.monday_of_week(),
            end_date,
            affected_days: vec![5],
            finish_time: ClockTime::new(15, 0).expect("15:00 is a valid time"),
        }
    }

    /// The inclusive date range.
    pub fn range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }
}

/// Holiday-season overlay. Suppresses office days unconditionally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FestiveBreak {
    /// Whether the overlay is active.
    pub enabled: bool,
    /// First day of the break (inclusive).
    pub start_date: Date,
    /// Last day of the break (inclusive).
    pub end_date: Date,
}

impl FestiveBreak {
    /// Disabled overlay from 25 December of `today`'s year to 1 January.
    pub fn defaults(today: Date) -> Self {
        let start_date =
            Date::from_ymd(today.year(), 12, 25).expect("25 December exists in every year");
        Self {
            enabled: false,
            start_date,
            end_date: start_date.add_days(7).unwrap_or(Date::MAX),
        }
    }

    /// The inclusive date range.
    pub fn range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }
}

/// A rotating office schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleData {
    /// Display name.
    pub name: String,
    /// Office weekdays for each week of the cycle.
    pub selections: Selections,
    /// Rotation shape.
    pub pattern_type: PatternType,
    /// Monday of cycle week 1. Required unless `pattern_type` is `None`.
    pub pattern_anchor_date: Option<Date>,
    /// Display-only summary, regenerable from the fields above.
    pub pattern_description: String,
    /// Early-finish overlay.
    pub summer_hours: SummerHours,
    /// Holiday-season overlay.
    pub festive_break: FestiveBreak,
    /// Set when the schedule was decoded from a share link. Not serialized.
    #[serde(skip)]
    pub loaded_from_share_link: bool,
}

impl ScheduleData {
    /// A fresh schedule: no pattern, overlays disabled with dates derived
    /// from `today`.
    pub fn with_defaults(name: impl Into<String>, today: Date) -> Self {
        Self {
            name: name.into(),
            selections: Selections::default(),
            pattern_type: PatternType::None,
            pattern_anchor_date: None,
            pattern_description: NO_SCHEDULE_DESCRIPTION.to_string(),
            summer_hours: SummerHours::defaults(today),
            festive_break: FestiveBreak::defaults(today),
            loaded_from_share_link: false,
        }
    }

    /// Replace the rotation with a classifier result.
    pub fn apply_pattern(&mut self, pattern: RotationPattern) {
        self.selections = pattern.selections;
        self.pattern_type = pattern.pattern_type;
        self.pattern_anchor_date = pattern.pattern_anchor_date;
        self.pattern_description = pattern.pattern_description;
    }

    /// Set the anchor, normalized to the Monday of `date`'s week.
    pub fn set_anchor(&mut self, date: Date) {
        self.pattern_anchor_date = Some(date.monday_of_week());
    }

    /// Rebuild `pattern_description` from the rotation fields.
    pub fn refresh_description(&mut self) {
        self.pattern_description = describe(self.pattern_type, &self.selections);
    }

    /// Structural checks applied to schedules that arrive from outside.
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.name.is_empty(), "schedule name is empty");
        ensure!(
            self.pattern_type == PatternType::None || self.pattern_anchor_date.is_some(),
            "pattern type {} requires an anchor date",
            self.pattern_type
        );
        Ok(())
    }
}
