//! Bank holiday table: a calendar whose holidays are listed, not computed.
//!
//! Governments publish bank holidays a year or two ahead and move them at
//! short notice, so the host application supplies the dates and refreshes
//! them each year.

use crate::calendar::HolidayCalendar;
use crate::date::Date;
use od_core::errors::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A calendar whose holidays are an explicit set of dates.
///
/// Deserializes from `{"name": "...", "holidays": ["2025-01-01", ...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankHolidayTable {
    name: String,
    holidays: BTreeSet<Date>,
}

impl BankHolidayTable {
    /// Create an empty table with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            holidays: BTreeSet::new(),
        }
    }

    /// Create a table from a list of dates.
    pub fn from_dates(name: impl Into<String>, dates: impl IntoIterator<Item = Date>) -> Self {
        Self {
            name: name.into(),
            holidays: dates.into_iter().collect(),
        }
    }

    /// Create a table from `YYYY-MM-DD` strings.
    ///
    /// Fails on the first string that is not a valid date.
    pub fn from_iso_dates<I, S>(name: impl Into<String>, dates: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let holidays = dates
            .into_iter()
            .map(|s| Date::parse_iso(s.as_ref()))
            .collect::<Result<BTreeSet<_>>>()?;
        Ok(Self {
            name: name.into(),
            holidays,
        })
    }

    /// Add a holiday.
    pub fn add_holiday(&mut self, date: Date) {
        self.holidays.insert(date);
    }

    /// Remove a previously added holiday.
    pub fn remove_holiday(&mut self, date: Date) {
        self.holidays.remove(&date);
    }

    /// Merge every holiday from `other` into this table.
    pub fn extend_from(&mut self, other: &BankHolidayTable) {
        self.holidays.extend(other.holidays.iter().copied());
    }

    /// Return the number of listed holidays.
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }

    /// Iterate over the listed holidays in date order.
    pub fn iter(&self) -> impl Iterator<Item = Date> + '_ {
        self.holidays.iter().copied()
    }

    /// The listed holidays falling in `year`.
    pub fn holidays_for_year(&self, year: u16) -> Vec<Date> {
        self.iter().filter(|d| d.year() == year).collect()
    }
}

impl HolidayCalendar for BankHolidayTable {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_bank_holiday(&self, date: Date) -> bool {
        self.holidays.contains(&date)
    }
}
