//! `Date` type.
//!
//! A day is a whole-number serial counted from the last day of 1899, so
//! 1900-01-01 is serial 1 and 2199-12-31 is the last representable day.
//! Week arithmetic is integer subtraction on the serial and never sees
//! time-of-day or daylight-saving shifts. Calendar fields are resolved
//! through `chrono`.

use crate::weekday::Weekday;
use chrono::{Datelike, NaiveDate};
use od_core::errors::{Error, Result};
use od_core::utilities::data_formatters::ordinal_suffix;
use od_core::utilities::data_parsers::{parse_compact_date, parse_iso_date};

/// `num_days_from_ce` of 1899-12-31.
const CE_OFFSET: i32 = 693_595;

const FIRST_YEAR: u16 = 1900;
const LAST_YEAR: u16 = 2199;

/// A calendar day, ordered and hashable by its serial.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

impl Date {
    /// 1900-01-01, a Monday.
    pub const MIN: Date = Date(1);

    /// 2199-12-31.
    pub const MAX: Date = Date(109_573);

    fn checked(serial: i32) -> Result<Self> {
        if (Self::MIN.0..=Self::MAX.0).contains(&serial) {
            Ok(Date(serial))
        } else {
            Err(Error::Date(format!(
                "serial {serial} is outside {FIRST_YEAR}-01-01..={LAST_YEAR}-12-31"
            )))
        }
    }

    /// Build a date from its serial.
    pub fn from_serial(serial: i32) -> Result<Self> {
        Self::checked(serial)
    }

    /// Build a date from calendar fields, rejecting impossible days such as
    /// the 30th of February.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "{year} is not between {FIRST_YEAR} and {LAST_YEAR}"
            )));
        }
        let naive = NaiveDate::from_ymd_opt(year.into(), month.into(), day.into())
            .ok_or_else(|| Error::Date(format!("{year}-{month:02}-{day:02} is not a calendar day")))?;
        Ok(Date(naive.num_days_from_ce() - CE_OFFSET))
    }

    /// Parse `YYYY-MM-DD`.
    pub fn parse_iso(s: &str) -> Result<Self> {
        let (y, m, d) = parse_iso_date(s).ok_or_else(|| Error::parse("ISO date", s))?;
        Self::from_ymd(y, m, d)
    }

    /// Parse the dash-free wire form `YYYYMMDD`.
    pub fn parse_compact(s: &str) -> Result<Self> {
        let (y, m, d) = parse_compact_date(s).ok_or_else(|| Error::parse("compact date", s))?;
        Self::from_ymd(y, m, d)
    }

    /// Convert from a `chrono` date.
    pub fn from_naive(date: NaiveDate) -> Result<Self> {
        Self::checked(date.num_days_from_ce() - CE_OFFSET)
    }

    /// The same day as a `chrono` date.
    pub fn to_naive(self) -> NaiveDate {
        NaiveDate::from_num_days_from_ce_opt(self.0 + CE_OFFSET)
            .expect("every serial in MIN..=MAX is a valid chrono date")
    }

    /// Days since 1899-12-31.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Calendar year.
    pub fn year(&self) -> u16 {
        self.to_naive().year() as u16
    }

    /// Month, 1 for January.
    pub fn month(&self) -> u8 {
        self.to_naive().month() as u8
    }

    /// Day of the month, from 1.
    pub fn day_of_month(&self) -> u8 {
        self.to_naive().day() as u8
    }

    /// Day of the week.
    pub fn weekday(&self) -> Weekday {
        // MIN is a Monday
        let ordinal = (self.0 - Self::MIN.0).rem_euclid(7) as u8 + 1;
        Weekday::from_ordinal(ordinal).expect("ordinal is in 1..=7")
    }

    /// Monday starting the week that holds this date. A Sunday maps back six
    /// days.
    pub fn monday_of_week(self) -> Self {
        Date(self.0 - (self.weekday().ordinal() as i32 - 1))
    }

    /// Shift by `n` days, failing when the result leaves `MIN..=MAX`.
    pub fn add_days(self, n: i32) -> Result<Self> {
        self.0
            .checked_add(n)
            .ok_or_else(|| Error::Date(format!("cannot shift {self} by {n} days")))
            .and_then(Self::checked)
    }

    /// Signed day count from `self` to `other`.
    pub fn days_between(self, other: Date) -> i32 {
        other - self
    }

    /// Format as `YYYY-MM-DD`.
    pub fn to_iso_string(&self) -> String {
        self.to_string()
    }

    /// Format as the dash-free wire form `YYYYMMDD`.
    pub fn to_compact_string(&self) -> String {
        self.to_naive().format("%Y%m%d").to_string()
    }

    /// Short ordinal label such as `"6th Jan"`.
    pub fn format_with_ordinal(&self) -> String {
        let naive = self.to_naive();
        format!("{}{} {}", naive.day(), ordinal_suffix(naive.day()), naive.format("%b"))
    }
}

// ── Operators ────────────────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Date;

    fn add(self, days: i32) -> Date {
        self.add_days(days).expect("date moved past MAX")
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, days: i32) {
        *self = *self + days;
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Date;

    fn sub(self, days: i32) -> Date {
        self.add_days(-days).expect("date moved before MIN")
    }
}

impl std::ops::Sub for Date {
    type Output = i32;

    fn sub(self, earlier: Date) -> i32 {
        self.0 - earlier.0
    }
}

// ── Text forms ───────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_naive().format("%Y-%m-%d"))
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

impl std::str::FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_iso(s)
    }
}

impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Date::parse_iso(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn bounds_match_serials() {
        assert_eq!(ymd(1900, 1, 1), Date::MIN);
        assert_eq!(ymd(2199, 12, 31), Date::MAX);
        assert_eq!(Date::MIN.weekday(), Weekday::Monday);
        assert!(Date::from_serial(0).is_err());
        assert!(Date::from_serial(Date::MAX.serial() + 1).is_err());
        assert!(Date::from_ymd(1899, 12, 31).is_err());
    }

    #[test]
    fn fields_survive_leap_and_century_edges() {
        for (y, m, d) in [(1900, 2, 28), (1900, 3, 1), (2000, 2, 29), (2024, 12, 31), (2100, 3, 1)] {
            let date = ymd(y, m, d);
            assert_eq!((date.year(), date.month(), date.day_of_month()), (y, m, d));
        }
        assert!(Date::from_ymd(1900, 2, 29).is_err());
        assert!(Date::from_ymd(2025, 13, 1).is_err());
        assert!(Date::from_ymd(2025, 4, 31).is_err());
    }

    #[test]
    fn sunday_belongs_to_previous_monday() {
        let monday = ymd(2025, 1, 6);
        for offset in 0..7 {
            assert_eq!((monday + offset).monday_of_week(), monday);
        }
        assert_eq!(ymd(2025, 1, 5).monday_of_week(), ymd(2024, 12, 30));
        assert_eq!(ymd(2025, 1, 11).weekday(), Weekday::Saturday);
    }

    #[test]
    fn text_forms() {
        let d = Date::parse_iso("2024-01-01").unwrap();
        assert_eq!(d.to_iso_string(), "2024-01-01");
        assert_eq!(d.to_compact_string(), "20240101");
        assert_eq!(Date::parse_compact("20240101").unwrap(), d);
        assert!(Date::parse_iso("2024-02-30").is_err());
        assert_eq!(ymd(2025, 3, 22).format_with_ordinal(), "22nd Mar");
        assert_eq!(ymd(2025, 11, 11).format_with_ordinal(), "11th Nov");
        assert_eq!(ymd(2025, 8, 23).format_with_ordinal(), "23rd Aug");
    }

    #[test]
    fn shifting_and_differences() {
        let new_year = ymd(2023, 1, 1);
        let february = new_year + 31;
        assert_eq!(february, ymd(2023, 2, 1));
        assert_eq!(february - new_year, 31);
        assert_eq!(february.days_between(new_year), -31);
        assert!(Date::MAX.add_days(1).is_err());
        assert!(Date::MIN.add_days(i32::MIN).is_err());
    }

    #[test]
    fn chrono_round_trip() {
        let naive = NaiveDate::from_ymd_opt(2025, 10, 17).unwrap();
        let date = Date::from_naive(naive).unwrap();
        assert_eq!(date, ymd(2025, 10, 17));
        assert_eq!(date.to_naive(), naive);
    }
}
