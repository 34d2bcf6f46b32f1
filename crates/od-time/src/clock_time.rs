//! `ClockTime`: a wall-clock time of day with minute precision.

use od_core::errors::{Error, Result};
use od_core::utilities::data_formatters::format_time_12_hour;
use od_core::utilities::data_parsers::{parse_clock_time, parse_compact_time};

/// A time of day, `00:00` to `23:59`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Create a time from hour (0–23) and minute (0–59).
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(Error::InvalidArgument(format!(
                "time {hour:02}:{minute:02} out of range"
            )));
        }
        Ok(Self { hour, minute })
    }

    /// Parse `HH:mm`.
    pub fn parse(s: &str) -> Result<Self> {
        let (h, m) = parse_clock_time(s).ok_or_else(|| Error::parse("clock time", s))?;
        Self::new(h, m)
    }

    /// Parse the colon-free wire form `HHmm`.
    pub fn parse_compact(s: &str) -> Result<Self> {
        let (h, m) = parse_compact_time(s).ok_or_else(|| Error::parse("compact time", s))?;
        Self::new(h, m)
    }

    /// Format as `HHmm`.
    pub fn to_compact_string(&self) -> String {
        format!("{:02}{:02}", self.hour, self.minute)
    }

    /// Format as a 12-hour label (`"3pm"`, `"9:30am"`).
    pub fn to_12_hour_string(&self) -> String {
        format_time_12_hour(self.hour, self.minute)
    }
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl std::fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ClockTime({self})")
    }
}

impl std::str::FromStr for ClockTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl serde::Serialize for ClockTime {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for ClockTime {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ClockTime::parse(&s).map_err(serde::de::Error::custom)
    }
}
