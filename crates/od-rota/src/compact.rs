//! Compact wire shape used inside share links.
//!
//! Keys are shortened, dates lose their dashes, times lose their colon and
//! weekday lists are packed as digit strings:
//!
//! ```json
//! {"n":"Team","pt":2,"paD":"20240101","sL":"12|45|12|45",
//!  "sH":{"e":1,"sD":"20240603","eD":"20240830","fT":"1400","aD":"5"}}
//! ```
//!
//! Decoding never fails. Every field is read leniently: a missing or
//! wrong-typed value falls back to the default a fresh schedule would carry.

use crate::pattern_type::PatternType;
use crate::schedule::{FestiveBreak, ScheduleData, SummerHours, SHARED_SCHEDULE_NAME};
use crate::selections::Selections;
use od_core::utilities::data_formatters::format_digit_list;
use od_core::utilities::data_parsers::parse_digit_list;
use od_time::{ClockTime, Date};
use serde::{Deserialize, Serialize};

/// The minified schedule carried by a share link.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompactSchedule {
    /// Schedule name.
    #[serde(rename = "n", default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    /// Pattern type wire code (see [`PatternType::code`]).
    #[serde(rename = "pt", default, deserialize_with = "lenient::integer")]
    pub pattern_code: Option<i64>,
    /// Anchor date as `YYYYMMDD`, or `null`.
    #[serde(rename = "paD", default, deserialize_with = "lenient::string")]
    pub anchor: Option<String>,
    /// Selections as `"135|24||"`.
    #[serde(rename = "sL", default, deserialize_with = "lenient::string")]
    pub selections: Option<String>,
    /// Present only when summer hours are enabled.
    #[serde(
        rename = "sH",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::overlay"
    )]
    pub summer_hours: Option<CompactSummerHours>,
    /// Present only when the festive break is enabled.
    #[serde(
        rename = "fB",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::overlay"
    )]
    pub festive_break: Option<CompactFestiveBreak>,
}

/// Compact summer-hours overlay.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompactSummerHours {
    /// Always `1` on encode; its presence is what matters on decode.
    #[serde(rename = "e", default, deserialize_with = "lenient::integer")]
    pub enabled: Option<i64>,
    /// Start date as `YYYYMMDD`.
    #[serde(rename = "sD", default, deserialize_with = "lenient::string")]
    pub start: Option<String>,
    /// End date as `YYYYMMDD`.
    #[serde(rename = "eD", default, deserialize_with = "lenient::string")]
    pub end: Option<String>,
    /// Finish time as `HHmm`.
    #[serde(rename = "fT", default, deserialize_with = "lenient::string")]
    pub finish_time: Option<String>,
    /// Affected day numbers as a digit string.
    #[serde(rename = "aD", default, deserialize_with = "lenient::string")]
    pub affected_days: Option<String>,
}

/// Compact festive-break overlay.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompactFestiveBreak {
    /// Always `1` on encode.
    #[serde(rename = "e", default, deserialize_with = "lenient::integer")]
    pub enabled: Option<i64>,
    /// Start date as `YYYYMMDD`.
    #[serde(rename = "sD", default, deserialize_with = "lenient::string")]
    pub start: Option<String>,
    /// End date as `YYYYMMDD`.
    #[serde(rename = "eD", default, deserialize_with = "lenient::string")]
    pub end: Option<String>,
}

/// Map a schedule onto its compact shape. Disabled overlays are omitted.
pub fn encode(schedule: &ScheduleData) -> CompactSchedule {
    let sh = &schedule.summer_hours;
    let fb = &schedule.festive_break;
    CompactSchedule {
        name: Some(schedule.name.clone()),
        pattern_code: Some(i64::from(schedule.pattern_type.code())),
        anchor: schedule.pattern_anchor_date.map(|d| d.to_compact_string()),
        selections: Some(schedule.selections.to_compact_string()),
        summer_hours: sh.enabled.then(|| CompactSummerHours {
            enabled: Some(1),
            start: Some(sh.start_date.to_compact_string()),
            end: Some(sh.end_date.to_compact_string()),
            finish_time: Some(sh.finish_time.to_compact_string()),
            affected_days: Some(format_digit_list(&sh.affected_days)),
        }),
        festive_break: fb.enabled.then(|| CompactFestiveBreak {
            enabled: Some(1),
            start: Some(fb.start_date.to_compact_string()),
            end: Some(fb.end_date.to_compact_string()),
        }),
    }
}

/// Rebuild a full schedule from its compact shape.
///
/// Fields that are absent or malformed keep the defaults of
/// [`ScheduleData::with_defaults`] for `today`. The result is flagged as
/// loaded from a share link and its description is regenerated.
pub fn decode(compact: &CompactSchedule, today: Date) -> ScheduleData {
    let name = compact
        .name
        .as_deref()
        .filter(|n| !n.is_empty())
        .unwrap_or(SHARED_SCHEDULE_NAME);
    let mut schedule = ScheduleData::with_defaults(name, today);

    schedule.pattern_type = compact
        .pattern_code
        .map(PatternType::from_code)
        .unwrap_or_default();
    schedule.pattern_anchor_date = compact
        .anchor
        .as_deref()
        .and_then(compact_date)
        .map(Date::monday_of_week);
    schedule.selections = compact
        .selections
        .as_deref()
        .map(Selections::parse_compact)
        .unwrap_or_default();

    if let Some(sh) = &compact.summer_hours {
        apply_summer_hours(&mut schedule.summer_hours, sh);
    }
    if let Some(fb) = &compact.festive_break {
        apply_festive_break(&mut schedule.festive_break, fb);
    }

    schedule.loaded_from_share_link = true;
    schedule.refresh_description();
    schedule
}

fn apply_summer_hours(target: &mut SummerHours, sh: &CompactSummerHours) {
    target.enabled = true;
    if let Some(d) = sh.start.as_deref().and_then(compact_date) {
        target.start_date = d;
    }
    if let Some(d) = sh.end.as_deref().and_then(compact_date) {
        target.end_date = d;
    }
    if let Some(t) = sh.finish_time.as_deref().and_then(compact_time) {
        target.finish_time = t;
    }
    target.affected_days = sh
        .affected_days
        .as_deref()
        .map(parse_digit_list)
        .unwrap_or_default();
}

fn apply_festive_break(target: &mut FestiveBreak, fb: &CompactFestiveBreak) {
    target.enabled = true;
    if let Some(d) = fb.start.as_deref().and_then(compact_date) {
        target.start_date = d;
    }
    if let Some(d) = fb.end.as_deref().and_then(compact_date) {
        target.end_date = d;
    }
}

fn compact_date(s: &str) -> Option<Date> {
    Date::parse_compact(s).ok()
}

fn compact_time(s: &str) -> Option<ClockTime> {
    ClockTime::parse_compact(s).ok()
}

/// Field deserializers that turn wrong-typed values into `None` instead of
/// failing the whole document.
mod lenient {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => Some(s),
            _ => None,
        })
    }

    /// Integral numbers, or strings holding one in plain decimal form
    /// (`"2"`, not `" 2"` or `"02"`).
    pub fn integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
            Value::String(s) => s.parse().ok().filter(|n: &i64| n.to_string() == s),
            _ => None,
        })
    }

    /// Any truthy value switches an overlay on; its sub-fields are read
    /// only when it is an object.
    pub fn overlay<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned + Default,
    {
        let value = Value::deserialize(deserializer)?;
        if !is_truthy(&value) {
            return Ok(None);
        }
        Ok(Some(match value {
            Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
            _ => T::default(),
        }))
    }

    fn is_truthy(value: &Value) -> bool {
        match value {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}
