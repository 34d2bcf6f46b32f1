//! Pattern classifier: deduce a canonical rotation from clicked dates.
//!
//! Every clicked date is bucketed into one of four cycle weeks by its
//! distance (in whole weeks) from the Monday of the earliest click. The four
//! resulting week lists are then compared to name the shape of the rotation.

use crate::pattern_type::PatternType;
use crate::selections::Selections;
use od_time::{day_name, Date, NameLength};
use tracing::{debug, warn};

/// Description returned when nothing has been clicked.
pub const EMPTY_SELECTION_PROMPT: &str =
    "Click days in the calendar to define your office schedule pattern.";

/// Description returned when the clicks contain no weekday.
pub const NO_DAYS_SELECTED: &str = "No days selected.";

/// The result of classifying a set of clicked dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationPattern {
    /// Office weekdays per cycle week.
    pub selections: Selections,
    /// The detected shape.
    pub pattern_type: PatternType,
    /// Monday of the week holding the earliest click; `None` for no clicks.
    pub pattern_anchor_date: Option<Date>,
    /// Human-readable summary.
    pub pattern_description: String,
}

impl RotationPattern {
    fn empty() -> Self {
        Self {
            selections: Selections::default(),
            pattern_type: PatternType::None,
            pattern_anchor_date: None,
            pattern_description: EMPTY_SELECTION_PROMPT.to_string(),
        }
    }
}

/// Deduce the rotation described by `dates`.
///
/// Order and duplicates are irrelevant. Weekend dates are accepted and
/// ignored.
pub fn deduce(dates: &[Date]) -> RotationPattern {
    let Some(&earliest) = dates.iter().min() else {
        return RotationPattern::empty();
    };
    let anchor = earliest.monday_of_week();

    let mut selections = Selections::default();
    for &date in dates {
        let weekday = date.weekday();
        if weekday.is_weekend() {
            continue;
        }
        let week_offset = anchor.days_between(date).div_euclid(7);
        let cycle_index = week_offset.rem_euclid(4) as usize;
        selections.week_mut(cycle_index).push(weekday.day_number());
    }
    selections.normalize();

    let (pattern_type, selections) = classify(selections);
    let pattern_description = describe(pattern_type, &selections);
    debug!(%pattern_type, %anchor, clicks = dates.len(), "deduced rotation");

    RotationPattern {
        selections,
        pattern_type,
        pattern_anchor_date: Some(anchor),
        pattern_description,
    }
}

/// Deduce from `YYYY-MM-DD` strings, skipping any that do not parse.
pub fn deduce_from_strings<I, S>(dates: I) -> RotationPattern
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parsed: Vec<Date> = dates
        .into_iter()
        .filter_map(|s| match Date::parse_iso(s.as_ref()) {
            Ok(d) => Some(d),
            Err(e) => {
                warn!(input = s.as_ref(), error = %e, "skipping unparsable clicked date");
                None
            }
        })
        .collect();
    deduce(&parsed)
}

/// Name the shape of `selections`, replicating a constant week into all four
/// slots.
fn classify(selections: Selections) -> (PatternType, Selections) {
    let mut distinct: Vec<&[u8]> = Vec::with_capacity(4);
    for week in selections.weeks() {
        if !week.is_empty() && !distinct.contains(&week) {
            distinct.push(week);
        }
    }

    match distinct.len() {
        0 => (PatternType::None, selections),
        1 => {
            let days = distinct[0].to_vec();
            let pattern_type = if days.len() == 1 {
                PatternType::ConstantSingleDay
            } else {
                PatternType::Constant
            };
            (pattern_type, Selections::replicated(days))
        }
        2 => {
            let [w1, w2, w3, w4] = selections.weeks();
            let pattern_type = if w1 == w3 && w2 == w4 {
                PatternType::Ab
            } else if w1 == w2 && w3 == w4 {
                PatternType::AaBb
            } else if w1 == w4 && w2 == w3 {
                PatternType::Abba
            } else {
                PatternType::Custom4Week
            };
            (pattern_type, selections)
        }
        _ => (PatternType::Custom4Week, selections),
    }
}

/// Render the display summary for a rotation.
pub fn describe(pattern_type: PatternType, selections: &Selections) -> String {
    match pattern_type {
        PatternType::None => NO_DAYS_SELECTED.to_string(),
        PatternType::ConstantSingleDay => {
            format!("Constant: {}s weekly. Lucky you, eh!", day_list(&selections.week1))
        }
        PatternType::Constant => format!("Constant: {} weekly.", day_list(&selections.week1)),
        PatternType::Ab => format!(
            "A/B Pattern. A: ({}), B: ({}).",
            day_list_or_none(&selections.week1),
            day_list_or_none(&selections.week2)
        ),
        PatternType::AaBb => format!(
            "AA/BB Pattern. W1&2: ({}), W3&4: ({}).",
            day_list_or_none(&selections.week1),
            day_list_or_none(&selections.week3)
        ),
        PatternType::Abba => format!(
            "ABBA Pattern. W1&4: ({}), W2&3: ({}). Office Queen!",
            day_list_or_none(&selections.week1),
            day_list_or_none(&selections.week2)
        ),
        PatternType::Custom4Week => {
            let parts: Vec<String> = selections
                .weeks()
                .iter()
                .enumerate()
                .filter(|(_, w)| !w.is_empty())
                .map(|(i, w)| format!("W{}: {}", i + 1, day_list(w)))
                .collect();
            format!("Custom Rotational: {}.", parts.join("; "))
        }
    }
}

fn day_list(days: &[u8]) -> String {
    days.iter()
        .map(|&d| day_name(d, NameLength::Short).unwrap_or("?"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn day_list_or_none(days: &[u8]) -> String {
    if days.is_empty() {
        "No days".to_string()
    } else {
        day_list(days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn empty_input() {
        let p = deduce(&[]);
        assert_eq!(p.pattern_type, PatternType::None);
        assert!(p.selections.is_empty());
        assert_eq!(p.pattern_anchor_date, None);
        assert_eq!(p.pattern_description, EMPTY_SELECTION_PROMPT);
    }

    #[test]
    fn weekend_only_input() {
        // Saturday and Sunday
        let p = deduce(&[date(2025, 1, 11), date(2025, 1, 12)]);
        assert_eq!(p.pattern_type, PatternType::None);
        assert!(p.selections.is_empty());
        assert_eq!(p.pattern_anchor_date, Some(date(2025, 1, 6)));
        assert_eq!(p.pattern_description, NO_DAYS_SELECTED);
    }

    #[test]
    fn order_and_duplicates_do_not_matter() {
        let a = deduce(&[date(2025, 1, 8), date(2025, 1, 6), date(2025, 1, 8)]);
        let b = deduce(&[date(2025, 1, 6), date(2025, 1, 8)]);
        assert_eq!(a, b);
    }

    #[test]
    fn aa_bb_shape() {
        // Weeks 1 and 2: Monday; weeks 3 and 4: Thursday
        let p = deduce(&[
            date(2025, 1, 6),
            date(2025, 1, 13),
            date(2025, 1, 23),
            date(2025, 1, 30),
        ]);
        assert_eq!(p.pattern_type, PatternType::AaBb);
        assert_eq!(
            p.pattern_description,
            "AA/BB Pattern. W1&2: (Mon), W3&4: (Thu)."
        );
    }

    #[test]
    fn abba_shape() {
        // A = Mon+Tue in weeks 1 and 4, B = Fri in weeks 2 and 3
        let p = deduce(&[
            date(2025, 1, 6),
            date(2025, 1, 7),
            date(2025, 1, 17),
            date(2025, 1, 24),
            date(2025, 1, 27),
            date(2025, 1, 28),
        ]);
        assert_eq!(p.pattern_type, PatternType::Abba);
        assert_eq!(
            p.pattern_description,
            "ABBA Pattern. W1&4: (Mon, Tue), W2&3: (Fri). Office Queen!"
        );
    }

    #[test]
    fn describe_custom_omits_empty_weeks() {
        let s = Selections::from_weeks([vec![1], vec![], vec![2, 4], vec![]]);
        assert_eq!(
            describe(PatternType::Custom4Week, &s),
            "Custom Rotational: W1: Mon; W3: Tue, Thu."
        );
    }

    #[test]
    fn strings_that_do_not_parse_are_skipped() {
        let p = deduce_from_strings(["2025-01-06", "not a date", "2025-02-30"]);
        assert_eq!(p.pattern_type, PatternType::ConstantSingleDay);
        assert_eq!(p.selections.week1, vec![1]);
    }
}
