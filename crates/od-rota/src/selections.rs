//! `Selections`: the four week slots of a rotation.

use od_core::utilities::data_formatters::format_digit_list;
use od_core::utilities::data_parsers::parse_digit_list;
use serde::{Deserialize, Serialize};

/// Separator between week segments in the compact wire form.
const WEEK_SEPARATOR: char = '|';

/// Office weekdays for each of the four weeks of a cycle.
///
/// Each list holds Sunday-first day numbers (Monday = 1 … Friday = 5),
/// unique and ascending when produced by the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selections {
    /// Week 1 of the cycle (the anchor week).
    pub week1: Vec<u8>,
    /// Week 2 of the cycle.
    pub week2: Vec<u8>,
    /// Week 3 of the cycle.
    pub week3: Vec<u8>,
    /// Week 4 of the cycle.
    pub week4: Vec<u8>,
}

impl Selections {
    /// Build from four week lists.
    pub fn from_weeks([week1, week2, week3, week4]: [Vec<u8>; 4]) -> Self {
        Self {
            week1,
            week2,
            week3,
            week4,
        }
    }

    /// The same list in all four weeks.
    pub fn replicated(days: Vec<u8>) -> Self {
        Self::from_weeks([days.clone(), days.clone(), days.clone(), days])
    }

    /// All four weeks, in cycle order.
    pub fn weeks(&self) -> [&[u8]; 4] {
        [&self.week1, &self.week2, &self.week3, &self.week4]
    }

    /// The week at zero-based cycle position `index` (taken modulo 4).
    pub fn week(&self, index: usize) -> &[u8] {
        self.weeks()[index % 4]
    }

    /// Mutable access to the week at zero-based cycle position `index` (modulo 4).
    pub fn week_mut(&mut self, index: usize) -> &mut Vec<u8> {
        match index % 4 {
            0 => &mut self.week1,
            1 => &mut self.week2,
            2 => &mut self.week3,
            _ => &mut self.week4,
        }
    }

    /// Return `true` if no week holds any day.
    pub fn is_empty(&self) -> bool {
        self.weeks().iter().all(|w| w.is_empty())
    }

    /// Sort and deduplicate every week.
    pub fn normalize(&mut self) {
        for i in 0..4 {
            let week = self.week_mut(i);
            week.sort_unstable();
            week.dedup();
        }
    }

    /// Encode as `"135|24||"`: each week's digits concatenated, weeks joined by `|`.
    pub fn to_compact_string(&self) -> String {
        self.weeks()
            .iter()
            .map(|w| format_digit_list(w))
            .collect::<Vec<_>>()
            .join("|")
    }

    /// Decode the compact form. Missing segments become empty weeks, extra
    /// segments are ignored, and non-digit characters are dropped.
    pub fn parse_compact(s: &str) -> Self {
        let mut segments = s.split(WEEK_SEPARATOR);
        let mut next = || segments.next().map(parse_digit_list).unwrap_or_default();
        let weeks = [next(), next(), next(), next()];
        Self::from_weeks(weeks)
    }
}
