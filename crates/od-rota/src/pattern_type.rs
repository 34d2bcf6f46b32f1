//! `PatternType`: which rotation shape a schedule follows.

use serde::{Deserialize, Serialize};

/// The rotation shape of a schedule.
///
/// The wire code (see [`PatternType::code`]) is fixed and must never be
/// renumbered: existing share links depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternType {
    /// No pattern; nothing is an office day.
    #[default]
    None,
    /// The same multi-day week, every week.
    Constant,
    /// Two alternating weeks, A then B.
    Ab,
    /// Two weeks of A followed by two weeks of B.
    AaBb,
    /// A, B, B, A.
    Abba,
    /// Four independent weeks.
    #[serde(rename = "custom_4_week")]
    Custom4Week,
    /// A single day, every week.
    ConstantSingleDay,
}

impl PatternType {
    /// Every variant, in wire-code order.
    pub const ALL: [PatternType; 7] = [
        PatternType::None,
        PatternType::Constant,
        PatternType::Ab,
        PatternType::AaBb,
        PatternType::Abba,
        PatternType::Custom4Week,
        PatternType::ConstantSingleDay,
    ];

    /// Integer code used by the compact wire format.
    pub fn code(&self) -> u8 {
        match self {
            PatternType::None => 0,
            PatternType::Constant => 1,
            PatternType::Ab => 2,
            PatternType::AaBb => 3,
            PatternType::Abba => 4,
            PatternType::Custom4Week => 5,
            PatternType::ConstantSingleDay => 6,
        }
    }

    /// Inverse of [`PatternType::code`]; unknown codes map to `None`.
    pub fn from_code(code: i64) -> PatternType {
        Self::ALL
            .iter()
            .copied()
            .find(|p| i64::from(p.code()) == code)
            .unwrap_or(PatternType::None)
    }

    /// The snake_case tag (`"aa_bb"`, `"custom_4_week"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternType::None => "none",
            PatternType::Constant => "constant",
            PatternType::Ab => "ab",
            PatternType::AaBb => "aa_bb",
            PatternType::Abba => "abba",
            PatternType::Custom4Week => "custom_4_week",
            PatternType::ConstantSingleDay => "constant_single_day",
        }
    }

    /// Number of weeks before the rotation repeats.
    pub fn cycle_length(&self) -> i32 {
        match self {
            PatternType::None | PatternType::Constant | PatternType::ConstantSingleDay => 1,
            PatternType::Ab => 2,
            PatternType::AaBb | PatternType::Abba | PatternType::Custom4Week => 4,
        }
    }
}

impl std::fmt::Display for PatternType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for p in PatternType::ALL {
            assert_eq!(PatternType::from_code(i64::from(p.code())), p);
        }
        assert_eq!(PatternType::from_code(7), PatternType::None);
        assert_eq!(PatternType::from_code(-1), PatternType::None);
    }

    #[test]
    fn serde_tags_match_as_str() {
        for p in PatternType::ALL {
            let json = serde_json::to_string(&p).unwrap();
            assert_eq!(json, format!("\"{}\"", p.as_str()));
        }
    }
}
