//! `Weekday`: day-of-week enum.
//!
//! Two numberings are in play. [`Weekday::ordinal`] is Monday-first
//! (Monday = 1 … Sunday = 7) and drives date arithmetic. [`Weekday::day_number`]
//! is Sunday-first (Sunday = 0 … Saturday = 6) and is the numbering stored in
//! schedule selections and on the wire. Office days Monday–Friday are 1–5 in
//! both.

/// Day of the week, discriminants follow the Monday-first ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Weekday {
    Monday = 1,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// Monday-first order, indexed by `ordinal - 1`.
const MONDAY_FIRST: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

const LONG_NAMES: [&str; 7] = [
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
];

impl Weekday {
    /// Look up a Monday-first ordinal, 1 to 7.
    pub fn from_ordinal(n: u8) -> Option<Self> {
        let index = usize::from(n).checked_sub(1)?;
        MONDAY_FIRST.get(index).copied()
    }

    /// Look up a Sunday-first day number, 0 to 6.
    pub fn from_day_number(n: u8) -> Option<Self> {
        match n {
            0 => Some(Weekday::Sunday),
            1..=6 => Self::from_ordinal(n),
            _ => None,
        }
    }

    /// Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        self.ordinal() >= 6
    }

    /// Monday to Friday.
    pub fn is_weekday(&self) -> bool {
        !self.is_weekend()
    }

    /// Monday-first ordinal.
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Sunday-first day number, as stored in selections.
    pub fn day_number(&self) -> u8 {
        self.ordinal() % 7
    }

    /// Three-letter name such as `"Wed"`.
    pub fn short_name(&self) -> &'static str {
        &self.long_name()[..3]
    }

    /// Full English name.
    pub fn long_name(&self) -> &'static str {
        LONG_NAMES[usize::from(self.ordinal() - 1)]
    }
}

/// Name style for [`day_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameLength {
    /// `"Mon"`.
    #[default]
    Short,
    /// `"Monday"`.
    Long,
}

/// Name the Sunday-first day number `n`, or `None` when `n > 6`.
pub fn day_name(n: u8, length: NameLength) -> Option<&'static str> {
    let wd = Weekday::from_day_number(n)?;
    Some(match length {
        NameLength::Short => wd.short_name(),
        NameLength::Long => wd.long_name(),
    })
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.long_name())
    }
}
