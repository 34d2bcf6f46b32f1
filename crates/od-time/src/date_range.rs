//! `DateRange`: an inclusive span of calendar days.

use crate::date::Date;

/// An inclusive `[start, end]` span of dates.
///
/// Nothing stops `start > end` at construction time (ranges arrive from user
/// input and share links); such a range is treated as empty by
/// [`DateRange::contains`] and flagged by [`DateRange::is_reversed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    /// First day in the range.
    pub start_date: Date,
    /// Last day in the range.
    pub end_date: Date,
}

impl DateRange {
    /// Create a range from its two ends.
    pub fn new(start_date: Date, end_date: Date) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// Return `true` if `start_date > end_date`.
    pub fn is_reversed(&self) -> bool {
        self.start_date > self.end_date
    }

    /// Return `true` if `date` lies within the range, both ends included.
    pub fn contains(&self, date: Date) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Number of days covered (0 for a reversed range).
    pub fn len_days(&self) -> u32 {
        if self.is_reversed() {
            0
        } else {
            (self.end_date - self.start_date) as u32 + 1
        }
    }

    /// Every date in the range, in order. Empty for a reversed range.
    pub fn days(&self) -> impl Iterator<Item = Date> {
        let start = self.start_date;
        (0..self.len_days() as i32).filter_map(move |n| start.add_days(n).ok())
    }
}
