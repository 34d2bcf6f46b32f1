//! United Kingdom bank holiday presets.

use crate::calendars::bank_holiday_table::BankHolidayTable;
use crate::date::Date;

/// England and Wales bank holidays, 2024–2027, as published.
///
/// Substitute days are listed where they replace a weekend date
/// (e.g. Boxing Day 2026 falls on a Saturday, so Monday 28 December is off).
const ENGLAND_AND_WALES: [(u16, u8, u8); 32] = [
    // 2024
    (2024, 1, 1),
    (2024, 3, 29),
    (2024, 4, 1),
    (2024, 5, 6),
    (2024, 5, 27),
    (2024, 8, 26),
    (2024, 12, 25),
    (2024, 12, 26),
    // 2025
    (2025, 1, 1),
    (2025, 4, 18),
    (2025, 4, 21),
    (2025, 5, 5),
    (2025, 5, 26),
    (2025, 8, 25),
    (2025, 12, 25),
    (2025, 12, 26),
    // 2026
    (2026, 1, 1),
    (2026, 4, 3),
    (2026, 4, 6),
    (2026, 5, 4),
    (2026, 5, 25),
    (2026, 8, 31),
    (2026, 12, 25),
    (2026, 12, 28),
    // 2027
    (2027, 1, 1),
    (2027, 3, 26),
    (2027, 3, 29),
    (2027, 5, 3),
    (2027, 5, 31),
    (2027, 8, 30),
    (2027, 12, 27),
    (2027, 12, 28),
];

/// The England and Wales bank holiday table.
pub fn england_and_wales() -> BankHolidayTable {
    BankHolidayTable::from_dates(
        "England and Wales",
        ENGLAND_AND_WALES
            .iter()
            .filter_map(|&(y, m, d)| Date::from_ymd(y, m, d).ok()),
    )
}
