//! Concrete holiday calendars.

/// Bank holiday table: holidays supplied as explicit dates.
pub mod bank_holiday_table;

/// United Kingdom bank holiday presets.
pub mod united_kingdom;
