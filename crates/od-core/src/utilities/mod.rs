//! Text parsing and formatting helpers.

/// Ordinal suffixes and 12-hour clock rendering.
pub mod data_formatters;

/// Date / time / digit-list parsers for ISO and compact wire forms.
pub mod data_parsers;
