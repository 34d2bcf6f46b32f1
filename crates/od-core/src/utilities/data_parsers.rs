//! Data parsing helpers.
//!
//! Dates and times arrive in two shapes: the display form (`YYYY-MM-DD`,
//! `HH:mm`) and the compact wire form with separators stripped (`YYYYMMDD`,
//! `HHmm`). These parsers only split and convert; range validation belongs to
//! the typed constructors in `od-time`.

/// Parse a date string in ISO 8601 format (`YYYY-MM-DD`).
///
/// Returns `(year, month, day)` on success. Field widths are strict.
pub fn parse_iso_date(s: &str) -> Option<(u16, u8, u8)> {
    let s = s.trim();
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 3 {
        return None;
    }
    if parts[0].len() != 4 || parts[1].len() != 2 || parts[2].len() != 2 {
        return None;
    }
    if !parts.iter().all(|p| is_ascii_digits(p)) {
        return None;
    }
    let year: u16 = parts[0].parse().ok()?;
    let month: u8 = parts[1].parse().ok()?;
    let day: u8 = parts[2].parse().ok()?;
    Some((year, month, day))
}

/// Parse a dash-free date string (`YYYYMMDD`).
pub fn parse_compact_date(s: &str) -> Option<(u16, u8, u8)> {
    if s.len() != 8 || !is_ascii_digits(s) {
        return None;
    }
    let year: u16 = s[0..4].parse().ok()?;
    let month: u8 = s[4..6].parse().ok()?;
    let day: u8 = s[6..8].parse().ok()?;
    Some((year, month, day))
}

/// Parse a clock time in `HH:mm` format.
pub fn parse_clock_time(s: &str) -> Option<(u8, u8)> {
    let (h, m) = s.trim().split_once(':')?;
    if h.len() != 2 || m.len() != 2 || !is_ascii_digits(h) || !is_ascii_digits(m) {
        return None;
    }
    Some((h.parse().ok()?, m.parse().ok()?))
}

/// Parse a colon-free clock time (`HHmm`).
pub fn parse_compact_time(s: &str) -> Option<(u8, u8)> {
    if s.len() != 4 || !is_ascii_digits(s) {
        return None;
    }
    Some((s[0..2].parse().ok()?, s[2..4].parse().ok()?))
}

/// Decode a digit-packed list (`"135"` → `[1, 3, 5]`).
///
/// Non-digit characters are dropped rather than rejected.
pub fn parse_digit_list(s: &str) -> Vec<u8> {
    s.chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as u8)
        .collect()
}

fn is_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
