//! Data formatting helpers.
//!
//! Ordinal suffixes for day labels (`"st"`, `"nd"`), 12-hour clock strings (`"2pm"`,
//! `"9:30am"`) and the digit-packed lists used by the compact wire format.

/// English ordinal suffix for a day of the month: `"st"`, `"nd"`, `"rd"` or `"th"`.
pub fn ordinal_suffix(n: u32) -> &'static str {
    match n % 100 {
        11..=13 => "th",
        _ => match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

/// Format a 24-hour clock reading as a compact 12-hour string.
///
/// Whole hours drop the minutes: `(14, 0)` → `"2pm"`, `(9, 30)` → `"9:30am"`,
/// `(0, 15)` → `"12:15am"`.
pub fn format_time_12_hour(hour: u8, minute: u8) -> String {
    let suffix = if hour >= 12 { "pm" } else { "am" };
    let h12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    if minute == 0 {
        format!("{h12}{suffix}")
    } else {
        format!("{h12}:{minute:02}{suffix}")
    }
}

/// Concatenate single-digit values with no separator (`[1, 3, 5]` → `"135"`).
pub fn format_digit_list(values: &[u8]) -> String {
    values.iter().map(|v| v.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffixes_for_every_day_of_month() {
        let labels: Vec<String> = (1..=31).map(|d| format!("{d}{}", ordinal_suffix(d))).collect();
        assert_eq!(&labels[..4], ["1st", "2nd", "3rd", "4th"]);
        assert_eq!(&labels[10..13], ["11th", "12th", "13th"]);
        assert_eq!(&labels[20..23], ["21st", "22nd", "23rd"]);
        assert_eq!(labels[30], "31st");
    }

    #[test]
    fn test_time_12_hour() {
        assert_eq!(format_time_12_hour(14, 0), "2pm");
        assert_eq!(format_time_12_hour(15, 0), "3pm");
        assert_eq!(format_time_12_hour(9, 30), "9:30am");
        assert_eq!(format_time_12_hour(12, 0), "12pm");
        assert_eq!(format_time_12_hour(0, 15), "12:15am");
        assert_eq!(format_time_12_hour(23, 5), "11:05pm");
    }

    #[test]
    fn test_digit_list() {
        assert_eq!(format_digit_list(&[1, 3, 5]), "135");
        assert_eq!(format_digit_list(&[]), "");
    }
}
