// Wall-clock formatting for the top bar label

use chrono::NaiveDateTime;

/// Format a timestamp for the top bar: 24-hour time, two spaces, then the
/// full weekday name and an unpadded d/M/yy date.
pub fn format_clock(now: NaiveDateTime) -> String {
    format!("{}  {}", now.format("%H:%M"), now.format("%A, %-d/%-m/%y"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn test_format_morning() {
        // 2024-03-05 was a Tuesday
        assert_eq!(format_clock(at(2024, 3, 5, 9, 7)), "09:07  Tuesday, 5/3/24");
    }

    #[test]
    fn test_format_evening_double_digits() {
        // 2025-12-31 was a Wednesday
        assert_eq!(
            format_clock(at(2025, 12, 31, 23, 59)),
            "23:59  Wednesday, 31/12/25"
        );
    }

    #[test]
    fn test_midnight_keeps_hour_padding() {
        // Minutes and hours stay zero-padded, day and month do not
        assert_eq!(format_clock(at(2024, 1, 1, 0, 0)), "00:00  Monday, 1/1/24");
    }
}
