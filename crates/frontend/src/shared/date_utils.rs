/// Utilities for posting dates
///
/// The backend sends `posted_date` either as a plain date or as a timestamp;
/// only the date part is used.
use chrono::{NaiveDate, Utc};

fn parse_date(date_str: &str) -> Option<NaiveDate> {
    let date_part = date_str.get(..10)?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Short age of a posting relative to `today`
/// Example: "Today", "Yesterday", "3 days ago", "2 weeks ago", "15/1/2024"
pub fn format_relative_to(date_str: &str, today: NaiveDate) -> String {
    let Some(date) = parse_date(date_str) else {
        return date_str.to_string();
    };
    let days = (today - date).num_days().abs();
    match days {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=6 => format!("{} days ago", days),
        7..=13 => "1 week ago".to_string(),
        14..=29 => format!("{} weeks ago", days / 7),
        _ => short(date),
    }
}

fn short(date: NaiveDate) -> String {
    date.format("%-d/%-m/%Y").to_string()
}

/// Day/month/year without padding
/// Example: "2024-01-05T10:00:00Z" -> "5/1/2024"
pub fn format_short(date_str: &str) -> String {
    parse_date(date_str)
        .map(short)
        .unwrap_or_else(|| date_str.to_string())
}

pub fn format_relative(date_str: &str) -> String {
    format_relative_to(date_str, Utc::now().date_naive())
}

/// Long form for detail pages
/// Example: "2024-03-15T14:02:26Z" -> "15 March 2024"
pub fn format_long(date_str: &str) -> String {
    parse_date(date_str)
        .map(|d| d.format("%-d %B %Y").to_string())
        .unwrap_or_else(|| date_str.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 20).unwrap()
    }

    #[test]
    fn test_format_relative() {
        assert_eq!(format_relative_to("2024-06-20", today()), "Today");
        assert_eq!(format_relative_to("2024-06-19T08:00:00Z", today()), "Yesterday");
        assert_eq!(format_relative_to("2024-06-15", today()), "5 days ago");
        assert_eq!(format_relative_to("2024-06-10", today()), "1 week ago");
        assert_eq!(format_relative_to("2024-05-30", today()), "3 weeks ago");
        assert_eq!(format_relative_to("2024-01-15", today()), "15/1/2024");
    }

    #[test]
    fn test_format_short() {
        assert_eq!(format_short("2024-01-05T10:00:00Z"), "5/1/2024");
    }

    #[test]
    fn test_format_long() {
        assert_eq!(format_long("2024-03-15T14:02:26.123Z"), "15 March 2024");
        assert_eq!(format_long("2024-12-01"), "1 December 2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_relative_to("invalid", today()), "invalid");
        assert_eq!(format_long(""), "");
    }
}
