use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{de, Deserialize, Deserializer};

/// Date-time layouts accepted without an offset; they are read as UTC
const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// Parse a front matter date: RFC 3339, a naive date-time, or a bare date
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

// YAML has no timestamp type in serde_yaml, so dates arrive as strings
pub fn deserialize_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).ok_or_else(|| de::Error::custom(format!("invalid date `{}`", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_bare_date() {
        let dt = parse_date("2024-01-02").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2024, 1, 2));
        assert_eq!(dt.hour(), 0);
    }

    #[test]
    fn test_rfc3339_is_normalized_to_utc() {
        let dt = parse_date("2024-06-01T10:30:00+02:00").unwrap();
        assert_eq!(dt.hour(), 8);
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn test_naive_datetime() {
        let dt = parse_date("2024-06-01 23:15:00").unwrap();
        assert_eq!(dt.hour(), 23);
        assert!(parse_date("2024-06-01 23:15").is_some());
    }

    #[test]
    fn test_garbage() {
        assert!(parse_date("yesterday").is_none());
        assert!(parse_date("2024-13-40").is_none());
    }
}
