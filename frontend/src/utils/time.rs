use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};

pub fn now_local() -> DateTime<Local> {
    Local::now()
}

pub fn today_local() -> NaiveDate {
    now_local().date_naive()
}

/// Accepts RFC 3339 timestamps as well as the zone-less forms the backend
/// emits for database timestamps (treated as UTC).
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, pattern) {
            return Some(naive.and_utc());
        }
    }
    parse_date(value).and_then(|date| date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc()))
}

/// Date part of either a plain `YYYY-MM-DD` or a full timestamp.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let head = value.trim().get(..10)?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

/// Value of an `<input type="datetime-local">`, interpreted in local time.
pub fn parse_local_input(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

pub fn to_local_input(value: &str) -> String {
    parse_timestamp(value)
        .map(|ts| ts.with_timezone(&Local).format("%Y-%m-%dT%H:%M").to_string())
        .unwrap_or_default()
}

pub fn format_clock(ts: &DateTime<Local>) -> String {
    ts.format("%-I:%M:%S %p").to_string()
}

pub fn format_time(value: Option<&str>) -> String {
    value
        .and_then(parse_timestamp)
        .map(|ts| ts.with_timezone(&Local).format("%-I:%M %p").to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn format_date(value: &str) -> String {
    parse_date(value)
        .map(|date| date.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| value.to_string())
}

pub fn format_date_time(value: &str) -> String {
    parse_timestamp(value)
        .map(|ts| ts.with_timezone(&Local).format("%b %-d, %Y %-I:%M %p").to_string())
        .unwrap_or_else(|| value.to_string())
}

/// Worked duration between two timestamps as `"7h 45m"`.
pub fn worked_duration(punch_in: Option<&str>, punch_out: Option<&str>) -> Option<String> {
    let start = parse_timestamp(punch_in?)?;
    let end = parse_timestamp(punch_out?)?;
    let minutes = (end - start).num_minutes();
    if minutes < 0 {
        return None;
    }
    Some(format!("{}h {}m", minutes / 60, minutes % 60))
}

pub fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Good morning",
        12..=16 => "Good afternoon",
        _ => "Good evening",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_rfc3339_and_naive_timestamps() {
        let with_zone = parse_timestamp("2025-03-05T09:30:00+00:00").unwrap();
        assert_eq!(with_zone.hour(), 9);
        let naive = parse_timestamp("2025-03-05T09:30:00.123456").unwrap();
        assert_eq!(naive.minute(), 30);
        let date_only = parse_timestamp("2025-03-05").unwrap();
        assert_eq!(date_only.day(), 5);
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn parse_date_reads_the_date_prefix() {
        assert_eq!(
            parse_date("2025-12-31T23:00:00Z"),
            NaiveDate::from_ymd_opt(2025, 12, 31)
        );
        assert!(parse_date("12/31/2025").is_none());
    }

    #[test]
    fn local_input_accepts_minutes_and_seconds() {
        assert!(parse_local_input("2025-03-05T10:15").is_some());
        assert!(parse_local_input("2025-03-05T10:15:30").is_some());
        assert!(parse_local_input("").is_none());
    }

    #[test]
    fn worked_duration_formats_hours_and_minutes() {
        assert_eq!(
            worked_duration(Some("2025-03-05T09:00:00Z"), Some("2025-03-05T17:45:00Z")),
            Some("8h 45m".to_string())
        );
        assert_eq!(worked_duration(Some("2025-03-05T09:00:00Z"), None), None);
        assert_eq!(
            worked_duration(Some("2025-03-05T10:00:00Z"), Some("2025-03-05T09:00:00Z")),
            None
        );
    }

    #[test]
    fn format_date_falls_back_to_raw_value() {
        assert_eq!(format_date("2025-03-05"), "Mar 5, 2025");
        assert_eq!(format_date("soon"), "soon");
        assert_eq!(format_time(None), "-");
    }

    #[test]
    fn greeting_tracks_time_of_day() {
        assert_eq!(greeting_for_hour(8), "Good morning");
        assert_eq!(greeting_for_hour(13), "Good afternoon");
        assert_eq!(greeting_for_hour(21), "Good evening");
    }
}
