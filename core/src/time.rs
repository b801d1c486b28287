use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime};
use anyhow::{anyhow, Result};

/// Reads the calendar day of an entry date. Time components are dropped so
/// that two entries on the same day always land in the same bucket.
pub fn parse_entry_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();

    if let Ok(d) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(d);
    }
    // ISO timestamps from the API ("2024-01-02T00:00:00.000Z"). The date is
    // taken as written, not shifted into the local zone.
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.naive_local().date());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, fmt) {
            return Some(dt.date());
        }
    }
    None
}

/// Resolves `today`, `yesterday`, `+Nd`/`-Nd` relative to `today`, or any
/// format accepted by [`parse_entry_date`].
pub fn parse_human_date_from(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let input = input.trim();

    match input.to_lowercase().as_str() {
        "today" | "tod" => return Ok(today),
        "yesterday" => return Ok(today - Duration::days(1)),
        _ => {}
    }

    if let Some(rest) = input.strip_prefix(['+', '-']) {
        let days: i64 = rest
            .strip_suffix('d')
            .unwrap_or(rest)
            .parse()
            .map_err(|_| anyhow!("Invalid relative date: {}", input))?;
        return Ok(if input.starts_with('-') {
            today - Duration::days(days)
        } else {
            today + Duration::days(days)
        });
    }

    parse_entry_date(input).ok_or_else(|| anyhow!("Could not parse date: {}", input))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_entry_date_formats() {
        assert_eq!(parse_entry_date("2024-01-01"), Some(date(2024, 1, 1)));
        assert_eq!(parse_entry_date(" 2024-01-01 "), Some(date(2024, 1, 1)));
        assert_eq!(parse_entry_date("2024-01-01T23:59:59.999Z"), Some(date(2024, 1, 1)));
        assert_eq!(parse_entry_date("2024-01-01T08:00:00+05:30"), Some(date(2024, 1, 1)));
        assert_eq!(parse_entry_date("2024-01-01T08:00:00"), Some(date(2024, 1, 1)));
        assert_eq!(parse_entry_date("2024-01-01 17:45:00"), Some(date(2024, 1, 1)));
        assert_eq!(parse_entry_date("01/02/2024"), None);
        assert_eq!(parse_entry_date(""), None);
    }

    #[test]
    fn test_parse_human_date() {
        let today = date(2024, 3, 1);
        assert_eq!(parse_human_date_from("today", today).unwrap(), today);
        assert_eq!(parse_human_date_from("yesterday", today).unwrap(), date(2024, 2, 29));
        assert_eq!(parse_human_date_from("-2d", today).unwrap(), date(2024, 2, 28));
        assert_eq!(parse_human_date_from("+3", today).unwrap(), date(2024, 3, 4));
        assert_eq!(parse_human_date_from("2024-01-15", today).unwrap(), date(2024, 1, 15));
        assert!(parse_human_date_from("+xd", today).is_err());
        assert!(parse_human_date_from("someday", today).is_err());
    }
}
