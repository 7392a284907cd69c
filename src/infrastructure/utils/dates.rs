use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const ONGOING_LABEL: &str = "Present";

/// Parses the date formats the API has been seen to emit: plain dates,
/// RFC 3339 timestamps and naive timestamps.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
}

/// `dd/mm/yyyy`, `Present` for a missing or blank date, and the raw text when it cannot be parsed.
pub fn format_date(raw: Option<&str>) -> String {
    match raw.filter(|r| !r.trim().is_empty()) {
        None => ONGOING_LABEL.to_string(),
        Some(raw) => parse_date(raw)
            .map(|d| d.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|| raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_plain_and_timestamp_dates() {
        assert_eq!(format_date(Some("2021-03-07")), "07/03/2021");
        assert_eq!(format_date(Some("2021-03-07T10:00:00Z")), "07/03/2021");
        assert_eq!(format_date(Some("2021-03-07T10:00:00.000000")), "07/03/2021");
    }

    #[test]
    fn missing_end_date_is_present() {
        assert_eq!(format_date(None), "Present");
    }

    #[test]
    fn blank_end_date_is_present() {
        assert_eq!(format_date(Some("")), "Present");
        assert_eq!(format_date(Some("  ")), "Present");
    }

    #[test]
    fn garbage_is_passed_through() {
        assert_eq!(format_date(Some("sometime")), "sometime");
        assert_eq!(parse_date("sometime"), None);
    }
}
