use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Canonical header format. `%.f` only prints a fraction when one is present.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Accepted on read-back, tried in order.
const DATETIME_FORMATS: &[&str] = &[
    TIMESTAMP_FORMAT,
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Formats a timestamp as ISO-8601 (`2024-03-05T08:00:00`).
pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Accepted with a UTC offset (`+01:00`, `+0100`, `Z`), tried after RFC 3339.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
];

/// Parses an ISO-8601 date or date-time. A bare date resolves to midnight.
/// An offset is accepted but dropped: the local wall-clock fields are kept.
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use auroralog_core::dates::parse_timestamp;
/// let t = parse_timestamp("2024-03-05").unwrap();
/// assert_eq!(t, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap().and_hms_opt(0, 0, 0).unwrap());
///
/// let t = parse_timestamp("2024-03-05T08:30:00").unwrap();
/// assert_eq!(t.format("%H:%M").to_string(), "08:30");
/// ```
pub fn parse_timestamp(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .or_else(|| parse_with_offset(input))
        .or_else(|| {
            NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

fn parse_with_offset(input: &str) -> Option<NaiveDateTime> {
    DateTime::parse_from_rfc3339(input)
        .ok()
        .or_else(|| {
            OFFSET_FORMATS
                .iter()
                .find_map(|fmt| DateTime::parse_from_str(input, fmt).ok())
        })
        .map(|t| t.naive_local())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn whole_seconds_have_no_fraction() {
        assert_eq!(format_timestamp(dt(8, 0, 0)), "2024-03-05T08:00:00");
    }

    #[test]
    fn fraction_survives_round_trip() {
        let t = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_micro_opt(8, 0, 0, 123_456)
            .unwrap();
        let s = format_timestamp(t);
        assert_eq!(s, "2024-03-05T08:00:00.123456");
        assert_eq!(parse_timestamp(&s), Some(t));
    }

    #[test]
    fn accepts_space_separator_and_minutes_only() {
        assert_eq!(parse_timestamp("2024-03-05 08:00:00"), Some(dt(8, 0, 0)));
        assert_eq!(parse_timestamp("2024-03-05T21:15"), Some(dt(21, 15, 0)));
    }

    #[test]
    fn offset_keeps_local_wall_clock() {
        assert_eq!(parse_timestamp("2024-03-05T08:00:00+01:00"), Some(dt(8, 0, 0)));
        assert_eq!(parse_timestamp("2024-03-05T08:00:00Z"), Some(dt(8, 0, 0)));
        assert_eq!(parse_timestamp("2024-03-05T08:00:00-0530"), Some(dt(8, 0, 0)));
        assert_eq!(parse_timestamp("2024-03-05T08:00+02:00"), Some(dt(8, 0, 0)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp("2024-13-01"), None);
        assert_eq!(parse_timestamp(""), None);
    }
}
