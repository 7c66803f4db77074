//! Parsing and French formatting of backend timestamps.
//!
//! The backend mixes RFC 3339 strings, `YYYY-MM-DD HH:MM:SS` and plain dates.
//! Offsets are converted to the browser's local time; naive values are taken
//! as already local. Unparseable input is shown as-is.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, Timelike};

const MONTHS_FR: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// Parse any of the timestamp shapes the backend sends.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// `03/05/2024`
pub fn format_date_fr(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format("%d/%m/%Y").to_string(),
        None => raw.to_string(),
    }
}

/// `3 mai 2024 à 14:05`
pub fn format_datetime_long_fr(raw: &str) -> String {
    let Some(dt) = parse_timestamp(raw) else {
        return raw.to_string();
    };
    let month = MONTHS_FR[dt.month0() as usize];
    format!(
        "{} {} {} à {:02}:{:02}",
        dt.day(),
        month,
        dt.year(),
        dt.hour(),
        dt.minute()
    )
}

/// Today in the browser's local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
