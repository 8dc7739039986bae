use chrono::{DateTime, Datelike, NaiveDate, NaiveTime};

/// Wire format for dates in query parameters and chart labels
pub const WIRE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date as typed into an `<input type="date">`
///
/// Empty or malformed input yields `None`, which callers treat as "not set".
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), WIRE_DATE_FORMAT).ok()
}

/// Parse a date returned by the API
///
/// Accepts `YYYY-MM-DD` as well as the RFC 2822 form
/// (`Mon, 01 Jan 2024 00:00:00 GMT`) that Flask emits for date columns.
pub fn parse_wire_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, WIRE_DATE_FORMAT)
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc2822(value)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// Format a date for query parameters
pub fn to_wire_date(date: NaiveDate) -> String {
    date.format(WIRE_DATE_FORMAT).to_string()
}

/// Normalize an API date to `YYYY-MM-DD`, leaving unknown formats untouched
pub fn normalize_wire_date(value: &str) -> String {
    parse_wire_date(value)
        .map(to_wire_date)
        .unwrap_or_else(|| value.to_string())
}

/// Long display form, e.g. "January 1st, 2024"
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{} {}{}, {}",
        date.format("%B"),
        date.day(),
        ordinal_suffix(date.day()),
        date.year()
    )
}

/// Display an API date in long form, or verbatim if it cannot be parsed
pub fn display_date(value: &str) -> String {
    parse_wire_date(value)
        .map(format_long_date)
        .unwrap_or_else(|| value.to_string())
}

/// Display an API time as 12-hour clock, e.g. "09:00 AM"
pub fn display_time(value: &str) -> String {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map(|time| time.format("%I:%M %p").to_string())
        .unwrap_or_else(|_| value.to_string())
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}
