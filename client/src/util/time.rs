//! Timestamp parsing and display helpers.
//!
//! Backend timestamps are RFC 3339; campaign forms exchange `datetime-local`
//! values (`YYYY-MM-DDTHH:MM`) which are read as UTC. Functions that depend on
//! the current time take `now` explicitly; [`now`] supplies it from the
//! browser clock.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

/// Current wall-clock time.
#[must_use]
pub fn now() -> OffsetDateTime {
    #[cfg(feature = "hydrate")]
    {
        let millis = js_sys::Date::now();
        // Browser clocks are far inside the representable range.
        #[allow(clippy::cast_possible_truncation)]
        let nanos = (millis * 1_000_000.0) as i128;
        OffsetDateTime::from_unix_timestamp_nanos(nanos).unwrap_or(OffsetDateTime::UNIX_EPOCH)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        OffsetDateTime::now_utc()
    }
}

/// Parse an RFC 3339 timestamp or a `datetime-local` value.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(parsed);
    }
    let minutes = format_description!("[year]-[month]-[day]T[hour]:[minute]");
    let seconds = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    PrimitiveDateTime::parse(raw, minutes)
        .or_else(|_| PrimitiveDateTime::parse(raw, seconds))
        .ok()
        .map(PrimitiveDateTime::assume_utc)
}

/// Render a timestamp for a `datetime-local` input. Unparseable input is
/// passed through so the field still shows what the backend sent.
#[must_use]
pub fn to_datetime_local(raw: &str) -> String {
    let format = format_description!("[year]-[month]-[day]T[hour]:[minute]");
    parse_timestamp(raw).and_then(|t| t.format(format).ok()).unwrap_or_else(|| raw.to_owned())
}

/// `Mar 1, 2024`.
#[must_use]
pub fn format_date(raw: &str) -> String {
    let format = format_description!("[month repr:short] [day padding:none], [year]");
    parse_timestamp(raw).and_then(|t| t.format(format).ok()).unwrap_or_else(|| raw.to_owned())
}

/// `2024-03-01 09:30`.
#[must_use]
pub fn format_date_time(raw: &str) -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]");
    parse_timestamp(raw).and_then(|t| t.format(format).ok()).unwrap_or_else(|| raw.to_owned())
}

/// `m:ss` for a countdown; negative input renders as `0:00`.
#[must_use]
pub fn format_countdown(seconds: i64) -> String {
    let seconds = seconds.max(0);
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
