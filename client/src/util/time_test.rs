use super::*;

#[test]
fn parses_rfc3339_with_offset() {
    let t = parse_timestamp("2024-03-01T09:30:00+02:00").unwrap();
    assert_eq!(t.unix_timestamp(), 1_709_278_200);
}

#[test]
fn parses_datetime_local_as_utc() {
    let t = parse_timestamp("2024-03-01T07:30").unwrap();
    assert_eq!(t.unix_timestamp(), 1_709_278_200);
}

#[test]
fn blank_and_garbage_do_not_parse() {
    assert!(parse_timestamp("").is_none());
    assert!(parse_timestamp("soon").is_none());
}

#[test]
fn datetime_local_round_trips_backend_timestamp() {
    assert_eq!(to_datetime_local("2024-03-01T07:30:00Z"), "2024-03-01T07:30");
    assert_eq!(to_datetime_local("garbage"), "garbage");
}

#[test]
fn display_formats() {
    assert_eq!(format_date("2024-03-01T07:30:00Z"), "Mar 1, 2024");
    assert_eq!(format_date_time("2024-03-01T07:30:00Z"), "2024-03-01 07:30");
}

#[test]
fn countdown_formats_minutes_and_seconds() {
    assert_eq!(format_countdown(300), "5:00");
    assert_eq!(format_countdown(61), "1:01");
    assert_eq!(format_countdown(-5), "0:00");
}
