use weft::date::{format_date, parse_date};

#[test]
fn test_format_long_month() {
    let date = parse_date("2024-01-05T00:00:00Z").unwrap();
    assert_eq!(format_date(&date), "January 5, 2024");
}

#[test]
fn test_format_unpadded_day() {
    let date = parse_date("2024-03-18T00:00:00Z").unwrap();
    assert_eq!(format_date(&date), "March 18, 2024");
}

#[test]
fn test_format_uses_utc() {
    // 23:30 UTC-5 on the 4th is already the 5th in UTC.
    let date = parse_date("2024-01-04T23:30:00-05:00").unwrap();
    assert_eq!(format_date(&date), "January 5, 2024");
}

#[test]
fn test_parse_rejects_garbage() {
    assert!(parse_date("yesterday").is_err());
}
