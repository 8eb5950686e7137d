use chrono::{NaiveDate, NaiveDateTime};
use strtools::utils::date::*;
use strtools::FormatError;

fn reference_now() -> NaiveDateTime {
    // Wednesday
    NaiveDate::from_ymd_opt(2025, 1, 15)
        .unwrap()
        .and_hms_opt(14, 30, 0)
        .unwrap()
}

#[test]
fn test_format_ymd() {
    let date = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();
    assert_eq!(format_ymd(date), "2023-12-25");
}

#[test]
fn test_date_to_canonical_empty() {
    assert_eq!(date_to_canonical(""), "");
    assert_eq!(try_date_to_canonical(""), Err(FormatError::EmptyInput));
}

#[test]
fn test_date_to_canonical_garbage() {
    assert_eq!(date_to_canonical("not a date"), "");
    assert!(matches!(try_date_to_canonical("not a date"), Err(FormatError::Parse(_))));
}

#[test]
fn test_date_to_canonical_month_name() {
    assert_eq!(date_to_canonical("January 5, 2020"), "2020-01-05");
    assert_eq!(date_to_canonical("5 Jan 2020"), "2020-01-05");
}

#[test]
fn test_date_to_canonical_numeric_forms() {
    assert_eq!(date_to_canonical("2020-01-05"), "2020-01-05");
    assert_eq!(date_to_canonical("01/05/2020"), "2020-01-05");
    assert_eq!(date_to_canonical("2020-01-05 23:59:59"), "2020-01-05");
}

#[test]
fn test_date_to_canonical_relative() {
    let now = reference_now();
    assert_eq!(try_date_to_canonical_at("tomorrow", now).unwrap(), "2025-01-16");
    assert_eq!(try_date_to_canonical_at("+1 month", now).unwrap(), "2025-02-15");
    assert_eq!(try_date_to_canonical_at("next monday", now).unwrap(), "2025-01-20");
}

#[test]
fn test_date_from_canonical_default_style() {
    assert_eq!(date_from_canonical("2020-01-05", "%m/%d/%Y"), "01/05/2020");
    assert_eq!(date_from_canonical_default("2020-01-05"), "01/05/2020");
    assert_eq!(date_from_canonical_default("garbage"), "");
}

#[test]
fn test_date_from_canonical_custom_format() {
    assert_eq!(date_from_canonical("2020-01-05", "%A, %B %-d %Y"), "Sunday, January 5 2020");
    assert_eq!(date_from_canonical("2020-01-05 08:15:00", "%Y%m%d %H:%M"), "20200105 08:15");
}

#[test]
fn test_date_from_canonical_failures_are_empty() {
    assert_eq!(date_from_canonical("", "%m/%d/%Y"), "");
    assert_eq!(date_from_canonical("garbage", "%m/%d/%Y"), "");
    assert_eq!(date_from_canonical("2020-01-05", "%Q"), "");
}

#[test]
fn test_try_date_from_canonical_errors() {
    assert_eq!(try_date_from_canonical("", "%m/%d/%Y"), Err(FormatError::EmptyInput));
    assert!(matches!(
        try_date_from_canonical("2020-01-05", "%z"),
        Err(FormatError::InvalidFormat(_))
    ));
    assert!(matches!(
        try_date_from_canonical_at("someday", "%Y", reference_now()),
        Err(FormatError::Parse(_))
    ));
}

#[test]
fn test_validate_date_format() {
    assert!(validate_date_format("%m/%d/%Y").is_ok());
    assert!(validate_date_format("%Y-%m-%d %H:%M").is_ok());
    assert!(validate_date_format("%Q").is_err());
    assert!(validate_date_format("%Z").is_err());
}
