use chrono::{NaiveDate, NaiveDateTime, Weekday};
use strtools::utils::datetime::*;
use strtools::FormatError;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn reference_now() -> NaiveDateTime {
    // Wednesday afternoon
    ymd(2025, 1, 15).and_hms_opt(14, 30, 0).unwrap()
}

fn parse(input: &str) -> NaiveDate {
    parse_natural_date_from(input, reference_now()).unwrap()
}

#[test]
fn test_next_weekday() {
    let monday = ymd(2025, 1, 13);
    assert_eq!(next_weekday(monday, Weekday::Fri), Some(ymd(2025, 1, 17)));
}

#[test]
fn test_next_weekday_same_day() {
    let monday = ymd(2023, 12, 25);
    assert_eq!(next_weekday(monday, Weekday::Mon), Some(ymd(2024, 1, 1)));
}

#[test]
fn test_iso_and_numeric_dates() {
    assert_eq!(parse("2020-01-05"), ymd(2020, 1, 5));
    assert_eq!(parse("2020/01/05"), ymd(2020, 1, 5));
    assert_eq!(parse("20200105"), ymd(2020, 1, 5));
    assert_eq!(parse("01/05/2020"), ymd(2020, 1, 5));
    assert_eq!(parse("1/5/20"), ymd(2020, 1, 5));
    assert_eq!(parse("05-01-2020"), ymd(2020, 1, 5));
    assert_eq!(parse("05.01.2020"), ymd(2020, 1, 5));
}

#[test]
fn test_datetime_forms_keep_time() {
    let dt = parse_natural_datetime_from("2020-01-05 10:30:15", reference_now()).unwrap();
    assert_eq!(dt, ymd(2020, 1, 5).and_hms_opt(10, 30, 15).unwrap());

    let dt = parse_natural_datetime_from("2020-01-05T10:30:00", reference_now()).unwrap();
    assert_eq!(dt, ymd(2020, 1, 5).and_hms_opt(10, 30, 0).unwrap());
}

#[test]
fn test_fractional_seconds() {
    let dt = parse_natural_datetime_from("2020-01-05 10:30:00.5", reference_now()).unwrap();
    assert_eq!(dt, ymd(2020, 1, 5).and_hms_milli_opt(10, 30, 0, 500).unwrap());
}

#[test]
fn test_month_name_with_time() {
    let dt = parse_natural_datetime_from("1 Jan 2020 10:00", reference_now()).unwrap();
    assert_eq!(dt, ymd(2020, 1, 1).and_hms_opt(10, 0, 0).unwrap());

    let dt = parse_natural_datetime_from("January 5, 2020 08:15:30", reference_now()).unwrap();
    assert_eq!(dt, ymd(2020, 1, 5).and_hms_opt(8, 15, 30).unwrap());
}

#[test]
fn test_leading_weekday() {
    assert_eq!(parse("Sunday, January 5, 2020"), ymd(2020, 1, 5));
    assert_eq!(parse("Sun 5 Jan 2020"), ymd(2020, 1, 5));
    // A weekday that does not match moves forward to the next one
    assert_eq!(parse("Monday, January 5, 2020"), ymd(2020, 1, 6));

    let dt = parse_natural_datetime_from("Friday 2020-01-05 10:00", reference_now()).unwrap();
    assert_eq!(dt, ymd(2020, 1, 10).and_hms_opt(10, 0, 0).unwrap());
}

#[test]
fn test_weekday_phrase_at_calendar_end() {
    let end = NaiveDate::MAX.and_hms_opt(0, 0, 0).unwrap();
    assert!(matches!(parse_natural_date_from("next monday", end), Err(FormatError::Parse(_))));

    let start = NaiveDate::MIN.and_hms_opt(0, 0, 0).unwrap();
    assert!(matches!(parse_natural_date_from("last monday", start), Err(FormatError::Parse(_))));
}

#[test]
fn test_zoned_forms_keep_written_date() {
    assert_eq!(parse("2020-01-05T23:30:00-08:00"), ymd(2020, 1, 5));
    assert_eq!(parse("Sun, 05 Jan 2020 10:00:00 +0000"), ymd(2020, 1, 5));
}

#[test]
fn test_month_name_forms() {
    assert_eq!(parse("January 5, 2020"), ymd(2020, 1, 5));
    assert_eq!(parse("jan 5 2020"), ymd(2020, 1, 5));
    assert_eq!(parse("5 January 2020"), ymd(2020, 1, 5));
    assert_eq!(parse("January 5th, 2020"), ymd(2020, 1, 5));
    assert_eq!(parse("March 2021"), ymd(2021, 3, 1));
    assert_eq!(parse("March 3"), ymd(2025, 3, 3));
}

#[test]
fn test_keywords() {
    assert_eq!(parse("today"), ymd(2025, 1, 15));
    assert_eq!(parse("  Tomorrow "), ymd(2025, 1, 16));
    assert_eq!(parse("yesterday"), ymd(2025, 1, 14));
    assert_eq!(
        parse_natural_datetime_from("now", reference_now()).unwrap(),
        reference_now()
    );
}

#[test]
fn test_timestamp() {
    assert_eq!(parse("@1577836800"), ymd(2020, 1, 1));
}

#[test]
fn test_relative_offsets() {
    assert_eq!(parse("+3 days"), ymd(2025, 1, 18));
    assert_eq!(parse("-1 week"), ymd(2025, 1, 8));
    assert_eq!(parse("2 weeks ago"), ymd(2025, 1, 1));
    assert_eq!(parse("1 fortnight"), ymd(2025, 1, 29));
    assert_eq!(parse("+1 year"), ymd(2026, 1, 15));
    assert_eq!(parse("next month"), ymd(2025, 2, 15));
    assert_eq!(parse("last year"), ymd(2024, 1, 15));
}

#[test]
fn test_month_offset_clamps_to_month_end() {
    let jan_31 = ymd(2025, 1, 31).and_hms_opt(0, 0, 0).unwrap();
    assert_eq!(parse_natural_date_from("+1 month", jan_31).unwrap(), ymd(2025, 2, 28));
}

#[test]
fn test_weekday_phrases() {
    // Reference date is a Wednesday
    assert_eq!(parse("wednesday"), ymd(2025, 1, 15));
    assert_eq!(parse("friday"), ymd(2025, 1, 17));
    assert_eq!(parse("next wednesday"), ymd(2025, 1, 22));
    assert_eq!(parse("last wednesday"), ymd(2025, 1, 8));
    assert_eq!(parse("last mon"), ymd(2025, 1, 13));
}

#[test]
fn test_unparsable_input() {
    let now = reference_now();
    assert_eq!(parse_natural_date_from("", now), Err(FormatError::EmptyInput));
    assert_eq!(parse_natural_date_from("   ", now), Err(FormatError::EmptyInput));
    assert!(matches!(parse_natural_date_from("not a date", now), Err(FormatError::Parse(_))));
    assert!(matches!(parse_natural_date_from("2020-13-45", now), Err(FormatError::Parse(_))));
    assert!(matches!(parse_natural_date_from("next blursday", now), Err(FormatError::Parse(_))));
}
