//! Natural-language date parsing
//!
//! This module turns free-form date text ("January 5, 2020", "2020-01-05",
//! "tomorrow", "+3 days", "next friday", "@1577836800") into a
//! `NaiveDateTime`. Strategies are tried in a fixed order and the first one
//! that understands the whole input wins.
//!
//! Relative forms are resolved against a reference instant. The plain entry
//! points use the local clock; the `*_from` variants take the reference
//! explicitly so results are reproducible.

use crate::error::{FormatError, FormatResult};
use chrono::{DateTime, Datelike, Duration, Local, Months, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;

/// Date-and-time layouts tried after normalization
const DATETIME_FORMATS: &[&str] = &[
    "%m/%d/%Y %H:%M:%S%.f",
    "%m/%d/%Y %H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dt%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dt%H:%M",
    "%Y/%m/%d %H:%M:%S%.f",
    "%B %d %Y %H:%M:%S%.f",
    "%B %d %Y %H:%M",
    "%d %B %Y %H:%M:%S%.f",
    "%d %B %Y %H:%M",
];

/// Date-only layouts tried after normalization
///
/// `%Y` accepts one to four digits, so year-last layouts come first and
/// two-digit years are tried before four-digit ones: "01/05/20" must not be
/// read as the year 1 or the year 20.
const DATE_FORMATS: &[&str] = &[
    "%m/%d/%y",
    "%m/%d/%Y",
    "%d-%m-%y",
    "%d-%m-%Y",
    "%d.%m.%y",
    "%d.%m.%Y",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y%m%d",
    "%B %d %Y",
    "%d %B %Y",
    "%Y %B %d",
];

/// Ordinal suffixes on day numbers ("5th", "21st")
static ORDINAL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,2})(?:st|nd|rd|th)\b").expect("Valid regex pattern"));

/// Relative offsets such as "+3 days", "-1 week" or "2 months ago"
static RELATIVE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([+-]?\d+)\s*(day|week|fortnight|month|year)s?(\s+ago)?$").expect("Valid regex pattern")
});

/// "next week", "last month", "this year" and friends
static RELATIVE_WORD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(next|last|this)\s+(day|week|fortnight|month|year)$").expect("Valid regex pattern"));

/// "January 2020": month name and a four-digit year, no day
static MONTH_YEAR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z]+ \d{4}$").expect("Valid regex pattern"));

/// "January 5": month name and a day, no year
static MONTH_DAY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z]+ \d{1,2}$").expect("Valid regex pattern"));

/// A leading word followed by more text, as in "sunday january 5 2020"
static LEADING_WORD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-z]+)\.? (.+)$").expect("Valid regex pattern"));

/// Weekday phrases such as "monday", "next fri" or "last tuesday"
static WEEKDAY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:(next|last|this)\s+)?([a-z]+)$").expect("Valid regex pattern"));

/// Calendar units understood by the relative strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RelativeUnit {
    Day,
    Week,
    Fortnight,
    Month,
    Year,
}

impl RelativeUnit {
    fn from_word(word: &str) -> Option<Self> {
        match word {
            "day" => Some(Self::Day),
            "week" => Some(Self::Week),
            "fortnight" => Some(Self::Fortnight),
            "month" => Some(Self::Month),
            "year" => Some(Self::Year),
            _ => None,
        }
    }
}

/// Parse free-form date text relative to the local clock
pub fn parse_natural_datetime(input: &str) -> FormatResult<NaiveDateTime> {
    parse_natural_datetime_from(input, Local::now().naive_local())
}

/// Parse free-form date text and keep only the calendar date
pub fn parse_natural_date(input: &str) -> FormatResult<NaiveDate> {
    parse_natural_datetime(input).map(|dt| dt.date())
}

/// Calendar-date variant of [`parse_natural_datetime_from`]
pub fn parse_natural_date_from(input: &str, now: NaiveDateTime) -> FormatResult<NaiveDate> {
    parse_natural_datetime_from(input, now).map(|dt| dt.date())
}

/// Parse free-form date text relative to `now`
///
/// # Arguments
/// * `input` - Date text in any supported form
/// * `now` - Reference instant for keywords and relative offsets
///
/// # Returns
/// * `Err(FormatError::EmptyInput)` for blank input
/// * `Err(FormatError::Parse)` when no strategy understands the text
pub fn parse_natural_datetime_from(input: &str, now: NaiveDateTime) -> FormatResult<NaiveDateTime> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(FormatError::EmptyInput);
    }

    // Zone-aware forms keep the wall-clock date they were written with
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.naive_local());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(trimmed) {
        return Ok(dt.naive_local());
    }

    let normalized = normalize(trimmed);

    parse_keyword(&normalized, now)
        .or_else(|| parse_timestamp(&normalized))
        .or_else(|| parse_relative(&normalized, now))
        .or_else(|| parse_weekday(&normalized, now))
        .or_else(|| parse_absolute(&normalized, now))
        .ok_or_else(|| FormatError::Parse(input.to_string()))
}

/// Calculate the next occurrence of a target weekday strictly after `from`
///
/// Returns `None` when that day lies past the end of the calendar.
pub fn next_weekday(from: NaiveDate, target: Weekday) -> Option<NaiveDate> {
    let from_w = from.weekday().num_days_from_monday() as i64;
    let tgt_w = target.num_days_from_monday() as i64;
    let mut delta = (7 + tgt_w - from_w) % 7;
    if delta == 0 {
        delta = 7;
    }
    from.checked_add_signed(Duration::days(delta))
}

/// Calculate the most recent occurrence of a target weekday strictly before `from`
pub fn previous_weekday(from: NaiveDate, target: Weekday) -> Option<NaiveDate> {
    let from_w = from.weekday().num_days_from_monday() as i64;
    let tgt_w = target.num_days_from_monday() as i64;
    let mut delta = (7 + from_w - tgt_w) % 7;
    if delta == 0 {
        delta = 7;
    }
    from.checked_sub_signed(Duration::days(delta))
}

/// Lowercase, drop commas and ordinal suffixes, collapse whitespace
fn normalize(input: &str) -> String {
    let lowered = input.to_lowercase().replace(',', " ");
    let without_ordinals = ORDINAL_REGEX.replace_all(&lowered, "$1");
    without_ordinals.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn parse_keyword(text: &str, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let today = now.date();
    match text {
        "now" => Some(now),
        "today" | "midnight" => Some(midnight(today)),
        "noon" => today.and_hms_opt(12, 0, 0),
        "tomorrow" => today.succ_opt().map(midnight),
        "yesterday" => today.pred_opt().map(midnight),
        _ => None,
    }
}

/// "@<seconds>" Unix timestamps, interpreted as UTC
fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    let seconds: i64 = text.strip_prefix('@')?.parse().ok()?;
    DateTime::from_timestamp(seconds, 0).map(|dt| dt.naive_utc())
}

fn parse_relative(text: &str, now: NaiveDateTime) -> Option<NaiveDateTime> {
    if let Some(caps) = RELATIVE_REGEX.captures(text) {
        let mut amount: i64 = caps[1].parse().ok()?;
        if caps.get(3).is_some() {
            amount = amount.checked_neg()?;
        }
        let unit = RelativeUnit::from_word(&caps[2])?;
        return shift(now, amount, unit);
    }

    if let Some(caps) = RELATIVE_WORD_REGEX.captures(text) {
        let amount = match &caps[1] {
            "next" => 1,
            "last" => -1,
            _ => 0,
        };
        let unit = RelativeUnit::from_word(&caps[2])?;
        return shift(now, amount, unit);
    }

    None
}

fn shift(now: NaiveDateTime, amount: i64, unit: RelativeUnit) -> Option<NaiveDateTime> {
    match unit {
        RelativeUnit::Day => now.checked_add_signed(Duration::try_days(amount)?),
        RelativeUnit::Week => now.checked_add_signed(Duration::try_weeks(amount)?),
        RelativeUnit::Fortnight => now.checked_add_signed(Duration::try_weeks(amount.checked_mul(2)?)?),
        RelativeUnit::Month => shift_months(now, amount),
        RelativeUnit::Year => shift_months(now, amount.checked_mul(12)?),
    }
}

/// Month arithmetic clamps to the last day of a shorter month
fn shift_months(now: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        now.checked_add_months(magnitude)
    } else {
        now.checked_sub_months(magnitude)
    }
}

fn parse_weekday(text: &str, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let caps = WEEKDAY_REGEX.captures(text)?;
    let target: Weekday = caps[2].parse().ok()?;
    let today = now.date();

    let date = match caps.get(1).map(|m| m.as_str()) {
        Some("next") => next_weekday(today, target)?,
        Some("last") => previous_weekday(today, target)?,
        _ if today.weekday() == target => today,
        _ => next_weekday(today, target)?,
    };
    Some(midnight(date))
}

fn parse_absolute(text: &str, now: NaiveDateTime) -> Option<NaiveDateTime> {
    // A weekday name in front of a date moves it forward to that weekday
    if let Some(caps) = LEADING_WORD_REGEX.captures(text) {
        if let Ok(target) = caps[1].parse::<Weekday>() {
            let dt = parse_absolute(&caps[2], now)?;
            if dt.weekday() == target {
                return Some(dt);
            }
            return next_weekday(dt.date(), target).map(|date| date.and_time(dt.time()));
        }
    }

    // Checked first: "%B %d %Y" would read "january 2020" as the 20th of year 20
    if MONTH_YEAR_REGEX.is_match(text) {
        let first_of_month = format!("1 {}", text);
        return NaiveDate::parse_from_str(&first_of_month, "%d %B %Y").ok().map(midnight);
    }

    if let Some(dt) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
    {
        return Some(dt);
    }

    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
    {
        return Some(midnight(date));
    }

    // "January 5" takes the current year
    if MONTH_DAY_REGEX.is_match(text) {
        let with_year = format!("{} {}", text, now.year());
        return NaiveDate::parse_from_str(&with_year, "%B %d %Y").ok().map(midnight);
    }

    None
}
