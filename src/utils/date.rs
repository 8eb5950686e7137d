//! Canonical date conversion
//!
//! Converts free-form date text to the canonical `YYYY-MM-DD` form and
//! renders dates back out with a `strftime` pattern.
//!
//! Each conversion comes in two flavours. The `try_*` functions return a
//! [`FormatResult`] so callers can tell an empty input from garbage. The
//! plain functions keep the lenient contract: any failure becomes an empty
//! string.

use crate::constants::{CANONICAL_DATE_FORMAT, DEFAULT_DISPLAY_DATE_FORMAT};
use crate::error::{FormatError, FormatResult};
use crate::utils::datetime::parse_natural_datetime_from;
use chrono::format::{Item, StrftimeItems};
use chrono::{Local, NaiveDate, NaiveDateTime};
use std::fmt::Write;

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(CANONICAL_DATE_FORMAT).to_string()
}

/// Convert free-form date text to `YYYY-MM-DD`, relative to the local clock
///
/// # Examples
///
/// ```
/// use strtools::utils::date::try_date_to_canonical;
///
/// assert_eq!(try_date_to_canonical("January 5, 2020").unwrap(), "2020-01-05");
/// assert!(try_date_to_canonical("not a date").is_err());
/// ```
pub fn try_date_to_canonical(text: &str) -> FormatResult<String> {
    try_date_to_canonical_at(text, Local::now().naive_local())
}

/// Convert free-form date text to `YYYY-MM-DD`, relative to `now`
pub fn try_date_to_canonical_at(text: &str, now: NaiveDateTime) -> FormatResult<String> {
    if text.is_empty() {
        return Err(FormatError::EmptyInput);
    }
    let parsed = parse_natural_datetime_from(text, now)?;
    Ok(format_ymd(parsed.date()))
}

/// Lenient form of [`try_date_to_canonical`]: failures become `""`
#[must_use]
pub fn date_to_canonical(text: &str) -> String {
    try_date_to_canonical(text).unwrap_or_else(|e| {
        log::debug!("date_to_canonical({:?}) -> empty: {}", text, e);
        String::new()
    })
}

/// Parse `text` and render it with the `strftime` pattern `format`
///
/// The input may be canonical (`2020-01-05`) or any other form the natural
/// date parser accepts. Time fields in `format` render as midnight unless the
/// input carried a time.
///
/// # Examples
///
/// ```
/// use strtools::utils::date::try_date_from_canonical;
///
/// assert_eq!(try_date_from_canonical("2020-01-05", "%m/%d/%Y").unwrap(), "01/05/2020");
/// assert_eq!(try_date_from_canonical("2020-01-05", "%d %B %Y").unwrap(), "05 January 2020");
/// ```
pub fn try_date_from_canonical(text: &str, format: &str) -> FormatResult<String> {
    try_date_from_canonical_at(text, format, Local::now().naive_local())
}

/// [`try_date_from_canonical`] with an explicit reference instant
pub fn try_date_from_canonical_at(text: &str, format: &str, now: NaiveDateTime) -> FormatResult<String> {
    if text.is_empty() {
        return Err(FormatError::EmptyInput);
    }
    let items = parse_format(format)?;
    let parsed = parse_natural_datetime_from(text, now)?;
    render(parsed, &items, format)
}

/// Lenient form of [`try_date_from_canonical`]: failures become `""`
#[must_use]
pub fn date_from_canonical(text: &str, format: &str) -> String {
    try_date_from_canonical(text, format).unwrap_or_else(|e| {
        log::debug!("date_from_canonical({:?}, {:?}) -> empty: {}", text, format, e);
        String::new()
    })
}

/// [`date_from_canonical`] with the `MM/DD/YYYY` display format
///
/// # Examples
///
/// ```
/// use strtools::utils::date::date_from_canonical_default;
///
/// assert_eq!(date_from_canonical_default("2020-01-05"), "01/05/2020");
/// ```
#[must_use]
pub fn date_from_canonical_default(text: &str) -> String {
    date_from_canonical(text, DEFAULT_DISPLAY_DATE_FORMAT)
}

/// Check that `format` is a `strftime` pattern a plain date-time can render
///
/// Patterns with unknown specifiers or zone fields (`%z`, `%Z`) are rejected.
pub fn validate_date_format(format: &str) -> FormatResult<()> {
    let items = parse_format(format)?;
    let sample = NaiveDate::from_ymd_opt(2025, 1, 1)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .ok_or_else(|| FormatError::InvalidFormat(format.to_string()))?;
    render(sample, &items, format).map(|_| ())
}

fn parse_format(format: &str) -> FormatResult<Vec<Item<'_>>> {
    let items: Vec<Item<'_>> = StrftimeItems::new(format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(FormatError::InvalidFormat(format.to_string()));
    }
    Ok(items)
}

// `DelayedFormat::to_string` panics on unrenderable items, so write instead
fn render(value: NaiveDateTime, items: &[Item<'_>], format: &str) -> FormatResult<String> {
    let mut out = String::new();
    write!(out, "{}", value.format_with_items(items.iter()))
        .map_err(|_| FormatError::InvalidFormat(format.to_string()))?;
    Ok(out)
}
