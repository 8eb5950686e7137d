//! Text utility functions
//!
//! Sanitizing, truncating and identifier-casing helpers. All of them are
//! total: every input produces an output and nothing here can fail.

use crate::constants::SQL_UNSAFE_CHARS;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Matches an underscore followed by a single ASCII alphanumeric character
static UNDERSCORE_WORD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"_([a-zA-Z0-9])").expect("Valid regex pattern"));

/// Remove characters that commonly break hand-built MySQL literals
///
/// Strips `;`, `"`, carriage returns and line feeds. Nothing else is escaped,
/// so this is not a substitute for parameterized queries.
///
/// # Examples
///
/// ```
/// use strtools::utils::text::sanitize_for_sql_literal;
///
/// assert_eq!(sanitize_for_sql_literal("a;b\"c\r\nd"), "abcd");
/// assert_eq!(sanitize_for_sql_literal("O'Brien"), "O'Brien");
/// ```
#[must_use]
pub fn sanitize_for_sql_literal(text: &str) -> String {
    text.chars().filter(|c| !SQL_UNSAFE_CHARS.contains(c)).collect()
}

/// Shorten `text` so it does not exceed `max_len` characters, ellipsis included
///
/// The ellipsis is only added when the text is actually cut. Lengths are
/// counted in `char`s. When the ellipsis alone is longer than `max_len`
/// nothing of the input is kept and the ellipsis is returned as is.
///
/// # Arguments
/// * `text` - The text to shorten
/// * `max_len` - Maximum length of the result
/// * `ellipsis` - Marker appended to a shortened text
///
/// # Examples
///
/// ```
/// use strtools::utils::text::truncate;
///
/// assert_eq!(truncate("hello world", 8, "..."), "hello...");
/// assert_eq!(truncate("short", 8, "..."), "short");
/// ```
#[must_use]
pub fn truncate(text: &str, max_len: usize, ellipsis: &str) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }

    let keep = max_len.saturating_sub(ellipsis.chars().count());
    let mut result: String = text.chars().take(keep).collect();
    result.push_str(ellipsis);
    result
}

/// Convert an underscored identifier into camelCase
///
/// Each `_` followed by a letter or digit is replaced by the uppercased
/// character. The first character is left alone unless it is itself part of
/// such a pair, so `"_leading"` becomes `"Leading"`.
///
/// # Examples
///
/// ```
/// use strtools::utils::text::camel_case;
///
/// assert_eq!(camel_case("user_id"), "userId");
/// assert_eq!(camel_case("created_at_2"), "createdAt2");
/// ```
#[must_use]
pub fn camel_case(identifier: &str) -> String {
    UNDERSCORE_WORD_REGEX
        .replace_all(identifier, |caps: &Captures| caps[1].to_uppercase())
        .into_owned()
}
