//! Human-readable byte sizes

use crate::constants::{SIZE_MAX_FRACTION_DIGITS, SIZE_STEP, SIZE_UNITS};

/// Format a byte count using binary (1024-based) units
///
/// The value is divided by 1024 while it is at least 1024, then rendered in
/// its shortest decimal form with the fraction cut (not rounded) to three
/// digits, followed by the unit suffix without a space.
///
/// # Examples
///
/// ```
/// use strtools::utils::size::human_readable_size;
///
/// assert_eq!(human_readable_size(0), "0B");
/// assert_eq!(human_readable_size(1536), "1.5KB");
/// assert_eq!(human_readable_size(1_048_576), "1MB");
/// ```
#[must_use]
pub fn human_readable_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    let mut unit = 0;

    while size >= SIZE_STEP && unit < SIZE_UNITS.len() - 1 {
        size /= SIZE_STEP;
        unit += 1;
    }

    format!("{}{}", truncate_fraction(&size.to_string()), SIZE_UNITS[unit])
}

/// Cut a decimal rendering to at most `SIZE_MAX_FRACTION_DIGITS` fractional digits
fn truncate_fraction(rendered: &str) -> &str {
    match rendered.find('.') {
        Some(dot) => {
            let end = (dot + 1 + SIZE_MAX_FRACTION_DIGITS).min(rendered.len());
            &rendered[..end]
        }
        None => rendered,
    }
}
