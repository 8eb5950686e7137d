//! Phone number formatting
//!
//! A best-effort formatter for North American style numbers: ten digits
//! render as `(AAA) BBB-CCCC` and any extra leading digits become a `+`
//! country prefix. It does not validate numbering plans.

use crate::error::{FormatError, FormatResult};

/// Format a string of digits as a phone number
///
/// The last digit is held back, the remaining digits are grouped in threes
/// from the right, and the held digit is appended to the rightmost group so
/// the line number keeps four digits. Groups are then rendered right to left:
///
/// | group          | rendering |
/// |----------------|-----------|
/// | 0 (rightmost)  | `g`       |
/// | 1              | `g-`      |
/// | 2              | `(g) `    |
/// | last, if > 2   | `+g `     |
/// | any other      | `g `      |
///
/// # Returns
/// * `Ok(String::new())` for empty input
/// * `Err(FormatError::InvalidInput)` if any character is not an ASCII digit
///
/// # Examples
///
/// ```
/// use strtools::utils::phone::format_phone_number;
///
/// assert_eq!(format_phone_number("1234567890").unwrap(), "(123) 456-7890");
/// assert_eq!(format_phone_number("11234567890").unwrap(), "+1 (123) 456-7890");
/// assert!(format_phone_number("555-1234").is_err());
/// ```
pub fn format_phone_number(digits: &str) -> FormatResult<String> {
    if digits.is_empty() {
        return Ok(String::new());
    }

    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_digit()) {
        return Err(FormatError::InvalidInput(format!(
            "phone number '{}' contains non-digit character '{}'",
            digits, bad
        )));
    }

    // ASCII only from here on, so byte slicing is safe
    let (rest, last_digit) = digits.split_at(digits.len() - 1);
    let mut groups = group_from_right(rest);
    groups[0].push_str(last_digit);

    let count = groups.len();
    let mut formatted = String::with_capacity(digits.len() + 2 * count);
    for (index, group) in groups.iter().enumerate().rev() {
        match index {
            0 => formatted.push_str(group),
            1 => {
                formatted.push_str(group);
                formatted.push('-');
            }
            2 => {
                formatted.push('(');
                formatted.push_str(group);
                formatted.push_str(") ");
            }
            i if i == count - 1 => {
                formatted.push('+');
                formatted.push_str(group);
                formatted.push(' ');
            }
            _ => {
                formatted.push_str(group);
                formatted.push(' ');
            }
        }
    }

    Ok(formatted)
}

/// Split `digits` into groups of three, rightmost group first
///
/// Always returns at least one (possibly empty) group.
fn group_from_right(digits: &str) -> Vec<String> {
    let mut groups = Vec::with_capacity(digits.len() / 3 + 1);
    let mut end = digits.len();
    while end > 0 {
        let start = end.saturating_sub(3);
        groups.push(digits[start..end].to_string());
        end = start;
    }
    if groups.is_empty() {
        groups.push(String::new());
    }
    groups
}
