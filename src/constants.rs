//! Constants used throughout the crate
//!
//! This module centralizes default values, unit tables and output prefixes
//! so the helpers and the command-line front end agree on them.

// Text defaults
/// Default maximum length for `truncate`
pub const DEFAULT_TRUNCATE_LENGTH: usize = 30;
/// Default trailing marker appended by `truncate`
pub const DEFAULT_ELLIPSIS: &str = "...";
/// Characters stripped by `sanitize_for_sql_literal`
pub const SQL_UNSAFE_CHARS: [char; 4] = [';', '"', '\r', '\n'];

// Date formats
/// Canonical date exchange format (`YYYY-MM-DD`)
pub const CANONICAL_DATE_FORMAT: &str = "%Y-%m-%d";
/// Default display format for `date_from_canonical` (`MM/DD/YYYY`)
pub const DEFAULT_DISPLAY_DATE_FORMAT: &str = "%m/%d/%Y";

// Size units
/// Divisor between consecutive size units
pub const SIZE_STEP: f64 = 1024.0;
/// Unit suffixes for `human_readable_size`
pub const SIZE_UNITS: [&str; 9] = ["B", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];
/// Maximum digits kept after the decimal point
pub const SIZE_MAX_FRACTION_DIGITS: usize = 3;

// Duration bases
pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = 3_600;
pub const SECONDS_PER_DAY: i64 = 86_400;

// Backtrace line prefixes
pub const BACKTRACE_FIRST_PREFIX: &str = "\n\tfrom ";
pub const BACKTRACE_NEXT_PREFIX: &str = "\n\tat ";

// CLI messages
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
pub const CONFIG_FILE_NAME: &str = "strtools.toml";
pub const APP_DIR_NAME: &str = "strtools";
pub const LOG_FILE_NAME: &str = "strtools.log";
