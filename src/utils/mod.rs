//! Formatting helpers.
//!
//! Every function in these modules is an independent transformation of an
//! input value into an output value. None of them keeps state or performs
//! I/O, so they are safe to call from any thread without coordination.
//!
//! # Available Utilities
//!
//! - [`text`] - SQL literal sanitizing, truncation and camelCase conversion
//! - [`date`] - Conversion to and from the canonical `YYYY-MM-DD` form
//! - [`datetime`] - Natural-language date parsing behind [`date`]
//! - [`backtrace`] - Call-frame formatting and stack capture
//! - [`size`] - Human-readable byte sizes
//! - [`duration`] - Seconds-to-days/hours/minutes/seconds decomposition
//! - [`phone`] - Phone number formatting

pub mod backtrace;
pub mod date;
pub mod datetime;
pub mod duration;
pub mod phone;
pub mod size;
pub mod text;

pub use backtrace::{capture_frames, format_backtrace, format_current_backtrace, Frame};
pub use date::{
    date_from_canonical, date_from_canonical_default, date_to_canonical, try_date_from_canonical, try_date_to_canonical,
};
pub use duration::{seconds_to_days, seconds_to_hours, seconds_to_minutes, seconds_to_seconds, DurationParts};
pub use phone::format_phone_number;
pub use size::human_readable_size;
pub use text::{camel_case, sanitize_for_sql_literal, truncate};
