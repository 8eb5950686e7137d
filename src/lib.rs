//! strtools - stateless string, date and number formatting helpers
//!
//! This library collects small, independent formatting functions: SQL
//! literal sanitizing, date conversion, backtrace rendering, truncation,
//! human-readable byte sizes, seconds-to-duration decomposition, phone
//! number formatting and camelCase conversion.
//!
//! # Modules
//!
//! * [`utils`] - The formatting helpers themselves
//! * [`error`] - Error type returned by the strict helpers
//! * [`constants`] - Defaults and unit tables shared by the helpers
//! * [`config`] - Configuration for the `strtools` command-line tool
//! * [`logger`] - Log output setup for the command-line tool

/// Configuration module for the command-line front end
pub mod config;

/// Default values, unit tables and message strings
pub mod constants;

/// Error types for the parsing-dependent helpers
pub mod error;

/// Logging setup built on `fern`
pub mod logger;

/// Formatting helpers
pub mod utils;

pub use error::{FormatError, FormatResult};
