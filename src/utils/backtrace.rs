//! Backtrace-to-text formatting
//!
//! [`format_backtrace`] is a pure function over caller-supplied frames and
//! produces a compact trace suitable for a single log record:
//!
//! ```text
//!
//! 	from handle() called at [server.rs:42]
//! 	at main() called at [main.rs:7]
//! ```
//!
//! Capturing the current stack is kept apart in [`capture_frames`], which
//! reads `std::backtrace::Backtrace` and keeps the frames that carry a
//! source location.

use crate::constants::{BACKTRACE_FIRST_PREFIX, BACKTRACE_NEXT_PREFIX};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::backtrace::Backtrace;
use std::fmt::{self, Write};

/// Symbol hash suffix appended by the legacy mangling scheme
static SYMBOL_HASH_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"::h[0-9a-f]{16}$").expect("Valid regex pattern"));

/// Frames from these symbol prefixes belong to the capture machinery itself
const CAPTURE_PREFIXES: &[&str] = &["std::backtrace", "<std::backtrace", "backtrace::", module_path!()];

/// One entry of a call stack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// Function (or fully qualified symbol) name
    pub function: String,
    /// Source file path; only the base name is rendered
    #[serde(default)]
    pub file: String,
    /// Line number within `file`
    #[serde(default)]
    pub line: u32,
}

impl Frame {
    pub fn new(function: impl Into<String>, file: impl Into<String>, line: u32) -> Self {
        Self {
            function: function.into(),
            file: file.into(),
            line,
        }
    }

    /// Last path component of `file`, accepting both `/` and `\` separators
    pub fn file_basename(&self) -> &str {
        let trimmed = self.file.trim_end_matches(['/', '\\']);
        trimmed.rsplit(['/', '\\']).next().unwrap_or(trimmed)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}() called at [{}:{}]", self.function, self.file_basename(), self.line)
    }
}

/// Render frames, innermost first, as a multi-line trace
///
/// The first line is prefixed with `"\n\tfrom "` and every following line
/// with `"\n\tat "`. No frames produce an empty string.
///
/// # Examples
///
/// ```
/// use strtools::utils::backtrace::{format_backtrace, Frame};
///
/// let frames = vec![
///     Frame::new("save", "/srv/app/model.rs", 12),
///     Frame::new("main", "/srv/app/main.rs", 3),
/// ];
/// assert_eq!(
///     format_backtrace(&frames),
///     "\n\tfrom save() called at [model.rs:12]\n\tat main() called at [main.rs:3]"
/// );
/// ```
#[must_use]
pub fn format_backtrace(frames: &[Frame]) -> String {
    let mut out = String::new();
    for (index, frame) in frames.iter().enumerate() {
        out.push_str(if index == 0 { BACKTRACE_FIRST_PREFIX } else { BACKTRACE_NEXT_PREFIX });
        // Writing to a String cannot fail
        let _ = write!(out, "{}", frame);
    }
    out
}

/// Capture the caller's stack as frames, innermost first
///
/// Frames without a resolvable file/line (and the capture machinery itself)
/// are dropped. Without debug info the result may be empty.
pub fn capture_frames() -> Vec<Frame> {
    frames_from_backtrace(&Backtrace::force_capture())
}

/// Capture and format the caller's stack in one step
pub fn format_current_backtrace() -> String {
    format_backtrace(&capture_frames())
}

/// Convert a captured [`Backtrace`] into frames
pub fn frames_from_backtrace(backtrace: &Backtrace) -> Vec<Frame> {
    let frames = parse_rendered_backtrace(&backtrace.to_string());
    frames
        .into_iter()
        .skip_while(|frame| CAPTURE_PREFIXES.iter().any(|p| frame.function.starts_with(p)))
        .collect()
}

/// Parse the `Display` rendering of a backtrace
///
/// Expects the standard layout: a numbered symbol line, then any number of
/// unnumbered symbol lines for frames inlined into it, each symbol followed
/// by its own `at <file>:<line>:<column>` line.
fn parse_rendered_backtrace(rendered: &str) -> Vec<Frame> {
    let mut frames = Vec::new();
    let mut current: Option<String> = None;
    let mut in_frame = false;

    for raw in rendered.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(location) = line.strip_prefix("at ") {
            if let Some(function) = current.take() {
                if let Some((file, line_no)) = split_location(location) {
                    frames.push(Frame::new(function, file, line_no));
                }
            }
            continue;
        }

        let symbol = match line.split_once(": ") {
            Some((index, symbol)) if !index.is_empty() && index.chars().all(|c| c.is_ascii_digit()) => {
                in_frame = true;
                symbol
            }
            // Inlined symbol under the current numbered frame
            _ if in_frame => line,
            _ => continue,
        };
        current = Some(SYMBOL_HASH_REGEX.replace(symbol.trim(), "").into_owned());
    }

    frames
}

/// Split `path/to/file.rs:LINE:COL` (column optional) into file and line
fn split_location(location: &str) -> Option<(&str, u32)> {
    let mut parts = location.rsplitn(3, ':');
    let last = parts.next()?;
    let middle = parts.next()?;

    match (middle.parse::<u32>(), parts.next()) {
        (Ok(line), Some(file)) if last.parse::<u32>().is_ok() => Some((file, line)),
        _ => {
            let line = last.parse::<u32>().ok()?;
            let file = location.rsplit_once(':')?.0;
            Some((file, line))
        }
    }
}
