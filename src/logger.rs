//! Log output setup for the command-line front end
//!
//! Records go through the `log` facade. [`build_dispatch`] assembles a
//! `fern` dispatcher that writes timestamped lines to stderr and, when
//! enabled in the configuration, to a log file. [`init`] installs it as the
//! global logger.

use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME};
use anyhow::{Context, Result};
use log::LevelFilter;
use std::path::PathBuf;

const LEVELS: [LevelFilter; 6] = [
    LevelFilter::Off,
    LevelFilter::Error,
    LevelFilter::Warn,
    LevelFilter::Info,
    LevelFilter::Debug,
    LevelFilter::Trace,
];

/// Raise `base` by one level per `-v`
pub fn effective_level(base: LevelFilter, verbosity: u8) -> LevelFilter {
    let start = LEVELS.iter().position(|level| *level == base).unwrap_or(2);
    LEVELS[(start + verbosity as usize).min(LEVELS.len() - 1)]
}

/// Default log file location under the platform data directory
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
}

/// Resolve the file a configuration logs to, if file logging is enabled
pub fn log_file_for(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }
    match &config.file {
        Some(path) => Ok(Some(path.clone())),
        None => get_log_file_path().map(Some),
    }
}

/// Build the dispatcher described by `config`
///
/// # Arguments
/// * `config` - Logging section of the configuration
/// * `verbosity` - Number of `-v` flags given on the command line
/// * `to_stderr` - Whether to chain stderr as an output
pub fn build_dispatch(config: &LoggingConfig, verbosity: u8, to_stderr: bool) -> Result<fern::Dispatch> {
    let level = effective_level(config.level_filter()?, verbosity);

    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level);

    if to_stderr {
        dispatch = dispatch.chain(std::io::stderr());
    }

    if let Some(path) = log_file_for(config)? {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
        dispatch = dispatch.chain(file);
    }

    Ok(dispatch)
}

/// Install the configured dispatcher as the global logger
pub fn init(config: &LoggingConfig, verbosity: u8) -> Result<()> {
    build_dispatch(config, verbosity, true)?
        .apply()
        .context("Failed to install logger")?;
    log::debug!("Logger initialised at level {}", effective_level(config.level_filter()?, verbosity));
    Ok(())
}
