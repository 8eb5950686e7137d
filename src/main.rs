use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use strtools::config::Config;
use strtools::constants::CONFIG_GENERATED;
use strtools::logger;
use strtools::utils::{self, duration, Frame};

/// String, date and number formatting helpers
#[derive(Parser)]
#[command(name = "strtools")]
#[command(about = "Stateless string, date and number formatting helpers", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose output (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Strip ; " CR and LF from text
    Sanitize { text: String },

    /// Convert a free-form date to YYYY-MM-DD
    ToCanonical {
        date: String,
        /// Fail instead of printing an empty line for bad input
        #[arg(long)]
        strict: bool,
    },

    /// Render a date with a strftime pattern
    FromCanonical {
        date: String,
        /// strftime pattern (default from config, normally %m/%d/%Y)
        #[arg(short, long)]
        format: Option<String>,
        /// Fail instead of printing an empty line for bad input
        #[arg(long)]
        strict: bool,
    },

    /// Shorten text to a maximum length
    Truncate {
        text: String,
        #[arg(short = 'n', long)]
        max_len: Option<usize>,
        #[arg(short, long)]
        ellipsis: Option<String>,
    },

    /// Format a byte count with binary units
    Size { bytes: u64 },

    /// Break a number of seconds into days, hours, minutes and seconds
    Duration {
        #[arg(allow_hyphen_values = true)]
        seconds: String,
        /// Print totals per unit instead of the remainder breakdown
        #[arg(long)]
        no_exclude: bool,
    },

    /// Format a digit string as a phone number
    Phone { digits: String },

    /// Convert an underscored identifier to camelCase
    Camel { identifier: String },

    /// Format a JSON array of frames ({function, file, line}) as a trace
    Backtrace {
        /// JSON file to read; stdin when omitted
        file: Option<PathBuf>,
    },

    /// Write a default configuration file
    InitConfig {
        /// Destination; the XDG config path when omitted
        path: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };
    logger::init(&config.logging, cli.verbose)?;

    let output = run(cli.command, &config)?;
    println!("{}", output);
    Ok(())
}

fn run(command: Commands, config: &Config) -> Result<String> {
    let formatting = &config.formatting;

    let output = match command {
        Commands::Sanitize { text } => utils::sanitize_for_sql_literal(&text),
        Commands::ToCanonical { date, strict } => {
            if strict {
                utils::try_date_to_canonical(&date)?
            } else {
                utils::date_to_canonical(&date)
            }
        }
        Commands::FromCanonical { date, format, strict } => {
            let format = format.as_deref().unwrap_or(&formatting.display_date_format);
            if strict {
                utils::try_date_from_canonical(&date, format)?
            } else {
                utils::date_from_canonical(&date, format)
            }
        }
        Commands::Truncate { text, max_len, ellipsis } => utils::truncate(
            &text,
            max_len.unwrap_or(formatting.truncate_length),
            ellipsis.as_deref().unwrap_or(&formatting.ellipsis),
        ),
        Commands::Size { bytes } => utils::human_readable_size(bytes),
        Commands::Duration { seconds, no_exclude } => {
            let total = duration::parse_seconds(&seconds)?;
            if no_exclude {
                format!(
                    "{} days, {} hours, {} minutes, {} seconds",
                    utils::seconds_to_days(total),
                    utils::seconds_to_hours(total, false),
                    utils::seconds_to_minutes(total, false),
                    utils::seconds_to_seconds(total, false)
                )
            } else {
                utils::DurationParts::from_seconds(total).to_string()
            }
        }
        Commands::Phone { digits } => utils::format_phone_number(&digits)?,
        Commands::Camel { identifier } => utils::camel_case(&identifier),
        Commands::Backtrace { file } => {
            let frames = read_frames(file)?;
            log::debug!("Formatting {} frames", frames.len());
            utils::format_backtrace(&frames)
        }
        Commands::InitConfig { path } => {
            let path = match path {
                Some(path) => path,
                None => Config::get_default_config_path()?,
            };
            Config::generate_default_config(&path)?;
            format!("{}: {}", CONFIG_GENERATED, path.display())
        }
    };

    Ok(output)
}

fn read_frames(file: Option<PathBuf>) -> Result<Vec<Frame>> {
    let content = match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read frames file: {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read frames from stdin")?;
            buffer
        }
    };

    serde_json::from_str(&content).context("Frames must be a JSON array of {function, file, line} objects")
}
