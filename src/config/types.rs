//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::DEFAULT_ENTRY_SIZE;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Snapshot document format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// XML status document (`RuntimeInfo` root element)
    Xml,
    /// Pretty-printed JSON
    Json,
}

/// Application configuration.
///
/// Parsed from the command line by the binary, or built programmatically.
///
/// # Examples
///
/// ```no_run
/// use sitemap_status::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     sites: PathBuf::from("sites.txt"),
///     entry_size: 64,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "sitemap_status",
    about = "Estimates per-site memory and disk usage and writes a status snapshot"
)]
pub struct Config {
    /// File listing sites and their URL counts
    /// (`<site_id> <in_memory> <in_database> <in_tempfile>` per line)
    pub sites: PathBuf,

    /// Snapshot destination (stdout when omitted)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Snapshot format
    #[arg(long, value_enum, default_value = "xml")]
    pub format: OutputFormat,

    /// Estimated bytes per tracked URL
    #[arg(long, default_value_t = DEFAULT_ENTRY_SIZE)]
    pub entry_size: u64,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,

    /// Keep running and rewrite the snapshot every N seconds until Ctrl-C
    #[arg(long)]
    pub watch_interval_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sites: PathBuf::from("sites.txt"),
            output: None,
            format: OutputFormat::Xml,
            entry_size: DEFAULT_ENTRY_SIZE,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            watch_interval_secs: None,
        }
    }
}
