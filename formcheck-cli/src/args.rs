//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use simplelog::LevelFilter;

/// Drive the signup form from a script of JSON-line events.
#[derive(Debug, Parser)]
#[command(name = "formcheck", version, about)]
pub struct Args {
    /// Event script to read; standard input when omitted.
    #[arg(short, long)]
    pub events: Option<PathBuf>,

    /// Validation policy file (JSON). Defaults to the platform config file if present.
    #[arg(short, long)]
    pub policy: Option<PathBuf>,

    /// Log file. Defaults to the platform cache directory.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log verbosity.
    #[arg(long, value_enum, default_value_t = LogLevel::Debug)]
    pub log_level: LogLevel,

    /// Do not echo accepted records to standard error.
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
