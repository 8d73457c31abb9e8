use std::path::PathBuf;

use formcheck::policy::PolicyError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid event on line {line}: {source}")]
    Event {
        line: usize,
        source: serde_json::Error,
    },
    #[error("failed to encode output: {0}")]
    Output(serde_json::Error),
    #[error(transparent)]
    Policy(#[from] PolicyError),
    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
