//! Reporting of submit outcomes.

use std::io::{self, Write};

use formcheck::form::{SubmissionRecord, SubmitOutcome};
use formcheck::sink::SubmissionSink;
use formcheck::validation::ValidationErrors;
use log::{info, warn};
use serde::Serialize;

use crate::error::CliError;

/// One line of output per submit attempt.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum Report<'a> {
    Submitted {
        attempt: u64,
        record: &'a SubmissionRecord,
    },
    Rejected {
        attempt: u64,
        errors: &'a ValidationErrors,
    },
}

impl<'a> Report<'a> {
    fn new(attempt: u64, outcome: &'a SubmitOutcome) -> Self {
        match outcome {
            SubmitOutcome::Submitted(record) => Report::Submitted { attempt, record },
            SubmitOutcome::Rejected(errors) => Report::Rejected { attempt, errors },
        }
    }
}

/// Write the outcome of a submit attempt as a JSON line.
pub fn write_outcome(
    out: &mut impl Write,
    attempt: u64,
    outcome: &SubmitOutcome,
) -> Result<(), CliError> {
    serde_json::to_writer(&mut *out, &Report::new(attempt, outcome)).map_err(CliError::Output)?;
    writeln!(out)?;
    Ok(())
}

/// Sink for accepted records: logs them and echoes them to standard error.
///
/// Standard output is reserved for the report lines.
#[derive(Debug)]
pub struct ConsoleSink<W = io::Stderr> {
    quiet: bool,
    out: W,
}

impl ConsoleSink {
    pub fn new(quiet: bool) -> Self {
        Self::with_writer(quiet, io::stderr())
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn with_writer(quiet: bool, out: W) -> Self {
        Self { quiet, out }
    }

    #[cfg(test)]
    fn writer(&self) -> &W {
        &self.out
    }
}

impl<W: Write> SubmissionSink for ConsoleSink<W> {
    fn submit(&mut self, record: &SubmissionRecord) {
        match serde_json::to_string(record) {
            Ok(json) => {
                info!("Record emitted: {}", json);
                if self.quiet {
                    return;
                }
                if let Err(e) = writeln!(self.out, "{}", json) {
                    warn!("Failed to echo record: {}", e);
                }
            }
            Err(e) => warn!("Failed to encode record: {}", e),
        }
    }
}
