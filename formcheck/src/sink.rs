//! Receivers of accepted submissions.

use log::{info, warn};

use crate::form::SubmissionRecord;

/// Receives a record for every accepted submission.
///
/// Emission is fire-and-forget: a sink cannot reject a record or report
/// failure back to the form.
pub trait SubmissionSink {
    fn submit(&mut self, record: &SubmissionRecord);
}

impl<F> SubmissionSink for F
where
    F: FnMut(&SubmissionRecord),
{
    fn submit(&mut self, record: &SubmissionRecord) {
        self(record)
    }
}

/// Writes each record as JSON to the `log` facade at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn submit(&mut self, record: &SubmissionRecord) {
        match serde_json::to_string(record) {
            Ok(json) => info!("Form submitted: {}", json),
            Err(e) => warn!("Form submitted but record could not be encoded: {}", e),
        }
    }
}

/// Keeps every record in memory, in emission order.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    records: Vec<SubmissionRecord>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[SubmissionRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&SubmissionRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Remove and return everything recorded so far.
    pub fn take(&mut self) -> Vec<SubmissionRecord> {
        std::mem::take(&mut self.records)
    }
}

impl SubmissionSink for RecordingSink {
    fn submit(&mut self, record: &SubmissionRecord) {
        self.records.push(record.clone());
    }
}
