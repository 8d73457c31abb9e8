use crate::validation::ValidationErrors;

use super::SubmissionRecord;

/// Where the form stands after its most recent submit attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormState {
    /// No submit attempted since creation or reset.
    #[default]
    Idle,
    /// The last attempt failed; errors are showing.
    Invalid,
    /// The last attempt passed and a record was emitted.
    Submitted,
}

/// What a single submit attempt produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed and this record went to the sink.
    Submitted(SubmissionRecord),
    /// At least one field failed; nothing was emitted.
    Rejected(ValidationErrors),
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted(_))
    }

    pub fn is_rejected(&self) -> bool {
        !self.is_submitted()
    }

    pub fn record(&self) -> Option<&SubmissionRecord> {
        match self {
            Self::Submitted(record) => Some(record),
            Self::Rejected(_) => None,
        }
    }

    /// Errors of a rejected attempt.
    pub fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Submitted(_) => None,
            Self::Rejected(errors) => Some(errors),
        }
    }
}
