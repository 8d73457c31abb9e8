use serde::{Deserialize, Serialize};

use crate::field::{FieldValues, Gender};

/// Snapshot of the field values taken when a submission is accepted.
///
/// Serializes as `{"name", "email", "agreeTerms", "gender"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub name: String,
    pub email: String,
    pub agree_terms: bool,
    pub gender: Gender,
}

impl SubmissionRecord {
    /// Copy the values verbatim, or `None` while no gender is selected.
    pub fn snapshot(values: &FieldValues) -> Option<Self> {
        Some(Self {
            name: values.name.clone(),
            email: values.email.clone(),
            agree_terms: values.agree_terms,
            gender: values.gender?,
        })
    }
}

impl From<SubmissionRecord> for FieldValues {
    fn from(record: SubmissionRecord) -> Self {
        FieldValues {
            name: record.name,
            email: record.email,
            agree_terms: record.agree_terms,
            gender: Some(record.gender),
        }
    }
}
