//! Discrete input events.

use serde::{Deserialize, Serialize};

use crate::field::{FieldKey, Gender};

/// A field change or a submit/reset trigger.
///
/// Encodes as `{"type": "set_name", "value": "Ann"}`; events without a
/// payload carry only the type, as in `{"type": "submit"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FormEvent {
    SetName(String),
    SetEmail(String),
    SetAgreeTerms(bool),
    ToggleAgreeTerms,
    SelectGender(Gender),
    ClearGender,
    Submit,
    Reset,
}

impl FormEvent {
    /// The field this event changes, if any.
    pub fn field(&self) -> Option<FieldKey> {
        match self {
            FormEvent::SetName(_) => Some(FieldKey::Name),
            FormEvent::SetEmail(_) => Some(FieldKey::Email),
            FormEvent::SetAgreeTerms(_) | FormEvent::ToggleAgreeTerms => {
                Some(FieldKey::AgreeTerms)
            }
            FormEvent::SelectGender(_) | FormEvent::ClearGender => Some(FieldKey::Gender),
            FormEvent::Submit | FormEvent::Reset => None,
        }
    }

    pub fn is_submit(&self) -> bool {
        matches!(self, FormEvent::Submit)
    }
}
