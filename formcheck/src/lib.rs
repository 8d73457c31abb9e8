pub mod event;
pub mod field;
pub mod form;
pub mod paths;
pub mod policy;
pub mod sink;
pub mod validation;

pub use form::FormValidator;

pub mod prelude {
    pub use crate::event::FormEvent;
    pub use crate::field::{FieldKey, FieldKind, FieldValue, FieldValueError, FieldValues, Gender};
    pub use crate::form::{FormState, FormValidator, SubmissionRecord, SubmitOutcome};
    pub use crate::policy::{FormPolicy, PolicyError};
    pub use crate::sink::{LogSink, RecordingSink, SubmissionSink};
    pub use crate::validation::{
        FieldError, ValidationErrors, ValidationFailure, ValidationResult, Validator,
    };
}
