//! The signup form and its submit cycle.

mod record;
mod state;

pub use record::SubmissionRecord;
pub use state::{FormState, SubmitOutcome};

use log::{debug, info};

use crate::event::FormEvent;
use crate::field::{FieldKey, FieldValue, FieldValueError, FieldValues, Gender};
use crate::policy::{FormPolicy, PolicyError};
use crate::sink::{LogSink, SubmissionSink};
use crate::validation::{self, ValidationErrors};

/// Holds the field values, validates them on submit, and hands accepted
/// records to a sink.
///
/// Field changes never touch the error map: errors from the last attempt stay
/// visible until the next submit recomputes them. A successful submit leaves
/// both values and errors in place, so submitting again without edits emits
/// an equal record.
///
/// # Example
///
/// ```
/// use formcheck::form::{FormValidator, FormState};
/// use formcheck::field::Gender;
/// use formcheck::sink::RecordingSink;
///
/// let mut form = FormValidator::with_sink(RecordingSink::new());
/// form.set_name("Test Name");
/// form.set_email("test@test.com");
/// form.toggle_agree_terms();
/// form.select_gender(Gender::Male);
///
/// assert!(form.submit().is_submitted());
/// assert_eq!(form.state(), FormState::Submitted);
/// assert_eq!(form.sink().len(), 1);
/// ```
#[derive(Debug)]
pub struct FormValidator<S = LogSink> {
    values: FieldValues,
    errors: ValidationErrors,
    state: FormState,
    policy: FormPolicy,
    sink: S,
    attempts: u64,
}

impl FormValidator<LogSink> {
    /// Create a form that logs accepted records.
    pub fn new() -> Self {
        Self::with_sink(LogSink)
    }
}

impl Default for FormValidator<LogSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SubmissionSink> FormValidator<S> {
    /// Create a blank form emitting to the given sink.
    pub fn with_sink(sink: S) -> Self {
        Self {
            values: FieldValues::default(),
            errors: ValidationErrors::new(),
            state: FormState::Idle,
            policy: FormPolicy::default(),
            sink,
            attempts: 0,
        }
    }

    /// Use a non-default validation policy.
    ///
    /// Fails if the policy does not pass [`FormPolicy::check`].
    pub fn with_policy(mut self, policy: FormPolicy) -> Result<Self, PolicyError> {
        policy.check()?;
        self.policy = policy;
        Ok(self)
    }

    /// Start from the given values instead of blanks.
    pub fn with_values(mut self, values: FieldValues) -> Self {
        self.values = values;
        self
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    /// Errors from the most recent submit attempt.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Error message to show beside a field, if any.
    pub fn error(&self, field: FieldKey) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn policy(&self) -> &FormPolicy {
        &self.policy
    }

    /// Submit attempts since creation or the last reset.
    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    // -------------------------------------------------------------------------
    // Field changes
    // -------------------------------------------------------------------------

    /// Replace the value of one field.
    pub fn set_field(
        &mut self,
        field: FieldKey,
        value: impl Into<FieldValue>,
    ) -> Result<(), FieldValueError> {
        self.values.set(field, value.into())?;
        debug!("Field '{}' changed", field);
        Ok(())
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.values.name = name.into();
        debug!("Field '{}' changed", FieldKey::Name);
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.values.email = email.into();
        debug!("Field '{}' changed", FieldKey::Email);
    }

    pub fn set_agree_terms(&mut self, agreed: bool) {
        self.values.agree_terms = agreed;
        debug!("Field '{}' set to {}", FieldKey::AgreeTerms, agreed);
    }

    /// Flip the terms checkbox.
    pub fn toggle_agree_terms(&mut self) {
        self.set_agree_terms(!self.values.agree_terms);
    }

    pub fn select_gender(&mut self, gender: Gender) {
        self.values.gender = Some(gender);
        debug!("Field '{}' set to {}", FieldKey::Gender, gender);
    }

    pub fn clear_gender(&mut self) {
        self.values.gender = None;
        debug!("Field '{}' cleared", FieldKey::Gender);
    }

    // -------------------------------------------------------------------------
    // Submit cycle
    // -------------------------------------------------------------------------

    /// Validate every field and, if all pass, emit a record to the sink.
    ///
    /// The error map is replaced wholesale on every attempt.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.attempts += 1;
        self.errors = validation::validate(&self.values, &self.policy);

        // Gender is required by the rule set, so no errors means a record.
        let record = if self.errors.is_empty() {
            SubmissionRecord::snapshot(&self.values)
        } else {
            None
        };

        match record {
            Some(record) => {
                self.state = FormState::Submitted;
                info!("Submit attempt {} accepted", self.attempts);
                self.sink.submit(&record);
                SubmitOutcome::Submitted(record)
            }
            None => {
                self.state = FormState::Invalid;
                debug!(
                    "Submit attempt {} rejected with {} error(s)",
                    self.attempts,
                    self.errors.len()
                );
                SubmitOutcome::Rejected(self.errors.clone())
            }
        }
    }

    /// Return to a blank, idle form. Never called implicitly.
    pub fn reset(&mut self) {
        self.values = FieldValues::default();
        self.errors = ValidationErrors::new();
        self.state = FormState::Idle;
        self.attempts = 0;
        debug!("Form reset");
    }

    /// Apply an input event. Returns the outcome for submit events.
    pub fn dispatch(&mut self, event: FormEvent) -> Option<SubmitOutcome> {
        match event {
            FormEvent::SetName(name) => self.set_name(name),
            FormEvent::SetEmail(email) => self.set_email(email),
            FormEvent::SetAgreeTerms(agreed) => self.set_agree_terms(agreed),
            FormEvent::ToggleAgreeTerms => self.toggle_agree_terms(),
            FormEvent::SelectGender(gender) => self.select_gender(gender),
            FormEvent::ClearGender => self.clear_gender(),
            FormEvent::Submit => return Some(self.submit()),
            FormEvent::Reset => self.reset(),
        }
        None
    }
}
