//! The form's rule set and the checks behind it.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::field::{FieldKey, FieldValues};
use crate::policy::FormPolicy;

use super::result::ValidationErrors;
use super::validator::Validator;

/// Email grammar: dot-separated RFC 5322 `atext` atoms, a single `@`, and
/// two or more dot-separated domain labels without edge hyphens.
const EMAIL_PATTERN: &str = concat!(
    r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*",
    r"@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?",
    r"(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)+$",
);

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// Check an address against the email grammar.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Length of a name in characters, optionally ignoring surrounding whitespace.
pub fn name_length(name: &str, trim: bool) -> usize {
    let name = if trim { name.trim() } else { name };
    name.chars().count()
}

/// The ways a submission can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationFailure {
    NameTooShort,
    EmailInvalid,
    TermsNotAgreed,
    GenderNotSelected,
}

impl ValidationFailure {
    pub const ALL: [ValidationFailure; 4] = [
        ValidationFailure::NameTooShort,
        ValidationFailure::EmailInvalid,
        ValidationFailure::TermsNotAgreed,
        ValidationFailure::GenderNotSelected,
    ];

    /// The field this failure is reported on.
    pub fn field(self) -> FieldKey {
        match self {
            ValidationFailure::NameTooShort => FieldKey::Name,
            ValidationFailure::EmailInvalid => FieldKey::Email,
            ValidationFailure::TermsNotAgreed => FieldKey::AgreeTerms,
            ValidationFailure::GenderNotSelected => FieldKey::Gender,
        }
    }

    /// The message shown for this failure under the default policy.
    pub fn message(self) -> &'static str {
        match self {
            ValidationFailure::NameTooShort => "Name must be at least 3 characters.",
            ValidationFailure::EmailInvalid => "Email must be valid.",
            ValidationFailure::TermsNotAgreed => "You must agree to the terms.",
            ValidationFailure::GenderNotSelected => "You must select a gender.",
        }
    }

    /// The failure a field can produce.
    pub fn for_field(field: FieldKey) -> Self {
        match field {
            FieldKey::Name => ValidationFailure::NameTooShort,
            FieldKey::Email => ValidationFailure::EmailInvalid,
            FieldKey::AgreeTerms => ValidationFailure::TermsNotAgreed,
            FieldKey::Gender => ValidationFailure::GenderNotSelected,
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Build the validator for the form's rule set.
///
/// Every field is checked; nothing short-circuits across fields.
pub fn rule_set<'a>(values: &'a FieldValues, policy: &'a FormPolicy) -> Validator<'a> {
    let name = Validator::new().field(values.name.as_str(), FieldKey::Name);
    let name = if policy.trim_name {
        name.min_length_trimmed(policy.min_name_chars, policy.name_message())
    } else {
        name.min_length(policy.min_name_chars, policy.name_message())
    };

    name.field(values.email.as_str(), FieldKey::Email)
        .email(ValidationFailure::EmailInvalid.message())
        .field(&values.agree_terms, FieldKey::AgreeTerms)
        .checked(ValidationFailure::TermsNotAgreed.message())
        .field(&values.gender, FieldKey::Gender)
        .selected(ValidationFailure::GenderNotSelected.message())
        .finish()
}

/// Validate field values, returning the message of every failing field.
pub fn validate(values: &FieldValues, policy: &FormPolicy) -> ValidationErrors {
    rule_set(values, policy).validate().into_errors()
}
