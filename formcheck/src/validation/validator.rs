//! Validator builder for fluent validation API.

use log::debug;

use super::result::{FieldError, ValidationResult};
use super::rules;
use crate::field::FieldKey;

/// Type alias for validation rule closures.
type Rule<'a, V> = Box<dyn Fn(&V) -> Result<(), String> + 'a>;

/// Internal representation of a field being validated.
struct FieldEntry<'a> {
    field: FieldKey,
    check: Box<dyn Fn() -> Vec<String> + 'a>,
}

/// Builder for validating multiple form fields.
///
/// Each field is checked against all of its rules and reports the message of
/// the first rule it fails. All fields are always checked.
///
/// # Example
///
/// ```
/// use formcheck::field::FieldKey;
/// use formcheck::validation::Validator;
///
/// let name = "Al";
/// let agreed = false;
///
/// let result = Validator::new()
///     .field(name, FieldKey::Name)
///         .min_length(3, "Name is too short")
///     .field(&agreed, FieldKey::AgreeTerms)
///         .checked("You must agree")
///     .validate();
///
/// assert_eq!(result.errors().len(), 2);
/// ```
pub struct Validator<'a> {
    fields: Vec<FieldEntry<'a>>,
}

impl<'a> Validator<'a> {
    /// Create a new validator.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a field to validate.
    pub fn field<V: ?Sized>(self, value: &'a V, field: FieldKey) -> FieldBuilder<'a, V> {
        FieldBuilder {
            validator: self,
            value,
            field,
            rules: Vec::new(),
        }
    }

    /// Run all validations.
    pub fn validate(self) -> ValidationResult {
        let mut errors = Vec::new();

        for entry in &self.fields {
            let messages = (entry.check)();
            if let Some(first_error) = messages.into_iter().next() {
                debug!("Field '{}' failed validation: {}", entry.field, first_error);
                errors.push(FieldError::new(entry.field, first_error));
            }
        }

        if errors.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(errors)
        }
    }
}

impl Default for Validator<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for adding validation rules to a single field.
pub struct FieldBuilder<'a, V: ?Sized> {
    validator: Validator<'a>,
    value: &'a V,
    field: FieldKey,
    rules: Vec<Rule<'a, V>>,
}

impl<'a, V: ?Sized> FieldBuilder<'a, V> {
    /// Add a custom validation rule.
    pub fn rule<F>(mut self, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&V) -> bool + 'a,
    {
        let msg = msg.into();
        self.rules
            .push(Box::new(move |v: &V| if f(v) { Ok(()) } else { Err(msg.clone()) }));
        self
    }

    /// Continue to the next field.
    pub fn field<V2: ?Sized>(self, value: &'a V2, field: FieldKey) -> FieldBuilder<'a, V2> {
        self.finish().field(value, field)
    }

    /// Finalize and run all validations.
    pub fn validate(self) -> ValidationResult {
        self.finish().validate()
    }

    /// Finalize this field and return the validator.
    pub fn finish(self) -> Validator<'a> {
        let value = self.value;
        let rules = self.rules;

        let check: Box<dyn Fn() -> Vec<String> + 'a> = Box::new(move || {
            rules
                .iter()
                .filter_map(|rule| rule(value).err())
                .collect()
        });

        let mut validator = self.validator;
        validator.fields.push(FieldEntry {
            field: self.field,
            check,
        });

        validator
    }
}

// Built-in rules for text values
impl FieldBuilder<'_, str> {
    /// Require minimum length (in characters).
    pub fn min_length(self, min: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v| rules::name_length(v, false) >= min, msg)
    }

    /// Require minimum length (in characters), ignoring surrounding whitespace.
    pub fn min_length_trimmed(self, min: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v| rules::name_length(v, true) >= min, msg)
    }

    /// Require a valid email address. A blank value is not valid.
    pub fn email(self, msg: impl Into<String>) -> Self {
        self.rule(rules::is_valid_email, msg)
    }
}

// Built-in rules for bool values
impl FieldBuilder<'_, bool> {
    /// Require the checkbox to be checked.
    pub fn checked(self, msg: impl Into<String>) -> Self {
        self.rule(|&v| v, msg)
    }
}

// Built-in rules for optional selections
impl<T> FieldBuilder<'_, Option<T>> {
    /// Require that an option is selected.
    pub fn selected(self, msg: impl Into<String>) -> Self {
        self.rule(|v| v.is_some(), msg)
    }
}
