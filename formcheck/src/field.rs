//! Form fields and the values they hold.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Key of one of the four form fields.
///
/// Keys order by their position on the form, which is also the order
/// validation errors are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    Name,
    Email,
    AgreeTerms,
    Gender,
}

impl FieldKey {
    /// All fields in form order.
    pub const ALL: [FieldKey; 4] = [
        FieldKey::Name,
        FieldKey::Email,
        FieldKey::AgreeTerms,
        FieldKey::Gender,
    ];

    /// Stable identifier used by hosts and in serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKey::Name => "name",
            FieldKey::Email => "email",
            FieldKey::AgreeTerms => "agreeTerms",
            FieldKey::Gender => "gender",
        }
    }

    /// Human-readable label for the field.
    pub fn label(self) -> &'static str {
        match self {
            FieldKey::Name => "Name",
            FieldKey::Email => "Email",
            FieldKey::AgreeTerms => "Agree to Terms",
            FieldKey::Gender => "Gender",
        }
    }

    /// Placeholder text for free-text fields.
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            FieldKey::Name => Some("Name"),
            FieldKey::Email => Some("Email"),
            FieldKey::AgreeTerms | FieldKey::Gender => None,
        }
    }

    /// The kind of value this field accepts.
    pub fn kind(self) -> FieldKind {
        match self {
            FieldKey::Name | FieldKey::Email => FieldKind::Text,
            FieldKey::AgreeTerms => FieldKind::Flag,
            FieldKey::Gender => FieldKind::Choice,
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKey {
    type Err = FieldValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| FieldValueError::UnknownField { name: s.to_string() })
    }
}

/// Kind of value a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, set by typing.
    Text,
    /// A toggle.
    Flag,
    /// One of a fixed set of options, or nothing.
    Choice,
}

impl FieldKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Flag => "flag",
            FieldKind::Choice => "choice",
        }
    }
}

/// The selectable gender options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// All options in display order.
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Option identifier, as it appears in a submission record.
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    /// Display label of the option.
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = FieldValueError;

    /// Parses an option identifier, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Gender::ALL
            .into_iter()
            .find(|gender| gender.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| FieldValueError::UnknownOption {
                field: FieldKey::Gender,
                value: s.to_string(),
            })
    }
}

/// A value for a single field, as delivered by a field-change event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Choice(Option<Gender>),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Flag(_) => FieldKind::Flag,
            FieldValue::Choice(_) => FieldKind::Choice,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

impl From<Gender> for FieldValue {
    fn from(value: Gender) -> Self {
        FieldValue::Choice(Some(value))
    }
}

impl From<Option<Gender>> for FieldValue {
    fn from(value: Option<Gender>) -> Self {
        FieldValue::Choice(value)
    }
}

/// Current values of the form fields.
///
/// Starts blank, unchecked and unselected. Only field-change operations
/// modify it; validation reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldValues {
    pub name: String,
    pub email: String,
    pub agree_terms: bool,
    pub gender: Option<Gender>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value of a field.
    pub fn get(&self, key: FieldKey) -> FieldValue {
        match key {
            FieldKey::Name => FieldValue::Text(self.name.clone()),
            FieldKey::Email => FieldValue::Text(self.email.clone()),
            FieldKey::AgreeTerms => FieldValue::Flag(self.agree_terms),
            FieldKey::Gender => FieldValue::Choice(self.gender),
        }
    }

    /// Replace the value of a single field.
    ///
    /// Fails without modifying anything when the value kind does not match
    /// the field.
    pub fn set(&mut self, key: FieldKey, value: FieldValue) -> Result<(), FieldValueError> {
        match (key, value) {
            (FieldKey::Name, FieldValue::Text(text)) => self.name = text,
            (FieldKey::Email, FieldValue::Text(text)) => self.email = text,
            (FieldKey::AgreeTerms, FieldValue::Flag(flag)) => self.agree_terms = flag,
            (FieldKey::Gender, FieldValue::Choice(choice)) => self.gender = choice,
            (key, value) => return Err(FieldValueError::type_mismatch(key, &value)),
        }
        Ok(())
    }
}

/// Error raised when a field-change event cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldValueError {
    /// The value kind does not fit the field.
    #[error("Field '{field}' expects a {expected} value, got {actual}")]
    TypeMismatch {
        field: FieldKey,
        expected: &'static str,
        actual: &'static str,
    },

    /// The value is not one of the field's options.
    #[error("'{value}' is not an option of field '{field}'")]
    UnknownOption { field: FieldKey, value: String },

    /// No field has this identifier.
    #[error("Unknown field '{name}'")]
    UnknownField { name: String },
}

impl FieldValueError {
    fn type_mismatch(field: FieldKey, value: &FieldValue) -> Self {
        Self::TypeMismatch {
            field,
            expected: field.kind().as_str(),
            actual: value.kind().as_str(),
        }
    }
}
