use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::Serialize;

use crate::field::FieldKey;

/// Information about a single field validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field that failed.
    pub field: FieldKey,
    /// Error message.
    pub message: String,
}

impl FieldError {
    pub fn new(field: FieldKey, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Result of validating one or more fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidationResult {
    /// All fields passed validation.
    #[default]
    Valid,
    /// One or more fields failed validation.
    Invalid(Vec<FieldError>),
}

impl ValidationResult {
    /// Check if all fields passed validation.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Get all validation errors.
    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }

    /// Collect the errors into a per-field map.
    pub fn into_errors(self) -> ValidationErrors {
        match self {
            Self::Valid => ValidationErrors::new(),
            Self::Invalid(errors) => errors.into_iter().collect(),
        }
    }
}

/// Error messages keyed by field.
///
/// A field present in the map currently fails validation; an absent field
/// is valid. Iterates in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<FieldKey, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message for a field, if it failed.
    pub fn get(&self, field: FieldKey) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldKey) -> bool {
        self.0.contains_key(&field)
    }

    /// Record a message for a field. The first message recorded wins.
    pub fn insert(&mut self, field: FieldKey, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    /// Failing fields in form order.
    pub fn fields(&self) -> impl Iterator<Item = FieldKey> + '_ {
        self.0.keys().copied()
    }

    /// Messages in form order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.0.values().map(String::as_str)
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter(self.0.iter())
    }
}

impl FromIterator<FieldError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        let mut errors = Self::new();
        for error in iter {
            errors.insert(error.field, error.message);
        }
        errors
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = (FieldKey, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over `(field, message)` pairs of [`ValidationErrors`].
pub struct Iter<'a>(btree_map::Iter<'a, FieldKey, String>);

impl<'a> Iterator for Iter<'a> {
    type Item = (FieldKey, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(field, message)| (*field, message.as_str()))
    }
}
