//! Form validation.
//!
//! This module provides a fluent API for declaring per-field rules, and the
//! rule set the signup form is checked against.
//!
//! # Example
//!
//! ```
//! use formcheck::field::{FieldValues, Gender};
//! use formcheck::policy::FormPolicy;
//! use formcheck::validation::validate;
//!
//! let values = FieldValues {
//!     name: "Test Name".into(),
//!     email: "test@test.com".into(),
//!     agree_terms: true,
//!     gender: Some(Gender::Male),
//! };
//!
//! assert!(validate(&values, &FormPolicy::default()).is_empty());
//! ```

mod result;
mod rules;
mod validator;

pub use result::{FieldError, Iter, ValidationErrors, ValidationResult};
pub use rules::{ValidationFailure, is_valid_email, name_length, rule_set, validate};
pub use validator::{FieldBuilder, Validator};
