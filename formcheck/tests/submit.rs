//! Tests for the submit cycle of the signup form.

use std::cell::RefCell;
use std::rc::Rc;

use formcheck::prelude::*;

const NAME_TOO_SHORT: &str = "Name must be at least 3 characters.";
const EMAIL_INVALID: &str = "Email must be valid.";
const TERMS_NOT_AGREED: &str = "You must agree to the terms.";
const GENDER_NOT_SELECTED: &str = "You must select a gender.";

fn filled_form() -> FormValidator<RecordingSink> {
    let mut form = FormValidator::with_sink(RecordingSink::new());
    form.set_name("Test Name");
    form.set_email("test@test.com");
    form.toggle_agree_terms();
    form.select_gender(Gender::Male);
    form
}

fn expected_record(name: &str, email: &str, gender: Gender) -> SubmissionRecord {
    SubmissionRecord {
        name: name.to_string(),
        email: email.to_string(),
        agree_terms: true,
        gender,
    }
}

#[test]
fn test_new_form_is_idle_and_blank() {
    let form = FormValidator::with_sink(RecordingSink::new());
    assert_eq!(form.state(), FormState::Idle);
    assert!(form.errors().is_empty());
    assert_eq!(form.values(), &FieldValues::default());
    assert_eq!(form.attempts(), 0);
}

#[test]
fn test_submit_all_fields_valid() {
    let mut form = filled_form();
    let outcome = form.submit();

    let expected = expected_record("Test Name", "test@test.com", Gender::Male);
    assert_eq!(outcome, SubmitOutcome::Submitted(expected.clone()));
    assert!(form.errors().is_empty());
    assert_eq!(form.state(), FormState::Submitted);
    assert_eq!(form.sink().records(), &[expected]);
}

#[test]
fn test_submit_very_long_name() {
    let long_name = "a".repeat(300);
    let mut form = filled_form();
    form.set_name(long_name.clone());

    let outcome = form.submit();
    assert_eq!(
        outcome.record(),
        Some(&expected_record(&long_name, "test@test.com", Gender::Male))
    );
    assert!(form.error(FieldKey::Name).is_none());
}

#[test]
fn test_submit_complex_email() {
    let complex_email = "test.name+alias@example.co.uk";
    let mut form = filled_form();
    form.set_email(complex_email);

    let outcome = form.submit();
    assert_eq!(
        outcome.record(),
        Some(&expected_record("Test Name", complex_email, Gender::Male))
    );
}

#[test]
fn test_change_gender_from_male_to_female() {
    let mut form = filled_form();
    form.select_gender(Gender::Female);

    let outcome = form.submit();
    assert_eq!(
        outcome.record(),
        Some(&expected_record("Test Name", "test@test.com", Gender::Female))
    );
}

#[test]
fn test_resubmit_emits_again() {
    let mut form = filled_form();
    let first = form.submit();
    let second = form.submit();

    assert!(first.is_submitted());
    assert_eq!(first, second);
    assert_eq!(form.sink().len(), 2);
    assert_eq!(form.sink().records()[0], form.sink().records()[1]);
    assert_eq!(form.attempts(), 2);
}

#[test]
fn test_submit_does_not_reset_values() {
    let mut form = filled_form();
    let before = form.values().clone();
    form.submit();
    assert_eq!(form.values(), &before);
}

#[test]
fn test_blank_form_reports_all_errors() {
    let mut form = FormValidator::with_sink(RecordingSink::new());
    let outcome = form.submit();

    let errors = outcome.errors().expect("blank form must be rejected");
    assert_eq!(
        errors.messages().collect::<Vec<_>>(),
        vec![NAME_TOO_SHORT, EMAIL_INVALID, TERMS_NOT_AGREED, GENDER_NOT_SELECTED]
    );
    assert_eq!(form.state(), FormState::Invalid);
    assert!(form.sink().is_empty());
}

#[test]
fn test_invalid_email_only() {
    let mut form = filled_form();
    form.set_email("testtest.com");
    form.submit();

    assert_eq!(form.errors().len(), 1);
    assert_eq!(form.error(FieldKey::Email), Some(EMAIL_INVALID));
    assert!(form.sink().is_empty());
}

#[test]
fn test_invalid_email_on_blank_form() {
    let mut form = FormValidator::with_sink(RecordingSink::new());
    form.set_email("testtest.com");
    form.submit();

    assert_eq!(form.error(FieldKey::Email), Some(EMAIL_INVALID));
}

#[test]
fn test_terms_not_agreed_only() {
    let mut form = filled_form();
    form.toggle_agree_terms();
    form.submit();

    assert_eq!(
        form.errors().iter().collect::<Vec<_>>(),
        vec![(FieldKey::AgreeTerms, TERMS_NOT_AGREED)]
    );
}

#[test]
fn test_gender_not_selected_only() {
    let mut form = filled_form();
    form.clear_gender();
    form.submit();

    assert_eq!(
        form.errors().iter().collect::<Vec<_>>(),
        vec![(FieldKey::Gender, GENDER_NOT_SELECTED)]
    );
}

#[test]
fn test_name_two_chars_fails() {
    let mut form = filled_form();
    form.set_name("Te");
    form.submit();

    assert_eq!(
        form.errors().iter().collect::<Vec<_>>(),
        vec![(FieldKey::Name, NAME_TOO_SHORT)]
    );
}

#[test]
fn test_name_three_chars_passes() {
    let mut form = filled_form();
    form.set_name("Tea");
    assert!(form.submit().is_submitted());
}

#[test]
fn test_padded_name_is_trimmed_by_default() {
    let mut form = filled_form();
    form.set_name("  ab  ");
    form.submit();
    assert_eq!(form.error(FieldKey::Name), Some(NAME_TOO_SHORT));
}

#[test]
fn test_padded_name_counts_whitespace_without_trimming() {
    let mut form = filled_form()
        .with_policy(FormPolicy::new().trim_name(false))
        .unwrap();
    form.set_name("  ab  ");
    let outcome = form.submit();
    assert_eq!(outcome.record().map(|r| r.name.as_str()), Some("  ab  "));
}

#[test]
fn test_invalidating_edit_reports_only_that_field() {
    let mut form = filled_form();
    assert!(form.submit().is_submitted());

    form.toggle_agree_terms();
    let outcome = form.submit();

    assert!(outcome.is_rejected());
    assert_eq!(form.state(), FormState::Invalid);
    assert_eq!(form.errors().fields().collect::<Vec<_>>(), vec![FieldKey::AgreeTerms]);
    assert_eq!(form.sink().len(), 1);
}

#[test]
fn test_fixing_fields_clears_their_errors() {
    let mut form = FormValidator::with_sink(RecordingSink::new());
    form.submit();
    assert_eq!(form.errors().len(), 4);

    form.set_name("Test Name");
    form.set_email("test@test.com");
    form.submit();

    assert_eq!(
        form.errors().fields().collect::<Vec<_>>(),
        vec![FieldKey::AgreeTerms, FieldKey::Gender]
    );
}

#[test]
fn test_field_change_keeps_errors_until_next_submit() {
    let mut form = FormValidator::with_sink(RecordingSink::new());
    form.submit();

    form.set_name("Test Name");
    assert_eq!(form.error(FieldKey::Name), Some(NAME_TOO_SHORT));
    assert_eq!(form.errors().len(), 4);
}

#[test]
fn test_set_field_type_mismatch_leaves_values() {
    let mut form = filled_form();
    let before = form.values().clone();

    let err = form.set_field(FieldKey::AgreeTerms, "yes").unwrap_err();
    assert_eq!(
        err,
        FieldValueError::TypeMismatch {
            field: FieldKey::AgreeTerms,
            expected: "flag",
            actual: "text",
        }
    );
    assert_eq!(form.values(), &before);
}

#[test]
fn test_set_field_updates_one_field() {
    let mut form = filled_form();
    form.set_field(FieldKey::Gender, Gender::Female).unwrap();
    form.set_field(FieldKey::Name, "Other Name").unwrap();

    assert_eq!(form.values().gender, Some(Gender::Female));
    assert_eq!(form.values().name, "Other Name");
    assert_eq!(form.values().email, "test@test.com");
}

#[test]
fn test_reset_returns_to_idle() {
    let mut form = filled_form();
    form.set_email("bad");
    form.submit();
    form.reset();

    assert_eq!(form.state(), FormState::Idle);
    assert!(form.errors().is_empty());
    assert_eq!(form.values(), &FieldValues::default());
    assert_eq!(form.attempts(), 0);
}

#[test]
fn test_closure_sink_called_once_per_submit() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let seen_by_sink = Rc::clone(&seen);

    let mut form = FormValidator::with_sink(move |record: &SubmissionRecord| {
        seen_by_sink.borrow_mut().push(record.clone());
    });
    form.set_name("Test Name");
    form.set_email("test@test.com");
    form.set_agree_terms(true);
    form.select_gender(Gender::Male);

    form.submit();
    form.set_email("nope");
    form.submit();
    form.set_email("test@test.com");
    form.submit();

    assert_eq!(seen.borrow().len(), 2);
}

#[test]
fn test_record_serializes_to_expected_shape() {
    let mut form = filled_form();
    let outcome = form.submit();
    let record = outcome.record().expect("filled form must submit");

    let json = serde_json::to_value(record).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "Test Name",
            "email": "test@test.com",
            "agreeTerms": true,
            "gender": "male",
        })
    );
}

#[test]
fn test_errors_serialize_by_field_id() {
    let mut form = FormValidator::with_sink(RecordingSink::new());
    form.submit();

    let json = serde_json::to_value(form.errors()).unwrap();
    assert_eq!(json["agreeTerms"], TERMS_NOT_AGREED);
    assert_eq!(json["gender"], GENDER_NOT_SELECTED);
}
