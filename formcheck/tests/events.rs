//! Tests for event decoding and dispatch.

use formcheck::prelude::*;

fn decode(json: &str) -> FormEvent {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_decode_payload_events() {
    assert_eq!(
        decode(r#"{"type":"set_name","value":"Ann"}"#),
        FormEvent::SetName("Ann".to_string())
    );
    assert_eq!(
        decode(r#"{"type":"set_agree_terms","value":true}"#),
        FormEvent::SetAgreeTerms(true)
    );
    assert_eq!(
        decode(r#"{"type":"select_gender","value":"female"}"#),
        FormEvent::SelectGender(Gender::Female)
    );
}

#[test]
fn test_decode_unit_events() {
    assert_eq!(decode(r#"{"type":"submit"}"#), FormEvent::Submit);
    assert_eq!(decode(r#"{"type":"toggle_agree_terms"}"#), FormEvent::ToggleAgreeTerms);
    assert_eq!(decode(r#"{"type":"clear_gender"}"#), FormEvent::ClearGender);
    assert_eq!(decode(r#"{"type":"reset"}"#), FormEvent::Reset);
}

#[test]
fn test_decode_rejects_unknown_gender() {
    let result: Result<FormEvent, _> =
        serde_json::from_str(r#"{"type":"select_gender","value":"other"}"#);
    assert!(result.is_err());
}

#[test]
fn test_event_fields() {
    assert_eq!(FormEvent::SetEmail(String::new()).field(), Some(FieldKey::Email));
    assert_eq!(FormEvent::ToggleAgreeTerms.field(), Some(FieldKey::AgreeTerms));
    assert_eq!(FormEvent::ClearGender.field(), Some(FieldKey::Gender));
    assert_eq!(FormEvent::Submit.field(), None);
    assert!(FormEvent::Submit.is_submit());
    assert!(!FormEvent::Reset.is_submit());
}

#[test]
fn test_dispatch_script() {
    let mut form = FormValidator::with_sink(RecordingSink::new());
    let script = [
        FormEvent::SetName("Test Name".to_string()),
        FormEvent::SetEmail("test@test.com".to_string()),
        FormEvent::ToggleAgreeTerms,
        FormEvent::SelectGender(Gender::Male),
    ];
    for event in script {
        assert!(form.dispatch(event).is_none());
    }

    let outcome = form.dispatch(FormEvent::Submit).expect("submit yields an outcome");
    assert!(outcome.is_submitted());
    assert_eq!(form.sink().len(), 1);

    form.dispatch(FormEvent::ToggleAgreeTerms);
    let outcome = form.dispatch(FormEvent::Submit).unwrap();
    assert_eq!(
        outcome.errors().map(|e| e.fields().collect::<Vec<_>>()),
        Some(vec![FieldKey::AgreeTerms])
    );

    form.dispatch(FormEvent::Reset);
    assert_eq!(form.state(), FormState::Idle);
}

#[test]
fn test_event_round_trips_through_json() {
    let event = FormEvent::SetEmail("a+b@example.co.uk".to_string());
    let json = serde_json::to_string(&event).unwrap();
    assert_eq!(json, r#"{"type":"set_email","value":"a+b@example.co.uk"}"#);
}
