//! Checks the validators through the public API the same way a form would use them.

use validators::messages::{INVALID_EMAIL, MIN_LENGTH_3, REQUIRED_FIELD};
use validators::{validate_empty_and_email, validate_empty_or_length3, Validation};

#[test]
fn test_empty_input_yields_required_message_for_both_validators() {
    let empty_inputs = vec![None, Some("")];

    for input in empty_inputs {
        assert_eq!(
            validate_empty_or_length3(input),
            Validation::Invalid(REQUIRED_FIELD),
            "length validator on {:?}",
            input
        );
        assert_eq!(
            validate_empty_and_email(input),
            Validation::Invalid(REQUIRED_FIELD),
            "email validator on {:?}",
            input
        );
    }
}

#[test]
fn test_required_message_takes_precedence() {
    // An empty value is never reported as too short or as a bad email.
    assert_ne!(validate_empty_or_length3(Some("")).message(), Some(MIN_LENGTH_3));
    assert_ne!(validate_empty_and_email(Some("")).message(), Some(INVALID_EMAIL));
}

#[test]
fn test_messages_are_exact() {
    assert_eq!(REQUIRED_FIELD, "*Este campo é obrigatório");
    assert_eq!(MIN_LENGTH_3, "*Este campo precisa de no mínimo 3 caracteres");
    assert_eq!(INVALID_EMAIL, "*Este campo deve ser um e-mail válido");
}

#[test]
fn test_signup_form_results_serialize_for_display() {
    let results = serde_json::json!({
        "name": validate_empty_or_length3(Some("Jo")),
        "email": validate_empty_and_email(Some("jo@example.com")),
        "password": validate_empty_or_length3(None),
    });

    assert_eq!(
        results,
        serde_json::json!({
            "name": MIN_LENGTH_3,
            "email": true,
            "password": REQUIRED_FIELD,
        })
    );
}
