//! Tests for the required/pattern validation policy.

use formkit::ConfigError;
use formkit::validation::{
    FieldValue, Pattern, RequiredWording, ValidationIssue, ValidationMessage, ValidationPolicy,
    Verdict,
};

fn zip_policy() -> ValidationPolicy {
    ValidationPolicy::new("Zip code").pattern(Pattern::regex(r"^[0-9]{5}$").unwrap())
}

#[test]
fn test_required_empty() {
    let policy = ValidationPolicy::new("Name").required(true);
    let verdict = policy.evaluate(&FieldValue::from(""));

    assert!(!verdict.is_valid());
    assert_eq!(verdict.message(), Some("Name is required"));
    assert_eq!(verdict.issue(), Some(ValidationIssue::RequiredFieldEmpty));
}

#[test]
fn test_required_satisfied() {
    let policy = ValidationPolicy::new("Name").required(true);
    assert_eq!(policy.evaluate(&FieldValue::from("anything")), Verdict::Valid);
}

#[test]
fn test_pattern_gate() {
    let policy = zip_policy();

    assert!(policy.evaluate(&FieldValue::from("12345")).is_valid());

    let verdict = policy.evaluate(&FieldValue::from("abc"));
    assert_eq!(verdict.message(), Some("Zip code is not valid"));
    assert_eq!(verdict.issue(), Some(ValidationIssue::PatternMismatch));
}

#[test]
fn test_pattern_tested_against_stringified_number() {
    let policy = ValidationPolicy::new("Age").pattern(Pattern::regex(r"^\d+$").unwrap());

    assert!(policy.evaluate(&FieldValue::Number(42.0)).is_valid());
    assert!(!policy.evaluate(&FieldValue::Number(42.5)).is_valid());
}

#[test]
fn test_predicate_pattern() {
    let even = Pattern::predicate(|value| matches!(value, FieldValue::Number(n) if n % 2.0 == 0.0));
    let policy = ValidationPolicy::new("Count").pattern(even);

    assert!(policy.evaluate(&FieldValue::Number(4.0)).is_valid());
    assert!(!policy.evaluate(&FieldValue::Number(3.0)).is_valid());
}

#[test]
fn test_email_preset() {
    let policy = ValidationPolicy::new("Email").pattern(Pattern::email());

    assert!(policy.evaluate(&FieldValue::from("bob@example.com")).is_valid());
    assert!(!policy.evaluate(&FieldValue::from("bob@")).is_valid());
}

#[test]
fn test_length_presets() {
    let min = ValidationPolicy::new("Password").pattern(Pattern::min_length(8));
    let max = ValidationPolicy::new("Handle").pattern(Pattern::max_length(3));

    assert!(!min.evaluate(&FieldValue::from("short")).is_valid());
    assert!(min.evaluate(&FieldValue::from("long enough")).is_valid());
    assert!(max.evaluate(&FieldValue::from("héé")).is_valid());
    assert!(!max.evaluate(&FieldValue::from("four")).is_valid());
}

#[test]
fn test_selection_emptiness() {
    let policy = ValidationPolicy::new("Topics")
        .required(true)
        .wording(RequiredWording::Selection);

    let verdict = policy.evaluate(&FieldValue::Selection(Vec::new()));
    assert_eq!(
        verdict.message(),
        Some("At least one item in Topics must be selected")
    );
    assert!(
        policy
            .evaluate(&FieldValue::Selection(vec!["rust".to_string()]))
            .is_valid()
    );
}

#[test]
fn test_single_message_overrides_both() {
    let policy = zip_policy().required(true).message("Enter a zip code");

    assert_eq!(
        policy.evaluate(&FieldValue::from("")).message(),
        Some("Enter a zip code")
    );
    assert_eq!(
        policy.evaluate(&FieldValue::from("abc")).message(),
        Some("Enter a zip code")
    );
}

#[test]
fn test_split_message_overrides_independently() {
    let policy = zip_policy().required(true).message(ValidationMessage::Split {
        required: None,
        valid: Some("Five digits please".to_string()),
    });

    assert_eq!(
        policy.evaluate(&FieldValue::from("")).message(),
        Some("Zip code is required")
    );
    assert_eq!(
        policy.evaluate(&FieldValue::from("abc")).message(),
        Some("Five digits please")
    );
}

#[test]
fn test_evaluate_is_pure() {
    let policy = zip_policy().required(true);
    let values = ["", "12345", "abc", "1234"];

    for value in values {
        let first = policy.evaluate(&FieldValue::from(value));
        for _ in 0..3 {
            assert_eq!(policy.evaluate(&FieldValue::from(value)), first);
        }
    }
}

#[test]
fn test_message_present_iff_invalid() {
    let policies = [
        ValidationPolicy::new("A"),
        ValidationPolicy::new("B").required(true),
        zip_policy(),
        zip_policy().required(true),
    ];
    let values = [
        FieldValue::from(""),
        FieldValue::from("12345"),
        FieldValue::from("nope"),
        FieldValue::Number(f64::NAN),
        FieldValue::Selection(Vec::new()),
    ];

    for policy in &policies {
        for value in &values {
            let verdict = policy.evaluate(value);
            assert_eq!(verdict.message().is_some(), !verdict.is_valid());
        }
    }
}

#[test]
fn test_malformed_regex_rejected_eagerly() {
    let err = Pattern::regex("([0-9]").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPattern { ref pattern, .. } if pattern == "([0-9]"));
    assert!(err.to_string().contains("([0-9]"));
}
