//! Tests for the submit button and error alert.

use formkit::field::FieldProps;
use formkit::validation::{Aggregator, ErrorDisplay, Validatable};
use formkit::widgets::{Alert, CheckboxGroup, SubmitButton, SubmitOutcome, TextInput};

fn required(description: &str) -> FieldProps<String> {
    FieldProps::new(String::new())
        .description(description)
        .required(true)
}

#[test]
fn test_submit_disabled_until_form_valid() {
    let form = Aggregator::new();
    let submit = SubmitButton::new("Sign up", form.clone());
    let name = TextInput::new(required("Name"), Some(form.reporter()));
    let email = TextInput::new(required("Email"), Some(form.reporter()));

    assert!(!submit.is_enabled());

    name.commit("Bob");
    assert!(!submit.is_enabled());

    email.commit("bob@example.com");
    assert!(submit.is_enabled());
    assert_eq!(submit.label(), "Sign up");
}

#[test]
fn test_press_touches_untouched_fields() {
    let form = Aggregator::new();
    let submit = SubmitButton::new("Save", form.clone());
    let name = TextInput::new(required("Name"), Some(form.reporter()));
    let topics = CheckboxGroup::new(
        vec!["rust", "go"],
        FieldProps::new(Vec::new()).description("Topics").required(true),
        Some(form.reporter()),
    )
    .unwrap();
    name.commit("Bob");

    let fields: [&dyn Validatable; 2] = [&name, &topics];
    let outcome = submit.press(&fields);

    assert!(topics.has_interacted());
    match outcome {
        SubmitOutcome::Blocked(result) => {
            assert_eq!(result.errors().len(), 1);
            assert_eq!(result.first_invalid_field(), Some(topics.id()));
        }
        other => panic!("expected Blocked, got {:?}", other),
    }

    topics.toggle("go");
    assert!(submit.press(&fields).is_submitted());
}

#[test]
fn test_disabled_override() {
    let form = Aggregator::new();
    let mut submit = SubmitButton::new("Save", form.clone()).disabled();

    assert!(form.is_valid());
    assert!(!submit.is_enabled());
    assert_eq!(submit.press(&[]), SubmitOutcome::Disabled);

    submit.set_disabled(false);
    assert!(submit.is_enabled());
    assert_eq!(submit.press(&[]), SubmitOutcome::Submitted);
}

#[test]
fn test_alert_gates_on_interaction_by_default() {
    let form = Aggregator::new();
    let alert = Alert::new(form.clone()).title("Please fix the following");
    let name = TextInput::new(required("Name"), Some(form.reporter()));
    let _email = TextInput::new(required("Email"), Some(form.reporter()));

    assert!(!alert.is_visible());

    name.touch();
    assert_eq!(alert.messages(), vec!["Name is required"]);
    assert_eq!(alert.heading(), Some("Please fix the following"));
}

#[test]
fn test_alert_always_lists_every_error() {
    let form = Aggregator::new();
    let alert = Alert::new(form.clone()).display(ErrorDisplay::Always);
    let _name = TextInput::new(required("Name"), Some(form.reporter()));
    let _email = TextInput::new(required("Email"), Some(form.reporter()));

    assert_eq!(alert.messages(), vec!["Name is required", "Email is required"]);
}

#[test]
fn test_alert_limit() {
    let form = Aggregator::new();
    let alert = Alert::new(form.clone())
        .display(ErrorDisplay::Always)
        .limit(1);
    let _a = TextInput::new(required("A"), Some(form.reporter()));
    let _b = TextInput::new(required("B"), Some(form.reporter()));
    let _c = TextInput::new(required("C"), Some(form.reporter()));

    assert_eq!(alert.messages(), vec!["A is required"]);
    assert_eq!(alert.overflow(), 2);
}
