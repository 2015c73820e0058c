//! Tests for mounted fields talking to their owner and aggregator.

use std::sync::{Arc, Mutex};

use formkit::field::{FieldPhase, FieldProps, ValidationEvent};
use formkit::validation::{Aggregator, ErrorDisplay, Validatable};
use formkit::widgets::{NumberInput, NumberKind, TextInput};

/// Records everything a field tells its owner.
#[derive(Clone, Default)]
struct Recorder {
    changes: Arc<Mutex<Vec<String>>>,
    validations: Arc<Mutex<Vec<ValidationEvent>>>,
}

impl Recorder {
    fn attach(&self, props: FieldProps<String>) -> FieldProps<String> {
        let changes = Arc::clone(&self.changes);
        let validations = Arc::clone(&self.validations);
        props
            .on_change(move |value: &String| changes.lock().unwrap().push(value.clone()))
            .on_validation(move |event| validations.lock().unwrap().push(event.clone()))
    }

    fn changes(&self) -> Vec<String> {
        self.changes.lock().unwrap().clone()
    }

    fn validations(&self) -> Vec<ValidationEvent> {
        self.validations.lock().unwrap().clone()
    }
}

fn name_props() -> FieldProps<String> {
    FieldProps::new(String::new())
        .description("Name")
        .required(true)
}

#[test]
fn test_name_scenario() {
    let form = Aggregator::new();
    let owner = Recorder::default();
    let name = TextInput::new(owner.attach(name_props()), Some(form.reporter()));

    // Mount
    let mounted = owner.validations();
    assert_eq!(mounted.len(), 1);
    assert!(!mounted[0].has_interacted);
    assert!(!mounted[0].is_valid);
    assert_eq!(mounted[0].message.as_deref(), Some("Name is required"));
    assert_eq!(form.errors(), vec!["Name is required"]);

    // Typing
    name.edit("Bob");
    assert_eq!(owner.changes(), vec!["Bob"]);
    assert!(!name.has_interacted());
    assert_eq!(owner.validations().len(), 1);

    // Blur
    name.commit("Bob");
    let last = owner.validations().pop().unwrap();
    assert!(last.has_interacted);
    assert!(last.is_valid);
    assert_eq!(last.message, None);
    assert!(form.is_valid());
    assert_eq!(owner.changes(), vec!["Bob"]);
}

#[test]
fn test_repeated_props_notify_once() {
    let form = Aggregator::new();
    let owner = Recorder::default();
    let name = TextInput::new(owner.attach(name_props()), Some(form.reporter()));
    name.commit("Bob");
    let validations_before = owner.validations().len();

    name.set_props(owner.attach(name_props().value("Carol".to_string())));
    name.set_props(owner.attach(name_props().value("Carol".to_string())));

    assert_eq!(owner.changes(), vec!["Bob", "Carol"]);
    assert_eq!(owner.validations().len(), validations_before + 1);
}

#[test]
fn test_relaxed_required_after_typing_enables_form() {
    let form = Aggregator::new();
    let name = TextInput::new(name_props(), Some(form.reporter()));

    name.edit("Bob");
    assert!(!form.is_valid(), "typing alone does not report");

    name.set_props(
        FieldProps::new("Bob".to_string())
            .description("Name")
            .required(false),
    );

    assert!(name.is_valid());
    assert!(form.is_valid());
    assert!(form.errors().is_empty());
}

#[test]
fn test_visible_message_gated_by_interaction() {
    let form = Aggregator::new();
    let name = TextInput::new(name_props(), Some(form.reporter()));

    assert_eq!(name.message().as_deref(), Some("Name is required"));
    assert_eq!(name.visible_message(), None);

    name.touch();
    assert_eq!(name.visible_message().as_deref(), Some("Name is required"));

    name.set_error_display(ErrorDisplay::None);
    assert_eq!(name.visible_message(), None);
}

#[test]
fn test_callbacks_may_read_field_and_form() {
    let form = Aggregator::new();
    let seen = Arc::new(Mutex::new(None));
    let form_in_handler = form.clone();
    let seen_in_handler = Arc::clone(&seen);
    let props = name_props().on_validation(move |_| {
        *seen_in_handler.lock().unwrap() = Some(form_in_handler.is_valid());
    });

    let name = TextInput::new(props, Some(form.reporter()));
    name.commit("Bob");

    assert_eq!(*seen.lock().unwrap(), Some(true));
    assert_eq!(name.phase(), FieldPhase::Committed);
}

#[test]
fn test_unmount_removes_entry() {
    let form = Aggregator::new();
    let name = TextInput::new(name_props(), Some(form.reporter()));
    let nickname = TextInput::new(
        FieldProps::new(String::new()).description("Nickname"),
        Some(form.reporter()),
    );
    assert!(!form.is_valid());

    name.unmount();

    assert!(!name.is_mounted());
    assert!(form.is_valid());
    assert_eq!(form.len(), 1);

    // Events after unmount are not reported
    name.commit("");
    assert_eq!(form.len(), 1);
    drop(nickname);
    assert!(form.is_empty());
}

#[test]
fn test_drop_of_last_handle_unregisters() {
    let form = Aggregator::new();
    let name = TextInput::new(name_props(), Some(form.reporter()));
    let clone = name.clone();

    drop(name);
    assert_eq!(form.len(), 1, "a clone is still alive");

    drop(clone);
    assert!(form.is_empty());
}

#[test]
fn test_field_without_aggregator() {
    let name = TextInput::new(name_props(), None);

    name.commit("Bob");

    assert!(name.is_valid());
    assert!(!name.is_mounted());
}

#[test]
fn test_dirty_tracking() {
    let name = TextInput::new(name_props(), None);
    assert!(!name.is_dirty());

    name.edit("B");
    assert!(name.is_dirty());

    name.clear_dirty();
    assert!(!name.is_dirty());
}

#[test]
fn test_focus_without_parse_leaves_field_clean() {
    let name = TextInput::new(name_props(), None);
    let price = NumberInput::new(
        NumberKind::new().currency("$"),
        FieldProps::new(String::new()).description("Price"),
        None,
    );
    price.commit("5");
    price.clear_dirty();

    name.focus();
    assert!(!name.is_dirty());

    price.focus();
    assert!(price.is_dirty());
}

#[test]
fn test_field_ids_are_unique() {
    let a = TextInput::new(name_props(), None);
    let b = TextInput::new(name_props(), None);

    assert_ne!(a.id(), b.id());
    assert!(a.id_string().starts_with("__field_"));
}

#[test]
fn test_number_commit_fixes_decimals() {
    let form = Aggregator::new();
    let kind = NumberKind::new().decimals(2).unwrap();
    let amount = NumberInput::new(
        kind,
        FieldProps::new(String::new()).description("Amount").required(true),
        Some(form.reporter()),
    );

    amount.edit("12.34567");
    assert_eq!(amount.display_value(), "12.34567", "typing is left alone");

    amount.commit("12.34567");
    assert_eq!(amount.display_value(), "12.35");
    assert_eq!(amount.number(), 12.35);
    assert!(form.is_valid());
}

#[test]
fn test_number_currency_round_trip_through_focus() {
    let price = NumberInput::new(
        NumberKind::new().currency("$"),
        FieldProps::new(String::new()).description("Price"),
        None,
    );

    price.commit("1234.5");
    assert_eq!(price.display_value(), "$1,234.50");
    assert!(price.is_valid());

    price.focus();
    assert_eq!(price.display_value(), "1234.50");

    price.commit(price.display_value());
    assert_eq!(price.display_value(), "$1,234.50");
}

#[test]
fn test_number_garbage_counts_as_empty() {
    let age = NumberInput::new(
        NumberKind::new(),
        FieldProps::new(String::new()).description("Age").required(true),
        None,
    );

    age.commit("abc");

    assert_eq!(age.display_value(), "");
    assert_eq!(age.message().as_deref(), Some("Age is required"));
    assert!(age.number().is_nan());
}

#[test]
fn test_number_out_of_range_counts_as_empty() {
    let price = NumberInput::new(
        NumberKind::new().currency("$"),
        FieldProps::new(String::new()).description("Price").required(true),
        None,
    );

    price.commit("9".repeat(400));

    assert_eq!(price.display_value(), "");
    assert_eq!(price.message().as_deref(), Some("Price is required"));
}
