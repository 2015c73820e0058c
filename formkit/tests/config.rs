//! Tests for declarative field configuration.

use formkit::ConfigError;
use formkit::config::{FieldConfig, PatternConfig, PatternPreset};
use formkit::validation::{Aggregator, ValidationMessage};
use formkit::widgets::{Dropdown, NumberInput, TextInput};

#[test]
fn test_parse_minimal_config() {
    let config: FieldConfig = serde_json::from_str(r#"{ "description": "Name" }"#).unwrap();

    assert_eq!(config.description, "Name");
    assert!(!config.required);
    assert!(config.pattern.is_none());
    assert!(config.options.is_empty());
}

#[test]
fn test_message_accepts_string_or_object() {
    let single: FieldConfig =
        serde_json::from_str(r#"{ "message": "Fill this in" }"#).unwrap();
    let split: FieldConfig =
        serde_json::from_str(r#"{ "message": { "valid": "Digits only" } }"#).unwrap();

    assert_eq!(
        single.message,
        Some(ValidationMessage::Single("Fill this in".to_string()))
    );
    assert_eq!(
        split.message,
        Some(ValidationMessage::Split {
            required: None,
            valid: Some("Digits only".to_string()),
        })
    );
}

#[test]
fn test_pattern_accepts_regex_or_preset() {
    let regex: FieldConfig = serde_json::from_str(r#"{ "pattern": "^[0-9]{5}$" }"#).unwrap();
    let preset: FieldConfig =
        serde_json::from_str(r#"{ "pattern": { "preset": "email" } }"#).unwrap();

    assert_eq!(
        regex.pattern,
        Some(PatternConfig::Regex("^[0-9]{5}$".to_string()))
    );
    assert_eq!(
        preset.pattern,
        Some(PatternConfig::Preset {
            preset: PatternPreset::Email
        })
    );
}

#[test]
fn test_config_builds_working_field() {
    let config: FieldConfig = serde_json::from_str(
        r#"{
            "description": "Zip code",
            "required": true,
            "pattern": "^[0-9]{5}$",
            "message": { "valid": "Use five digits" }
        }"#,
    )
    .unwrap();
    let form = Aggregator::new();
    let zip = TextInput::new(config.props(String::new()).unwrap(), Some(form.reporter()));

    assert_eq!(form.errors(), vec!["Zip code is required"]);

    zip.commit("abc");
    assert_eq!(form.errors(), vec!["Use five digits"]);

    zip.commit("12345");
    assert!(form.is_valid());
}

#[test]
fn test_invalid_regex_fails_at_build() {
    let config: FieldConfig = serde_json::from_str(r#"{ "pattern": "[a-" }"#).unwrap();

    let err = config.props(String::new()).unwrap_err();

    assert!(matches!(err, ConfigError::InvalidPattern { .. }));
}

#[test]
fn test_number_kind_from_config() {
    let config: FieldConfig = serde_json::from_str(
        r#"{ "description": "Price", "currency": "€", "decimals": 0 }"#,
    )
    .unwrap();
    let price = NumberInput::new(
        config.number_kind().unwrap(),
        config.props(String::new()).unwrap(),
        None,
    );

    price.commit("2500.4");

    assert_eq!(price.display_value(), "€2,500");
}

#[test]
fn test_too_many_decimals_rejected() {
    let config: FieldConfig = serde_json::from_str(r#"{ "decimals": 40 }"#).unwrap();

    assert!(matches!(
        config.number_kind(),
        Err(ConfigError::InvalidDecimals(40))
    ));
}

#[test]
fn test_options_from_config() {
    let config: FieldConfig = serde_json::from_str(
        r#"{
            "description": "Plan",
            "required": true,
            "options": [
                { "value": "free", "label": "Free" },
                { "value": "pro" }
            ]
        }"#,
    )
    .unwrap();
    let plan = Dropdown::mount(
        config.dropdown_kind().unwrap(),
        config.props(String::new()).unwrap(),
        None,
    );

    plan.select("pro");

    assert_eq!(plan.selected_label().as_deref(), Some("pro"));
    assert!(plan.is_valid());
}

#[test]
fn test_duplicate_config_options_rejected() {
    let config: FieldConfig = serde_json::from_str(
        r#"{ "options": [ { "value": "a" }, { "value": "a" } ] }"#,
    )
    .unwrap();

    assert!(matches!(
        config.checkbox_kind(),
        Err(ConfigError::DuplicateOption(_))
    ));
}
