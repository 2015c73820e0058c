//! Declarative field configuration.
//!
//! A [`FieldConfig`] describes a field's validation setup as data, so forms
//! can be defined in JSON (or any serde format) and turned into props and
//! kinds. Patterns, option lists and numeric modes are checked during the
//! conversion, never while validating.
//!
//! ```ignore
//! {
//!     "description": "Zip code",
//!     "required": true,
//!     "pattern": "^[0-9]{5}$",
//!     "message": { "valid": "Use five digits" }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::field::FieldProps;
use crate::validation::{Pattern, ValidationMessage};
use crate::widgets::{CheckboxKind, DropdownKind, NumberKind, OptionSet, RadioKind, SelectOption};

/// Named patterns available to configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternPreset {
    Email,
}

/// A pattern as written in configuration: a regular expression string or a
/// `{ "preset": ... }` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatternConfig {
    Regex(String),
    Preset { preset: PatternPreset },
}

impl PatternConfig {
    /// Build the runtime pattern.
    pub fn build(&self) -> Result<Pattern, ConfigError> {
        match self {
            Self::Regex(source) => Pattern::regex(source),
            Self::Preset {
                preset: PatternPreset::Email,
            } => Ok(Pattern::email()),
        }
    }
}

/// Validation setup for one field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub description: String,
    pub required: bool,
    pub pattern: Option<PatternConfig>,
    pub message: Option<ValidationMessage>,
    pub read_only: bool,
    /// Numeric fields: decimal places fixed on commit
    pub decimals: Option<u32>,
    /// Numeric fields: currency prefix rendered on commit
    pub currency: Option<String>,
    /// Option fields: the selectable options
    pub options: Vec<SelectOption>,
}

impl FieldConfig {
    /// Build props carrying `value`.
    pub fn props<V>(&self, value: V) -> Result<FieldProps<V>, ConfigError> {
        let mut props = FieldProps::new(value)
            .description(self.description.clone())
            .required(self.required)
            .read_only(self.read_only);
        if let Some(pattern) = &self.pattern {
            props = props.pattern(pattern.build()?);
        }
        if let Some(message) = &self.message {
            props = props.message(message.clone());
        }
        Ok(props)
    }

    /// Build the numeric kind described by `decimals` and `currency`.
    pub fn number_kind(&self) -> Result<NumberKind, ConfigError> {
        let mut kind = NumberKind::new();
        if let Some(decimals) = self.decimals {
            kind = kind.decimals(decimals)?;
        }
        if let Some(prefix) = &self.currency {
            kind = kind.currency(prefix.clone());
        }
        Ok(kind)
    }

    /// Build the option list.
    pub fn option_set(&self) -> Result<OptionSet, ConfigError> {
        OptionSet::new(self.options.iter().cloned())
    }

    pub fn dropdown_kind(&self) -> Result<DropdownKind, ConfigError> {
        self.option_set().map(DropdownKind::new)
    }

    pub fn radio_kind(&self) -> Result<RadioKind, ConfigError> {
        self.option_set().map(RadioKind::new)
    }

    pub fn checkbox_kind(&self) -> Result<CheckboxKind, ConfigError> {
        self.option_set().map(CheckboxKind::new)
    }
}
