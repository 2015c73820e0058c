//! Option lists shared by dropdowns, radio groups and checkbox groups.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// One selectable option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Value reported to the owner
    pub value: String,
    /// Text shown to the user (defaults to the value)
    #[serde(default)]
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Get the label, falling back to the value when none was given.
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            &self.value
        } else {
            &self.label
        }
    }
}

impl From<&str> for SelectOption {
    fn from(value: &str) -> Self {
        Self::new(value, value)
    }
}

/// An ordered list of options with unique values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSet {
    options: Vec<SelectOption>,
}

impl OptionSet {
    /// Build an option set, rejecting duplicate values.
    pub fn new(options: impl IntoIterator<Item = impl Into<SelectOption>>) -> Result<Self, ConfigError> {
        let options: Vec<SelectOption> = options.into_iter().map(Into::into).collect();
        let mut seen = HashSet::new();
        for option in &options {
            if !seen.insert(option.value.as_str()) {
                return Err(ConfigError::DuplicateOption(option.value.clone()));
            }
        }
        Ok(Self { options })
    }

    pub fn contains(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value)
    }

    pub fn first(&self) -> Option<&SelectOption> {
        self.options.first()
    }

    /// Get the option with the given value.
    pub fn get(&self, value: &str) -> Option<&SelectOption> {
        self.options.iter().find(|o| o.value == value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectOption> {
        self.options.iter()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// `value` if it is one of the options, otherwise the empty string.
    pub(crate) fn coerce<'a>(&self, value: &'a str) -> &'a str {
        if self.contains(value) { value } else { "" }
    }

    /// Substitute for a single selection that is no longer an option.
    ///
    /// Empty selections are left alone; anything else missing falls back to
    /// the first option.
    pub(crate) fn reconcile_single(&self, value: &str) -> Option<String> {
        if value.is_empty() || self.contains(value) {
            return None;
        }
        Some(self.first().map(|o| o.value.clone()).unwrap_or_default())
    }

    /// Keep only the selected values that are still options.
    pub(crate) fn retain_known(&self, values: &[String]) -> Vec<String> {
        values
            .iter()
            .filter(|v| self.contains(v))
            .cloned()
            .collect()
    }
}
