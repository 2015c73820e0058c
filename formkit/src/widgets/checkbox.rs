//! Checkbox group - any number of options may be checked.

use std::sync::Arc;

use crate::error::ConfigError;
use crate::field::{Field, FieldKind, FieldProps};
use crate::validation::{FieldValue, RequiredWording, ValidationReporter};

use super::options::{OptionSet, SelectOption};

/// Multi-select behaviour.
///
/// Required means at least one known option is checked. Values that are not
/// options are ignored for validation and dropped when the options change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckboxKind {
    options: OptionSet,
}

impl CheckboxKind {
    pub fn new(options: OptionSet) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &OptionSet {
        &self.options
    }
}

impl FieldKind for CheckboxKind {
    type Value = Vec<String>;

    fn normalize(&self, value: &Vec<String>) -> FieldValue {
        FieldValue::Selection(self.options.retain_known(value))
    }

    fn reconcile(&self, value: &Vec<String>) -> Option<Vec<String>> {
        let kept = self.options.retain_known(value);
        (kept.len() != value.len()).then_some(kept)
    }

    fn required_wording(&self) -> RequiredWording {
        RequiredWording::Selection
    }
}

/// A group of checkboxes whose value is the list of checked option values.
///
/// Every change builds a new list; the previous value is never mutated.
///
/// # Example
///
/// ```ignore
/// let topics = CheckboxGroup::new(
///     vec!["rust", "go", "zig"],
///     FieldProps::new(Vec::new()).description("Topics").required(true),
///     Some(form.reporter()),
/// )?;
///
/// topics.toggle("rust");
/// assert_eq!(topics.value(), vec!["rust".to_string()]);
/// ```
pub type CheckboxGroup = Field<CheckboxKind>;

impl Field<CheckboxKind> {
    /// Mount a checkbox group.
    pub fn new(
        options: impl IntoIterator<Item = impl Into<SelectOption>>,
        props: FieldProps<Vec<String>>,
        reporter: Option<Arc<dyn ValidationReporter>>,
    ) -> Result<Self, ConfigError> {
        let options = OptionSet::new(options)?;
        Ok(Self::mount(CheckboxKind::new(options), props, reporter))
    }

    /// Check or uncheck one option. Each toggle commits.
    ///
    /// Values that are not among the options can be unchecked but never
    /// checked.
    pub fn toggle(&self, value: &str) {
        let current = self.value();
        let next: Vec<String> = if current.iter().any(|v| v == value) {
            current.into_iter().filter(|v| v != value).collect()
        } else if !self.options().contains(value) {
            return;
        } else {
            current
                .into_iter()
                .chain(std::iter::once(value.to_string()))
                .collect()
        };
        self.commit(next);
    }

    /// Replace the whole selection.
    pub fn set_selected(&self, values: impl IntoIterator<Item = impl Into<String>>) {
        self.commit(values.into_iter().map(Into::into).collect::<Vec<_>>());
    }

    /// Check if a specific value is checked
    pub fn is_selected(&self, value: &str) -> bool {
        self.with_controller(|c| c.value().iter().any(|v| v == value))
            .unwrap_or(false)
    }

    /// Get the option list.
    pub fn options(&self) -> OptionSet {
        self.with_controller(|c| c.kind().options().clone())
            .unwrap_or_default()
    }

    /// Replace the option list, dropping checked values that disappeared.
    pub fn set_options(
        &self,
        options: impl IntoIterator<Item = impl Into<SelectOption>>,
    ) -> Result<(), ConfigError> {
        let options = OptionSet::new(options)?;
        self.set_kind(CheckboxKind::new(options));
        Ok(())
    }
}
