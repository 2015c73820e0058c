//! Dropdown - pick one value from a list of options.

use std::sync::Arc;

use crate::error::ConfigError;
use crate::field::{Field, FieldKind, FieldProps};
use crate::validation::{FieldValue, ValidationReporter};

use super::options::{OptionSet, SelectOption};

/// Single-choice dropdown behaviour.
///
/// A value that is not among the options counts as nothing selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropdownKind {
    options: OptionSet,
}

impl DropdownKind {
    pub fn new(options: OptionSet) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &OptionSet {
        &self.options
    }
}

impl FieldKind for DropdownKind {
    type Value = String;

    fn normalize(&self, value: &String) -> FieldValue {
        FieldValue::Text(self.options.coerce(value).to_string())
    }

    fn reconcile(&self, value: &String) -> Option<String> {
        self.options.reconcile_single(value)
    }
}

/// A dropdown select.
///
/// # Example
///
/// ```ignore
/// let plan = Dropdown::new(
///     vec!["free", "pro"],
///     FieldProps::new(String::new()).description("Plan").required(true),
///     Some(form.reporter()),
/// )?;
///
/// plan.select("pro");
/// assert!(plan.is_valid());
/// ```
pub type Dropdown = Field<DropdownKind>;

impl Field<DropdownKind> {
    /// Mount a dropdown.
    pub fn new(
        options: impl IntoIterator<Item = impl Into<SelectOption>>,
        props: FieldProps<String>,
        reporter: Option<Arc<dyn ValidationReporter>>,
    ) -> Result<Self, ConfigError> {
        let options = OptionSet::new(options)?;
        Ok(Self::mount(DropdownKind::new(options), props, reporter))
    }

    /// Select a value. A dropdown change is also its commit.
    pub fn select(&self, value: impl Into<String>) {
        self.commit(value.into());
    }

    /// Get the option list.
    pub fn options(&self) -> OptionSet {
        self.with_controller(|c| c.kind().options().clone())
            .unwrap_or_default()
    }

    /// Replace the option list.
    pub fn set_options(
        &self,
        options: impl IntoIterator<Item = impl Into<SelectOption>>,
    ) -> Result<(), ConfigError> {
        let options = OptionSet::new(options)?;
        self.set_kind(DropdownKind::new(options));
        Ok(())
    }

    /// Get the label of the selected option.
    pub fn selected_label(&self) -> Option<String> {
        self.with_controller(|c| {
            c.kind()
                .options()
                .get(c.value())
                .map(|o| o.display_label().to_string())
        })
        .flatten()
    }
}
