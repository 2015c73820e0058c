//! Radio group - mutually exclusive options.

use std::sync::Arc;

use crate::error::ConfigError;
use crate::field::{Field, FieldKind, FieldProps};
use crate::validation::{FieldValue, ValidationReporter};

use super::options::{OptionSet, SelectOption};

/// Radio group behaviour. Same coercion rules as a dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RadioKind {
    options: OptionSet,
}

impl RadioKind {
    pub fn new(options: OptionSet) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &OptionSet {
        &self.options
    }
}

impl FieldKind for RadioKind {
    type Value = String;

    fn normalize(&self, value: &String) -> FieldValue {
        FieldValue::Text(self.options.coerce(value).to_string())
    }

    fn reconcile(&self, value: &String) -> Option<String> {
        self.options.reconcile_single(value)
    }
}

/// A group of radio buttons, selection by value.
///
/// # Example
///
/// ```ignore
/// let contact = RadioGroup::new(
///     vec![SelectOption::new("email", "Email"), SelectOption::new("phone", "Phone")],
///     FieldProps::new(String::new()).description("Contact method").required(true),
///     Some(form.reporter()),
/// )?;
///
/// contact.select("phone");
/// assert!(contact.is_selected("phone"));
/// ```
pub type RadioGroup = Field<RadioKind>;

impl Field<RadioKind> {
    /// Mount a radio group.
    pub fn new(
        options: impl IntoIterator<Item = impl Into<SelectOption>>,
        props: FieldProps<String>,
        reporter: Option<Arc<dyn ValidationReporter>>,
    ) -> Result<Self, ConfigError> {
        let options = OptionSet::new(options)?;
        Ok(Self::mount(RadioKind::new(options), props, reporter))
    }

    /// Select an option. Clicking a radio commits immediately.
    pub fn select(&self, value: impl Into<String>) {
        self.commit(value.into());
    }

    /// Check if a specific value is selected
    pub fn is_selected(&self, value: &str) -> bool {
        self.with_controller(|c| c.value() == value)
            .unwrap_or(false)
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
        self.set_kind(RadioKind::new(options));
        Ok(())
    }
}
