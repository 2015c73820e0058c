//! Submit button whose enablement follows form validity.

use log::debug;

use crate::validation::{Aggregator, Validatable, ValidationResult};

/// What happened when the submit button was pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field is valid; the owner should submit.
    Submitted,
    /// At least one field is invalid.
    Blocked(ValidationResult),
    /// The button was explicitly disabled.
    Disabled,
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted)
    }
}

/// A submit button bound to a form's aggregator.
///
/// # Example
///
/// ```ignore
/// let submit = SubmitButton::new("Sign up", form.clone());
///
/// // Render disabled until every field reports valid
/// let enabled = submit.is_enabled();
///
/// match submit.press(&[&name, &email]) {
///     SubmitOutcome::Submitted => save(),
///     SubmitOutcome::Blocked(result) => focus(result.first_invalid_field()),
///     SubmitOutcome::Disabled => {}
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SubmitButton {
    label: String,
    aggregator: Aggregator,
    disabled: bool,
}

impl SubmitButton {
    /// Create a submit button for the given form.
    pub fn new(label: impl Into<String>, aggregator: Aggregator) -> Self {
        Self {
            label: label.into(),
            aggregator,
            disabled: false,
        }
    }

    /// Mark the button as disabled regardless of validity.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Set the disabled override.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the button should be rendered as pressable.
    pub fn is_enabled(&self) -> bool {
        !self.disabled && self.aggregator.is_valid()
    }

    /// Press the button.
    ///
    /// Every given field is committed first so errors on fields the user
    /// never visited become visible.
    pub fn press(&self, fields: &[&dyn Validatable]) -> SubmitOutcome {
        if self.disabled {
            return SubmitOutcome::Disabled;
        }

        for field in fields {
            field.touch();
        }

        let result = self.aggregator.result();
        debug!(
            "SubmitButton '{}' pressed: {} error(s)",
            self.label,
            result.errors().len()
        );
        if result.is_valid() {
            SubmitOutcome::Submitted
        } else {
            SubmitOutcome::Blocked(result)
        }
    }
}
