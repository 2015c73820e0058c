//! Validatable trait for fields that take part in form validation.

use super::{ErrorDisplay, Verdict};
use crate::field::FieldId;

/// Object-safe view of a mounted field, independent of its value type.
///
/// Form-level components use this to inspect or force-commit fields of
/// different kinds through one interface.
pub trait Validatable: Send + Sync {
    /// Get the field identity used as the aggregation key.
    fn field_id(&self) -> FieldId;

    /// Get the current verdict.
    fn verdict(&self) -> Verdict;

    /// Check if the user has committed this field at least once.
    fn has_interacted(&self) -> bool;

    /// Commit the current value as if the user had blurred the field.
    fn touch(&self);

    /// Get the error display mode.
    fn error_display(&self) -> ErrorDisplay;

    /// Check if the field currently fails validation.
    fn has_error(&self) -> bool {
        !self.verdict().is_valid()
    }

    /// The message a renderer should show next to the field, if any.
    fn visible_message(&self) -> Option<String> {
        if !self.error_display().shows(self.has_interacted()) {
            return None;
        }
        self.verdict().message().map(str::to_string)
    }
}
