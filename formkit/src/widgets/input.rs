//! Text input - a single-line free text field.

use std::sync::Arc;

use crate::field::{Field, FieldKind, FieldProps};
use crate::validation::{FieldValue, ValidationReporter};

/// Text values are validated as typed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextKind;

impl FieldKind for TextKind {
    type Value = String;

    fn normalize(&self, value: &String) -> FieldValue {
        FieldValue::Text(value.clone())
    }
}

/// A single-line text field.
///
/// # Example
///
/// ```ignore
/// let zip = TextInput::new(
///     FieldProps::new(String::new())
///         .description("Zip code")
///         .pattern(Pattern::regex(r"^[0-9]{5}$")?),
///     Some(form.reporter()),
/// );
///
/// zip.edit("1234");
/// zip.commit("1234");
/// assert_eq!(zip.message().as_deref(), Some("Zip code is not valid"));
/// ```
pub type TextInput = Field<TextKind>;

impl Field<TextKind> {
    /// Mount a text input.
    pub fn new(
        props: FieldProps<String>,
        reporter: Option<Arc<dyn ValidationReporter>>,
    ) -> Self {
        Self::mount(TextKind, props, reporter)
    }

    /// Check if the input is empty
    pub fn is_empty(&self) -> bool {
        self.with_controller(|c| c.display_value().is_empty())
            .unwrap_or(true)
    }
}
