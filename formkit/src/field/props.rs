//! Externally supplied field configuration.

use std::fmt;
use std::sync::Arc;

use super::ValidationEvent;
use crate::validation::{Pattern, ValidationMessage, ValidationPolicy};

/// Value transform used for `format` and `parse`.
pub type Transform<V> = Arc<dyn Fn(&V) -> V + Send + Sync>;

/// Called with the new value whenever the effective value changes.
pub type ChangeHandler<V> = Arc<dyn Fn(&V) + Send + Sync>;

/// Called whenever a fresh verdict is produced.
pub type ValidationHandler = Arc<dyn Fn(&ValidationEvent) + Send + Sync>;

/// Props an owner passes to a field on mount and on every re-render.
///
/// # Example
///
/// ```ignore
/// let props = FieldProps::new(String::new())
///     .description("Name")
///     .required(true)
///     .on_change(|value: &String| log::info!("name is now {}", value));
/// ```
pub struct FieldProps<V> {
    pub value: V,
    pub description: String,
    pub required: bool,
    pub pattern: Option<Pattern>,
    pub message: Option<ValidationMessage>,
    /// Applied on mount, on external value changes and on commit
    pub format: Option<Transform<V>>,
    /// Applied on focus to turn a formatted value back into an editable one
    pub parse: Option<Transform<V>>,
    pub read_only: bool,
    pub on_change: Option<ChangeHandler<V>>,
    pub on_validation: Option<ValidationHandler>,
}

impl<V> FieldProps<V> {
    /// Create props carrying the given value.
    pub fn new(value: V) -> Self {
        Self {
            value,
            description: String::new(),
            required: false,
            pattern: None,
            message: None,
            format: None,
            parse: None,
            read_only: false,
            on_change: None,
            on_validation: None,
        }
    }

    /// Replace the value, keeping everything else.
    pub fn value(mut self, value: V) -> Self {
        self.value = value;
        self
    }

    /// Set the description used in default messages.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Override the default validation messages.
    pub fn message(mut self, message: impl Into<ValidationMessage>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn format<F>(mut self, f: F) -> Self
    where
        F: Fn(&V) -> V + Send + Sync + 'static,
    {
        self.format = Some(Arc::new(f));
        self
    }

    pub fn parse<F>(mut self, f: F) -> Self
    where
        F: Fn(&V) -> V + Send + Sync + 'static,
    {
        self.parse = Some(Arc::new(f));
        self
    }

    /// Mark the field as read-only. Read-only fields ignore user events.
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn on_change<F>(mut self, f: F) -> Self
    where
        F: Fn(&V) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(f));
        self
    }

    pub fn on_validation<F>(mut self, f: F) -> Self
    where
        F: Fn(&ValidationEvent) + Send + Sync + 'static,
    {
        self.on_validation = Some(Arc::new(f));
        self
    }

    /// Build the validation policy these props describe.
    pub fn policy(&self) -> ValidationPolicy {
        ValidationPolicy {
            description: self.description.clone(),
            required: self.required,
            pattern: self.pattern.clone(),
            message: self.message.clone(),
            wording: Default::default(),
        }
    }
}

impl<V: Default> Default for FieldProps<V> {
    fn default() -> Self {
        Self::new(V::default())
    }
}

impl<V: Clone> Clone for FieldProps<V> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            description: self.description.clone(),
            required: self.required,
            pattern: self.pattern.clone(),
            message: self.message.clone(),
            format: self.format.clone(),
            parse: self.parse.clone(),
            read_only: self.read_only,
            on_change: self.on_change.clone(),
            on_validation: self.on_validation.clone(),
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for FieldProps<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldProps")
            .field("value", &self.value)
            .field("description", &self.description)
            .field("required", &self.required)
            .field("pattern", &self.pattern)
            .field("message", &self.message)
            .field("format", &self.format.is_some())
            .field("parse", &self.parse.is_some())
            .field("read_only", &self.read_only)
            .finish_non_exhaustive()
    }
}
