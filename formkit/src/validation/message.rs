//! Validation message overrides.

use serde::{Deserialize, Serialize};

/// A caller-supplied replacement for the default validation messages.
///
/// Deserialises from either a plain string or an object with optional
/// `required` and `valid` keys:
///
/// ```ignore
/// "Enter your name"
/// { "required": "We need your name", "valid": "Letters only please" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValidationMessage {
    /// Replaces both the required and the pattern message.
    Single(String),
    /// Replaces each message independently.
    Split {
        required: Option<String>,
        valid: Option<String>,
    },
}

impl ValidationMessage {
    /// Override for the required message, if any.
    pub fn required(&self) -> Option<&str> {
        match self {
            Self::Single(msg) => Some(msg),
            Self::Split { required, .. } => required.as_deref(),
        }
    }

    /// Override for the pattern message, if any.
    pub fn valid(&self) -> Option<&str> {
        match self {
            Self::Single(msg) => Some(msg),
            Self::Split { valid, .. } => valid.as_deref(),
        }
    }
}

impl From<&str> for ValidationMessage {
    fn from(msg: &str) -> Self {
        Self::Single(msg.to_string())
    }
}

impl From<String> for ValidationMessage {
    fn from(msg: String) -> Self {
        Self::Single(msg)
    }
}

/// How the default required message is phrased.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequiredWording {
    /// `"<description> is required"`
    #[default]
    Value,
    /// `"At least one item in <description> must be selected"`
    Selection,
}

impl RequiredWording {
    /// Render the default required message for a field description.
    pub fn render(self, description: &str) -> String {
        match self {
            Self::Value => format!("{} is required", description),
            Self::Selection => format!("At least one item in {} must be selected", description),
        }
    }
}
