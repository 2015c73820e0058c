//! The required/pattern policy and the verdicts it produces.

use std::fmt;

use super::{FieldValue, Pattern, RequiredWording, ValidationMessage};

/// Why a value failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationIssue {
    /// The value is empty while the field is required.
    RequiredFieldEmpty,
    /// A non-empty value failed the configured pattern.
    PatternMismatch,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequiredFieldEmpty => f.write_str("required field empty"),
            Self::PatternMismatch => f.write_str("pattern mismatch"),
        }
    }
}

/// Outcome of a validation pass.
///
/// A message exists exactly when the verdict is invalid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Verdict {
    #[default]
    Valid,
    Invalid {
        issue: ValidationIssue,
        message: String,
    },
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The validation message, present only when invalid.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid { message, .. } => Some(message),
        }
    }

    pub fn issue(&self) -> Option<ValidationIssue> {
        match self {
            Self::Valid => None,
            Self::Invalid { issue, .. } => Some(*issue),
        }
    }
}

/// Required flag, pattern and messages for one field.
///
/// `evaluate` is a pure function of the policy and the value, so the same
/// inputs always produce the same verdict.
#[derive(Debug, Clone, Default)]
pub struct ValidationPolicy {
    /// Human readable field name used in default messages.
    pub description: String,
    pub required: bool,
    pub pattern: Option<Pattern>,
    pub message: Option<ValidationMessage>,
    pub wording: RequiredWording,
}

impl ValidationPolicy {
    /// Create a policy for a field with the given description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Default::default()
        }
    }

    /// Mark the field as required.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set the pattern non-empty values must satisfy.
    pub fn pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Override the default messages.
    pub fn message(mut self, message: impl Into<ValidationMessage>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Choose how the default required message is phrased.
    pub fn wording(mut self, wording: RequiredWording) -> Self {
        self.wording = wording;
        self
    }

    /// Message used when a required value is empty.
    pub fn required_message(&self) -> String {
        self.message
            .as_ref()
            .and_then(ValidationMessage::required)
            .map(str::to_string)
            .unwrap_or_else(|| self.wording.render(&self.description))
    }

    /// Message used when a value fails the pattern.
    pub fn pattern_message(&self) -> String {
        self.message
            .as_ref()
            .and_then(ValidationMessage::valid)
            .map(str::to_string)
            .unwrap_or_else(|| format!("{} is not valid", self.description))
    }

    /// Validate a normalised value.
    pub fn evaluate(&self, value: &FieldValue) -> Verdict {
        if value.is_empty() {
            return if self.required {
                Verdict::Invalid {
                    issue: ValidationIssue::RequiredFieldEmpty,
                    message: self.required_message(),
                }
            } else {
                Verdict::Valid
            };
        }

        match &self.pattern {
            Some(pattern) if !pattern.test(value) => Verdict::Invalid {
                issue: ValidationIssue::PatternMismatch,
                message: self.pattern_message(),
            },
            _ => Verdict::Valid,
        }
    }
}
