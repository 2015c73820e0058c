use crate::field::FieldId;

/// Information about a single outstanding validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field that reported the error.
    pub field_id: FieldId,
    /// Whether the user has committed the field.
    pub has_interacted: bool,
    /// Error message.
    pub message: String,
}

/// Snapshot of a form's validity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidationResult {
    /// Every field passed validation.
    #[default]
    Valid,
    /// One or more fields failed validation, in report order.
    Invalid(Vec<FieldError>),
}

impl ValidationResult {
    /// Check if all fields passed validation.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Check if any field failed validation.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Get all validation errors.
    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }

    /// Get the first validation error (if any).
    pub fn first_error(&self) -> Option<&FieldError> {
        self.errors().first()
    }

    /// Get the id of the first invalid field (for focusing).
    pub fn first_invalid_field(&self) -> Option<FieldId> {
        self.first_error().map(|e| e.field_id)
    }
}
