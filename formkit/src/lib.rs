pub mod config;
pub mod error;
pub mod field;
pub mod validation;
pub mod widgets;

pub use error::ConfigError;

pub mod prelude {
    pub use crate::config::{FieldConfig, PatternConfig, PatternPreset};
    pub use crate::error::ConfigError;
    pub use crate::field::{Field, FieldId, FieldKind, FieldPhase, FieldProps, ValidationEvent};
    pub use crate::validation::{
        Aggregator, ErrorDisplay, FieldValue, Pattern, Validatable, ValidationIssue,
        ValidationMessage, ValidationPolicy, ValidationReporter, ValidationResult, Verdict,
    };
    pub use crate::widgets::{
        Alert, CheckboxGroup, Dropdown, NumberInput, NumberKind, RadioGroup, SelectOption,
        SubmitButton, SubmitOutcome, TextInput,
    };
}
