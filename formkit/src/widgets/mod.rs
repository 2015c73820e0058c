//! Built-in form components.
//!
//! Input-like components are all [`Field`](crate::field::Field)s with a
//! component-specific [`FieldKind`](crate::field::FieldKind). Form-level
//! components ([`SubmitButton`], [`Alert`]) read the form's
//! [`Aggregator`](crate::validation::Aggregator).

pub mod alert;
pub mod button;
pub mod checkbox;
pub mod input;
pub mod number;
pub mod options;
pub mod radio;
pub mod select;

pub use alert::Alert;
pub use button::{SubmitButton, SubmitOutcome};
pub use checkbox::{CheckboxGroup, CheckboxKind};
pub use input::{TextInput, TextKind};
pub use number::{NumberInput, NumberKind};
pub use options::{OptionSet, SelectOption};
pub use radio::{RadioGroup, RadioKind};
pub use select::{Dropdown, DropdownKind};
