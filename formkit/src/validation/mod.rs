//! Field validation for formkit.
//!
//! A [`ValidationPolicy`] turns a normalised [`FieldValue`] into a
//! [`Verdict`]. Fields run their policy as they are mounted, edited and
//! committed, and report each verdict to an [`Aggregator`] which derives
//! form validity and the ordered error list.
//!
//! # Example
//!
//! ```ignore
//! use formkit::validation::{FieldValue, Pattern, ValidationPolicy};
//!
//! let zip = ValidationPolicy::new("Zip code")
//!     .pattern(Pattern::regex(r"^[0-9]{5}$")?);
//!
//! assert!(zip.evaluate(&FieldValue::from("12345")).is_valid());
//! assert_eq!(
//!     zip.evaluate(&FieldValue::from("abc")).message(),
//!     Some("Zip code is not valid"),
//! );
//! ```

mod aggregator;
mod error_display;
mod message;
mod pattern;
mod policy;
mod result;
mod validatable;
mod value;

pub use aggregator::{Aggregator, ValidationEntry, ValidationReporter};
pub use error_display::ErrorDisplay;
pub use message::{RequiredWording, ValidationMessage};
pub use pattern::{Pattern, Predicate};
pub use policy::{ValidationIssue, ValidationPolicy, Verdict};
pub use result::{FieldError, ValidationResult};
pub use validatable::Validatable;
pub use value::FieldValue;
