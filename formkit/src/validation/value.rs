//! Normalised field values.

use std::fmt;

/// A field value reduced to the form the validation policy compares.
///
/// Every field kind maps its own value type into one of these before a
/// validation pass.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Free text, compared as-is.
    Text(String),
    /// A parsed number. `NaN` means nothing parseable was entered.
    Number(f64),
    /// Selected option values of a multi-select control.
    Selection(Vec<String>),
}

impl FieldValue {
    /// Check whether the value counts as "nothing entered".
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Number(number) => number.is_nan(),
            Self::Selection(values) => values.is_empty(),
        }
    }

    /// The string a regular expression pattern is tested against.
    ///
    /// Whole numbers render without a fractional part and selections are
    /// joined with commas.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{}", number),
            Self::Selection(values) => f.write_str(&values.join(",")),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<f64> for FieldValue {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}
