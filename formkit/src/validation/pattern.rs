//! Secondary validity gates applied to non-empty values.

use std::fmt;
use std::sync::Arc;

use email_address::EmailAddress;
use regex::Regex;

use super::FieldValue;
use crate::error::ConfigError;

/// Predicate closure used by [`Pattern::Predicate`].
pub type Predicate = Arc<dyn Fn(&FieldValue) -> bool + Send + Sync>;

/// A pattern a non-empty value must satisfy.
///
/// Regular expressions are tested against the stringified value (an
/// unanchored search, so anchor the expression to match the whole value).
/// Predicates receive the normalised value.
#[derive(Clone)]
pub enum Pattern {
    Regex(Regex),
    Predicate(Predicate),
}

impl Pattern {
    /// Compile a regular expression pattern.
    pub fn regex(pattern: &str) -> Result<Self, ConfigError> {
        Regex::new(pattern)
            .map(Self::Regex)
            .map_err(|source| ConfigError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })
    }

    /// Wrap a predicate closure.
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&FieldValue) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(f))
    }

    /// Accept syntactically valid email addresses.
    pub fn email() -> Self {
        Self::predicate(|value| EmailAddress::is_valid(&value.to_text()))
    }

    /// Accept values with at least `min` characters.
    pub fn min_length(min: usize) -> Self {
        Self::predicate(move |value| value.to_text().chars().count() >= min)
    }

    /// Accept values with at most `max` characters.
    pub fn max_length(max: usize) -> Self {
        Self::predicate(move |value| value.to_text().chars().count() <= max)
    }

    /// Test a value against this pattern.
    pub fn test(&self, value: &FieldValue) -> bool {
        match self {
            Self::Regex(re) => re.is_match(&value.to_text()),
            Self::Predicate(f) => f(value),
        }
    }
}

impl From<Regex> for Pattern {
    fn from(re: Regex) -> Self {
        Self::Regex(re)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Regex(re) => f.debug_tuple("Regex").field(&re.as_str()).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}
