//! Numeric input with optional decimal fixing and currency rendering.

use std::sync::Arc;

use crate::error::{ConfigError, MAX_DECIMALS};
use crate::field::{Field, FieldKind, FieldProps, Transform};
use crate::validation::{FieldValue, ValidationReporter};

/// Decimal places used by currency mode when none are configured.
const CURRENCY_DECIMALS: u32 = 2;

/// Numeric field behaviour.
///
/// Values stay strings so the user can type freely; they are parsed for
/// validation and only rewritten on commit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberKind {
    decimals: Option<u32>,
    currency: Option<String>,
}

impl NumberKind {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix committed values to `decimals` places.
    pub fn decimals(mut self, decimals: u32) -> Result<Self, ConfigError> {
        if decimals > MAX_DECIMALS {
            return Err(ConfigError::InvalidDecimals(decimals));
        }
        self.decimals = Some(decimals);
        Ok(self)
    }

    /// Render committed values as currency with the given prefix.
    pub fn currency(mut self, prefix: impl Into<String>) -> Self {
        self.currency = Some(prefix.into());
        self
    }

    pub fn decimal_places(&self) -> Option<u32> {
        self.decimals
    }

    pub fn currency_prefix(&self) -> Option<&str> {
        self.currency.as_deref()
    }
}

impl FieldKind for NumberKind {
    type Value = String;

    fn normalize(&self, value: &String) -> FieldValue {
        FieldValue::Number(parse_number(value))
    }

    fn settle(&self, value: String) -> String {
        let number = parse_number(&value);
        if number.is_nan() {
            return String::new();
        }
        match (&self.currency, self.decimals) {
            (Some(prefix), decimals) => {
                format_currency(number, prefix, decimals.unwrap_or(CURRENCY_DECIMALS))
            }
            (None, Some(decimals)) => format!("{:.*}", decimals as usize, number),
            (None, None) => value.trim().to_string(),
        }
    }

    fn default_parse(&self) -> Option<Transform<String>> {
        self.currency
            .as_ref()
            .map(|_| Arc::new(|value: &String| numeric_chars(value)) as Transform<String>)
    }
}

/// A numeric text field.
///
/// # Example
///
/// ```ignore
/// let price = NumberInput::new(
///     NumberKind::new().currency("$"),
///     FieldProps::new(String::new()).description("Price").required(true),
///     Some(form.reporter()),
/// );
///
/// price.commit("1234.5");
/// assert_eq!(price.display_value(), "$1,234.50");
///
/// price.focus();
/// assert_eq!(price.display_value(), "1234.50");
/// ```
pub type NumberInput = Field<NumberKind>;

impl Field<NumberKind> {
    /// Mount a numeric input.
    pub fn new(
        kind: NumberKind,
        props: FieldProps<String>,
        reporter: Option<Arc<dyn ValidationReporter>>,
    ) -> Self {
        Self::mount(kind, props, reporter)
    }

    /// Get the parsed value, `NaN` when nothing numeric was entered.
    pub fn number(&self) -> f64 {
        self.with_controller(|c| parse_number(c.value()))
            .unwrap_or(f64::NAN)
    }
}

/// Keep the characters that can form a number: digits, the first `.` and a
/// leading `-`.
fn numeric_chars(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut seen_dot = false;
    for c in input.chars() {
        match c {
            '0'..='9' => out.push(c),
            '.' if !seen_dot => {
                seen_dot = true;
                out.push(c);
            }
            '-' if out.is_empty() => out.push(c),
            _ => {}
        }
    }
    out
}

/// Parse user input after stripping non-numeric characters.
///
/// Input too large for an `f64` is treated like input with no digits.
pub fn parse_number(input: &str) -> f64 {
    numeric_chars(input)
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or(f64::NAN)
}

/// Render `number` as `prefix` plus comma-grouped digits.
pub fn format_currency(number: f64, prefix: &str, decimals: u32) -> String {
    let fixed = format!("{:.*}", decimals as usize, number.abs());
    let (whole, fraction) = match fixed.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if number < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };
    match fraction {
        Some(fraction) => format!("{}{}{}.{}", sign, prefix, grouped, fraction),
        None => format!("{}{}{}", sign, prefix, grouped),
    }
}
