//! Configuration errors raised while building fields.

use thiserror::Error;

/// Largest number of decimal places a numeric field may fix on commit.
pub const MAX_DECIMALS: u32 = 15;

/// A field was configured in a way that can never validate correctly.
///
/// These are reported when a pattern, option list or numeric mode is built,
/// never while a value is being validated.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("option value `{0}` appears more than once")]
    DuplicateOption(String),
    #[error("{0} decimal places requested, at most {MAX_DECIMALS} are supported")]
    InvalidDecimals(u32),
}
