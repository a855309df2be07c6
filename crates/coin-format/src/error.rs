//! Error types for coin-format operations.

use thiserror::Error;

/// Errors that can occur while configuring or running a formatter.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Currency rendering was asked to format NaN or an infinity.
    #[error("Cannot format non-finite value as currency: {0}")]
    NonFinite(f64),

    /// A fractional digit range with `min > max` or an oversized `max`.
    #[error("Invalid fraction digits: min {min}, max {max}")]
    InvalidFractionDigits { min: u8, max: u8 },

    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    #[error("Unknown style: {0}")]
    UnknownStyle(String),

    /// A custom locale definition was not valid JSON for `CurrencyLocale`.
    #[error("Locale parse error: {0}")]
    LocaleParse(#[from] serde_json::Error),
}

/// Convenience alias used throughout coin-format.
pub type Result<T> = std::result::Result<T, FormatError>;
