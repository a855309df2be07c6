//! # coin-format
//!
//! Display formatting for cryptocurrency prices and market statistics.
//!
//! Every operation takes a single `f64` and returns an owned `String`. The
//! currency variants are locale aware and go through an injected
//! [`CurrencyFormatter`] strategy; the plain, percent, and abbreviated
//! variants are locale independent.
//!
//! ## Quick start
//!
//! ```rust
//! use coin_format::{format_abbreviated, format_currency_fixed, format_percent};
//!
//! assert_eq!(format_currency_fixed(1234.56), "$1,234.56");
//! assert_eq!(format_percent(1.2345), "1.23%");
//! assert_eq!(format_abbreviated(12_345_678.0), "12.34M");
//! ```
//!
//! ## Modules
//!
//! - [`number`] — plain two-decimal, percent, and K/M/Bn/Tr abbreviation
//! - [`currency`] — `CurrencyFormatter` strategy, default locale formatter, `NumericFormatter`
//! - [`locale`] — `CurrencyLocale` rules and built-in presets
//! - [`style`] — `Style` selector for rendering by name
//! - [`error`] — Error types

pub mod currency;
pub mod error;
pub mod locale;
pub mod number;
pub mod style;

pub use currency::{
    format_currency_fixed, format_currency_variable, CurrencyFormatter, FractionDigits,
    LocaleCurrencyFormatter, NumericFormatter, FALLBACK_CURRENCY,
};
pub use error::FormatError;
pub use locale::{CurrencyLocale, SymbolPosition};
pub use number::{format_abbreviated, format_percent, format_plain_number, Unit};
pub use style::Style;
