//! Locale-aware currency rendering behind an injectable strategy.
//!
//! [`CurrencyFormatter`] is the seam: anything that can turn a value and a
//! fractional digit range into a currency string. [`LocaleCurrencyFormatter`]
//! is the built-in implementation driven by a [`CurrencyLocale`].
//!
//! Failures never reach callers of [`format_currency_fixed`],
//! [`format_currency_variable`], or [`NumericFormatter`]: they are logged and
//! replaced with [`FALLBACK_CURRENCY`].
//!
//! # Example
//! ```
//! use coin_format::{CurrencyLocale, NumericFormatter};
//!
//! let us = NumericFormatter::new();
//! assert_eq!(us.currency_variable(12.3456), "$12.3456");
//!
//! let de = NumericFormatter::for_locale(CurrencyLocale::de_de());
//! assert_eq!(de.currency_fixed(1234.56), "1.234,56 €");
//! ```

use std::sync::LazyLock;

use crate::error::{FormatError, Result};
use crate::locale::{CurrencyLocale, SymbolPosition};
use crate::number::{format_abbreviated, format_percent, format_plain_number};
use crate::style::Style;

/// Returned in place of a currency string when the strategy fails.
pub const FALLBACK_CURRENCY: &str = "$0.00";

static DEFAULT_FORMATTER: LazyLock<LocaleCurrencyFormatter> =
    LazyLock::new(LocaleCurrencyFormatter::default);

/// Inclusive range of fractional digits a currency amount may show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FractionDigits {
    min: u8,
    max: u8,
}

impl FractionDigits {
    /// Exactly two decimals.
    pub const FIXED: Self = Self { min: 2, max: 2 };
    /// Two to six decimals, trailing zeros past the second dropped.
    pub const VARIABLE: Self = Self { min: 2, max: 6 };
    /// Largest accepted `max`.
    pub const LIMIT: u8 = 15;

    pub fn new(min: u8, max: u8) -> Result<Self> {
        if min > max || max > Self::LIMIT {
            return Err(FormatError::InvalidFractionDigits { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(self) -> u8 {
        self.min
    }

    pub fn max(self) -> u8 {
        self.max
    }
}

/// Strategy for rendering a value as a currency string.
pub trait CurrencyFormatter: Send + Sync {
    fn format(&self, value: f64, digits: FractionDigits) -> Result<String>;
}

/// [`CurrencyFormatter`] driven by a [`CurrencyLocale`].
///
/// Rounds to `digits.max()` places (exact binary ties go to even), trims
/// trailing zeros down to `digits.min()`, groups the integer part, and
/// places the symbol. A leading `-` marks negative amounts unless the
/// rounded amount is zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleCurrencyFormatter {
    locale: CurrencyLocale,
}

impl LocaleCurrencyFormatter {
    pub fn new(locale: CurrencyLocale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> &CurrencyLocale {
        &self.locale
    }

    /// Insert the grouping separator every `grouping_size` digits, counting
    /// from the right.
    fn group_integer(&self, digits: &str) -> String {
        let size = self.locale.grouping_size;
        if !self.locale.use_grouping || size == 0 || digits.len() <= size {
            return digits.to_string();
        }

        let separator = self.locale.grouping_separator.as_str();
        let mut out =
            String::with_capacity(digits.len() + (digits.len() / size) * separator.len());
        let first = match digits.len() % size {
            0 => size,
            rem => rem,
        };
        out.push_str(&digits[..first]);
        let mut idx = first;
        while idx < digits.len() {
            out.push_str(separator);
            out.push_str(&digits[idx..idx + size]);
            idx += size;
        }
        out
    }
}

impl CurrencyFormatter for LocaleCurrencyFormatter {
    fn format(&self, value: f64, digits: FractionDigits) -> Result<String> {
        if !value.is_finite() {
            return Err(FormatError::NonFinite(value));
        }

        // Digits-only rendering: `abs` is finite, so there is no sign or exponent.
        let rounded = format!("{:.*}", digits.max() as usize, value.abs());
        let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
        let keep = frac_part
            .trim_end_matches('0')
            .len()
            .max(digits.min() as usize);
        let fraction = &frac_part[..keep];
        let is_zero = rounded.bytes().all(|b| b == b'0' || b == b'.');

        let mut amount = self.group_integer(int_part);
        if !fraction.is_empty() {
            amount.push_str(&self.locale.decimal_separator);
            amount.push_str(fraction);
        }

        let spacer = if self.locale.symbol_spacing { " " } else { "" };
        let symbol = &self.locale.symbol;
        let body = match self.locale.symbol_position {
            SymbolPosition::Prefix => format!("{}{}{}", symbol, spacer, amount),
            SymbolPosition::Suffix => format!("{}{}{}", amount, spacer, symbol),
        };

        if value < 0.0 && !is_zero {
            Ok(format!("-{}", body))
        } else {
            Ok(body)
        }
    }
}

/// Run the strategy, falling back to [`FALLBACK_CURRENCY`] on error.
fn currency_or_fallback<C: CurrencyFormatter + ?Sized>(
    currency: &C,
    value: f64,
    digits: FractionDigits,
) -> String {
    match currency.format(value, digits) {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(value, error = %err, "currency formatting failed, using fallback");
            FALLBACK_CURRENCY.to_string()
        }
    }
}

/// Currency with exactly two decimals in `en_US`: `1234.56` → `"$1,234.56"`.
pub fn format_currency_fixed(value: f64) -> String {
    currency_or_fallback(&*DEFAULT_FORMATTER, value, FractionDigits::FIXED)
}

/// Currency with two to six decimals in `en_US`: `0.123456` → `"$0.123456"`,
/// `1234.5` → `"$1,234.50"`.
pub fn format_currency_variable(value: f64) -> String {
    currency_or_fallback(&*DEFAULT_FORMATTER, value, FractionDigits::VARIABLE)
}

/// All five renderings behind one value, with the currency strategy injected.
#[derive(Debug, Clone, Default)]
pub struct NumericFormatter<C = LocaleCurrencyFormatter> {
    currency: C,
}

impl NumericFormatter {
    /// Formatter using the `en_US` locale.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_locale(locale: CurrencyLocale) -> Self {
        Self::with_currency(LocaleCurrencyFormatter::new(locale))
    }
}

impl<C: CurrencyFormatter> NumericFormatter<C> {
    pub fn with_currency(currency: C) -> Self {
        Self { currency }
    }

    pub fn currency(&self) -> &C {
        &self.currency
    }

    pub fn currency_fixed(&self, value: f64) -> String {
        currency_or_fallback(&self.currency, value, FractionDigits::FIXED)
    }

    pub fn currency_variable(&self, value: f64) -> String {
        currency_or_fallback(&self.currency, value, FractionDigits::VARIABLE)
    }

    pub fn plain_number(&self, value: f64) -> String {
        format_plain_number(value)
    }

    pub fn percent(&self, value: f64) -> String {
        format_percent(value)
    }

    pub fn abbreviated(&self, value: f64) -> String {
        format_abbreviated(value)
    }

    /// Render `value` in the given style.
    pub fn render(&self, value: f64, style: Style) -> String {
        match style {
            Style::CurrencyFixed => self.currency_fixed(value),
            Style::CurrencyVariable => self.currency_variable(value),
            Style::Number => self.plain_number(value),
            Style::Percent => self.percent(value),
            Style::Abbreviated => self.abbreviated(value),
        }
    }
}
