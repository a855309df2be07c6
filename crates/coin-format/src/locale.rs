//! Currency locale rules and built-in presets.
//!
//! A [`CurrencyLocale`] carries exactly what [`LocaleCurrencyFormatter`]
//! needs: symbol placement, grouping, and decimal separator. Locales can be
//! picked by id from the built-in table or loaded from JSON, where any
//! omitted field takes its `en_US` value.
//!
//! ```
//! use coin_format::CurrencyLocale;
//! let de = CurrencyLocale::from_id("de-DE").unwrap();
//! assert_eq!(de.symbol, "€");
//!
//! let custom = CurrencyLocale::from_json(r#"{"id":"btc","symbol":"₿","currency_code":"BTC"}"#).unwrap();
//! assert_eq!(custom.grouping_separator, ",");
//! ```
//!
//! [`LocaleCurrencyFormatter`]: crate::currency::LocaleCurrencyFormatter

use crate::error::{FormatError, Result};
use serde::{Deserialize, Serialize};

/// Which side of the amount the currency symbol sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    Prefix,
    Suffix,
}

/// Locale rules for rendering a currency amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyLocale {
    /// Locale identifier, e.g. `en_US`.
    pub id: String,
    /// ISO 4217 code, e.g. `USD`.
    pub currency_code: String,
    pub symbol: String,
    pub symbol_position: SymbolPosition,
    /// Put a space between the symbol and the amount.
    pub symbol_spacing: bool,
    pub grouping_separator: String,
    pub decimal_separator: String,
    pub use_grouping: bool,
    /// Digits per group in the integer part.
    pub grouping_size: usize,
}

/// Ids accepted by [`CurrencyLocale::from_id`].
const BUILT_IN: [&str; 7] = ["en_US", "en_GB", "de_DE", "fr_FR", "ja_JP", "en_IN", "pt_BR"];

impl Default for CurrencyLocale {
    fn default() -> Self {
        Self::en_us()
    }
}

impl CurrencyLocale {
    fn prefixed(id: &str, code: &str, symbol: &str, spacing: bool) -> Self {
        Self {
            id: id.to_string(),
            currency_code: code.to_string(),
            symbol: symbol.to_string(),
            symbol_position: SymbolPosition::Prefix,
            symbol_spacing: spacing,
            grouping_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
            use_grouping: true,
            grouping_size: 3,
        }
    }

    fn suffixed(id: &str, code: &str, symbol: &str, grouping: &str, decimal: &str) -> Self {
        Self {
            id: id.to_string(),
            currency_code: code.to_string(),
            symbol: symbol.to_string(),
            symbol_position: SymbolPosition::Suffix,
            symbol_spacing: true,
            grouping_separator: grouping.to_string(),
            decimal_separator: decimal.to_string(),
            use_grouping: true,
            grouping_size: 3,
        }
    }

    /// US dollars: `$1,234.56`.
    pub fn en_us() -> Self {
        Self::prefixed("en_US", "USD", "$", false)
    }

    /// Pounds sterling: `£1,234.56`.
    pub fn en_gb() -> Self {
        Self::prefixed("en_GB", "GBP", "£", false)
    }

    /// Euros, German conventions: `1.234,56 €`.
    pub fn de_de() -> Self {
        Self::suffixed("de_DE", "EUR", "€", ".", ",")
    }

    /// Euros, French conventions: `1 234,56 €` with a narrow no-break space.
    pub fn fr_fr() -> Self {
        Self::suffixed("fr_FR", "EUR", "€", "\u{202f}", ",")
    }

    /// Yen: `¥1,234.56`.
    pub fn ja_jp() -> Self {
        Self::prefixed("ja_JP", "JPY", "¥", false)
    }

    // TODO: en_IN groups lakh/crore (2-digit groups above the first 3); grouping_size only models uniform groups.
    /// Indian rupees: `₹1,234.56`.
    pub fn en_in() -> Self {
        Self::prefixed("en_IN", "INR", "₹", false)
    }

    /// Brazilian reais: `R$ 1.234,56`.
    pub fn pt_br() -> Self {
        Self {
            grouping_separator: ".".to_string(),
            decimal_separator: ",".to_string(),
            ..Self::prefixed("pt_BR", "BRL", "R$", true)
        }
    }

    /// Ids of all built-in locales.
    pub fn available() -> &'static [&'static str] {
        &BUILT_IN
    }

    /// Look up a built-in locale.
    ///
    /// Matching ignores case, accepts `-` for `_`, and drops any
    /// `.encoding` or `@modifier` tail, so `en_US.UTF-8` and `de-de@euro`
    /// both resolve.
    pub fn from_id(id: &str) -> Result<Self> {
        let base = id
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .replace('-', "_");

        let locale = match base.to_ascii_lowercase().as_str() {
            "en_us" => Self::en_us(),
            "en_gb" => Self::en_gb(),
            "de_de" => Self::de_de(),
            "fr_fr" => Self::fr_fr(),
            "ja_jp" => Self::ja_jp(),
            "en_in" => Self::en_in(),
            "pt_br" => Self::pt_br(),
            _ => return Err(FormatError::UnknownLocale(id.to_string())),
        };
        Ok(locale)
    }

    /// Parse a locale definition from JSON. Missing fields default to `en_US`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
