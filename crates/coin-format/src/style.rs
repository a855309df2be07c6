//! Named output styles, for picking a rendering at runtime.

use std::fmt;
use std::str::FromStr;

use crate::error::FormatError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// Currency, exactly two decimals.
    CurrencyFixed,
    /// Currency, two to six decimals.
    CurrencyVariable,
    Number,
    Percent,
    /// K/M/Bn/Tr abbreviation.
    Abbreviated,
}

impl Style {
    pub const ALL: [Style; 5] = [
        Style::CurrencyFixed,
        Style::CurrencyVariable,
        Style::Number,
        Style::Percent,
        Style::Abbreviated,
    ];

    /// Canonical short name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Style::CurrencyFixed => "currency",
            Style::CurrencyVariable => "currency6",
            Style::Number => "number",
            Style::Percent => "percent",
            Style::Abbreviated => "abbrev",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "currency" | "currency2" | "currency-fixed" => Ok(Style::CurrencyFixed),
            "currency6" | "currency-variable" => Ok(Style::CurrencyVariable),
            "number" | "plain" => Ok(Style::Number),
            "percent" | "pct" => Ok(Style::Percent),
            "abbrev" | "abbreviated" | "short" => Ok(Style::Abbreviated),
            _ => Err(FormatError::UnknownStyle(s.to_string())),
        }
    }
}
