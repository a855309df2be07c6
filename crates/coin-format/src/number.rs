//! Locale-independent number rendering: plain, percent, and abbreviated.
//!
//! All three build on a single fixed-point rule: two fractional digits, no
//! grouping separators, a leading `-` for negative values.
//!
//! # Example
//! ```
//! use coin_format::number::{format_abbreviated, format_plain_number};
//! assert_eq!(format_plain_number(1.2345), "1.23");
//! assert_eq!(format_abbreviated(123_456.0), "123.45K");
//! assert_eq!(format_abbreviated(-1234.0), "-1.23K");
//! ```

/// Magnitude tier used by [`format_abbreviated`].
///
/// Variants are declared smallest first so the derived `Ord` follows
/// magnitude: `One < Thousand < ... < Trillion`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    One,
    Thousand,
    Million,
    Billion,
    Trillion,
}

impl Unit {
    /// Scaled tiers, highest threshold first.
    const SCALED: [Unit; 4] = [Unit::Trillion, Unit::Billion, Unit::Million, Unit::Thousand];

    /// Pick the largest tier whose lower bound (equal to its divisor) is
    /// `<= magnitude`. Anything below one thousand, including NaN, is `One`.
    pub fn for_magnitude(magnitude: f64) -> Unit {
        Self::SCALED
            .into_iter()
            .find(|unit| magnitude >= unit.divisor())
            .unwrap_or(Unit::One)
    }

    pub fn divisor(self) -> f64 {
        match self {
            Unit::One => 1.0,
            Unit::Thousand => 1_000.0,
            Unit::Million => 1_000_000.0,
            Unit::Billion => 1_000_000_000.0,
            Unit::Trillion => 1_000_000_000_000.0,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Unit::One => "",
            Unit::Thousand => "K",
            Unit::Million => "M",
            Unit::Billion => "Bn",
            Unit::Trillion => "Tr",
        }
    }
}

/// Format as fixed-point with exactly two fractional digits.
///
/// Negative values keep their `-` even when they round to zero
/// (`-0.001` → `"-0.00"`). Non-finite values render as `NaN`, `inf`, `-inf`.
pub fn format_plain_number(value: f64) -> String {
    format!("{:.2}", value)
}

/// [`format_plain_number`] followed by `%`. The value is not scaled:
/// `1.23` → `"1.23%"`.
pub fn format_percent(value: f64) -> String {
    let mut out = format_plain_number(value);
    out.push('%');
    out
}

/// Shorten a magnitude with a `K`/`M`/`Bn`/`Tr` suffix.
///
/// The tier is chosen from `|value|`. Below one thousand the result is
/// exactly [`format_plain_number`]. In the scaled tiers the scaled magnitude
/// keeps two decimals truncated toward zero, so `123_456` becomes
/// `"123.45K"` rather than `"123.46K"`, and the sign is re-applied as a
/// leading `-`.
///
/// Non-finite input is rendered like [`format_plain_number`], with no suffix.
pub fn format_abbreviated(value: f64) -> String {
    if !value.is_finite() {
        return format_plain_number(value);
    }

    let magnitude = value.abs();
    let unit = Unit::for_magnitude(magnitude);
    if unit == Unit::One {
        return format_plain_number(value);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let scaled = truncate_to_cents(magnitude / unit.divisor());
    format!("{}{}{}", sign, scaled, unit.suffix())
}

/// Render a non-negative finite value with two decimals, dropping (not
/// rounding) everything after the second.
///
/// Works on the shortest round-trip rendering, which never uses an exponent,
/// so `1230.0 / 1000.0` reads as `1.23` and `999.9999999999` stays below
/// `1000`.
fn truncate_to_cents(value: f64) -> String {
    let rendered = value.to_string();
    let (int_part, frac_part) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
    let kept = &frac_part[..frac_part.len().min(2)];
    format!("{}.{:0<2}", int_part, kept)
}
