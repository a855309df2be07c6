//! Tests for the currency strategy, fallback handling, and NumericFormatter.

use coin_format::error::Result;
use coin_format::{
    format_currency_fixed, format_currency_variable, CurrencyFormatter, CurrencyLocale,
    FormatError, FractionDigits, LocaleCurrencyFormatter, NumericFormatter, Style,
    FALLBACK_CURRENCY,
};

/// Strategy that fails every call, to exercise the fallback path.
struct Broken;

impl CurrencyFormatter for Broken {
    fn format(&self, value: f64, _digits: FractionDigits) -> Result<String> {
        Err(FormatError::NonFinite(value))
    }
}

/// Strategy that tags its output, to prove injection reaches every call site.
struct Tagged;

impl CurrencyFormatter for Tagged {
    fn format(&self, value: f64, digits: FractionDigits) -> Result<String> {
        Ok(format!("<{}:{}-{}>", value, digits.min(), digits.max()))
    }
}

fn us() -> LocaleCurrencyFormatter {
    LocaleCurrencyFormatter::default()
}

// ---------------------------------------------------------------------------
// FractionDigits
// ---------------------------------------------------------------------------

#[test]
fn fraction_digit_presets() {
    assert_eq!(
        (FractionDigits::FIXED.min(), FractionDigits::FIXED.max()),
        (2, 2)
    );
    assert_eq!(
        (FractionDigits::VARIABLE.min(), FractionDigits::VARIABLE.max()),
        (2, 6)
    );
}

#[test]
fn fraction_digits_rejects_inverted_range() {
    let err = FractionDigits::new(3, 2).unwrap_err();
    assert!(matches!(
        err,
        FormatError::InvalidFractionDigits { min: 3, max: 2 }
    ));
}

#[test]
fn fraction_digits_rejects_oversized_max() {
    assert!(FractionDigits::new(2, 16).is_err());
    assert!(FractionDigits::new(0, 15).is_ok());
}

// ---------------------------------------------------------------------------
// LocaleCurrencyFormatter (en_US)
// ---------------------------------------------------------------------------

#[test]
fn fixed_groups_thousands() {
    assert_eq!(format_currency_fixed(1_000_000.0), "$1,000,000.00");
    assert_eq!(format_currency_fixed(999.0), "$999.00");
    assert_eq!(format_currency_fixed(100_000.0), "$100,000.00");
}

#[test]
fn fixed_rounds_to_cents() {
    assert_eq!(format_currency_fixed(0.126), "$0.13");
    assert_eq!(format_currency_fixed(19.994), "$19.99");
}

#[test]
fn fixed_exact_ties_go_to_even() {
    assert_eq!(format_currency_fixed(0.125), "$0.12");
    assert_eq!(format_currency_fixed(0.375), "$0.38");
    assert_eq!(format_currency_fixed(-2.5 / 8.0), "-$0.31");
}

#[test]
fn variable_keeps_at_least_two_decimals() {
    assert_eq!(format_currency_variable(1_234.5), "$1,234.50");
    assert_eq!(format_currency_variable(7.0), "$7.00");
}

#[test]
fn variable_caps_at_six_decimals() {
    assert_eq!(format_currency_variable(0.1234567), "$0.123457");
    assert_eq!(format_currency_variable(0.000_001_4), "$0.000001");
}

#[test]
fn negative_amounts_lead_with_minus() {
    assert_eq!(format_currency_fixed(-1_234.56), "-$1,234.56");
    assert_eq!(format_currency_variable(-0.5), "-$0.50");
}

#[test]
fn negative_amount_rounding_to_zero_has_no_sign() {
    assert_eq!(format_currency_fixed(-0.001), "$0.00");
    assert_eq!(format_currency_fixed(-0.0), "$0.00");
}

#[test]
fn strategy_rejects_non_finite() {
    let err = us().format(f64::NAN, FractionDigits::FIXED).unwrap_err();
    assert!(matches!(err, FormatError::NonFinite(_)));
    assert!(us()
        .format(f64::INFINITY, FractionDigits::VARIABLE)
        .is_err());
}

#[test]
fn free_functions_fall_back_on_non_finite() {
    assert_eq!(format_currency_fixed(f64::NAN), FALLBACK_CURRENCY);
    assert_eq!(format_currency_variable(f64::NEG_INFINITY), "$0.00");
}

#[test]
fn zero_fraction_digits_omit_decimal_separator() {
    let digits = FractionDigits::new(0, 0).unwrap();
    assert_eq!(us().format(1_234.6, digits).unwrap(), "$1,235");
}

#[test]
fn grouping_can_be_disabled() {
    let locale = CurrencyLocale {
        use_grouping: false,
        ..CurrencyLocale::en_us()
    };
    let formatter = LocaleCurrencyFormatter::new(locale);
    assert_eq!(
        formatter.format(1_234_567.0, FractionDigits::FIXED).unwrap(),
        "$1234567.00"
    );
}

// ---------------------------------------------------------------------------
// Other locales
// ---------------------------------------------------------------------------

#[test]
fn german_suffix_symbol_and_separators() {
    let de = NumericFormatter::for_locale(CurrencyLocale::de_de());
    assert_eq!(de.currency_fixed(1_234.56), "1.234,56 €");
    assert_eq!(de.currency_fixed(-1_234.56), "-1.234,56 €");
    assert_eq!(de.currency_variable(0.123456), "0,123456 €");
}

#[test]
fn french_narrow_space_grouping() {
    let fr = NumericFormatter::for_locale(CurrencyLocale::fr_fr());
    assert_eq!(
        fr.currency_fixed(1_234_567.5),
        "1\u{202f}234\u{202f}567,50 €"
    );
}

#[test]
fn brazilian_spaced_prefix() {
    let br = NumericFormatter::for_locale(CurrencyLocale::pt_br());
    assert_eq!(br.currency_fixed(1_234.56), "R$ 1.234,56");
}

#[test]
fn british_pounds() {
    let gb = NumericFormatter::for_locale(CurrencyLocale::en_gb());
    assert_eq!(gb.currency_fixed(42.0), "£42.00");
}

// ---------------------------------------------------------------------------
// NumericFormatter
// ---------------------------------------------------------------------------

#[test]
fn default_formatter_matches_free_functions() {
    let f = NumericFormatter::new();
    for value in [0.0, 1.5, -42.25, 1_234.56, 0.000_123] {
        assert_eq!(f.currency_fixed(value), format_currency_fixed(value));
        assert_eq!(f.currency_variable(value), format_currency_variable(value));
    }
}

#[test]
fn injected_strategy_receives_digit_ranges() {
    let f = NumericFormatter::with_currency(Tagged);
    assert_eq!(f.currency_fixed(1.5), "<1.5:2-2>");
    assert_eq!(f.currency_variable(1.5), "<1.5:2-6>");
}

#[test]
fn broken_strategy_falls_back_only_for_currency() {
    let f = NumericFormatter::with_currency(Broken);
    assert_eq!(f.currency_fixed(1_234.56), "$0.00");
    assert_eq!(f.currency_variable(1_234.56), "$0.00");
    assert_eq!(f.plain_number(1_234.56), "1234.56");
    assert_eq!(f.percent(1_234.56), "1234.56%");
    assert_eq!(f.abbreviated(1_234.56), "1.23K");
}

#[test]
fn render_dispatches_every_style() {
    let f = NumericFormatter::new();
    let rendered: Vec<String> = Style::ALL
        .iter()
        .map(|&style| f.render(1_234.5, style))
        .collect();
    assert_eq!(
        rendered,
        vec!["$1,234.50", "$1,234.50", "1234.50", "1234.50%", "1.23K"]
    );
}

#[test]
fn formatter_is_shareable_across_threads() {
    let f = std::sync::Arc::new(NumericFormatter::new());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let f = std::sync::Arc::clone(&f);
            std::thread::spawn(move || f.currency_fixed(1_000.0 * f64::from(i)))
        })
        .collect();
    let out: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(out, vec!["$0.00", "$1,000.00", "$2,000.00", "$3,000.00"]);
}
