//! WASM bindings for coin-format.
//!
//! Exposes the formatters as `#[wasm_bindgen]` functions with camelCase
//! JavaScript names. Everything takes a JS `number` and returns a string.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p coin-format-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/coin_format_wasm.wasm
//! ```

use coin_format::{CurrencyLocale, NumericFormatter};
use wasm_bindgen::prelude::*;

/// `$1,234.56`. Returns `$0.00` for NaN or infinities.
#[wasm_bindgen(js_name = formatCurrencyFixed)]
pub fn format_currency_fixed(value: f64) -> String {
    coin_format::format_currency_fixed(value)
}

/// `$0.123456`: two to six decimals. Returns `$0.00` for NaN or infinities.
#[wasm_bindgen(js_name = formatCurrencyVariable)]
pub fn format_currency_variable(value: f64) -> String {
    coin_format::format_currency_variable(value)
}

#[wasm_bindgen(js_name = formatPlainNumber)]
pub fn format_plain_number(value: f64) -> String {
    coin_format::format_plain_number(value)
}

#[wasm_bindgen(js_name = formatPercent)]
pub fn format_percent(value: f64) -> String {
    coin_format::format_percent(value)
}

/// `1.23K`, `12.34M`, `1.23Bn`, `12.34Tr`.
#[wasm_bindgen(js_name = formatAbbreviated)]
pub fn format_abbreviated(value: f64) -> String {
    coin_format::format_abbreviated(value)
}

/// Currency in a built-in locale. `variable` selects two to six decimals
/// instead of exactly two.
///
/// Throws a JS error if `locale_id` is not a built-in locale.
#[wasm_bindgen(js_name = formatCurrencyForLocale)]
pub fn format_currency_for_locale(
    value: f64,
    locale_id: &str,
    variable: bool,
) -> std::result::Result<String, JsValue> {
    let locale =
        CurrencyLocale::from_id(locale_id).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let formatter = NumericFormatter::for_locale(locale);
    Ok(if variable {
        formatter.currency_variable(value)
    } else {
        formatter.currency_fixed(value)
    })
}

/// Ids accepted by `formatCurrencyForLocale`.
#[wasm_bindgen(js_name = availableLocales)]
pub fn available_locales() -> Vec<String> {
    CurrencyLocale::available()
        .iter()
        .map(|id| id.to_string())
        .collect()
}
