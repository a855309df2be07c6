//! `coinfmt` CLI — format prices, percents, and abbreviated magnitudes.
//!
//! ## Usage
//!
//! ```sh
//! # Fixed two-decimal currency in the environment locale (en_US fallback)
//! coinfmt format 1234.56
//!
//! # Abbreviate several values
//! coinfmt format --style abbrev 1234 12345678 -- -1234
//!
//! # Read values from stdin, German currency, JSON output
//! echo "0.5 1234.5" | coinfmt format --style currency6 --locale de_DE --json
//!
//! # Every style for one value
//! coinfmt all 123456.789
//!
//! # Custom locale from a JSON file
//! coinfmt format --locale-file btc.json 0.00123
//!
//! # List built-in locales
//! coinfmt locales
//! ```

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use coin_format::{CurrencyLocale, NumericFormatter, Style};
use serde_json::{json, Map, Value};
use std::io::{self, Read};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variables consulted for the default locale, highest priority first.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MONETARY", "LANG"];

#[derive(Parser)]
#[command(
    name = "coinfmt",
    version,
    about = "Format prices, percents, and abbreviated magnitudes"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Args)]
struct LocaleArgs {
    /// Locale for currency styles, e.g. en_US or de-DE (defaults to LC_ALL/LC_MONETARY/LANG)
    #[arg(short, long)]
    locale: Option<String>,
    /// JSON file with a custom currency locale
    #[arg(long, conflicts_with = "locale")]
    locale_file: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Format values in one style
    Format {
        /// Values to format (reads whitespace-separated values from stdin if omitted)
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,
        /// Output style: currency, currency6, number, percent, abbrev
        #[arg(short, long, default_value = "currency")]
        style: Style,
        #[command(flatten)]
        locale: LocaleArgs,
        /// Print a JSON array instead of one line per value
        #[arg(long)]
        json: bool,
    },
    /// Format one value in every style
    All {
        #[arg(allow_negative_numbers = true)]
        value: String,
        #[command(flatten)]
        locale: LocaleArgs,
        /// Print a JSON object keyed by style name
        #[arg(long)]
        json: bool,
    },
    /// List built-in locales
    Locales,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Format {
            values,
            style,
            locale,
            json,
        } => {
            let formatter = NumericFormatter::for_locale(resolve_locale(&locale)?);
            let tokens = if values.is_empty() {
                read_stdin_tokens()?
            } else {
                values
            };
            let numbers = tokens
                .iter()
                .map(|t| parse_value(t))
                .collect::<Result<Vec<f64>>>()?;
            debug!(count = numbers.len(), %style, "formatting values");

            if json {
                let rows: Vec<Value> = numbers
                    .iter()
                    .map(|&n| {
                        json!({
                            "input": n,
                            "style": style.name(),
                            "output": formatter.render(n, style),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for n in numbers {
                    println!("{}", formatter.render(n, style));
                }
            }
        }
        Commands::All {
            value,
            locale,
            json,
        } => {
            let formatter = NumericFormatter::for_locale(resolve_locale(&locale)?);
            let n = parse_value(&value)?;

            if json {
                let mut out = Map::new();
                for style in Style::ALL {
                    out.insert(
                        style.name().to_string(),
                        Value::String(formatter.render(n, style)),
                    );
                }
                println!("{}", serde_json::to_string_pretty(&Value::Object(out))?);
            } else {
                for style in Style::ALL {
                    println!("{:<10} {}", format!("{}:", style), formatter.render(n, style));
                }
            }
        }
        Commands::Locales => {
            for id in CurrencyLocale::available() {
                let locale = CurrencyLocale::from_id(id)?;
                println!("{}\t{}\t{}", locale.id, locale.currency_code, locale.symbol);
            }
        }
    }

    Ok(())
}

/// Install a stderr subscriber. `-v` forces debug; otherwise `RUST_LOG`
/// applies, defaulting to warnings only.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Pick the currency locale: `--locale-file`, then `--locale`, then the
/// environment, then `en_US`.
fn resolve_locale(args: &LocaleArgs) -> Result<CurrencyLocale> {
    if let Some(path) = args.locale_file.as_deref() {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read locale file: {}", path))?;
        return CurrencyLocale::from_json(&json)
            .with_context(|| format!("Invalid locale file: {}", path));
    }

    if let Some(id) = args.locale.as_deref() {
        return CurrencyLocale::from_id(id).with_context(|| {
            format!(
                "Available locales: {}",
                CurrencyLocale::available().join(", ")
            )
        });
    }

    Ok(env_locale())
}

/// First non-empty locale variable wins. A value that is not built in
/// (`C`, `POSIX`, an unsupported region) falls back to `en_US`.
fn env_locale() -> CurrencyLocale {
    for var in LOCALE_VARS {
        let Ok(value) = std::env::var(var) else {
            continue;
        };
        if value.is_empty() {
            continue;
        }
        return match CurrencyLocale::from_id(&value) {
            Ok(locale) => {
                debug!(var, locale = %locale.id, "using environment locale");
                locale
            }
            Err(err) => {
                debug!(var, value = %value, error = %err, "falling back to en_US");
                CurrencyLocale::default()
            }
        };
    }
    CurrencyLocale::default()
}

fn parse_value(token: &str) -> Result<f64> {
    token
        .trim()
        .parse::<f64>()
        .with_context(|| format!("Invalid number: '{}'", token))
}

fn read_stdin_tokens() -> Result<Vec<String>> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read from stdin")?;
    Ok(buf.split_whitespace().map(str::to_string).collect())
}
