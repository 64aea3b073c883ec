//! # Shop CLI Library
//!
//! Command-line front end for shop-core. Builds a cart from `NAME=PRICE`
//! arguments and prints what each calculator charges for it.
//!
//! ## Module Organization
//! ```text
//! shop_cli/
//! ├── lib.rs      ◄─── You are here (startup & run)
//! ├── cli.rs      ◄─── clap argument definitions
//! ├── config.rs   ◄─── Env-backed configuration
//! ├── output.rs   ◄─── Text / JSON rendering
//! └── error.rs    ◄─── CLI error type
//! ```
//!
//! ## Run Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Load Configuration ──── SHOP_* env vars, then CLI flags on top      │
//! │  2. Initialize Logging ──── tracing-subscriber to stderr, RUST_LOG wins │
//! │  3. Build Cart ──────────── parse_product_spec for every argument       │
//! │  4. Price ───────────────── one calculator, or all with --all           │
//! │  5. Print ───────────────── text or JSON to stdout                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod output;

use std::env;
use std::process::ExitCode;

use shop_core::validation::parse_product_spec;
use shop_core::{CalculatorKind, Cart, CartSummary, CoreResult};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::{ShopConfig, DEFAULT_LOG_FILTER};
use error::CliResult;

/// Runs the `shop` command and maps the outcome to an exit code.
pub fn run(cli: Cli) -> ExitCode {
    let result = configure(&cli, |key| env::var(key).ok()).and_then(|config| {
        init_tracing(&config.log_filter);
        debug!(?config, "configuration loaded");
        execute(&cli, &config)
    });

    match result {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            // No-op unless configuration failed before logging was set up
            init_tracing(DEFAULT_LOG_FILTER);
            error!(error = %err, "shop failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Loads configuration through `lookup` (an env var reader) and applies
/// the command-line overrides on top.
pub fn configure<F>(cli: &Cli, lookup: F) -> CliResult<ShopConfig>
where
    F: Fn(&str) -> Option<String>,
{
    Ok(ShopConfig::from_lookup(lookup)?.with_cli(cli))
}

/// Builds the cart, prices it and renders the result.
pub fn execute(cli: &Cli, config: &ShopConfig) -> CliResult<String> {
    let cart = build_cart(&cli.items)?;

    let kinds: Vec<CalculatorKind> = if cli.all {
        CalculatorKind::ALL.to_vec()
    } else {
        vec![config.calculator]
    };

    let summaries: Vec<CartSummary> = kinds.iter().map(|kind| kind.summarize(&cart)).collect();
    for summary in &summaries {
        info!(
            calculator = %summary.calculator,
            item_count = summary.item_count,
            total_cents = summary.total.cents(),
            "cart priced"
        );
    }

    output::render(&summaries, config.output)
}

/// Parses every `NAME=PRICE` spec into one cart, stopping at the first bad one.
pub fn build_cart<S: AsRef<str>>(specs: &[S]) -> CoreResult<Cart> {
    specs
        .iter()
        .map(|spec| parse_product_spec(spec.as_ref()))
        .collect()
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages, including every calculator run
/// - `RUST_LOG=shop_core=trace` - Also trace each product added to a cart
/// - Default: `default_filter` (from `SHOP_LOG`)
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
