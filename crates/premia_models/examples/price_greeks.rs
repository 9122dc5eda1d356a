//! Prices a five-year out-of-the-money call and prints its Greeks.
//!
//! ```bash
//! cargo run -p premia_models --example price_greeks
//! RUST_LOG=premia_models=trace cargo run -p premia_models --example price_greeks
//! ```
//!
//! An optional TOML file can override the reporting convention:
//!
//! ```bash
//! cargo run -p premia_models --example price_greeks -- convention.toml
//! ```

use premia_core::types::OptionType;
use premia_models::analytical::OptionSpec;
use premia_models::black_scholes_merton::{price, price_greeks_with};
use premia_models::greeks::{GreeksConvention, Selection};
use tracing_subscriber::prelude::*;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn load_convention() -> Result<GreeksConvention, Box<dyn std::error::Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            let content = std::fs::read_to_string(&path)?;
            let convention = GreeksConvention::from_toml_str(&content)?;
            tracing::info!(path = %path, ?convention, "Loaded Greeks convention");
            Ok(convention)
        }
        None => Ok(GreeksConvention::default()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let convention = load_convention()?;

    let (spot, strike, ttm, vol, risk_free, dividend) = (100.0, 120.0, 5.0, 0.30, 0.01, 0.0);

    // just price
    println!("{}", price("c", spot, strike, ttm, vol, risk_free, dividend)?);

    let spec =
        OptionSpec::new(OptionType::Call, spot, strike, ttm, vol, risk_free).with_dividend(dividend);
    let greeks = price_greeks_with(&spec, &Selection::All, &convention)?;
    println!("{}", greeks);

    println!("{}", serde_json::to_string_pretty(&greeks)?);
    Ok(())
}
