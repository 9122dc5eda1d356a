//! Black-Scholes-Merton price and Greeks by option-type flag.
//!
//! Every function takes the option type as a flag (`"c"`, `"call"`, `"p"` or
//! `"put"`, any case) followed by the six market inputs:
//!
//! | Argument | Meaning |
//! |----------|---------|
//! | `spot` | Underlying price S > 0 |
//! | `strike` | Strike K > 0 |
//! | `ttm` | Time to maturity T > 0, in years |
//! | `vol` | Annualised volatility σ > 0 |
//! | `risk_free` | Continuously compounded risk-free rate r |
//! | `dividend` | Continuous dividend yield q (pass `0.0` for Black-Scholes) |
//!
//! Greeks use the default [`GreeksConvention`]: theta per year, vega and rho
//! per 1% move.
//!
//! # Examples
//! ```
//! use premia_models::black_scholes_merton::{price, price_greeks};
//!
//! let put = price("p", 100.0, 95.0, 0.5, 0.2, 0.1, 0.05).unwrap();
//! assert!((put - 2.4648).abs() < 1e-4);
//!
//! let greeks = price_greeks("c", 60.0, 65.0, 0.25, 0.3, 0.08, 0.0, Some(&["delta", "vega"])).unwrap();
//! assert_eq!(greeks.keys().collect::<Vec<_>>(), ["delta", "vega"]);
//! ```

use premia_core::types::{OptionType, PricingError};

use crate::analytical::OptionSpec;
use crate::greeks::dispatcher::evaluate_quantity;
use crate::greeks::{evaluate, GreekResult, GreeksConvention, Quantity, Selection};

fn option_spec(
    option_type: &str,
    spot: f64,
    strike: f64,
    ttm: f64,
    vol: f64,
    risk_free: f64,
    dividend: f64,
) -> Result<OptionSpec, PricingError> {
    let option_type: OptionType = option_type.parse()?;
    Ok(OptionSpec::new(option_type, spot, strike, ttm, vol, risk_free).with_dividend(dividend))
}

#[allow(clippy::too_many_arguments)]
fn single(
    quantity: Quantity,
    option_type: &str,
    spot: f64,
    strike: f64,
    ttm: f64,
    vol: f64,
    risk_free: f64,
    dividend: f64,
) -> Result<f64, PricingError> {
    let spec = option_spec(option_type, spot, strike, ttm, vol, risk_free, dividend)?;
    evaluate_quantity(&spec, quantity, &GreeksConvention::default())
}

/// Fair value of a European option.
///
/// # Errors
/// - [`PricingError::InvalidOptionType`] for an unrecognised flag
/// - [`PricingError::InvalidInput`] for non-positive ttm, vol, spot or strike,
///   or any non-finite input
pub fn price(
    option_type: &str,
    spot: f64,
    strike: f64,
    ttm: f64,
    vol: f64,
    risk_free: f64,
    dividend: f64,
) -> Result<f64, PricingError> {
    single(Quantity::Price, option_type, spot, strike, ttm, vol, risk_free, dividend)
}

/// Delta: ∂V/∂S.
///
/// # Errors
/// Same as [`price`].
pub fn delta(
    option_type: &str,
    spot: f64,
    strike: f64,
    ttm: f64,
    vol: f64,
    risk_free: f64,
    dividend: f64,
) -> Result<f64, PricingError> {
    single(Quantity::Delta, option_type, spot, strike, ttm, vol, risk_free, dividend)
}

/// Gamma: ∂²V/∂S². Identical for calls and puts.
///
/// # Errors
/// Same as [`price`].
pub fn gamma(
    option_type: &str,
    spot: f64,
    strike: f64,
    ttm: f64,
    vol: f64,
    risk_free: f64,
    dividend: f64,
) -> Result<f64, PricingError> {
    single(Quantity::Gamma, option_type, spot, strike, ttm, vol, risk_free, dividend)
}

/// Theta per year.
///
/// # Errors
/// Same as [`price`].
pub fn theta(
    option_type: &str,
    spot: f64,
    strike: f64,
    ttm: f64,
    vol: f64,
    risk_free: f64,
    dividend: f64,
) -> Result<f64, PricingError> {
    single(Quantity::Theta, option_type, spot, strike, ttm, vol, risk_free, dividend)
}

/// Vega per 1% volatility move.
///
/// # Errors
/// Same as [`price`].
pub fn vega(
    option_type: &str,
    spot: f64,
    strike: f64,
    ttm: f64,
    vol: f64,
    risk_free: f64,
    dividend: f64,
) -> Result<f64, PricingError> {
    single(Quantity::Vega, option_type, spot, strike, ttm, vol, risk_free, dividend)
}

/// Rho per 1% rate move.
///
/// # Errors
/// Same as [`price`].
pub fn rho(
    option_type: &str,
    spot: f64,
    strike: f64,
    ttm: f64,
    vol: f64,
    risk_free: f64,
    dividend: f64,
) -> Result<f64, PricingError> {
    single(Quantity::Rho, option_type, spot, strike, ttm, vol, risk_free, dividend)
}

/// Price and Greeks in one evaluation.
///
/// `which = None` returns all six quantities in the order price, delta,
/// gamma, theta, vega, rho. Otherwise the listed names are returned in
/// request order, each once.
///
/// # Errors
/// - [`PricingError::InvalidOptionType`] for an unrecognised flag
/// - [`PricingError::UnknownQuantity`] for a name outside
///   {price, delta, gamma, theta, vega, rho}
/// - [`PricingError::InvalidInput`] for invalid market inputs
///
/// # Examples
/// ```
/// use premia_models::black_scholes_merton::price_greeks;
///
/// let all = price_greeks("call", 100.0, 120.0, 5.0, 0.3, 0.01, 0.0, None).unwrap();
/// assert_eq!(all.len(), 6);
///
/// assert!(price_greeks("call", 100.0, 120.0, 5.0, 0.3, 0.01, 0.0, Some(&["bogus"])).is_err());
/// ```
#[allow(clippy::too_many_arguments)]
pub fn price_greeks(
    option_type: &str,
    spot: f64,
    strike: f64,
    ttm: f64,
    vol: f64,
    risk_free: f64,
    dividend: f64,
    which: Option<&[&str]>,
) -> Result<GreekResult, PricingError> {
    let spec = option_spec(option_type, spot, strike, ttm, vol, risk_free, dividend)?;
    let selection = match which {
        None => Selection::All,
        Some(names) => Selection::from_names(names)?,
    };
    price_greeks_with(&spec, &selection, &GreeksConvention::default())
}

/// Typed variant of [`price_greeks`] with an explicit convention.
///
/// # Errors
/// [`PricingError::InvalidInput`] for invalid inputs or convention.
pub fn price_greeks_with(
    spec: &OptionSpec,
    selection: &Selection,
    convention: &GreeksConvention,
) -> Result<GreekResult, PricingError> {
    evaluate(spec, selection, convention)
}
