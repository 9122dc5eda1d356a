//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Input errors detected before any BSM formula runs

use premia_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// Every variant describes an input for which d1/d2 are undefined. They all
/// surface to callers as [`PricingError::InvalidInput`].
///
/// # Examples
/// ```
/// use premia_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Non-positive spot price.
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Non-positive strike price.
    #[error("Invalid strike price: K = {strike}")]
    InvalidStrike {
        /// The invalid strike price value
        strike: f64,
    },

    /// Non-positive time to maturity.
    #[error("Invalid time to maturity: T = {expiry}")]
    InvalidExpiry {
        /// The invalid time to maturity in years
        expiry: f64,
    },

    /// Non-positive volatility.
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// NaN or infinite input.
    #[error("Non-finite input: {name} = {value}")]
    NonFiniteInput {
        /// Name of the offending parameter
        name: &'static str,
        /// The non-finite value
        value: f64,
    },

    /// Valid inputs whose d1/d2 terms underflow, overflow or become NaN.
    #[error("Degenerate BSM term: {name} = {value}")]
    DegenerateTerm {
        /// Name of the offending term
        name: &'static str,
        /// The degenerate value
        value: f64,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
