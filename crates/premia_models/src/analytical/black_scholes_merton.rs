//! Black-Scholes-Merton pricing model for European options.
//!
//! This module provides the Black-Scholes-Merton model for pricing European
//! call and put options on an underlying paying a continuous dividend yield.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! The Greeks live in [`super::greeks`] as further methods on the same model.

use premia_core::types::OptionType;

use super::error::AnalyticalError;
use super::params::OptionSpec;
use super::terms::BsmTerms;

/// Black-Scholes-Merton model bound to one option.
///
/// Construction derives the shared [`BsmTerms`] once; `price` and every
/// Greek then read from them without recomputing any transcendental.
///
/// # Examples
/// ```
/// use premia_core::types::OptionType;
/// use premia_models::analytical::{BlackScholesMerton, OptionSpec};
///
/// let call = OptionSpec::new(OptionType::Call, 100.0, 100.0, 1.0, 0.2, 0.05);
/// let put = call.with_option_type(OptionType::Put);
///
/// let call_price = BlackScholesMerton::new(call).unwrap().price();
/// let put_price = BlackScholesMerton::new(put).unwrap().price();
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlackScholesMerton {
    spec: OptionSpec,
    terms: BsmTerms,
}

impl BlackScholesMerton {
    /// Creates the model, deriving d1/d2 and the shared terms.
    ///
    /// # Errors
    /// Returns [`AnalyticalError`] if the spec fails validation
    /// (non-positive ttm, vol, spot or strike, or non-finite input).
    ///
    /// # Examples
    /// ```
    /// use premia_core::types::OptionType;
    /// use premia_models::analytical::{BlackScholesMerton, OptionSpec};
    ///
    /// let spec = OptionSpec::new(OptionType::Call, 100.0, 100.0, 1.0, 0.2, 0.05);
    /// assert!(BlackScholesMerton::new(spec).is_ok());
    ///
    /// // Zero volatility
    /// assert!(BlackScholesMerton::new(OptionSpec { vol: 0.0, ..spec }).is_err());
    /// ```
    pub fn new(spec: OptionSpec) -> Result<Self, AnalyticalError> {
        let terms = BsmTerms::compute(&spec)?;
        Ok(Self { spec, terms })
    }

    /// Returns the option inputs.
    #[inline]
    pub fn spec(&self) -> &OptionSpec {
        &self.spec
    }

    /// Returns the shared terms.
    #[inline]
    pub fn terms(&self) -> &BsmTerms {
        &self.terms
    }

    /// Returns the option type.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.spec.option_type
    }

    /// Computes the option price.
    ///
    /// - Call: S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
    /// - Put: K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
    ///
    /// The result is not floored at zero; pathological inputs (for example
    /// deeply negative rates) return the value of the formula.
    #[inline]
    pub fn price(&self) -> f64 {
        let spec = &self.spec;
        let t = &self.terms;

        let forward_leg = spec.spot * t.dividend_discount * t.cdf_d1;
        let strike_leg = spec.strike * t.rate_discount * t.cdf_d2;

        match spec.option_type {
            OptionType::Call => forward_leg - strike_leg,
            OptionType::Put => strike_leg - forward_leg,
        }
    }
}
