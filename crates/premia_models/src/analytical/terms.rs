//! Shared Black-Scholes-Merton terms.
//!
//! d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! d₂ = d₁ - σ√T
//!
//! Every price and Greek formula is assembled from the quantities cached
//! here, so one evaluation pays for each `ln`, `sqrt`, `exp`, Φ and φ once.

use premia_core::math::distributions::{norm_cdf, norm_pdf};

use super::error::AnalyticalError;
use super::params::OptionSpec;

/// Derived terms for one [`OptionSpec`].
///
/// `cdf_d1` and `cdf_d2` are signed by the option type: Φ(d₁), Φ(d₂) for a
/// call and Φ(-d₁), Φ(-d₂) for a put. Evaluating the put side directly
/// (instead of `1 - Φ`) keeps precision for deep out-of-the-money puts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BsmTerms {
    /// d₁
    pub d1: f64,
    /// d₂
    pub d2: f64,
    /// √T
    pub sqrt_t: f64,
    /// Dividend discount factor e^(-qT)
    pub dividend_discount: f64,
    /// Rate discount factor e^(-rT)
    pub rate_discount: f64,
    /// φ(d₁)
    pub pdf_d1: f64,
    /// Φ(ω·d₁)
    pub cdf_d1: f64,
    /// Φ(ω·d₂)
    pub cdf_d2: f64,
}

impl BsmTerms {
    /// Derives the shared terms.
    ///
    /// # Errors
    /// Any [`AnalyticalError`] from [`OptionSpec::validate`]: the formula is
    /// undefined for non-positive expiry, volatility, spot or strike and for
    /// non-finite inputs. [`AnalyticalError::DegenerateTerm`] when valid
    /// inputs still underflow σ√T to zero, overflow a discount factor or
    /// leave d1/d2 NaN.
    ///
    /// # Examples
    /// ```
    /// use premia_core::types::OptionType;
    /// use premia_models::analytical::{BsmTerms, OptionSpec};
    ///
    /// // ATM, r = q = 0: d1 = σ√T / 2
    /// let spec = OptionSpec::new(OptionType::Call, 100.0, 100.0, 1.0, 0.2, 0.0);
    /// let terms = BsmTerms::compute(&spec).unwrap();
    /// assert!((terms.d1 - 0.1).abs() < 1e-15);
    /// assert!((terms.d2 + 0.1).abs() < 1e-15);
    ///
    /// let expired = OptionSpec { ttm: 0.0, ..spec };
    /// assert!(BsmTerms::compute(&expired).is_err());
    /// ```
    pub fn compute(spec: &OptionSpec) -> Result<Self, AnalyticalError> {
        spec.validate()?;

        let sqrt_t = spec.ttm.sqrt();
        let vol_sqrt_t = spec.vol * sqrt_t;
        if !(vol_sqrt_t > 0.0 && vol_sqrt_t.is_finite()) {
            return Err(degenerate("vol_sqrt_t", vol_sqrt_t));
        }

        // σ² is never formed: d1 = ln(S/K)/σ√T + (r - q)T/σ√T + σ√T/2
        let log_moneyness = (spec.spot / spec.strike).ln();
        let carry = (spec.risk_free - spec.dividend) * spec.ttm;
        let d1 = log_moneyness / vol_sqrt_t + carry / vol_sqrt_t + 0.5 * vol_sqrt_t;
        let d2 = d1 - vol_sqrt_t;
        if d1.is_nan() {
            return Err(degenerate("d1", d1));
        }
        if d2.is_nan() {
            return Err(degenerate("d2", d2));
        }

        let dividend_discount = (-spec.dividend * spec.ttm).exp();
        let rate_discount = (-spec.risk_free * spec.ttm).exp();
        if !dividend_discount.is_finite() {
            return Err(degenerate("dividend_discount", dividend_discount));
        }
        if !rate_discount.is_finite() {
            return Err(degenerate("rate_discount", rate_discount));
        }

        let omega = spec.option_type.sign();

        Ok(Self {
            d1,
            d2,
            sqrt_t,
            dividend_discount,
            rate_discount,
            pdf_d1: norm_pdf(d1),
            cdf_d1: norm_cdf(omega * d1),
            cdf_d2: norm_cdf(omega * d2),
        })
    }
}

fn degenerate(name: &'static str, value: f64) -> AnalyticalError {
    AnalyticalError::DegenerateTerm { name, value }
}
