//! Analytical Greeks of the Black-Scholes-Merton model.
//!
//! All values here are in raw analytical units: theta per year, vega per
//! unit (1.0 = 100 vol points) of volatility, rho per unit of rate. Reporting
//! units are applied by [`crate::greeks::GreeksConvention`].
//!
//! | Greek | Call | Put |
//! |-------|------|-----|
//! | Delta | e^(-qT)·N(d₁) | -e^(-qT)·N(-d₁) |
//! | Gamma | e^(-qT)·φ(d₁)/(S·σ·√T) | same |
//! | Vega  | S·e^(-qT)·φ(d₁)·√T | same |
//! | Rho   | K·T·e^(-rT)·N(d₂) | -K·T·e^(-rT)·N(-d₂) |
//!
//! Theta:
//! - Call: -(S·σ·e^(-qT)·φ(d₁))/(2√T) - r·K·e^(-rT)·N(d₂) + q·S·e^(-qT)·N(d₁)
//! - Put: -(S·σ·e^(-qT)·φ(d₁))/(2√T) + r·K·e^(-rT)·N(-d₂) - q·S·e^(-qT)·N(-d₁)

use premia_core::types::OptionType;

use super::black_scholes_merton::BlackScholesMerton;

impl BlackScholesMerton {
    /// Computes Delta (∂V/∂S).
    #[inline]
    pub fn delta(&self) -> f64 {
        let t = self.terms();
        match self.option_type() {
            OptionType::Call => t.dividend_discount * t.cdf_d1,
            OptionType::Put => -t.dividend_discount * t.cdf_d1,
        }
    }

    /// Computes Gamma (∂²V/∂S²), identical for calls and puts.
    #[inline]
    pub fn gamma(&self) -> f64 {
        let spec = self.spec();
        let t = self.terms();
        t.dividend_discount * t.pdf_d1 / (spec.spot * spec.vol * t.sqrt_t)
    }

    /// Computes Theta (∂V/∂t) per year.
    ///
    /// Usually negative (time decay).
    #[inline]
    pub fn theta(&self) -> f64 {
        let spec = self.spec();
        let t = self.terms();

        let forward = spec.spot * t.dividend_discount;
        let discounted_strike = spec.strike * t.rate_discount;

        // Common term: -(S·σ·e^(-qT)·φ(d₁))/(2√T)
        let decay = -(forward * spec.vol * t.pdf_d1) / (2.0 * t.sqrt_t);
        let carry_rate = spec.risk_free * discounted_strike * t.cdf_d2;
        let carry_dividend = spec.dividend * forward * t.cdf_d1;

        match self.option_type() {
            OptionType::Call => decay - carry_rate + carry_dividend,
            OptionType::Put => decay + carry_rate - carry_dividend,
        }
    }

    /// Computes Vega (∂V/∂σ) per unit of volatility, identical for calls and puts.
    #[inline]
    pub fn vega(&self) -> f64 {
        let spec = self.spec();
        let t = self.terms();
        spec.spot * t.dividend_discount * t.pdf_d1 * t.sqrt_t
    }

    /// Computes Rho (∂V/∂r) per unit of rate.
    #[inline]
    pub fn rho(&self) -> f64 {
        let spec = self.spec();
        let t = self.terms();
        let sensitivity = spec.strike * spec.ttm * t.rate_discount * t.cdf_d2;
        match self.option_type() {
            OptionType::Call => sensitivity,
            OptionType::Put => -sensitivity,
        }
    }
}
