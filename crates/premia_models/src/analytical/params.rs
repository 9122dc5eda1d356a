//! Market inputs of a European option.

use premia_core::types::OptionType;

use super::error::AnalyticalError;

/// Option type plus the six BSM market inputs.
///
/// A plain `Copy` value built fresh for every evaluation. Construction does
/// not validate; [`OptionSpec::validate`] runs when the shared BSM terms are
/// derived, so every operation rejects bad input the same way.
///
/// # Examples
/// ```
/// use premia_core::types::OptionType;
/// use premia_models::analytical::OptionSpec;
///
/// let spec = OptionSpec::new(OptionType::Put, 100.0, 95.0, 0.5, 0.2, 0.1)
///     .with_dividend(0.05);
/// assert!(spec.validate().is_ok());
/// assert_eq!(spec.dividend, 0.05);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionSpec {
    /// Call or put
    pub option_type: OptionType,
    /// Underlying spot price (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Time to maturity in years (T)
    pub ttm: f64,
    /// Annualised volatility (σ)
    pub vol: f64,
    /// Continuously-compounded risk-free rate (r)
    pub risk_free: f64,
    /// Continuous dividend yield (q)
    #[cfg_attr(feature = "serde", serde(default))]
    pub dividend: f64,
}

impl OptionSpec {
    /// Creates a spec with zero dividend yield (classic Black-Scholes).
    pub fn new(
        option_type: OptionType,
        spot: f64,
        strike: f64,
        ttm: f64,
        vol: f64,
        risk_free: f64,
    ) -> Self {
        Self {
            option_type,
            spot,
            strike,
            ttm,
            vol,
            risk_free,
            dividend: 0.0,
        }
    }

    /// Returns a copy with the given continuous dividend yield.
    #[inline]
    pub fn with_dividend(mut self, dividend: f64) -> Self {
        self.dividend = dividend;
        self
    }

    /// Returns a copy with the other option type.
    #[inline]
    pub fn with_option_type(mut self, option_type: OptionType) -> Self {
        self.option_type = option_type;
        self
    }

    /// Checks that d1/d2 are well defined for these inputs.
    ///
    /// # Errors
    /// - `AnalyticalError::NonFiniteInput` if any numeric input is NaN or infinite
    /// - `AnalyticalError::InvalidSpot` if spot <= 0
    /// - `AnalyticalError::InvalidStrike` if strike <= 0
    /// - `AnalyticalError::InvalidExpiry` if ttm <= 0
    /// - `AnalyticalError::InvalidVolatility` if vol <= 0
    pub fn validate(&self) -> Result<(), AnalyticalError> {
        let inputs = [
            ("spot", self.spot),
            ("strike", self.strike),
            ("ttm", self.ttm),
            ("vol", self.vol),
            ("risk_free", self.risk_free),
            ("dividend", self.dividend),
        ];
        if let Some(&(name, value)) = inputs.iter().find(|(_, value)| !value.is_finite()) {
            return Err(AnalyticalError::NonFiniteInput { name, value });
        }

        if self.spot <= 0.0 {
            return Err(AnalyticalError::InvalidSpot { spot: self.spot });
        }
        if self.strike <= 0.0 {
            return Err(AnalyticalError::InvalidStrike {
                strike: self.strike,
            });
        }
        if self.ttm <= 0.0 {
            return Err(AnalyticalError::InvalidExpiry { expiry: self.ttm });
        }
        if self.vol <= 0.0 {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: self.vol,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> OptionSpec {
        OptionSpec::new(OptionType::Call, 100.0, 100.0, 1.0, 0.2, 0.05)
    }

    #[test]
    fn test_new_defaults_to_zero_dividend() {
        assert_eq!(spec().dividend, 0.0);
        assert_eq!(spec().with_dividend(0.03).dividend, 0.03);
    }

    #[test]
    fn test_valid_spec() {
        assert!(spec().validate().is_ok());
    }

    #[test]
    fn test_negative_rate_and_dividend_allowed() {
        let spec = OptionSpec {
            risk_free: -0.02,
            dividend: -0.01,
            ..spec()
        };
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_zero_expiry_rejected() {
        let spec = OptionSpec { ttm: 0.0, ..spec() };
        assert_eq!(
            spec.validate(),
            Err(AnalyticalError::InvalidExpiry { expiry: 0.0 })
        );
    }

    #[test]
    fn test_zero_volatility_rejected() {
        let spec = OptionSpec { vol: 0.0, ..spec() };
        assert_eq!(
            spec.validate(),
            Err(AnalyticalError::InvalidVolatility { volatility: 0.0 })
        );
    }

    #[test]
    fn test_non_positive_spot_and_strike_rejected() {
        let spec_spot = OptionSpec { spot: -1.0, ..spec() };
        assert_eq!(
            spec_spot.validate(),
            Err(AnalyticalError::InvalidSpot { spot: -1.0 })
        );

        let spec_strike = OptionSpec {
            strike: 0.0,
            ..spec()
        };
        assert_eq!(
            spec_strike.validate(),
            Err(AnalyticalError::InvalidStrike { strike: 0.0 })
        );
    }

    #[test]
    fn test_non_finite_inputs_rejected() {
        let spec_nan = OptionSpec {
            risk_free: f64::NAN,
            ..spec()
        };
        match spec_nan.validate() {
            Err(AnalyticalError::NonFiniteInput { name, value }) => {
                assert_eq!(name, "risk_free");
                assert!(value.is_nan());
            }
            other => panic!("Expected NonFiniteInput, got {:?}", other),
        }

        let spec_inf = OptionSpec {
            vol: f64::INFINITY,
            ..spec()
        };
        assert!(matches!(
            spec_inf.validate(),
            Err(AnalyticalError::NonFiniteInput { name: "vol", .. })
        ));
    }
}
