//! Reporting conventions for Greeks.
//!
//! Provides [`GreeksConvention`] for choosing the units in which theta, vega
//! and rho are reported, together with [`ThetaUnit`] and [`SensitivityUnit`].
//!
//! The default convention matches the long-standing output of this library:
//! theta per year, vega and rho per 1% move.

use premia_core::types::PricingError;
use thiserror::Error;

/// Time unit for reported theta.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ThetaUnit {
    /// Decay per year of calendar time (the analytical value).
    #[default]
    PerYear,
    /// Decay per calendar day: per-year theta / `days_per_year`.
    PerDay,
}

/// Scale for reported vega and rho.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SensitivityUnit {
    /// Change per unit (1.0 = 100%) move of the input.
    PerUnit,
    /// Change per 1% (0.01) move of the input.
    #[default]
    PerPercent,
}

impl SensitivityUnit {
    /// Multiplier from a per-unit sensitivity to this unit.
    #[inline]
    pub fn scale(&self) -> f64 {
        match self {
            SensitivityUnit::PerUnit => 1.0,
            SensitivityUnit::PerPercent => 0.01,
        }
    }
}

/// Units in which Greeks are reported.
///
/// Use the builder pattern via [`GreeksConvention::builder()`] for construction.
///
/// # Default Values
///
/// | Parameter | Default | Description |
/// |-----------|---------|-------------|
/// | `theta_unit` | `PerYear` | Theta per year |
/// | `days_per_year` | 365 | Calendar days used by `ThetaUnit::PerDay` |
/// | `vega_unit` | `PerPercent` | Vega per vol point |
/// | `rho_unit` | `PerPercent` | Rho per 1% rate move |
///
/// # Examples
///
/// ```rust
/// use premia_models::greeks::{GreeksConvention, SensitivityUnit, ThetaUnit};
///
/// // Use defaults
/// let convention = GreeksConvention::default();
/// assert_eq!(convention.theta_unit, ThetaUnit::PerYear);
///
/// // Use builder for custom values
/// let convention = GreeksConvention::builder()
///     .theta_unit(ThetaUnit::PerDay)
///     .days_per_year(252.0)
///     .vega_unit(SensitivityUnit::PerUnit)
///     .build()
///     .unwrap();
/// assert_eq!(convention.report_theta(-2.52), -0.01);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GreeksConvention {
    /// Time unit for theta.
    pub theta_unit: ThetaUnit,
    /// Days per year used when theta is reported per day.
    pub days_per_year: f64,
    /// Scale for vega.
    pub vega_unit: SensitivityUnit,
    /// Scale for rho.
    pub rho_unit: SensitivityUnit,
}

impl Default for GreeksConvention {
    fn default() -> Self {
        Self {
            theta_unit: ThetaUnit::default(),
            days_per_year: 365.0,
            vega_unit: SensitivityUnit::default(),
            rho_unit: SensitivityUnit::default(),
        }
    }
}

impl GreeksConvention {
    /// Creates a new builder for constructing a `GreeksConvention`.
    pub fn builder() -> GreeksConventionBuilder {
        GreeksConventionBuilder::default()
    }

    /// Convention that reports every Greek in raw analytical units.
    pub fn raw() -> Self {
        Self {
            theta_unit: ThetaUnit::PerYear,
            days_per_year: 365.0,
            vega_unit: SensitivityUnit::PerUnit,
            rho_unit: SensitivityUnit::PerUnit,
        }
    }

    /// Validates the convention.
    pub fn validate(&self) -> Result<(), ConventionError> {
        if !self.days_per_year.is_finite() || self.days_per_year <= 0.0 {
            return Err(ConventionError::InvalidDaysPerYear(self.days_per_year));
        }
        Ok(())
    }

    /// Parses and validates a convention from TOML text.
    ///
    /// Missing keys take their default values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use premia_models::greeks::{GreeksConvention, SensitivityUnit, ThetaUnit};
    ///
    /// let convention = GreeksConvention::from_toml_str(
    ///     r#"
    ///     theta_unit = "per_day"
    ///     vega_unit = "per_unit"
    ///     "#,
    /// )
    /// .unwrap();
    /// assert_eq!(convention.theta_unit, ThetaUnit::PerDay);
    /// assert_eq!(convention.vega_unit, SensitivityUnit::PerUnit);
    /// assert_eq!(convention.days_per_year, 365.0);
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_toml_str(content: &str) -> Result<Self, ConventionError> {
        let convention: GreeksConvention =
            toml::from_str(content).map_err(|e| ConventionError::Parse(e.to_string()))?;
        convention.validate()?;
        Ok(convention)
    }

    /// Converts a per-year theta to the configured unit.
    #[inline]
    pub fn report_theta(&self, theta_per_year: f64) -> f64 {
        match self.theta_unit {
            ThetaUnit::PerYear => theta_per_year,
            ThetaUnit::PerDay => theta_per_year / self.days_per_year,
        }
    }

    /// Converts a per-unit vega to the configured unit.
    #[inline]
    pub fn report_vega(&self, vega: f64) -> f64 {
        vega * self.vega_unit.scale()
    }

    /// Converts a per-unit rho to the configured unit.
    #[inline]
    pub fn report_rho(&self, rho: f64) -> f64 {
        rho * self.rho_unit.scale()
    }
}

/// Builder for [`GreeksConvention`].
#[derive(Debug, Default)]
pub struct GreeksConventionBuilder {
    theta_unit: Option<ThetaUnit>,
    days_per_year: Option<f64>,
    vega_unit: Option<SensitivityUnit>,
    rho_unit: Option<SensitivityUnit>,
}

impl GreeksConventionBuilder {
    /// Sets the theta unit (default: per year).
    pub fn theta_unit(mut self, unit: ThetaUnit) -> Self {
        self.theta_unit = Some(unit);
        self
    }

    /// Sets the days per year for per-day theta (default: 365).
    pub fn days_per_year(mut self, days: f64) -> Self {
        self.days_per_year = Some(days);
        self
    }

    /// Sets the vega unit (default: per percent).
    pub fn vega_unit(mut self, unit: SensitivityUnit) -> Self {
        self.vega_unit = Some(unit);
        self
    }

    /// Sets the rho unit (default: per percent).
    pub fn rho_unit(mut self, unit: SensitivityUnit) -> Self {
        self.rho_unit = Some(unit);
        self
    }

    /// Builds the convention, validating all parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ConventionError`] if any parameter is invalid.
    pub fn build(self) -> Result<GreeksConvention, ConventionError> {
        let defaults = GreeksConvention::default();
        let convention = GreeksConvention {
            theta_unit: self.theta_unit.unwrap_or(defaults.theta_unit),
            days_per_year: self.days_per_year.unwrap_or(defaults.days_per_year),
            vega_unit: self.vega_unit.unwrap_or(defaults.vega_unit),
            rho_unit: self.rho_unit.unwrap_or(defaults.rho_unit),
        };

        convention.validate()?;
        Ok(convention)
    }
}

/// Error type for [`GreeksConvention`] validation and loading.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConventionError {
    /// Days per year must be finite and positive.
    #[error("Invalid days per year: {0}. Must be finite and positive")]
    InvalidDaysPerYear(f64),

    /// Configuration text could not be parsed.
    #[error("Convention parse error: {0}")]
    Parse(String),
}

impl From<ConventionError> for PricingError {
    fn from(err: ConventionError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
