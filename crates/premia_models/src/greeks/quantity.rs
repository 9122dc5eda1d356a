//! The closed set of quantities an evaluation can report.

use std::fmt;
use std::str::FromStr;

use premia_core::types::PricingError;

/// Quantity selectable in a price/Greeks request.
///
/// The six variants form a fixed registry: dispatch is an exhaustive match,
/// and the only runtime failure is parsing an unrecognised name.
///
/// # Examples
/// ```
/// use premia_models::greeks::Quantity;
///
/// assert_eq!("vega".parse::<Quantity>().unwrap(), Quantity::Vega);
/// assert_eq!(Quantity::Theta.as_str(), "theta");
/// assert!("vanna".parse::<Quantity>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Quantity {
    /// Option price
    Price,
    /// Delta: ∂V/∂S
    Delta,
    /// Gamma: ∂²V/∂S²
    Gamma,
    /// Theta: ∂V/∂t
    Theta,
    /// Vega: ∂V/∂σ
    Vega,
    /// Rho: ∂V/∂r
    Rho,
}

impl Quantity {
    /// Every quantity, in default reporting order.
    pub const ALL: [Quantity; 6] = [
        Quantity::Price,
        Quantity::Delta,
        Quantity::Gamma,
        Quantity::Theta,
        Quantity::Vega,
        Quantity::Rho,
    ];

    /// Key used in results and requests.
    pub fn as_str(&self) -> &'static str {
        match self {
            Quantity::Price => "price",
            Quantity::Delta => "delta",
            Quantity::Gamma => "gamma",
            Quantity::Theta => "theta",
            Quantity::Vega => "vega",
            Quantity::Rho => "rho",
        }
    }
}

impl FromStr for Quantity {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Quantity::ALL
            .into_iter()
            .find(|quantity| quantity.as_str() == s)
            .ok_or_else(|| PricingError::UnknownQuantity(s.to_string()))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
