//! Which quantities a request asks for.

use std::str::FromStr;

use premia_core::types::PricingError;

use super::quantity::Quantity;

/// Requested quantities: everything (the default) or an explicit subset.
///
/// # Examples
/// ```
/// use premia_models::greeks::{Quantity, Selection};
///
/// let all = Selection::default();
/// assert_eq!(all.quantities().len(), 6);
///
/// let subset = Selection::from_names(["rho", "delta", "rho"]).unwrap();
/// assert_eq!(subset.quantities(), vec![Quantity::Rho, Quantity::Delta]);
///
/// assert!(Selection::from_names(["bogus"]).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    /// All six quantities in default order.
    #[default]
    All,
    /// The listed quantities, in request order.
    Only(Vec<Quantity>),
}

impl Selection {
    /// Selects a single quantity.
    pub fn single(quantity: Quantity) -> Self {
        Selection::Only(vec![quantity])
    }

    /// Parses a selection from quantity names.
    ///
    /// # Errors
    /// [`PricingError::UnknownQuantity`] for the first unrecognised name; no
    /// partial selection is returned.
    pub fn from_names<I, S>(names: I) -> Result<Self, PricingError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| name.as_ref().parse::<Quantity>())
            .collect::<Result<Vec<_>, _>>()
            .map(Selection::Only)
    }

    /// Resolves the requested quantities, dropping repeats.
    ///
    /// Each quantity appears once, at the position of its first request.
    pub fn quantities(&self) -> Vec<Quantity> {
        match self {
            Selection::All => Quantity::ALL.to_vec(),
            Selection::Only(requested) => {
                let mut unique = Vec::with_capacity(requested.len());
                for quantity in requested {
                    if !unique.contains(quantity) {
                        unique.push(*quantity);
                    }
                }
                unique
            }
        }
    }
}

impl From<Quantity> for Selection {
    fn from(quantity: Quantity) -> Self {
        Selection::single(quantity)
    }
}

impl From<Vec<Quantity>> for Selection {
    fn from(quantities: Vec<Quantity>) -> Self {
        Selection::Only(quantities)
    }
}

impl FromStr for Selection {
    type Err = PricingError;

    /// Parses a single quantity name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Quantity>().map(Selection::single)
    }
}
