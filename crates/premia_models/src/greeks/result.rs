//! Price/Greeks result type.
//!
//! Provides [`GreekResult`], an insertion-ordered mapping from [`Quantity`]
//! to value. Keys are unique and iteration follows the request order, so
//! formatted output is deterministic.

use std::fmt;

use super::quantity::Quantity;

/// Requested quantities and their values, in request order.
///
/// # Examples
///
/// ```rust
/// use premia_models::greeks::{GreekResult, Quantity};
///
/// let mut result = GreekResult::with_capacity(2);
/// result.insert(Quantity::Price, 10.45);
/// result.insert(Quantity::Delta, 0.64);
///
/// assert_eq!(result.get(Quantity::Delta), Some(0.64));
/// assert_eq!(result.get_by_name("price"), Some(10.45));
/// assert_eq!(result.keys().collect::<Vec<_>>(), vec!["price", "delta"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GreekResult {
    entries: Vec<(Quantity, f64)>,
}

impl GreekResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty result with room for `capacity` quantities.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Inserts a value, replacing an existing one in place.
    ///
    /// Returns the previous value if the quantity was already present.
    pub fn insert(&mut self, quantity: Quantity, value: f64) -> Option<f64> {
        match self.entries.iter_mut().find(|(q, _)| *q == quantity) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((quantity, value));
                None
            }
        }
    }

    /// Returns the value of `quantity`, if requested.
    pub fn get(&self, quantity: Quantity) -> Option<f64> {
        self.entries
            .iter()
            .find(|(q, _)| *q == quantity)
            .map(|(_, value)| *value)
    }

    /// Returns the value stored under the key `name`.
    pub fn get_by_name(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(q, _)| q.as_str() == name)
            .map(|(_, value)| *value)
    }

    /// Number of quantities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no quantity is present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(quantity, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Quantity, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Iterates over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(q, _)| q.as_str())
    }
}

impl IntoIterator for GreekResult {
    type Item = (Quantity, f64);
    type IntoIter = std::vec::IntoIter<(Quantity, f64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromIterator<(Quantity, f64)> for GreekResult {
    fn from_iter<I: IntoIterator<Item = (Quantity, f64)>>(iter: I) -> Self {
        let mut result = GreekResult::new();
        for (quantity, value) in iter {
            result.insert(quantity, value);
        }
        result
    }
}

/// One `name: value` line per quantity.
impl fmt::Display for GreekResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (quantity, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", quantity, value)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for GreekResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (quantity, value) in &self.entries {
            map.serialize_entry(quantity.as_str(), value)?;
        }
        map.end()
    }
}
