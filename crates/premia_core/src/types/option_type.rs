//! Option type (call or put).

use std::fmt;
use std::str::FromStr;

use super::error::PricingError;

/// Option type (call or put).
///
/// Parsed case-insensitively from `"c"`/`"call"` and `"p"`/`"put"`, so the
/// normalisation happens once at the boundary and formulas only ever see
/// one of the two variants.
///
/// # Examples
/// ```
/// use premia_core::types::OptionType;
///
/// assert_eq!("C".parse::<OptionType>().unwrap(), OptionType::Call);
/// assert_eq!("put".parse::<OptionType>().unwrap(), OptionType::Put);
/// assert!("straddle".parse::<OptionType>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Call option
    Call,
    /// Put option
    Put,
}

impl OptionType {
    /// Payoff sign ω: +1 for calls, -1 for puts.
    #[inline]
    pub fn sign(&self) -> f64 {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "c" | "call" => Ok(OptionType::Call),
            "p" | "put" => Ok(OptionType::Put),
            _ => Err(PricingError::InvalidOptionType(s.to_string())),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_and_long_forms() {
        for flag in ["c", "C", "call", "Call", "CALL", "cAlL"] {
            assert_eq!(flag.parse::<OptionType>().unwrap(), OptionType::Call);
        }
        for flag in ["p", "P", "put", "Put", "PUT"] {
            assert_eq!(flag.parse::<OptionType>().unwrap(), OptionType::Put);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_flags() {
        for flag in ["", "x", "calls", " c", "pu", "straddle"] {
            match flag.parse::<OptionType>() {
                Err(PricingError::InvalidOptionType(raw)) => assert_eq!(raw, flag),
                other => panic!("Expected InvalidOptionType for {:?}, got {:?}", flag, other),
            }
        }
    }

    #[test]
    fn test_sign() {
        assert_eq!(OptionType::Call.sign(), 1.0);
        assert_eq!(OptionType::Put.sign(), -1.0);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for option_type in [OptionType::Call, OptionType::Put] {
            let parsed: OptionType = option_type.to_string().parse().unwrap();
            assert_eq!(parsed, option_type);
        }
    }
}
