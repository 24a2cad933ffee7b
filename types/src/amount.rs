//! Arbitrary-precision token amounts.
//!
//! Stake thresholds and rewards are configured in whole tokens and scaled by
//! `10^decimals` at use sites, so the scaled values routinely exceed `u128`.
//! Amounts are therefore backed by [`BigUint`], which also makes negative
//! values unrepresentable.

use num_bigint::{BigUint, ParseBigIntError};
use num_traits::Zero;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A non-negative arbitrary-precision amount.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(BigUint);

impl Amount {
    pub fn new(value: u64) -> Self {
        Self(BigUint::from(value))
    }

    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    /// Multiply by a scaling factor such as `10^decimals`.
    pub fn scaled(&self, multiplier: &BigUint) -> Self {
        Self(&self.0 * multiplier)
    }

    /// Minimal big-endian magnitude. Zero is the empty sequence.
    pub fn to_bytes_be(&self) -> Vec<u8> {
        if self.0.is_zero() {
            Vec::new()
        } else {
            self.0.to_bytes_be()
        }
    }

    /// Inverse of [`Amount::to_bytes_be`]. Leading zero bytes are accepted
    /// here; canonical-form checks belong to the codec.
    pub fn from_bytes_be(bytes: &[u8]) -> Self {
        Self(BigUint::from_bytes_be(bytes))
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<BigUint> for Amount {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

impl FromStr for Amount {
    type Err = ParseBigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigUint::from_str(s.trim()).map(Self)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Written as a decimal string so values beyond 64 bits survive TOML and JSON.
impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AmountVisitor;

        impl<'de> serde::de::Visitor<'de> for AmountVisitor {
            type Value = Amount;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a non-negative integer or decimal string")
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(Amount::new(v))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Self::Value, E> {
                u64::try_from(v)
                    .map(Amount::new)
                    .map_err(|_| E::invalid_value(serde::de::Unexpected::Signed(v), &self))
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Amount::from_str(v)
                    .map_err(|_| E::invalid_value(serde::de::Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_any(AmountVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_encodes_as_empty_bytes() {
        assert!(Amount::zero().to_bytes_be().is_empty());
        assert_eq!(Amount::from_bytes_be(&[]), Amount::zero());
    }

    #[test]
    fn bytes_are_minimal_big_endian() {
        assert_eq!(Amount::new(1000).to_bytes_be(), vec![0x03, 0xe8]);
        assert_eq!(Amount::from_bytes_be(&[0x03, 0xe8]), Amount::new(1000));
    }

    #[test]
    fn scaled_multiplies_beyond_u128() {
        let multiplier = BigUint::from(10u32).pow(30);
        let scaled = Amount::new(1_000_000_000).scaled(&multiplier);
        assert_eq!(scaled.to_string(), format!("1{}", "0".repeat(39)));
    }

    #[test]
    fn parses_decimal_strings() {
        let amount: Amount = " 5000000000000000000 ".parse().unwrap();
        assert_eq!(amount.to_string(), "5000000000000000000");
        assert!("-5".parse::<Amount>().is_err());
        assert!("12ab".parse::<Amount>().is_err());
    }

    #[test]
    fn serde_accepts_integers_and_strings() {
        let from_int: Amount = serde_json::from_str("42").unwrap();
        let from_str: Amount = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(from_int, Amount::new(42));
        assert_eq!(from_str, Amount::new(42));
        assert!(serde_json::from_str::<Amount>("-1").is_err());
        assert_eq!(serde_json::to_string(&Amount::new(42)).unwrap(), "\"42\"");
    }
}
