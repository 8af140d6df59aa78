//! Numeric input values.
//!
//! Input counts such as `timeToElapse` may be fractional, but most callers
//! send whole numbers. [`Quantity`] accepts either and remembers which one it
//! was given, so an echoed record renders `5` as `5` and `1.5` as `1.5`.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A JSON number as supplied by the caller.
///
/// # Examples
///
/// ```
/// use impact_core::types::Quantity;
///
/// let whole: Quantity = serde_json::from_str("58").unwrap();
/// let half: Quantity = serde_json::from_str("1.5").unwrap();
///
/// assert_eq!(whole.value(), 58.0);
/// assert_eq!(half.value(), 1.5);
/// assert_eq!(serde_json::to_string(&whole).unwrap(), "58");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Quantity {
    /// Whole number
    Integer(i64),
    /// Number with a fractional part, or too large for `i64`
    Real(f64),
}

impl Quantity {
    /// Value as a float.
    pub fn value(self) -> f64 {
        match self {
            Quantity::Integer(n) => n as f64,
            Quantity::Real(x) => x,
        }
    }

    /// Whether the value was supplied as a whole number.
    pub fn is_integer(self) -> bool {
        matches!(self, Quantity::Integer(_))
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Quantity::Integer(0)
    }
}

impl From<i32> for Quantity {
    fn from(n: i32) -> Self {
        Quantity::Integer(n.into())
    }
}

impl From<i64> for Quantity {
    fn from(n: i64) -> Self {
        Quantity::Integer(n)
    }
}

impl From<f64> for Quantity {
    fn from(x: f64) -> Self {
        Quantity::Real(x)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Integer(n) => write!(f, "{}", n),
            Quantity::Real(x) => write!(f, "{}", x),
        }
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Quantity::Integer(n) => serializer.serialize_i64(*n),
            Quantity::Real(x) => serializer.serialize_f64(*x),
        }
    }
}

struct QuantityVisitor;

impl<'de> Visitor<'de> for QuantityVisitor {
    type Value = Quantity;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number")
    }

    fn visit_i64<E: de::Error>(self, n: i64) -> Result<Quantity, E> {
        Ok(Quantity::Integer(n))
    }

    fn visit_u64<E: de::Error>(self, n: u64) -> Result<Quantity, E> {
        Ok(i64::try_from(n).map_or(Quantity::Real(n as f64), Quantity::Integer))
    }

    fn visit_f64<E: de::Error>(self, x: f64) -> Result<Quantity, E> {
        Ok(Quantity::Real(x))
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(QuantityVisitor)
    }
}
