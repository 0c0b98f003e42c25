//! Value objects: equality by value, not identity.

use serde::Serialize;
use serde_json::Value;

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. Two instances built
/// from the same input are interchangeable.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// A numeric amount read leniently from a JSON field.
///
/// Source data may carry amounts as JSON numbers or as numeric strings. Anything
/// else (absent, `null`, booleans, unparseable or non-finite strings) reads as zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl ValueObject for Amount {}

impl Amount {
    pub const ZERO: Amount = Amount(0.0);

    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Read a field leniently, falling back to zero.
    pub fn from_json(value: Option<&Value>) -> Self {
        Self::parse(value).unwrap_or(Self::ZERO)
    }

    /// Read a field strictly: `None` unless it holds a finite number.
    pub fn parse(value: Option<&Value>) -> Option<Self> {
        let n = match value? {
            Value::Number(n) => n.as_f64()?,
            Value::String(s) => s.trim().parse::<f64>().ok()?,
            _ => return None,
        };
        n.is_finite().then_some(Self(n))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl core::ops::Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        Amount(self.0 + rhs.0)
    }
}

impl core::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, |acc, a| acc + a)
    }
}

/// Case- and whitespace-insensitive customer lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomerKey(String);

impl ValueObject for CustomerKey {}

impl CustomerKey {
    pub fn new(name: &str) -> Self {
        Self(name.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether a raw customer name normalizes to this key.
    pub fn matches(&self, raw_name: &str) -> bool {
        raw_name.trim().to_lowercase() == self.0
    }
}

impl core::fmt::Display for CustomerKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
