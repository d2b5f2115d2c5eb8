// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Characteristic values exchanged with the host.

use std::fmt;

use crate::types::Percentage;

/// A value read from or written to a characteristic.
///
/// Numbers compare by value regardless of representation, so `Int(1)`
/// equals `Float(1.0)`. Booleans and strings only equal their own kind.
///
/// # Examples
///
/// ```
/// use climate_hap::protocol::Value;
///
/// assert_eq!(Value::Int(22), Value::Float(22.0));
/// assert_ne!(Value::Bool(true), Value::Int(1));
/// assert!(Value::Int(0).is_present());
/// assert!(!Value::Float(f64::NAN).is_present());
/// ```
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Boolean.
    Bool(bool),
    /// Integer, including enumeration codes.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// String.
    Str(String),
}

impl Value {
    /// Returns the value as a number, if it is one.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            Self::Bool(_) | Self::Str(_) => None,
        }
    }

    /// Returns the value as an integer code, if it is a whole number.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            // Safe: only whole, finite values are converted
            Self::Float(f) if f.is_finite() && f.trunc() == *f => Some(*f as i64),
            _ => None,
        }
    }

    /// Truthiness as the host applies it to on/off writes.
    ///
    /// `false`, zero, NaN and the empty string are falsy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Int(i) => *i != 0,
            Self::Float(f) => *f != 0.0 && !f.is_nan(),
            Self::Str(s) => !s.is_empty(),
        }
    }

    /// Returns `false` for values that cannot stand for anything: NaN and
    /// the empty string. Zero and `false` are present.
    #[must_use]
    pub fn is_present(&self) -> bool {
        match self {
            Self::Bool(_) | Self::Int(_) => true,
            Self::Float(f) => !f.is_nan(),
            Self::Str(s) => !s.is_empty(),
        }
    }
}

impl PartialEq for Value {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            _ => match (self.as_f64(), other.as_f64()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<Percentage> for Value {
    fn from(value: Percentage) -> Self {
        Self::Int(i64::from(value.value()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_compare_across_representations() {
        assert_eq!(Value::Int(3), Value::Float(3.0));
        assert_ne!(Value::Int(3), Value::Float(3.5));
        assert_ne!(Value::Float(f64::NAN), Value::Float(f64::NAN));
    }

    #[test]
    fn truthiness() {
        assert!(Value::Int(2).is_truthy());
        assert!(!Value::Int(0).is_truthy());
        assert!(!Value::Float(f64::NAN).is_truthy());
        assert!(!Value::Str(String::new()).is_truthy());
        assert!(Value::Bool(true).is_truthy());
    }

    #[test]
    fn as_i64_only_for_whole_numbers() {
        assert_eq!(Value::Float(2.0).as_i64(), Some(2));
        assert_eq!(Value::Float(2.5).as_i64(), None);
        assert_eq!(Value::Bool(true).as_i64(), None);
    }

    #[test]
    fn deserializes_untagged() {
        let values: Vec<Value> = serde_json::from_str(r#"[true, 1, 22.5, "x"]"#).unwrap();
        assert!(matches!(values[0], Value::Bool(true)));
        assert!(matches!(values[1], Value::Int(1)));
        assert!(matches!(values[2], Value::Float(_)));
        assert!(matches!(values[3], Value::Str(_)));
    }
}
