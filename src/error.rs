// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `climate_hap` library.
//!
//! Translation itself never fails: host input that cannot be accepted falls
//! back to the current value. The types here cover the places where the
//! library does report failures to its caller: building constrained values,
//! parsing vendor strings and loading configuration. [`Rejection`] describes
//! why the sanitizer refused a candidate and only ever ends up in log lines.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while loading configuration.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u16,
        /// Maximum allowed value.
        max: u16,
        /// The actual value that was provided.
        actual: u16,
    },

    /// An unknown operating mode string was provided.
    #[error("invalid operating mode: {0}")]
    InvalidMode(String),

    /// An unknown swing state string was provided.
    #[error("invalid swing state: {0}")]
    InvalidSwing(String),

    /// An unknown temperature unit was provided.
    #[error("invalid temperature unit: {0}")]
    InvalidTemperatureUnit(String),

    /// A protocol code does not map to any state of the named enumeration.
    #[error("code {code} is not a valid {enumeration}")]
    InvalidCode {
        /// The enumeration the code was decoded against.
        enumeration: &'static str,
        /// The code received.
        code: i64,
    },
}

/// Errors related to loading bridge configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document could not be parsed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The device name is empty.
    #[error("device name must not be empty")]
    EmptyName,

    /// Two states of the named enumeration share a code.
    #[error("{0} has duplicate state codes")]
    AmbiguousCodes(&'static str),
}

/// Reasons the sanitizer refused a candidate value.
///
/// A rejection is never returned to the host. The characteristic keeps its
/// current value and the reason is logged.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Rejection {
    /// No value was supplied.
    #[error("value is missing")]
    Missing,

    /// The value is NaN or empty.
    #[error("'{0}' is not a usable value")]
    Unusable(String),

    /// The value is not one of the characteristic's valid values.
    #[error("'{0}' is not one of the valid values")]
    NotValid(String),

    /// The value is below the characteristic's minimum.
    #[error("{value} is less than minValue {min}")]
    BelowMinimum {
        /// The (possibly step-rounded) value.
        value: f64,
        /// The declared minimum.
        min: f64,
    },

    /// The value is above the characteristic's maximum.
    #[error("{value} is greater than maxValue {max}")]
    AboveMaximum {
        /// The (possibly step-rounded) value.
        value: f64,
        /// The declared maximum.
        max: f64,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
