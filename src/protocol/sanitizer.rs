// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Validation of values against characteristic constraints.
//!
//! Checks run in a fixed order: presence, valid values, step rounding,
//! minimum, maximum. The rounded value is what the range checks see and
//! what is accepted, so it must itself be one of the valid values.
//!
//! # Examples
//!
//! ```
//! use climate_hap::protocol::{sanitize, Constraints, Value};
//!
//! let threshold = Constraints::range(10.0, 35.0).with_min_step(0.5);
//! let current = Some(Value::Float(24.0));
//!
//! // Rounded to the step, then accepted
//! assert_eq!(
//!     sanitize(&threshold, current.clone(), Some(Value::Float(22.63))),
//!     Some(Value::Float(22.5))
//! );
//!
//! // Out of range falls back to the current value
//! assert_eq!(
//!     sanitize(&threshold, current.clone(), Some(Value::Float(40.0))),
//!     current
//! );
//! ```

use crate::error::Rejection;

use super::{Constraints, Value};

/// Decimal places kept after step rounding.
const ROUNDING_PRECISION: f64 = 1e9;

/// Rounds `value` to the nearest multiple of `step`.
///
/// Non-positive or non-finite steps leave the value untouched.
#[must_use]
pub fn round_to_step(value: f64, step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return value;
    }
    let rounded = ((value + f64::EPSILON) / step).round() * step;
    // Strip representation noise such as 22.600000000000001
    (rounded * ROUNDING_PRECISION).round() / ROUNDING_PRECISION
}

/// Validates `candidate` against `constraints`.
///
/// Returns the value to accept, which may differ from the candidate when
/// step rounding applied.
///
/// # Errors
///
/// Returns the [`Rejection`] describing the first failed check.
#[allow(clippy::float_cmp)]
pub fn check(constraints: &Constraints, candidate: Option<Value>) -> Result<Value, Rejection> {
    let Some(mut value) = candidate else {
        return Err(Rejection::Missing);
    };

    if !value.is_present() {
        return Err(Rejection::Unusable(value.to_string()));
    }

    if let Value::Str(s) = &value {
        // Strings are valid for some characteristics
        tracing::warn!(value = %s, "Candidate is not a number, continuing");
    }

    if let Some(valid) = &constraints.valid_values
        && !valid.contains(&value)
    {
        return Err(Rejection::NotValid(value.to_string()));
    }

    let Some(mut number) = value.as_f64() else {
        return Ok(value);
    };

    if let Some(step) = constraints.min_step {
        let rounded = round_to_step(number, step);
        if rounded != number {
            tracing::debug!(
                value = number,
                step,
                rounded,
                "Rounding candidate to the characteristic step"
            );
            number = rounded;
            value = Value::Float(rounded);

            if let Some(valid) = &constraints.valid_values
                && !valid.contains(&value)
            {
                return Err(Rejection::NotValid(value.to_string()));
            }
        }
    }

    if let Some(min) = constraints.min_value
        && number < min
    {
        return Err(Rejection::BelowMinimum { value: number, min });
    }

    if let Some(max) = constraints.max_value
        && number > max
    {
        return Err(Rejection::AboveMaximum { value: number, max });
    }

    Ok(value)
}

/// Returns the value a characteristic should hold after offering it
/// `candidate`.
///
/// Rejected candidates leave `current` in place. No error is ever surfaced;
/// the rejection is logged. When the result equals `current`, callers
/// publishing to the host treat it as a no-op.
#[must_use]
pub fn sanitize(
    constraints: &Constraints,
    current: Option<Value>,
    candidate: Option<Value>,
) -> Option<Value> {
    match check(constraints, candidate) {
        Ok(value) => Some(value),
        Err(rejection) => {
            tracing::debug!(%rejection, "Keeping current value");
            current
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current() -> Option<Value> {
        Some(Value::Int(20))
    }

    #[test]
    fn missing_and_unusable_candidates_keep_current() {
        let c = Constraints::none();
        assert_eq!(sanitize(&c, current(), None), current());
        assert_eq!(sanitize(&c, current(), Some(Value::Float(f64::NAN))), current());
        assert_eq!(sanitize(&c, current(), Some(Value::Str(String::new()))), current());
    }

    #[test]
    fn zero_and_false_are_legitimate() {
        let c = Constraints::none();
        assert_eq!(sanitize(&c, current(), Some(Value::Int(0))), Some(Value::Int(0)));
        assert_eq!(
            sanitize(&c, current(), Some(Value::Bool(false))),
            Some(Value::Bool(false))
        );
    }

    #[test]
    fn valid_values_enforced() {
        let c = Constraints::valid_values([Value::Int(0), Value::Int(2)]);
        assert_eq!(sanitize(&c, current(), Some(Value::Int(2))), Some(Value::Int(2)));
        assert_eq!(sanitize(&c, current(), Some(Value::Int(1))), current());
        assert_eq!(
            check(&c, Some(Value::Int(1))),
            Err(Rejection::NotValid("1".to_string()))
        );
    }

    #[test]
    fn step_rounding_before_range_check() {
        let c = Constraints::range(10.0, 22.5).with_min_step(0.5);
        assert_eq!(
            sanitize(&c, current(), Some(Value::Float(22.63))),
            Some(Value::Float(22.5))
        );
        // 22.8 rounds to 23.0, which is above the maximum
        assert_eq!(sanitize(&c, current(), Some(Value::Float(22.8))), current());
    }

    #[test]
    fn step_rounding_granularity() {
        assert!((round_to_step(22.63, 0.1) - 22.6).abs() < 1e-12);
        assert!((round_to_step(22.63, 1.0) - 23.0).abs() < 1e-12);
        assert!((round_to_step(22.5, 0.5) - 22.5).abs() < 1e-12);
        assert!((round_to_step(7.0, 0.0) - 7.0).abs() < 1e-12);
    }

    #[test]
    fn range_enforced() {
        let c = Constraints::range(0.0, 100.0);
        assert_eq!(
            check(&c, Some(Value::Int(-1))),
            Err(Rejection::BelowMinimum {
                value: -1.0,
                min: 0.0
            })
        );
        assert_eq!(
            check(&c, Some(Value::Int(101))),
            Err(Rejection::AboveMaximum {
                value: 101.0,
                max: 100.0
            })
        );
        assert_eq!(check(&c, Some(Value::Int(100))), Ok(Value::Int(100)));
    }

    #[test]
    fn strings_pass_through_numeric_checks() {
        let c = Constraints::range(0.0, 1.0);
        assert_eq!(
            check(&c, Some(Value::from("AUTO"))),
            Ok(Value::Str("AUTO".to_string()))
        );
    }

    #[test]
    fn never_escapes_range_or_valid_values() {
        let ranged = Constraints::range(16.0, 30.0).with_min_step(0.5);
        let listed = Constraints::valid_values([Value::Int(0), Value::Int(1), Value::Int(2)]);
        let currents = [None, Some(Value::Int(20)), Some(Value::Float(17.5))];

        for i in -400..=800 {
            let candidate = Value::Float(f64::from(i) / 10.0);
            for current in &currents {
                if let Some(v) = sanitize(&ranged, current.clone(), Some(candidate.clone()))
                    && Some(&v) != current.as_ref()
                {
                    let n = v.as_f64().unwrap();
                    assert!((16.0..=30.0).contains(&n), "{n} escaped the range");
                }
                if let Some(v) = sanitize(&listed, current.clone(), Some(candidate.clone()))
                    && Some(&v) != current.as_ref()
                {
                    assert!(listed.valid_values.as_ref().unwrap().contains(&v));
                }
            }
        }
    }

    #[test]
    fn rounding_cannot_leave_valid_values() {
        let c = Constraints::valid_values([Value::Float(0.5), Value::Int(2)]).with_min_step(1.0);
        assert_eq!(
            check(&c, Some(Value::Float(0.5))),
            Err(Rejection::NotValid("1".to_string()))
        );
        assert_eq!(sanitize(&c, current(), Some(Value::Float(0.5))), current());
        assert_eq!(sanitize(&c, current(), Some(Value::Int(2))), Some(Value::Int(2)));

        for i in -40..=40 {
            let candidate = Some(Value::Float(f64::from(i) / 10.0));
            let once = sanitize(&c, Some(Value::Int(2)), candidate);
            assert!(c.valid_values.as_ref().unwrap().contains(once.as_ref().unwrap()));
            assert_eq!(once, sanitize(&c, Some(Value::Int(2)), once.clone()));
        }
    }

    #[test]
    fn idempotent() {
        let c = Constraints::range(16.0, 30.0).with_min_step(0.5);
        for i in -100..=400 {
            let candidate = Some(Value::Float(f64::from(i) / 10.0));
            let once = sanitize(&c, current(), candidate);
            let twice = sanitize(&c, current(), once.clone());
            assert_eq!(once, twice);
        }
    }
}
