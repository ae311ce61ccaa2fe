//! Validators: reusable check-and-normalize units over a single [`Value`]
//!
//! A [`Validator`] maps a value to either a normalized value or a non-empty list
//! of [`ValidationError`]s. Validators are stateless, so one instance can be
//! shared (through [`SharedValidator`]) by any number of record validators.
//!
//! Three layers build on each other:
//!
//! - primitives: [`is_string`], [`min_length`], [`max_length`], [`matches`]
//! - the chain combinator [`all`] / [`all!`](crate::all)
//! - domain validators composed from the two: [`name_validator`],
//!   [`email_validator`], [`fiscal_number_validator`]
//!
//! # Example
//!
//! ```rust
//! use sluice::validator::*;
//! use sluice::{all, Value};
//!
//! let username = all![is_string(), min_length(3), max_length(12)];
//!
//! assert!(username.validate(&Value::from("ferris")).is_success());
//! assert!(username.validate(&Value::from("fe")).is_failure());
//! assert!(username.validate(&Value::from(7)).is_failure());
//! ```

mod combinators;
mod domain;
mod primitives;

use std::fmt;
use std::sync::Arc;

use crate::{Validation, ValidationError, ValidationErrors, Value};

pub use combinators::{all, All};
pub use domain::{
    email_validator, fiscal_number_validator, name_validator, EMAIL_PATTERN, FISCAL_NUMBER_PATTERN,
};
pub use primitives::{
    is_string, matches, max_length, min_length, try_matches, IsString, Matches, MaxLength,
    MinLength,
};

/// Result of running one validator on one value.
///
/// A failure carries no value, so a rejected value cannot be used by mistake.
pub type Checked = Validation<Value, ValidationErrors>;

/// A validator shared behind an `Arc`, as stored in chains and registries.
pub type SharedValidator = Arc<dyn Validator>;

/// A check-and-normalize unit over a single dynamically typed value.
///
/// Implementations must be pure: the same input always yields the same result
/// and nothing outside the return value is touched.
pub trait Validator: Send + Sync {
    /// Check `value`, returning the normalized value or every failure found.
    fn validate(&self, value: &Value) -> Checked;
}

impl<V: Validator + ?Sized> Validator for Arc<V> {
    #[inline]
    fn validate(&self, value: &Value) -> Checked {
        (**self).validate(value)
    }
}

impl<V: Validator + ?Sized> Validator for Box<V> {
    #[inline]
    fn validate(&self, value: &Value) -> Checked {
        (**self).validate(value)
    }
}

/// Extension methods available on every sized validator.
pub trait ValidatorExt: Validator + Sized + 'static {
    /// Move this validator behind an `Arc` so it can be shared.
    fn shared(self) -> SharedValidator {
        Arc::new(self)
    }

    /// Chain `next` after this validator; see [`All`] for the semantics.
    ///
    /// ```rust
    /// use sluice::validator::*;
    /// use sluice::Value;
    ///
    /// let v = is_string().then(min_length(2));
    /// assert!(v.validate(&Value::from("ok")).is_success());
    /// ```
    fn then<V: Validator + 'static>(self, next: V) -> All {
        all([self.shared(), next.shared()])
    }
}

impl<V: Validator + Sized + 'static> ValidatorExt for V {}

/// A validator backed by a closure.
///
/// Created by [`from_fn`].
#[derive(Clone)]
pub struct FromFn<F> {
    f: F,
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

impl<F> Validator for FromFn<F>
where
    F: Fn(&Value) -> Checked + Send + Sync,
{
    #[inline]
    fn validate(&self, value: &Value) -> Checked {
        (self.f)(value)
    }
}

/// Build a validator from a closure.
///
/// # Example
///
/// ```rust
/// use sluice::validator::*;
/// use sluice::{NonEmptyVec, Validation, ValidationError, Value};
///
/// let trimmed = from_fn(|value: &Value| match value.as_str() {
///     Some(s) => Validation::success(Value::from(s.trim())),
///     None => Validation::failure(NonEmptyVec::singleton(ValidationError::not_a_string(value))),
/// });
///
/// assert_eq!(
///     trimmed.validate(&Value::from("  padded ")),
///     Validation::success(Value::from("padded"))
/// );
/// ```
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: Fn(&Value) -> Checked + Send + Sync,
{
    FromFn { f }
}

/// Fail with exactly one error.
#[inline]
pub(crate) fn reject(error: ValidationError) -> Checked {
    Validation::failure(ValidationErrors::singleton(error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NonEmptyVec;

    #[test]
    fn test_from_fn_normalizes() {
        let upper = from_fn(|value: &Value| match value.as_str() {
            Some(s) => Validation::success(Value::from(s.to_uppercase())),
            None => reject(ValidationError::not_a_string(value)),
        });
        assert_eq!(
            upper.validate(&Value::from("abc")),
            Validation::success(Value::from("ABC"))
        );
        assert!(upper.validate(&Value::Null).is_failure());
    }

    #[test]
    fn test_shared_validator_is_reusable() {
        let v: SharedValidator = is_string().shared();
        let other = Arc::clone(&v);
        assert!(v.validate(&Value::from("a")).is_success());
        assert!(other.validate(&Value::from("b")).is_success());
    }

    #[test]
    fn test_boxed_validator() {
        let v: Box<dyn Validator> = Box::new(min_length(1));
        assert_eq!(
            v.validate(&Value::from("")),
            Validation::failure(NonEmptyVec::singleton(ValidationError::too_short("", 1)))
        );
    }
}
