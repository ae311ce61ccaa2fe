//! Validation integration for predicates
//!
//! Bridges a boolean [`Predicate`] into a [`Validation`], so a validator only
//! has to say what to check and what error to raise.

use super::trait_def::Predicate;
use crate::Validation;

/// Validate a value with an error factory.
///
/// The closure sees the rejected value, so messages can quote it.
///
/// # Example
///
/// ```rust
/// use sluice::{Validation, predicate::*};
///
/// let result = validate_with("hi", len_min(3), |s| format!("'{}' is too short", s));
/// assert_eq!(result, Validation::failure("'hi' is too short".to_string()));
/// ```
pub fn validate_with<'a, T, E, P, F>(value: &'a T, predicate: P, error_fn: F) -> Validation<&'a T, E>
where
    T: ?Sized,
    P: Predicate<T>,
    F: FnOnce(&T) -> E,
{
    if predicate.check(value) {
        Validation::success(value)
    } else {
        Validation::failure(error_fn(value))
    }
}
