//! Validation type for accumulating errors
//!
//! [`Validation`] is shaped like `Result`, but combining two validations keeps
//! the errors of both sides instead of stopping at the first. It is the
//! result type of every validator in this crate and of a whole record pass.
//!
//! # Examples
//!
//! ## Basic usage
//!
//! ```
//! use sluice::Validation;
//!
//! let success = Validation::<_, Vec<&str>>::success(42);
//! let failure = Validation::<i32, _>::failure(vec!["error"]);
//!
//! assert!(success.is_success());
//! assert!(failure.is_failure());
//! ```
//!
//! ## Accumulating errors
//!
//! ```
//! use sluice::Validation;
//!
//! let result = Validation::all_vec(vec![
//!     Validation::<i32, _>::failure(vec!["error1"]),
//!     Validation::failure(vec!["error2"]),
//! ]);
//!
//! assert_eq!(result, Validation::Failure(vec!["error1", "error2"]));
//! ```

use crate::Semigroup;

/// A validation that either succeeds with a value or fails with accumulated errors.
///
/// # Type Parameters
///
/// * `T` - The success value
/// * `E` - The error value; implements [`Semigroup`] where errors are combined
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", content = "data", rename_all = "lowercase"))]
pub enum Validation<T, E> {
    /// Successful validation with a value
    Success(T),
    /// Failed validation with accumulated errors
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Create a successful validation
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Check if this validation is successful
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Check if this validation failed
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    /// The success value, if any. A failure never exposes a value.
    #[inline]
    pub fn success_value(self) -> Option<T> {
        match self {
            Validation::Success(value) => Some(value),
            Validation::Failure(_) => None,
        }
    }

    /// The errors, if any.
    #[inline]
    pub fn failure_value(self) -> Option<E> {
        match self {
            Validation::Success(_) => None,
            Validation::Failure(error) => Some(error),
        }
    }

    /// Transform the success value if present
    ///
    /// ```
    /// use sluice::Validation;
    ///
    /// let v = Validation::<_, String>::success(5);
    /// assert_eq!(v.map(|x| x * 2), Validation::Success(10));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Transform the error value if present
    ///
    /// ```
    /// use sluice::Validation;
    ///
    /// let v = Validation::<i32, _>::failure(vec!["error"]);
    /// assert_eq!(v.map_err(|errors| errors.len()), Validation::Failure(1));
    /// ```
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Validation<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(error) => Validation::Failure(f(error)),
        }
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Combine every validation from an iterator
    ///
    /// Succeeds with all values only if every validation succeeded; otherwise
    /// fails with every error, combined in iteration order.
    ///
    /// ```
    /// use sluice::Validation;
    ///
    /// let result = Validation::all_vec(vec![
    ///     Validation::<i32, _>::failure(vec!["error1"]),
    ///     Validation::success(2),
    ///     Validation::failure(vec!["error2"]),
    /// ]);
    /// assert_eq!(result, Validation::Failure(vec!["error1", "error2"]));
    /// ```
    pub fn all_vec<I>(validations: I) -> Validation<Vec<T>, E>
    where
        I: IntoIterator<Item = Validation<T, E>>,
    {
        let mut successes = Vec::new();
        let mut failure: Option<E> = None;

        for validation in validations {
            match validation {
                Validation::Success(value) => successes.push(value),
                Validation::Failure(error) => {
                    failure = Some(match failure {
                        Some(acc) => acc.combine(error),
                        None => error,
                    });
                }
            }
        }

        match failure {
            Some(error) => Validation::Failure(error),
            None => Validation::Success(successes),
        }
    }
}
