//! Testing utilities
//!
//! Assertion macros for [`Validation`](crate::Validation) results, and a
//! proptest `Arbitrary` implementation for [`Value`] behind the `proptest`
//! feature.
//!
//! # Examples
//!
//! ```rust
//! use sluice::validator::*;
//! use sluice::{assert_failure, assert_success, Value};
//!
//! assert_success!(is_string().validate(&Value::from("ok")));
//! assert_failure!(is_string().validate(&Value::from(1)));
//! ```

#[cfg(feature = "proptest")]
use crate::Value;

/// Assert that a validation succeeds.
///
/// Panics with the errors if the validation is a `Failure`.
#[macro_export]
macro_rules! assert_success {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Success(_) => {}
            $crate::Validation::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that a validation fails.
///
/// Panics with the value if the validation is a `Success`.
#[macro_export]
macro_rules! assert_failure {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Failure(_) => {}
            $crate::Validation::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that a validation fails with the given error messages, in order.
///
/// Works for any error container that iterates over `Display` items, such as
/// [`ValidationErrors`](crate::ValidationErrors).
///
/// ```rust
/// use sluice::validator::*;
/// use sluice::{assert_validation_errors, Value};
///
/// assert_validation_errors!(
///     min_length(3).validate(&Value::from("Jo")),
///     ["Jo must have at least 3 characters"]
/// );
/// ```
#[macro_export]
macro_rules! assert_validation_errors {
    ($validation:expr, $expected:expr) => {
        match $validation {
            $crate::Validation::Failure(errors) => {
                let actual: ::std::vec::Vec<::std::string::String> =
                    errors.iter().map(::std::string::ToString::to_string).collect();
                let expected: ::std::vec::Vec<::std::string::String> = $expected
                    .iter()
                    .map(::std::string::ToString::to_string)
                    .collect();
                assert_eq!(actual, expected);
            }
            $crate::Validation::Success(v) => {
                panic!(
                    "Expected Failure with errors {:?}, got Success: {:?}",
                    $expected, v
                );
            }
        }
    };
}

/// Assert that a record outcome failed for exactly the given fields.
///
/// ```rust
/// use sluice::prelude::*;
/// use sluice::assert_failed_fields;
///
/// let outcome = RecordValidator::new(Record::new())
///     .with("email", sluice::validator::is_string())
///     .outcome();
/// assert_failed_fields!(outcome, ["email"]);
/// ```
#[macro_export]
macro_rules! assert_failed_fields {
    ($outcome:expr, $fields:expr) => {
        match $outcome {
            $crate::Validation::Failure(errors) => {
                let actual: ::std::vec::Vec<&str> = errors.keys().map(|k| k.as_str()).collect();
                let mut expected: ::std::vec::Vec<&str> = $fields.iter().copied().collect();
                expected.sort_unstable();
                assert_eq!(actual, expected);
            }
            $crate::Validation::Success(v) => {
                panic!("Expected failed fields {:?}, got Success: {:?}", $fields, v);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for Value {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::Int),
            any::<f64>().prop_map(Value::Float),
            any::<String>().prop_map(Value::Str),
        ]
        .boxed()
    }
}
