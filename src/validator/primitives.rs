//! Primitive validators
//!
//! Every primitive fails with exactly one error. A non-string input only ever
//! produces the "not a string" error, never a length or pattern error as well.

use regex::Regex;

use super::{reject, Checked, Validator};
use crate::error::PatternError;
use crate::predicate::{len_max, len_min, pattern, validate_with, LenBetween, Pattern, Predicate};
use crate::{Validation, ValidationError, ValidationErrors, Value};

/// Borrow `value` as a string or produce the type-mismatch failure.
fn require_str(value: &Value) -> Result<&str, ValidationErrors> {
    value
        .as_str()
        .ok_or_else(|| ValidationErrors::singleton(ValidationError::not_a_string(value)))
}

/// Accepts any string unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct IsString;

impl Validator for IsString {
    fn validate(&self, value: &Value) -> Checked {
        match value {
            Value::Str(_) => Validation::success(value.clone()),
            other => reject(ValidationError::not_a_string(other)),
        }
    }
}

/// Accept string values, reject everything else.
///
/// # Example
///
/// ```rust
/// use sluice::validator::*;
/// use sluice::Value;
///
/// assert!(is_string().validate(&Value::from("text")).is_success());
/// assert!(is_string().validate(&Value::from(3.5)).is_failure());
/// ```
pub fn is_string() -> IsString {
    IsString
}

/// Rejects strings shorter than a minimum number of characters.
#[derive(Clone, Copy, Debug)]
pub struct MinLength {
    bound: LenBetween,
}

impl Validator for MinLength {
    fn validate(&self, value: &Value) -> Checked {
        let s = match require_str(value) {
            Ok(s) => s,
            Err(errors) => return Validation::failure(errors),
        };
        let min = self.bound.min();
        validate_with(s, self.bound, |s| {
            ValidationErrors::singleton(ValidationError::too_short(s, min))
        })
        .map(|_| value.clone())
    }
}

/// Require a string of at least `min` characters.
pub fn min_length(min: usize) -> MinLength {
    MinLength {
        bound: len_min(min),
    }
}

/// Rejects strings longer than a maximum number of characters.
#[derive(Clone, Copy, Debug)]
pub struct MaxLength {
    bound: LenBetween,
}

impl Validator for MaxLength {
    fn validate(&self, value: &Value) -> Checked {
        let s = match require_str(value) {
            Ok(s) => s,
            Err(errors) => return Validation::failure(errors),
        };
        let max = self.bound.max();
        validate_with(s, self.bound, |s| {
            ValidationErrors::singleton(ValidationError::too_long(s, max))
        })
        .map(|_| value.clone())
    }
}

/// Require a string of at most `max` characters.
pub fn max_length(max: usize) -> MaxLength {
    MaxLength {
        bound: len_max(max),
    }
}

/// Rejects strings that do not match a regular expression.
///
/// The pattern is compiled once, when the validator is built.
#[derive(Clone, Debug)]
pub struct Matches {
    pattern: Pattern,
}

impl Matches {
    /// Wrap an already compiled expression.
    pub fn from_regex(regex: Regex) -> Self {
        Matches {
            pattern: pattern(regex),
        }
    }

    /// Source text of the pattern.
    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Validator for Matches {
    fn validate(&self, value: &Value) -> Checked {
        let s = match require_str(value) {
            Ok(s) => s,
            Err(errors) => return Validation::failure(errors),
        };
        let source = self.pattern.as_str();
        validate_with(s, |s: &str| self.pattern.check(s), |s| {
            ValidationErrors::singleton(ValidationError::pattern_mismatch(s, source))
        })
        .map(|_| value.clone())
    }
}

/// Require a string matching `pattern`, reporting a malformed pattern as an error.
///
/// Use this when the pattern comes from runtime data.
///
/// ```rust
/// use sluice::validator::try_matches;
///
/// assert!(try_matches(r"^\d+$").is_ok());
/// let err = try_matches("(unclosed").unwrap_err();
/// assert_eq!(err.pattern(), "(unclosed");
/// ```
pub fn try_matches(pattern: &str) -> Result<Matches, PatternError> {
    let regex = Regex::new(pattern).map_err(|source| PatternError::new(pattern, source))?;
    Ok(Matches::from_regex(regex))
}

/// Require a string matching `pattern`.
///
/// # Panics
///
/// Panics if `pattern` is not a valid regular expression. A malformed pattern
/// is a wiring bug, so it fails at construction rather than per value.
///
/// # Example
///
/// ```rust
/// use sluice::validator::*;
/// use sluice::Value;
///
/// let zip = matches(r"^[0-9]{5}$");
/// assert!(zip.validate(&Value::from("90210")).is_success());
/// assert!(zip.validate(&Value::from("9021")).is_failure());
/// ```
pub fn matches(pattern: &str) -> Matches {
    match try_matches(pattern) {
        Ok(validator) => validator,
        Err(err) => panic!("{}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NonEmptyVec;

    fn single(error: ValidationError) -> Checked {
        Validation::failure(NonEmptyVec::singleton(error))
    }

    #[test]
    fn test_is_string() {
        let v = Value::from("hello");
        assert_eq!(is_string().validate(&v), Validation::success(v.clone()));
        assert_eq!(
            is_string().validate(&Value::from(5)),
            single(ValidationError::not_a_string(&Value::from(5)))
        );
    }

    #[test]
    fn test_min_length_boundaries() {
        let v = min_length(3);
        assert_eq!(
            v.validate(&Value::from("ab")),
            single(ValidationError::too_short("ab", 3))
        );
        assert_eq!(
            v.validate(&Value::from("abc")),
            Validation::success(Value::from("abc"))
        );
        assert!(v.validate(&Value::from("abcd")).is_success());
    }

    #[test]
    fn test_max_length_boundaries() {
        let v = max_length(3);
        assert!(v.validate(&Value::from("abc")).is_success());
        assert_eq!(
            v.validate(&Value::from("abcd")),
            single(ValidationError::too_long("abcd", 3))
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 4 chars, 7 bytes
        let word = Value::from("żółw");
        assert!(max_length(4).validate(&word).is_success());
        assert!(max_length(5).validate(&word).is_success());
        assert!(min_length(4).validate(&word).is_success());
        assert_eq!(
            min_length(5).validate(&word),
            single(ValidationError::too_short("żółw", 5))
        );
        assert_eq!(
            max_length(3).validate(&word),
            single(ValidationError::too_long("żółw", 3))
        );
    }

    #[test]
    fn test_length_rejects_non_string_with_one_error() {
        for value in [Value::Null, Value::from(12), Value::from(true)] {
            let errors = min_length(0).validate(&value).failure_value().unwrap();
            assert_eq!(errors.len(), 1);
            assert_eq!(errors.head(), &ValidationError::not_a_string(&value));

            let errors = max_length(100).validate(&value).failure_value().unwrap();
            assert_eq!(errors.len(), 1);
        }
    }

    #[test]
    fn test_matches() {
        let v = matches(r"^[0-9]{10}$");
        assert_eq!(
            v.validate(&Value::from("1234567890")),
            Validation::success(Value::from("1234567890"))
        );
        assert_eq!(
            v.validate(&Value::from("123")),
            single(ValidationError::pattern_mismatch("123", r"^[0-9]{10}$"))
        );
        assert_eq!(
            v.validate(&Value::from(1234567890_i64)),
            single(ValidationError::not_a_string(&Value::Int(1234567890)))
        );
    }

    #[test]
    fn test_matches_is_idempotent() {
        let v = matches("^a+$");
        let input = Value::from("aaa");
        let once = v.validate(&input);
        let twice = v.validate(&once.clone().success_value().unwrap());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_matches_shared_across_threads() {
        let v = std::sync::Arc::new(matches(r"^[0-9]{10}$"));
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let v = std::sync::Arc::clone(&v);
                std::thread::spawn(move || {
                    let ok = v.validate(&Value::from("1234567890")).is_success();
                    let bad = v.validate(&Value::from(i.to_string())).is_failure();
                    ok && bad
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
        assert_eq!(v.as_str(), r"^[0-9]{10}$");
    }

    #[test]
    #[should_panic(expected = "invalid validator pattern `[z-a]`")]
    fn test_matches_panics_on_bad_pattern() {
        let _ = matches("[z-a]");
    }

    #[test]
    fn test_try_matches_reports_bad_pattern() {
        let err = try_matches("(").unwrap_err();
        assert_eq!(err.pattern(), "(");
    }
}
