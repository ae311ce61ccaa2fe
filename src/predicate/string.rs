//! String predicates
//!
//! Lengths are counted in characters (Unicode scalar values), not bytes.

use regex::Regex;

use super::trait_def::Predicate;

/// Predicate that checks string length is in range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LenBetween {
    min: usize,
    max: usize,
}

impl LenBetween {
    /// Inclusive lower bound.
    pub fn min(&self) -> usize {
        self.min
    }

    /// Inclusive upper bound.
    pub fn max(&self) -> usize {
        self.max
    }
}

impl Predicate<str> for LenBetween {
    #[inline]
    fn check(&self, value: &str) -> bool {
        let len = value.chars().count();
        len >= self.min && len <= self.max
    }
}

/// Create a predicate that checks if string length is at least min.
pub fn len_min(min: usize) -> LenBetween {
    LenBetween {
        min,
        max: usize::MAX,
    }
}

/// Create a predicate that checks if string length is at most max.
pub fn len_max(max: usize) -> LenBetween {
    LenBetween { min: 0, max }
}

/// Predicate that checks a string against a compiled regular expression.
///
/// Uses `Regex::is_match`, so the pattern is unanchored unless it says otherwise.
#[derive(Clone, Debug)]
pub struct Pattern(pub Regex);

impl Pattern {
    /// Source text of the pattern.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Predicate<str> for Pattern {
    #[inline]
    fn check(&self, value: &str) -> bool {
        self.0.is_match(value)
    }
}

/// Create a predicate from a compiled regular expression.
///
/// # Example
///
/// ```rust
/// use regex::Regex;
/// use sluice::predicate::*;
///
/// let digits = pattern(Regex::new(r"^[0-9]+$").unwrap());
/// assert!(digits.check("2024"));
/// assert!(!digits.check("20x4"));
/// ```
pub fn pattern(regex: Regex) -> Pattern {
    Pattern(regex)
}
