//! Semigroup trait for accumulating validation failures
//!
//! Every place that merges failures (the `All` chain and the record pass)
//! goes through [`Semigroup::combine`].
//! The operation must be associative:
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use sluice::Semigroup;
//! use std::collections::BTreeMap;
//!
//! let v = vec!["too short"].combine(vec!["not a string"]);
//! assert_eq!(v, vec!["too short", "not a string"]);
//!
//! // Maps merge key-wise; values under the same key are combined.
//! let a = BTreeMap::from([("name", vec![1])]);
//! let b = BTreeMap::from([("name", vec![2]), ("email", vec![3])]);
//! let merged = a.combine(b);
//! assert_eq!(merged["name"], vec![1, 2]);
//! assert_eq!(merged["email"], vec![3]);
//! ```

use std::collections::BTreeMap;

/// A type that supports an associative binary operation.
///
/// `combine` takes `self` by value; clone first if the originals are still needed.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively.
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

// Per-key merge, used to fold field errors from independent fields.
impl<K: Ord, V: Semigroup> Semigroup for BTreeMap<K, V> {
    fn combine(mut self, other: Self) -> Self {
        for (key, value) in other {
            let merged = match self.remove(&key) {
                Some(existing) => existing.combine(value),
                None => value,
            };
            self.insert(key, merged);
        }
        self
    }
}
