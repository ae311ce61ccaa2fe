//! Core predicate trait

/// A boolean check over values of type `T`.
///
/// Closures taking `&T` and returning `bool` are predicates too.
///
/// # Example
///
/// ```rust
/// use sluice::predicate::*;
///
/// let short_word = len_max(4);
/// assert!(short_word.check("abc"));
/// assert!(!short_word.check("abcdef"));
///
/// let shouty = |s: &str| s.chars().all(char::is_uppercase);
/// assert!(shouty.check("HEY"));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

// Blanket impl for closures
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}
