//! Boolean predicates underneath the validators
//!
//! Predicates are the boolean building blocks underneath the
//! [`validator`](crate::validator) primitives: a validator asks a predicate
//! whether a string is acceptable and turns a "no" into a
//! [`ValidationError`](crate::ValidationError) via [`validate_with`].
//!
//! # Example
//!
//! ```rust
//! use sluice::predicate::*;
//!
//! let at_least_three = len_min(3);
//! assert!(at_least_three.check("john_doe"));
//! assert!(!at_least_three.check("ab"));
//! ```

mod string;
mod trait_def;
mod validation;

pub use trait_def::Predicate;

pub use string::{len_max, len_min, pattern, LenBetween, Pattern};

pub use validation::validate_with;
