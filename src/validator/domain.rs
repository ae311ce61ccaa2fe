//! Domain validators composed from the primitives
//!
//! Their regular expressions are compiled once per process and shared by every
//! validator built afterwards.

use std::sync::LazyLock;

use super::primitives::{is_string, matches, max_length, min_length, Matches};
use super::All;

/// Email shape: local part of letters, digits and `_.+-`, an `@`, a domain label,
/// a dot, and a tail of letters, digits, `-` and `.`.
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+$";

/// Exactly ten ASCII digits.
pub const FISCAL_NUMBER_PATTERN: &str = r"^[0-9]{10}$";

static EMAIL: LazyLock<Matches> = LazyLock::new(|| matches(EMAIL_PATTERN));
static FISCAL_NUMBER: LazyLock<Matches> = LazyLock::new(|| matches(FISCAL_NUMBER_PATTERN));

/// A person's name: a string of 3 to 50 characters.
///
/// # Example
///
/// ```rust
/// use sluice::validator::*;
/// use sluice::Value;
///
/// assert!(name_validator().validate(&Value::from("John Doe")).is_success());
/// assert!(name_validator().validate(&Value::from("Jo")).is_failure());
/// ```
pub fn name_validator() -> All {
    crate::all![is_string(), min_length(3), max_length(50)]
}

/// An email address, see [`EMAIL_PATTERN`].
pub fn email_validator() -> All {
    crate::all![is_string(), EMAIL.clone()]
}

/// A ten-digit fiscal number, see [`FISCAL_NUMBER_PATTERN`].
pub fn fiscal_number_validator() -> All {
    crate::all![is_string(), FISCAL_NUMBER.clone()]
}
