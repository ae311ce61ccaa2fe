//! Validation failures and construction errors
//!
//! Two very different things can go wrong:
//!
//! - Bad input data. A value is not a string, is too short, does not match a
//!   pattern, or a registered field is missing. These are [`ValidationError`]s,
//!   returned as data and aggregated per field. They never panic.
//! - Bad validator wiring. A pattern handed to a validator constructor is not
//!   a valid regular expression. That is a [`PatternError`], raised once at
//!   construction time and never folded into per-field results.
//!
//! # Examples
//!
//! ```
//! use sluice::{ErrorKind, ValidationError, Value};
//!
//! let err = ValidationError::not_a_string(&Value::from(42));
//! assert_eq!(err.kind(), ErrorKind::TypeMismatch);
//! assert_eq!(err.to_string(), "42 is not a string");
//!
//! let err = ValidationError::missing("fiscalNumber");
//! assert_eq!(err.to_string(), "missing fiscalNumber");
//! ```

use std::error::Error as StdError;
use std::fmt;

use crate::{NonEmptyVec, Value};

/// All failures reported for a single value. Never empty.
pub type ValidationErrors = NonEmptyVec<ValidationError>;

/// Broad category of a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ErrorKind {
    /// Value has the wrong runtime type.
    TypeMismatch,
    /// String shorter than the configured minimum.
    TooShort,
    /// String longer than the configured maximum.
    TooLong,
    /// String does not match the required pattern.
    PatternMismatch,
    /// Registered field absent from the record.
    Missing,
    /// Raised by a user-supplied validator.
    Custom,
}

/// One human-readable validation failure.
///
/// The field name and reason live in the message text; [`kind`](Self::kind)
/// is there for hosts that need to branch without parsing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    kind: ErrorKind,
    message: String,
}

impl ValidationError {
    /// Create an error with an explicit kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        ValidationError {
            kind,
            message: message.into(),
        }
    }

    /// Create an error for a user-defined rule.
    ///
    /// ```
    /// use sluice::{ErrorKind, ValidationError};
    ///
    /// let err = ValidationError::custom("must not be a reserved name");
    /// assert_eq!(err.kind(), ErrorKind::Custom);
    /// ```
    pub fn custom(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Custom, message)
    }

    /// `"<value> is not a string"`
    pub fn not_a_string(value: &Value) -> Self {
        Self::new(ErrorKind::TypeMismatch, format!("{} is not a string", value))
    }

    /// `"<value> must have at least <min> characters"`
    pub fn too_short(value: &str, min: usize) -> Self {
        Self::new(
            ErrorKind::TooShort,
            format!("{} must have at least {} characters", value, min),
        )
    }

    /// `"<value> must have at most <max> characters"`
    pub fn too_long(value: &str, max: usize) -> Self {
        Self::new(
            ErrorKind::TooLong,
            format!("{} must have at most {} characters", value, max),
        )
    }

    /// `"<value> does not match <pattern>"`
    pub fn pattern_mismatch(value: &str, pattern: &str) -> Self {
        Self::new(
            ErrorKind::PatternMismatch,
            format!("{} does not match {}", value, pattern),
        )
    }

    /// `"missing <field>"`
    pub fn missing(field: &str) -> Self {
        Self::new(ErrorKind::Missing, format!("missing {}", field))
    }

    /// Category of this failure.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The message text.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for ValidationError {}

#[cfg(feature = "serde")]
impl serde::Serialize for ValidationError {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.message)
    }
}

/// A pattern given to a validator constructor failed to compile.
///
/// This indicates a bug in validator wiring, not bad input.
#[derive(Debug, Clone)]
pub struct PatternError {
    pattern: String,
    source: regex::Error,
}

impl PatternError {
    pub(crate) fn new(pattern: impl Into<String>, source: regex::Error) -> Self {
        PatternError {
            pattern: pattern.into(),
            source,
        }
    }

    /// The pattern that failed to compile.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid validator pattern `{}`: {}", self.pattern, self.source)
    }
}

impl StdError for PatternError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.source)
    }
}
