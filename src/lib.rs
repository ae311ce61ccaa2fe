//! # Sluice
//!
//! Composable field validators and record validation.
//!
//! A [`Validator`](validator::Validator) checks one dynamically typed
//! [`Value`] and returns either a normalized value or every
//! [`ValidationError`] it found. Validators chain with
//! [`all!`], and a [`RecordValidator`] applies named validators to a flat
//! record, handing one aggregated outcome to a caller-supplied
//! [`ResultSink`](sink::ResultSink).
//!
//! ## Quick Example
//!
//! ```rust
//! use sluice::prelude::*;
//! use sluice::validator::{email_validator, fiscal_number_validator, name_validator};
//!
//! let record = Record::from([
//!     ("customerName".to_string(), Value::from("Jo")),
//!     ("customerEmail".to_string(), Value::from("john@gmail.com")),
//! ]);
//!
//! let mut sink = CollectSink::new();
//! RecordValidator::new(record)
//!     .with("customerName", name_validator())
//!     .with("customerEmail", email_validator())
//!     .with("fiscalNumber", fiscal_number_validator())
//!     .validate(&mut sink);
//!
//! match sink.into_outcome() {
//!     Some(Validation::Failure(errors)) => {
//!         assert!(errors.contains_key("customerName"));
//!         assert!(errors.contains_key("fiscalNumber"));
//!         assert!(!errors.contains_key("customerEmail"));
//!     }
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//! ```
//!
//! ## Features
//!
//! - `tracing`: span per record run, trace events per field, and `TracingSink`
//! - `serde`: `Serialize` for outcomes and errors, `Deserialize` for [`Value`]
//! - `proptest`: `Arbitrary` for [`Value`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod nonempty;
pub mod predicate;
pub mod record;
pub mod semigroup;
pub mod sink;
pub mod testing;
pub mod validation;
pub mod validator;
pub mod value;

// Re-exports
pub use error::{ErrorKind, PatternError, ValidationError, ValidationErrors};
pub use nonempty::NonEmptyVec;
pub use record::{FieldErrors, Record, RecordValidator, ValidRecord, ValidationOutcome};
pub use semigroup::Semigroup;
pub use validation::Validation;
pub use value::Value;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{ErrorKind, ValidationError, ValidationErrors};
    pub use crate::record::{FieldErrors, Record, RecordValidator, ValidRecord, ValidationOutcome};
    pub use crate::sink::{CollectSink, ResultSink};
    pub use crate::validation::Validation;
    pub use crate::validator::{Validator, ValidatorExt};
    pub use crate::value::Value;
    pub use crate::NonEmptyVec;
}
