//! Result sinks: where a record validation outcome is delivered
//!
//! The library never prints. [`RecordValidator::validate`](crate::RecordValidator::validate)
//! hands the complete outcome to a caller-supplied [`ResultSink`], which
//! decides presentation: build an API response, log it, print it, or raise.
//!
//! Provided sinks:
//!
//! - [`CollectSink`]: keeps the outcome for later inspection
//! - any `FnMut(ValidationOutcome)` closure
//! - `TracingSink` (feature `tracing`): one structured log event per run
//!
//! # Example
//!
//! ```rust
//! use sluice::prelude::*;
//!
//! let mut seen = Vec::new();
//! RecordValidator::new(Record::new())
//!     .with("name", sluice::validator::is_string())
//!     .validate(&mut |outcome: ValidationOutcome| seen.push(outcome.is_success()));
//!
//! assert_eq!(seen, vec![false]);
//! ```

use crate::record::{FieldErrors, ValidRecord, ValidationOutcome};
use crate::Validation;

/// Consumer of a record validation outcome.
///
/// Exactly one of the two methods is called per validation run.
pub trait ResultSink {
    /// Called when at least one registered field failed.
    fn on_failure(&mut self, errors: FieldErrors);

    /// Called when every registered field passed.
    fn on_success(&mut self, record: ValidRecord);

    /// Dispatch an outcome to the matching method.
    fn receive(&mut self, outcome: ValidationOutcome) {
        match outcome {
            Validation::Success(record) => self.on_success(record),
            Validation::Failure(errors) => self.on_failure(errors),
        }
    }
}

impl<F> ResultSink for F
where
    F: FnMut(ValidationOutcome),
{
    fn on_failure(&mut self, errors: FieldErrors) {
        self(Validation::failure(errors))
    }

    fn on_success(&mut self, record: ValidRecord) {
        self(Validation::success(record))
    }
}

/// A sink that stores the outcome it receives.
///
/// # Example
///
/// ```rust
/// use sluice::prelude::*;
///
/// let mut sink = CollectSink::new();
/// RecordValidator::new(Record::new()).validate(&mut sink);
///
/// assert_eq!(sink.calls(), 1);
/// assert_eq!(sink.into_outcome(), Some(Validation::success(ValidRecord::new())));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CollectSink {
    outcome: Option<ValidationOutcome>,
    calls: usize,
}

impl CollectSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent outcome, if any.
    pub fn outcome(&self) -> Option<&ValidationOutcome> {
        self.outcome.as_ref()
    }

    /// Take the most recent outcome.
    pub fn into_outcome(self) -> Option<ValidationOutcome> {
        self.outcome
    }

    /// How many times this sink has been called.
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl ResultSink for CollectSink {
    fn on_failure(&mut self, errors: FieldErrors) {
        self.calls += 1;
        self.outcome = Some(Validation::failure(errors));
    }

    fn on_success(&mut self, record: ValidRecord) {
        self.calls += 1;
        self.outcome = Some(Validation::success(record));
    }
}

/// A sink that reports each outcome as a `tracing` event.
///
/// Success is logged at `INFO` with the field names; failure at `WARN` with
/// every field's messages.
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

#[cfg(feature = "tracing")]
impl ResultSink for TracingSink {
    fn on_failure(&mut self, errors: FieldErrors) {
        let rendered = render_errors(&errors);
        tracing::warn!(failed_fields = errors.len(), errors = %rendered, "validation failed");
    }

    fn on_success(&mut self, record: ValidRecord) {
        let fields: Vec<&str> = record.keys().map(String::as_str).collect();
        tracing::info!(fields = ?fields, "validation succeeded");
    }
}

/// Render field errors as `field: msg; msg, field: msg`.
pub fn render_errors(errors: &FieldErrors) -> String {
    errors
        .iter()
        .map(|(field, messages)| {
            let joined: Vec<String> = messages.iter().map(ToString::to_string).collect();
            format!("{}: {}", field, joined.join("; "))
        })
        .collect::<Vec<_>>()
        .join(", ")
}
