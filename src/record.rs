//! Record-level validation
//!
//! A [`RecordValidator`] pairs one input [`Record`] with a registry of named
//! validators. Running it checks every registered field and produces a single
//! [`ValidationOutcome`]: either every normalized value, or every error of
//! every failing field. Nothing is reported field by field.
//!
//! # Example
//!
//! ```rust
//! use sluice::prelude::*;
//! use sluice::validator::{email_validator, name_validator};
//!
//! let record = Record::from([
//!     ("customerName".to_string(), Value::from("John Doe")),
//!     ("customerEmail".to_string(), Value::from("john@gmail.com")),
//! ]);
//!
//! let outcome = RecordValidator::new(record)
//!     .with("customerName", name_validator())
//!     .with("customerEmail", email_validator())
//!     .outcome();
//!
//! assert!(outcome.is_success());
//! ```

use std::collections::BTreeMap;
use std::fmt;

use crate::sink::ResultSink;
use crate::validator::{SharedValidator, Validator, ValidatorExt};
use crate::{Validation, ValidationError, ValidationErrors, Value};

/// Raw input: field name to untyped value.
pub type Record = BTreeMap<String, Value>;

/// Normalized values of every registered field, after a successful run.
pub type ValidRecord = BTreeMap<String, Value>;

/// Errors of every failing field. Fields that passed are absent.
pub type FieldErrors = BTreeMap<String, ValidationErrors>;

/// Result of one record validation run.
pub type ValidationOutcome = Validation<ValidRecord, FieldErrors>;

/// Validates one record against a registry of per-field validators.
///
/// Iteration is driven by the registry: a registered field missing from the
/// record fails with `"missing <field>"`, and record fields nobody registered
/// are ignored and left out of the output.
#[derive(Clone, Default)]
pub struct RecordValidator {
    record: Record,
    registry: BTreeMap<String, SharedValidator>,
}

impl RecordValidator {
    /// Create a validator over `record` with an empty registry.
    pub fn new(record: Record) -> Self {
        RecordValidator {
            record,
            registry: BTreeMap::new(),
        }
    }

    /// Register `validator` for `field`, replacing any earlier registration.
    pub fn register<V>(&mut self, field: impl Into<String>, validator: V) -> &mut Self
    where
        V: Validator + 'static,
    {
        self.registry.insert(field.into(), validator.shared());
        self
    }

    /// Register a validator that is already shared with other records.
    pub fn register_shared(&mut self, field: impl Into<String>, validator: SharedValidator) -> &mut Self {
        self.registry.insert(field.into(), validator);
        self
    }

    /// Builder form of [`register`](Self::register).
    pub fn with<V>(mut self, field: impl Into<String>, validator: V) -> Self
    where
        V: Validator + 'static,
    {
        self.register(field, validator);
        self
    }

    /// The input record.
    pub fn record(&self) -> &Record {
        &self.record
    }

    /// Names of all registered fields, in order.
    pub fn registered_fields(&self) -> impl Iterator<Item = &str> {
        self.registry.keys().map(String::as_str)
    }

    /// Check a single registered field.
    fn check_field(&self, field: &str, validator: &SharedValidator) -> Validation<(String, Value), FieldErrors> {
        let input = self.record.get(field);
        let checked = match input {
            Some(value) => validator.validate(value),
            None => Validation::failure(ValidationErrors::singleton(ValidationError::missing(field))),
        };

        #[cfg(feature = "tracing")]
        match &checked {
            Validation::Success(_) => tracing::trace!(field, "field passed"),
            Validation::Failure(errors) => tracing::trace!(
                field,
                input_type = input.map_or("absent", crate::Value::type_name),
                failures = errors.len(),
                "field failed"
            ),
        }

        checked
            .map(|value| (field.to_string(), value))
            .map_err(|errors| FieldErrors::from([(field.to_string(), errors)]))
    }

    /// Validate every registered field and return the aggregated outcome.
    ///
    /// Pure: calling it twice yields the same outcome.
    pub fn outcome(&self) -> ValidationOutcome {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("validate_record", fields = self.registry.len()).entered();

        let outcome = Validation::all_vec(
            self.registry
                .iter()
                .map(|(field, validator)| self.check_field(field, validator)),
        )
        .map(|fields| fields.into_iter().collect::<ValidRecord>());

        #[cfg(feature = "tracing")]
        match &outcome {
            Validation::Success(record) => tracing::debug!(fields = record.len(), "record valid"),
            Validation::Failure(errors) => {
                tracing::debug!(failed_fields = errors.len(), "record invalid")
            }
        }

        outcome
    }

    /// Validate and report the outcome to `sink` with exactly one call.
    pub fn validate<S>(&self, sink: &mut S)
    where
        S: ResultSink + ?Sized,
    {
        sink.receive(self.outcome());
    }
}

impl fmt::Debug for RecordValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordValidator")
            .field("record", &self.record)
            .field("registry", &self.registry.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::CollectSink;
    use crate::validator::{from_fn, is_string, min_length};
    use crate::NonEmptyVec;

    fn record(entries: &[(&str, Value)]) -> Record {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_empty_registry_is_success_with_empty_output() {
        let validator = RecordValidator::new(record(&[("anything", Value::from(1))]));
        assert_eq!(validator.outcome(), Validation::success(ValidRecord::new()));
    }

    #[test]
    fn test_missing_field_reports_missing_regardless_of_validator() {
        let always_ok = from_fn(|v: &Value| Validation::success(v.clone()));
        let outcome = RecordValidator::new(Record::new())
            .with("email", always_ok)
            .outcome();
        assert_eq!(
            outcome,
            Validation::failure(FieldErrors::from([(
                "email".to_string(),
                NonEmptyVec::singleton(ValidationError::missing("email")),
            )]))
        );
    }

    #[test]
    fn test_unregistered_fields_are_ignored() {
        let outcome = RecordValidator::new(record(&[
            ("name", Value::from("Ferris")),
            ("extra", Value::from(99)),
        ]))
        .with("name", is_string())
        .outcome();
        assert_eq!(
            outcome,
            Validation::success(ValidRecord::from([("name".to_string(), Value::from("Ferris"))]))
        );
    }

    #[test]
    fn test_last_registration_wins() {
        let mut validator = RecordValidator::new(record(&[("name", Value::from("Al"))]));
        validator.register("name", min_length(3));
        validator.register("name", is_string());
        assert_eq!(validator.registered_fields().collect::<Vec<_>>(), vec!["name"]);
        assert!(validator.outcome().is_success());
    }

    #[test]
    fn test_failure_only_lists_failing_fields() {
        let outcome = RecordValidator::new(record(&[
            ("good", Value::from("fine")),
            ("bad", Value::from(1)),
        ]))
        .with("good", is_string())
        .with("bad", is_string())
        .outcome();

        let errors = outcome.failure_value().unwrap();
        assert_eq!(errors.keys().collect::<Vec<_>>(), vec!["bad"]);
    }

    #[test]
    fn test_normalized_value_is_returned() {
        let trim = from_fn(|v: &Value| match v.as_str() {
            Some(s) => Validation::success(Value::from(s.trim())),
            None => Validation::failure(NonEmptyVec::singleton(ValidationError::not_a_string(v))),
        });
        let outcome = RecordValidator::new(record(&[("name", Value::from("  Ann "))]))
            .with("name", trim)
            .outcome();
        assert_eq!(outcome.success_value().unwrap()["name"], Value::from("Ann"));
    }

    #[test]
    fn test_validate_calls_sink_once() {
        let validator = RecordValidator::new(record(&[("a", Value::from("x"))])).with("a", is_string());
        let mut sink = CollectSink::new();
        validator.validate(&mut sink);
        assert_eq!(sink.calls(), 1);
        assert!(sink.outcome().unwrap().is_success());
    }

    #[test]
    fn test_shared_validator_across_records() {
        let shared = min_length(2).shared();
        let first = {
            let mut v = RecordValidator::new(record(&[("f", Value::from("ok"))]));
            v.register_shared("f", shared.clone());
            v.outcome()
        };
        let second = {
            let mut v = RecordValidator::new(record(&[("f", Value::from("x"))]));
            v.register_shared("f", shared);
            v.outcome()
        };
        assert!(first.is_success());
        assert!(second.is_failure());
    }
}
