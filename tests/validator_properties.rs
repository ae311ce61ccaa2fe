//! Property-based tests for validators and record validation

use proptest::prelude::*;
use sluice::prelude::*;
use sluice::validator::{all, is_string, matches, max_length, min_length, SharedValidator};

fn non_string() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        (-1.0e9..1.0e9f64).prop_map(Value::Float),
    ]
}

fn string_only() -> Vec<SharedValidator> {
    vec![
        is_string().shared(),
        min_length(3).shared(),
        max_length(5).shared(),
        matches("^[a-z]+$").shared(),
    ]
}

proptest! {
    #[test]
    fn prop_non_string_yields_exactly_one_error(value in non_string()) {
        for validator in string_only() {
            let result = validator.validate(&value);
            let errors = result.failure_value();
            prop_assert!(errors.is_some());
            let errors = errors.unwrap();
            prop_assert_eq!(errors.len(), 1);
            prop_assert_eq!(errors.head().kind(), ErrorKind::TypeMismatch);
        }
    }

    #[test]
    fn prop_min_length(s in "[a-z]{0,12}", n in 0usize..10) {
        let result = min_length(n).validate(&Value::from(s.as_str()));
        if s.chars().count() < n {
            prop_assert!(result.is_failure());
        } else {
            prop_assert_eq!(result, Validation::success(Value::from(s.as_str())));
        }
    }

    #[test]
    fn prop_max_length(s in "[a-z]{0,12}", n in 0usize..10) {
        let result = max_length(n).validate(&Value::from(s.as_str()));
        if s.chars().count() <= n {
            prop_assert_eq!(result, Validation::success(Value::from(s.as_str())));
        } else {
            prop_assert!(result.is_failure());
        }
    }

    #[test]
    fn prop_matches_is_idempotent(s in "[a-z0-9]{0,8}") {
        let validator = matches("^[a-z]+$");
        let value = Value::from(s.as_str());
        let first = validator.validate(&value);
        let second = validator.validate(&value);
        prop_assert_eq!(&first, &second);
        if let Validation::Success(out) = first {
            prop_assert_eq!(out, value);
        }
    }

    #[test]
    fn prop_chain_success_equals_last_step(s in "[a-z]{3,5}") {
        let chain = all(string_only());
        let value = Value::from(s.as_str());
        let last = matches("^[a-z]+$").validate(&value);
        prop_assert_eq!(chain.validate(&value), last);
    }

    #[test]
    fn prop_chain_failure_starts_with_first_failing_step(s in "[a-z0-9]{0,8}") {
        let steps = string_only();
        let value = Value::from(s.as_str());
        let first_failure = steps
            .iter()
            .find_map(|step| step.validate(&value).failure_value());

        let chain = all(steps);
        match (chain.validate(&value), first_failure) {
            (Validation::Success(_), None) => {}
            (Validation::Failure(errors), Some(expected)) => {
                prop_assert_eq!(errors.head(), expected.head());
            }
            (result, expected) => {
                prop_assert!(false, "chain {:?} vs first failure {:?}", result, expected);
            }
        }
    }

    #[test]
    fn prop_empty_registry_always_succeeds(
        fields in prop::collection::btree_map("[a-z]{1,6}", "[a-z]{0,6}", 0..6)
    ) {
        let record: Record = fields
            .into_iter()
            .map(|(k, v)| (k, Value::from(v)))
            .collect();
        prop_assert_eq!(
            RecordValidator::new(record).outcome(),
            Validation::success(ValidRecord::new())
        );
    }

    #[test]
    fn prop_missing_field_always_reported(field in "[a-z]{1,8}") {
        let outcome = RecordValidator::new(Record::new())
            .with(field.clone(), is_string())
            .outcome();
        let errors = outcome.failure_value().unwrap();
        prop_assert_eq!(errors.len(), 1);
        prop_assert_eq!(errors[&field].head(), &ValidationError::missing(&field));
    }
}
