//! The `All` chain combinator

use std::fmt;

use super::{Checked, SharedValidator, Validator};
use crate::{Semigroup, Validation, ValidationErrors, Value};

/// Runs validators in order, feeding each one's output into the next.
///
/// Every step always runs; the chain never stops early. When a step fails its
/// errors are appended once and the value handed to the next step becomes
/// [`Value::Null`], so later string checks typically add their own
/// "null is not a string" error. The chain fails with every collected error
/// in step order, or succeeds with the last step's value. An empty chain
/// returns its input unchanged.
///
/// # Example
///
/// ```rust
/// use sluice::validator::*;
/// use sluice::{all, Value};
///
/// let name = all![is_string(), min_length(3), max_length(50)];
/// let errors = name.validate(&Value::from("Jo")).failure_value().unwrap();
///
/// let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
/// assert_eq!(
///     messages,
///     vec!["Jo must have at least 3 characters", "null is not a string"]
/// );
/// ```
#[derive(Clone, Default)]
pub struct All {
    steps: Vec<SharedValidator>,
}

impl All {
    /// Number of steps in the chain.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the chain has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Append a step to the end of the chain.
    pub fn push(&mut self, step: SharedValidator) {
        self.steps.push(step);
    }
}

impl fmt::Debug for All {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("All").field("steps", &self.steps.len()).finish()
    }
}

impl Validator for All {
    fn validate(&self, value: &Value) -> Checked {
        let mut current = value.clone();
        let mut errors: Option<ValidationErrors> = None;

        for step in &self.steps {
            match step.validate(&current) {
                Validation::Success(next) => current = next,
                Validation::Failure(step_errors) => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(failures = step_errors.len(), "chain step failed");

                    current = Value::Null;
                    errors = Some(match errors {
                        Some(acc) => acc.combine(step_errors),
                        None => step_errors,
                    });
                }
            }
        }

        match errors {
            Some(errors) => Validation::failure(errors),
            None => Validation::success(current),
        }
    }
}

/// Build a chain from shared validators.
///
/// The [`all!`](crate::all) macro is usually more convenient, as it shares
/// each argument for you.
pub fn all<I>(validators: I) -> All
where
    I: IntoIterator<Item = SharedValidator>,
{
    All {
        steps: validators.into_iter().collect(),
    }
}

/// Build an [`All`] chain from any validators, in order.
///
/// ```rust
/// use sluice::validator::*;
/// use sluice::{all, Value};
///
/// let fiscal = all![is_string(), matches(r"^[0-9]{10}$")];
/// assert!(fiscal.validate(&Value::from("1234567890")).is_success());
/// ```
#[macro_export]
macro_rules! all {
    ($($validator:expr),* $(,)?) => {
        $crate::validator::all(::std::vec![
            $($crate::validator::ValidatorExt::shared($validator)),*
        ])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::{from_fn, is_string, max_length, min_length, ValidatorExt};
    use crate::ValidationError;

    #[test]
    fn test_all_passes_through_when_every_step_succeeds() {
        let chain = crate::all![is_string(), min_length(1), max_length(10)];
        assert_eq!(
            chain.validate(&Value::from("John")),
            Validation::success(Value::from("John"))
        );
    }

    #[test]
    fn test_all_returns_last_step_output() {
        let upper = from_fn(|value: &Value| {
            Validation::success(Value::from(value.to_string().to_uppercase()))
        });
        let exclaim =
            from_fn(|value: &Value| Validation::success(Value::from(format!("{}!", value))));
        let chain = crate::all![upper, exclaim];
        assert_eq!(
            chain.validate(&Value::from("hi")),
            Validation::success(Value::from("HI!"))
        );
    }

    #[test]
    fn test_all_runs_every_step_and_cascades_null() {
        let chain = crate::all![is_string(), min_length(3), max_length(50)];
        let errors = chain
            .validate(&Value::from("Jo"))
            .failure_value()
            .unwrap()
            .into_vec();
        assert_eq!(
            errors,
            vec![
                ValidationError::too_short("Jo", 3),
                ValidationError::not_a_string(&Value::Null),
            ]
        );
    }

    #[test]
    fn test_all_non_string_reports_each_step_once() {
        let chain = crate::all![is_string(), min_length(3)];
        let errors = chain
            .validate(&Value::from(42))
            .failure_value()
            .unwrap()
            .into_vec();
        assert_eq!(
            errors,
            vec![
                ValidationError::not_a_string(&Value::from(42)),
                ValidationError::not_a_string(&Value::Null),
            ]
        );
    }

    #[test]
    fn test_first_failing_step_errors_come_first() {
        let chain = crate::all![min_length(5), max_length(1)];
        let errors = chain.validate(&Value::from("abc")).failure_value().unwrap();
        assert_eq!(errors.head(), &ValidationError::too_short("abc", 5));
    }

    #[test]
    fn test_empty_chain_is_identity() {
        let chain = all(Vec::new());
        assert!(chain.is_empty());
        assert_eq!(chain.validate(&Value::from(1)), Validation::success(Value::from(1)));
    }

    #[test]
    fn test_then_and_push_extend_the_chain() {
        let mut chain = is_string().then(min_length(2));
        chain.push(max_length(3).shared());
        assert_eq!(chain.len(), 3);
        assert!(chain.validate(&Value::from("abcd")).is_failure());
        assert!(chain.validate(&Value::from("abc")).is_success());
    }

    #[test]
    fn test_chain_is_reusable_across_calls() {
        let chain = crate::all![is_string(), min_length(2)];
        let first = chain.validate(&Value::from("a"));
        let second = chain.validate(&Value::from("a"));
        assert_eq!(first, second);
    }
}
