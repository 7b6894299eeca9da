use crate::outcome::Outcome;
use crate::rules::rule::Rule;

/// Runs every rule against one value and merges all failures.
///
/// Folds from a `Success(value)` seed, concatenating each rule's result
/// left to right. Every rule is evaluated against a clone of the *original*
/// value (rules never observe each other's output), and evaluation does
/// not short-circuit: a caller sees every violation in one pass rather than
/// one at a time. An empty slice yields `Success(value)`.
///
/// # Arguments
///
/// * `value` - The candidate value
/// * `rules` - The rules to run, in order
///
/// # Examples
///
/// ```
/// use outcome_rail::rules::{all, Rule};
///
/// let checks = [
///     Rule::with_message(|n: &i32| *n > 0, "must be positive"),
///     Rule::with_message(|n: &i32| *n % 2 == 0, "must be even"),
///     Rule::with_message(|n: &i32| *n < 100, "must be under 100"),
/// ];
///
/// assert_eq!(all(4, &checks).into_value(), Some(4));
///
/// let messages: Vec<_> = all(-3, &checks).iter_messages().cloned().collect();
/// assert_eq!(messages, vec!["must be positive", "must be even"]);
/// ```
pub fn all<V>(value: V, rules: &[Rule<V>]) -> Outcome<V>
where
    V: Clone,
{
    rules
        .iter()
        .map(|rule| rule.validate(value.clone()))
        .fold(Outcome::Success(value.clone()), Outcome::concat)
}

/// Method-call sugar for [`all`].
///
/// Blanket-implemented for every cloneable type, so any candidate value can
/// be validated in place without naming the free function.
///
/// # Examples
///
/// ```
/// use outcome_rail::rules::{Rule, ValidateExt};
///
/// let checks = [Rule::with_message(|n: &i32| *n % 2 == 0, "must be even")];
///
/// assert!(4.validate_all(&checks).is_success());
/// assert!(3.validate_all(&checks).is_failure());
/// ```
pub trait ValidateExt: Clone + Sized {
    /// Runs every rule against `self`, merging all failures.
    fn validate_all(self, rules: &[Rule<Self>]) -> Outcome<Self> {
        all(self, rules)
    }
}

impl<V: Clone> ValidateExt for V {}
