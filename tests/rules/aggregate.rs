use outcome_rail::rules::{all, Rule, ValidateExt};
use outcome_rail::Outcome;
use std::cell::Cell;
use std::rc::Rc;

fn number_rules() -> [Rule<i32>; 3] {
    [
        Rule::with_message(|n: &i32| *n > 0, "must be positive"),
        Rule::with_message(|n: &i32| *n % 2 == 0, "must be even"),
        Rule::with_message(|n: &i32| *n < 100, "must be under 100"),
    ]
}

#[test]
fn a_passing_value_comes_back_as_success() {
    assert_eq!(all(4, &number_rules()), Outcome::success(4));
}

#[test]
fn every_violation_is_reported_in_rule_order() {
    let outcome = all(-3, &number_rules());

    let messages: Vec<_> = outcome.iter_messages().cloned().collect();
    assert_eq!(messages, vec!["must be positive", "must be even"]);
}

#[test]
fn a_single_violation_reports_only_its_own_message() {
    let outcome = all(150, &number_rules());

    let messages: Vec<_> = outcome.iter_messages().cloned().collect();
    assert_eq!(messages, vec!["must be under 100"]);
}

#[test]
fn an_empty_rule_slice_accepts_any_value() {
    let outcome = all(-3, &[]);
    assert_eq!(outcome, Outcome::success(-3));
}

#[test]
fn every_rule_runs_even_after_an_earlier_failure() {
    let calls = Rc::new(Cell::new(0));

    let counting = |calls: &Rc<Cell<i32>>| {
        let counter = Rc::clone(calls);
        move |_: &i32| {
            counter.set(counter.get() + 1);
            false
        }
    };

    let rules = [
        Rule::with_message(counting(&calls), "first"),
        Rule::with_message(counting(&calls), "second"),
        Rule::with_message(counting(&calls), "third"),
    ];

    let outcome = all(0, &rules);
    assert_eq!(calls.get(), 3);

    let messages: Vec<_> = outcome.iter_messages().cloned().collect();
    assert_eq!(messages, vec!["first", "second", "third"]);
}

#[test]
fn rules_observe_the_original_value_not_each_others_output() {
    let seen = Rc::new(Cell::new(None));

    let recorder = {
        let seen = Rc::clone(&seen);
        move |n: &i32| {
            seen.set(Some(*n));
            true
        }
    };

    let rules = [
        Rule::with_message(|n: &i32| *n > 0, "must be positive"),
        Rule::with_message(recorder, "unreachable"),
    ];

    let _ = all(-3, &rules);
    assert_eq!(seen.get(), Some(-3));
}

#[test]
fn validate_all_mirrors_the_free_function() {
    let rules = number_rules();

    assert!(4.validate_all(&rules).is_success());
    assert_eq!(
        (-3).validate_all(&rules),
        all(-3, &rules),
    );
}

#[test]
fn aggregation_works_over_owned_domain_types() {
    #[derive(Clone, Debug, PartialEq)]
    struct Signup {
        username: String,
        age: i32,
    }

    let rules = [
        Rule::with_message(|s: &Signup| !s.username.is_empty(), "username must not be empty"),
        Rule::with_message(|s: &Signup| s.age >= 18, "must be an adult"),
    ];

    let rejected = all(
        Signup {
            username: String::new(),
            age: 12,
        },
        &rules,
    );

    let messages: Vec<_> = rejected.iter_messages().cloned().collect();
    assert_eq!(messages, vec!["username must not be empty", "must be an adult"]);
}
