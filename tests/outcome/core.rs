use outcome_rail::{Messages, Outcome};
use std::cell::Cell;

#[test]
fn map_on_failure_keeps_messages_and_never_invokes_transform() {
    let calls = Cell::new(0);
    let mapped: Outcome<String> = Outcome::<i32>::failure_all(["a", "b"]).map(|x| {
        calls.set(calls.get() + 1);
        x.to_string()
    });

    assert_eq!(calls.get(), 0);
    let collected: Vec<_> = mapped.iter_messages().cloned().collect();
    assert_eq!(collected, vec!["a", "b"]);
}

#[test]
fn and_then_on_failure_keeps_messages_and_never_invokes_next() {
    let calls = Cell::new(0);
    let chained: Outcome<i32> = Outcome::<i32>::failure("error").and_then(|x| {
        calls.set(calls.get() + 1);
        Outcome::success(x * 2)
    });

    assert_eq!(calls.get(), 0);
    assert!(chained.is_failure());
}

#[test]
fn and_then_on_success_returns_the_next_outcome_directly() {
    let doubled = Outcome::success(4).and_then(|x| Outcome::success(x * 2));
    assert_eq!(doubled, Outcome::success(8));

    let rejected = Outcome::success(3).and_then(|_| Outcome::<i32>::failure("odd"));
    assert_eq!(rejected, Outcome::failure("odd"));
}

#[test]
fn concat_of_two_failures_appends_right_messages_after_left() {
    let merged = Outcome::<i32>::failure("a").concat(Outcome::failure("b"));
    assert_eq!(merged, Outcome::failure_all(["a", "b"]));
}

#[test]
fn concat_failure_with_success_discards_the_success() {
    let merged = Outcome::failure("a").concat(Outcome::success(7));
    assert_eq!(merged, Outcome::<i32>::failure("a"));
}

#[test]
fn concat_success_with_failure_yields_the_failure() {
    let merged = Outcome::success(7).concat(Outcome::failure("b"));
    assert_eq!(merged, Outcome::<i32>::failure("b"));
}

#[test]
fn concat_of_two_successes_keeps_the_later_value() {
    let merged = Outcome::success(1).concat(Outcome::success(2));
    assert_eq!(merged, Outcome::success(2));
}

#[test]
fn concat_is_associative_over_failures() {
    let left = Outcome::<i32>::failure("a")
        .concat(Outcome::failure("b"))
        .concat(Outcome::failure("c"));
    let right = Outcome::<i32>::failure("a")
        .concat(Outcome::failure("b").concat(Outcome::failure("c")));

    assert_eq!(left, right);
    assert_eq!(left, Outcome::failure_all(["a", "b", "c"]));
}

#[test]
fn inspect_runs_exactly_once_for_success_and_never_for_failure() {
    let calls = Cell::new(0);
    let outcome = Outcome::success(42)
        .inspect(|_| calls.set(calls.get() + 1))
        .map(|n| n + 1)
        .inspect(|n| assert_eq!(*n, 43));
    assert_eq!(calls.get(), 1);
    assert!(outcome.is_success());

    let calls = Cell::new(0);
    let outcome = Outcome::<i32>::failure("bad").inspect(|_| calls.set(calls.get() + 1));
    assert_eq!(calls.get(), 0);
    assert!(outcome.is_failure());
}

#[test]
fn inspect_failure_receives_the_full_message_sequence() {
    let seen = Cell::new(0);
    let outcome = Outcome::<i32>::failure_all(["a", "b"])
        .inspect_failure(|messages| seen.set(messages.len()));

    assert_eq!(seen.get(), 2);
    assert!(outcome.is_failure());

    let calls = Cell::new(0);
    let outcome = Outcome::success(1).inspect_failure(|_| calls.set(calls.get() + 1));
    assert_eq!(calls.get(), 0);
    assert!(outcome.is_success());
}

#[test]
fn unwrap_or_returns_value_for_success_and_default_for_failure() {
    assert_eq!(Outcome::success(42).unwrap_or(0), 42);
    assert_eq!(Outcome::<i32>::failure("error").unwrap_or(0), 0);
}

#[test]
fn unwrap_or_else_invokes_the_factory_only_for_failure() {
    let calls = Cell::new(0);
    let value = Outcome::success(42).unwrap_or_else(|| {
        calls.set(calls.get() + 1);
        0
    });
    assert_eq!(value, 42);
    assert_eq!(calls.get(), 0);

    let value = Outcome::<i32>::failure("error").unwrap_or_else(|| {
        calls.set(calls.get() + 1);
        7
    });
    assert_eq!(value, 7);
    assert_eq!(calls.get(), 1);
}

#[test]
fn ok_or_else_invokes_the_factory_only_for_failure() {
    let calls = Cell::new(0);
    let ok = Outcome::success(42).ok_or_else(|| {
        calls.set(calls.get() + 1);
        "rejected"
    });
    assert_eq!(ok, Ok(42));
    assert_eq!(calls.get(), 0);

    let err = Outcome::<i32>::failure_all(["a", "b"]).ok_or_else(|| {
        calls.set(calls.get() + 1);
        "rejected"
    });
    assert_eq!(err, Err("rejected"));
    assert_eq!(calls.get(), 1);
}

#[test]
fn to_result_preserves_all_messages() {
    let result = Outcome::<i32>::failure_all(["first", "second"]).to_result();
    assert_eq!(result.unwrap_err().len(), 2);

    assert_eq!(Outcome::success(42).to_result(), Ok(42));
}

#[test]
fn from_result_converts_a_single_error() {
    let ok = Outcome::from_result(Ok::<_, &str>(42));
    assert!(ok.is_success());

    let err = Outcome::from_result(Err::<i32, &str>("boom"));
    assert!(err.is_failure());
    assert_eq!(err.into_messages().unwrap()[0], "boom");
}

#[test]
fn into_value_and_into_messages_are_exclusive() {
    assert!(Outcome::success(42).into_messages().is_none());
    assert!(Outcome::<i32>::failure("error").into_value().is_none());
}

#[test]
#[should_panic(expected = "at least one message")]
fn failure_all_with_no_messages_panics() {
    let _ = Outcome::<i32>::failure_all::<[&str; 0]>([]);
}

#[test]
fn direct_failure_construction_goes_through_messages() {
    let outcome = Outcome::<i32>::Failure(Messages::new(["a", "b"]));
    assert_eq!(outcome.iter_messages().count(), 2);
}

#[cfg(feature = "serde")]
mod serde_support {
    use outcome_rail::Outcome;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, PartialEq, Debug)]
    struct TestData {
        id: i32,
    }

    #[test]
    fn outcome_round_trips_through_serde() {
        let success = Outcome::success(TestData { id: 1 });
        let serialized = serde_json::to_string(&success).unwrap();
        let deserialized: Outcome<TestData> = serde_json::from_str(&serialized).unwrap();
        assert_eq!(success, deserialized);

        let failure = Outcome::<TestData>::failure_all(["e1", "e2"]);
        let serialized = serde_json::to_string(&failure).unwrap();
        let deserialized: Outcome<TestData> = serde_json::from_str(&serialized).unwrap();
        assert_eq!(failure, deserialized);
    }

    #[test]
    fn deserializing_an_empty_failure_is_rejected() {
        let result: Result<Outcome<TestData>, _> =
            serde_json::from_str(r#"{"Failure":[]}"#);
        assert!(result.is_err());
    }
}
