use outcome_rail::prelude::*;

fn main() {
    let checks = rules![
        |n: &i32| *n > 0 => "must be positive",
        |n: &i32| *n % 2 == 0 => "must be even",
        |n: &i32| *n < 100 => "must be under 100",
    ];

    for candidate in [4, -3, 150] {
        let _ = all(candidate, &checks)
            .inspect(|n| println!("{n} accepted"))
            .inspect_failure(|messages| println!("{candidate} rejected: {messages}"));
    }
}
