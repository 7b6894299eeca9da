use outcome_rail::rules::{all, Rule};
use outcome_rail::Outcome;

#[derive(Clone, Debug)]
struct Signup {
    username: String,
    email: String,
    age: i32,
}

fn signup_rules() -> Vec<Rule<Signup>> {
    vec![
        Rule::with_message(
            |s: &Signup| !s.username.is_empty(),
            "username must not be empty",
        ),
        Rule::new(
            |s: &Signup| s.email.contains('@'),
            |s| format!("{:?} is not an email address", s.email),
        ),
        Rule::with_message(|s: &Signup| s.age >= 18, "must be an adult"),
    ]
}

fn main() {
    let candidates = [
        Signup {
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            age: 36,
        },
        Signup {
            username: String::new(),
            email: "nope".to_string(),
            age: 12,
        },
    ];

    let rules = signup_rules();

    for candidate in candidates {
        match all(candidate, &rules) {
            Outcome::Success(signup) => println!("welcome, {}", signup.username),
            Outcome::Failure(messages) => {
                println!("signup rejected:");
                for message in &messages {
                    println!("  - {message}");
                }
            }
        }
    }
}
