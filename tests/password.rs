//! End-to-end checks of the password policy.

use tidemark::password::{password, password_with, PasswordOptions};
use tidemark::prelude::*;
use tidemark::{assert_failure, assert_success};

const EXACTLY_250: &str = concat!(
    "Eed7reeve1aiWoo9yoh7aet1vooVeighi7eicho3leicahweim",
    "eengo4quoo1Chei3aBei0Shaxei0aivei2euNgaiz1eiri6jae",
    "0af9aighai5eel3chohc1thaeyeisuangooghingohkahr9Giu",
    "cisiu2neelaiY3meek8aTheith3Ta6eighiehei2ahtheeQuee",
    "7zuth5te0Ahthaitaequae5ahghairai6Fiu0aisiet9kilad!",
);

fn rule_types(issues: &[Issue]) -> Vec<&'static str> {
    issues.iter().map(|issue| issue.rule_type).collect()
}

#[test]
fn requires_at_least_8_characters() {
    assert!(password().parse("aB1!").is_err());
    assert!(password().parse("aBCdEF1!").is_ok());
    assert!(password().parse("has MORE 123 !!").is_ok());
}

#[test]
fn requires_at_most_250_characters() {
    assert_eq!(EXACTLY_250.chars().count(), 250);
    assert!(password().parse(EXACTLY_250).is_ok());

    let too_long = format!("{}extra", EXACTLY_250);
    let err = password().parse(too_long).unwrap_err();
    assert_eq!(rule_types(err.issues()), vec!["max_length"]);
    assert_eq!(err.issues()[0].received, "255");
}

#[test]
fn length_is_measured_in_utf16_units() {
    // six characters, eight units
    assert!(password().is_valid("aB1!😀😀"));
    // a doubled astral character is not a run
    assert!(password_with(PasswordOptions::new().min(4))
        .pipe(max_repeating(1))
        .is_valid("aB1🙂🙂"));

    let err = password().parse("aB1😀").unwrap_err();
    assert_eq!(rule_types(err.issues()), vec!["min_length"]);
    assert_eq!(err.issues()[0].received, "5");
}

#[test]
fn requires_a_lowercase_letter() {
    assert!(password().parse("NO LOWERCASE 12 !").is_err());
    assert!(password().parse("HAS oNE 12 !").is_ok());
    assert!(password().parse("HAS more 12 !").is_ok());
}

#[test]
fn requires_an_uppercase_letter() {
    assert!(password().parse("no uppercase 12 !").is_err());
    assert!(password().parse("has One 12 !").is_ok());
    assert!(password().parse("has MORE 12 !").is_ok());
}

#[test]
fn requires_a_number() {
    assert!(password().parse("no NUMBER !").is_err());
    assert!(password().parse("has ONE 1 !").is_ok());
    assert!(password().parse("has MORE 12 !").is_ok());
}

#[test]
fn requires_a_symbol() {
    assert!(password().parse("no SYMBOL 12").is_err());
    assert!(password().parse("has ONE 12 !").is_ok());
    assert!(password().parse("has MORE 12 !!").is_ok());
}

#[test]
fn supports_user_supplied_overrides() {
    assert!(password_with(PasswordOptions::new().min(6)).parse("aBcD1!").is_ok());
    assert!(password_with(PasswordOptions::new().max(10)).parse("aBcDeFg1!").is_ok());
    assert!(password_with(PasswordOptions::new().lowercase(2)).parse("hAS LESS 1!").is_err());
    assert!(password_with(PasswordOptions::new().uppercase(2)).parse("has Less 1!").is_err());
    assert!(password_with(PasswordOptions::new().numbers(3)).parse("has LESS 12!").is_err());
    assert!(password_with(PasswordOptions::new().symbols(2)).parse("has LESS 123!").is_err());
}

#[test]
fn reports_every_violated_requirement() {
    let issues = password().safe_parse("").into_result().unwrap_err();
    assert_eq!(
        rule_types(&issues),
        vec![
            "min_length",
            "min_lowercase",
            "min_uppercase",
            "min_numbers",
            "min_symbols"
        ]
    );
    assert!(issues.iter().all(|issue| issue.received == "0"));
}

#[test]
fn non_text_input_reports_only_the_type() {
    let issues = password()
        .safe_parse(serde_json::json!(12345678))
        .into_result()
        .unwrap_err();
    assert_eq!(rule_types(&issues), vec!["string"]);
    assert_eq!(issues[0].kind, Kind::Schema);
    assert_eq!(issues[0].received, "12345678");
}

#[test]
fn messages_follow_the_config() {
    let config = Config::new()
        .with_lang("de")
        .with_messages(
            MessageCatalog::new()
                .with_specific_for("min_symbols", "de", "Sonderzeichen fehlt")
                .with_global_for("de", Message::computed(|issue| {
                    format!("{} verletzt", issue.rule_type)
                })),
        );
    let issues = password()
        .safe_parse_with("nosymbolHere1", &config)
        .into_result()
        .unwrap_err();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].message, "Sonderzeichen fehlt");

    let issues = password()
        .safe_parse_with("Short1!", &config)
        .into_result()
        .unwrap_err();
    assert_eq!(issues[0].message, "min_length verletzt");
}

#[test]
fn independent_parses_accumulate() {
    let both = password()
        .safe_parse("aB1!")
        .and(password().safe_parse("NO LOWERCASE 12 !"));
    match both {
        Validation::Failure(issues) => {
            assert_eq!(rule_types(&issues), vec!["min_length", "min_lowercase"]);
        }
        Validation::Success(_) => panic!("expected failure"),
    }

    assert_success!(password()
        .safe_parse("aBCdEF1!")
        .and(password().safe_parse("has MORE 123 !!")));
    assert_failure!(Validation::all_vec(vec![
        password().safe_parse("aBCdEF1!"),
        password().safe_parse("aB1!"),
    ]));
}

#[test]
fn policy_is_shareable_across_threads() {
    let policy = std::sync::Arc::new(password());
    let handles: Vec<_> = ["aBCdEF1!", "aB1!", "has MORE 123 !!", "no SYMBOL 12"]
        .into_iter()
        .map(|input| {
            let policy = std::sync::Arc::clone(&policy);
            std::thread::spawn(move || policy.is_valid(input))
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![true, false, true, false]);
}
