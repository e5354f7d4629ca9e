//! Testing utilities for rules and pipes
//!
//! Assertion macros for [`Validation`](crate::Validation) results, and
//! helpers that run a rule over a list of strings and check the produced
//! issues.
//!
//! # Examples
//!
//! ```rust
//! use tidemark::password::password;
//! use tidemark::{assert_failure, assert_success};
//!
//! assert_success!(password().safe_parse("aBCdEF1!"));
//! assert_failure!(password().safe_parse("aB1!"));
//! ```
//!
//! ```rust
//! use tidemark::rules::min_numbers;
//! use tidemark::testing::expect_no_issue;
//!
//! expect_no_issue(&min_numbers(2), &["12", "a1b2"]);
//! ```

use serde_json::Value;

use crate::dataset::Dataset;
use crate::issue::Issue;
use crate::rules::Rule;

/// Assert that a validation succeeds.
///
/// Panics with the accumulated errors if the validation is a `Failure`.
#[macro_export]
macro_rules! assert_success {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Success(_) => {}
            $crate::Validation::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that a validation fails.
///
/// Panics with the value if the validation is a `Success`.
#[macro_export]
macro_rules! assert_failure {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Failure(_) => {}
            $crate::Validation::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that `rule` raises no issue for any of `values`.
///
/// Each value is wrapped in a typed dataset; the rule must hand it back
/// unchanged.
pub fn expect_no_issue<R: Rule + ?Sized>(rule: &R, values: &[&str]) {
    for value in values {
        let dataset = Dataset::typed(*value);
        assert_eq!(
            rule.check(dataset.clone()),
            dataset,
            "expected no issue for {:?}",
            value
        );
    }
}

/// Assert that `rule` raises exactly one issue for each of `values`.
///
/// The expected issue is `base` with `input` set to the value and `received`
/// computed by `received`.
pub fn expect_issue<R, F>(rule: &R, base: &Issue, values: &[&str], received: F)
where
    R: Rule + ?Sized,
    F: Fn(&str) -> String,
{
    for value in values {
        let expected = Issue {
            input: Value::from(*value),
            received: received(*value),
            ..base.clone()
        };
        let dataset = rule.check(Dataset::typed(*value));
        assert_eq!(
            dataset.issues,
            vec![expected],
            "unexpected issues for {:?}",
            value
        );
        assert!(dataset.typed, "validation issues must not untype {:?}", value);
    }
}
