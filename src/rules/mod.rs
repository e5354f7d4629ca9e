//! Validation rules over text
//!
//! Every rule carries an immutable [`Descriptor`] and implements [`Rule`]:
//! given a [`Dataset`] it either passes it through untouched or appends
//! exactly one [`Issue`](crate::issue::Issue) describing what it expected and
//! what it measured. Rules never panic or return errors for bad input.
//!
//! # Example
//!
//! ```rust
//! use tidemark::rules::*;
//! use tidemark::Dataset;
//!
//! let rule = min_lowercase(5).with_message("message");
//! let dataset = rule.check(Dataset::typed("foo"));
//!
//! let issue = &dataset.issues[0];
//! assert_eq!(issue.rule_type, "min_lowercase");
//! assert_eq!(issue.expected.as_deref(), Some(">=5"));
//! assert_eq!(issue.received, "3");
//! assert_eq!(issue.message, "message");
//! ```
//!
//! Untyped datasets pass through every validation rule unchanged:
//!
//! ```rust
//! use tidemark::rules::*;
//! use tidemark::Dataset;
//!
//! let dataset = Dataset::new(serde_json::Value::Null);
//! assert_eq!(max_repeating(0).check(dataset.clone()), dataset);
//! ```

mod count;
mod length;
mod max_repeating;
mod string;

use std::fmt;
use std::sync::Arc;

use crate::config::Config;
use crate::dataset::Dataset;
use crate::issue::{Issue, Kind, Message, Reason};

pub use count::{
    min_lowercase, min_numbers, min_symbols, min_uppercase, CharClass, Digit, Lowercase,
    MinCount, MinLowercase, MinNumbers, MinSymbols, MinUppercase, Symbol, Uppercase,
};
pub use length::{max_length, min_length, MaxLength, MinLength};
pub use max_repeating::{longest_run, max_repeating, MaxRepeating};
pub use string::{string, StringSchema};

/// Length of `text` in UTF-16 code units.
///
/// Every length and count the rules report uses this unit, so a character
/// outside the Basic Multilingual Plane such as `😀` measures 2.
///
/// ```rust
/// use tidemark::rules::text_length;
///
/// assert_eq!(text_length("abc"), 3);
/// assert_eq!(text_length("é"), 1);
/// assert_eq!(text_length("a😀"), 3);
/// ```
pub fn text_length(text: &str) -> usize {
    text.encode_utf16().count()
}

/// What a rule is, fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Descriptor {
    /// Schema or validation.
    pub kind: Kind,
    /// Stable identifier unique per rule family.
    pub rule_type: &'static str,
    /// Expectation text, e.g. `>=1` or `<=2`.
    pub expects: String,
    /// Numeric threshold, for rules that have one.
    pub requirement: Option<usize>,
    /// Message override, consulted only when an issue is raised.
    pub message: Option<Message>,
}

impl Descriptor {
    /// Descriptor of a validation rule with a threshold.
    pub fn validation(rule_type: &'static str, expects: String, requirement: usize) -> Self {
        Self {
            kind: Kind::Validation,
            rule_type,
            expects,
            requirement: Some(requirement),
            message: None,
        }
    }
}

/// A single validation unit.
///
/// Implementations hold no mutable state, so one instance may be shared
/// across threads and run against independent datasets.
pub trait Rule: Send + Sync + fmt::Debug {
    /// The rule's descriptor.
    fn descriptor(&self) -> &Descriptor;

    /// Run the rule against `dataset` and hand it back.
    fn run(&self, dataset: Dataset, config: &Config) -> Dataset;

    /// Run with the default configuration.
    fn check(&self, dataset: Dataset) -> Dataset {
        self.run(dataset, &Config::default())
    }
}

/// Build an issue for `descriptor` and append it to `dataset`.
///
/// The message is resolved here, so computed messages only ever run on the
/// failure path. An issue identical in rule type, expectation and received
/// value to one already on the dataset is not appended again, so re-running
/// a step is a no-op.
pub fn add_issue(
    descriptor: &Descriptor,
    reason: Reason,
    dataset: &mut Dataset,
    config: &Config,
    received: String,
) {
    let duplicate = dataset.issues.iter().any(|issue| {
        issue.kind == descriptor.kind
            && issue.rule_type == descriptor.rule_type
            && issue.expected.as_deref() == Some(descriptor.expects.as_str())
            && issue.received == received
    });
    if duplicate {
        return;
    }

    let mut issue = Issue {
        kind: descriptor.kind,
        rule_type: descriptor.rule_type,
        input: dataset.value.clone(),
        expected: Some(descriptor.expects.clone()),
        received,
        message: String::new(),
        requirement: descriptor.requirement,
        lang: config.lang.clone(),
    };
    issue.message = config.message_for(descriptor.message.as_ref(), reason, &issue);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        rule = issue.rule_type,
        expected = %descriptor.expects,
        received = %issue.received,
        "validation issue recorded"
    );

    dataset.issues.push(issue);
}

/// One step of a [`Pipe`](crate::pipe::Pipe).
///
/// The built-in rules are a closed set dispatched by `match`; anything else
/// goes through [`Step::Custom`].
#[derive(Debug, Clone)]
pub enum Step {
    /// See [`MinLength`].
    MinLength(MinLength),
    /// See [`MaxLength`].
    MaxLength(MaxLength),
    /// See [`MinLowercase`].
    MinLowercase(MinLowercase),
    /// See [`MinUppercase`].
    MinUppercase(MinUppercase),
    /// See [`MinNumbers`].
    MinNumbers(MinNumbers),
    /// See [`MinSymbols`].
    MinSymbols(MinSymbols),
    /// See [`MaxRepeating`].
    MaxRepeating(MaxRepeating),
    /// A user-supplied rule.
    Custom(Arc<dyn Rule>),
}

impl Step {
    /// Register a user-supplied rule as a step.
    pub fn custom(rule: impl Rule + 'static) -> Self {
        Step::Custom(Arc::new(rule))
    }

    fn as_rule(&self) -> &dyn Rule {
        match self {
            Step::MinLength(rule) => rule,
            Step::MaxLength(rule) => rule,
            Step::MinLowercase(rule) => rule,
            Step::MinUppercase(rule) => rule,
            Step::MinNumbers(rule) => rule,
            Step::MinSymbols(rule) => rule,
            Step::MaxRepeating(rule) => rule,
            Step::Custom(rule) => rule.as_ref(),
        }
    }
}

impl Rule for Step {
    fn descriptor(&self) -> &Descriptor {
        self.as_rule().descriptor()
    }

    fn run(&self, dataset: Dataset, config: &Config) -> Dataset {
        self.as_rule().run(dataset, config)
    }
}

macro_rules! impl_into_step {
    ($($variant:ident),+) => {
        $(
            impl From<$variant> for Step {
                fn from(rule: $variant) -> Self {
                    Step::$variant(rule)
                }
            }
        )+
    };
}

impl_into_step!(
    MinLength,
    MaxLength,
    MinLowercase,
    MinUppercase,
    MinNumbers,
    MinSymbols,
    MaxRepeating
);

impl From<Arc<dyn Rule>> for Step {
    fn from(rule: Arc<dyn Rule>) -> Self {
        Step::Custom(rule)
    }
}
