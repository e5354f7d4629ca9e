//! Maximum run of one repeated character
//!
//! A run is a stretch of the same UTF-16 code unit repeated back to back.
//! The rule fails when some run is longer than the requirement, i.e. when a
//! unit is immediately followed by `requirement` or more copies of itself.
//! Line terminators never form runs.

use super::{add_issue, Descriptor, Rule};
use crate::config::Config;
use crate::dataset::Dataset;
use crate::issue::{Message, Reason};

/// No character repeated more than `requirement` times in a row.
#[derive(Debug, Clone)]
pub struct MaxRepeating {
    descriptor: Descriptor,
    requirement: usize,
}

impl MaxRepeating {
    /// Requirement used by [`Default`].
    pub const DEFAULT_REQUIREMENT: usize = 2;

    /// Allow runs of at most `requirement` identical characters.
    pub fn new(requirement: usize) -> Self {
        Self {
            descriptor: Descriptor::validation(
                "max_repeating",
                format!("<={}", requirement),
                requirement,
            ),
            requirement,
        }
    }

    /// Attach a message override.
    pub fn with_message(mut self, message: impl Into<Message>) -> Self {
        self.descriptor.message = Some(message.into());
        self
    }

    /// The threshold.
    pub fn requirement(&self) -> usize {
        self.requirement
    }
}

impl Default for MaxRepeating {
    fn default() -> Self {
        Self::new(Self::DEFAULT_REQUIREMENT)
    }
}

impl Rule for MaxRepeating {
    fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    fn run(&self, mut dataset: Dataset, config: &Config) -> Dataset {
        let longest = match dataset.typed_text() {
            Some(text) => longest_run(text),
            None => return dataset,
        };
        if longest > self.requirement {
            add_issue(
                &self.descriptor,
                Reason::Count,
                &mut dataset,
                config,
                longest.to_string(),
            );
        }
        dataset
    }
}

// \n, \r, U+2028, U+2029
fn is_line_terminator(unit: u16) -> bool {
    matches!(unit, 0x000A | 0x000D | 0x2028 | 0x2029)
}

/// Length of the longest run of one repeated UTF-16 code unit in `text`.
///
/// Runs are measured per unit, so a repeated character outside the Basic
/// Multilingual Plane never forms a run: its surrogates alternate.
///
/// # Example
///
/// ```rust
/// use tidemark::rules::longest_run;
///
/// assert_eq!(longest_run(""), 0);
/// assert_eq!(longest_run("abc"), 1);
/// assert_eq!(longest_run("foooooobarbaz123"), 6);
/// assert_eq!(longest_run("\n\n\n"), 0);
/// assert_eq!(longest_run("🙂🙂"), 1);
/// ```
pub fn longest_run(text: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut previous = None;

    for unit in text.encode_utf16() {
        if is_line_terminator(unit) {
            previous = None;
            current = 0;
            continue;
        }
        if previous == Some(unit) {
            current += 1;
        } else {
            previous = Some(unit);
            current = 1;
        }
        longest = longest.max(current);
    }

    longest
}

/// Create a rule allowing runs of at most `requirement` identical characters.
///
/// # Example
///
/// ```rust
/// use tidemark::rules::*;
/// use tidemark::Dataset;
///
/// let dataset = max_repeating(5).check(Dataset::typed("aaaaaa"));
/// assert_eq!(dataset.issues[0].received, "6");
/// assert!(max_repeating(5).check(Dataset::typed("aaaaa")).issues.is_empty());
/// ```
pub fn max_repeating(requirement: usize) -> MaxRepeating {
    MaxRepeating::new(requirement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::{Issue, Kind};
    use crate::testing::{expect_issue, expect_no_issue};
    use serde_json::Value;

    #[test]
    fn test_default_requirement() {
        let rule = MaxRepeating::default();
        assert_eq!(rule.requirement(), 2);
        assert_eq!(rule.descriptor().expects, "<=2");
        assert!(rule.check(Dataset::typed("aabbcc")).issues.is_empty());
        assert_eq!(rule.check(Dataset::typed("aaa")).issues.len(), 1);
    }

    #[test]
    fn test_valid_strings() {
        expect_no_issue(&max_repeating(5), &["", "foo", "fooooo", "aaabacadae"]);
    }

    #[test]
    fn test_invalid_strings() {
        let base = Issue {
            kind: Kind::Validation,
            rule_type: "max_repeating",
            input: Value::Null,
            expected: Some("<=5".to_string()),
            received: String::new(),
            message: "message".to_string(),
            requirement: Some(5),
            lang: None,
        };
        expect_issue(
            &max_repeating(5).with_message("message"),
            &base,
            &["aaaaaa", "foooooobarbaz123"],
            |value| longest_run(value).to_string(),
        );
    }

    #[test]
    fn test_received_is_longest_run() {
        let dataset = max_repeating(2).check(Dataset::typed("aaab11111"));
        assert_eq!(dataset.issues.len(), 1);
        assert_eq!(dataset.issues[0].received, "5");
    }

    #[test]
    fn test_zero_requirement_rejects_any_character() {
        assert_eq!(max_repeating(0).check(Dataset::typed("a")).issues.len(), 1);
        assert!(max_repeating(0).check(Dataset::typed("")).issues.is_empty());
    }

    #[test]
    fn test_line_terminators_break_runs() {
        assert_eq!(longest_run("aa\naa"), 2);
        assert!(max_repeating(1).check(Dataset::typed("\n\n\r\r")).issues.is_empty());
    }

    #[test]
    fn test_multibyte_runs() {
        assert_eq!(longest_run("ééé"), 3);
        assert_eq!(longest_run("🙂🙂x"), 1);
        assert!(max_repeating(1).check(Dataset::typed("🙂🙂")).issues.is_empty());
        assert_eq!(max_repeating(1).check(Dataset::typed("éé")).issues.len(), 1);
    }

    #[test]
    fn test_untyped_passes_through() {
        let dataset = Dataset::new(Value::from(3));
        assert_eq!(max_repeating(0).check(dataset.clone()), dataset);
    }
}
