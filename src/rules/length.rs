//! Length bounds
//!
//! Lengths are counted in UTF-16 code units, not bytes or characters; see
//! [`text_length`](super::text_length).

use super::{add_issue, text_length, Descriptor, Rule};
use crate::config::Config;
use crate::dataset::Dataset;
use crate::issue::{Message, Reason};

/// At least `requirement` UTF-16 code units.
#[derive(Debug, Clone)]
pub struct MinLength {
    descriptor: Descriptor,
    requirement: usize,
}

impl MinLength {
    /// Require at least `requirement` characters.
    pub fn new(requirement: usize) -> Self {
        Self {
            descriptor: Descriptor::validation(
                "min_length",
                format!(">={}", requirement),
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

impl Rule for MinLength {
    fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    fn run(&self, mut dataset: Dataset, config: &Config) -> Dataset {
        let length = match dataset.typed_text() {
            Some(text) => text_length(text),
            None => return dataset,
        };
        if length < self.requirement {
            add_issue(
                &self.descriptor,
                Reason::Length,
                &mut dataset,
                config,
                length.to_string(),
            );
        }
        dataset
    }
}

/// At most `requirement` UTF-16 code units.
#[derive(Debug, Clone)]
pub struct MaxLength {
    descriptor: Descriptor,
    requirement: usize,
}

impl MaxLength {
    /// Allow at most `requirement` characters.
    pub fn new(requirement: usize) -> Self {
        Self {
            descriptor: Descriptor::validation(
                "max_length",
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

impl Rule for MaxLength {
    fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    fn run(&self, mut dataset: Dataset, config: &Config) -> Dataset {
        let length = match dataset.typed_text() {
            Some(text) => text_length(text),
            None => return dataset,
        };
        if length > self.requirement {
            add_issue(
                &self.descriptor,
                Reason::Length,
                &mut dataset,
                config,
                length.to_string(),
            );
        }
        dataset
    }
}

/// Create a rule requiring at least `requirement` characters.
///
/// # Example
///
/// ```rust
/// use tidemark::rules::*;
/// use tidemark::Dataset;
///
/// assert!(min_length(3).check(Dataset::typed("abc")).issues.is_empty());
/// assert_eq!(min_length(3).check(Dataset::typed("ab")).issues[0].received, "2");
/// ```
pub fn min_length(requirement: usize) -> MinLength {
    MinLength::new(requirement)
}

/// Create a rule allowing at most `requirement` characters.
pub fn max_length(requirement: usize) -> MaxLength {
    MaxLength::new(requirement)
}
