//! Ordered rule pipelines
//!
//! A [`Pipe`] threads one [`Dataset`] through a text schema followed by an
//! ordered list of [`Step`]s. A value that is not text stops the pipe right
//! after the schema; otherwise every step runs and issues accumulate, unless
//! the [`Config`] asks to abort at the first issue.
//!
//! # Example
//!
//! ```rust
//! use tidemark::pipe::Pipe;
//! use tidemark::rules::*;
//!
//! let username = Pipe::new(string())
//!     .pipe(min_length(3))
//!     .pipe(max_length(16))
//!     .pipe(max_repeating(2));
//!
//! assert_eq!(username.parse("tidemark").unwrap(), "tidemark");
//!
//! let issues = username.safe_parse("aaa").into_result().unwrap_err();
//! assert_eq!(issues.len(), 1);
//! assert_eq!(issues[0].rule_type, "max_repeating");
//! ```

use std::error::Error as StdError;
use std::fmt;

use serde_json::Value;

use crate::config::Config;
use crate::dataset::Dataset;
use crate::issue::Issue;
use crate::rules::{Descriptor, Rule, Step, StringSchema};
use crate::Validation;

/// A text schema followed by ordered validation steps.
#[derive(Debug, Clone)]
pub struct Pipe {
    schema: StringSchema,
    steps: Vec<Step>,
}

impl Pipe {
    /// Start a pipe from its root schema.
    pub fn new(schema: StringSchema) -> Self {
        Self {
            schema,
            steps: Vec::new(),
        }
    }

    /// Append a step.
    pub fn pipe(mut self, step: impl Into<Step>) -> Self {
        self.steps.push(step.into());
        self
    }

    /// The root schema.
    pub fn schema(&self) -> &StringSchema {
        &self.schema
    }

    /// The steps after the schema, in execution order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Validate `input` with the default configuration.
    pub fn safe_parse(&self, input: impl Into<Value>) -> Validation<String, Vec<Issue>> {
        self.safe_parse_with(input, &Config::default())
    }

    /// Validate `input`, returning the text or every issue raised.
    pub fn safe_parse_with(
        &self,
        input: impl Into<Value>,
        config: &Config,
    ) -> Validation<String, Vec<Issue>> {
        self.run(Dataset::new(input), config).into_validation()
    }

    /// Validate `input` with the default configuration.
    pub fn parse(&self, input: impl Into<Value>) -> Result<String, ParseError> {
        self.parse_with(input, &Config::default())
    }

    /// Validate `input`, failing with a [`ParseError`] carrying every issue.
    pub fn parse_with(&self, input: impl Into<Value>, config: &Config) -> Result<String, ParseError> {
        self.safe_parse_with(input, config)
            .into_result()
            .map_err(ParseError::new)
    }

    /// Whether `input` passes every step.
    pub fn is_valid(&self, input: impl Into<Value>) -> bool {
        self.safe_parse(input).is_success()
    }
}

impl Rule for Pipe {
    fn descriptor(&self) -> &Descriptor {
        self.schema.descriptor()
    }

    fn run(&self, dataset: Dataset, config: &Config) -> Dataset {
        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!("pipe", steps = self.steps.len()).entered();

        let mut dataset = self.schema.run(dataset, config);
        if !dataset.typed {
            return dataset;
        }

        for step in &self.steps {
            if dataset.is_failed() && config.aborts_pipe() {
                break;
            }
            dataset = step.run(dataset, config);
        }

        dataset
    }
}

/// Returned by [`Pipe::parse`] when the input fails validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    issues: Vec<Issue>,
}

impl ParseError {
    /// Wrap the issues of a failed run.
    pub fn new(issues: Vec<Issue>) -> Self {
        Self { issues }
    }

    /// Every issue, in the order raised.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Take the issues.
    pub fn into_issues(self) -> Vec<Issue> {
        self.issues
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.issues.first() {
            Some(issue) => write!(f, "{}", issue.message),
            None => write!(f, "validation failed"),
        }
    }
}

impl StdError for ParseError {}
