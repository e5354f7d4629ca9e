//! The value-plus-metadata container threaded through rules
//!
//! A [`Dataset`] starts out untyped at the entry of a pipe. The text schema
//! marks it typed when the value is a string; validation rules only look at
//! typed datasets and append at most one issue each.

use serde_json::Value;

use crate::issue::Issue;
use crate::Validation;

/// Subject of a validation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// The value being validated.
    pub value: Value,
    /// Whether every check so far agrees the value has the expected shape.
    pub typed: bool,
    /// Issues recorded so far, in the order they were raised.
    pub issues: Vec<Issue>,
}

impl Dataset {
    /// An untyped dataset, as created at the entry of a pipe.
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            typed: false,
            issues: Vec::new(),
        }
    }

    /// A dataset already known to have the expected shape.
    pub fn typed(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            typed: true,
            issues: Vec::new(),
        }
    }

    /// Attach previously recorded issues.
    pub fn with_issues(mut self, issues: Vec<Issue>) -> Self {
        self.issues = issues;
        self
    }

    /// The text under validation, if the dataset is typed and holds text.
    ///
    /// This is the typed-guard every validation rule applies before
    /// measuring anything.
    pub fn typed_text(&self) -> Option<&str> {
        if self.typed {
            self.value.as_str()
        } else {
            None
        }
    }

    /// Whether any issue has been recorded.
    pub fn is_failed(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Typed and free of issues.
    pub fn is_success(&self) -> bool {
        self.typed && self.issues.is_empty()
    }

    /// Convert into the parsed text or the accumulated issues.
    pub fn into_validation(self) -> Validation<String, Vec<Issue>> {
        if !self.is_success() {
            return Validation::failure(self.issues);
        }
        match self.value {
            Value::String(text) => Validation::success(text),
            _ => Validation::failure(self.issues),
        }
    }
}

/// Render a value the way issues report received shapes.
///
/// Strings are quoted; arrays and objects are named, not dumped.
pub fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(_) => "Array".to_string(),
        Value::Object(_) => "Object".to_string(),
    }
}
