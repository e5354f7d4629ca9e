//! Structured validation issues and their messages
//!
//! A rule never raises an error for bad input. It appends an [`Issue`] to the
//! dataset instead, recording what it expected and what it measured. The
//! human-readable text of an issue comes from a [`Message`], which is either
//! fixed text or a function of the issue itself.
//!
//! # Example
//!
//! ```rust
//! use tidemark::issue::Message;
//! use tidemark::rules::{min_lowercase, Rule};
//! use tidemark::Dataset;
//!
//! let rule = min_lowercase(5).with_message(Message::computed(|issue| {
//!     format!("need {} lowercase letters", issue.requirement.unwrap_or(0))
//! }));
//! let dataset = rule.check(Dataset::typed("foo"));
//! assert_eq!(dataset.issues[0].message, "need 5 lowercase letters");
//! ```

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// Family a rule belongs to.
///
/// Schemas establish the shape of a value; validations check a property of
/// an already-typed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Kind {
    /// Shape check, e.g. "is this text".
    Schema,
    /// Property check on a typed value.
    Validation,
}

impl Kind {
    /// Stable lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Schema => "schema",
            Kind::Validation => "validation",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why an issue was raised. Used in the default message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Reason {
    /// The value had the wrong shape.
    Type,
    /// The value's length was out of bounds.
    Length,
    /// A character count was out of bounds.
    Count,
}

impl Reason {
    /// Stable lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Reason::Type => "type",
            Reason::Length => "length",
            Reason::Count => "count",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One failed check.
///
/// Issues are created once and never mutated after they are appended to a
/// dataset.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Issue {
    /// Family of the rule that raised the issue.
    pub kind: Kind,
    /// Stable identifier of the rule, e.g. `min_lowercase`.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub rule_type: &'static str,
    /// The value under validation.
    pub input: Value,
    /// The rule's expectation, e.g. `>=5`.
    pub expected: Option<String>,
    /// Rendering of what was actually measured.
    pub received: String,
    /// Human-readable text.
    pub message: String,
    /// The rule's numeric threshold, if it has one.
    pub requirement: Option<usize>,
    /// Language the message was resolved for.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub lang: Option<String>,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

type MessageFn = dyn Fn(&Issue) -> String + Send + Sync;

/// Text of an issue: literal, or computed from the issue when it is raised.
///
/// Computed messages are only evaluated on the failure path.
#[derive(Clone)]
pub enum Message {
    /// Fixed text.
    Text(String),
    /// Function of the fully-built issue (its `message` field is still empty).
    Computed(Arc<MessageFn>),
}

impl Message {
    /// Wrap a closure as a computed message.
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&Issue) -> String + Send + Sync + 'static,
    {
        Message::Computed(Arc::new(f))
    }

    /// Produce the text for `issue`.
    pub fn resolve(&self, issue: &Issue) -> String {
        match self {
            Message::Text(text) => text.clone(),
            Message::Computed(f) => f(issue),
        }
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Message::Computed(_) => f.write_str("Computed(<fn>)"),
        }
    }
}

/// Computed messages compare by identity.
impl PartialEq for Message {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Message::Text(a), Message::Text(b)) => a == b,
            (Message::Computed(a), Message::Computed(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Message::Text(text.to_string())
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Message::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Issue {
        Issue {
            kind: Kind::Validation,
            rule_type: "min_numbers",
            input: Value::from("foo"),
            expected: Some(">=5".to_string()),
            received: "3".to_string(),
            message: String::new(),
            requirement: Some(5),
            lang: None,
        }
    }

    #[test]
    fn test_text_message_resolves_verbatim() {
        let message = Message::from("message");
        assert_eq!(message.resolve(&sample()), "message");
    }

    #[test]
    fn test_computed_message_sees_issue() {
        let message = Message::computed(|issue| format!("{} got {}", issue.rule_type, issue.received));
        assert_eq!(message.resolve(&sample()), "min_numbers got 3");
    }

    #[test]
    fn test_computed_messages_compare_by_identity() {
        let message = Message::computed(|_| "message".to_string());
        let same = message.clone();
        let other = Message::computed(|_| "message".to_string());
        assert_eq!(message, same);
        assert_ne!(message, other);
        assert_ne!(message, Message::from("message"));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Kind::Schema.to_string(), "schema");
        assert_eq!(Kind::Validation.to_string(), "validation");
        assert_eq!(Reason::Count.to_string(), "count");
        assert_eq!(Reason::Length.to_string(), "length");
        assert_eq!(Reason::Type.to_string(), "type");
    }

    #[test]
    fn test_debug_hides_closure() {
        let message = Message::computed(|_| String::new());
        assert_eq!(format!("{:?}", message), "Computed(<fn>)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_issue_serializes_type_field() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["type"], "min_numbers");
        assert_eq!(json["kind"], "validation");
        assert_eq!(json["expected"], ">=5");
        assert_eq!(json["received"], "3");
        assert_eq!(json["requirement"], 5);
        assert!(json.get("lang").is_none());
    }
}
