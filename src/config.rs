//! Run configuration and message resolution
//!
//! A [`Config`] is passed by reference to every rule invocation. It carries
//! the language tag copied onto issues, the abort switches honoured by
//! [`Pipe`](crate::pipe::Pipe), and the message fallbacks consulted when a
//! rule has no message of its own.
//!
//! # Example
//!
//! ```rust
//! use tidemark::config::{Config, MessageCatalog};
//! use tidemark::password::password;
//!
//! let messages = MessageCatalog::new()
//!     .with_specific("min_length", "Mot de passe trop court")
//!     .with_global_for("fr", "Valeur invalide");
//! let config = Config::new().with_lang("fr").with_messages(messages);
//!
//! let issues = password().safe_parse_with("aB1!", &config).into_result().unwrap_err();
//! assert_eq!(issues[0].message, "Mot de passe trop court");
//! assert_eq!(issues[0].lang.as_deref(), Some("fr"));
//! ```

use std::collections::HashMap;

use crate::issue::{Issue, Kind, Message, Reason};

/// Messages looked up when a rule carries no message of its own.
///
/// Every table is keyed by an optional language; language-specific entries
/// win over language-neutral ones.
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    specific: HashMap<(&'static str, Option<String>), Message>,
    schema: HashMap<Option<String>, Message>,
    global: HashMap<Option<String>, Message>,
}

impl MessageCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Message for every issue raised by rules of `rule_type`.
    pub fn with_specific(mut self, rule_type: &'static str, message: impl Into<Message>) -> Self {
        self.specific.insert((rule_type, None), message.into());
        self
    }

    /// Message for issues raised by rules of `rule_type` under `lang`.
    pub fn with_specific_for(
        mut self,
        rule_type: &'static str,
        lang: impl Into<String>,
        message: impl Into<Message>,
    ) -> Self {
        self.specific
            .insert((rule_type, Some(lang.into())), message.into());
        self
    }

    /// Message for every schema (shape) issue.
    pub fn with_schema(mut self, message: impl Into<Message>) -> Self {
        self.schema.insert(None, message.into());
        self
    }

    /// Message for schema issues under `lang`.
    pub fn with_schema_for(mut self, lang: impl Into<String>, message: impl Into<Message>) -> Self {
        self.schema.insert(Some(lang.into()), message.into());
        self
    }

    /// Last-resort message for every issue.
    pub fn with_global(mut self, message: impl Into<Message>) -> Self {
        self.global.insert(None, message.into());
        self
    }

    /// Last-resort message under `lang`.
    pub fn with_global_for(mut self, lang: impl Into<String>, message: impl Into<Message>) -> Self {
        self.global.insert(Some(lang.into()), message.into());
        self
    }

    /// Look up the message for `rule_type`.
    pub fn specific(&self, rule_type: &'static str, lang: Option<&str>) -> Option<&Message> {
        lang.and_then(|lang| self.specific.get(&(rule_type, Some(lang.to_string()))))
            .or_else(|| self.specific.get(&(rule_type, None)))
    }

    /// Look up the schema message.
    pub fn schema(&self, lang: Option<&str>) -> Option<&Message> {
        lookup(&self.schema, lang)
    }

    /// Look up the global message.
    pub fn global(&self, lang: Option<&str>) -> Option<&Message> {
        lookup(&self.global, lang)
    }
}

fn lookup<'a>(table: &'a HashMap<Option<String>, Message>, lang: Option<&str>) -> Option<&'a Message> {
    lang.and_then(|lang| table.get(&Some(lang.to_string())))
        .or_else(|| table.get(&None))
}

/// Settings shared by every rule during one run.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Language tag copied onto issues and used for catalog lookups.
    pub lang: Option<String>,
    /// Message used when neither the rule nor the catalog supplies one.
    pub message: Option<Message>,
    /// Stop a pipe at the first issue.
    pub abort_early: bool,
    /// Stop the steps of a pipe at the first issue.
    pub abort_pipe_early: bool,
    /// Fallback messages.
    pub messages: MessageCatalog,
}

impl Config {
    /// Create a configuration with everything off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the language tag.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    /// Set the configuration-level message.
    pub fn with_message(mut self, message: impl Into<Message>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Stop at the first issue.
    pub fn with_abort_early(mut self, abort: bool) -> Self {
        self.abort_early = abort;
        self
    }

    /// Stop the pipe's steps at the first issue.
    pub fn with_abort_pipe_early(mut self, abort: bool) -> Self {
        self.abort_pipe_early = abort;
        self
    }

    /// Replace the message catalog.
    pub fn with_messages(mut self, messages: MessageCatalog) -> Self {
        self.messages = messages;
        self
    }

    /// Whether a pipe should stop once the dataset carries an issue.
    pub fn aborts_pipe(&self) -> bool {
        self.abort_early || self.abort_pipe_early
    }

    /// Resolve the text of `issue`.
    ///
    /// Order: the rule's own message, the catalog's rule-specific entry, the
    /// catalog's schema entry (schema issues only), this config's message,
    /// the catalog's global entry, then the built-in default.
    pub fn message_for(&self, own: Option<&Message>, reason: Reason, issue: &Issue) -> String {
        let lang = issue.lang.as_deref();
        let schema = match issue.kind {
            Kind::Schema => self.messages.schema(lang),
            Kind::Validation => None,
        };

        own.or_else(|| self.messages.specific(issue.rule_type, lang))
            .or(schema)
            .or(self.message.as_ref())
            .or_else(|| self.messages.global(lang))
            .map(|message| message.resolve(issue))
            .unwrap_or_else(|| default_message(reason, issue))
    }
}

fn default_message(reason: Reason, issue: &Issue) -> String {
    match &issue.expected {
        Some(expected) => format!(
            "Invalid {}: Expected {} but received {}",
            reason, expected, issue.received
        ),
        None => format!("Invalid {}: Received {}", reason, issue.received),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn issue(kind: Kind, lang: Option<&str>) -> Issue {
        Issue {
            kind,
            rule_type: "min_symbols",
            input: Value::from("foo"),
            expected: Some(">=1".to_string()),
            received: "3".to_string(),
            message: String::new(),
            requirement: Some(1),
            lang: lang.map(str::to_string),
        }
    }

    #[test]
    fn test_default_message() {
        let config = Config::new();
        let text = config.message_for(None, Reason::Count, &issue(Kind::Validation, None));
        assert_eq!(text, "Invalid count: Expected >=1 but received 3");
    }

    #[test]
    fn test_default_message_without_expectation() {
        let mut issue = issue(Kind::Validation, None);
        issue.expected = None;
        let text = Config::new().message_for(None, Reason::Count, &issue);
        assert_eq!(text, "Invalid count: Received 3");
    }

    #[test]
    fn test_rule_message_wins() {
        let config = Config::new()
            .with_message("config")
            .with_messages(MessageCatalog::new().with_specific("min_symbols", "specific"));
        let own = Message::from("own");
        let text = config.message_for(Some(&own), Reason::Count, &issue(Kind::Validation, None));
        assert_eq!(text, "own");
    }

    #[test]
    fn test_specific_beats_config_message() {
        let config = Config::new()
            .with_message("config")
            .with_messages(MessageCatalog::new().with_specific("min_symbols", "specific"));
        let text = config.message_for(None, Reason::Count, &issue(Kind::Validation, None));
        assert_eq!(text, "specific");
    }

    #[test]
    fn test_specific_prefers_language() {
        let catalog = MessageCatalog::new()
            .with_specific("min_symbols", "neutral")
            .with_specific_for("min_symbols", "de", "deutsch");
        let config = Config::new().with_messages(catalog);
        assert_eq!(
            config.message_for(None, Reason::Count, &issue(Kind::Validation, Some("de"))),
            "deutsch"
        );
        assert_eq!(
            config.message_for(None, Reason::Count, &issue(Kind::Validation, Some("fr"))),
            "neutral"
        );
    }

    #[test]
    fn test_schema_message_only_for_schema_issues() {
        let config = Config::new().with_messages(MessageCatalog::new().with_schema("schema"));
        assert_eq!(
            config.message_for(None, Reason::Type, &issue(Kind::Schema, None)),
            "schema"
        );
        assert_eq!(
            config.message_for(None, Reason::Count, &issue(Kind::Validation, None)),
            "Invalid count: Expected >=1 but received 3"
        );
    }

    #[test]
    fn test_config_message_beats_global() {
        let config = Config::new()
            .with_message("config")
            .with_messages(MessageCatalog::new().with_global("global"));
        assert_eq!(
            config.message_for(None, Reason::Count, &issue(Kind::Validation, None)),
            "config"
        );
    }

    #[test]
    fn test_global_by_language() {
        let config = Config::new().with_messages(
            MessageCatalog::new()
                .with_global("global")
                .with_global_for("es", "global es"),
        );
        assert_eq!(
            config.message_for(None, Reason::Count, &issue(Kind::Validation, Some("es"))),
            "global es"
        );
        assert_eq!(
            config.message_for(None, Reason::Count, &issue(Kind::Validation, None)),
            "global"
        );
    }

    #[test]
    fn test_aborts_pipe() {
        assert!(!Config::new().aborts_pipe());
        assert!(Config::new().with_abort_early(true).aborts_pipe());
        assert!(Config::new().with_abort_pipe_early(true).aborts_pipe());
    }
}
