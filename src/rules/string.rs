//! Text-shape schema
//!
//! The root of every pipe. It is the only rule that looks at untyped
//! datasets: a string value makes the dataset typed, anything else gets a
//! `type` issue and stays untyped so later rules skip it.

use super::{add_issue, Descriptor, Rule};
use crate::config::Config;
use crate::dataset::{describe, Dataset};
use crate::issue::{Kind, Message, Reason};

/// Checks that the value is text.
#[derive(Debug, Clone)]
pub struct StringSchema {
    descriptor: Descriptor,
}

impl StringSchema {
    /// Create the schema.
    pub fn new() -> Self {
        Self {
            descriptor: Descriptor {
                kind: Kind::Schema,
                rule_type: "string",
                expects: "string".to_string(),
                requirement: None,
                message: None,
            },
        }
    }

    /// Attach a message override.
    pub fn with_message(mut self, message: impl Into<Message>) -> Self {
        self.descriptor.message = Some(message.into());
        self
    }
}

impl Default for StringSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for StringSchema {
    fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    fn run(&self, mut dataset: Dataset, config: &Config) -> Dataset {
        if dataset.value.is_string() {
            dataset.typed = true;
        } else {
            let received = describe(&dataset.value);
            add_issue(&self.descriptor, Reason::Type, &mut dataset, config, received);
        }
        dataset
    }
}

/// Create the text-shape schema.
pub fn string() -> StringSchema {
    StringSchema::new()
}
