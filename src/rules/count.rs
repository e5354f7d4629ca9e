//! Minimum character-class counts
//!
//! [`MinCount<C>`] counts the characters of a string that belong to the class
//! `C` and raises an issue when there are fewer than the requirement. The
//! class is a zero-sized marker, so the four rules share one implementation:
//!
//! | Alias           | Type            | Class                                   |
//! |-----------------|-----------------|-----------------------------------------|
//! | [`MinLowercase`]| `min_lowercase` | `a-z`                                   |
//! | [`MinUppercase`]| `min_uppercase` | `A-Z`                                   |
//! | [`MinNumbers`]  | `min_numbers`   | `0-9`                                   |
//! | [`MinSymbols`]  | `min_symbols`   | not ASCII alphanumeric, not whitespace  |
//!
//! On failure the issue's `received` field is the input's total length, not
//! the number of characters in the class. Both are measured in UTF-16 code
//! units (see [`text_length`](super::text_length)).

use std::fmt;
use std::marker::PhantomData;

use super::{add_issue, text_length, Descriptor, Rule};
use crate::config::Config;
use crate::dataset::Dataset;
use crate::issue::{Message, Reason};

/// A set of characters a [`MinCount`] rule counts.
pub trait CharClass: fmt::Debug + Send + Sync + 'static {
    /// Rule type reported on issues.
    const RULE_TYPE: &'static str;

    /// Whether `c` belongs to the class.
    fn matches(c: char) -> bool;
}

/// ASCII lowercase letters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lowercase;

impl CharClass for Lowercase {
    const RULE_TYPE: &'static str = "min_lowercase";

    #[inline]
    fn matches(c: char) -> bool {
        c.is_ascii_lowercase()
    }
}

/// ASCII uppercase letters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uppercase;

impl CharClass for Uppercase {
    const RULE_TYPE: &'static str = "min_uppercase";

    #[inline]
    fn matches(c: char) -> bool {
        c.is_ascii_uppercase()
    }
}

/// ASCII digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct Digit;

impl CharClass for Digit {
    const RULE_TYPE: &'static str = "min_numbers";

    #[inline]
    fn matches(c: char) -> bool {
        c.is_ascii_digit()
    }
}

/// Anything that is neither an ASCII letter, an ASCII digit, nor whitespace.
///
/// Non-ASCII letters such as `é` count as symbols.
#[derive(Debug, Clone, Copy, Default)]
pub struct Symbol;

impl CharClass for Symbol {
    const RULE_TYPE: &'static str = "min_symbols";

    #[inline]
    fn matches(c: char) -> bool {
        !c.is_ascii_alphanumeric() && !is_space(c)
    }
}

// BOM counts as whitespace alongside the Unicode White_Space set.
fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// At least `requirement` characters of class `C`.
#[derive(Debug, Clone)]
pub struct MinCount<C> {
    descriptor: Descriptor,
    requirement: usize,
    _class: PhantomData<C>,
}

/// At least N lowercase letters.
pub type MinLowercase = MinCount<Lowercase>;
/// At least N uppercase letters.
pub type MinUppercase = MinCount<Uppercase>;
/// At least N digits.
pub type MinNumbers = MinCount<Digit>;
/// At least N symbols.
pub type MinSymbols = MinCount<Symbol>;

impl<C: CharClass> MinCount<C> {
    /// Requirement used by [`Default`].
    pub const DEFAULT_REQUIREMENT: usize = 1;

    /// Require at least `requirement` characters of the class.
    pub fn new(requirement: usize) -> Self {
        Self {
            descriptor: Descriptor::validation(
                C::RULE_TYPE,
                format!(">={}", requirement),
                requirement,
            ),
            requirement,
            _class: PhantomData,
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

    /// Number of UTF-16 code units of `text` in the class.
    ///
    /// A matching character outside the Basic Multilingual Plane counts
    /// twice, once per surrogate.
    pub fn count(text: &str) -> usize {
        text.chars()
            .filter(|&c| C::matches(c))
            .map(char::len_utf16)
            .sum()
    }
}

impl<C: CharClass> Default for MinCount<C> {
    fn default() -> Self {
        Self::new(Self::DEFAULT_REQUIREMENT)
    }
}

impl<C: CharClass> Rule for MinCount<C> {
    fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    fn run(&self, mut dataset: Dataset, config: &Config) -> Dataset {
        let (count, length) = match dataset.typed_text() {
            Some(text) => (Self::count(text), text_length(text)),
            None => return dataset,
        };
        if count < self.requirement {
            add_issue(
                &self.descriptor,
                Reason::Count,
                &mut dataset,
                config,
                length.to_string(),
            );
        }
        dataset
    }
}

/// Create a rule requiring at least `requirement` lowercase letters.
///
/// # Example
///
/// ```rust
/// use tidemark::rules::*;
/// use tidemark::Dataset;
///
/// assert!(min_lowercase(5).check(Dataset::typed("fooBARbaz123")).issues.is_empty());
/// assert_eq!(min_lowercase(5).check(Dataset::typed("foo")).issues.len(), 1);
/// ```
pub fn min_lowercase(requirement: usize) -> MinLowercase {
    MinCount::new(requirement)
}

/// Create a rule requiring at least `requirement` uppercase letters.
pub fn min_uppercase(requirement: usize) -> MinUppercase {
    MinCount::new(requirement)
}

/// Create a rule requiring at least `requirement` digits.
pub fn min_numbers(requirement: usize) -> MinNumbers {
    MinCount::new(requirement)
}

/// Create a rule requiring at least `requirement` symbols.
///
/// # Example
///
/// ```rust
/// use tidemark::rules::*;
/// use tidemark::Dataset;
///
/// assert!(min_symbols(2).check(Dataset::typed("a!b?")).issues.is_empty());
/// // whitespace is not a symbol
/// assert_eq!(min_symbols(1).check(Dataset::typed("a b")).issues.len(), 1);
/// ```
pub fn min_symbols(requirement: usize) -> MinSymbols {
    MinCount::new(requirement)
}
