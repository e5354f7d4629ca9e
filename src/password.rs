//! Opinionated password policy
//!
//! [`password`] assembles a fixed pipe: text, then length bounds, then the
//! four character-class minimums. Nothing runs at construction time.
//!
//! By default a password must:
//! - be a string
//! - contain at least 8 characters
//! - contain at most 250 characters
//! - contain at least 1 lowercase letter
//! - contain at least 1 uppercase letter
//! - contain at least 1 number
//! - contain at least 1 symbol
//!
//! # Example
//!
//! ```rust
//! use tidemark::password::{password, password_with, PasswordOptions};
//!
//! assert!(password().parse("aB1!").is_err());
//! assert!(password().parse("aBCdEF1!").is_ok());
//!
//! let relaxed = password_with(PasswordOptions::new().min(6));
//! assert!(relaxed.parse("aBcD1!").is_ok());
//! ```

use crate::pipe::Pipe;
use crate::rules::{
    max_length, min_length, min_lowercase, min_numbers, min_symbols, min_uppercase, string,
};

/// Overrides for the default password requirements.
///
/// Every field is optional; a missing field keeps its default. Values are
/// not cross-checked, so `min` above `max` yields a policy nothing satisfies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct PasswordOptions {
    /// Minimum number of characters.
    pub min: Option<usize>,
    /// Maximum number of characters.
    pub max: Option<usize>,
    /// Minimum number of lowercase letters.
    pub lowercase: Option<usize>,
    /// Minimum number of uppercase letters.
    pub uppercase: Option<usize>,
    /// Minimum number of digits.
    pub numbers: Option<usize>,
    /// Minimum number of symbols.
    pub symbols: Option<usize>,
}

impl PasswordOptions {
    /// Default minimum length.
    pub const DEFAULT_MIN: usize = 8;
    /// Default maximum length.
    pub const DEFAULT_MAX: usize = 250;
    /// Default minimum of each character class.
    pub const DEFAULT_CLASS_MIN: usize = 1;

    /// No overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the minimum length.
    pub fn min(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    /// Override the maximum length.
    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    /// Override the lowercase minimum.
    pub fn lowercase(mut self, lowercase: usize) -> Self {
        self.lowercase = Some(lowercase);
        self
    }

    /// Override the uppercase minimum.
    pub fn uppercase(mut self, uppercase: usize) -> Self {
        self.uppercase = Some(uppercase);
        self
    }

    /// Override the digit minimum.
    pub fn numbers(mut self, numbers: usize) -> Self {
        self.numbers = Some(numbers);
        self
    }

    /// Override the symbol minimum.
    pub fn symbols(mut self, symbols: usize) -> Self {
        self.symbols = Some(symbols);
        self
    }
}

/// The password policy with default requirements.
pub fn password() -> Pipe {
    password_with(PasswordOptions::default())
}

/// The password policy with `options` applied over the defaults.
pub fn password_with(options: PasswordOptions) -> Pipe {
    let class_min = |value: Option<usize>| value.unwrap_or(PasswordOptions::DEFAULT_CLASS_MIN);

    Pipe::new(string())
        .pipe(min_length(options.min.unwrap_or(PasswordOptions::DEFAULT_MIN)))
        .pipe(max_length(options.max.unwrap_or(PasswordOptions::DEFAULT_MAX)))
        .pipe(min_lowercase(class_min(options.lowercase)))
        .pipe(min_uppercase(class_min(options.uppercase)))
        .pipe(min_numbers(class_min(options.numbers)))
        .pipe(min_symbols(class_min(options.symbols)))
}
