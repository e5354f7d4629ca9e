//! # Tidemark
//!
//! > *"Every rule leaves a mark"*
//!
//! Composable string validation rules with structured issues, and an
//! opinionated password policy built from them.
//!
//! ## Philosophy
//!
//! Validation failures are data, not exceptions:
//! - **Rules** are small immutable values that inspect a [`Dataset`] and
//!   append at most one [`Issue`] describing what they expected and what
//!   they found.
//! - **Pipes** thread one dataset through an ordered list of rules,
//!   accumulating every issue rather than stopping at the first.
//!
//! ## Quick Example
//!
//! ```rust
//! use tidemark::password::{password, password_with, PasswordOptions};
//! use tidemark::Validation;
//!
//! assert!(password().is_valid("aBCdEF1!"));
//!
//! match password_with(PasswordOptions::new().lowercase(2)).safe_parse("hAS LESS 1!") {
//!     Validation::Success(_) => unreachable!(),
//!     Validation::Failure(issues) => {
//!         assert_eq!(issues.len(), 1);
//!         assert_eq!(issues[0].rule_type, "min_lowercase");
//!     }
//! }
//! ```
//!
//! ## Individual rules
//!
//! ```rust
//! use tidemark::rules::*;
//! use tidemark::Dataset;
//!
//! let dataset = max_repeating(5).check(Dataset::typed("aaaaaa"));
//! assert_eq!(dataset.issues[0].received, "6");
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod dataset;
pub mod issue;
pub mod password;
pub mod pipe;
pub mod rules;
pub mod semigroup;
pub mod testing;
pub mod validation;

// Re-exports
pub use config::Config;
pub use dataset::Dataset;
pub use issue::{Issue, Kind, Message, Reason};
pub use pipe::{ParseError, Pipe};
pub use rules::{Rule, Step};
pub use semigroup::Semigroup;
pub use validation::Validation;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{Config, MessageCatalog};
    pub use crate::dataset::Dataset;
    pub use crate::issue::{Issue, Kind, Message, Reason};
    pub use crate::password::{password, password_with, PasswordOptions};
    pub use crate::pipe::{ParseError, Pipe};
    pub use crate::rules::*;
    pub use crate::semigroup::Semigroup;
    pub use crate::validation::Validation;
}
