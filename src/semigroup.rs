//! Semigroup trait for accumulating issues
//!
//! A Semigroup is a type with an associative binary operation. `Validation`
//! relies on it to merge the issue lists of several independent parses
//! instead of keeping only the first failure.
//!
//! # Examples
//!
//! ```
//! use tidemark::Semigroup;
//!
//! let first = vec!["too short"];
//! let second = vec!["missing digit", "missing symbol"];
//! assert_eq!(
//!     first.combine(second),
//!     vec!["too short", "missing digit", "missing symbol"]
//! );
//! ```

/// A type that supports an associative binary operation
///
/// # Laws
///
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
///
/// `combine` takes `self` by value; clone first if the originals are still
/// needed.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}
