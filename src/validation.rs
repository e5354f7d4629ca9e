//! Validation type for accumulating issues
//!
//! `Validation` is similar to `Result` but designed for scenarios where all
//! problems should be reported at once. [`Pipe::safe_parse`] returns one, so
//! several inputs can be checked independently and their issues merged.
//!
//! [`Pipe::safe_parse`]: crate::pipe::Pipe::safe_parse
//!
//! # Examples
//!
//! ```
//! use tidemark::password::password;
//!
//! let policy = password();
//! let current = policy.safe_parse("aBCdEF1!");
//! let next = policy.safe_parse("short");
//!
//! let both = current.and(next);
//! assert!(both.is_failure());
//! ```

use crate::Semigroup;

/// A validation that either succeeds with a value or fails with accumulated errors
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the error value (must implement `Semigroup` for accumulation)
///
/// # Examples
///
/// ```
/// use tidemark::Validation;
///
/// let v1 = Validation::<i32, _>::failure(vec!["min_lowercase"]);
/// let v2 = Validation::<i32, _>::failure(vec!["min_symbols"]);
/// assert_eq!(v1.and(v2), Validation::Failure(vec!["min_lowercase", "min_symbols"]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T, E> {
    /// Successful validation with a value
    Success(T),
    /// Failed validation with accumulated errors
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Create a successful validation
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Create a validation from a Result
    ///
    /// # Examples
    ///
    /// ```
    /// use tidemark::Validation;
    ///
    /// let v = Validation::from_result(Ok::<_, String>(42));
    /// assert_eq!(v, Validation::Success(42));
    /// ```
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Validation::Success(value),
            Err(error) => Validation::Failure(error),
        }
    }

    /// Convert this validation to a Result
    ///
    /// # Examples
    ///
    /// ```
    /// use tidemark::Validation;
    ///
    /// let v = Validation::<i32, _>::failure("error".to_string());
    /// assert_eq!(v.into_result(), Err("error".to_string()));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(error) => Err(error),
        }
    }

    /// Check if this validation is successful
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Check if this validation failed
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    /// Transform the success value if present
    ///
    /// # Examples
    ///
    /// ```
    /// use tidemark::Validation;
    ///
    /// let v = Validation::<_, Vec<&str>>::success("secret".to_string());
    /// assert_eq!(v.map(|s| s.len()), Validation::Success(6));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Transform the error value if present
    ///
    /// # Examples
    ///
    /// ```
    /// use tidemark::Validation;
    ///
    /// let v = Validation::<i32, _>::failure(vec!["a", "b"]);
    /// assert_eq!(v.map_err(|errors| errors.len()), Validation::Failure(2));
    /// ```
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Validation<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(error) => Validation::Failure(f(error)),
        }
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Combine two validations, accumulating errors using the Semigroup instance
    ///
    /// If both validations are successful, returns a success with a tuple of both values.
    /// If either or both fail, accumulates the errors using `Semigroup::combine`.
    pub fn and<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        match (self, other) {
            (Validation::Success(a), Validation::Success(b)) => Validation::Success((a, b)),
            (Validation::Failure(e1), Validation::Failure(e2)) => {
                Validation::Failure(e1.combine(e2))
            }
            (Validation::Failure(e), _) => Validation::Failure(e),
            (_, Validation::Failure(e)) => Validation::Failure(e),
        }
    }

    /// Chain a dependent validation
    ///
    /// The function is only called if the current validation is successful.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidemark::Validation;
    ///
    /// let v = Validation::<_, Vec<&str>>::success("hunter2".to_string());
    /// let result = v.and_then(|s| {
    ///     if s.contains("hunter") {
    ///         Validation::failure(vec!["too common"])
    ///     } else {
    ///         Validation::success(s)
    ///     }
    /// });
    /// assert_eq!(result, Validation::Failure(vec!["too common"]));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Validation<U, E>,
    {
        match self {
            Validation::Success(value) => f(value),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Combine all validations in a Vec
    ///
    /// Returns a success with every value if all validations succeed,
    /// otherwise the combined errors of every failure, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidemark::Validation;
    ///
    /// let validations = vec![
    ///     Validation::<i32, _>::failure(vec!["error1"]),
    ///     Validation::success(2),
    ///     Validation::failure(vec!["error2"]),
    /// ];
    /// let result = Validation::all_vec(validations);
    /// assert_eq!(result, Validation::Failure(vec!["error1", "error2"]));
    /// ```
    pub fn all_vec(validations: Vec<Validation<T, E>>) -> Validation<Vec<T>, E> {
        let mut successes = Vec::new();
        let mut failure: Option<E> = None;

        for validation in validations {
            match validation {
                Validation::Success(value) => successes.push(value),
                Validation::Failure(error) => {
                    failure = Some(match failure {
                        Some(acc) => acc.combine(error),
                        None => error,
                    });
                }
            }
        }

        match failure {
            Some(error) => Validation::Failure(error),
            None => Validation::Success(successes),
        }
    }
}
