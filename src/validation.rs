//! Validation type for accumulating violations
//!
//! `Validation` is like `Result`, but built for checking several constraints
//! and reporting every violation at once instead of short-circuiting on the
//! first failure. Combining two failures merges their errors through
//! [`Semigroup::combine`].
//!
//! # Examples
//!
//! ```
//! use allowset::Validation;
//!
//! let color = Validation::<(), Vec<&str>>::failure(vec!["unknown color"]);
//! let size = Validation::<(), Vec<&str>>::failure(vec!["unknown size"]);
//!
//! let report = color.and(size);
//! assert_eq!(
//!     report,
//!     Validation::Failure(vec!["unknown color", "unknown size"]),
//! );
//! ```

use crate::Semigroup;

/// A validation that either succeeds with a value or fails with accumulated
/// errors.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the error value (must implement [`Semigroup`] for
///   accumulation)
///
/// # Examples
///
/// ```
/// use allowset::Validation;
///
/// let ok = Validation::<_, Vec<&str>>::success("RED");
/// assert_eq!(ok.into_result(), Ok("RED"));
///
/// let v1 = Validation::<(), _>::failure(vec!["color: Invalid value"]);
/// let v2 = Validation::<(), _>::failure(vec!["size: Invalid value"]);
/// let combined = v1.and(v2);
/// assert!(combined.is_failure());
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
    ///
    /// # Examples
    ///
    /// ```
    /// use allowset::Validation;
    ///
    /// let v = Validation::<i32, String>::success(42);
    /// assert!(v.is_success());
    /// ```
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation
    ///
    /// # Examples
    ///
    /// ```
    /// use allowset::Validation;
    ///
    /// let v = Validation::<i32, Vec<&str>>::failure(vec!["error"]);
    /// assert!(v.is_failure());
    /// ```
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Create a validation from a Result
    ///
    /// # Examples
    ///
    /// ```
    /// use allowset::Validation;
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
    /// use allowset::Validation;
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
    /// use allowset::Validation;
    ///
    /// let v = Validation::<_, String>::success(5);
    /// assert_eq!(v.map(|x| x * 2), Validation::Success(10));
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
    /// use allowset::Validation;
    ///
    /// let v = Validation::<i32, _>::failure(vec!["error"]);
    /// assert_eq!(v.map_err(|errors| errors.len()), Validation::Failure(1));
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
    /// Combine two validations, accumulating errors using the Semigroup
    /// instance
    ///
    /// If both validations are successful, returns a success with a tuple of
    /// both values. If either or both fail, accumulates the errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use allowset::Validation;
    ///
    /// let v1 = Validation::<_, Vec<&str>>::success(1);
    /// let v2 = Validation::<_, Vec<&str>>::success(2);
    /// assert_eq!(v1.and(v2), Validation::Success((1, 2)));
    ///
    /// let v1 = Validation::<i32, _>::failure(vec!["error1"]);
    /// let v2 = Validation::<i32, _>::failure(vec!["error2"]);
    /// assert_eq!(v1.and(v2), Validation::Failure(vec!["error1", "error2"]));
    /// ```
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

    /// Combine all validations in a Vec
    ///
    /// Returns a success with a Vec of all success values if all validations
    /// succeed. Otherwise, accumulates all errors using `Semigroup::combine`.
    ///
    /// # Examples
    ///
    /// ```
    /// use allowset::Validation;
    ///
    /// let verdicts = vec![
    ///     Validation::<(), _>::failure(vec!["color: Invalid value"]),
    ///     Validation::<(), _>::success(()),
    ///     Validation::<(), _>::failure(vec!["size: Invalid value"]),
    /// ];
    /// let report = Validation::all_vec(verdicts);
    /// assert_eq!(
    ///     report,
    ///     Validation::Failure(vec!["color: Invalid value", "size: Invalid value"]),
    /// );
    /// ```
    pub fn all_vec(validations: Vec<Validation<T, E>>) -> Validation<Vec<T>, E> {
        let mut successes = Vec::new();
        let mut failures = Vec::new();

        for validation in validations {
            match validation {
                Validation::Success(value) => successes.push(value),
                Validation::Failure(error) => failures.push(error),
            }
        }

        match failures.into_iter().reduce(|acc, e| acc.combine(e)) {
            None => Validation::Success(successes),
            Some(errors) => Validation::Failure(errors),
        }
    }
}
