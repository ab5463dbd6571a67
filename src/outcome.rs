//! The `Success` / `Failure` result value.

use crate::error::Error;

/// Outcome of one attempt: either the produced data or the normalized error.
///
/// Exactly one of [`is_success`](Outcome::is_success) and
/// [`is_failure`](Outcome::is_failure) is true for every value. An outcome
/// is never mutated after construction, so inspecting it any number of
/// times yields the same answers.
///
/// # Examples
///
/// ```
/// use try_this::{attempt, Outcome};
///
/// let outcome = attempt(|| 5);
/// assert!(outcome.is_success());
/// assert_eq!(outcome.data(), Some(&5));
///
/// let outcome: Outcome<i32> = attempt(|| panic!("x"));
/// assert!(outcome.is_failure());
/// assert_eq!(outcome.error().unwrap().message(), "x");
/// ```
#[must_use = "a failure is only observed by inspecting the outcome"]
#[derive(Debug)]
pub enum Outcome<T> {
    /// Completed with a value.
    Success(T),
    /// Threw, panicked or rejected.
    Failure(Error),
}

impl<T> Outcome<T> {
    /// Wrap a value verbatim. Never fails.
    #[inline]
    pub const fn success(data: T) -> Self {
        Outcome::Success(data)
    }

    /// Wrap an error. An [`Error`] is used as-is; any other error type is
    /// boxed with its identity preserved.
    ///
    /// For strings and other non-error values use [`failure!`](crate::failure).
    #[inline]
    pub fn failure(error: impl Into<Error>) -> Self {
        Outcome::Failure(error.into())
    }

    /// `true` for `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// `true` for `Failure`. Always the negation of [`is_success`](Outcome::is_success).
    #[inline]
    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The data of a `Success`.
    #[inline]
    pub fn data(&self) -> Option<&T> {
        match self {
            Outcome::Success(data) => Some(data),
            Outcome::Failure(_) => None,
        }
    }

    /// The error of a `Failure`.
    #[inline]
    pub fn error(&self) -> Option<&Error> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// Consume and return the data of a `Success`.
    #[inline]
    pub fn into_data(self) -> Option<T> {
        match self {
            Outcome::Success(data) => Some(data),
            Outcome::Failure(_) => None,
        }
    }

    /// Consume and return the error of a `Failure`.
    #[inline]
    pub fn into_error(self) -> Option<Error> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// Convert into a standard `Result`, e.g. to continue with `?`.
    #[inline]
    pub fn into_result(self) -> crate::Result<T> {
        match self {
            Outcome::Success(data) => Ok(data),
            Outcome::Failure(error) => Err(error),
        }
    }
}

impl<T> From<Outcome<T>> for core::result::Result<T, Error> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

impl<T, E: Into<Error>> From<core::result::Result<T, E>> for Outcome<T> {
    fn from(result: core::result::Result<T, E>) -> Self {
        match result {
            Ok(data) => Outcome::Success(data),
            Err(e) => Outcome::Failure(e.into()),
        }
    }
}

// ============================================================
// Serde support
// ============================================================

#[cfg(feature = "serialize")]
impl<T: serde::Serialize> serde::Serialize for Outcome<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Outcome", 3)?;
        state.serialize_field("success", &self.is_success())?;
        state.serialize_field("failure", &self.is_failure())?;
        match self {
            Outcome::Success(data) => state.serialize_field("data", data)?,
            Outcome::Failure(error) => state.serialize_field("error", error)?,
        }
        state.end()
    }
}
