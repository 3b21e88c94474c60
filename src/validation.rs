//! Accumulating validation results
//!
//! [`Validation`] is the value-returning counterpart of
//! [`Legit::validate_any`](crate::Legit::validate_any): a success carries the
//! validated value back, a failure carries every problem found. Combining two
//! failures with [`Validation::and`] keeps both error collections instead of
//! stopping at the first.
//!
//! # Examples
//!
//! ```
//! use legit::{Legit, Validation, validators::{Lower, Positive}};
//!
//! let engine = Legit::new();
//! let handle = engine.check(Lower::from("ada"));
//! let age = engine.check(Positive::from(36));
//!
//! let (handle, age) = handle.and(age).into_result().unwrap();
//! assert_eq!(handle.as_str(), "ada");
//! assert_eq!(*age, 36);
//! ```
//!
//! ```
//! use legit::{Legit, Validation, validators::{Lower, Positive}};
//!
//! let engine = Legit::new();
//! let result = engine
//!     .check(Lower::from("ADA"))
//!     .and(engine.check(Positive::from(-1)));
//!
//! let errors = result.into_result().unwrap_err();
//! let texts: Vec<_> = errors.iter().map(ToString::to_string).collect();
//! assert_eq!(texts, ["string is not lowercase", "number is not positive"]);
//! ```

use crate::Semigroup;

/// Either a validated value or the accumulated reasons it is invalid.
///
/// `E` is normally [`Errors`](crate::Errors); any [`Semigroup`] works.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T, E> {
    /// The value passed
    Success(T),
    /// Every failure found
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Wrap a valid value.
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wrap a failure.
    #[inline]
    pub fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Convert from a `Result`.
    ///
    /// ```
    /// use legit::{Error, Errors, Validation};
    ///
    /// let v = Validation::from_result(Ok::<_, Errors>(42));
    /// assert!(v.is_success());
    ///
    /// let err = Errors::new(Error::NotAStruct);
    /// let v = Validation::<i32, _>::from_result(Err(err.clone()));
    /// assert_eq!(v, Validation::Failure(err));
    /// ```
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        result.map_or_else(Self::Failure, Self::Success)
    }

    /// Convert into a `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Borrow the valid value, if any.
    #[inline]
    pub fn as_success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrow the failure, if any.
    #[inline]
    pub fn as_failure(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// `true` for [`Validation::Success`].
    #[inline]
    pub fn is_success(&self) -> bool {
        self.as_success().is_some()
    }

    /// `true` for [`Validation::Failure`].
    #[inline]
    pub fn is_failure(&self) -> bool {
        self.as_failure().is_some()
    }

    /// Transform the valid value.
    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Validation<U, E> {
        Validation::from_result(self.into_result().map(f))
    }

    /// Transform the failure.
    ///
    /// ```
    /// use legit::{Legit, validators::Lower};
    ///
    /// let entries = Legit::new()
    ///     .check(Lower::from("FOO"))
    ///     .map_err(|errors| errors.entries());
    /// assert_eq!(entries.into_result().unwrap_err()[0].message, "string is not lowercase");
    /// ```
    #[inline]
    pub fn map_err<E2>(self, f: impl FnOnce(E) -> E2) -> Validation<T, E2> {
        Validation::from_result(self.into_result().map_err(f))
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Pair two independent validations.
    ///
    /// Both failures are kept, the left one first.
    pub fn and<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        match (self.into_result(), other.into_result()) {
            (Ok(left), Ok(right)) => Validation::Success((left, right)),
            (Err(left), Err(right)) => Validation::Failure(left.combine(right)),
            (Err(error), Ok(_)) | (Ok(_), Err(error)) => Validation::Failure(error),
        }
    }

    /// Run a dependent validation on the valid value.
    ///
    /// Unlike [`Validation::and`], nothing is accumulated: a failure here
    /// means `f` never runs.
    #[inline]
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Validation<U, E>) -> Validation<U, E> {
        match self.into_result() {
            Ok(value) => f(value),
            Err(error) => Validation::Failure(error),
        }
    }

    /// Collect a list of validations, keeping every failure in order.
    ///
    /// ```
    /// use legit::{Legit, Validation, validators::Lower};
    ///
    /// let engine = Legit::new();
    /// let names = ["ada", "GRACE", "LINUS"].map(|n| engine.check(Lower::from(n)));
    ///
    /// let errors = Validation::all_vec(names.into()).into_result().unwrap_err();
    /// assert_eq!(errors.len(), 2);
    /// ```
    pub fn all_vec(validations: Vec<Validation<T, E>>) -> Validation<Vec<T>, E> {
        validations
            .into_iter()
            .fold(Validation::Success(Vec::new()), |acc, next| {
                acc.and(next).map(|(mut values, value)| {
                    values.push(value);
                    values
                })
            })
    }
}

impl<T, E> From<Result<T, E>> for Validation<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Validation::from_result(result)
    }
}
