//! Failures and positioned failure collections
//!
//! Every entry point of the engine returns `Result<(), Error>`. A failure is
//! one of:
//!
//! - a caller contract violation ([`Error::NotAStruct`], [`Error::NotASequence`]),
//! - a strict-mode rejection ([`Error::NotAValidator`]),
//! - a leaf validator's reason ([`Error::Invalid`]),
//! - a failure positioned at a struct field ([`FieldError`]) or a sequence
//!   index ([`IndexError`]),
//! - an ordered collection of failures ([`Errors`]), never empty.
//!
//! # Examples
//!
//! ```
//! use legit::{Error, Errors, FieldError, IndexError};
//!
//! let errors = Errors::from_vec(vec![
//!     FieldError::new("name", Error::invalid("string is not lowercase")).into(),
//!     IndexError::new(3, Error::invalid("invalid email")).into(),
//! ])
//! .unwrap();
//!
//! // A collection reads as its first failure
//! assert_eq!(errors.to_string(), "name: string is not lowercase");
//!
//! // ...while every positioned entry stays inspectable
//! let entries = errors.entries();
//! assert_eq!(entries[1].field, "3");
//! assert_eq!(entries[1].message, "invalid email");
//! ```

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

use crate::{NonEmptyVec, Semigroup};

/// A validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A struct-only entry point was given a value that is not a struct.
    NotAStruct,
    /// A sequence-only entry point was given a value that is not a sequence.
    NotASequence,
    /// Strict mode met a value that is neither a struct, a sequence nor
    /// self-validating.
    NotAValidator,
    /// Struct/sequence nesting went deeper than the engine's limit.
    DepthExceeded {
        /// The configured maximum depth.
        limit: usize,
    },
    /// A leaf validator rejected its value.
    Invalid(Cow<'static, str>),
    /// A failure at a named struct field.
    Field(FieldError),
    /// A failure at a sequence index.
    Index(IndexError),
    /// One or more independent failures, in visitation order.
    Multiple(Errors),
}

impl Error {
    /// Create a leaf failure carrying a human-readable reason.
    ///
    /// ```
    /// use legit::Error;
    ///
    /// let err = Error::invalid("number is not positive");
    /// assert_eq!(err.to_string(), "number is not positive");
    /// ```
    pub fn invalid(reason: impl Into<Cow<'static, str>>) -> Self {
        Error::Invalid(reason.into())
    }

    /// `true` for the fixed contract/policy failures that carry no reason of
    /// their own.
    pub fn is_sentinel(&self) -> bool {
        matches!(
            self,
            Error::NotAStruct | Error::NotASequence | Error::NotAValidator
        )
    }

    /// The failure collection, if this failure is one.
    pub fn as_errors(&self) -> Option<&Errors> {
        match self {
            Error::Multiple(errors) => Some(errors),
            _ => None,
        }
    }

    /// Structured rows for this failure.
    ///
    /// A collection yields one row per entry; any other failure yields a
    /// single row.
    pub fn entries(&self) -> Vec<Entry> {
        match self {
            Error::Multiple(errors) => errors.entries(),
            other => vec![Entry::from(other)],
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotAStruct => f.write_str("object is not a struct"),
            Error::NotASequence => f.write_str("object is not a slice"),
            Error::NotAValidator => f.write_str("field is not a validator"),
            Error::DepthExceeded { limit } => {
                write!(f, "nesting exceeds maximum depth of {}", limit)
            }
            Error::Invalid(reason) => f.write_str(reason),
            Error::Field(err) => fmt::Display::fmt(err, f),
            Error::Index(err) => fmt::Display::fmt(err, f),
            Error::Multiple(errors) => fmt::Display::fmt(errors, f),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Field(err) => Some(err.cause()),
            Error::Index(err) => Some(err.cause()),
            Error::Multiple(errors) => Some(errors.first()),
            _ => None,
        }
    }
}

/// A failure at a named struct field.
///
/// The name is the declared field identifier.
///
/// ```
/// use legit::{Error, FieldError};
///
/// let err = FieldError::new("email", Error::invalid("invalid email"));
/// assert_eq!(err.to_string(), "email: invalid email");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    name: &'static str,
    cause: Box<Error>,
}

impl FieldError {
    /// Wrap `cause` at field `name`.
    pub fn new(name: &'static str, cause: Error) -> Self {
        Self {
            name,
            cause: Box::new(cause),
        }
    }

    /// The declared field identifier.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The wrapped failure.
    pub fn cause(&self) -> &Error {
        &self.cause
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.cause)
    }
}

impl From<FieldError> for Error {
    fn from(err: FieldError) -> Self {
        Error::Field(err)
    }
}

/// A failure at a zero-based sequence index.
///
/// ```
/// use legit::{Error, IndexError};
///
/// let err = IndexError::new(1, Error::invalid("string is not lowercase"));
/// assert_eq!(err.to_string(), "1: string is not lowercase");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexError {
    index: usize,
    cause: Box<Error>,
}

impl IndexError {
    /// Wrap `cause` at position `index`.
    pub fn new(index: usize, cause: Error) -> Self {
        Self {
            index,
            cause: Box::new(cause),
        }
    }

    /// The zero-based position.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The wrapped failure.
    pub fn cause(&self) -> &Error {
        &self.cause
    }
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.index, self.cause)
    }
}

impl From<IndexError> for Error {
    fn from(err: IndexError) -> Self {
        Error::Index(err)
    }
}

/// An ordered, non-empty collection of failures.
///
/// Order is visitation order: declaration order for struct fields, index
/// order for sequence elements. Rendering as text shows only the first
/// failure; [`Errors::entries`] gives the full structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Errors(NonEmptyVec<Error>);

impl Errors {
    /// A collection holding one failure.
    pub fn new(first: Error) -> Self {
        Errors(NonEmptyVec::singleton(first))
    }

    /// A collection from a list of failures, or `None` when the list is empty.
    pub fn from_vec(errors: Vec<Error>) -> Option<Self> {
        NonEmptyVec::from_vec(errors).map(Errors)
    }

    /// Append a failure.
    pub fn push(&mut self, error: Error) {
        self.0.push(error);
    }

    /// Number of failures, always at least one.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The first failure in visitation order.
    pub fn first(&self) -> &Error {
        self.0.first()
    }

    /// Iterate over the failures in visitation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Error> {
        self.0.iter()
    }

    /// Convert into a plain `Vec`, preserving order.
    pub fn into_vec(self) -> Vec<Error> {
        self.0.into_vec()
    }

    /// One structured row per failure.
    pub fn entries(&self) -> Vec<Entry> {
        self.iter().map(Entry::from).collect()
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.first(), f)
    }
}

impl StdError for Errors {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.first())
    }
}

impl Semigroup for Errors {
    fn combine(self, other: Self) -> Self {
        Errors(self.0.combine(other.0))
    }
}

impl From<Error> for Errors {
    /// A collection is passed through; any other failure becomes a singleton.
    fn from(error: Error) -> Self {
        match error {
            Error::Multiple(errors) => errors,
            other => Errors::new(other),
        }
    }
}

impl From<Errors> for Error {
    fn from(errors: Errors) -> Self {
        Error::Multiple(errors)
    }
}

impl IntoIterator for Errors {
    type Item = Error;
    type IntoIter = <NonEmptyVec<Error> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a Error;
    type IntoIter = std::slice::Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A structured report row: where a failure happened and why.
///
/// `field` is the field name or the decimal index; it is empty for a failure
/// that carries no position. `message` is the text of the wrapped failure.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    /// Field name or decimal index.
    pub field: String,
    /// Text of the failure at that position.
    pub message: String,
}

impl From<&Error> for Entry {
    fn from(error: &Error) -> Self {
        match error {
            Error::Field(err) => Entry {
                field: err.name().to_string(),
                message: err.cause().to_string(),
            },
            Error::Index(err) => Entry {
                field: err.index().to_string(),
                message: err.cause().to_string(),
            },
            other => Entry {
                field: String::new(),
                message: other.to_string(),
            },
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::ser::SerializeSeq;
    use serde::{Serialize, Serializer};

    use super::{Error, Errors};

    impl Serialize for Errors {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut seq = serializer.serialize_seq(Some(self.len()))?;
            for entry in self.entries() {
                seq.serialize_element(&entry)?;
            }
            seq.end()
        }
    }

    impl Serialize for Error {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            self.entries().serialize(serializer)
        }
    }
}
