//! # Legit
//!
//! Recursive runtime validation of in-memory values.
//!
//! Leaf types know how to check themselves ([`Validator`]). Composite types
//! expose their structure ([`Inspect`]): the engine walks every public struct
//! field and every sequence element, asks each self-validating value for its
//! verdict and reports *all* failures, each positioned by field name or index.
//!
//! ## Quick Example
//!
//! ```rust
//! use legit::inspect_struct;
//! use legit::validators::{Email, Lower, Positive, Required};
//!
//! inspect_struct! {
//!     pub struct Address {
//!         pub city: Required,
//!     }
//! }
//!
//! inspect_struct! {
//!     pub struct User {
//!         pub handle: Lower,
//!         pub email: Email,
//!         pub age: Positive,
//!         pub addresses: Vec<Address>,
//!         pub nickname: Option<Lower>,
//!         password_hash: String,
//!     }
//! }
//!
//! let user = User {
//!     handle: Lower::from("Ada"),
//!     email: Email::from("ada@example.com"),
//!     age: Positive::from(36),
//!     addresses: vec![Address { city: Required::from("London") }, Address { city: Required::from("") }],
//!     nickname: None,
//!     password_hash: String::from("..."),
//! };
//!
//! let err = legit::validate(&user).unwrap_err();
//!
//! // Reads as the first failure...
//! assert_eq!(err.to_string(), "handle: string is not lowercase");
//!
//! // ...and keeps every one of them
//! let entries = err.entries();
//! assert_eq!(entries.len(), 2);
//! assert_eq!(entries[1].field, "addresses");
//! assert_eq!(entries[1].message, "1: city: string is required");
//! # let _ = user.password_hash;
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit spans and events from the engine
//! - `serde`: (de)serialize the engine configuration, validator newtypes and
//!   failure reports
//! - `json`: [`form::Form`], decode-then-validate for JSON bodies

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod engine;
pub mod error;
pub mod inspect;
pub mod nonempty;
pub mod semigroup;
pub mod testing;
mod traverse;
pub mod validation;
pub mod validator;
pub mod validators;

#[cfg(feature = "json")]
pub mod decode;
#[cfg(feature = "json")]
pub mod form;

// Re-exports
pub use engine::{Legit, DEFAULT_MAX_DEPTH};
pub use error::{Entry, Error, Errors, FieldError, IndexError};
pub use inspect::{Access, Field, Inspect, Shape};
pub use nonempty::NonEmptyVec;
pub use semigroup::Semigroup;
pub use validation::Validation;
pub use validator::Validator;

/// Validate any value with the default (lenient) engine.
///
/// See [`Legit::validate_any`].
pub fn validate<T: Inspect + ?Sized>(value: &T) -> Result<(), Error> {
    Legit::DEFAULT.validate_any(value)
}

/// Validate a struct with the default engine.
///
/// See [`Legit::validate_as_struct`].
pub fn validate_struct<T: Inspect + ?Sized>(value: &T) -> Result<(), Error> {
    Legit::DEFAULT.validate_as_struct(value)
}

/// Validate a sequence with the default engine.
///
/// See [`Legit::validate_as_sequence`].
pub fn validate_sequence<T: Inspect + ?Sized>(value: &T) -> Result<(), Error> {
    Legit::DEFAULT.validate_as_sequence(value)
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::engine::Legit;
    pub use crate::error::{Entry, Error, Errors};
    pub use crate::inspect::Inspect;
    pub use crate::semigroup::Semigroup;
    pub use crate::validation::Validation;
    pub use crate::validator::Validator;
    pub use crate::{inspect_leaf, inspect_struct};
}
