//! Assertion helpers for tests of validated types
//!
//! The macros compare failures through their [`Entry`](crate::Entry) rows, so
//! expectations read as `(field, message)` pairs instead of nested error
//! values.
//!
//! # Examples
//!
//! ```rust
//! use legit::{assert_entries, assert_failure, assert_success, inspect_struct, Legit};
//! use legit::validators::{Lower, Required};
//!
//! inspect_struct! {
//!     #[derive(Debug)]
//!     pub struct Tag {
//!         pub name: Lower,
//!         pub owner: Required,
//!     }
//! }
//!
//! let engine = Legit::new();
//! assert_success!(engine.check(Tag { name: Lower::from("rust"), owner: Required::from("ada") }));
//! assert_failure!(engine.check(Tag { name: Lower::from("Rust"), owner: Required::from("ada") }));
//!
//! let tag = Tag { name: Lower::from("Rust"), owner: Required::from("") };
//! assert_entries!(
//!     engine.validate_any(&tag),
//!     [("name", "string is not lowercase"), ("owner", "string is required")]
//! );
//! ```

/// Assert that a [`Validation`](crate::Validation) succeeded.
#[macro_export]
macro_rules! assert_success {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Success(_) => {}
            $crate::Validation::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that a [`Validation`](crate::Validation) failed.
#[macro_export]
macro_rules! assert_failure {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Failure(_) => {}
            $crate::Validation::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that a [`Validation`](crate::Validation) failed with exactly the
/// given `(field, message)` entries, in order.
#[macro_export]
macro_rules! assert_validation_errors {
    ($validation:expr, $expected:expr) => {
        match $validation {
            $crate::Validation::Failure(errors) => {
                assert_eq!(
                    $crate::testing::entry_pairs(&errors.entries()),
                    $crate::testing::expected_pairs(&$expected)
                );
            }
            $crate::Validation::Success(v) => {
                panic!(
                    "Expected Failure with errors {:?}, got Success: {:?}",
                    $expected, v
                );
            }
        }
    };
}

/// Assert that an engine result failed with exactly the given
/// `(field, message)` entries, in order.
#[macro_export]
macro_rules! assert_entries {
    ($result:expr, $expected:expr) => {
        match $result {
            ::core::result::Result::Err(error) => {
                let error: $crate::Error = error;
                assert_eq!(
                    $crate::testing::entry_pairs(&error.entries()),
                    $crate::testing::expected_pairs(&$expected)
                );
            }
            ::core::result::Result::Ok(()) => {
                panic!("Expected errors {:?}, got Ok", $expected);
            }
        }
    };
}

#[doc(hidden)]
pub fn entry_pairs(entries: &[crate::Entry]) -> Vec<(String, String)> {
    entries
        .iter()
        .map(|entry| (entry.field.clone(), entry.message.clone()))
        .collect()
}

#[doc(hidden)]
pub fn expected_pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(field, message)| (field.to_string(), message.to_string()))
        .collect()
}
