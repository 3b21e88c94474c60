//! Ready-made leaf validators
//!
//! Each type wraps a plain string or integer, checks one property and is
//! marked self-validating, so it can be used directly as a field of an
//! [`inspect_struct!`](crate::inspect_struct) type.
//!
//! | Type | Accepts | Failure |
//! |------|---------|---------|
//! | [`Lower`] | no character outside lowercase | `string is not lowercase` |
//! | [`Upper`] | no character outside uppercase | `string is not uppercase` |
//! | [`NoSpace`] | no whitespace | `string contains whitespace` |
//! | [`Printable`] | printing characters only | `string contains non-printing characters` |
//! | [`Alpha`] | letters only | `string contains non-alpha characters` |
//! | [`Number`] | numeric characters only | `string contains non-numeric characters` |
//! | [`Float`] | optional `-`, digits, one inner `.` | `float contains non-numeric characters` |
//! | [`Alphanumeric`] | letters and numbers only | `string contains non-alphanumeric characters` |
//! | [`Ascii`] | ASCII only | `string contains non-ASCII characters` |
//! | [`Required`] | non-empty | `string is required` |
//! | [`Positive`] | `>= 0` | `number is not positive` |
//! | [`Negative`] | `< 0` | `number is not negative` |
//! | [`Email`] | RFC 5322 address | `invalid email` |
//! | [`CreditCard`] | major card number formats | `invalid credit card` |
//! | [`Uuid`] | any lowercase UUID | `invalid uuid` |
//! | [`Uuid3`], [`Uuid4`], [`Uuid5`] | that UUID version | `invalid uuid3`, ... |
//!
//! The empty string passes every string validator except [`Required`],
//! [`Float`] and the pattern validators.
//!
//! # Example
//!
//! ```
//! use legit::{inspect_struct, validators::{Email, Positive, Required}};
//!
//! inspect_struct! {
//!     pub struct Customer {
//!         pub name: Required,
//!         pub email: Email,
//!         pub credit: Positive,
//!     }
//! }
//!
//! let customer = Customer {
//!     name: Required::from(""),
//!     email: Email::from("ada@example.com"),
//!     credit: Positive::from(-5),
//! };
//!
//! let entries = legit::validate(&customer).unwrap_err().entries();
//! assert_eq!(entries.len(), 2);
//! assert_eq!(entries[0].field, "name");
//! assert_eq!(entries[1].message, "number is not positive");
//! ```

mod numbers;
mod patterns;
mod strings;

pub use numbers::{Negative, Positive};
pub use patterns::{CreditCard, Email, Uuid, Uuid3, Uuid4, Uuid5};
pub use strings::{Alpha, Alphanumeric, Ascii, Float, Lower, NoSpace, Number, Printable, Required, Upper};

/// Declare a string newtype validated by `$check`.
macro_rules! string_validator {
    ($(#[$meta:meta])* $name:ident, $message:literal, $check:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(transparent)
        )]
        pub struct $name(String);

        impl $name {
            /// Wrap a string without checking it.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// The wrapped string.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Unwrap into the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl $crate::Validator for $name {
            fn validate(&self) -> Result<(), $crate::Error> {
                let check: fn(&str) -> bool = $check;
                if check(&self.0) {
                    Ok(())
                } else {
                    Err($crate::Error::invalid($message))
                }
            }
        }

        $crate::inspect_leaf!($name);

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

/// Declare an integer newtype validated by `$check`.
macro_rules! number_validator {
    ($(#[$meta:meta])* $name:ident, $message:literal, $check:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(transparent)
        )]
        pub struct $name(i64);

        impl $name {
            /// The wrapped number.
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl $crate::Validator for $name {
            fn validate(&self) -> Result<(), $crate::Error> {
                let check: fn(i64) -> bool = $check;
                if check(self.0) {
                    Ok(())
                } else {
                    Err($crate::Error::invalid($message))
                }
            }
        }

        $crate::inspect_leaf!($name);

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl std::ops::Deref for $name {
            type Target = i64;

            fn deref(&self) -> &i64 {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

pub(crate) use number_validator;
pub(crate) use string_validator;
