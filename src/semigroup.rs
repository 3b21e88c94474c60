//! Associative joining of failure collections
//!
//! Two independent checks that both fail produce one report: every failure
//! of the left check, then every failure of the right. Because joining is
//! associative, any grouping of three or more reports gives the same order:
//!
//! ```text
//! (x + y) + z  ==  x + (y + z)
//! ```
//!
//! [`Validation::and`](crate::Validation::and) relies on this to accumulate.
//!
//! ```
//! use legit::{Error, Errors, Semigroup};
//!
//! let name = Errors::new(Error::invalid("string is required"));
//! let age = Errors::new(Error::invalid("number is not positive"));
//!
//! let report = name.combine(age);
//! assert_eq!(report.len(), 2);
//! assert_eq!(report.to_string(), "string is required");
//! ```

/// Values joined by an associative operation.
///
/// `x.combine(y).combine(z)` must equal `x.combine(y.combine(z))`.
pub trait Semigroup: Sized {
    /// Join `other` after `self`.
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}
