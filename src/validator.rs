//! The self-validating capability

use crate::Error;

/// A value that knows how to check itself.
///
/// Leaf types implement this and are marked self-validating with
/// [`inspect_leaf!`](crate::inspect_leaf). Composite types may implement it
/// too: the engine then calls it instead of walking their members.
///
/// # Example
///
/// ```
/// use legit::{inspect_leaf, Error, Validator};
///
/// struct Even(u32);
///
/// impl Validator for Even {
///     fn validate(&self) -> Result<(), Error> {
///         if self.0 % 2 == 0 {
///             Ok(())
///         } else {
///             Err(Error::invalid("number is not even"))
///         }
///     }
/// }
///
/// inspect_leaf!(Even);
///
/// assert!(legit::validate(&Even(4)).is_ok());
/// assert_eq!(legit::validate(&Even(3)).unwrap_err().to_string(), "number is not even");
/// ```
pub trait Validator {
    /// Return `Ok(())` if the value is valid, otherwise the reason it is not.
    fn validate(&self) -> Result<(), Error>;
}

impl<T: Validator + ?Sized> Validator for &T {
    fn validate(&self) -> Result<(), Error> {
        (**self).validate()
    }
}

impl<T: Validator + ?Sized> Validator for Box<T> {
    fn validate(&self) -> Result<(), Error> {
        (**self).validate()
    }
}
