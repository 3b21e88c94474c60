//! Shape discovery for values under validation
//!
//! The engine never looks at a value's memory; it asks the value what it is.
//! [`Inspect`] answers two independent questions:
//!
//! - [`Inspect::shape`]: is this value absent, a struct (named fields), a
//!   sequence (indexed elements), or something else?
//! - [`Inspect::validator`]: can this value validate itself?
//!
//! Indirection (`Option`, `Box`, `&T`, `Rc`, `Arc`) forwards both questions to
//! the value it points at, so any nesting depth unwraps to the first concrete
//! value, and an inner `None` reports [`Shape::Absent`].
//!
//! Structs get their field list from [`inspect_struct!`](crate::inspect_struct);
//! leaf types are marked with [`inspect_leaf!`](crate::inspect_leaf).
//!
//! # Example
//!
//! ```
//! use legit::{Inspect, Shape};
//!
//! let tags = vec![1, 2, 3];
//! assert!(matches!(tags.shape(), Shape::Sequence(elements) if elements.len() == 3));
//!
//! let missing: Option<Box<Vec<u8>>> = None;
//! assert!(matches!(missing.shape(), Shape::Absent));
//!
//! assert!(matches!(42u8.shape(), Shape::Other));
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use crate::Validator;

/// The structural category of a value, with access to its members.
pub enum Shape<'a> {
    /// An unset optional; never validated.
    Absent,
    /// Named fields in declaration order.
    Struct(Vec<Field<'a>>),
    /// Elements in index order.
    Sequence(Vec<&'a dyn Inspect>),
    /// Anything else: scalars, strings, maps.
    Other,
}

impl fmt::Debug for Shape<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Absent => f.write_str("Absent"),
            Shape::Struct(fields) => f.debug_tuple("Struct").field(fields).finish(),
            Shape::Sequence(elements) => write!(f, "Sequence(len = {})", elements.len()),
            Shape::Other => f.write_str("Other"),
        }
    }
}

/// A named struct field.
pub struct Field<'a> {
    name: &'static str,
    access: Access<'a>,
}

/// Whether a field is part of its type's public contract.
pub enum Access<'a> {
    /// Declared `pub`; validated.
    Public(&'a dyn Inspect),
    /// Any other visibility; never validated.
    Private,
}

impl fmt::Debug for Access<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Access::Public(_) => f.write_str("Public(..)"),
            Access::Private => f.write_str("Private"),
        }
    }
}

impl<'a> Field<'a> {
    /// A `pub` field and its value.
    pub fn public(name: &'static str, value: &'a dyn Inspect) -> Self {
        Self {
            name,
            access: Access::Public(value),
        }
    }

    /// A non-`pub` field. Its value is never inspected.
    pub fn private(name: &'static str) -> Self {
        Self {
            name,
            access: Access::Private,
        }
    }

    /// The declared field identifier.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The field's value, if it is public.
    pub fn access(&self) -> &Access<'a> {
        &self.access
    }

    /// `true` if the field is declared `pub`.
    pub fn is_public(&self) -> bool {
        matches!(self.access, Access::Public(_))
    }
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("public", &self.is_public())
            .finish()
    }
}

/// A value the engine can walk.
///
/// Both methods have defaults describing an unrecognized value that cannot
/// validate itself, so `impl Inspect for MyType {}` opts a type in as
/// "ignored unless strict".
pub trait Inspect {
    /// The structural category of this value.
    fn shape(&self) -> Shape<'_> {
        Shape::Other
    }

    /// The self-validating capability, if this value has one.
    ///
    /// Takes precedence over [`Inspect::shape`] during traversal. An absent
    /// value returns `None`.
    fn validator(&self) -> Option<&dyn Validator> {
        None
    }
}

fn sequence<'a, T, I>(elements: I) -> Shape<'a>
where
    T: Inspect + 'a,
    I: IntoIterator<Item = &'a T>,
{
    Shape::Sequence(
        elements
            .into_iter()
            .map(|element| element as &dyn Inspect)
            .collect(),
    )
}

impl<T: Inspect> Inspect for Option<T> {
    fn shape(&self) -> Shape<'_> {
        match self {
            Some(value) => value.shape(),
            None => Shape::Absent,
        }
    }

    fn validator(&self) -> Option<&dyn Validator> {
        self.as_ref().and_then(|value| value.validator())
    }
}

// Indirection forwards to the target
macro_rules! impl_inspect_forward {
    ($($ptr:ident),+) => {
        $(
            impl<T: Inspect + ?Sized> Inspect for $ptr<T> {
                fn shape(&self) -> Shape<'_> {
                    (**self).shape()
                }

                fn validator(&self) -> Option<&dyn Validator> {
                    (**self).validator()
                }
            }
        )+
    };
}

impl_inspect_forward!(Box, Rc, Arc);

impl<T: Inspect + ?Sized> Inspect for &T {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }

    fn validator(&self) -> Option<&dyn Validator> {
        (**self).validator()
    }
}

impl<T: Inspect + ?Sized> Inspect for &mut T {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }

    fn validator(&self) -> Option<&dyn Validator> {
        (**self).validator()
    }
}

impl Inspect for dyn Validator {
    fn validator(&self) -> Option<&dyn Validator> {
        Some(self)
    }
}

impl<T: Inspect> Inspect for [T] {
    fn shape(&self) -> Shape<'_> {
        sequence(self)
    }
}

impl<T: Inspect, const N: usize> Inspect for [T; N] {
    fn shape(&self) -> Shape<'_> {
        sequence(self)
    }
}

impl<T: Inspect> Inspect for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        sequence(self)
    }
}

impl<T: Inspect> Inspect for VecDeque<T> {
    fn shape(&self) -> Shape<'_> {
        sequence(self)
    }
}

macro_rules! impl_inspect_other {
    ($($ty:ty),+ $(,)?) => {
        $(impl Inspect for $ty {})+
    };
}

impl_inspect_other!(
    (), bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    str, String,
);

impl<K, V, S> Inspect for HashMap<K, V, S> {}
impl<K, V> Inspect for BTreeMap<K, V> {}
impl<T, S> Inspect for HashSet<T, S> {}
impl<T> Inspect for BTreeSet<T> {}

/// Mark [`Validator`] types as self-validating.
///
/// Expands to an [`Inspect`] impl whose `validator` returns the value itself.
///
/// ```
/// use legit::{inspect_leaf, Error, Inspect, Validator};
///
/// struct Port(u16);
///
/// impl Validator for Port {
///     fn validate(&self) -> Result<(), Error> {
///         if self.0 >= 1024 { Ok(()) } else { Err(Error::invalid("port is reserved")) }
///     }
/// }
///
/// inspect_leaf!(Port);
///
/// assert!(Port(80).validator().is_some());
/// ```
#[macro_export]
macro_rules! inspect_leaf {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Inspect for $ty {
                fn validator(&self) -> ::core::option::Option<&dyn $crate::Validator> {
                    ::core::option::Option::Some(self)
                }
            }
        )+
    };
}

/// Define a struct whose `pub` fields the engine validates.
///
/// The struct is emitted unchanged. The generated [`Inspect`] impl lists every
/// field in declaration order; fields declared `pub` are walked, fields with
/// any other visibility (`pub(crate)`, `pub(super)`, none) are skipped and
/// need not implement [`Inspect`].
///
/// ```
/// use legit::{inspect_struct, validators::Lower};
///
/// inspect_struct! {
///     #[derive(Debug)]
///     pub struct Account {
///         pub handle: Lower,
///         secret: String,
///     }
/// }
///
/// let account = Account { handle: Lower::from("FOO"), secret: String::new() };
/// let err = legit::validate(&account).unwrap_err();
/// assert_eq!(err.to_string(), "handle: string is not lowercase");
/// # let _ = &account.secret;
/// ```
///
/// Generic and tuple structs are not supported; implement [`Inspect`] by hand
/// for those, returning [`Shape::Struct`] with [`Field::public`] entries.
#[macro_export]
macro_rules! inspect_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident { $($body:tt)* }
    ) => {
        $(#[$meta])*
        $vis struct $name { $($body)* }

        impl $crate::Inspect for $name {
            fn shape(&self) -> $crate::Shape<'_> {
                $crate::Shape::Struct($crate::__inspect_fields!(self [] $($body)*))
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __inspect_fields {
    ($this:ident [$($out:expr,)*]) => {
        ::std::vec![$($out),*]
    };
    (
        $this:ident [$($out:expr,)*]
        $(#[$m:meta])* pub $field:ident : $ty:ty $(, $($rest:tt)*)?
    ) => {
        $crate::__inspect_fields!(
            $this [$($out,)* $crate::Field::public(::core::stringify!($field), &$this.$field),]
            $($($rest)*)?
        )
    };
    (
        $this:ident [$($out:expr,)*]
        $(#[$m:meta])* pub ($($restriction:tt)*) $field:ident : $ty:ty $(, $($rest:tt)*)?
    ) => {
        $crate::__inspect_fields!(
            $this [$($out,)* $crate::Field::private(::core::stringify!($field)),]
            $($($rest)*)?
        )
    };
    (
        $this:ident [$($out:expr,)*]
        $(#[$m:meta])* $field:ident : $ty:ty $(, $($rest:tt)*)?
    ) => {
        $crate::__inspect_fields!(
            $this [$($out,)* $crate::Field::private(::core::stringify!($field)),]
            $($($rest)*)?
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::inspect_struct! {
        struct Sample {
            pub visible: Vec<u8>,
            pub(crate) crate_only: u8,
            hidden: NotInspectable,
        }
    }

    struct NotInspectable;

    fn sample() -> Sample {
        Sample {
            visible: vec![1, 2],
            crate_only: 0,
            hidden: NotInspectable,
        }
    }

    #[test]
    fn test_struct_fields_in_declaration_order() {
        let sample = sample();
        let Shape::Struct(fields) = sample.shape() else {
            panic!("expected struct shape");
        };
        let names: Vec<_> = fields.iter().map(Field::name).collect();
        assert_eq!(names, vec!["visible", "crate_only", "hidden"]);

        let public: Vec<_> = fields.iter().map(Field::is_public).collect();
        assert_eq!(public, vec![true, false, false]);
        let _ = (&sample.crate_only, &sample.hidden);
    }

    #[test]
    fn test_public_field_exposes_value() {
        let sample = sample();
        let Shape::Struct(fields) = sample.shape() else {
            panic!("expected struct shape");
        };
        match fields[0].access() {
            Access::Public(value) => {
                assert!(matches!(value.shape(), Shape::Sequence(elements) if elements.len() == 2))
            }
            Access::Private => panic!("visible field reported private"),
        }
    }

    #[test]
    fn test_option_unwraps_any_depth() {
        let deep: Option<Option<Box<Vec<u8>>>> = Some(Some(Box::new(vec![1])));
        assert!(matches!(deep.shape(), Shape::Sequence(_)));

        let inner_none: Option<Option<Vec<u8>>> = Some(None);
        assert!(matches!(inner_none.shape(), Shape::Absent));
        assert!(inner_none.validator().is_none());
    }

    #[test]
    fn test_pointer_forwarding() {
        let shared = Rc::new(Arc::new(vec![1u8]));
        assert!(matches!(shared.shape(), Shape::Sequence(_)));

        let borrowed: &[u8] = &[1, 2, 3];
        assert!(matches!(borrowed.shape(), Shape::Sequence(elements) if elements.len() == 3));
    }

    #[test]
    fn test_scalars_and_maps_are_other() {
        assert!(matches!("text".shape(), Shape::Other));
        assert!(matches!(String::from("text").shape(), Shape::Other));
        assert!(matches!(1.5f64.shape(), Shape::Other));
        assert!(matches!(HashMap::<String, u8>::new().shape(), Shape::Other));
        assert!(7u32.validator().is_none());
    }

    #[test]
    fn test_empty_sequence_shape() {
        let empty: Vec<String> = Vec::new();
        assert!(matches!(empty.shape(), Shape::Sequence(elements) if elements.is_empty()));
    }

    #[test]
    fn test_shape_debug() {
        let sample = sample();
        let rendered = format!("{:?}", sample.shape());
        assert!(rendered.contains("visible"));
        assert_eq!(format!("{:?}", vec![1u8].shape()), "Sequence(len = 1)");
    }

    #[test]
    fn test_access_debug() {
        let sample = sample();
        let Shape::Struct(fields) = sample.shape() else {
            panic!("expected struct shape");
        };
        assert_eq!(format!("{:?}", fields[0].access()), "Public(..)");
        assert_eq!(format!("{:?}", fields[2].access()), "Private");
    }
}
