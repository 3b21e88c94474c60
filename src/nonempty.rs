//! Non-empty vector backing failure collections
//!
//! A failure collection that reaches the caller always holds at least one
//! failure. [`NonEmptyVec`] makes that a property of the type: the only ways
//! in are a first element or a checked conversion, and nothing removes
//! elements.
//!
//! ```
//! use legit::NonEmptyVec;
//!
//! let mut reasons = NonEmptyVec::singleton("too short");
//! reasons.push("not lowercase");
//! assert_eq!(reasons.first(), &"too short");
//! assert_eq!(reasons.len(), 2);
//!
//! // Slice methods come through `Deref`
//! assert!(reasons.contains(&"not lowercase"));
//!
//! assert!(NonEmptyVec::from_vec(Vec::<&str>::new()).is_none());
//! ```

use std::ops::Deref;

use crate::Semigroup;

/// A `Vec` with at least one element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyVec<T>(Vec<T>);

impl<T> NonEmptyVec<T> {
    /// One element.
    pub fn singleton(first: T) -> Self {
        NonEmptyVec(vec![first])
    }

    /// `None` for an empty `vec`.
    pub fn from_vec(vec: Vec<T>) -> Option<Self> {
        if vec.is_empty() {
            None
        } else {
            Some(NonEmptyVec(vec))
        }
    }

    /// The first element.
    pub fn first(&self) -> &T {
        &self.0[0]
    }

    /// Every element after the first.
    pub fn rest(&self) -> &[T] {
        &self.0[1..]
    }

    /// Append at the end.
    pub fn push(&mut self, value: T) {
        self.0.push(value);
    }

    /// Give up the guarantee.
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T> Deref for NonEmptyVec<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T> Semigroup for NonEmptyVec<T> {
    fn combine(mut self, other: Self) -> Self {
        self.0.extend(other.0);
        self
    }
}

impl<T> Extend<T> for NonEmptyVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<T> IntoIterator for NonEmptyVec<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a NonEmptyVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T> From<NonEmptyVec<T>> for Vec<T> {
    fn from(nev: NonEmptyVec<T>) -> Self {
        nev.0
    }
}
