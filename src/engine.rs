//! Validation engine configuration and entry points
//!
//! [`Legit`] is plain, immutable configuration: whether unrecognized values
//! are rejected (`strict`) and how deep struct/sequence nesting may go. It is
//! `Copy`, so pass it wherever it is needed; [`Legit::DEFAULT`] backs the
//! crate-level [`validate`](crate::validate) functions.
//!
//! # Examples
//!
//! ```
//! use legit::{inspect_struct, Error, Legit, validators::Lower};
//!
//! inspect_struct! {
//!     pub struct Signup {
//!         pub handle: Lower,
//!         pub referrer: Option<Lower>,
//!         pub note: String,
//!     }
//! }
//!
//! let signup = Signup { handle: Lower::from("ada"), referrer: None, note: String::new() };
//!
//! // Lenient: `note` has no validator and is ignored
//! assert!(Legit::new().validate_any(&signup).is_ok());
//!
//! // Strict: every public field must be validatable
//! let err = Legit::new().with_strict(true).validate_any(&signup).unwrap_err();
//! assert_eq!(err.to_string(), "note: field is not a validator");
//! ```

use crate::traverse::Traversal;
use crate::{Error, Errors, Inspect, Shape, Validation};

/// Default limit on struct/sequence nesting.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Validation engine configuration.
///
/// Cheap to copy and never mutated by validation, so a single value can be
/// shared freely between threads.
///
/// # Example
///
/// ```
/// use legit::Legit;
///
/// let engine = Legit::new().with_strict(true).with_max_depth(32);
/// assert!(engine.is_strict());
/// assert_eq!(engine.max_depth(), 32);
///
/// assert!(!Legit::DEFAULT.is_strict());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Legit {
    strict: bool,
    max_depth: usize,
}

impl Legit {
    /// Lenient engine with the default depth limit.
    pub const DEFAULT: Legit = Legit::new();

    /// Create a lenient engine with the default depth limit.
    pub const fn new() -> Self {
        Self {
            strict: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Reject values that are neither structs, sequences nor self-validating.
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Limit struct/sequence nesting; deeper values fail with
    /// [`Error::DepthExceeded`].
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Whether strict mode is on.
    pub const fn is_strict(&self) -> bool {
        self.strict
    }

    /// The nesting limit.
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Validate any value.
    ///
    /// An absent value is valid. A self-validating value is asked directly and
    /// its answer returned verbatim. Structs and sequences are walked; every
    /// failure is reported, positioned by field name or index.
    ///
    /// ```
    /// use legit::{Legit, validators::Lower};
    ///
    /// let engine = Legit::new();
    /// assert!(engine.validate_any(&Lower::from("foo")).is_ok());
    /// assert!(engine.validate_any(&None::<Lower>).is_ok());
    ///
    /// let err = engine.validate_any(&vec![Lower::from("foo"), Lower::from("FOO")]).unwrap_err();
    /// assert_eq!(err.to_string(), "1: string is not lowercase");
    /// ```
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip_all, fields(strict = self.strict, max_depth = self.max_depth))
    )]
    pub fn validate_any<T: Inspect + ?Sized>(&self, value: &T) -> Result<(), Error> {
        Traversal::new(self).validate(value, 0)
    }

    /// Validate a value that must be a struct.
    ///
    /// Fails with [`Error::NotAStruct`] for anything else, including an absent
    /// value and a self-validating non-struct. A self-validating struct has its
    /// fields walked; its own validator is not called.
    ///
    /// ```
    /// use legit::{Error, Legit, validators::Lower};
    ///
    /// let err = Legit::new().validate_as_struct(&Lower::from("foo")).unwrap_err();
    /// assert_eq!(err, Error::NotAStruct);
    /// ```
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip_all, fields(strict = self.strict, max_depth = self.max_depth))
    )]
    pub fn validate_as_struct<T: Inspect + ?Sized>(&self, value: &T) -> Result<(), Error> {
        match value.shape() {
            Shape::Struct(fields) => Traversal::new(self).validate_struct(fields, 0),
            _ => Err(Error::NotAStruct),
        }
    }

    /// Validate a value that must be a sequence.
    ///
    /// Fails with [`Error::NotASequence`] for anything else. An empty sequence
    /// is valid.
    ///
    /// ```
    /// use legit::{Error, Legit, validators::Lower};
    ///
    /// let engine = Legit::new();
    /// assert!(engine.validate_as_sequence(&Vec::<Lower>::new()).is_ok());
    /// assert_eq!(engine.validate_as_sequence(&Lower::from("foo")), Err(Error::NotASequence));
    /// ```
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip_all, fields(strict = self.strict, max_depth = self.max_depth))
    )]
    pub fn validate_as_sequence<T: Inspect + ?Sized>(&self, value: &T) -> Result<(), Error> {
        match value.shape() {
            Shape::Sequence(elements) => Traversal::new(self).validate_sequence(elements, 0),
            _ => Err(Error::NotASequence),
        }
    }

    /// Validate a value and hand it back on success.
    ///
    /// Failures are returned as an [`Errors`] collection so independent checks
    /// can be combined with [`Validation::and`], keeping every failure.
    ///
    /// ```
    /// use legit::{Legit, Validation, validators::{Email, Positive}};
    ///
    /// let engine = Legit::new();
    /// let result = engine
    ///     .check(Email::from("not an email"))
    ///     .and(engine.check(Positive::from(-1)));
    ///
    /// match result {
    ///     Validation::Failure(errors) => assert_eq!(errors.len(), 2),
    ///     Validation::Success(_) => panic!("expected failures"),
    /// }
    /// ```
    pub fn check<T: Inspect>(&self, value: T) -> Validation<T, Errors> {
        match self.validate_any(&value) {
            Ok(()) => Validation::success(value),
            Err(error) => Validation::failure(Errors::from(error)),
        }
    }
}

impl Default for Legit {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::Lower;
    use crate::{inspect_struct, FieldError, IndexError};

    inspect_struct! {
        #[allow(non_snake_case)]
        struct Named {
            pub Name: Lower,
        }
    }

    fn lower_err() -> Error {
        Error::invalid("string is not lowercase")
    }

    fn named(name: &str) -> Named {
        Named {
            Name: Lower::from(name),
        }
    }

    #[test]
    fn test_new_is_lenient() {
        let engine = Legit::new();
        assert!(!engine.is_strict());
        assert_eq!(engine.max_depth(), DEFAULT_MAX_DEPTH);
        assert_eq!(engine, Legit::default());
        assert_eq!(engine, Legit::DEFAULT);
    }

    #[test]
    fn test_builder() {
        let engine = Legit::new().with_strict(true).with_max_depth(4);
        assert!(engine.is_strict());
        assert_eq!(engine.max_depth(), 4);
    }

    #[test]
    fn test_validate_any_struct() {
        let err = Legit::new().validate_any(&named("FOO")).unwrap_err();
        assert_eq!(
            err,
            Error::Multiple(Errors::new(FieldError::new("Name", lower_err()).into()))
        );
    }

    #[test]
    fn test_validate_any_slice() {
        let err = Legit::new().validate_any(&[Lower::from("FOO")][..]).unwrap_err();
        assert_eq!(
            err,
            Error::Multiple(Errors::new(IndexError::new(0, lower_err()).into()))
        );
    }

    #[test]
    fn test_validate_any_custom_validator_verbatim() {
        let engine = Legit::new();
        assert!(engine.validate_any(&Lower::from("foo")).is_ok());
        assert_eq!(engine.validate_any(&Lower::from("FOO")), Err(lower_err()));
    }

    #[test]
    fn test_validate_any_absent() {
        let engine = Legit::new().with_strict(true);
        assert!(engine.validate_any(&None::<Named>).is_ok());
        assert!(engine.validate_any(&Some(None::<Box<Named>>)).is_ok());
    }

    #[test]
    fn test_validate_any_through_pointers() {
        let boxed = Box::new(Some(Box::new(named("FOO"))));
        let err = Legit::new().validate_any(&boxed).unwrap_err();
        assert_eq!(err.to_string(), "Name: string is not lowercase");
    }

    #[test]
    fn test_strict_unknown_top_level() {
        assert_eq!(
            Legit::new().with_strict(true).validate_any("foo"),
            Err(Error::NotAValidator)
        );
        assert!(Legit::new().validate_any("foo").is_ok());
    }

    #[test]
    fn test_validate_as_struct() {
        let engine = Legit::new();
        assert_eq!(engine.validate_as_struct(&Lower::from("foo")), Err(Error::NotAStruct));
        assert_eq!(engine.validate_as_struct(&vec![named("foo")]), Err(Error::NotAStruct));
        assert_eq!(engine.validate_as_struct(&None::<Named>), Err(Error::NotAStruct));
        assert_eq!(
            engine.validate_as_struct(&named("FOO")).unwrap_err().to_string(),
            "Name: string is not lowercase"
        );
        assert!(engine.validate_as_struct(&Box::new(named("foo"))).is_ok());
    }

    #[test]
    fn test_validate_as_sequence() {
        let engine = Legit::new();
        assert_eq!(engine.validate_as_sequence(&Lower::from("foo")), Err(Error::NotASequence));
        assert_eq!(engine.validate_as_sequence(&named("foo")), Err(Error::NotASequence));
        assert_eq!(
            engine.validate_as_sequence(&vec![Lower::from("FOO")]),
            Err(Error::Multiple(Errors::new(IndexError::new(0, lower_err()).into())))
        );
    }

    #[test]
    fn test_check_hands_value_back() {
        let engine = Legit::new();
        match engine.check(named("foo")) {
            Validation::Success(value) => assert_eq!(value.Name.as_str(), "foo"),
            Validation::Failure(errors) => panic!("unexpected failure: {}", errors),
        }
    }

    #[test]
    fn test_check_collects_failures() {
        let engine = Legit::new();
        let result = engine
            .check(named("FOO"))
            .and(engine.check(Lower::from("BAR")));
        match result {
            Validation::Failure(errors) => {
                let texts: Vec<_> = errors.iter().map(|e| e.to_string()).collect();
                assert_eq!(
                    texts,
                    vec!["Name: string is not lowercase", "string is not lowercase"]
                );
            }
            Validation::Success(_) => panic!("expected failure"),
        }
    }

    #[test]
    fn test_engine_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Legit>();

        let engine = Legit::new();
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(move || engine.validate_any(&vec![Lower::from("FOO")])))
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap().is_err());
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_deserialize_with_defaults() {
        let engine: Legit = serde_json::from_str(r#"{"strict": true}"#).unwrap();
        assert!(engine.is_strict());
        assert_eq!(engine.max_depth(), DEFAULT_MAX_DEPTH);

        let engine: Legit = serde_json::from_str("{}").unwrap();
        assert_eq!(engine, Legit::DEFAULT);
    }
}
