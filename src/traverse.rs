//! Recursive dispatch over inspected values
//!
//! One call to [`Traversal::validate`] handles one value:
//!
//! 1. self-validating → its own answer, members are never walked;
//! 2. absent → valid, nothing else is looked at;
//! 3. struct → every public field, failures positioned by field name;
//! 4. sequence → every element, failures positioned by index;
//! 5. anything else → valid, or [`Error::NotAValidator`] in strict mode.
//!
//! Struct and sequence scans never stop at the first failure. Each nested
//! struct or sequence contributes at most one failure to its parent: its own
//! collection, wrapped at the position where it was found.

use crate::{Access, Error, Errors, Field, FieldError, IndexError, Inspect, Legit, Shape};

#[derive(Debug, Clone, Copy)]
pub(crate) struct Traversal {
    strict: bool,
    max_depth: usize,
}

impl Traversal {
    pub(crate) fn new(config: &Legit) -> Self {
        Self {
            strict: config.is_strict(),
            max_depth: config.max_depth(),
        }
    }

    /// `depth` counts the struct/sequence frames enclosing `value`.
    pub(crate) fn validate<T: Inspect + ?Sized>(&self, value: &T, depth: usize) -> Result<(), Error> {
        // An absent value has no validator, so this never runs for one
        if let Some(validator) = value.validator() {
            #[cfg(feature = "tracing")]
            tracing::trace!(depth, "self-validating value");
            return validator.validate();
        }

        let shape = value.shape();
        if let Shape::Absent = shape {
            #[cfg(feature = "tracing")]
            tracing::trace!(depth, "absent value skipped");
            return Ok(());
        }

        match shape {
            Shape::Struct(fields) => self.validate_struct(fields, depth),
            Shape::Sequence(elements) => self.validate_sequence(elements, depth),
            Shape::Absent | Shape::Other if self.strict => {
                #[cfg(feature = "tracing")]
                tracing::trace!(depth, "unrecognized value rejected");
                Err(Error::NotAValidator)
            }
            Shape::Absent | Shape::Other => Ok(()),
        }
    }

    pub(crate) fn validate_struct(&self, fields: Vec<Field<'_>>, depth: usize) -> Result<(), Error> {
        let depth = self.enter(depth)?;

        let failures: Vec<Error> = fields
            .iter()
            .filter_map(|field| match field.access() {
                Access::Public(value) => self
                    .validate(*value, depth)
                    .err()
                    .map(|cause| FieldError::new(field.name(), cause).into()),
                Access::Private => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(field = field.name(), "private field skipped");
                    None
                }
            })
            .collect();

        collect(failures, "struct")
    }

    pub(crate) fn validate_sequence(
        &self,
        elements: Vec<&dyn Inspect>,
        depth: usize,
    ) -> Result<(), Error> {
        if elements.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::trace!(depth, "empty sequence");
            return Ok(());
        }

        let depth = self.enter(depth)?;

        let failures: Vec<Error> = elements
            .into_iter()
            .enumerate()
            .filter_map(|(index, element)| {
                self.validate(element, depth)
                    .err()
                    .map(|cause| IndexError::new(index, cause).into())
            })
            .collect();

        collect(failures, "sequence")
    }

    fn enter(&self, depth: usize) -> Result<usize, Error> {
        let depth = depth + 1;
        if depth > self.max_depth {
            #[cfg(feature = "tracing")]
            tracing::warn!(limit = self.max_depth, "validation depth limit exceeded");
            return Err(Error::DepthExceeded {
                limit: self.max_depth,
            });
        }
        Ok(depth)
    }
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn collect(failures: Vec<Error>, kind: &'static str) -> Result<(), Error> {
    match Errors::from_vec(failures) {
        Some(errors) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(kind, failures = errors.len(), "validation failed");
            Err(Error::Multiple(errors))
        }
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::Lower;
    use crate::{inspect_struct, Validator};

    inspect_struct! {
        #[allow(non_snake_case)]
        struct Pair {
            pub First: Lower,
            pub Last: Lower,
        }
    }

    inspect_struct! {
        #[allow(non_snake_case)]
        struct WithPrivate {
            pub Name: Lower,
            name: Lower,
        }
    }

    inspect_struct! {
        struct Node {
            pub child: Option<Box<Node>>,
        }
    }

    fn lenient() -> Traversal {
        Traversal::new(&Legit::new())
    }

    fn strict() -> Traversal {
        Traversal::new(&Legit::new().with_strict(true))
    }

    fn lower_err() -> Error {
        Error::invalid("string is not lowercase")
    }

    fn chain(depth: usize) -> Node {
        (0..depth).fold(Node { child: None }, |node, _| Node {
            child: Some(Box::new(node)),
        })
    }

    #[test]
    fn test_validate_struct() {
        let pair = Pair {
            First: Lower::from("foo"),
            Last: Lower::from("FOO"),
        };
        assert_eq!(
            lenient().validate(&pair, 0),
            Err(Error::Multiple(Errors::new(
                FieldError::new("Last", lower_err()).into()
            )))
        );
    }

    #[test]
    fn test_private_field_skipped() {
        let value = WithPrivate {
            Name: Lower::from("foo"),
            name: Lower::from("FOO"),
        };
        assert!(strict().validate(&value, 0).is_ok());
        let _ = &value.name;
    }

    #[test]
    fn test_validate_slice() {
        let values = [Lower::from("foo"), Lower::from("FOO")];
        assert_eq!(
            lenient().validate(&values[..], 0),
            Err(Error::Multiple(Errors::new(
                IndexError::new(1, lower_err()).into()
            )))
        );
    }

    #[test]
    fn test_empty_sequence_is_valid() {
        let empty: Vec<Lower> = Vec::new();
        assert!(strict().validate(&empty, 0).is_ok());
        assert!(strict().validate_sequence(Vec::new(), 0).is_ok());
    }

    #[test]
    fn test_custom_validator() {
        assert!(lenient().validate(&Lower::from("foo"), 0).is_ok());
        assert_eq!(lenient().validate(&Lower::from("FOO"), 0), Err(lower_err()));
    }

    #[test]
    fn test_strict_rejects_unknown() {
        assert_eq!(strict().validate("foo", 0), Err(Error::NotAValidator));
        assert_eq!(strict().validate(&42i32, 0), Err(Error::NotAValidator));
    }

    #[test]
    fn test_lenient_accepts_unknown() {
        assert!(lenient().validate("foo", 0).is_ok());
        assert!(lenient().validate(&std::collections::HashMap::<u8, u8>::new(), 0).is_ok());
    }

    #[test]
    fn test_absent_is_valid_in_strict_mode() {
        assert!(strict().validate(&None::<String>, 0).is_ok());
    }

    #[test]
    fn test_validator_precedence_over_sequence() {
        struct Tags(Vec<Lower>);

        impl Validator for Tags {
            fn validate(&self) -> Result<(), Error> {
                if self.0.len() > 1 {
                    Err(Error::invalid("too many tags"))
                } else {
                    Ok(())
                }
            }
        }

        impl Inspect for Tags {
            fn shape(&self) -> Shape<'_> {
                self.0.shape()
            }

            fn validator(&self) -> Option<&dyn Validator> {
                Some(self)
            }
        }

        // Elements are uppercase but never inspected
        let tags = Tags(vec![Lower::from("A")]);
        assert!(lenient().validate(&tags, 0).is_ok());

        let tags = Tags(vec![Lower::from("A"), Lower::from("B")]);
        assert_eq!(lenient().validate(&tags, 0), Err(Error::invalid("too many tags")));
    }

    #[test]
    fn test_self_validating_value_is_never_shaped() {
        use std::cell::Cell;

        struct Counted {
            items: Vec<Lower>,
            shaped: Cell<usize>,
        }

        impl Validator for Counted {
            fn validate(&self) -> Result<(), Error> {
                Ok(())
            }
        }

        impl Inspect for Counted {
            fn shape(&self) -> Shape<'_> {
                self.shaped.set(self.shaped.get() + 1);
                self.items.shape()
            }

            fn validator(&self) -> Option<&dyn Validator> {
                Some(self)
            }
        }

        let counted = Counted {
            items: vec![Lower::from("A"); 3],
            shaped: Cell::new(0),
        };
        assert!(strict().validate(&counted, 0).is_ok());
        assert!(lenient().validate(&Some(&counted), 0).is_ok());
        assert_eq!(counted.shaped.get(), 0);
    }

    #[test]
    fn test_depth_limit() {
        let traversal = Traversal::new(&Legit::new().with_max_depth(3));
        assert!(traversal.validate(&chain(2), 0).is_ok());

        let err = traversal.validate(&chain(3), 0).unwrap_err();
        let rendered = err.to_string();
        assert_eq!(
            rendered,
            "child: child: child: nesting exceeds maximum depth of 3"
        );
    }

    #[test]
    fn test_depth_guard_on_deep_input() {
        let deep = chain(10_000);
        let err = lenient().validate(&deep, 0).unwrap_err();
        assert!(err.to_string().ends_with("nesting exceeds maximum depth of 256"));

        // Tear down iteratively
        let mut next = deep.child;
        while let Some(mut node) = next {
            next = node.child.take();
        }
    }

    #[test]
    fn test_nested_failures_wrap_once_per_level() {
        inspect_struct! {
            struct Outer {
                pub pairs: Vec<Pair>,
            }
        }

        let outer = Outer {
            pairs: vec![
                Pair {
                    First: Lower::from("ok"),
                    Last: Lower::from("ok"),
                },
                Pair {
                    First: Lower::from("BAD"),
                    Last: Lower::from("ok"),
                },
            ],
        };

        let expected = Error::Multiple(Errors::new(
            FieldError::new(
                "pairs",
                Error::Multiple(Errors::new(
                    IndexError::new(
                        1,
                        Error::Multiple(Errors::new(FieldError::new("First", lower_err()).into())),
                    )
                    .into(),
                )),
            )
            .into(),
        ));
        assert_eq!(lenient().validate(&outer, 0), Err(expected));
    }

    #[cfg(feature = "tracing")]
    #[test]
    #[tracing_test::traced_test]
    fn test_traces_depth_limit() {
        let traversal = Traversal::new(&Legit::new().with_max_depth(1));
        assert!(traversal.validate(&chain(1), 0).is_err());
        assert!(logs_contain("validation depth limit exceeded"));
    }

    #[cfg(feature = "tracing")]
    #[test]
    #[tracing_test::traced_test]
    fn test_traces_failure_summary() {
        let pair = Pair {
            First: Lower::from("A"),
            Last: Lower::from("B"),
        };
        assert!(lenient().validate(&pair, 0).is_err());
        assert!(logs_contain("validation failed"));
        assert!(logs_contain("failures=2"));
    }
}
