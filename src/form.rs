//! Decode-then-validate for request bodies
//!
//! ```
//! use legit::form::{Form, FormError};
//! use legit::validators::Lower;
//!
//! let form = Form::new();
//!
//! let body: Lower = form.parse_and_validate(&br#""foo""#[..], "application/json").unwrap();
//! assert_eq!(body.as_str(), "foo");
//!
//! let err = form.parse_and_validate::<Lower>(&br#""FOO""#[..], "application/json").unwrap_err();
//! assert_eq!(err.to_string(), "string is not lowercase");
//!
//! let err = form.parse_and_validate::<Lower>(&b""[..], "application/xml").unwrap_err();
//! assert!(matches!(err, FormError::Encoding(_)));
//! ```

use std::error::Error as StdError;
use std::fmt;
use std::io::Read;

use serde::de::DeserializeOwned;

use crate::decode::{DecodeError, Decoders, Json};
use crate::{Error, Inspect, Legit};

/// Why a body was rejected.
#[derive(Debug)]
pub enum FormError {
    /// No decoder matches the MIME type (carried here).
    Encoding(String),
    /// The body is malformed or does not fit the target type.
    Decode(DecodeError),
    /// The decoded value failed validation.
    Invalid(Error),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::Encoding(_) => f.write_str("unknown encoding"),
            FormError::Decode(err) => fmt::Display::fmt(err, f),
            FormError::Invalid(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl StdError for FormError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            FormError::Encoding(_) => None,
            FormError::Decode(err) => Some(err),
            FormError::Invalid(err) => Some(err),
        }
    }
}

impl From<DecodeError> for FormError {
    fn from(err: DecodeError) -> Self {
        FormError::Decode(err)
    }
}

impl From<Error> for FormError {
    fn from(err: Error) -> Self {
        FormError::Invalid(err)
    }
}

/// An engine paired with the decoders it accepts bodies through.
#[derive(Debug)]
pub struct Form {
    /// Engine applied to every decoded value.
    pub legit: Legit,
    /// Decoders tried in order.
    pub decoders: Decoders,
}

impl Form {
    /// Default engine and a single [`Json`] decoder.
    pub fn new() -> Self {
        Self {
            legit: Legit::new(),
            decoders: Decoders::new().with(Json),
        }
    }

    /// Use another engine configuration.
    pub fn with_legit(mut self, legit: Legit) -> Self {
        self.legit = legit;
        self
    }

    /// Decode `reader` with the first decoder matching `mime`, then validate
    /// the result with [`Legit::validate_any`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip_all, fields(mime = mime))
    )]
    pub fn parse_and_validate<T>(&self, mut reader: impl Read, mime: &str) -> Result<T, FormError>
    where
        T: DeserializeOwned + Inspect,
    {
        let decoder = self
            .decoders
            .find(mime)
            .ok_or_else(|| FormError::Encoding(mime.to_owned()))?;

        #[cfg(feature = "tracing")]
        tracing::trace!(?decoder, "decoder selected");

        let document = decoder.decode(&mut reader)?;
        let value: T = serde_json::from_value(document).map_err(DecodeError::from)?;

        self.legit.validate_any(&value)?;
        Ok(value)
    }
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}
