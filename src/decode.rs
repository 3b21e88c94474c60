//! Body decoders selected by MIME type
//!
//! A [`Decoder`] turns a byte stream into a JSON document tree;
//! [`Form`](crate::form::Form) then deserializes the tree into the caller's
//! type and validates it.
//!
//! # Example
//!
//! ```
//! use legit::decode::{Decoders, Json};
//!
//! let decoders = Decoders::new().with(Json);
//! assert!(decoders.find("application/json; charset=utf-8").is_some());
//! assert!(decoders.find("application/xml").is_none());
//! ```

use std::error::Error as StdError;
use std::fmt;
use std::io::Read;

/// Decodes bodies of the MIME types it recognizes.
pub trait Decoder: fmt::Debug + Send + Sync {
    /// `true` if this decoder understands `mime`.
    fn matches(&self, mime: &str) -> bool;

    /// Read the whole body and parse it.
    fn decode(&self, reader: &mut dyn Read) -> Result<serde_json::Value, DecodeError>;
}

/// A body could not be parsed or did not fit the target type.
#[derive(Debug)]
pub struct DecodeError {
    source: Box<dyn StdError + Send + Sync>,
}

impl DecodeError {
    /// Wrap any decoder-specific failure.
    pub fn new(source: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.source, f)
    }
}

impl StdError for DecodeError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.source.as_ref())
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(err)
    }
}

/// Decoders tried in registration order.
#[derive(Debug, Default)]
pub struct Decoders(Vec<Box<dyn Decoder>>);

impl Decoders {
    /// An empty list; matches nothing.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a decoder.
    pub fn with(mut self, decoder: impl Decoder + 'static) -> Self {
        self.push(decoder);
        self
    }

    /// Append a decoder.
    pub fn push(&mut self, decoder: impl Decoder + 'static) {
        self.0.push(Box::new(decoder));
    }

    /// The first decoder that matches `mime`.
    pub fn find(&self, mime: &str) -> Option<&dyn Decoder> {
        self.0
            .iter()
            .map(|decoder| decoder.as_ref())
            .find(|decoder| decoder.matches(mime))
    }

    /// Number of registered decoders.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` if no decoder is registered.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// JSON bodies: any MIME type starting with `application/json`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Json;

impl Decoder for Json {
    fn matches(&self, mime: &str) -> bool {
        mime.starts_with("application/json")
    }

    fn decode(&self, reader: &mut dyn Read) -> Result<serde_json::Value, DecodeError> {
        Ok(serde_json::from_reader(reader)?)
    }
}
