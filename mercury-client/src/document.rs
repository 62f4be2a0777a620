//! JSON document views.
//!
//! A document response is parsed once into a [`Document`] and shared by the
//! view wrapping it. Views expose named accessors; each accessor validates its
//! own field when called, so a document missing one field only fails the
//! accessor for that field.
//!
//! The helpers in this module implement the three accessor contracts:
//! - [`required_string`]: absent fails, scalars are coerced to text
//! - [`optional_object`]: absent (or not an object) is `None`, never fails
//! - [`embedded_list`]: a JSON array converted element by element

use std::marker::PhantomData;
use std::sync::Arc;

use bytes::Bytes;
use mercury_core::{DecodeError, Decoder, Document, parse_document};
use serde_json::Value;

use crate::convert::ConvertError;

/// A typed read-only view over a JSON document.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use mercury_client::{DocumentView, Document};
///
/// #[derive(Clone, Debug)]
/// struct LyricsView(Arc<Document>);
///
/// impl DocumentView for LyricsView {
///     fn from_document(document: Arc<Document>) -> Self { LyricsView(document) }
///     fn document(&self) -> &Document { &self.0 }
/// }
/// ```
pub trait DocumentView: Sized {
    /// Wrap a parsed document. Must not validate fields eagerly.
    fn from_document(document: Arc<Document>) -> Self;

    /// The wrapped document.
    fn document(&self) -> &Document;
}

/// Document decoding strategy for view type `V`.
pub struct DocumentDecoder<V> {
    _marker: PhantomData<fn() -> V>,
}

impl<V> DocumentDecoder<V> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<V> Default for DocumentDecoder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Decoder<V> for DocumentDecoder<V>
where
    V: DocumentView + 'static,
{
    fn name(&self) -> &'static str {
        "json"
    }

    fn decode(&self, payload: &[Bytes]) -> Result<V, DecodeError> {
        let document = parse_document(payload)?;
        Ok(V::from_document(Arc::new(document)))
    }
}

/// Read a required field as text.
///
/// Strings are returned as-is; numbers and booleans are rendered as their JSON text.
///
/// # Errors
/// - [`DecodeError::MissingField`] if the field is absent
/// - [`DecodeError::UnexpectedType`] for `null`, arrays and objects
pub fn required_string(document: &Document, field: &'static str) -> Result<String, DecodeError> {
    match document.get(field) {
        None => Err(DecodeError::MissingField(field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::Bool(b)) => Ok(b.to_string()),
        Some(Value::Null | Value::Array(_) | Value::Object(_)) => Err(DecodeError::UnexpectedType {
            field,
            expected: "a string",
        }),
    }
}

/// Read a required integer field.
pub fn required_i64(document: &Document, field: &'static str) -> Result<i64, DecodeError> {
    let value = document.get(field).ok_or(DecodeError::MissingField(field))?;
    value.as_i64().ok_or(DecodeError::UnexpectedType {
        field,
        expected: "an integer",
    })
}

/// Read an optional nested object.
pub fn optional_object<'a>(document: &'a Document, field: &str) -> Option<&'a Document> {
    document.get(field).and_then(Value::as_object)
}

/// Read a required JSON array.
pub fn required_array<'a>(
    document: &'a Document,
    field: &'static str,
) -> Result<&'a [Value], DecodeError> {
    let value = document.get(field).ok_or(DecodeError::MissingField(field))?;
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or(DecodeError::UnexpectedType {
            field,
            expected: "an array",
        })
}

/// Read a required JSON array and convert it to messages with `convert`.
///
/// One malformed element fails the whole field.
pub fn embedded_list<M>(
    document: &Document,
    field: &'static str,
    convert: fn(&[Value]) -> Result<Vec<M>, ConvertError>,
) -> Result<Vec<M>, DecodeError> {
    let array = required_array(document, field)?;
    convert(array).map_err(|e| e.into_decode_error(field))
}
