//! Response decoding strategies.
//!
//! This module provides the [`Decoder`] trait turning response payload chunks
//! into typed values, and the building blocks shared by every strategy:
//! - [`ProtoDecoder`]: Parses the first payload chunk as a protobuf message
//! - [`parse_document`]: Parses the first payload chunk as a JSON object
//! - [`BoxedDecoder`]: Type-erased, shareable decoder storage

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use bytes::Bytes;
use prost::Message;

use crate::error::DecodeError;

/// A JSON document: the top-level object of a document response.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Decoding strategy for a typed request.
///
/// Implementations must be pure: the result depends only on `payload`, and
/// decoding the same chunks twice yields the same value.
///
/// # Example
///
/// ```ignore
/// use bytes::Bytes;
/// use mercury_core::{DecodeError, Decoder, first_chunk};
///
/// struct Utf8Decoder;
///
/// impl Decoder<String> for Utf8Decoder {
///     fn name(&self) -> &'static str { "utf8" }
///
///     fn decode(&self, payload: &[Bytes]) -> Result<String, DecodeError> {
///         let chunk = first_chunk(payload)?;
///         String::from_utf8(chunk.to_vec()).map_err(|e| DecodeError::Parse(e.to_string()))
///     }
/// }
/// ```
pub trait Decoder<T>: Send + Sync + 'static {
    /// Short name of the strategy (e.g., "proto", "json").
    fn name(&self) -> &'static str;

    /// Decode response payload chunks.
    fn decode(&self, payload: &[Bytes]) -> Result<T, DecodeError>;
}

/// A boxed decoder for type-erased storage.
pub struct BoxedDecoder<T>(Arc<dyn Decoder<T>>);

impl<T: 'static> BoxedDecoder<T> {
    /// Create a new boxed decoder.
    pub fn new<D: Decoder<T>>(decoder: D) -> Self {
        BoxedDecoder(Arc::new(decoder))
    }

    /// Get the strategy name.
    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// Decode response payload chunks.
    pub fn decode(&self, payload: &[Bytes]) -> Result<T, DecodeError> {
        self.0.decode(payload)
    }
}

impl<T> Clone for BoxedDecoder<T> {
    fn clone(&self) -> Self {
        BoxedDecoder(Arc::clone(&self.0))
    }
}

impl<T: 'static> fmt::Debug for BoxedDecoder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BoxedDecoder").field(&self.name()).finish()
    }
}

/// Return the chunk a single-value response is decoded from.
///
/// Trailing chunks are ignored.
///
/// # Errors
/// Returns [`DecodeError::EmptyPayload`] when there are no chunks.
pub fn first_chunk(payload: &[Bytes]) -> Result<&Bytes, DecodeError> {
    payload.first().ok_or(DecodeError::EmptyPayload)
}

/// Protobuf decoding strategy for message type `M`.
pub struct ProtoDecoder<M> {
    _marker: PhantomData<fn() -> M>,
}

impl<M> ProtoDecoder<M> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<M> Default for ProtoDecoder<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Decoder<M> for ProtoDecoder<M>
where
    M: Message + Default + 'static,
{
    fn name(&self) -> &'static str {
        "proto"
    }

    fn decode(&self, payload: &[Bytes]) -> Result<M, DecodeError> {
        let chunk = first_chunk(payload)?;
        Ok(M::decode(chunk.as_ref())?)
    }
}

/// Parse the first payload chunk as a JSON object.
///
/// # Errors
/// - [`DecodeError::EmptyPayload`] when there are no chunks
/// - [`DecodeError::DocumentParse`] when the chunk is not JSON, or its top level is not an object
pub fn parse_document(payload: &[Bytes]) -> Result<Document, DecodeError> {
    let chunk = first_chunk(payload)?;
    serde_json::from_slice::<Document>(chunk)
        .map_err(|e| DecodeError::DocumentParse(e.to_string()))
}
