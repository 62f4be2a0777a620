//! Mercury decoding and construction errors.
//!
//! This module provides the error types shared by the request and response sides:
//! - [`DecodeError`]: Failures turning response payload bytes into typed values
//! - [`BuildError`]: Failures freezing a [`RawRequestBuilder`](crate::RawRequestBuilder)

/// Errors produced while decoding a Mercury response.
///
/// Document accessors raise [`MissingField`](DecodeError::MissingField),
/// [`UnexpectedType`](DecodeError::UnexpectedType) and
/// [`MalformedElement`](DecodeError::MalformedElement) lazily, only when the
/// accessor for that field is called.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The response carried no payload chunk to decode.
    #[error("response payload is empty")]
    EmptyPayload,

    /// Payload bytes do not match the expected protobuf schema.
    #[error("failed to decode protobuf message: {0}")]
    Parse(String),

    /// Payload bytes are not a JSON object.
    #[error("failed to decode JSON document: {0}")]
    DocumentParse(String),

    /// A required field is absent from the document.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// A field is present but holds the wrong kind of JSON value.
    #[error("field `{field}` is not {expected}")]
    UnexpectedType {
        field: &'static str,
        expected: &'static str,
    },

    /// One element of an embedded message list could not be converted.
    #[error("element {index} of `{field}` is malformed: {message}")]
    MalformedElement {
        field: &'static str,
        index: usize,
        message: String,
    },
}

impl DecodeError {
    /// Returns the document field this error is about, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            DecodeError::MissingField(field)
            | DecodeError::UnexpectedType { field, .. }
            | DecodeError::MalformedElement { field, .. } => Some(field),
            DecodeError::EmptyPayload | DecodeError::Parse(_) | DecodeError::DocumentParse(_) => {
                None
            }
        }
    }
}

impl From<prost::DecodeError> for DecodeError {
    fn from(err: prost::DecodeError) -> Self {
        DecodeError::Parse(err.to_string())
    }
}

/// Errors produced when building a [`RawRequest`](crate::RawRequest).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// `build()` was called before a non-empty URI was set.
    #[error("request uri is not set")]
    MissingUri,
}
