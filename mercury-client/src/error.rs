//! Client-side call errors.
//!
//! This module provides [`CallError`], the error type of
//! [`TypedRequest::execute`](crate::TypedRequest::execute).

use mercury_core::DecodeError;

/// Failure of a request sent through a [`Transport`](crate::Transport).
///
/// `E` is the transport's own error type; it is carried through untouched.
#[derive(Debug, thiserror::Error)]
pub enum CallError<E> {
    /// The transport failed to deliver the request or receive the response.
    #[error("transport error: {0}")]
    Transport(E),

    /// The response came back with a non-2xx status code.
    #[error("{uri} answered with status {status_code}")]
    Status { uri: String, status_code: i32 },

    /// The response payload could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}

impl<E> CallError<E> {
    /// Returns the decode error, if this is one.
    pub fn as_decode(&self) -> Option<&DecodeError> {
        match self {
            CallError::Decode(err) => Some(err),
            _ => None,
        }
    }

    /// Returns the status code for [`Status`](CallError::Status) errors.
    pub fn status_code(&self) -> Option<i32> {
        match self {
            CallError::Status { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}
