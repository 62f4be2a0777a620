//! Transport seam.
//!
//! This crate performs no I/O. A session that can deliver a [`RawRequest`]
//! and collect its response implements [`Transport`], and
//! [`TypedRequest::execute`](crate::TypedRequest::execute) drives it.

use mercury_core::{MercuryResponse, RawRequest};

/// Something that can send a raw request and return its response.
///
/// Retries, timeouts and connection state all belong to the implementation.
pub trait Transport {
    /// Transport-level failure (connection lost, timeout, ...).
    type Error;

    /// Send `request` and wait for its complete response.
    fn send(&self, request: &RawRequest) -> Result<MercuryResponse, Self::Error>;
}

impl<X: Transport + ?Sized> Transport for &X {
    type Error = X::Error;

    fn send(&self, request: &RawRequest) -> Result<MercuryResponse, Self::Error> {
        (**self).send(request)
    }
}
