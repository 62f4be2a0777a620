//! Raw Mercury responses as handed back by a transport.

use bytes::Bytes;

/// A response received for a [`RawRequest`](crate::RawRequest).
///
/// Decoding only reads [`payload`](MercuryResponse::payload); the URI and
/// status code are kept for callers correlating or checking responses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MercuryResponse {
    uri: String,
    status_code: i32,
    payload: Vec<Bytes>,
}

impl MercuryResponse {
    pub fn new<S: Into<String>>(uri: S, status_code: i32, payload: Vec<Bytes>) -> Self {
        Self {
            uri: uri.into(),
            status_code,
            payload,
        }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn status_code(&self) -> i32 {
        self.status_code
    }

    pub fn payload(&self) -> &[Bytes] {
        &self.payload
    }

    /// Returns true for 2xx status codes.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Decompose into URI, status code and payload.
    pub fn into_parts(self) -> (String, i32, Vec<Bytes>) {
        (self.uri, self.status_code, self.payload)
    }
}
