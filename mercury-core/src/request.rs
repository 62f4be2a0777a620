//! Raw Mercury requests.
//!
//! A [`RawRequest`] is the untyped value a transport sends: a [`Method`], an
//! optional content type, the target URI, header user fields and the ordered
//! payload chunks. It is immutable once built.

use std::fmt;
use std::str::FromStr;

use bytes::Bytes;
use prost::Message;

use crate::error::BuildError;
use crate::proto::{Header, MercuryMultiGetRequest, MercuryRequest, UserField};

/// Content type of a batched multi-get request.
pub const MULTI_GET_CONTENT_TYPE: &str = "vnd.spotify/mercury-mget-request";

/// Mercury request intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Method {
    #[default]
    Get,
    Sub,
    Unsub,
    Send,
}

impl Method {
    /// Get the wire string for this method.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Sub => "SUB",
            Method::Unsub => "UNSUB",
            Method::Send => "SEND",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Method`] from a string fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseMethodError(());

impl fmt::Display for ParseMethodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown mercury method")
    }
}

impl std::error::Error for ParseMethodError {}

impl FromStr for Method {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(Method::Get),
            "SUB" => Ok(Method::Sub),
            "UNSUB" => Ok(Method::Unsub),
            "SEND" => Ok(Method::Send),
            _ => Err(ParseMethodError(())),
        }
    }
}

/// An immutable, untyped Mercury request.
///
/// # Example
///
/// ```
/// use mercury_core::{Method, RawRequest};
///
/// let request = RawRequest::get("hm://metadata/4/track/abcd");
/// assert_eq!(request.method(), Method::Get);
/// assert_eq!(request.uri(), "hm://metadata/4/track/abcd");
/// assert!(request.content_type().is_none());
/// assert!(request.payload().is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawRequest {
    method: Method,
    content_type: Option<String>,
    uri: String,
    user_fields: Vec<(String, Bytes)>,
    payload: Vec<Bytes>,
}

impl RawRequest {
    /// Create a GET request with no content type and no payload.
    pub fn get<S: Into<String>>(uri: S) -> Self {
        Self::simple(Method::Get, uri.into())
    }

    /// Create a SUB request for `uri`.
    pub fn sub<S: Into<String>>(uri: S) -> Self {
        Self::simple(Method::Sub, uri.into())
    }

    /// Create an UNSUB request for `uri`.
    pub fn unsub<S: Into<String>>(uri: S) -> Self {
        Self::simple(Method::Unsub, uri.into())
    }

    /// Create a SEND request carrying a single payload chunk.
    pub fn send<S: Into<String>, B: Into<Bytes>>(uri: S, payload: B) -> Self {
        let mut request = Self::simple(Method::Send, uri.into());
        request.payload.push(payload.into());
        request
    }

    /// Create a batched GET carrying `batch` as its single payload chunk.
    pub fn multi_get<S: Into<String>>(uri: S, batch: &MercuryMultiGetRequest) -> Self {
        let mut request = Self::simple(Method::Get, uri.into());
        request.content_type = Some(MULTI_GET_CONTENT_TYPE.to_string());
        request.payload.push(Bytes::from(batch.encode_to_vec()));
        request
    }

    /// Start building a request field by field.
    pub fn builder() -> RawRequestBuilder {
        RawRequestBuilder::default()
    }

    fn simple(method: Method, uri: String) -> Self {
        debug_assert!(!uri.is_empty(), "mercury request uri must not be empty");
        Self {
            method,
            content_type: None,
            uri,
            user_fields: Vec::new(),
            payload: Vec::new(),
        }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Header user fields, in insertion order.
    pub fn user_fields(&self) -> &[(String, Bytes)] {
        &self.user_fields
    }

    /// Payload chunks, in insertion order.
    pub fn payload(&self) -> &[Bytes] {
        &self.payload
    }

    /// Render the header frame a transport sends ahead of the payload.
    pub fn header(&self) -> Header {
        Header {
            uri: Some(self.uri.clone()),
            content_type: self.content_type.clone(),
            method: Some(self.method.as_str().to_string()),
            status_code: None,
            user_fields: self
                .user_fields
                .iter()
                .map(|(key, value)| UserField {
                    key: Some(key.clone()),
                    value: Some(value.to_vec()),
                })
                .collect(),
        }
    }

    /// Render the request as wire parts: the encoded header followed by the payload chunks.
    pub fn to_parts(&self) -> Vec<Bytes> {
        let mut parts = Vec::with_capacity(1 + self.payload.len());
        parts.push(Bytes::from(self.header().encode_to_vec()));
        parts.extend(self.payload.iter().cloned());
        parts
    }

    /// Render the request as one entry of a multi-get batch.
    ///
    /// Only the first payload chunk is carried over, as the sub-request body.
    pub fn to_sub_request(&self) -> MercuryRequest {
        MercuryRequest {
            uri: Some(self.uri.clone()),
            content_type: self.content_type.clone(),
            body: self.payload.first().map(|chunk| chunk.to_vec()),
            etag: None,
        }
    }
}

/// Builder for [`RawRequest`].
///
/// Fields accumulate until [`build`](RawRequestBuilder::build) freezes them.
/// The method defaults to [`Method::Get`].
///
/// # Example
///
/// ```
/// use mercury_core::{Method, RawRequest};
///
/// let request = RawRequest::builder()
///     .method(Method::Send)
///     .content_type("application/json")
///     .uri("hm://playlist/user/alice/rootlist")
///     .payload(&b"{}"[..])
///     .build()?;
///
/// assert_eq!(request.payload().len(), 1);
/// # Ok::<(), mercury_core::BuildError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct RawRequestBuilder {
    method: Method,
    content_type: Option<String>,
    uri: Option<String>,
    user_fields: Vec<(String, Bytes)>,
    payload: Vec<Bytes>,
}

impl RawRequestBuilder {
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn content_type<S: Into<String>>(mut self, content_type: S) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn uri<S: Into<String>>(mut self, uri: S) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// Append a header user field.
    pub fn user_field<K: Into<String>, V: Into<Bytes>>(mut self, key: K, value: V) -> Self {
        self.user_fields.push((key.into(), value.into()));
        self
    }

    /// Append an opaque payload chunk.
    pub fn payload<B: Into<Bytes>>(mut self, chunk: B) -> Self {
        self.payload.push(chunk.into());
        self
    }

    /// Append a protobuf message, encoded, as a payload chunk.
    pub fn proto_payload<M: Message>(self, message: &M) -> Self {
        self.payload(message.encode_to_vec())
    }

    /// Freeze the accumulated fields.
    ///
    /// # Errors
    /// Returns [`BuildError::MissingUri`] if no non-empty URI was set.
    pub fn build(self) -> Result<RawRequest, BuildError> {
        let uri = self
            .uri
            .filter(|uri| !uri.is_empty())
            .ok_or(BuildError::MissingUri)?;

        Ok(RawRequest {
            method: self.method,
            content_type: self.content_type,
            uri,
            user_fields: self.user_fields,
            payload: self.payload,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_request() {
        let request = RawRequest::get("hm://metadata/4/track/00ff");

        assert_eq!(request.method(), Method::Get);
        assert_eq!(request.uri(), "hm://metadata/4/track/00ff");
        assert_eq!(request.content_type(), None);
        assert!(request.payload().is_empty());
        assert!(request.user_fields().is_empty());
    }

    #[test]
    fn test_sub_unsub_send() {
        assert_eq!(RawRequest::sub("hm://pusher/v1").method(), Method::Sub);
        assert_eq!(RawRequest::unsub("hm://pusher/v1").method(), Method::Unsub);

        let send = RawRequest::send("hm://event-service/v1/events", &b"evt"[..]);
        assert_eq!(send.method(), Method::Send);
        assert_eq!(send.payload(), &[Bytes::from_static(b"evt")]);
    }

    #[test]
    fn test_method_round_trip_strings() {
        for method in [Method::Get, Method::Sub, Method::Unsub, Method::Send] {
            assert_eq!(method.as_str().parse::<Method>(), Ok(method));
        }
        assert!("POST".parse::<Method>().is_err());
        assert!("get".parse::<Method>().is_err());
    }

    #[test]
    fn test_builder_accumulates_fields_in_order() {
        let request = RawRequest::builder()
            .method(Method::Send)
            .content_type(MULTI_GET_CONTENT_TYPE)
            .uri("hm://x")
            .user_field("MC-Cache-Policy", &b"private"[..])
            .payload(&b"one"[..])
            .payload(&b"two"[..])
            .build()
            .unwrap();

        assert_eq!(request.method(), Method::Send);
        assert_eq!(request.content_type(), Some(MULTI_GET_CONTENT_TYPE));
        assert_eq!(request.uri(), "hm://x");
        assert_eq!(request.user_fields().len(), 1);
        assert_eq!(request.user_fields()[0].0, "MC-Cache-Policy");
        assert_eq!(
            request.payload(),
            &[Bytes::from_static(b"one"), Bytes::from_static(b"two")]
        );
    }

    #[test]
    fn test_builder_defaults_to_get() {
        let request = RawRequest::builder().uri("hm://x").build().unwrap();
        assert_eq!(request, RawRequest::get("hm://x"));
    }

    #[test]
    fn test_builder_requires_uri() {
        assert_eq!(
            RawRequest::builder().payload(&b"x"[..]).build(),
            Err(BuildError::MissingUri)
        );
        assert_eq!(
            RawRequest::builder().uri("").build(),
            Err(BuildError::MissingUri)
        );
    }

    #[test]
    fn test_builder_proto_payload() {
        let batch = MercuryMultiGetRequest {
            request: vec![RawRequest::get("hm://a").to_sub_request()],
        };
        let request = RawRequest::builder()
            .uri("hm://batch")
            .proto_payload(&batch)
            .build()
            .unwrap();

        let decoded = MercuryMultiGetRequest::decode(request.payload()[0].clone()).unwrap();
        assert_eq!(decoded, batch);
    }

    #[test]
    fn test_multi_get_request() {
        let batch = MercuryMultiGetRequest {
            request: vec![
                RawRequest::get("hm://a").to_sub_request(),
                RawRequest::get("hm://b").to_sub_request(),
            ],
        };
        let request = RawRequest::multi_get("hm://metadata/4/tracks", &batch);

        assert_eq!(request.method(), Method::Get);
        assert_eq!(request.content_type(), Some(MULTI_GET_CONTENT_TYPE));
        assert_eq!(request.payload().len(), 1);
        assert_eq!(
            MercuryMultiGetRequest::decode(request.payload()[0].clone()).unwrap(),
            batch
        );
    }

    #[test]
    fn test_header_and_parts() {
        let request = RawRequest::builder()
            .method(Method::Sub)
            .uri("hm://remote/user/alice")
            .user_field("key", &b"value"[..])
            .payload(&b"body"[..])
            .build()
            .unwrap();

        let parts = request.to_parts();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[1], Bytes::from_static(b"body"));

        let header = Header::decode(parts[0].clone()).unwrap();
        assert_eq!(header.uri.as_deref(), Some("hm://remote/user/alice"));
        assert_eq!(header.method.as_deref(), Some("SUB"));
        assert_eq!(header.content_type, None);
        assert_eq!(header.user_fields.len(), 1);
        assert_eq!(header.user_fields[0].key.as_deref(), Some("key"));
        assert_eq!(header.user_fields[0].value.as_deref(), Some(&b"value"[..]));
    }

    #[test]
    fn test_to_sub_request() {
        let sub = RawRequest::send("hm://a", &b"payload"[..]).to_sub_request();
        assert_eq!(sub.uri.as_deref(), Some("hm://a"));
        assert_eq!(sub.body.as_deref(), Some(&b"payload"[..]));

        let empty = RawRequest::get("hm://b").to_sub_request();
        assert_eq!(empty.body, None);
    }
}
