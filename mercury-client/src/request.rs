//! Typed Mercury requests.
//!
//! A [`TypedRequest<T>`] pairs a [`RawRequest`] with the decoding strategy
//! that turns the response payload into a `T`.

use std::fmt;

use bytes::Bytes;
use mercury_core::{BoxedDecoder, DecodeError, Decoder, MercuryResponse, ProtoDecoder, RawRequest};
use prost::Message;

use crate::document::{DocumentDecoder, DocumentView};
use crate::error::CallError;
use crate::transport::Transport;

/// A raw request together with the strategy decoding its response.
///
/// The decoder is shared: cloning a typed request is cheap, and decoding is a
/// pure function of the payload bytes.
///
/// # Example
///
/// ```ignore
/// use mercury_client::catalog;
///
/// let request = catalog::get_track(&track_id);
///
/// // Hand the raw request to the session, get the payload chunks back.
/// let chunks = session.send(request.raw())?;
///
/// let track = request.decode(&chunks)?;
/// println!("{:?}", track.name);
/// ```
pub struct TypedRequest<T> {
    raw: RawRequest,
    decoder: BoxedDecoder<T>,
}

impl<T: 'static> TypedRequest<T> {
    /// Pair a raw request with a custom decoder.
    pub fn new<D: Decoder<T>>(raw: RawRequest, decoder: D) -> Self {
        Self {
            raw,
            decoder: BoxedDecoder::new(decoder),
        }
    }

    /// The request to hand to the transport.
    pub fn raw(&self) -> &RawRequest {
        &self.raw
    }

    /// Extract the raw request, discarding the decoder.
    pub fn into_raw(self) -> RawRequest {
        self.raw
    }

    /// Name of the decoding strategy ("proto" or "json" for the built-in ones).
    pub fn strategy(&self) -> &'static str {
        self.decoder.name()
    }

    /// Decode the payload chunks of a response to this request.
    pub fn decode(&self, payload: &[Bytes]) -> Result<T, DecodeError> {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            uri = %self.raw.uri(),
            strategy = self.decoder.name(),
            chunks = payload.len(),
            "decoding mercury response"
        );

        self.decoder.decode(payload)
    }

    /// Decode a response to this request; only its payload is read.
    pub fn decode_response(&self, response: &MercuryResponse) -> Result<T, DecodeError> {
        self.decode(response.payload())
    }

    /// Send the request through `transport` and decode the response.
    ///
    /// # Errors
    /// - [`CallError::Transport`] if the transport fails
    /// - [`CallError::Status`] if the response status is not 2xx
    /// - [`CallError::Decode`] if the payload cannot be decoded
    pub fn execute<X>(&self, transport: &X) -> Result<T, CallError<X::Error>>
    where
        X: Transport + ?Sized,
    {
        let response = transport.send(&self.raw).map_err(CallError::Transport)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            uri = %response.uri(),
            status_code = response.status_code(),
            "received mercury response"
        );

        if !response.is_success() {
            return Err(CallError::Status {
                uri: response.uri().to_string(),
                status_code: response.status_code(),
            });
        }

        Ok(self.decode_response(&response)?)
    }
}

impl<M> TypedRequest<M>
where
    M: Message + Default + 'static,
{
    /// Decode the response as protobuf message `M`.
    pub fn proto(raw: RawRequest) -> Self {
        Self::new(raw, ProtoDecoder::<M>::new())
    }
}

impl<V> TypedRequest<V>
where
    V: DocumentView + 'static,
{
    /// Decode the response as a JSON document wrapped in view `V`.
    pub fn document(raw: RawRequest) -> Self {
        Self::new(raw, DocumentDecoder::<V>::new())
    }
}

impl<T> Clone for TypedRequest<T> {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.clone(),
            decoder: self.decoder.clone(),
        }
    }
}

impl<T: 'static> fmt::Debug for TypedRequest<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedRequest")
            .field("raw", &self.raw)
            .field("strategy", &self.strategy())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::InMemoryTransport;
    use crate::views::GenericDocument;
    use mercury_core::proto::Track;

    fn track_bytes(name: &str) -> Bytes {
        Bytes::from(
            Track {
                name: Some(name.to_string()),
                ..Default::default()
            }
            .encode_to_vec(),
        )
    }

    #[test]
    fn test_proto_request_decode() {
        let request = TypedRequest::<Track>::proto(RawRequest::get("hm://metadata/4/track/01"));
        assert_eq!(request.strategy(), "proto");

        let track = request.decode(&[track_bytes("Intro")]).unwrap();
        assert_eq!(track.name.as_deref(), Some("Intro"));
    }

    #[test]
    fn test_decode_is_repeatable() {
        let request = TypedRequest::<Track>::proto(RawRequest::get("hm://metadata/4/track/01"));
        let payload = [track_bytes("Intro")];

        assert_eq!(request.decode(&payload), request.decode(&payload));
        assert_eq!(request.clone().decode(&payload), request.decode(&payload));
    }

    #[test]
    fn test_document_request_decode() {
        let request = TypedRequest::<GenericDocument>::document(RawRequest::get("hm://x"));
        assert_eq!(request.strategy(), "json");

        let doc = request
            .decode(&[Bytes::from_static(br#"{"a": 1}"#)])
            .unwrap();
        assert_eq!(doc.document().get("a"), Some(&serde_json::json!(1)));

        assert!(matches!(
            request.decode(&[Bytes::from_static(b"{not json")]),
            Err(DecodeError::DocumentParse(_))
        ));
    }

    #[test]
    fn test_decode_response_reads_payload() {
        let request = TypedRequest::<Track>::proto(RawRequest::get("hm://metadata/4/track/01"));
        let response = MercuryResponse::new("hm://metadata/4/track/01", 200, vec![track_bytes("A")]);

        let track = request.decode_response(&response).unwrap();
        assert_eq!(track.name.as_deref(), Some("A"));
    }

    #[test]
    fn test_into_raw_and_debug() {
        let request = TypedRequest::<Track>::proto(RawRequest::get("hm://metadata/4/track/01"));
        assert!(format!("{:?}", request).contains("strategy: \"proto\""));
        assert_eq!(request.into_raw(), RawRequest::get("hm://metadata/4/track/01"));
    }

    #[test]
    fn test_execute_decodes_response() {
        let transport = InMemoryTransport::new()
            .with_response("hm://metadata/4/track/01", 200, vec![track_bytes("B")]);
        let request = TypedRequest::<Track>::proto(RawRequest::get("hm://metadata/4/track/01"));

        let track = request.execute(&transport).unwrap();
        assert_eq!(track.name.as_deref(), Some("B"));
        assert_eq!(transport.sent(), vec!["hm://metadata/4/track/01".to_string()]);
    }

    #[test]
    fn test_execute_surfaces_errors() {
        let transport = InMemoryTransport::new()
            .with_response("hm://missing", 404, vec![])
            .with_response("hm://garbage", 200, vec![Bytes::from_static(b"\xff\xff")]);

        let missing = TypedRequest::<Track>::proto(RawRequest::get("hm://missing"));
        assert_eq!(missing.execute(&transport).unwrap_err().status_code(), Some(404));

        let garbage = TypedRequest::<Track>::proto(RawRequest::get("hm://garbage"));
        assert!(matches!(
            garbage.execute(&transport),
            Err(CallError::Decode(DecodeError::Parse(_)))
        ));

        let unknown = TypedRequest::<Track>::proto(RawRequest::get("hm://nowhere"));
        assert!(matches!(
            unknown.execute(&transport),
            Err(CallError::Transport(_))
        ));
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn test_decode_with_subscriber() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let request = TypedRequest::<Track>::proto(RawRequest::get("hm://metadata/4/track/01"));
        assert!(request.decode(&[track_bytes("Traced")]).is_ok());
    }
}
