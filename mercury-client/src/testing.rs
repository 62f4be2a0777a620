//! Test doubles shared by the unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use bytes::Bytes;
use mercury_core::{MercuryResponse, RawRequest};

use crate::id::{PlaylistUri, ToMercuryUri};
use crate::transport::Transport;

/// Metadata identifier backed by a hex id and a resource kind.
pub(crate) struct FakeId {
    pub kind: &'static str,
    pub hex: &'static str,
}

impl ToMercuryUri for FakeId {
    fn to_mercury_uri(&self) -> String {
        format!("hm://metadata/4/{}/{}", self.kind, self.hex)
    }
}

pub(crate) struct FakePlaylist(pub &'static str);

impl ToMercuryUri for FakePlaylist {
    fn to_mercury_uri(&self) -> String {
        format!("hm://playlist/v2/playlist/{}", self.0)
    }
}

impl PlaylistUri for FakePlaylist {
    fn to_annotation_uri(&self) -> String {
        format!("hm://playlist-annotate/v1/annotation/user/alice/playlist/{}", self.0)
    }
}

/// Transport answering from a fixed table, recording every URI sent.
#[derive(Default)]
pub(crate) struct InMemoryTransport {
    responses: HashMap<String, (i32, Vec<Bytes>)>,
    sent: Mutex<Vec<String>>,
}

impl InMemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(mut self, uri: &str, status_code: i32, payload: Vec<Bytes>) -> Self {
        self.responses
            .insert(uri.to_string(), (status_code, payload));
        self
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

impl Transport for InMemoryTransport {
    type Error = String;

    fn send(&self, request: &RawRequest) -> Result<MercuryResponse, Self::Error> {
        self.sent.lock().unwrap().push(request.uri().to_string());

        let (status_code, payload) = self
            .responses
            .get(request.uri())
            .cloned()
            .ok_or_else(|| format!("no route to {}", request.uri()))?;
        Ok(MercuryResponse::new(request.uri(), status_code, payload))
    }
}
