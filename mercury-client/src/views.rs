//! Concrete document views for the JSON-backed Mercury endpoints.

use std::sync::Arc;

use mercury_core::proto::{ContextPage, ContextTrack};
use mercury_core::{DecodeError, Document};
use serde_json::Value;

use crate::convert::{json_to_context_pages, json_to_context_tracks};
use crate::document::{
    DocumentView, embedded_list, optional_object, required_array, required_i64, required_string,
};

/// Radio station resolution result (`hm://radio-apollo/v3/stations/...`).
#[derive(Clone, Debug)]
pub struct StationsView {
    document: Arc<Document>,
}

impl StationsView {
    /// Station URI.
    pub fn uri(&self) -> Result<String, DecodeError> {
        required_string(&self.document, "uri")
    }

    /// Tracks queued on the station, in document order.
    pub fn tracks(&self) -> Result<Vec<ContextTrack>, DecodeError> {
        embedded_list(&self.document, "tracks", json_to_context_tracks)
    }
}

impl DocumentView for StationsView {
    fn from_document(document: Arc<Document>) -> Self {
        Self { document }
    }

    fn document(&self) -> &Document {
        &self.document
    }
}

/// Context resolution result (`hm://context-resolve/v1/...`).
#[derive(Clone, Debug)]
pub struct ResolvedContextView {
    document: Arc<Document>,
}

impl ResolvedContextView {
    /// Context pages, in document order.
    pub fn pages(&self) -> Result<Vec<ContextPage>, DecodeError> {
        embedded_list(&self.document, "pages", json_to_context_pages)
    }

    /// Context metadata, if the document carries any.
    pub fn metadata(&self) -> Option<&Document> {
        optional_object(&self.document, "metadata")
    }

    pub fn uri(&self) -> Result<String, DecodeError> {
        required_string(&self.document, "uri")
    }

    pub fn url(&self) -> Result<String, DecodeError> {
        required_string(&self.document, "url")
    }
}

impl DocumentView for ResolvedContextView {
    fn from_document(document: Arc<Document>) -> Self {
        Self { document }
    }

    fn document(&self) -> &Document {
        &self.document
    }
}

/// A document with no fixed shape.
///
/// Use [`into_view`](GenericDocument::into_view) to reinterpret it once the
/// caller knows what the endpoint returns.
#[derive(Clone, Debug)]
pub struct GenericDocument {
    document: Arc<Document>,
}

impl GenericDocument {
    /// Take the document, cloning it only if another view still shares it.
    pub fn into_document(self) -> Document {
        Arc::try_unwrap(self.document).unwrap_or_else(|shared| (*shared).clone())
    }

    /// Reinterpret the same document as another view, without copying it.
    pub fn into_view<V: DocumentView>(self) -> V {
        V::from_document(self.document)
    }
}

impl DocumentView for GenericDocument {
    fn from_document(document: Arc<Document>) -> Self {
        Self { document }
    }

    fn document(&self) -> &Document {
        &self.document
    }
}

/// Keymaster access token response.
#[derive(Clone, Debug)]
pub struct TokenDocument {
    document: Arc<Document>,
}

impl TokenDocument {
    pub fn access_token(&self) -> Result<String, DecodeError> {
        required_string(&self.document, "accessToken")
    }

    /// Usually `Bearer`.
    pub fn token_type(&self) -> Result<String, DecodeError> {
        required_string(&self.document, "tokenType")
    }

    /// Token lifetime in seconds.
    pub fn expires_in(&self) -> Result<i64, DecodeError> {
        required_i64(&self.document, "expiresIn")
    }

    /// Granted scopes; empty when the field is absent.
    pub fn scope(&self) -> Result<Vec<String>, DecodeError> {
        if !self.document.contains_key("scope") {
            return Ok(Vec::new());
        }

        required_array(&self.document, "scope")?
            .iter()
            .enumerate()
            .map(|(index, value)| match value {
                Value::String(s) => Ok(s.clone()),
                other => Err(DecodeError::MalformedElement {
                    field: "scope",
                    index,
                    message: format!("expected a string, got {other}"),
                }),
            })
            .collect()
    }
}

impl DocumentView for TokenDocument {
    fn from_document(document: Arc<Document>) -> Self {
        Self { document }
    }

    fn document(&self) -> &Document {
        &self.document
    }
}
