//! JSON to protobuf message conversion.
//!
//! Station and context-resolve documents embed context pages and tracks in
//! their JSON form. These functions convert such arrays element by element,
//! keeping source order.

use mercury_core::DecodeError;
use mercury_core::proto::{ContextPage, ContextTrack};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// An array element that could not be converted.
#[derive(Debug, thiserror::Error)]
#[error("element {index} is malformed: {source}")]
pub struct ConvertError {
    /// Position of the offending element in the source array.
    pub index: usize,
    #[source]
    pub source: serde_json::Error,
}

impl ConvertError {
    pub(crate) fn into_decode_error(self, field: &'static str) -> DecodeError {
        DecodeError::MalformedElement {
            field,
            index: self.index,
            message: self.source.to_string(),
        }
    }
}

/// Convert a JSON array of context tracks.
pub fn json_to_context_tracks(array: &[Value]) -> Result<Vec<ContextTrack>, ConvertError> {
    json_to_messages(array)
}

/// Convert a JSON array of context pages, including their nested tracks.
pub fn json_to_context_pages(array: &[Value]) -> Result<Vec<ContextPage>, ConvertError> {
    json_to_messages(array)
}

/// Convert every element, failing on the first malformed one.
fn json_to_messages<M: DeserializeOwned>(array: &[Value]) -> Result<Vec<M>, ConvertError> {
    array
        .iter()
        .enumerate()
        .map(|(index, element)| {
            <M as Deserialize<'_>>::deserialize(element)
                .map_err(|source| ConvertError { index, source })
        })
        .collect()
}
