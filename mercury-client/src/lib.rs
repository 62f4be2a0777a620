//! Typed Mercury requests.
//!
//! This crate builds requests for Mercury, the `hm://` URI-addressed
//! request/subscribe mechanism, and decodes their responses into typed
//! values. It performs no I/O: a session implementing [`Transport`] (or any
//! caller holding the raw response chunks) does the sending.
//!
//! ## Example
//!
//! ```ignore
//! use mercury_client::{catalog, TokenDocument};
//!
//! // Protobuf-backed resource
//! let request = catalog::get_track(&track_id);
//! let track = request.execute(&session)?;
//! println!("{:?}", track.name);
//!
//! // JSON-backed resource
//! let stations = catalog::get_station_for("spotify:album:2up3OPMp9Tb4dAKM2erWXQ")
//!     .execute(&session)?;
//! for track in stations.tracks()? {
//!     println!("{:?}", track.uri);
//! }
//!
//! // Reinterpret a generic document
//! let token: TokenDocument = catalog::request_token(&device_id, "playlist-read")
//!     .execute(&session)?
//!     .into_view();
//! ```
//!
//! ## Decoding
//!
//! Every [`TypedRequest`] carries one of two strategies:
//!
//! - **proto**: the first payload chunk is parsed as a protobuf message
//!   (see [`mercury_core::proto`])
//! - **json**: the first payload chunk is parsed as a JSON object and wrapped
//!   in a [`DocumentView`]. Views check their fields only when an accessor is
//!   called, so a document missing one field still yields every other field.
//!
//! ## Multi-get
//!
//! [`catalog::multi_get`] bundles sub-requests into one call. The reply holds
//! one sub-reply per sub-request, in the same order.
//!
//! ## Feature Flags
//!
//! | Feature | Description | Dependencies |
//! |---------|-------------|--------------|
//! | `tracing` | Debug events on batch assembly, response receipt and decode | `tracing` |

pub mod catalog;
pub mod convert;
mod document;
mod error;
mod id;
mod request;
mod transport;
mod views;

#[cfg(test)]
mod testing;

pub use document::{
    DocumentDecoder, DocumentView, embedded_list, optional_object, required_array, required_i64,
    required_string,
};
pub use error::CallError;
pub use id::{PlaylistUri, ToMercuryUri};
pub use request::TypedRequest;
pub use transport::Transport;
pub use views::{GenericDocument, ResolvedContextView, StationsView, TokenDocument};

// Re-export core types that users need
pub use mercury_core::{
    BuildError, DecodeError, Document, MercuryResponse, Method, RawRequest, RawRequestBuilder,
    proto,
};
