//! Protobuf message mirrors for the Mercury wire schema.
//!
//! These are hand-maintained `prost` structs carrying the wire tags of the
//! messages this workspace sends and decodes. Only the fields the request
//! layer reads are mirrored; unknown fields are skipped by `prost` on decode.
//!
//! - [`mercury`]: request header and multi-get batch messages
//! - [`metadata`]: track, artist, album, episode and show metadata
//! - [`playlist`]: playlist contents and annotations
//! - [`context`]: context pages and tracks, also decodable from JSON

pub mod context;
pub mod mercury;
pub mod metadata;
pub mod playlist;

pub use context::{ContextPage, ContextTrack};
pub use mercury::{
    Header, MercuryMultiGetReply, MercuryMultiGetRequest, MercuryReply, MercuryRequest, UserField,
};
pub use metadata::{Album, Artist, Episode, Image, ImageGroup, Show, Track};
pub use playlist::{Item, ListItems, PlaylistAnnotation, SelectedListContent};
