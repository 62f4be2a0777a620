//! Resource identifier capabilities.
//!
//! Identifier parsing and formatting live with the identifier types; the
//! catalog only needs to turn an identifier into the URI it is served under.

/// An identifier addressable over Mercury.
pub trait ToMercuryUri {
    /// The `hm://` URI the resource's metadata is served under.
    fn to_mercury_uri(&self) -> String;
}

/// A playlist identifier, which is served under two URIs.
pub trait PlaylistUri: ToMercuryUri {
    /// The `hm://` URI of the playlist's annotation (description, picture).
    fn to_annotation_uri(&self) -> String;
}

impl<T: ToMercuryUri + ?Sized> ToMercuryUri for &T {
    fn to_mercury_uri(&self) -> String {
        (**self).to_mercury_uri()
    }
}

impl<T: PlaylistUri + ?Sized> PlaylistUri for &T {
    fn to_annotation_uri(&self) -> String {
        (**self).to_annotation_uri()
    }
}
