//! Catalogue metadata messages served under `hm://metadata/4/...`.

#[derive(Clone, PartialEq, prost::Message)]
pub struct Track {
    #[prost(bytes = "vec", optional, tag = "1")]
    pub gid: Option<Vec<u8>>,
    #[prost(string, optional, tag = "2")]
    pub name: Option<String>,
    #[prost(message, optional, tag = "3")]
    pub album: Option<Album>,
    #[prost(message, repeated, tag = "4")]
    pub artist: Vec<Artist>,
    #[prost(sint32, optional, tag = "5")]
    pub number: Option<i32>,
    #[prost(sint32, optional, tag = "6")]
    pub disc_number: Option<i32>,
    /// Milliseconds.
    #[prost(sint32, optional, tag = "7")]
    pub duration: Option<i32>,
    #[prost(sint32, optional, tag = "8")]
    pub popularity: Option<i32>,
    #[prost(bool, optional, tag = "9")]
    pub explicit: Option<bool>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Artist {
    #[prost(bytes = "vec", optional, tag = "1")]
    pub gid: Option<Vec<u8>>,
    #[prost(string, optional, tag = "2")]
    pub name: Option<String>,
    #[prost(sint32, optional, tag = "3")]
    pub popularity: Option<i32>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Album {
    #[prost(bytes = "vec", optional, tag = "1")]
    pub gid: Option<Vec<u8>>,
    #[prost(string, optional, tag = "2")]
    pub name: Option<String>,
    #[prost(message, repeated, tag = "3")]
    pub artist: Vec<Artist>,
    #[prost(string, optional, tag = "5")]
    pub label: Option<String>,
    #[prost(sint32, optional, tag = "7")]
    pub popularity: Option<i32>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Episode {
    #[prost(bytes = "vec", optional, tag = "1")]
    pub gid: Option<Vec<u8>>,
    #[prost(string, optional, tag = "2")]
    pub name: Option<String>,
    /// Milliseconds.
    #[prost(sint32, optional, tag = "7")]
    pub duration: Option<i32>,
    #[prost(string, optional, tag = "64")]
    pub description: Option<String>,
    #[prost(sint32, optional, tag = "65")]
    pub number: Option<i32>,
    #[prost(message, optional, tag = "68")]
    pub cover_image: Option<ImageGroup>,
    #[prost(bool, optional, tag = "70")]
    pub explicit: Option<bool>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Show {
    #[prost(bytes = "vec", optional, tag = "1")]
    pub gid: Option<Vec<u8>>,
    #[prost(string, optional, tag = "2")]
    pub name: Option<String>,
    #[prost(string, optional, tag = "64")]
    pub description: Option<String>,
    #[prost(string, optional, tag = "66")]
    pub publisher: Option<String>,
    #[prost(bool, optional, tag = "68")]
    pub explicit: Option<bool>,
    #[prost(message, optional, tag = "69")]
    pub cover_image: Option<ImageGroup>,
    #[prost(message, repeated, tag = "70")]
    pub episode: Vec<Episode>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ImageGroup {
    #[prost(message, repeated, tag = "1")]
    pub image: Vec<Image>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Image {
    #[prost(bytes = "vec", optional, tag = "1")]
    pub file_id: Option<Vec<u8>>,
    /// Size class: 0 default, 1 small, 2 large, 3 xlarge.
    #[prost(int32, optional, tag = "2")]
    pub size: Option<i32>,
    #[prost(sint32, optional, tag = "3")]
    pub width: Option<i32>,
    #[prost(sint32, optional, tag = "4")]
    pub height: Option<i32>,
}
