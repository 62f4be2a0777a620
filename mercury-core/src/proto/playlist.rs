//! Playlist messages served under `hm://playlist/...`.

/// Playlist or rootlist contents at a revision.
#[derive(Clone, PartialEq, prost::Message)]
pub struct SelectedListContent {
    #[prost(bytes = "vec", optional, tag = "1")]
    pub revision: Option<Vec<u8>>,
    #[prost(int32, optional, tag = "2")]
    pub length: Option<i32>,
    #[prost(message, optional, tag = "4")]
    pub contents: Option<ListItems>,
    #[prost(bool, optional, tag = "8")]
    pub multiple_heads: Option<bool>,
    #[prost(bool, optional, tag = "9")]
    pub up_to_date: Option<bool>,
    #[prost(int64, optional, tag = "15")]
    pub timestamp: Option<i64>,
    #[prost(string, optional, tag = "16")]
    pub owner_username: Option<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListItems {
    #[prost(int32, optional, tag = "1")]
    pub pos: Option<i32>,
    #[prost(bool, optional, tag = "2")]
    pub truncated: Option<bool>,
    #[prost(message, repeated, tag = "3")]
    pub items: Vec<Item>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Item {
    #[prost(string, optional, tag = "1")]
    pub uri: Option<String>,
}

/// Description and picture attached to a playlist.
#[derive(Clone, PartialEq, prost::Message)]
pub struct PlaylistAnnotation {
    #[prost(string, optional, tag = "1")]
    pub description: Option<String>,
    #[prost(string, optional, tag = "2")]
    pub picture: Option<String>,
    #[prost(bool, optional, tag = "7")]
    pub taken_down: Option<bool>,
}
