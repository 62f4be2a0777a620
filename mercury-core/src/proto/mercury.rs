//! Mercury framing messages.

/// Header frame sent ahead of every request's payload chunks.
#[derive(Clone, PartialEq, prost::Message)]
pub struct Header {
    #[prost(string, optional, tag = "1")]
    pub uri: Option<String>,
    #[prost(string, optional, tag = "2")]
    pub content_type: Option<String>,
    #[prost(string, optional, tag = "3")]
    pub method: Option<String>,
    #[prost(sint32, optional, tag = "4")]
    pub status_code: Option<i32>,
    #[prost(message, repeated, tag = "6")]
    pub user_fields: Vec<UserField>,
}

/// Free-form key/value pair carried in a [`Header`].
#[derive(Clone, PartialEq, prost::Message)]
pub struct UserField {
    #[prost(string, optional, tag = "1")]
    pub key: Option<String>,
    #[prost(bytes = "vec", optional, tag = "2")]
    pub value: Option<Vec<u8>>,
}

/// One sub-request inside a [`MercuryMultiGetRequest`].
#[derive(Clone, PartialEq, prost::Message)]
pub struct MercuryRequest {
    #[prost(string, optional, tag = "1")]
    pub uri: Option<String>,
    #[prost(string, optional, tag = "2")]
    pub content_type: Option<String>,
    #[prost(bytes = "vec", optional, tag = "3")]
    pub body: Option<Vec<u8>>,
    #[prost(bytes = "vec", optional, tag = "4")]
    pub etag: Option<Vec<u8>>,
}

/// One sub-reply inside a [`MercuryMultiGetReply`].
#[derive(Clone, PartialEq, prost::Message)]
pub struct MercuryReply {
    #[prost(sint32, optional, tag = "1")]
    pub status_code: Option<i32>,
    #[prost(string, optional, tag = "2")]
    pub status_message: Option<String>,
    #[prost(sint32, optional, tag = "4")]
    pub ttl: Option<i32>,
    #[prost(bytes = "vec", optional, tag = "5")]
    pub etag: Option<Vec<u8>>,
    #[prost(string, optional, tag = "6")]
    pub content_type: Option<String>,
    #[prost(bytes = "vec", optional, tag = "7")]
    pub body: Option<Vec<u8>>,
}

/// Batch of sub-requests sent as the single payload chunk of a multi-get.
#[derive(Clone, PartialEq, prost::Message)]
pub struct MercuryMultiGetRequest {
    #[prost(message, repeated, tag = "1")]
    pub request: Vec<MercuryRequest>,
}

/// Batch reply; `reply[i]` answers `request[i]`.
#[derive(Clone, PartialEq, prost::Message)]
pub struct MercuryMultiGetReply {
    #[prost(message, repeated, tag = "1")]
    pub reply: Vec<MercuryReply>,
}
