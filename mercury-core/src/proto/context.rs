//! Playback context messages.
//!
//! Unlike the other mirrors these also appear inside JSON documents (station
//! and context-resolve responses), so they derive `serde::Deserialize` for
//! their snake_case JSON form.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Clone, PartialEq, prost::Message, Deserialize)]
pub struct ContextTrack {
    #[prost(string, optional, tag = "1")]
    pub uri: Option<String>,
    #[prost(string, optional, tag = "2")]
    pub uid: Option<String>,
    /// Binary id; not present in the JSON form.
    #[prost(bytes = "vec", optional, tag = "3")]
    #[serde(skip)]
    pub gid: Option<Vec<u8>>,
    #[prost(map = "string, string", tag = "4")]
    #[serde(default, deserialize_with = "scalar_map")]
    pub metadata: HashMap<String, String>,
}

#[derive(Clone, PartialEq, prost::Message, Deserialize)]
pub struct ContextPage {
    #[prost(string, optional, tag = "1")]
    pub page_url: Option<String>,
    #[prost(string, optional, tag = "2")]
    pub next_page_url: Option<String>,
    #[prost(map = "string, string", tag = "3")]
    #[serde(default, deserialize_with = "scalar_map")]
    pub metadata: HashMap<String, String>,
    #[prost(message, repeated, tag = "4")]
    #[serde(default)]
    pub tracks: Vec<ContextTrack>,
    #[prost(bool, optional, tag = "5")]
    pub loading: Option<bool>,
}

/// Metadata values arrive as strings, numbers or booleans; all are kept as text.
fn scalar_map<'de, D>(deserializer: D) -> Result<HashMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    HashMap::<String, Value>::deserialize(deserializer)?
        .into_iter()
        .map(|(key, value)| match value {
            Value::String(s) => Ok((key, s)),
            Value::Number(n) => Ok((key, n.to_string())),
            Value::Bool(b) => Ok((key, b.to_string())),
            other => Err(serde::de::Error::custom(format!(
                "metadata value for `{key}` is not a scalar: {other}"
            ))),
        })
        .collect()
}
