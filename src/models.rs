//! Wire models for the song search API / 歌曲搜索API数据模型

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    #[serde(rename = "trackId")]
    pub track_id: i64,
    #[serde(rename = "trackName")]
    pub track_name: String,
    #[serde(rename = "artistName")]
    pub artist_name: String,
    /// Upstream omits artwork for some tracks / 部分曲目没有封面图
    #[serde(rename = "artworkUrl100", default)]
    pub artwork_url: Option<String>,
}

/// Top-level response envelope, discarded after `results` is extracted / 响应外层结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<Song>,
}

/// Decode a raw JSON body into the response envelope / 解码JSON响应体
pub fn decode_search_response(data: &[u8]) -> Result<SearchResponse, SearchError> {
    Ok(serde_json::from_slice(data)?)
}
