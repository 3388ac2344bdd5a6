//! iTunes search client implementation / iTunes搜索客户端实现

use async_trait::async_trait;
use reqwest::Client;

use super::config::ItunesConfig;
use crate::error::SearchError;
use crate::models::{decode_search_response, Song};
use crate::store::SongSearcher;

/// Client over the iTunes Search API / iTunes搜索API客户端
pub struct ItunesClient {
    config: ItunesConfig,
    client: Client,
}

impl ItunesClient {
    /// Create the client with a reusable HTTP connection pool / 创建客户端
    pub fn new(config: ItunesConfig) -> Result<Self, SearchError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self { config, client })
    }

    /// Build the request URL; the query value is percent-encoded / 构建请求URL
    fn search_url(&self, query: &str) -> String {
        format!(
            "{}?term={}&entity={}",
            self.config.endpoint,
            urlencoding::encode(query),
            urlencoding::encode(&self.config.entity)
        )
    }
}

#[async_trait]
impl SongSearcher for ItunesClient {
    async fn search(&self, query: &str) -> Result<Vec<Song>, SearchError> {
        let url = self.search_url(query);
        tracing::debug!("itunes search: url={}", url);

        let resp = self.client.get(&url).send().await?.error_for_status()?;
        let body = resp.bytes().await?;
        let songs = parse_search_body(&body)?;

        tracing::debug!("itunes search done: query='{}', results={}", query, songs.len());
        Ok(songs)
    }
}

/// Turn a raw response body into the song list / 解析响应体
fn parse_search_body(data: &[u8]) -> Result<Vec<Song>, SearchError> {
    if data.is_empty() {
        // 状态成功但没有响应体
        return Err(SearchError::EmptyResponse);
    }
    Ok(decode_search_response(data)?.results)
}
