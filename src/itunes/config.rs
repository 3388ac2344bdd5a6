//! iTunes client configuration / iTunes客户端配置

use serde::{Deserialize, Serialize};

/// iTunes Search API configuration / iTunes搜索API配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItunesConfig {
    /// Search endpoint / 搜索端点
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Entity filter, restricts results to one media type / 媒体类型过滤
    #[serde(default = "default_entity")]
    pub entity: String,

    /// Custom UA / 自定义UA
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_endpoint() -> String {
    "https://itunes.apple.com/search".to_string()
}

fn default_entity() -> String {
    "song".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string()
}

impl Default for ItunesConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            entity: default_entity(),
            user_agent: default_user_agent(),
        }
    }
}
