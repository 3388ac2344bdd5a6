//! Search error taxonomy / 搜索错误类型

use thiserror::Error;

/// Terminal outcome of a failed search. None of these are retried; the
/// store forwards them to its listener verbatim. / 搜索失败的终态错误
#[derive(Debug, Error)]
pub enum SearchError {
    /// Transport-level failure or non-success HTTP status / 传输层错误或HTTP状态错误
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body does not match the expected shape / 响应体格式不符
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A response arrived without a body / 响应没有内容
    #[error("empty response body")]
    EmptyResponse,
}
