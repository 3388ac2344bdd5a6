//! Song search core: request, decode, deliver / 歌曲搜索核心
//!
//! The pipeline from a query string to an updated in-memory result list:
//! the [`itunes`] client issues one GET and decodes the JSON envelope, the
//! [`store`] owns the current list and notifies a presentation-layer
//! listener. Rendering and input handling live in the host application.

pub mod error;
pub mod models;
pub mod store;
pub mod itunes;

use std::sync::Arc;

/// Build a result store backed by the iTunes Search API / 创建基于iTunes搜索API的结果存储
pub fn itunes_store(config: itunes::ItunesConfig) -> Result<store::ResultStore, error::SearchError> {
    let client = itunes::ItunesClient::new(config)?;
    Ok(store::ResultStore::new(Arc::new(client)))
}
