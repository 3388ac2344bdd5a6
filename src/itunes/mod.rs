//! iTunes Search API client / iTunes搜索API客户端
//!
//! One GET against the public search endpoint, results restricted to the
//! `song` entity, JSON envelope decoded into [`crate::models::Song`] records.
//!
//! 设计原则：
//! - 只提供搜索原语，不做重试、分页、缓存
//! - 一次调用恰好产生一个终态结果（成功/网络错误/解码错误/空响应）

mod client;
mod config;

pub use client::ItunesClient;
pub use config::ItunesConfig;
