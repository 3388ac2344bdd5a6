//! Result store - current search results and listener notification / 结果存储
//!
//! Architecture principle: only expose primitive operations, do not control flow / 架构原则
//! - search: run one search and deliver its outcome / 执行一次搜索
//! - results: read-only snapshot of the current list / 当前结果快照
//! - set_listener: single-slot, non-owning registration / 单槽弱引用注册
//!
//! All state mutation and all listener notification happen on the task that
//! awaits `search`, after the network future resolves. The listener slot
//! holds a `Weak`, so dropping the listener's owner is always safe; a dead
//! slot is skipped at notification time.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::error::SearchError;
use crate::models::Song;

/// Song search interface (provides only the search primitive) / 歌曲搜索接口
#[async_trait]
pub trait SongSearcher: Send + Sync {
    /// Run one search, completing exactly once with songs or an error / 执行搜索
    async fn search(&self, query: &str) -> Result<Vec<Song>, SearchError>;
}

/// Receives store notifications, implemented by the presentation layer / 由展示层实现
pub trait StoreListener: Send + Sync {
    /// The result list was replaced; re-read `results()` in full / 结果已更新
    fn on_results_updated(&self);

    /// The search failed; the current list is unchanged / 搜索失败
    fn on_search_failed(&self, error: &SearchError);
}

/// Holds the current result list and notifies a listener of changes / 结果存储
pub struct ResultStore {
    searcher: Arc<dyn SongSearcher>,
    /// Current results, replaced wholesale on success / 当前结果
    results: RwLock<Vec<Song>>,
    /// Single listener slot, non-owning / 监听器槽位
    listener: RwLock<Option<Weak<dyn StoreListener>>>,
    /// Issue counter for in-flight searches / 搜索序号
    search_seq: AtomicU64,
}

impl ResultStore {
    /// Create an empty store around a searcher / 创建空的结果存储
    pub fn new(searcher: Arc<dyn SongSearcher>) -> Self {
        Self {
            searcher,
            results: RwLock::new(Vec::new()),
            listener: RwLock::new(None),
            search_seq: AtomicU64::new(0),
        }
    }

    /// Register a listener, replacing any previous one / 注册监听器（替换旧的）
    ///
    /// Only a `Weak` is kept; the caller stays the owner.
    pub fn set_listener(&self, listener: &Arc<dyn StoreListener>) {
        *self.listener.write() = Some(Arc::downgrade(listener));
    }

    /// Empty the listener slot / 清除监听器
    pub fn clear_listener(&self) {
        *self.listener.write() = None;
    }

    /// Snapshot of the current result list / 当前结果快照
    pub fn results(&self) -> Vec<Song> {
        self.results.read().clone()
    }

    /// Run one search and deliver its outcome to the listener / 执行搜索并通知监听器
    ///
    /// On success the list is replaced wholesale and `on_results_updated`
    /// fires once. On failure the list is left untouched and
    /// `on_search_failed` fires once with the error forwarded verbatim.
    /// If a newer search was issued while this one was in flight, the
    /// completion is discarded: last-issued wins, not last-completed.
    pub async fn search(&self, query: &str) {
        let seq = self.search_seq.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!("store search: query='{}', seq={}", query, seq);

        let outcome = self.searcher.search(query).await;

        if self.search_seq.load(Ordering::SeqCst) != seq {
            // 等待期间已发起新的搜索，丢弃过期结果
            tracing::debug!("stale search discarded: query='{}', seq={}", query, seq);
            return;
        }

        match outcome {
            Ok(songs) => {
                tracing::debug!("store updated: query='{}', results={}", query, songs.len());
                *self.results.write() = songs;
                self.notify(|listener| listener.on_results_updated());
            }
            Err(error) => {
                tracing::warn!("store search failed: query='{}', error={}", query, error);
                self.notify(|listener| listener.on_search_failed(&error));
            }
        }
    }

    fn notify<F>(&self, notify: F)
    where
        F: FnOnce(&dyn StoreListener),
    {
        // Clone the weak ref out so the slot lock is not held during the
        // callback; listeners may re-enter the store. / 回调期间不持有锁
        let slot = self.listener.read().clone();
        if let Some(listener) = slot.and_then(|weak| weak.upgrade()) {
            notify(listener.as_ref());
        }
    }
}
