use std::future::Future;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::cache::clock::Clock;
use crate::errors::Result;
use crate::models::common::PagedResult;

// 缓存条目：全量集合 + 抓取时间戳
//
// 条目有效当且仅当 now - fetched_at < ttl。
// 失效不做部分更新，整个条目一起丢弃。
struct CacheEntry<T> {
    items: Arc<Vec<T>>,
    fetched_at_ms: i64,
}

/// 单一资源类型的全量集合缓存
///
/// 与原型不同，这里不是模块级可变状态：缓存是显式对象，
/// 时钟可注入，由 `AppContext` 构造一次后共享给各消费方。
///
/// 并发触发的刷新通过异步互斥锁合并：第一个调用方持锁完成整表抓取，
/// 之后排队的调用方拿到锁后会重新检查有效期，直接复用新条目，
/// 同一资源类型同时只会有一轮网络往返。
pub struct CollectionCache<T> {
    name: &'static str,
    ttl_ms: i64,
    clock: Arc<dyn Clock>,
    state: Mutex<Option<CacheEntry<T>>>,
}

impl<T> CollectionCache<T> {
    pub fn new(name: &'static str, ttl_ms: i64, clock: Arc<dyn Clock>) -> Self {
        Self {
            name,
            ttl_ms,
            clock,
            state: Mutex::new(None),
        }
    }

    /// 返回缓存的全量集合，过期或缺失时经 `fetch_page` 逐页重建
    ///
    /// 逐页抓取从第 1 页开始，按响应报告的 total_pages 推进，
    /// 每次刷新都重新读取 total_pages，页数在两次刷新之间变化也能取全。
    ///
    /// 任何一页失败都不会存入部分结果；存在旧条目时原样返回旧数据
    /// 并记录告警，否则错误上抛由页面层报告。
    pub async fn get_all<F, Fut>(&self, fetch_page: F) -> Result<Arc<Vec<T>>>
    where
        F: Fn(i64) -> Fut,
        Fut: Future<Output = Result<PagedResult<T>>>,
    {
        let mut state = self.state.lock().await;

        if let Some(entry) = state.as_ref() {
            let age = self.clock.now_millis() - entry.fetched_at_ms;
            if age < self.ttl_ms {
                debug!(cache = self.name, age_ms = age, "Serving collection from cache");
                return Ok(entry.items.clone());
            }
        }

        match Self::fetch_all_pages(&fetch_page).await {
            Ok(items) => {
                let items = Arc::new(items);
                debug!(
                    cache = self.name,
                    count = items.len(),
                    "Collection cache refreshed"
                );
                *state = Some(CacheEntry {
                    items: items.clone(),
                    fetched_at_ms: self.clock.now_millis(),
                });
                Ok(items)
            }
            Err(e) => match state.as_ref() {
                Some(entry) => {
                    warn!(
                        cache = self.name,
                        error = %e,
                        "Collection refresh failed, serving stale entry"
                    );
                    Ok(entry.items.clone())
                }
                None => Err(e),
            },
        }
    }

    /// 清空缓存，下一次 `get_all` 必定重新抓取
    ///
    /// 任何可能改变集合内容或顺序的变更操作
    /// （创建/更新/删除/入班/退班/指派教师）之后都必须调用。
    pub async fn invalidate(&self) {
        let mut state = self.state.lock().await;
        if state.take().is_some() {
            debug!(cache = self.name, "Collection cache invalidated");
        }
    }

    async fn fetch_all_pages<F, Fut>(fetch_page: &F) -> Result<Vec<T>>
    where
        F: Fn(i64) -> Fut,
        Fut: Future<Output = Result<PagedResult<T>>>,
    {
        let mut items = Vec::new();
        let mut page = 1i64;
        loop {
            let result = fetch_page(page).await?;
            let total_pages = result.total_pages;
            items.extend(result.items);
            if page >= total_pages {
                break;
            }
            page += 1;
        }
        Ok(items)
    }
}
