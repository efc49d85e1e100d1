use std::sync::atomic::{AtomicU64, Ordering};

/// 请求序号发生器，用于丢弃迟到的过期响应
///
/// 页面每发起一轮刷新先 `begin()` 领取序号；响应回来时用
/// `is_current()` 检查期间是否已有更新的一轮开始，
/// 旧序号的结果直接丢弃，避免过期数据覆盖新状态。
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: AtomicU64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// 开始新一轮请求，返回其序号
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// 序号是否仍为最新一轮
    pub fn is_current(&self, token: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == token
    }
}
