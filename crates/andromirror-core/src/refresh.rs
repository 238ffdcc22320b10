//! 设备列表刷新的请求编号
//!
//! 两次刷新可能同时在途（例如手动刷新时无线连接成功又触发一次）。
//! 每个请求带一个递增编号，只接受比所有已落定请求都新的结果，
//! 晚到的旧结果直接丢弃，不会覆盖更新的列表。

use log::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefreshTracker {
    issued: u64,
    settled: u64,
}

impl RefreshTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 发起新请求，返回其编号
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// 请求结果到达；返回 `false` 表示结果已过期应丢弃
    pub fn settle(&mut self, request: u64) -> bool {
        if request <= self.settled || request > self.issued {
            debug!(
                "Dropping stale refresh result #{request} (settled #{})",
                self.settled
            );
            return false;
        }
        self.settled = request;
        true
    }

    /// 最新的请求是否仍在途
    pub fn is_refreshing(&self) -> bool {
        self.issued > self.settled
    }
}
