//! 后台任务 → UI 的事件
//!
//! 后台任务从不直接修改界面状态，只通过 [`EventSender`] 发送这些值；
//! UI 事件循环依次取出并交给 [`AppController::handle`](crate::AppController::handle)。

use tokio::sync::mpsc;

use crate::error::ToolError;
use crate::session::SessionId;

pub type EventSender = mpsc::UnboundedSender<AppEvent>;
pub type EventReceiver = mpsc::UnboundedReceiver<AppEvent>;

/// 创建事件通道
pub fn channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// 设备列表刷新完成
    DevicesRefreshed {
        request: u64,
        result: Result<Vec<String>, ToolError>,
    },
    /// 无线连接完成
    WirelessFinished {
        target: String,
        result: Result<String, ToolError>,
    },
    Mirror(MirrorEvent),
}

/// 投屏会话生命周期事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MirrorEvent {
    Launched {
        session: SessionId,
        pid: Option<u32>,
    },
    LaunchFailed {
        session: SessionId,
        error: ToolError,
    },
    /// 进程退出（自行退出或被终止）
    Exited {
        session: SessionId,
        code: Option<i32>,
    },
}

impl MirrorEvent {
    pub fn session(&self) -> SessionId {
        match self {
            MirrorEvent::Launched { session, .. }
            | MirrorEvent::LaunchFailed { session, .. }
            | MirrorEvent::Exited { session, .. } => *session,
        }
    }
}
