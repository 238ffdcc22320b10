//! AndroMirror Core Library
//!
//! scrcpy 图形前端的核心逻辑。真正的设备发现、无线配对和投屏都由外部的
//! `adb` 与 `scrcpy` 完成，本库只负责调用它们并解析其文本输出。
//!
//! # 模块
//!
//! - **bridge**: `adb devices` / `adb connect` 调用与输出解析
//! - **mirror**: 投屏设置快照和 scrcpy 命令行构造
//! - **session**: 投屏会话状态机（同一时间最多一个 scrcpy 子进程）
//! - **controller**: 供 GUI 驱动的应用模型，后台任务通过事件通道回传结果
//!
//! # 使用示例
//!
//! ```ignore
//! use andromirror_core::{AppConfig, AppController, MirrorSettings, events};
//!
//! let (tx, mut rx) = events::channel();
//! let mut controller = AppController::new(&AppConfig::load(), tx);
//! controller.refresh();
//!
//! while let Some(event) = rx.recv().await {
//!     if let Some(notice) = controller.handle(event) {
//!         eprintln!("{}: {}", notice.title, notice.message);
//!     }
//! }
//! ```

pub mod bridge;
pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod logging;
pub mod mirror;
pub mod refresh;
pub mod selection;
pub mod session;

#[cfg(all(test, unix))]
mod test_support;

pub use bridge::{Bridge, DEFAULT_PORT, Device, DeviceState};
pub use config::AppConfig;
pub use controller::{AppController, Notice, NoticeKind};
pub use error::{SessionError, Tool, ToolError};
pub use events::{AppEvent, EventReceiver, EventSender, MirrorEvent};
pub use logging::{ActivityLog, LogEntry, LogLevel};
pub use mirror::{
    AudioQuality, InputMode, MirrorCommand, MirrorSettings, Resolution, VideoCodec,
};
pub use selection::{ConnectControl, DeviceSelection};
pub use session::{MirrorController, SessionId, SessionState, Toggle};
