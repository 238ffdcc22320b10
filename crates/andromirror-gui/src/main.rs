//! AndroMirror GUI Application
//!
//! 基于 Dioxus 的 scrcpy 桌面前端：浏览 adb 可见的 Android 设备，
//! 选择参数后启动独立安装的 scrcpy 进行投屏。
//!
//! # 架构
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Dioxus Desktop App                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (标题 / 主题)                                        │
//! │  ┌──────────────────┐ ┌──────────────┐ ┌─────────────────┐  │
//! │  │ Device Connection│ │   Settings   │ │      About      │  │
//! │  └──────────────────┘ └──────────────┘ └─────────────────┘  │
//! ├─────────────────────────────────────────────────────────────┤
//! │        AppController (andromirror-core) ◀── AppEvent        │
//! │                 │ tokio::spawn                              │
//! │          adb devices / adb connect / scrcpy                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod app;
mod components;
mod dialogs;
mod state;
mod styles;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

fn main() {
    // 初始化日志
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting AndroMirror GUI...");

    dialogs::install_fatal_dialog();

    let window = WindowBuilder::new()
        .with_title("AndroMirror")
        .with_inner_size(LogicalSize::new(1000.0, 700.0))
        .with_min_inner_size(LogicalSize::new(900.0, 650.0));

    // 启动 Dioxus 桌面应用
    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .launch(app::App);
}
