//! 应用控制器
//!
//! 把设备发现、无线连接和投屏会话组合成界面可以直接驱动的模型。
//! 所有阻塞操作都在 `tokio::spawn` 的后台任务里执行，结果以 [`AppEvent`]
//! 送回；UI 事件循环逐个取出事件交给 [`AppController::handle`]，
//! 控制器更新状态并返回需要弹窗提示的 [`Notice`]。

use std::path::PathBuf;

use log::{info, warn};

use crate::bridge::{Bridge, connect_target, parse_port};
use crate::config::AppConfig;
use crate::error::{SessionError, ToolError};
use crate::events::{AppEvent, EventSender, MirrorEvent};
use crate::logging::{ActivityLog, LogEntry};
use crate::mirror::MirrorSettings;
use crate::refresh::RefreshTracker;
use crate::selection::{ConnectControl, DeviceSelection};
use crate::session::{MirrorController, SessionState, Toggle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// 需要以模态对话框展示给用户的消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}

pub struct AppController {
    bridge: Bridge,
    mirror: MirrorController,
    events: EventSender,
    refresh: RefreshTracker,
    selection: DeviceSelection,
    wireless_target: Option<String>,
    status: String,
    log: ActivityLog,
}

impl AppController {
    pub fn new(config: &AppConfig, events: EventSender) -> Self {
        Self::with_tools(config.bridge(), config.mirror_program(), events)
    }

    pub fn with_tools(bridge: Bridge, mirror_program: impl Into<PathBuf>, events: EventSender) -> Self {
        Self {
            bridge,
            mirror: MirrorController::new(mirror_program),
            events,
            refresh: RefreshTracker::new(),
            selection: DeviceSelection::new(),
            wireless_target: None,
            status: "Select a device to connect".to_string(),
            log: ActivityLog::default(),
        }
    }

    pub fn devices(&self) -> &[String] {
        self.selection.devices()
    }

    pub fn selection(&self) -> &DeviceSelection {
        &self.selection
    }

    pub fn session(&self) -> SessionState {
        self.mirror.state()
    }

    pub fn connect_control(&self) -> ConnectControl {
        ConnectControl::derive(&self.selection, self.mirror.state())
    }

    pub fn is_refreshing(&self) -> bool {
        self.refresh.is_refreshing()
    }

    pub fn is_connecting_wireless(&self) -> bool {
        self.wireless_target.is_some()
    }

    pub fn default_port(&self) -> u16 {
        self.bridge.default_port()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn log(&self) -> &ActivityLog {
        &self.log
    }

    /// 在后台刷新设备列表
    pub fn refresh(&mut self) {
        let request = self.refresh.begin();
        self.status = "Refreshing devices...".to_string();

        let bridge = self.bridge.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = bridge.devices().await;
            let _ = events.send(AppEvent::DevicesRefreshed { request, result });
        });
    }

    pub fn select(&mut self, serial: Option<String>) {
        self.selection.select(serial);
        self.status = self.selection.status_line();
    }

    /// 无线连接；输入无效时直接返回错误提示，不启动子进程
    pub fn connect_wireless(&mut self, host: &str, port: &str) -> Option<Notice> {
        if self.wireless_target.is_some() {
            return None;
        }

        let port = match parse_port(port) {
            Ok(port) => port,
            Err(e) => return Some(Notice::error("Error", e.to_string())),
        };
        let target = match connect_target(host, port, self.bridge.default_port()) {
            Ok(target) => target,
            Err(e) => return Some(Notice::error("Error", e.to_string())),
        };

        self.log.push(LogEntry::info(format!("Connecting to {target}...")));
        self.wireless_target = Some(target.clone());

        let bridge = self.bridge.clone();
        let events = self.events.clone();
        let host = host.trim().to_string();
        tokio::spawn(async move {
            let result = bridge.connect(&host, port).await;
            let _ = events.send(AppEvent::WirelessFinished { target, result });
        });
        None
    }

    /// 连接 / 断开投屏
    ///
    /// `settings` 是此刻设置面板的快照。
    pub fn toggle_mirror(&mut self, settings: MirrorSettings) {
        let serial = self
            .selection
            .can_connect()
            .then(|| self.selection.selected())
            .flatten()
            .map(ToString::to_string);

        match self.mirror.toggle(serial.as_deref(), settings, &self.events) {
            Ok(Toggle::Starting(id)) => {
                let serial = serial.unwrap_or_default();
                self.status = "Starting scrcpy...".to_string();
                self.log
                    .push(LogEntry::info(format!("Session {id}: mirroring {serial}")));
            }
            Ok(Toggle::Ignored) => {}
            Ok(Toggle::Stopped(id)) => {
                self.status = self.idle_status();
                self.log
                    .push(LogEntry::info(format!("Session {id}: disconnected")));
            }
            Err(SessionError::NoDeviceSelected) => {
                self.status = "Select a device to connect".to_string();
            }
        }
    }

    /// 应用后台任务的结果
    pub fn handle(&mut self, event: AppEvent) -> Option<Notice> {
        match event {
            AppEvent::DevicesRefreshed { request, result } => {
                if !self.refresh.settle(request) {
                    return None;
                }
                match result {
                    Ok(devices) => {
                        info!("Discovered {} device(s)", devices.len());
                        self.status = if devices.is_empty() {
                            "No devices connected".to_string()
                        } else {
                            format!("Found {} device(s)", devices.len())
                        };
                        self.log.push(LogEntry::info(self.status.clone()));
                        self.selection.replace_devices(devices);
                        None
                    }
                    Err(e) => {
                        // 保留上一次的列表
                        warn!("Device refresh failed: {e}");
                        self.status = e.to_string();
                        self.log.push(LogEntry::error(e.to_string()));
                        Some(Notice::error("Error", e.to_string()))
                    }
                }
            }
            AppEvent::WirelessFinished { target, result } => {
                self.wireless_target = None;
                match result {
                    Ok(ack) => {
                        self.log.push(LogEntry::info(ack));
                        self.refresh();
                        Some(Notice::info("Success", format!("Connected to {target}")))
                    }
                    Err(e) => {
                        self.log.push(LogEntry::error(e.to_string()));
                        Some(wireless_failure(&e))
                    }
                }
            }
            AppEvent::Mirror(event) => self.handle_mirror(&event),
        }
    }

    fn handle_mirror(&mut self, event: &MirrorEvent) -> Option<Notice> {
        if !self.mirror.apply(event) {
            return None;
        }
        match event {
            MirrorEvent::Launched { session, .. } => {
                self.status = "scrcpy started successfully!".to_string();
                self.log
                    .push(LogEntry::info(format!("Session {session}: scrcpy started")));
                None
            }
            MirrorEvent::LaunchFailed { error, .. } => {
                self.status = self.idle_status();
                self.log.push(LogEntry::error(error.to_string()));
                Some(Notice::error("Error", error.to_string()))
            }
            MirrorEvent::Exited { session, code } => {
                self.status = self.idle_status();
                let entry = match code {
                    Some(0) | None => LogEntry::info(format!("Session {session}: scrcpy exited")),
                    Some(code) => {
                        LogEntry::warn(format!("Session {session}: scrcpy exited ({code})"))
                    }
                };
                self.log.push(entry);
                None
            }
        }
    }

    /// 窗口关闭时终止仍在运行的投屏
    pub fn shutdown(&mut self) {
        if let Some(id) = self.mirror.shutdown() {
            info!("Session {id}: terminated on shutdown");
        }
    }

    fn idle_status(&self) -> String {
        if self.selection.selected().is_some() {
            "Ready to connect".to_string()
        } else {
            "Select a device to connect".to_string()
        }
    }
}

fn wireless_failure(error: &ToolError) -> Notice {
    match error {
        ToolError::Failure { message, .. } => Notice::error("Connection Failed", message.clone()),
        ToolError::InvalidInput(message) => Notice::error("Error", message.clone()),
        other => Notice::error("Error", format!("Connection error: {other}")),
    }
}
