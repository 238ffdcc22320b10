//! 设备选择与连接按钮状态
//!
//! 纯状态推导：连接按钮当且仅当选中的设备仍在最新的设备列表中时可用。
//! 每次刷新和每次选择变化后重新计算。

use crate::session::SessionState;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceSelection {
    devices: Vec<String>,
    selected: Option<String>,
}

impl DeviceSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn devices(&self) -> &[String] {
        &self.devices
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// 用最新的发现结果替换列表；选择保持不变，由 [`Self::can_connect`] 判断是否仍有效
    pub fn replace_devices(&mut self, devices: Vec<String>) {
        self.devices = devices;
    }

    pub fn select(&mut self, serial: Option<String>) {
        self.selected = serial;
    }

    pub fn is_selected(&self, serial: &str) -> bool {
        self.selected.as_deref() == Some(serial)
    }

    pub fn can_connect(&self) -> bool {
        self.selected
            .as_ref()
            .is_some_and(|s| self.devices.contains(s))
    }

    /// 选择变化后显示的状态行
    pub fn status_line(&self) -> String {
        match &self.selected {
            Some(serial) => format!("Selected: {serial}"),
            None => "No device selected".to_string(),
        }
    }
}

/// 连接按钮
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectControl {
    pub enabled: bool,
    pub label: &'static str,
}

impl ConnectControl {
    pub fn derive(selection: &DeviceSelection, session: SessionState) -> Self {
        match session {
            SessionState::Idle => Self {
                enabled: selection.can_connect(),
                label: "Connect",
            },
            SessionState::Starting { .. } => Self {
                enabled: false,
                label: "Connecting...",
            },
            SessionState::Running { .. } => Self {
                enabled: true,
                label: "Disconnect",
            },
        }
    }
}
