//! 界面状态
//!
//! 使用 Dioxus signals 管理界面状态，业务状态由 `AppController` 持有。

use std::cell::RefCell;
use std::rc::Rc;

use andromirror_core::events::{self, EventReceiver, EventSender};

/// 标签页
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Connection,
    Settings,
    About,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Connection, Tab::Settings, Tab::About];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Connection => "Device Connection",
            Tab::Settings => "Settings",
            Tab::About => "About",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tab::Connection => "📱",
            Tab::Settings => "⚙️",
            Tab::About => "ℹ️",
        }
    }
}

/// 外观模式（只在本次运行内有效）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    System,
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::System, Theme::Light, Theme::Dark];

    pub fn label(self) -> &'static str {
        match self {
            Theme::System => "System",
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }

    /// 根容器的 CSS 类
    pub fn class(self) -> &'static str {
        match self {
            Theme::System => "theme-system",
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }
}

/// 后台任务事件通道
///
/// 发送端交给 `AppController`，接收端由界面的事件循环取走一次。
#[derive(Clone)]
pub struct EventHub {
    tx: EventSender,
    rx: Rc<RefCell<Option<EventReceiver>>>,
}

impl EventHub {
    pub fn new() -> Self {
        let (tx, rx) = events::channel();
        Self {
            tx,
            rx: Rc::new(RefCell::new(Some(rx))),
        }
    }

    pub fn sender(&self) -> EventSender {
        self.tx.clone()
    }

    pub fn take_receiver(&self) -> Option<EventReceiver> {
        self.rx.borrow_mut().take()
    }
}
