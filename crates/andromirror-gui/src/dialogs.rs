//! 模态对话框

use andromirror_core::{Notice, NoticeKind};
use dioxus::prelude::*;
use rfd::{AsyncMessageDialog, MessageButtons, MessageDialog, MessageLevel};

/// 异步弹出提示，不阻塞界面事件循环
pub fn show_notice(notice: Notice) {
    let level = match notice.kind {
        NoticeKind::Info => MessageLevel::Info,
        NoticeKind::Error => MessageLevel::Error,
    };

    spawn(async move {
        AsyncMessageDialog::new()
            .set_level(level)
            .set_title(notice.title)
            .set_description(notice.message)
            .set_buttons(MessageButtons::Ok)
            .show()
            .await;
    });
}

/// 未处理的 panic（主要发生在窗口构建阶段）以顶层对话框报告
pub fn install_fatal_dialog() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        default_hook(info);
        log::error!("Application failed to start: {info}");

        MessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_title("Fatal Error")
            .set_description(format!("Application failed to start: {info}"))
            .set_buttons(MessageButtons::Ok)
            .show();
    }));
}
