//! 活动日志组件

use andromirror_core::LogEntry;
use dioxus::prelude::*;

#[component]
pub fn ActivityLogView(entries: Vec<LogEntry>) -> Element {
    rsx! {
        div { class: "card",
            div { class: "card-header",
                h2 { class: "card-title", "📋 Activity" }
            }
            div { class: "log-list",
                if entries.is_empty() {
                    p { class: "log-empty", "Nothing yet" }
                }
                // 最新的在最上面
                for (i, entry) in entries.iter().enumerate().rev() {
                    div {
                        key: "{i}",
                        class: "log-entry log-{entry.level.name()}",
                        "{entry}"
                    }
                }
            }
        }
    }
}
