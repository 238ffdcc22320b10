//! 标签页选择器组件

use crate::state::Tab;
use dioxus::prelude::*;

/// 连接 / 设置 / 关于
#[component]
pub fn TabBar(current: Tab, on_change: EventHandler<Tab>) -> Element {
    rsx! {
        for tab in Tab::ALL {
            div {
                class: if current == tab { "tab-card active" } else { "tab-card" },
                onclick: move |_| on_change.call(tab),
                span { class: "tab-card-icon", "{tab.icon()}" }
                span { class: "tab-card-title", "{tab.title()}" }
            }
        }
    }
}
