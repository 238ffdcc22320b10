//! 连接控制组件

use andromirror_core::ConnectControl;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ConnectPanelProps {
    pub control: ConnectControl,
    /// 0.0 ..= 1.0
    pub progress: f32,
    pub status: String,
    pub running: bool,
    pub on_toggle: EventHandler<()>,
}

/// 连接按钮、进度条与状态行
#[component]
pub fn ConnectPanel(props: ConnectPanelProps) -> Element {
    let percent = (props.progress.clamp(0.0, 1.0) * 100.0).round();
    let button_class = if props.running {
        "btn btn-danger"
    } else {
        "btn btn-primary"
    };

    rsx! {
        div { class: "connect-panel",
            button {
                class: "{button_class}",
                style: "width: 100%;",
                disabled: !props.control.enabled,
                onclick: move |_| props.on_toggle.call(()),
                "{props.control.label}"
            }

            div { class: "progress-bar",
                div { class: "progress-fill", style: "width: {percent}%;" }
            }

            p { class: "status-line", "{props.status}" }
        }
    }
}
