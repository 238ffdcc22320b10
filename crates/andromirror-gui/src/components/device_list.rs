//! 设备列表组件

use andromirror_core::DeviceSelection;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct DeviceListProps {
    pub selection: DeviceSelection,
    pub on_select: EventHandler<String>,
    pub on_refresh: EventHandler<()>,
    pub is_refreshing: bool,
}

/// 已授权设备列表
#[component]
pub fn DeviceList(props: DeviceListProps) -> Element {
    rsx! {
        div { class: "card",
            div { class: "card-header",
                h2 { class: "card-title", "📱 Connected Devices" }
                button {
                    class: "btn btn-secondary",
                    disabled: props.is_refreshing,
                    onclick: move |_| props.on_refresh.call(()),
                    if props.is_refreshing { "Refreshing..." } else { "Refresh" }
                }
            }

            if props.selection.devices().is_empty() {
                div { class: "empty-state",
                    div { class: "empty-state-icon", "🔌" }
                    p { class: "empty-state-text",
                        if props.is_refreshing {
                            "Looking for devices..."
                        } else {
                            "No devices connected"
                        }
                    }
                }
            } else {
                div { class: "device-list",
                    for serial in props.selection.devices() {
                        DeviceItem {
                            key: "{serial}",
                            serial: serial.clone(),
                            is_selected: props.selection.is_selected(serial),
                            on_click: props.on_select,
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct DeviceItemProps {
    serial: String,
    is_selected: bool,
    on_click: EventHandler<String>,
}

#[component]
fn DeviceItem(props: DeviceItemProps) -> Element {
    let selected_class = if props.is_selected { "selected" } else { "" };
    let serial = props.serial.clone();

    // 无线连接的设备序列号形如 host:port
    let icon = if props.serial.contains(':') { "📶" } else { "🔗" };

    rsx! {
        div {
            class: "device-item {selected_class}",
            onclick: move |_| props.on_click.call(serial.clone()),

            div { class: "device-icon", "{icon}" }

            div { class: "device-info",
                div { class: "device-name", "{props.serial}" }
            }
        }
    }
}
