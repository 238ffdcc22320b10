//! 无线连接组件

use dioxus::prelude::*;

const INSTRUCTIONS: [&str; 5] = [
    "Enable USB Debugging on your Android device",
    "Connect via USB or use wireless connection",
    "Select device from the list",
    "Configure settings in Settings tab",
    "Click Connect to start mirroring",
];

#[derive(Props, Clone, PartialEq)]
pub struct WirelessPanelProps {
    pub host: String,
    pub port: String,
    pub default_port: u16,
    pub busy: bool,
    pub on_host: EventHandler<String>,
    pub on_port: EventHandler<String>,
    pub on_connect: EventHandler<()>,
}

/// IP / 端口输入与使用说明
#[component]
pub fn WirelessPanel(props: WirelessPanelProps) -> Element {
    rsx! {
        div { class: "card",
            div { class: "card-header",
                h2 { class: "card-title", "📡 Wireless Connection" }
            }

            div { class: "form-row",
                label { class: "form-label", "IP Address:" }
                input {
                    class: "input",
                    r#type: "text",
                    placeholder: "192.168.1.100",
                    value: "{props.host}",
                    oninput: move |evt| props.on_host.call(evt.value()),
                }
            }

            div { class: "form-row",
                label { class: "form-label", "Port:" }
                input {
                    class: "input",
                    r#type: "text",
                    placeholder: "{props.default_port}",
                    value: "{props.port}",
                    oninput: move |evt| props.on_port.call(evt.value()),
                }
            }

            button {
                class: "btn btn-primary",
                style: "width: 100%; margin-top: 12px;",
                disabled: props.busy,
                onclick: move |_| props.on_connect.call(()),
                if props.busy { "Connecting..." } else { "Connect Wireless" }
            }

            div { class: "instructions",
                h3 { "Instructions:" }
                ol {
                    for step in INSTRUCTIONS {
                        li { "{step}" }
                    }
                }
            }
        }
    }
}
