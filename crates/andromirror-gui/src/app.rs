//! 主应用组件

use andromirror_core::{AppConfig, AppController, MirrorSettings};
use dioxus::prelude::*;

use crate::components::{
    AboutPanel, ActivityLogView, ConnectPanel, DeviceList, Header, SettingsPanel, TabBar,
    WirelessPanel,
};
use crate::dialogs::show_notice;
use crate::state::{EventHub, Tab, Theme};
use crate::styles::GLOBAL_CSS;

/// 主应用
#[component]
pub fn App() -> Element {
    let hub = use_hook(EventHub::new);
    let mut controller = use_signal({
        let tx = hub.sender();
        move || AppController::new(&AppConfig::load(), tx)
    });

    // 界面状态
    let mut tab = use_signal(Tab::default);
    let mut theme = use_signal(Theme::default);
    let settings = use_signal(MirrorSettings::default);
    let mut host = use_signal(String::new);
    let mut port = use_signal(String::new);

    // 后台任务的结果按到达顺序在 UI 线程上应用
    use_future(move || {
        let hub = hub.clone();
        async move {
            let Some(mut rx) = hub.take_receiver() else {
                return;
            };
            while let Some(event) = rx.recv().await {
                let notice = controller.write().handle(event);
                if let Some(notice) = notice {
                    show_notice(notice);
                }
            }
        }
    });

    // 启动后刷新一次设备列表
    use_hook(move || {
        spawn(async move {
            controller.write().refresh();
        });
    });

    // 窗口关闭时终止仍在运行的 scrcpy
    use_drop(move || {
        if let Ok(mut controller) = controller.try_write() {
            controller.shutdown();
        }
    });

    // 事件处理器
    let on_refresh = move |()| controller.write().refresh();

    let on_select = move |serial: String| controller.write().select(Some(serial));

    let on_toggle = move |()| {
        // 按值传入此刻的设置快照
        let snapshot = settings.read().clone();
        controller.write().toggle_mirror(snapshot);
    };

    let on_wireless = move |()| {
        let notice = controller
            .write()
            .connect_wireless(&host.read(), &port.read());
        if let Some(notice) = notice {
            show_notice(notice);
        }
    };

    let view = controller.read();
    let selection = view.selection().clone();
    let is_refreshing = view.is_refreshing();
    let control = view.connect_control();
    let progress = view.session().progress();
    let running = view.session().is_running();
    let status = view.status().to_string();
    let wireless_busy = view.is_connecting_wireless();
    let default_port = view.default_port();
    let log_entries = view.log().entries().to_vec();
    drop(view);

    let theme_class = theme.read().class();

    rsx! {
        style { "{GLOBAL_CSS}" }

        div { class: "app-container {theme_class}",
            // 头部
            div { class: "bento-tile header-tile",
                Header {
                    theme: *theme.read(),
                    on_theme_change: move |t| theme.set(t),
                }
            }

            div { class: "tab-row",
                TabBar {
                    current: *tab.read(),
                    on_change: move |t| tab.set(t),
                }
            }

            match *tab.read() {
                Tab::Connection => rsx! {
                    // 设备列表 + 连接控制
                    div { class: "bento-tile main-left",
                        DeviceList {
                            selection: selection,
                            is_refreshing: is_refreshing,
                            on_select: on_select,
                            on_refresh: on_refresh,
                        }
                        ConnectPanel {
                            control: control,
                            progress: progress,
                            status: status,
                            running: running,
                            on_toggle: on_toggle,
                        }
                    }

                    // 无线连接
                    div { class: "bento-tile main-right",
                        WirelessPanel {
                            host: host.read().clone(),
                            port: port.read().clone(),
                            default_port: default_port,
                            busy: wireless_busy,
                            on_host: move |v| host.set(v),
                            on_port: move |v| port.set(v),
                            on_connect: on_wireless,
                        }
                    }

                    div { class: "bento-tile log-tile",
                        ActivityLogView { entries: log_entries }
                    }
                },

                Tab::Settings => rsx! {
                    div { class: "bento-tile full-tile",
                        SettingsPanel { settings: settings }
                    }
                },

                Tab::About => rsx! {
                    div { class: "bento-tile full-tile",
                        AboutPanel {}
                    }
                },
            }
        }
    }
}
