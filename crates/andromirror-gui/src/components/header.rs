//! 头部组件

use crate::state::Theme;
use dioxus::prelude::*;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 应用头部：标题与外观切换
#[component]
pub fn Header(theme: Theme, on_theme_change: EventHandler<Theme>) -> Element {
    rsx! {
        div { class: "logo",
            h1 { "AndroMirror" }
            span { class: "logo-version", "v{VERSION}" }
        }

        div { class: "theme-picker",
            label { r#for: "theme-select", "Theme:" }
            select {
                id: "theme-select",
                class: "select",
                onchange: move |evt| {
                    if let Some(theme) = Theme::from_label(&evt.value()) {
                        on_theme_change.call(theme);
                    }
                },
                for mode in Theme::ALL {
                    option {
                        value: mode.label(),
                        selected: mode == theme,
                        "{mode.label()}"
                    }
                }
            }
        }
    }
}
