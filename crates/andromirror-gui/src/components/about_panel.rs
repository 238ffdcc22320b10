//! 关于页

use dioxus::prelude::*;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const SCRCPY_URL: &str = "https://github.com/Genymobile/scrcpy";

const CREDITS: [&str; 3] = [
    "Built with Rust & Dioxus",
    "Powered by scrcpy for Android mirroring",
    "Made with ❤️ for the Android development community",
];

#[component]
pub fn AboutPanel() -> Element {
    rsx! {
        div { class: "about",
            h1 { class: "about-title", "AndroMirror v{VERSION}" }
            p { class: "about-subtitle", "Modern GUI frontend for scrcpy" }

            button {
                class: "btn btn-secondary",
                onclick: move |_| {
                    if let Err(e) = open::that(SCRCPY_URL) {
                        log::warn!("无法打开浏览器: {}", e);
                    }
                },
                "🌐 scrcpy on GitHub"
            }

            div { class: "about-credits",
                for line in CREDITS {
                    p { "{line}" }
                }
            }
        }
    }
}
