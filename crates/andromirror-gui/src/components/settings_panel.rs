//! 投屏设置组件
//!
//! 控件直接绑定到 `MirrorSettings` signal，点击 Connect 时才取快照。

use std::str::FromStr;

use andromirror_core::mirror::{BITRATE_OPTIONS, FPS_OPTIONS};
use andromirror_core::{AudioQuality, InputMode, MirrorSettings, Resolution, VideoCodec};
use dioxus::prelude::*;

use super::option_select::{CheckOption, OptionSelect};

fn labels<T: ToString>(items: impl IntoIterator<Item = T>) -> Vec<String> {
    items.into_iter().map(|item| item.to_string()).collect()
}

/// 设置页
#[component]
pub fn SettingsPanel(mut settings: Signal<MirrorSettings>) -> Element {
    let current = settings.read().clone();
    let resolution = current.resolution.map_or("", Resolution::label).to_string();

    rsx! {
        div { class: "settings-grid",
            section { class: "card",
                h2 { class: "card-title", "🎬 Video Settings" }

                OptionSelect {
                    label: "Resolution:",
                    options: labels(Resolution::ALL.map(Resolution::label)),
                    value: resolution,
                    on_change: move |v: String| {
                        if let Ok(r) = Resolution::from_str(&v) {
                            settings.write().resolution = Some(r);
                        }
                    },
                }
                OptionSelect {
                    label: "FPS:",
                    options: labels(FPS_OPTIONS),
                    value: current.max_fps.to_string(),
                    on_change: move |v: String| {
                        if let Ok(fps) = v.parse() {
                            settings.write().max_fps = fps;
                        }
                    },
                }
                OptionSelect {
                    label: "Video Codec:",
                    options: labels(VideoCodec::ALL),
                    value: current.video_codec.to_string(),
                    on_change: move |v: String| {
                        if let Ok(codec) = VideoCodec::from_str(&v) {
                            settings.write().video_codec = codec;
                        }
                    },
                }
                OptionSelect {
                    label: "Video Bitrate:",
                    options: labels(BITRATE_OPTIONS),
                    value: current.video_bitrate.clone(),
                    on_change: move |v: String| settings.write().video_bitrate = v,
                }
            }

            section { class: "card",
                h2 { class: "card-title", "🔊 Audio Settings" }

                CheckOption {
                    label: "Audio:",
                    text: "Enable Audio",
                    checked: current.audio,
                    on_change: move |on| settings.write().audio = on,
                }
                OptionSelect {
                    label: "Audio Quality:",
                    options: labels(AudioQuality::ALL),
                    value: current.audio_quality.to_string(),
                    on_change: move |v: String| {
                        if let Ok(quality) = AudioQuality::from_str(&v) {
                            settings.write().audio_quality = quality;
                        }
                    },
                }
            }

            section { class: "card",
                h2 { class: "card-title", "📱 Device Settings" }

                CheckOption {
                    label: "Stay Awake:",
                    text: "Keep device awake",
                    checked: current.stay_awake,
                    on_change: move |on| settings.write().stay_awake = on,
                }
                CheckOption {
                    label: "Screen Off:",
                    text: "Turn off device screen",
                    checked: current.turn_screen_off,
                    on_change: move |on| settings.write().turn_screen_off = on,
                }
            }

            section { class: "card",
                h2 { class: "card-title", "⌨️ Input Settings" }

                OptionSelect {
                    label: "Keyboard Mode:",
                    options: labels(InputMode::ALL),
                    value: current.keyboard.to_string(),
                    on_change: move |v: String| {
                        if let Ok(mode) = InputMode::from_str(&v) {
                            settings.write().keyboard = mode;
                        }
                    },
                }
                OptionSelect {
                    label: "Mouse Mode:",
                    options: labels(InputMode::ALL),
                    value: current.mouse.to_string(),
                    on_change: move |v: String| {
                        if let Ok(mode) = InputMode::from_str(&v) {
                            settings.write().mouse = mode;
                        }
                    },
                }
            }
        }
    }
}
