//! 投屏参数
//!
//! [`MirrorSettings`] 是点击"连接"那一刻从设置面板拍下的不可变快照，
//! 按值传给参数构造函数，后台任务不会回读界面控件。

use std::fmt;
use std::str::FromStr;

/// 设置项解析错误
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind}: '{value}' (expected one of: {expected})")]
pub struct ParseSettingError {
    kind: &'static str,
    value: String,
    expected: String,
}

impl ParseSettingError {
    fn new(kind: &'static str, value: &str, expected: &[&str]) -> Self {
        Self {
            kind,
            value: value.to_string(),
            expected: expected.join(", "),
        }
    }
}

/// 最大分辨率（对应 scrcpy 的 `-m`）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    Sd,
    Hd,
    Fhd,
    Uhd,
}

impl Resolution {
    pub const ALL: [Resolution; 4] = [
        Resolution::Sd,
        Resolution::Hd,
        Resolution::Fhd,
        Resolution::Uhd,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Resolution::Sd => "SD (540p)",
            Resolution::Hd => "HD (720p)",
            Resolution::Fhd => "FHD (1080p)",
            Resolution::Uhd => "4K",
        }
    }

    /// 像素高度
    pub fn max_size(self) -> u32 {
        match self {
            Resolution::Sd => 540,
            Resolution::Hd => 720,
            Resolution::Fhd => 1080,
            Resolution::Uhd => 2160,
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Resolution {
    type Err = ParseSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(r) = Self::ALL.into_iter().find(|r| r.label() == s) {
            return Ok(r);
        }
        match s.trim().to_lowercase().as_str() {
            "sd" | "540" | "540p" => Ok(Resolution::Sd),
            "hd" | "720" | "720p" => Ok(Resolution::Hd),
            "fhd" | "1080" | "1080p" => Ok(Resolution::Fhd),
            "4k" | "uhd" | "2160" | "2160p" => Ok(Resolution::Uhd),
            _ => Err(ParseSettingError::new(
                "resolution",
                s,
                &["sd", "hd", "fhd", "4k"],
            )),
        }
    }
}

/// 视频编码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VideoCodec {
    H264,
    H265,
}

impl VideoCodec {
    pub const ALL: [VideoCodec; 2] = [VideoCodec::H264, VideoCodec::H265];

    pub fn as_str(self) -> &'static str {
        match self {
            VideoCodec::H264 => "h264",
            VideoCodec::H265 => "h265",
        }
    }
}

impl fmt::Display for VideoCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VideoCodec {
    type Err = ParseSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "h264" => Ok(VideoCodec::H264),
            "h265" | "hevc" => Ok(VideoCodec::H265),
            _ => Err(ParseSettingError::new("video codec", s, &["h264", "h265"])),
        }
    }
}

/// 音频质量
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioQuality {
    Low,
    Medium,
    High,
}

impl AudioQuality {
    pub const ALL: [AudioQuality; 3] = [AudioQuality::Low, AudioQuality::Medium, AudioQuality::High];

    pub fn label(self) -> &'static str {
        match self {
            AudioQuality::Low => "Low",
            AudioQuality::Medium => "Medium",
            AudioQuality::High => "High",
        }
    }

    /// 对应 `--audio-bit-rate` 的值
    pub fn bitrate(self) -> &'static str {
        match self {
            AudioQuality::Low => "64K",
            AudioQuality::Medium => "128K",
            AudioQuality::High => "320K",
        }
    }
}

impl fmt::Display for AudioQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AudioQuality {
    type Err = ParseSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(AudioQuality::Low),
            "medium" => Ok(AudioQuality::Medium),
            "high" => Ok(AudioQuality::High),
            _ => Err(ParseSettingError::new(
                "audio quality",
                s,
                &["low", "medium", "high"],
            )),
        }
    }
}

/// 键盘 / 鼠标输入模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputMode {
    Uhid,
    Sdk,
}

impl InputMode {
    pub const ALL: [InputMode; 2] = [InputMode::Uhid, InputMode::Sdk];

    pub fn as_str(self) -> &'static str {
        match self {
            InputMode::Uhid => "uhid",
            InputMode::Sdk => "sdk",
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputMode {
    type Err = ParseSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "uhid" => Ok(InputMode::Uhid),
            "sdk" => Ok(InputMode::Sdk),
            _ => Err(ParseSettingError::new("input mode", s, &["uhid", "sdk"])),
        }
    }
}

/// 帧率选项
pub const FPS_OPTIONS: [u16; 3] = [30, 60, 120];

/// 视频码率选项
pub const BITRATE_OPTIONS: [&str; 4] = ["4M", "8M", "16M", "30M"];

/// 一次投屏会话的参数快照
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorSettings {
    /// `None` 表示不限制分辨率
    pub resolution: Option<Resolution>,
    pub max_fps: u16,
    pub video_codec: VideoCodec,
    pub video_bitrate: String,
    pub audio: bool,
    pub audio_quality: AudioQuality,
    pub stay_awake: bool,
    pub turn_screen_off: bool,
    pub keyboard: InputMode,
    pub mouse: InputMode,
}

impl Default for MirrorSettings {
    fn default() -> Self {
        Self {
            resolution: Some(Resolution::Hd),
            max_fps: 60,
            video_codec: VideoCodec::H264,
            video_bitrate: "8M".to_string(),
            audio: true,
            audio_quality: AudioQuality::Medium,
            stay_awake: true,
            turn_screen_off: false,
            keyboard: InputMode::Uhid,
            mouse: InputMode::Uhid,
        }
    }
}
