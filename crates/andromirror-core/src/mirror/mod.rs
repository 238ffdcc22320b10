//! 投屏工具 (scrcpy) 命令构造与启动

mod settings;

pub use settings::{
    AudioQuality, BITRATE_OPTIONS, FPS_OPTIONS, InputMode, MirrorSettings, ParseSettingError,
    Resolution, VideoCodec,
};

use std::fmt;
use std::path::PathBuf;
use std::process::Stdio;

use log::info;
use tokio::process::{Child, Command};

use crate::error::{Tool, ToolError};

/// 一次 scrcpy 调用
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorCommand {
    pub program: PathBuf,
    pub serial: String,
    pub settings: MirrorSettings,
}

impl MirrorCommand {
    pub fn new(program: impl Into<PathBuf>, serial: impl Into<String>, settings: MirrorSettings) -> Self {
        Self {
            program: program.into(),
            serial: serial.into(),
            settings,
        }
    }

    /// 命令行参数（不含程序名）
    pub fn args(&self) -> Vec<String> {
        build_args(&self.serial, &self.settings)
    }

    /// 启动 scrcpy
    ///
    /// 子进程随返回的 [`Child`] 一起被丢弃时会被结束。
    pub fn spawn(&self) -> Result<Child, ToolError> {
        info!("Starting {self}");
        Command::new(&self.program)
            .args(self.args())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| ToolError::from_spawn(Tool::Mirror, &e))
    }
}

impl fmt::Display for MirrorCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in self.args() {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// 按固定顺序把设置快照翻译为 scrcpy 参数
///
/// `-s <serial> [-m <h>] --max-fps <fps> --video-codec <codec> -b <rate>
/// [--no-audio | --audio-bit-rate <rate>] [--stay-awake] [--turn-screen-off]
/// --keyboard <mode> --mouse <mode>`
pub fn build_args(serial: &str, settings: &MirrorSettings) -> Vec<String> {
    let mut args = vec!["-s".to_string(), serial.to_string()];

    if let Some(resolution) = settings.resolution {
        args.push("-m".to_string());
        args.push(resolution.max_size().to_string());
    }

    args.push("--max-fps".to_string());
    args.push(settings.max_fps.to_string());
    args.push("--video-codec".to_string());
    args.push(settings.video_codec.to_string());
    args.push("-b".to_string());
    args.push(settings.video_bitrate.clone());

    if settings.audio {
        args.push("--audio-bit-rate".to_string());
        args.push(settings.audio_quality.bitrate().to_string());
    } else {
        args.push("--no-audio".to_string());
    }

    if settings.stay_awake {
        args.push("--stay-awake".to_string());
    }
    if settings.turn_screen_off {
        args.push("--turn-screen-off".to_string());
    }

    args.push("--keyboard".to_string());
    args.push(settings.keyboard.to_string());
    args.push("--mouse".to_string());
    args.push(settings.mouse.to_string());

    args
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_after<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
        args.iter()
            .position(|a| a == flag)
            .and_then(|i| args.get(i + 1))
            .map(String::as_str)
    }

    #[test]
    fn test_default_argument_order() {
        let args = build_args("ABC123", &MirrorSettings::default());
        assert_eq!(
            args,
            [
                "-s",
                "ABC123",
                "-m",
                "720",
                "--max-fps",
                "60",
                "--video-codec",
                "h264",
                "-b",
                "8M",
                "--audio-bit-rate",
                "128K",
                "--stay-awake",
                "--keyboard",
                "uhid",
                "--mouse",
                "uhid",
            ]
        );
    }

    #[test]
    fn test_resolution_mapping() {
        let mut settings = MirrorSettings::default();

        settings.resolution = Some(Resolution::Fhd);
        assert_eq!(value_after(&build_args("d", &settings), "-m"), Some("1080"));

        settings.resolution = Some(Resolution::Uhd);
        assert_eq!(value_after(&build_args("d", &settings), "-m"), Some("2160"));

        settings.resolution = None;
        assert!(!build_args("d", &settings).contains(&"-m".to_string()));
    }

    #[test]
    fn test_audio_disabled_never_sets_bitrate() {
        for quality in AudioQuality::ALL {
            let settings = MirrorSettings {
                audio: false,
                audio_quality: quality,
                ..Default::default()
            };
            let args = build_args("d", &settings);
            assert!(args.contains(&"--no-audio".to_string()));
            assert!(!args.contains(&"--audio-bit-rate".to_string()));
        }
    }

    #[test]
    fn test_high_audio_quality() {
        let settings = MirrorSettings {
            audio_quality: AudioQuality::High,
            ..Default::default()
        };
        let args = build_args("d", &settings);
        assert_eq!(value_after(&args, "--audio-bit-rate"), Some("320K"));
        assert!(!args.contains(&"--no-audio".to_string()));
    }

    #[test]
    fn test_device_and_input_flags() {
        let settings = MirrorSettings {
            stay_awake: false,
            turn_screen_off: true,
            keyboard: InputMode::Sdk,
            mouse: InputMode::Uhid,
            video_codec: VideoCodec::H265,
            max_fps: 120,
            video_bitrate: "30M".to_string(),
            ..Default::default()
        };
        let args = build_args("192.168.1.20:5555", &settings);
        assert_eq!(value_after(&args, "-s"), Some("192.168.1.20:5555"));
        assert!(!args.contains(&"--stay-awake".to_string()));
        assert!(args.contains(&"--turn-screen-off".to_string()));
        assert_eq!(value_after(&args, "--keyboard"), Some("sdk"));
        assert_eq!(value_after(&args, "--mouse"), Some("uhid"));
        assert_eq!(value_after(&args, "--video-codec"), Some("h265"));
        assert_eq!(value_after(&args, "--max-fps"), Some("120"));
        assert_eq!(value_after(&args, "-b"), Some("30M"));
    }

    #[test]
    fn test_display_renders_command_line() {
        let settings = MirrorSettings {
            resolution: None,
            audio: false,
            stay_awake: false,
            ..Default::default()
        };
        let cmd = MirrorCommand::new("scrcpy", "ABC", settings);
        assert_eq!(
            cmd.to_string(),
            "scrcpy -s ABC --max-fps 60 --video-codec h264 -b 8M --no-audio --keyboard uhid --mouse uhid"
        );
    }
}
