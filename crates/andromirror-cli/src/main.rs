//! AndroMirror CLI
//!
//! 不开窗口的前端：列出设备、无线连接、按参数启动 scrcpy。

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use andromirror_core::events::{self, AppEvent, MirrorEvent};
use andromirror_core::{
    AppConfig, AudioQuality, Bridge, InputMode, MirrorCommand, MirrorController, MirrorSettings,
    Resolution, VideoCodec,
};

#[derive(Parser)]
#[command(name = "andromirror", version, about = "scrcpy front-end for Android devices")]
struct Cli {
    /// 输出 andromirror_core 的调试日志
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 列出已授权设备
    Devices {
        /// 同时显示未授权 / 离线的设备
        #[arg(short, long)]
        all: bool,
    },
    /// 通过 TCP/IP 连接设备
    Connect {
        /// 设备 IP 地址
        host: String,
        /// 端口 (默认取配置中的 default_port)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// 启动投屏
    Mirror(MirrorArgs),
}

#[derive(Args)]
struct MirrorArgs {
    /// 设备序列号 (只有一台已授权设备时可省略)
    #[arg(short, long)]
    serial: Option<String>,

    /// SD / HD / FHD / 4K
    #[arg(short, long, default_value = "HD")]
    resolution: Resolution,

    #[arg(long, default_value_t = 60)]
    max_fps: u16,

    #[arg(long, default_value = "h264")]
    codec: VideoCodec,

    #[arg(short, long, default_value = "8M")]
    bitrate: String,

    #[arg(long, conflicts_with = "audio_quality")]
    no_audio: bool,

    #[arg(long, default_value = "medium")]
    audio_quality: AudioQuality,

    #[arg(long)]
    no_stay_awake: bool,

    #[arg(long)]
    turn_screen_off: bool,

    #[arg(long, default_value = "uhid")]
    keyboard: InputMode,

    #[arg(long, default_value = "uhid")]
    mouse: InputMode,

    /// 只打印将要执行的命令
    #[arg(long)]
    print: bool,
}

impl MirrorArgs {
    fn settings(&self) -> MirrorSettings {
        MirrorSettings {
            resolution: Some(self.resolution),
            max_fps: self.max_fps,
            video_codec: self.codec,
            video_bitrate: self.bitrate.clone(),
            audio: !self.no_audio,
            audio_quality: self.audio_quality,
            stay_awake: !self.no_stay_awake,
            turn_screen_off: self.turn_screen_off,
            keyboard: self.keyboard,
            mouse: self.mouse,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 桥接 log crate（andromirror-core 使用）到 tracing
    let _ = tracing_log::LogTracer::init();

    let default_filter = if cli.verbose {
        "info,andromirror_core=debug"
    } else {
        "warn"
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .try_init();

    let config = AppConfig::load();

    match cli.command {
        Commands::Devices { all } => list_devices(&config.bridge(), all).await,
        Commands::Connect { host, port } => {
            let bridge = config.bridge();
            let output = bridge.connect(&host, port).await?;
            println!("✅ {}", output.trim());
            Ok(())
        }
        Commands::Mirror(args) => mirror(&config, args).await,
    }
}

async fn list_devices(bridge: &Bridge, all: bool) -> Result<()> {
    let devices = bridge.list_devices().await?;
    let shown: Vec<_> = devices
        .iter()
        .filter(|d| all || d.state.is_ready())
        .collect();

    if shown.is_empty() {
        println!("No devices connected");
        return Ok(());
    }

    for device in shown {
        if all {
            println!("{}\t{}", device.serial, device.state);
        } else {
            println!("{}", device.serial);
        }
    }
    Ok(())
}

async fn mirror(config: &AppConfig, args: MirrorArgs) -> Result<()> {
    let serial = match &args.serial {
        Some(serial) => serial.clone(),
        None => single_device(&config.bridge()).await?,
    };
    let settings = args.settings();

    if args.print {
        println!("{}", MirrorCommand::new(config.mirror_program(), serial, settings));
        return Ok(());
    }

    let (tx, mut rx) = events::channel();
    let mut controller = MirrorController::new(config.mirror_program());
    controller.toggle(Some(&serial), settings, &tx)?;

    let mut stopping = false;
    loop {
        tokio::select! {
            event = rx.recv() => {
                let Some(AppEvent::Mirror(event)) = event else {
                    bail!("mirror session ended unexpectedly");
                };
                controller.apply(&event);
                match event {
                    MirrorEvent::Launched { pid, .. } => {
                        tracing::info!("scrcpy running (pid {pid:?})");
                        println!("📱 Mirroring {serial}, press Ctrl-C to stop");
                    }
                    MirrorEvent::LaunchFailed { error, .. } => return Err(error.into()),
                    MirrorEvent::Exited { code, .. } => {
                        match code {
                            Some(0) | None => println!("⏹️  scrcpy exited"),
                            Some(code) => println!("⏹️  scrcpy exited with code {code}"),
                        }
                        return Ok(());
                    }
                }
            }
            signal = tokio::signal::ctrl_c(), if !stopping => {
                signal.context("failed to listen for Ctrl-C")?;
                stopping = true;
                controller.stop();
            }
        }
    }
}

/// 未指定序列号时要求恰好一台已授权设备
async fn single_device(bridge: &Bridge) -> Result<String> {
    let mut devices = bridge.devices().await?;
    match devices.len() {
        0 => bail!("No devices connected"),
        1 => Ok(devices.remove(0)),
        n => bail!("{n} devices connected, choose one with --serial"),
    }
}
