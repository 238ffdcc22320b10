use std::path::Path;

use anyhow::Result;
use clap::{Parser, Subcommand};
use xshell::{Shell, cmd};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "xtask", about = "AndroMirror 开发任务自动化")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 构建 GUI 与 CLI (release)
    Build,
    /// 运行 GUI (开发模式)
    Dev {
        /// 日志级别 (trace, debug, info, warn, error)
        #[arg(short, long, default_value = "debug")]
        log_level: String,
    },
    /// 运行测试
    Test,
    /// 打包便携版 (tar.gz)
    Dist,
    /// 检查 adb / scrcpy 是否可用
    Doctor,
    /// 清理构建产物
    Clean,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let sh = Shell::new()?;

    // 确保在项目根目录执行
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    sh.change_dir(manifest_dir.parent().unwrap_or(manifest_dir));

    match cli.command {
        Commands::Build => build(&sh)?,
        Commands::Dev { log_level } => dev(&sh, &log_level)?,
        Commands::Test => test(&sh)?,
        Commands::Dist => dist(&sh)?,
        Commands::Doctor => doctor(&sh),
        Commands::Clean => clean(&sh)?,
    }

    Ok(())
}

fn build(sh: &Shell) -> Result<()> {
    println!("🔨 构建所有组件...");
    cmd!(sh, "cargo build --release -p andromirror-gui -p andromirror-cli").run()?;
    println!("✅ 构建完成");
    Ok(())
}

fn dev(sh: &Shell, log_level: &str) -> Result<()> {
    println!("🚀 启动开发模式 GUI...");
    let rust_log = format!("{log_level},andromirror_core={log_level}");
    let _env = sh.push_env("RUST_LOG", rust_log);
    cmd!(sh, "cargo run -p andromirror-gui").run()?;
    Ok(())
}

fn test(sh: &Shell) -> Result<()> {
    println!("🧪 运行测试...");
    cmd!(sh, "cargo test --workspace").run()?;
    println!("✅ 测试完成");
    Ok(())
}

fn dist(sh: &Shell) -> Result<()> {
    println!("📦 打包便携版...");

    build(sh)?;

    let exe = std::env::consts::EXE_SUFFIX;
    let dist_name = format!(
        "andromirror-{VERSION}-{}-{}",
        std::env::consts::OS,
        std::env::consts::ARCH
    );
    let package = format!("dist/{dist_name}");

    sh.remove_path(&package)?;
    sh.create_dir(&package)?;
    sh.copy_file(format!("target/release/andromirror{exe}"), &package)?;
    sh.copy_file(
        format!("target/release/andromirror-cli{exe}"),
        &package,
    )?;
    for doc in ["README.md", "LICENSE"] {
        if sh.path_exists(doc) {
            sh.copy_file(doc, &package)?;
            println!("   已复制: {doc}");
        }
    }

    // 启动脚本
    if cfg!(windows) {
        sh.write_file(
            format!("{package}/run.bat"),
            "@echo off\r\ncd /d \"%~dp0\"\r\nstart \"\" andromirror.exe\r\n",
        )?;
    } else {
        let script = format!("{package}/run.sh");
        sh.write_file(&script, "#!/bin/sh\ncd \"$(dirname \"$0\")\"\nexec ./andromirror \"$@\"\n")?;
        cmd!(sh, "chmod +x {script}").run()?;
    }

    sh.change_dir("dist");
    cmd!(sh, "tar -czvf {dist_name}.tar.gz {dist_name}").run()?;

    println!("✅ 打包完成: dist/{dist_name}.tar.gz");
    println!("   运行前请确保 adb 与 scrcpy 已在 PATH 中 (cargo xtask doctor)");
    Ok(())
}

fn doctor(sh: &Shell) {
    println!("🩺 检查外部工具...");

    let tools = [
        ("adb", "version", "Android SDK Platform Tools"),
        ("scrcpy", "--version", "scrcpy"),
    ];

    let mut missing = 0;
    for (tool, flag, package) in tools {
        let ok = cmd!(sh, "{tool} {flag}")
            .quiet()
            .ignore_stdout()
            .ignore_stderr()
            .run()
            .is_ok();
        if ok {
            println!("   ✅ {tool}");
        } else {
            missing += 1;
            println!("   ❌ {tool} 未找到，请安装 {package} 并加入 PATH");
        }
    }

    if missing == 0 {
        println!("✅ 一切就绪");
    }
}

fn clean(sh: &Shell) -> Result<()> {
    println!("🧹 清理构建产物...");
    cmd!(sh, "cargo clean").run()?;
    sh.remove_path("dist")?;
    println!("✅ 清理完成");
    Ok(())
}
