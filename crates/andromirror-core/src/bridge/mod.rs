//! 设备桥接工具 (adb) 调用
//!
//! 设备发现和无线连接都只是对外部 `adb` 的一次带超时的调用，
//! 输出通过简单的字符串拆分解析。

mod parser;


pub use parser::{Device, DeviceState, authorized_serials, parse_devices};

use std::path::PathBuf;
use std::process::{Output, Stdio};
use std::time::Duration;

use log::{debug, info, warn};
use tokio::process::Command;

use crate::error::{Tool, ToolError};

/// 无线调试默认端口
pub const DEFAULT_PORT: u16 = 5555;

/// 设备列表和连接命令的默认超时
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// adb 调用封装
#[derive(Debug, Clone)]
pub struct Bridge {
    program: PathBuf,
    timeout: Duration,
    default_port: u16,
}

impl Bridge {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            timeout: DEFAULT_TIMEOUT,
            default_port: DEFAULT_PORT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_default_port(mut self, port: u16) -> Self {
        self.default_port = port;
        self
    }

    pub fn default_port(&self) -> u16 {
        self.default_port
    }

    /// 列出所有设备（包括未授权和离线的）
    pub async fn list_devices(&self) -> Result<Vec<Device>, ToolError> {
        let output = self.run(&["devices"]).await?;
        if !output.status.success() {
            let stdout = String::from_utf8_lossy(&output.stdout);
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = non_empty(&stderr)
                .or_else(|| non_empty(&stdout))
                .map_or_else(|| format!("adb devices exited with {}", output.status), str::to_string);
            return Err(ToolError::failure(Tool::Bridge, message));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let devices = parse_devices(&stdout);
        debug!("adb reported {} device line(s)", devices.len());
        Ok(devices)
    }

    /// 已授权、可投屏的设备序列号
    pub async fn devices(&self) -> Result<Vec<String>, ToolError> {
        let devices = self.list_devices().await?;
        Ok(authorized_serials(&devices))
    }

    /// 执行 `adb connect host:port`
    ///
    /// 输出中包含 "connected"（不区分大小写）才算成功，返回 adb 的确认信息。
    pub async fn connect(&self, host: &str, port: Option<u16>) -> Result<String, ToolError> {
        let target = connect_target(host, port, self.default_port)?;
        info!("Connecting to {target}");

        let output = self.run(&["connect", &target]).await?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        if output.status.success() && stdout.to_lowercase().contains("connected") {
            info!("adb connect {target}: {}", stdout.trim());
            Ok(stdout.trim().to_string())
        } else {
            let message = non_empty(&stdout)
                .or_else(|| non_empty(&stderr))
                .unwrap_or("Connection failed");
            warn!("adb connect {target} failed: {message}");
            Err(ToolError::failure(Tool::Bridge, message))
        }
    }

    async fn run(&self, args: &[&str]) -> Result<Output, ToolError> {
        debug!("Running {} {}", self.program.display(), args.join(" "));

        let child = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| ToolError::from_spawn(Tool::Bridge, &e))?;

        // 超时后 future 被丢弃，kill_on_drop 会结束子进程
        match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(Ok(output)) => Ok(output),
            Ok(Err(e)) => Err(ToolError::failure(
                Tool::Bridge,
                format!("Error running adb: {e}"),
            )),
            Err(_) => {
                warn!("adb {} timed out after {:?}", args.join(" "), self.timeout);
                Err(ToolError::Timeout {
                    tool: Tool::Bridge,
                    after: self.timeout,
                })
            }
        }
    }
}

/// 构造 `host:port`，拒绝空地址
pub fn connect_target(host: &str, port: Option<u16>, default_port: u16) -> Result<String, ToolError> {
    let host = host.trim();
    if host.is_empty() {
        return Err(ToolError::InvalidInput("Please enter IP address".to_string()));
    }
    Ok(format!("{host}:{}", port.unwrap_or(default_port)))
}

/// 解析端口输入框内容，空白表示使用默认端口
pub fn parse_port(text: &str) -> Result<Option<u16>, ToolError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    match text.parse::<u16>() {
        Ok(0) | Err(_) => Err(ToolError::InvalidInput(format!("Invalid port: {text}"))),
        Ok(port) => Ok(Some(port)),
    }
}

fn non_empty(s: &str) -> Option<&str> {
    let s = s.trim();
    (!s.is_empty()).then_some(s)
}
