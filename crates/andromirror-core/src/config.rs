//! 应用配置
//!
//! 启动时从 `<config_dir>/andromirror/config.toml` 读取一次（文件不存在则使用默认值）。
//! 应用本身从不写回配置，界面上的投屏设置只在窗口生命周期内有效。
//!
//! ```toml
//! adb_path = "/opt/platform-tools/adb"
//! scrcpy_path = "/usr/local/bin/scrcpy"
//! command_timeout_secs = 10
//! default_port = 5555
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, warn};
use serde::Deserialize;

use crate::bridge::{Bridge, DEFAULT_PORT, DEFAULT_TIMEOUT};
use crate::error::Tool;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// adb 路径，未设置时在 PATH 中查找
    pub adb_path: Option<PathBuf>,
    /// scrcpy 路径，未设置时在 PATH 中查找
    pub scrcpy_path: Option<PathBuf>,
    /// `adb devices` / `adb connect` 超时（秒）
    pub command_timeout_secs: u64,
    /// 无线连接默认端口
    pub default_port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            adb_path: None,
            scrcpy_path: None,
            command_timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            default_port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    /// 配置文件路径
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("andromirror")
            .join("config.toml")
    }

    /// 加载配置，出错时回退到默认值
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }
        match Self::from_file(&path) {
            Ok(config) => {
                debug!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("{e}, using defaults");
                Self::default()
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn command_timeout(&self) -> Duration {
        Duration::from_secs(self.command_timeout_secs.max(1))
    }

    pub fn bridge_program(&self) -> PathBuf {
        resolve_program(self.adb_path.as_deref(), Tool::Bridge)
    }

    pub fn mirror_program(&self) -> PathBuf {
        resolve_program(self.scrcpy_path.as_deref(), Tool::Mirror)
    }

    pub fn bridge(&self) -> Bridge {
        Bridge::new(self.bridge_program())
            .with_timeout(self.command_timeout())
            .with_default_port(self.default_port)
    }
}

/// 配置路径优先，其次在 PATH 中查找，都没有时返回裸程序名，
/// 让启动时的 NotFound 统一报告为"未安装"
fn resolve_program(configured: Option<&Path>, tool: Tool) -> PathBuf {
    if let Some(path) = configured {
        return path.to_path_buf();
    }
    let name = tool.program_name();
    match which::which(name) {
        Ok(path) => {
            debug!("Found {name} at {}", path.display());
            path
        }
        Err(_) => {
            debug!("{name} not found on PATH");
            PathBuf::from(name)
        }
    }
}
