//! 错误类型
//!
//! 所有外部工具调用的失败都归入 [`ToolError`]，在工作任务边界转换为
//! 面向用户的消息，由 UI 以对话框或状态栏的形式展示。

use std::fmt;
use std::time::Duration;

/// 被调用的外部命令行工具
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// 设备桥接工具 (adb)
    Bridge,
    /// 投屏工具 (scrcpy)
    Mirror,
}

impl Tool {
    /// 默认可执行文件名
    pub fn program_name(self) -> &'static str {
        match self {
            Tool::Bridge => "adb",
            Tool::Mirror => "scrcpy",
        }
    }

    /// 找不到可执行文件时的提示
    pub fn not_found_message(self) -> &'static str {
        match self {
            Tool::Bridge => "ADB not found. Please install Android SDK Platform Tools",
            Tool::Mirror => "scrcpy not found. Please install scrcpy and add it to PATH",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tool::Bridge => write!(f, "ADB"),
            Tool::Mirror => write!(f, "scrcpy"),
        }
    }
}

/// 外部工具调用错误
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToolError {
    #[error("{}", .tool.not_found_message())]
    Missing { tool: Tool },

    #[error("{tool} command timed out after {}s", .after.as_secs())]
    Timeout { tool: Tool, after: Duration },

    #[error("{message}")]
    Failure { tool: Tool, message: String },

    #[error("{0}")]
    InvalidInput(String),
}

impl ToolError {
    pub(crate) fn failure(tool: Tool, message: impl Into<String>) -> Self {
        ToolError::Failure {
            tool,
            message: message.into(),
        }
    }

    /// 将启动子进程时的 IO 错误映射为工具错误
    pub(crate) fn from_spawn(tool: Tool, err: &std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            ToolError::Missing { tool }
        } else {
            match tool {
                Tool::Bridge => ToolError::failure(tool, format!("Error running adb: {err}")),
                Tool::Mirror => ToolError::failure(tool, format!("Failed to start scrcpy: {err}")),
            }
        }
    }
}

/// 投屏会话控制错误
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("No device selected")]
    NoDeviceSelected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_messages() {
        let err = ToolError::Missing { tool: Tool::Mirror };
        assert_eq!(
            err.to_string(),
            "scrcpy not found. Please install scrcpy and add it to PATH"
        );
        let err = ToolError::Missing { tool: Tool::Bridge };
        assert!(err.to_string().starts_with("ADB not found"));
    }

    #[test]
    fn test_spawn_mapping() {
        let not_found = std::io::Error::from(std::io::ErrorKind::NotFound);
        assert_eq!(
            ToolError::from_spawn(Tool::Bridge, &not_found),
            ToolError::Missing { tool: Tool::Bridge }
        );

        let denied = std::io::Error::from(std::io::ErrorKind::PermissionDenied);
        let err = ToolError::from_spawn(Tool::Mirror, &denied);
        assert!(matches!(err, ToolError::Failure { tool: Tool::Mirror, .. }));
        assert!(err.to_string().starts_with("Failed to start scrcpy"));
    }

    #[test]
    fn test_timeout_message() {
        let err = ToolError::Timeout {
            tool: Tool::Bridge,
            after: Duration::from_secs(10),
        };
        assert_eq!(err.to_string(), "ADB command timed out after 10s");
    }
}
