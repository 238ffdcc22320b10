//! `adb devices` 输出解析
//!
//! 输出格式：
//!
//! ```text
//! List of devices attached
//! ABC123\tdevice
//! 192.168.1.20:5555\toffline
//! ```

use std::fmt;

/// 设备状态（`adb devices` 第二列）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceState {
    /// 已授权并就绪
    Device,
    Unauthorized,
    Offline,
    Other(String),
}

impl DeviceState {
    pub fn parse(s: &str) -> Self {
        match s {
            "device" => DeviceState::Device,
            "unauthorized" => DeviceState::Unauthorized,
            "offline" => DeviceState::Offline,
            other => DeviceState::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            DeviceState::Device => "device",
            DeviceState::Unauthorized => "unauthorized",
            DeviceState::Offline => "offline",
            DeviceState::Other(s) => s,
        }
    }

    /// 是否可以用于投屏
    pub fn is_ready(&self) -> bool {
        matches!(self, DeviceState::Device)
    }
}

impl fmt::Display for DeviceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `adb devices` 列出的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    pub serial: String,
    pub state: DeviceState,
}

/// 解析 `adb devices` 的标准输出
///
/// 跳过首行标题，其余每行按第一个制表符拆分为序列号和状态。
/// 不含制表符的行（例如守护进程启动提示）被忽略，顺序与输入一致。
pub fn parse_devices(output: &str) -> Vec<Device> {
    output
        .lines()
        .skip(1)
        .filter_map(|line| {
            let (serial, state) = line.trim().split_once('\t')?;
            let serial = serial.trim();
            if serial.is_empty() {
                return None;
            }
            Some(Device {
                serial: serial.to_string(),
                state: DeviceState::parse(state.trim()),
            })
        })
        .collect()
}

/// 只保留状态为 `device` 的序列号
pub fn authorized_serials(devices: &[Device]) -> Vec<String> {
    devices
        .iter()
        .filter(|d| d.state.is_ready())
        .map(|d| d.serial.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_authorized_devices_are_kept() {
        let output = "List of devices attached\nABC123\tdevice\nXYZ999\tunauthorized\n";
        let devices = parse_devices(output);
        assert_eq!(devices.len(), 2);
        assert_eq!(devices[1].state, DeviceState::Unauthorized);
        assert_eq!(authorized_serials(&devices), vec!["ABC123".to_string()]);
    }

    #[test]
    fn test_input_order_is_preserved() {
        let output = "List of devices attached\n\
                      emulator-5556\tdevice\n\
                      R58M123\toffline\n\
                      192.168.1.20:5555\tdevice\n\
                      0123456789\tdevice\n";
        let serials = authorized_serials(&parse_devices(output));
        assert_eq!(serials, ["emulator-5556", "192.168.1.20:5555", "0123456789"]);
    }

    #[test]
    fn test_header_only() {
        assert!(parse_devices("List of devices attached\n\n").is_empty());
        assert!(parse_devices("").is_empty());
    }

    #[test]
    fn test_daemon_notices_and_crlf() {
        let output = "* daemon not running; starting now at tcp:5037\r\n\
                      * daemon started successfully\r\n\
                      List of devices attached\r\n\
                      ABC123\tdevice\r\n";
        let devices = parse_devices(output);
        assert_eq!(
            devices,
            vec![Device {
                serial: "ABC123".to_string(),
                state: DeviceState::Device,
            }]
        );
    }

    #[test]
    fn test_unknown_state() {
        let devices = parse_devices("List of devices attached\nABC\trecovery\n");
        assert_eq!(devices[0].state, DeviceState::Other("recovery".to_string()));
        assert!(!devices[0].state.is_ready());
        assert_eq!(devices[0].state.to_string(), "recovery");
    }
}
