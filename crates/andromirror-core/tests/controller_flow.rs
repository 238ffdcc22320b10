//! 集成测试 - 控制器与后台任务的交互
//!
//! 用临时 shell 脚本代替 adb / scrcpy，验证事件往返后界面状态是否正确。

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use andromirror_core::events::{self, EventReceiver};
use andromirror_core::{
    AppController, AppEvent, Bridge, LogLevel, MirrorEvent, MirrorSettings, NoticeKind, ToolError,
};

const ADB_DEVICES: &str = r#"case "$1" in
devices) printf 'List of devices attached\nABC123\tdevice\nXYZ999\tunauthorized\n' ;;
connect) echo "connected to $2" ;;
esac"#;

fn fake_tool(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

async fn next_event(rx: &mut EventReceiver) -> AppEvent {
    tokio::time::timeout(Duration::from_secs(10), rx.recv())
        .await
        .expect("timed out waiting for event")
        .expect("channel closed")
}

fn controller(dir: &Path, adb_body: &str, scrcpy_body: &str) -> (AppController, EventReceiver) {
    let adb = fake_tool(dir, "adb", adb_body);
    let scrcpy = fake_tool(dir, "scrcpy", scrcpy_body);
    let (tx, rx) = events::channel();
    (AppController::with_tools(Bridge::new(adb), scrcpy, tx), rx)
}

/// 刷新只保留已授权设备
#[tokio::test]
async fn test_refresh_populates_authorized_devices() {
    let dir = tempfile::tempdir().unwrap();
    let (mut app, mut rx) = controller(dir.path(), ADB_DEVICES, "exit 0");

    app.refresh();
    assert!(app.is_refreshing());

    let event = next_event(&mut rx).await;
    assert!(app.handle(event).is_none());
    assert!(!app.is_refreshing());
    assert_eq!(app.devices(), ["ABC123"]);
    assert_eq!(app.status(), "Found 1 device(s)");
}

/// 刷新失败时保留上一次的列表
#[tokio::test]
async fn test_failed_refresh_keeps_previous_list() {
    let dir = tempfile::tempdir().unwrap();
    let (mut app, mut rx) = controller(dir.path(), ADB_DEVICES, "exit 0");

    app.refresh();
    let event = next_event(&mut rx).await;
    app.handle(event);
    assert_eq!(app.devices(), ["ABC123"]);

    // adb 消失了
    fs::remove_file(dir.path().join("adb")).unwrap();
    app.refresh();
    let notice = app.handle(next_event(&mut rx).await).expect("error notice");
    assert_eq!(notice.kind, NoticeKind::Error);
    assert!(notice.message.starts_with("ADB not found"));
    assert_eq!(app.devices(), ["ABC123"]);
    assert!(!app.is_refreshing());
}

/// 晚到的旧刷新结果不会覆盖新结果
#[tokio::test]
async fn test_stale_refresh_is_dropped() {
    let dir = tempfile::tempdir().unwrap();
    let (mut app, _rx) = controller(dir.path(), ADB_DEVICES, "exit 0");

    app.refresh();
    app.refresh();

    app.handle(AppEvent::DevicesRefreshed {
        request: 2,
        result: Ok(vec!["NEW".to_string()]),
    });
    app.handle(AppEvent::DevicesRefreshed {
        request: 1,
        result: Ok(vec!["OLD".to_string()]),
    });

    assert_eq!(app.devices(), ["NEW"]);
}

/// 空地址：提示错误且不启动子进程
#[tokio::test]
async fn test_empty_wireless_address() {
    let dir = tempfile::tempdir().unwrap();
    let (mut app, mut rx) = controller(dir.path(), ADB_DEVICES, "exit 0");

    let notice = app.connect_wireless("  ", "").expect("validation notice");
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.message, "Please enter IP address");
    assert!(!app.is_connecting_wireless());

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(rx.try_recv().is_err());
}

/// 无线连接成功后自动刷新
#[tokio::test]
async fn test_wireless_success_triggers_refresh() {
    let dir = tempfile::tempdir().unwrap();
    let (mut app, mut rx) = controller(dir.path(), ADB_DEVICES, "exit 0");

    assert!(app.connect_wireless("192.168.1.100", "").is_none());
    assert!(app.is_connecting_wireless());

    let event = next_event(&mut rx).await;
    assert!(matches!(
        &event,
        AppEvent::WirelessFinished { target, result: Ok(_) } if target == "192.168.1.100:5555"
    ));

    let notice = app.handle(event).expect("success notice");
    assert_eq!(notice.kind, NoticeKind::Info);
    assert_eq!(notice.message, "Connected to 192.168.1.100:5555");
    assert!(!app.is_connecting_wireless());
    assert!(app.is_refreshing());

    app.handle(next_event(&mut rx).await);
    assert_eq!(app.devices(), ["ABC123"]);
}

/// 无线连接失败时展示 adb 自身的输出
#[tokio::test]
async fn test_wireless_failure_shows_tool_output() {
    let dir = tempfile::tempdir().unwrap();
    let (mut app, mut rx) = controller(
        dir.path(),
        r#"echo "failed to connect to '$2': No route to host""#,
        "exit 0",
    );

    app.connect_wireless("10.1.1.1", "4444");
    let notice = app.handle(next_event(&mut rx).await).expect("failure notice");
    assert_eq!(notice.title, "Connection Failed");
    assert_eq!(notice.message, "failed to connect to '10.1.1.1:4444': No route to host");
    assert!(!app.is_refreshing());
}

/// 完整的投屏会话：空闲 → 启动中 → 运行中 → 空闲
#[tokio::test]
async fn test_mirror_session_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let (mut app, mut rx) = controller(dir.path(), ADB_DEVICES, "exec sleep 30");

    app.refresh();
    let event = next_event(&mut rx).await;
    app.handle(event);

    assert!(!app.connect_control().enabled);
    app.select(Some("ABC123".to_string()));
    assert!(app.connect_control().enabled);

    app.toggle_mirror(MirrorSettings::default());
    assert!(app.session().is_busy());
    assert!(!app.connect_control().enabled);

    // 启动中再次点击不会启动第二个进程
    app.toggle_mirror(MirrorSettings::default());
    assert!(app.session().is_busy());

    let launched = next_event(&mut rx).await;
    assert!(matches!(launched, AppEvent::Mirror(MirrorEvent::Launched { .. })));
    app.handle(launched);
    assert!(app.session().is_running());
    assert_eq!(app.connect_control().label, "Disconnect");
    assert_eq!(app.status(), "scrcpy started successfully!");

    app.toggle_mirror(MirrorSettings::default());
    assert!(app.session().is_idle());
    assert_eq!(app.connect_control().label, "Connect");
    assert_eq!(app.status(), "Ready to connect");

    let exited = next_event(&mut rx).await;
    assert!(matches!(exited, AppEvent::Mirror(MirrorEvent::Exited { .. })));
    assert!(app.handle(exited).is_none());
    assert!(app.session().is_idle());
}

/// 选中的设备不在列表中时不会启动投屏
#[tokio::test]
async fn test_unlisted_selection_does_not_start() {
    let dir = tempfile::tempdir().unwrap();
    let (mut app, mut rx) = controller(dir.path(), ADB_DEVICES, "exec sleep 30");

    app.select(Some("XYZ999".to_string()));
    assert!(!app.connect_control().enabled);

    app.toggle_mirror(MirrorSettings::default());
    assert!(app.session().is_idle());

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(rx.try_recv().is_err());
}

/// scrcpy 未安装
#[tokio::test]
async fn test_missing_scrcpy_reports_specific_message() {
    let dir = tempfile::tempdir().unwrap();
    let adb = fake_tool(dir.path(), "adb", ADB_DEVICES);
    let (tx, mut rx) = events::channel();
    let mut app = AppController::with_tools(Bridge::new(adb), dir.path().join("scrcpy"), tx);

    app.refresh();
    let event = next_event(&mut rx).await;
    app.handle(event);
    app.select(Some("ABC123".to_string()));
    app.toggle_mirror(MirrorSettings::default());

    let event = next_event(&mut rx).await;
    assert!(matches!(
        &event,
        AppEvent::Mirror(MirrorEvent::LaunchFailed {
            error: ToolError::Missing { .. },
            ..
        })
    ));
    let notice = app.handle(event).expect("error notice");
    assert_eq!(
        notice.message,
        "scrcpy not found. Please install scrcpy and add it to PATH"
    );
    assert!(app.session().is_idle());
    assert!(app.connect_control().enabled);
}

/// 关闭窗口时终止正在运行的投屏
#[tokio::test]
async fn test_shutdown_stops_running_session() {
    let dir = tempfile::tempdir().unwrap();
    let (mut app, mut rx) = controller(dir.path(), ADB_DEVICES, "exec sleep 30");

    app.refresh();
    let event = next_event(&mut rx).await;
    app.handle(event);
    app.select(Some("ABC123".to_string()));
    app.toggle_mirror(MirrorSettings::default());

    let launched = next_event(&mut rx).await;
    app.handle(launched);
    assert!(app.session().is_running());

    app.shutdown();
    assert!(app.session().is_idle());

    let exited = next_event(&mut rx).await;
    assert!(matches!(exited, AppEvent::Mirror(MirrorEvent::Exited { .. })));
}

/// scrcpy 以非零状态退出时记一条警告
#[tokio::test]
async fn test_failed_exit_is_logged_as_warning() {
    let dir = tempfile::tempdir().unwrap();
    let (mut app, mut rx) = controller(dir.path(), ADB_DEVICES, "exit 2");

    app.refresh();
    let event = next_event(&mut rx).await;
    app.handle(event);
    app.select(Some("ABC123".to_string()));
    app.toggle_mirror(MirrorSettings::default());

    let launched = next_event(&mut rx).await;
    app.handle(launched);
    let exited = next_event(&mut rx).await;
    assert!(app.handle(exited).is_none());

    let last = app.log().entries().last().expect("log entry");
    assert_eq!(last.level, LogLevel::Warn);
    assert!(last.message.ends_with("scrcpy exited (2)"));
    assert_eq!(app.status(), "Ready to connect");
}
