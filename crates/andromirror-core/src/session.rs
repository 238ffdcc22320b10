//! 投屏会话控制器
//!
//! 状态机：`Idle → Starting → Running → Idle`。
//!
//! - `Idle → Starting`：用户点击连接（必须已选中设备）
//! - `Starting → Running`：scrcpy 启动成功
//! - `Running → Idle`：用户断开，或 scrcpy 自行退出（例如关闭了投屏窗口）
//!
//! 控制器在 `toggle` 里直接启动 scrcpy 并记下 pid，独占唯一的停止句柄；
//! 后台任务只负责等待进程退出，结果通过事件通道送回 UI 线程，
//! 再由 [`MirrorController::apply`] 推进状态。

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use log::{debug, info, warn};
use tokio::process::Child;
use tokio::sync::oneshot;

use crate::error::SessionError;
use crate::events::{AppEvent, EventSender, MirrorEvent};
use crate::mirror::{MirrorCommand, MirrorSettings};

/// SIGTERM 之后等待进程退出的时间，超时则强制结束
const TERMINATE_GRACE: Duration = Duration::from_secs(3);

/// 会话编号，每个控制器内单调递增
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl SessionId {
    #[cfg(test)]
    pub(crate) fn first() -> Self {
        SessionId(1)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 会话状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Starting {
        id: SessionId,
    },
    Running {
        id: SessionId,
        pid: Option<u32>,
    },
}

impl SessionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, SessionState::Idle)
    }

    /// 正在启动，此时不接受新的切换
    pub fn is_busy(&self) -> bool {
        matches!(self, SessionState::Starting { .. })
    }

    pub fn is_running(&self) -> bool {
        matches!(self, SessionState::Running { .. })
    }

    pub fn session(&self) -> Option<SessionId> {
        match self {
            SessionState::Idle => None,
            SessionState::Starting { id } | SessionState::Running { id, .. } => Some(*id),
        }
    }

    /// 进度条数值
    pub fn progress(&self) -> f32 {
        match self {
            SessionState::Idle => 0.0,
            SessionState::Starting { .. } => 0.6,
            SessionState::Running { .. } => 1.0,
        }
    }
}

/// [`MirrorController::toggle`] 的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// 已开始启动新会话
    Starting(SessionId),
    /// 正在启动中，忽略重复点击
    Ignored,
    /// 已终止当前会话
    Stopped(SessionId),
}

pub struct MirrorController {
    program: PathBuf,
    state: SessionState,
    stop: Option<oneshot::Sender<()>>,
    /// 尚未确认退出的子进程
    pid: Option<u32>,
    next_id: u64,
}

impl MirrorController {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            state: SessionState::Idle,
            stop: None,
            pid: None,
            next_id: 1,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// 连接 / 断开
    ///
    /// 空闲时用设置快照启动新会话（需要 Tokio 运行时）；运行中则终止当前会话并立即回到空闲。
    pub fn toggle(
        &mut self,
        serial: Option<&str>,
        settings: MirrorSettings,
        events: &EventSender,
    ) -> Result<Toggle, SessionError> {
        match self.state {
            SessionState::Idle => {
                let serial = serial.ok_or(SessionError::NoDeviceSelected)?;
                let id = SessionId(self.next_id);
                self.next_id += 1;

                debug!("Session {id}: starting for {serial}");
                self.state = SessionState::Starting { id };

                // 启动失败同样走事件通道，界面只有一条回到空闲的路径
                let command = MirrorCommand::new(self.program.clone(), serial, settings);
                match command.spawn() {
                    Ok(child) => {
                        let (stop_tx, stop_rx) = oneshot::channel();
                        self.stop = Some(stop_tx);
                        self.pid = child.id();
                        tokio::spawn(run_session(id, child, stop_rx, events.clone()));
                    }
                    Err(error) => {
                        warn!("Session {id}: {error}");
                        let _ = events.send(AppEvent::Mirror(MirrorEvent::LaunchFailed {
                            session: id,
                            error,
                        }));
                    }
                }
                Ok(Toggle::Starting(id))
            }
            SessionState::Starting { id } => {
                debug!("Session {id} is still starting, ignoring toggle");
                Ok(Toggle::Ignored)
            }
            SessionState::Running { id, .. } => {
                self.stop();
                Ok(Toggle::Stopped(id))
            }
        }
    }

    /// 终止当前会话（如果有），状态立即回到空闲
    pub fn stop(&mut self) -> Option<SessionId> {
        let id = self.state.session()?;
        if let Some(stop) = self.stop.take() {
            // 后台任务可能已经结束
            let _ = stop.send(());
        }
        info!("Session {id}: stop requested");
        self.pid = None;
        self.state = SessionState::Idle;
        Some(id)
    }

    /// 立即向子进程发送 SIGTERM，再请求后台任务收尾
    ///
    /// 窗口关闭时进程可能在后台任务再次被调度之前就退出，所以这里不能只依赖停止句柄。
    pub fn shutdown(&mut self) -> Option<SessionId> {
        if let Some(pid) = self.pid.take()
            && send_sigterm(pid)
        {
            info!("Sent SIGTERM to scrcpy (pid {pid})");
        }
        self.stop()
    }

    /// 应用后台任务送回的事件，过期会话的事件返回 `false`
    pub fn apply(&mut self, event: &MirrorEvent) -> bool {
        let session = event.session();
        if self.state.session() != Some(session) {
            debug!("Ignoring event for stale session {session}");
            return false;
        }

        match event {
            MirrorEvent::Launched { pid, .. } => {
                if let SessionState::Starting { id } = self.state {
                    self.state = SessionState::Running { id, pid: *pid };
                }
            }
            MirrorEvent::LaunchFailed { .. } | MirrorEvent::Exited { .. } => {
                self.stop = None;
                self.pid = None;
                self.state = SessionState::Idle;
            }
        }
        true
    }
}

impl Drop for MirrorController {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// 会话后台任务：等待 scrcpy 退出或停止信号
async fn run_session(
    id: SessionId,
    mut child: Child,
    mut stop: oneshot::Receiver<()>,
    events: EventSender,
) {
    let pid = child.id();
    info!("Session {id}: scrcpy running (pid {pid:?})");
    let _ = events.send(AppEvent::Mirror(MirrorEvent::Launched { session: id, pid }));

    let code = tokio::select! {
        status = child.wait() => match status {
            Ok(status) => {
                info!("Session {id}: scrcpy exited with {status}");
                status.code()
            }
            Err(e) => {
                warn!("Session {id}: failed to wait for scrcpy: {e}");
                None
            }
        },
        _ = &mut stop => {
            info!("Session {id}: terminating scrcpy");
            terminate(&mut child).await
        }
    };

    let _ = events.send(AppEvent::Mirror(MirrorEvent::Exited { session: id, code }));
}

/// 先 SIGTERM 让 scrcpy 正常收尾，超时再强制结束；进程已消失也不算错误
async fn terminate(child: &mut Child) -> Option<i32> {
    if let Some(pid) = child.id()
        && send_sigterm(pid)
        && let Ok(Ok(status)) = tokio::time::timeout(TERMINATE_GRACE, child.wait()).await
    {
        return status.code();
    }

    if let Err(e) = child.kill().await {
        debug!("kill scrcpy: {e}");
    }
    None
}

#[cfg(unix)]
fn send_sigterm(pid: u32) -> bool {
    use nix::sys::signal::{Signal, kill};
    use nix::unistd::Pid;

    let Ok(raw) = i32::try_from(pid) else {
        return false;
    };
    match kill(Pid::from_raw(raw), Signal::SIGTERM) {
        Ok(()) => true,
        Err(e) => {
            debug!("SIGTERM {pid}: {e}");
            false
        }
    }
}

#[cfg(not(unix))]
fn send_sigterm(_pid: u32) -> bool {
    false
}
