//! 종료 절차 조정.
//!
//! 종료는 고정 순서를 따른다: 시그널 수신 → 종료 전파 → 폴링 루프 드레인
//! → 입력 브리지 정지. 루프가 먼저 끝나야 종료 이후 레코드가 방출되지
//! 않고, 브리지 정지가 마지막이라 진행 중이던 틱도 정상 시계를 본다.
//!
//! 시그널 핸들러는 `SignalListener::install()` 호출 시점에 설치된다.
//! 프로듀서 시작 전에 설치해야 시작 직후의 Ctrl+C도 기본 kill 경로가
//! 아닌 이 종료 절차를 탄다.

use anyhow::{Context, Result};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// 폴링 루프 드레인 한도 — 초과 시 경고 후 나머지 절차 진행
const DRAIN_LIMIT: Duration = Duration::from_secs(2);

/// 종료 브로드캐스터
///
/// watch 채널 하나로 모든 루프가 같은 종료 신호를 관찰한다.
pub struct ShutdownSignal {
    tx: watch::Sender<bool>,
}

impl ShutdownSignal {
    /// 새 브로드캐스터 생성 (초기 상태: 미종료)
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx }
    }

    /// 종료 수신기 발급
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }

    /// 종료 전파
    pub fn trigger(&self) {
        info!("종료 신호 발송");
        let _ = self.tx.send(true);
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// OS 종료 시그널 수신기
///
/// 핸들러는 생성 시점에 설치되므로, 설치 이후 `recv` 이전에 도착한
/// 시그널도 유실되지 않는다.
pub struct SignalListener {
    #[cfg(unix)]
    sigint: tokio::signal::unix::Signal,
    #[cfg(unix)]
    sigterm: tokio::signal::unix::Signal,
    #[cfg(windows)]
    ctrl_c: tokio::signal::windows::CtrlC,
}

impl SignalListener {
    /// 시그널 핸들러 설치
    ///
    /// unix: SIGINT + SIGTERM, windows: Ctrl+C.
    pub fn install() -> Result<Self> {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};
            Ok(Self {
                sigint: signal(SignalKind::interrupt()).context("SIGINT 핸들러 설치 실패")?,
                sigterm: signal(SignalKind::terminate()).context("SIGTERM 핸들러 설치 실패")?,
            })
        }

        #[cfg(windows)]
        {
            Ok(Self {
                ctrl_c: tokio::signal::windows::ctrl_c().context("Ctrl+C 핸들러 설치 실패")?,
            })
        }
    }

    /// 시그널 도착까지 대기
    pub async fn recv(mut self) {
        #[cfg(unix)]
        tokio::select! {
            _ = self.sigint.recv() => info!("SIGINT 수신"),
            _ = self.sigterm.recv() => info!("SIGTERM 수신"),
        }

        #[cfg(windows)]
        {
            self.ctrl_c.recv().await;
            info!("Ctrl+C 수신");
        }
    }
}

/// 폴링 루프가 마지막 틱을 마칠 때까지 유한 대기
///
/// 종료 신호는 이미 전파된 상태여야 한다. 한도를 넘으면 경고만 남긴다 —
/// 루프가 멈춰 있어도 나머지 종료 절차를 막지 않는다.
pub async fn drain(task: JoinHandle<()>) {
    if tokio::time::timeout(DRAIN_LIMIT, task).await.is_err() {
        warn!("폴링 루프 종료 대기 타임아웃");
    }
}
