//! 활성 앱 감지 — `ForegroundResolver` 포트 구현.
//!
//! 플랫폼별 조회 경로는 시작 시 컴파일 타임에 한 번 결정된다:
//!
//! - macOS: System Events로 frontmost 앱 프로세스 이름 조회
//! - Windows: `GetForegroundWindow` → PID → 프로세스 이름
//! - Linux: 활성 창 ID → `_NET_WM_PID` → `/proc/<pid>/comm`
//! - 그 외 플랫폼: 항상 unresolved
//!
//! 모든 실패(활성 창 없음, 권한 거부, 조회 도중 프로세스 소멸)는
//! `ForegroundApp::unresolved()`로 수렴하며 절대 전파되지 않는다.

use async_trait::async_trait;
use jari_core::models::status::ForegroundApp;
use jari_core::ports::monitor::ForegroundResolver;
use tracing::debug;

/// 플랫폼 활성 앱 조회기
#[derive(Debug, Default)]
pub struct PlatformForeground;

impl PlatformForeground {
    /// 새 조회기 생성
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ForegroundResolver for PlatformForeground {
    async fn resolve(&self) -> ForegroundApp {
        // OS 호출은 블로킹이므로 폴러 태스크를 막지 않도록 분리
        match tokio::task::spawn_blocking(current_app_name).await {
            Ok(Some(name)) if !name.is_empty() => ForegroundApp::resolved(name),
            Ok(_) => ForegroundApp::unresolved(),
            Err(e) => {
                debug!("활성 앱 조회 태스크 실패: {e}");
                ForegroundApp::unresolved()
            }
        }
    }
}

/// 현재 활성 앱의 프로세스 이름 조회 (플랫폼별)
///
/// 실패 시 None — 호출자는 이를 unresolved로 취급한다.
pub fn current_app_name() -> Option<String> {
    #[cfg(target_os = "macos")]
    {
        crate::macos::foreground_app_macos()
    }

    #[cfg(target_os = "windows")]
    {
        crate::windows::foreground_app_windows()
    }

    #[cfg(target_os = "linux")]
    {
        crate::linux::foreground_app_linux()
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
    {
        // 기타 플랫폼: 미지원
        None
    }
}
