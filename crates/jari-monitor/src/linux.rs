//! Linux 플랫폼 — 활성 앱 감지.
//!
//! X11에서 `xdotool`로 활성 창 ID(`_NET_ACTIVE_WINDOW`)와 소유 PID
//! (`_NET_WM_PID`)를 질의한 뒤 `/proc/<pid>/comm`에서 프로세스 이름을 읽는다.
//!
//! Wayland는 보안상 표준 API가 제한적이므로 XWayland fallback에 의존한다 —
//! X11 앱만 감지 가능하며, 실패는 unresolved로 수렴한다.

use std::process::Command;
use tracing::{debug, warn};

/// 현재 디스플레이 서버 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayServer {
    X11,
    Wayland,
    Unknown,
}

/// 현재 사용 중인 디스플레이 서버 감지
pub fn detect_display_server() -> DisplayServer {
    // XDG_SESSION_TYPE 환경변수 확인 (systemd 기반 시스템)
    if let Ok(session_type) = std::env::var("XDG_SESSION_TYPE") {
        match session_type.to_lowercase().as_str() {
            "x11" => return DisplayServer::X11,
            "wayland" => return DisplayServer::Wayland,
            _ => {}
        }
    }

    if std::env::var("WAYLAND_DISPLAY").is_ok() {
        return DisplayServer::Wayland;
    }

    if std::env::var("DISPLAY").is_ok() {
        return DisplayServer::X11;
    }

    DisplayServer::Unknown
}

/// Linux 활성 앱 프로세스 이름 조회
///
/// 실패 시 None 반환 — 어떤 단계에서 실패하든 전파하지 않는다.
pub fn foreground_app_linux() -> Option<String> {
    match detect_display_server() {
        DisplayServer::X11 => foreground_app_x11(),
        DisplayServer::Wayland => {
            // Wayland에서는 XWayland를 통한 X11 앱만 감지 가능
            debug!("Wayland 감지됨 - XWayland fallback 시도");
            foreground_app_x11().or_else(|| {
                warn!("Wayland에서 활성 앱 감지 제한됨 - X11 앱만 지원");
                None
            })
        }
        DisplayServer::Unknown => {
            debug!("디스플레이 서버 감지 실패");
            None
        }
    }
}

/// X11에서 xdotool을 사용하여 활성 앱 이름 가져오기
fn foreground_app_x11() -> Option<String> {
    // 1단계: 활성 창 ID (_NET_ACTIVE_WINDOW)
    let window_id = match Command::new("xdotool").arg("getactivewindow").output() {
        Ok(output) if output.status.success() => {
            String::from_utf8_lossy(&output.stdout).trim().to_string()
        }
        Ok(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!("xdotool 실패: {}", stderr);
            return None;
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::NotFound {
                debug!("xdotool 미설치 - 'sudo apt install xdotool' 실행 필요");
            } else {
                debug!("xdotool 실행 실패: {}", e);
            }
            return None;
        }
    };

    if window_id.is_empty() {
        return None;
    }

    // 2단계: 창 소유 PID (_NET_WM_PID)
    let pid = Command::new("xdotool")
        .args(["getwindowpid", &window_id])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| {
            String::from_utf8_lossy(&o.stdout)
                .trim()
                .parse::<u32>()
                .ok()
        })?;

    // 3단계: PID → 프로세스 이름
    let name = process_name(pid)?;
    debug!("활성 앱: {} (PID: {})", name, pid);
    Some(name)
}

/// PID로부터 프로세스 이름 가져오기
fn process_name(pid: u32) -> Option<String> {
    // /proc/{pid}/comm 파일에서 프로세스 이름 읽기
    let comm_path = format!("/proc/{}/comm", pid);
    std::fs::read_to_string(&comm_path)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
