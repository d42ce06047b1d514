//! macOS 플랫폼 — 활성 앱 감지.
//!
//! System Events(워크스페이스 서비스)에 frontmost 앱 프로세스 이름을 직접 질의.

use std::process::Command;
use tracing::debug;

/// macOS 활성 앱 프로세스 이름 조회
///
/// 실패 시 None 반환 (권한 거부, System Events 응답 없음 등).
pub fn foreground_app_macos() -> Option<String> {
    let output = Command::new("osascript")
        .arg("-e")
        .arg(
            r#"tell application "System Events" to get name of first application process whose frontmost is true"#,
        )
        .output()
        .ok()?;

    if !output.status.success() {
        debug!("활성 앱 감지 실패 (osascript)");
        return None;
    }

    let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if name.is_empty() {
        return None;
    }

    debug!("활성 앱: {name}");
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn foreground_app_returns_option() {
        // CI 환경에서는 None일 수 있음 — 패닉하지 않아야 함
        let app = foreground_app_macos();
        if let Some(name) = app {
            assert!(!name.is_empty());
        }
    }
}
