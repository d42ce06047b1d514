//! Windows 플랫폼 — 활성 앱 감지.
//!
//! Win32 API `GetForegroundWindow` → `GetWindowThreadProcessId` → 프로세스 이름.

#![cfg(target_os = "windows")]

use tracing::debug;
use windows_sys::Win32::Foundation::HWND;
use windows_sys::Win32::UI::WindowsAndMessaging::{
    GetForegroundWindow, GetWindowThreadProcessId,
};

/// Windows 활성 앱 프로세스 이름 조회
///
/// 실패 시 None 반환 (활성 창 없음, 조회 도중 프로세스 종료 등).
pub fn foreground_app_windows() -> Option<String> {
    let pid = unsafe {
        let hwnd: HWND = GetForegroundWindow();
        if hwnd.is_null() {
            debug!("활성 창 없음 (GetForegroundWindow → null)");
            return None;
        }

        let mut pid: u32 = 0;
        GetWindowThreadProcessId(hwnd, &mut pid);
        pid
    };

    if pid == 0 {
        return None;
    }

    let name = process_name(pid)?;
    debug!("활성 앱: {name} (PID: {pid})");
    Some(name)
}

/// PID로 프로세스 이름 조회
fn process_name(pid: u32) -> Option<String> {
    use sysinfo::{Pid, System};

    let mut sys = System::new();
    sys.refresh_processes(
        sysinfo::ProcessesToUpdate::Some(&[Pid::from_u32(pid)]),
        true,
    );

    sys.process(Pid::from_u32(pid))
        .map(|p| p.name().to_string_lossy().to_string())
}
