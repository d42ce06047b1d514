//! # jari-monitor
//!
//! 플랫폼 모니터링 어댑터.
//! 전역 입력 이벤트로 갱신되는 활동 시계, 활성 앱 감지, 유휴 판정을 제공한다.
//! 활성 앱 감지는 플랫폼별(macOS, Windows, Linux) 네이티브 경로로 구현.

pub mod clock;
pub mod engine;
pub mod foreground;
pub mod input;

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(target_os = "linux")]
pub mod linux;
