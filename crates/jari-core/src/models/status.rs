//! 활동 상태 모델.
//!
//! 유휴/활성 분류 결과와 활성 앱 식별 정보를 표현.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 유휴 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IdleState {
    /// 활성 (사용자 입력 있음)
    Active,
    /// 유휴 (임계값 초과)
    Idle,
}

impl IdleState {
    /// 표시용 문자열
    pub fn as_str(&self) -> &'static str {
        match self {
            IdleState::Active => "ACTIVE",
            IdleState::Idle => "IDLE",
        }
    }
}

/// 활성 창을 소유한 프로세스 식별 정보
///
/// 해석 실패("unresolved")는 빈 문자열이 아닌 일급 상태다.
/// 매 틱마다 새로 생성되며 캐시하지 않는다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForegroundApp {
    /// 프로세스 이름 (해석 실패 시 None)
    pub process_name: Option<String>,
}

impl ForegroundApp {
    /// 해석 성공
    pub fn resolved(name: impl Into<String>) -> Self {
        Self {
            process_name: Some(name.into()),
        }
    }

    /// 해석 실패 (활성 창 없음, 권한 거부, 프로세스 소멸 등)
    pub fn unresolved() -> Self {
        Self { process_name: None }
    }

    /// 해석 여부
    pub fn is_resolved(&self) -> bool {
        self.process_name.is_some()
    }

    /// 표시용 이름 (미해석 시 "없음")
    pub fn display_name(&self) -> &str {
        self.process_name.as_deref().unwrap_or("없음")
    }
}

/// 틱마다 생성되는 상태 레코드
///
/// 불변식: `state == Idle` ⇔ `idle_secs > 임계값`.
/// `idle_secs`는 소수부를 포함하므로 분류와 기록이 같은 값에서 나온다 —
/// 초 단위로 잘라 기록하면 임계값 직후 1초 구간에서 불변식이 깨진다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusRecord {
    /// 측정 시각 (벽시계)
    pub timestamp: DateTime<Utc>,
    /// 유휴/활성 분류
    pub state: IdleState,
    /// 마지막 입력 이후 경과 시간 (초, 소수부 포함)
    pub idle_secs: f64,
    /// 현재 활성 앱
    pub foreground: ForegroundApp,
}

impl StatusRecord {
    /// 유휴 여부
    pub fn is_idle(&self) -> bool {
        self.state == IdleState::Idle
    }
}

/// 입력 활동 집계 (내용 제외, 횟수만 — 프라이버시)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputStats {
    /// 포인터 이동 횟수
    pub moves: u64,
    /// 클릭 횟수
    pub clicks: u64,
    /// 스크롤 횟수
    pub scrolls: u64,
    /// 키 입력 횟수
    pub key_presses: u64,
}

impl InputStats {
    /// 전체 이벤트 수
    pub fn total(&self) -> u64 {
        self.moves + self.clicks + self.scrolls + self.key_presses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_is_distinct_from_empty() {
        let unresolved = ForegroundApp::unresolved();
        let empty = ForegroundApp::resolved("");

        assert!(!unresolved.is_resolved());
        assert!(empty.is_resolved());
        assert_ne!(unresolved, empty);
    }

    #[test]
    fn display_name_fallback() {
        assert_eq!(ForegroundApp::resolved("Code").display_name(), "Code");
        assert_eq!(ForegroundApp::unresolved().display_name(), "없음");
    }

    #[test]
    fn idle_state_strings() {
        assert_eq!(IdleState::Active.as_str(), "ACTIVE");
        assert_eq!(IdleState::Idle.as_str(), "IDLE");
    }

    #[test]
    fn idle_state_serde_screaming_case() {
        let json = serde_json::to_string(&IdleState::Idle).unwrap();
        assert_eq!(json, r#""IDLE""#);
    }

    #[test]
    fn input_stats_total() {
        let stats = InputStats {
            moves: 10,
            clicks: 3,
            scrolls: 2,
            key_presses: 5,
        };
        assert_eq!(stats.total(), 20);
    }
}
