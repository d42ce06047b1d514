//! JARI 핵심 에러 타입.
//!
//! 어댑터 crate는 복구 불가능한 상황만 `CoreError`로 올린다.
//! 일시적인 OS 조회 실패(활성 창 없음 등)는 에러가 아니라
//! `ForegroundApp::unresolved()` 같은 일급 값으로 표현한다.

use thiserror::Error;

/// 코어 레이어 에러.
/// 설정, 직렬화 등 도메인 공통 에러를 정의한다.
#[derive(Debug, Error)]
pub enum CoreError {
    /// JSON 직렬화/역직렬화 실패
    #[error("직렬화 에러: {0}")]
    Serialization(#[from] serde_json::Error),

    /// 설정값 오류
    #[error("설정 에러: {0}")]
    Config(String),

    /// I/O 에러
    #[error("I/O 에러: {0}")]
    Io(#[from] std::io::Error),

    /// 내부 에러 (예상치 못한 상황)
    #[error("내부 에러: {0}")]
    Internal(String),
}
