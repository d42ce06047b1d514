//! # jari-core
//!
//! JARI 도메인 모델, 포트(trait) 정의, 에러 타입.
//! 모든 크레이트가 공유하는 핵심 타입과 인터페이스를 제공한다.
//!
//! ## 구조
//!
//! - [`models`] — 도메인 데이터 구조체 (serde Serialize/Deserialize)
//! - [`ports`] — Hexagonal Architecture 포트 인터페이스 (async_trait)
//! - [`error`] — 핵심 에러 타입 (thiserror)
//! - [`config`] — 애플리케이션 설정 구조체
//! - [`config_manager`] — 설정 파일 관리 (로드/저장)

pub mod config;
pub mod config_manager;
pub mod error;
pub mod models;
pub mod ports;

#[cfg(test)]
mod tests {
    use crate::models::status::{ForegroundApp, IdleState, StatusRecord};

    #[test]
    fn status_record_serde_roundtrip() {
        let record = StatusRecord {
            timestamp: chrono::Utc::now(),
            state: IdleState::Active,
            idle_secs: 42.5,
            foreground: ForegroundApp::resolved("Code"),
        };

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: StatusRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.state, IdleState::Active);
        assert_eq!(deserialized.idle_secs, 42.5);
        assert_eq!(deserialized.foreground.process_name.as_deref(), Some("Code"));
    }

    #[test]
    fn config_defaults() {
        let config = crate::config::AppConfig::default_config();
        assert_eq!(config.monitor.idle_threshold_secs, 120);
        assert_eq!(config.monitor.poll_interval_secs, 5);
    }
}
