//! 애플리케이션 설정 구조체.
//!
//! 유휴 임계값, 폴링 주기, 로그 레벨 등 런타임 설정을 정의한다.
//! `config_manager`를 통해 플랫폼별 설정 디렉토리에서 로드.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 최상위 애플리케이션 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// 모니터링 설정
    #[serde(default)]
    pub monitor: MonitorConfig,
    /// 로그 설정
    #[serde(default)]
    pub log: LogConfig,
}

/// 모니터링 설정 — 유휴 판정과 폴링 주기
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// 유휴 감지 임계값 (초) — 이 시간을 **초과**해야 IDLE로 분류
    #[serde(default = "default_idle_threshold_secs")]
    pub idle_threshold_secs: u64,
    /// 상태 폴링 간격 (초)
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
}

/// 로그 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// 로그 레벨 (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_idle_threshold_secs() -> u64 {
    120 // 2분
}

fn default_poll_interval_secs() -> u64 {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            idle_threshold_secs: default_idle_threshold_secs(),
            poll_interval_secs: default_poll_interval_secs(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// 기본 설정 생성
    pub fn default_config() -> Self {
        Self {
            monitor: MonitorConfig::default(),
            log: LogConfig::default(),
        }
    }

    /// 유휴 임계값을 Duration으로 반환
    pub fn idle_threshold(&self) -> Duration {
        Duration::from_secs(self.monitor.idle_threshold_secs)
    }

    /// 폴링 간격을 Duration으로 반환
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.monitor.poll_interval_secs)
    }

    /// 설정값 유효성 검증
    ///
    /// 폴링 간격 0초는 바쁜 루프가 되므로 거부한다.
    pub fn validate(&self) -> Result<(), crate::error::CoreError> {
        if self.monitor.poll_interval_secs == 0 {
            return Err(crate::error::CoreError::Config(
                "poll_interval_secs는 1 이상이어야 합니다".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = AppConfig::default_config();
        assert_eq!(config.monitor.idle_threshold_secs, 120);
        assert_eq!(config.monitor.poll_interval_secs, 5);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn duration_conversions() {
        let config = AppConfig::default_config();
        assert_eq!(config.idle_threshold(), Duration::from_secs(120));
        assert_eq!(config.poll_interval(), Duration::from_secs(5));
    }

    #[test]
    fn missing_fields_use_defaults() {
        // 부분 설정 파일도 로드 가능해야 함
        let config: AppConfig = serde_json::from_str(r#"{"monitor":{"idle_threshold_secs":60}}"#).unwrap();
        assert_eq!(config.monitor.idle_threshold_secs, 60);
        assert_eq!(config.monitor.poll_interval_secs, 5);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn zero_poll_interval_rejected() {
        let mut config = AppConfig::default_config();
        config.monitor.poll_interval_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn serde_roundtrip() {
        let config = AppConfig::default_config();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(
            config.monitor.idle_threshold_secs,
            deserialized.monitor.idle_threshold_secs
        );
    }
}
