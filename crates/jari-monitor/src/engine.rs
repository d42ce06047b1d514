//! 유휴 판정 엔진.
//!
//! 틱마다 활동 시계와 활성 앱을 읽어 ACTIVE/IDLE을 분류한다.
//! 상태를 저장하지 않는 순수 분류기 — 매 틱 경과 시간에서 다시 계산한다.
//! 주기는 호출자(스케줄러)가 공급하며 엔진은 주기에 무관하다.

use chrono::Utc;
use jari_core::models::status::{IdleState, StatusRecord};
use jari_core::ports::monitor::ForegroundResolver;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::clock::ActivityClock;

/// 유휴 상태 엔진
pub struct IdleStatusEngine {
    clock: Arc<ActivityClock>,
    resolver: Arc<dyn ForegroundResolver>,
    /// 유휴 임계값 — 경과 시간이 이 값을 **초과**해야 IDLE
    threshold: Duration,
}

impl IdleStatusEngine {
    /// 새 엔진 생성
    pub fn new(
        clock: Arc<ActivityClock>,
        resolver: Arc<dyn ForegroundResolver>,
        threshold_secs: u64,
    ) -> Self {
        Self {
            clock,
            resolver,
            threshold: Duration::from_secs(threshold_secs),
        }
    }

    /// 임계값 조회 (초)
    pub fn threshold_secs(&self) -> u64 {
        self.threshold.as_secs()
    }

    /// 상태 틱 실행
    ///
    /// 1. 경과 시간 = `now` - 마지막 활동 시각
    /// 2. 경과 시간 > 임계값 → IDLE (정확히 같으면 ACTIVE)
    /// 3. 활성 앱 조회 (실패는 unresolved로 수렴, 루프를 멈추지 않음)
    ///
    /// 분류와 기록 모두 전정밀도 경과 시간에서 나온다.
    /// 기록만 초 단위로 자르면 임계값 직후 1초 구간에서
    /// "IDLE인데 기록된 경과는 임계값"인 모순 레코드가 생긴다.
    pub async fn tick(&self, now: Instant) -> StatusRecord {
        let elapsed = now.saturating_duration_since(self.clock.read());
        let state = if elapsed > self.threshold {
            IdleState::Idle
        } else {
            IdleState::Active
        };

        let foreground = self.resolver.resolve().await;

        StatusRecord {
            timestamp: Utc::now(),
            state,
            idle_secs: elapsed.as_secs_f64(),
            foreground,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use jari_core::models::status::ForegroundApp;

    struct FixedResolver(Option<String>);

    #[async_trait]
    impl ForegroundResolver for FixedResolver {
        async fn resolve(&self) -> ForegroundApp {
            match &self.0 {
                Some(name) => ForegroundApp::resolved(name.clone()),
                None => ForegroundApp::unresolved(),
            }
        }
    }

    fn engine_with(clock: Arc<ActivityClock>, threshold_secs: u64) -> IdleStatusEngine {
        IdleStatusEngine::new(
            clock,
            Arc::new(FixedResolver(Some("Code".to_string()))),
            threshold_secs,
        )
    }

    #[tokio::test]
    async fn elapsed_exactly_threshold_is_active() {
        let clock = Arc::new(ActivityClock::new());
        let engine = engine_with(clock.clone(), 120);

        let now = clock.base() + Duration::from_secs(120);
        let record = engine.tick(now).await;

        assert_eq!(record.state, IdleState::Active);
        assert_eq!(record.idle_secs, 120.0);
    }

    #[tokio::test]
    async fn elapsed_just_over_threshold_is_idle() {
        let clock = Arc::new(ActivityClock::new());
        let engine = engine_with(clock.clone(), 120);

        let now = clock.base() + Duration::from_secs(120) + Duration::from_millis(1);
        let record = engine.tick(now).await;

        assert_eq!(record.state, IdleState::Idle);
    }

    #[tokio::test]
    async fn fractional_elapsed_keeps_state_and_duration_consistent() {
        // 임계값 직후 1초 구간 (120, 121): IDLE이면 기록된 경과도 임계값 초과
        let clock = Arc::new(ActivityClock::new());
        let engine = engine_with(clock.clone(), 120);

        let record = engine.tick(clock.base() + Duration::from_millis(120_500)).await;

        assert!(record.is_idle());
        assert!(record.idle_secs > 120.0);
        assert!((record.idle_secs - 120.5).abs() < 1e-9);
    }

    #[tokio::test]
    async fn no_activity_for_125s_reports_idle() {
        // 시나리오: 임계값 120초, 125초 동안 입력 없음
        let clock = Arc::new(ActivityClock::new());
        let engine = engine_with(clock.clone(), 120);

        let record = engine.tick(clock.base() + Duration::from_secs(125)).await;

        assert!(record.is_idle());
        assert_eq!(record.idle_secs, 125.0);
    }

    #[tokio::test]
    async fn activity_resets_idle_duration() {
        // 시나리오: t=100에 입력, t=110에 틱 → ACTIVE, 경과 10초
        let clock = Arc::new(ActivityClock::new());
        let engine = engine_with(clock.clone(), 120);

        clock.touch(clock.base() + Duration::from_secs(100));
        let record = engine.tick(clock.base() + Duration::from_secs(110)).await;

        assert_eq!(record.state, IdleState::Active);
        assert_eq!(record.idle_secs, 10.0);
    }

    #[tokio::test]
    async fn tick_is_idempotent_for_same_now() {
        let clock = Arc::new(ActivityClock::new());
        let engine = engine_with(clock.clone(), 120);
        let now = clock.base() + Duration::from_secs(50);

        let first = engine.tick(now).await;
        let second = engine.tick(now).await;

        assert_eq!(first.state, second.state);
        assert_eq!(first.idle_secs, second.idle_secs);
    }

    #[tokio::test]
    async fn unresolved_foreground_does_not_halt_tick() {
        let clock = Arc::new(ActivityClock::new());
        let engine = IdleStatusEngine::new(
            clock.clone(),
            Arc::new(FixedResolver(None)),
            120,
        );

        let record = engine.tick(clock.base() + Duration::from_secs(1)).await;

        assert!(!record.foreground.is_resolved());
        assert_eq!(record.state, IdleState::Active);
    }

    #[tokio::test]
    async fn clock_time_before_now_saturates_to_zero() {
        // touch가 now보다 미래인 경계 상황에서도 패닉 없이 0으로 수렴
        let clock = Arc::new(ActivityClock::new());
        let engine = engine_with(clock.clone(), 120);

        clock.touch(clock.base() + Duration::from_secs(100));
        let record = engine.tick(clock.base() + Duration::from_secs(50)).await;

        assert_eq!(record.idle_secs, 0.0);
        assert_eq!(record.state, IdleState::Active);
    }
}
