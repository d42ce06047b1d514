//! 상태 폴링 스케줄러.
//!
//! 고정 주기(기본 5초)로 유휴 엔진 틱을 돌리고 레코드를 출력 포트에 전달한다.
//! 종료 신호를 관찰하면 즉시 루프를 빠져나간다 — 신호 이후에는
//! 레코드가 더 이상 방출되지 않는다 (진행 중이던 틱 최대 1회만 완료).

use jari_core::models::status::IdleState;
use jari_core::ports::sink::StatusSink;
use jari_monitor::engine::IdleStatusEngine;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// 스케줄러 설정
pub struct SchedulerConfig {
    /// 상태 폴링 간격
    pub poll_interval: Duration,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(5),
        }
    }
}

/// 상태 폴링 스케줄러
pub struct StatusScheduler {
    config: SchedulerConfig,
    engine: Arc<IdleStatusEngine>,
    sink: Arc<dyn StatusSink>,
}

impl StatusScheduler {
    /// 새 스케줄러 생성
    pub fn new(
        config: SchedulerConfig,
        engine: Arc<IdleStatusEngine>,
        sink: Arc<dyn StatusSink>,
    ) -> Self {
        Self {
            config,
            engine,
            sink,
        }
    }

    /// 폴링 루프 시작
    pub async fn run(&self, mut shutdown_rx: tokio::sync::watch::Receiver<bool>) {
        info!(
            "스케줄러 시작: 폴링={}ms, 유휴 임계값={}초",
            self.config.poll_interval.as_millis(),
            self.engine.threshold_secs(),
        );

        let mut interval = tokio::time::interval(self.config.poll_interval);
        let mut prev_state = IdleState::Active;
        let mut prev_app: Option<String> = None;

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    let record = self.engine.tick(Instant::now()).await;

                    // 유휴 상태 전환 로깅
                    if record.state != prev_state {
                        info!(
                            "유휴 상태 전환: {} → {} ({:.1}초)",
                            prev_state.as_str(),
                            record.state.as_str(),
                            record.idle_secs
                        );
                    }

                    // 앱 전환 로깅
                    if record.foreground.process_name != prev_app {
                        debug!(
                            "앱 전환: {} → {}",
                            prev_app.as_deref().unwrap_or("없음"),
                            record.foreground.display_name()
                        );
                    }

                    prev_state = record.state;
                    prev_app = record.foreground.process_name.clone();

                    if let Err(e) = self.sink.emit(&record).await {
                        // 한 틱의 출력 실패가 다음 틱을 막지 않는다
                        warn!("상태 출력 실패: {e}");
                    }
                }
                _ = shutdown_rx.changed() => {
                    info!("모니터링 루프 종료");
                    break;
                }
            }
        }
    }
}
