//! 전역 입력 이벤트 브리지.
//!
//! `rdev` 전역 훅으로 마우스/키보드 이벤트를 받아 활동 시계를 갱신한다.
//! 입력 내용은 수집하지 않음 — 종류별 횟수만 집계 (프라이버시).
//!
//! ## 종료 계약
//!
//! `stop()`이 반환된 뒤에는 이 브리지가 시계를 갱신하지 않는다.
//! rdev는 훅 해제를 지원하지 않으므로 리스너 스레드는 detach 상태로 남고
//! OS 훅은 프로세스 종료 시 해제되지만, 정지 플래그 + in-flight 카운터가
//! `stop()` 반환 이후의 시계 침묵을 보장한다 (유한 대기, 무한 블록 아님).

use jari_core::models::status::InputStats;
use rdev::EventType;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::clock::ActivityClock;

/// `stop()`이 in-flight 전달 완료를 기다리는 최대 시간
const STOP_DRAIN_TIMEOUT: Duration = Duration::from_millis(500);

/// 활동 이벤트 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    /// 포인터 이동
    PointerMove,
    /// 포인터 버튼 클릭
    PointerButton,
    /// 스크롤
    Scroll,
    /// 키 입력
    KeyPress,
}

/// 전역 입력 브리지
///
/// 입력 프로듀서(rdev 리스너 스레드)와 `ActivityClock` 사이의 유일한 통로.
pub struct InputBridge {
    clock: Arc<ActivityClock>,
    /// 리스너 시작 여부 (프로세스당 한 세션)
    started: AtomicBool,
    /// 정지 플래그 — true면 이후 이벤트는 버려진다
    stopped: AtomicBool,
    /// 진행 중인 전달 수 (stop 드레인용)
    in_flight: AtomicU64,

    // 종류별 이벤트 카운터
    moves: AtomicU64,
    clicks: AtomicU64,
    scrolls: AtomicU64,
    key_presses: AtomicU64,
}

impl InputBridge {
    /// 새 입력 브리지 생성
    pub fn new(clock: Arc<ActivityClock>) -> Self {
        Self {
            clock,
            started: AtomicBool::new(false),
            stopped: AtomicBool::new(false),
            in_flight: AtomicU64::new(0),
            moves: AtomicU64::new(0),
            clicks: AtomicU64::new(0),
            scrolls: AtomicU64::new(0),
            key_presses: AtomicU64::new(0),
        }
    }

    /// 전역 입력 리스너 시작
    ///
    /// 훅 등록 실패(입력 모니터링 권한 없음 등)는 경고 후 계속 동작한다 —
    /// 활성 앱 폴링만으로 동작하는 성능 저하 모드이지 치명적 오류가 아니다.
    pub fn start(self: &Arc<Self>) {
        if self.started.swap(true, Ordering::SeqCst) {
            warn!("입력 브리지는 이미 시작됨");
            return;
        }

        let bridge = Arc::clone(self);
        let spawn_result = std::thread::Builder::new()
            .name("jari-input-hook".to_string())
            .spawn(move || {
                let handler = move |event: rdev::Event| {
                    let kind = match event.event_type {
                        EventType::MouseMove { .. } => ActivityKind::PointerMove,
                        EventType::ButtonPress(_) => ActivityKind::PointerButton,
                        EventType::Wheel { .. } => ActivityKind::Scroll,
                        EventType::KeyPress(_) => ActivityKind::KeyPress,
                        // 릴리즈 이벤트는 프레스에서 이미 집계됨
                        _ => return,
                    };
                    bridge.notify(kind);
                };

                if let Err(e) = rdev::listen(handler) {
                    warn!(
                        "전역 입력 훅 등록 실패: {:?} — 입력 기반 유휴 감지 없이 계속합니다",
                        e
                    );
                }
            });

        match spawn_result {
            Ok(_) => info!("전역 입력 리스너 시작"),
            Err(e) => warn!("입력 리스너 스레드 생성 실패: {e}"),
        }
    }

    /// 활동 이벤트 전달
    ///
    /// 프로듀서 스레드에서 호출된다. `stop()` 반환 이후의 호출은
    /// 시계를 변경하지 않는다.
    pub fn notify(&self, kind: ActivityKind) {
        // in-flight 등록을 stopped 검사보다 먼저 해야
        // stop()의 드레인 대기가 이 전달의 완료를 관찰한다
        self.in_flight.fetch_add(1, Ordering::SeqCst);

        if !self.stopped.load(Ordering::SeqCst) {
            self.clock.touch(Instant::now());
            match kind {
                ActivityKind::PointerMove => self.moves.fetch_add(1, Ordering::Relaxed),
                ActivityKind::PointerButton => self.clicks.fetch_add(1, Ordering::Relaxed),
                ActivityKind::Scroll => self.scrolls.fetch_add(1, Ordering::Relaxed),
                ActivityKind::KeyPress => self.key_presses.fetch_add(1, Ordering::Relaxed),
            };
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }

    /// 이벤트 전달 중단
    ///
    /// 반환 시점 이후 이 브리지에서 비롯된 `ActivityClock` 갱신은 없다.
    /// 진행 중인 전달은 유한 시간만 기다린다.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);

        let deadline = Instant::now() + STOP_DRAIN_TIMEOUT;
        while self.in_flight.load(Ordering::SeqCst) > 0 {
            if Instant::now() >= deadline {
                warn!("입력 전달 드레인 타임아웃 — 정지 플래그는 이미 적용됨");
                break;
            }
            std::thread::sleep(Duration::from_millis(1));
        }

        let stats = self.snapshot();
        debug!(
            "입력 브리지 정지: 이동={}, 클릭={}, 스크롤={}, 키={}",
            stats.moves, stats.clicks, stats.scrolls, stats.key_presses
        );
    }

    /// 정지 여부
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }

    /// 현재까지의 입력 집계 스냅샷
    pub fn snapshot(&self) -> InputStats {
        InputStats {
            moves: self.moves.load(Ordering::Relaxed),
            clicks: self.clicks.load(Ordering::Relaxed),
            scrolls: self.scrolls.load(Ordering::Relaxed),
            key_presses: self.key_presses.load(Ordering::Relaxed),
        }
    }
}
