//! 활동 시계.
//!
//! "마지막 입력 활동 시각" 단일 공유값. 여러 입력 프로듀서 스레드가
//! 동시에 갱신하고 폴러가 읽는, 이 시스템 유일의 공유 가변 상태다.
//!
//! 벽시계 조정의 영향을 받지 않도록 monotonic `Instant` 기반으로 동작하며,
//! 내부적으로는 생성 시점 기준 경과 밀리초를 `AtomicU64`에 저장한다.
//! 폴러는 "최댓값"만 필요하므로 `fetch_max` 한 번이면 lost update 없이 충분하다.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// 마지막 활동 시각 저장소
///
/// - `touch`는 단조 비감소: 과거 시각으로는 절대 되돌아가지 않는다.
/// - `read`는 항상 유효: 활동이 한 번도 없었으면 생성 시각을 반환한다.
#[derive(Debug)]
pub struct ActivityClock {
    /// 기준 시각 (생성 = 프로세스 시작 시점)
    base: Instant,
    /// 기준 시각 이후 경과 밀리초
    offset_ms: AtomicU64,
}

impl ActivityClock {
    /// 새 활동 시계 생성 (현재 시각으로 초기화)
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset_ms: AtomicU64::new(0),
        }
    }

    /// 활동 기록
    ///
    /// 여러 스레드에서 동시 호출해도 안전하다. `now`가 이미 기록된 값보다
    /// 과거면 no-op (동시 이벤트 간 순서는 무의미, 최댓값만 유효).
    pub fn touch(&self, now: Instant) {
        let ms = now.saturating_duration_since(self.base).as_millis() as u64;
        self.offset_ms.fetch_max(ms, Ordering::AcqRel);
    }

    /// 마지막 활동 시각 조회
    pub fn read(&self) -> Instant {
        let ms = self.offset_ms.load(Ordering::Acquire);
        self.base + Duration::from_millis(ms)
    }

    /// 기준 시각 (생성 시점) 조회
    pub fn base(&self) -> Instant {
        self.base
    }
}

impl Default for ActivityClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn read_before_any_touch_returns_base() {
        let clock = ActivityClock::new();
        assert_eq!(clock.read(), clock.base());
    }

    #[test]
    fn touch_advances_clock() {
        let clock = ActivityClock::new();
        let later = clock.base() + Duration::from_secs(10);

        clock.touch(later);
        assert_eq!(clock.read(), later);
    }

    #[test]
    fn touch_is_monotonic() {
        let clock = ActivityClock::new();
        let t1 = clock.base() + Duration::from_secs(30);
        let t2 = clock.base() + Duration::from_secs(10);

        clock.touch(t1);
        clock.touch(t2); // 과거로 되돌리기 시도 → no-op
        assert_eq!(clock.read(), t1);
    }

    #[test]
    fn increasing_touches_yield_max() {
        let clock = ActivityClock::new();
        for secs in [1u64, 5, 3, 12, 7] {
            clock.touch(clock.base() + Duration::from_secs(secs));
        }
        assert_eq!(clock.read(), clock.base() + Duration::from_secs(12));
    }

    #[test]
    fn concurrent_touches_lose_no_maximum() {
        let clock = Arc::new(ActivityClock::new());
        let base = clock.base();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let clock = clock.clone();
                std::thread::spawn(move || {
                    for j in 0..1000u64 {
                        clock.touch(base + Duration::from_millis(i * 1000 + j));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        // 최댓값: i=7, j=999 → 7999ms
        assert_eq!(clock.read(), base + Duration::from_millis(7999));
    }
}
