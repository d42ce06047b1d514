//! 활성 앱 조회 포트.
//!
//! 구현: `jari-monitor` crate (플랫폼별 OS API)

use async_trait::async_trait;

use crate::models::status::ForegroundApp;

/// 활성 창 소유 프로세스 조회
///
/// best-effort 계약: 어떤 조건에서도 값을 반환하고, 절대 실패하지 않는다.
/// 활성 창 없음, 권한 거부, 조회 도중 프로세스 소멸 등 모든 내부 실패는
/// `ForegroundApp::unresolved()`로 수렴한다.
#[async_trait]
pub trait ForegroundResolver: Send + Sync {
    /// 현재 활성 앱 조회
    async fn resolve(&self) -> ForegroundApp;
}
