//! 상태 출력 포트.
//!
//! 틱마다 생성된 `StatusRecord`를 표현 계층(콘솔, 파일 등)에 전달한다.
//! 코어는 레코드를 보관하지 않는다.

use async_trait::async_trait;

use crate::error::CoreError;
use crate::models::status::StatusRecord;

/// 상태 레코드 수신자
#[async_trait]
pub trait StatusSink: Send + Sync {
    /// 상태 레코드 한 건 출력
    async fn emit(&self, record: &StatusRecord) -> Result<(), CoreError>;
}
