//! 콘솔 리포터.
//!
//! `StatusSink` 포트 구현 — 틱마다 사람이 읽을 수 있는 상태 줄 한 개 출력.

use async_trait::async_trait;
use jari_core::error::CoreError;
use jari_core::models::status::StatusRecord;
use jari_core::ports::sink::StatusSink;

/// 콘솔 상태 리포터
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// 새 리포터 생성
    pub fn new() -> Self {
        Self
    }

    /// 상태 줄 포맷
    fn format_line(record: &StatusRecord) -> String {
        format!(
            "상태: {:<6} | 유휴 {:>6.1}초 | 활성 앱: {}",
            record.state.as_str(),
            record.idle_secs,
            record.foreground.display_name()
        )
    }
}

#[async_trait]
impl StatusSink for ConsoleReporter {
    async fn emit(&self, record: &StatusRecord) -> Result<(), CoreError> {
        println!("{}", Self::format_line(record));
        Ok(())
    }
}
