//! JARI 도메인 모델.
//!
//! 모니터링 루프와 표현 계층이 공유하는 데이터 구조체를 정의한다.
//! 모든 모델은 `serde` Serialize/Deserialize를 구현한다.

pub mod status;
