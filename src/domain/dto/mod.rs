//! 요청/응답 DTO 모듈
//!
//! HTTP 경계에서 사용되는 데이터 전송 객체들을 정의합니다.
//! `serde` 역직렬화와 `validator` 파생 매크로를 통해
//! 입력 검증이 저장소 호출 이전에 수행됩니다.

pub mod employees;
pub mod tokens;

pub use employees::*;
pub use tokens::*;
