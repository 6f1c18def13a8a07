//! # HTTP Handlers
//!
//! HTTP 요청/응답 처리를 담당하는 핸들러 함수들입니다.
//! 핸들러는 얇게 유지되며, 비즈니스 로직은 서비스 계층에 위임합니다.
//! 서비스가 반환한 `AppError`는 `ResponseError` 구현을 통해
//! 자동으로 적절한 HTTP 응답으로 변환됩니다.

pub mod employees;
pub mod auth;
