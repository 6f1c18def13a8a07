//! # Domain Module
//!
//! 직원 관리 서비스의 도메인 계층입니다.
//! 저장소에 영속되는 엔티티, HTTP 경계의 요청/응답 DTO,
//! 인증 관련 내부 모델을 포함합니다.
//!
//! ## 모듈 구성
//!
//! - [`entities`] - MongoDB 문서로 영속되는 도메인 엔티티
//! - [`dto`] - 요청 검증 및 응답 직렬화를 담당하는 DTO
//! - [`models`] - 토큰 클레임 등 내부 모델
//!
//! ## 계층 간 변환
//!
//! ```text
//! CreateEmployeeRequest ──(검증/정규화)──▶ Employee ──(저장)──▶ MongoDB
//! MongoDB ──(조회)──▶ Employee ──(직렬화)──▶ EmployeeResponse
//! ```
//!
//! 외부 표현의 `joining_date`는 `YYYY-MM-DD` 문자열이고,
//! 내부 표현은 UTC 자정 시각의 인스턴트입니다. 변환은 [`crate::utils::date_utils`]가
//! 담당하며, 시간 성분이 없는 모든 달력 날짜에 대해 왕복 변환이 항등이 되도록
//! 보장합니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;
