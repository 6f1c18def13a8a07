//! 직원 관리 서비스 백엔드
//!
//! Rust 기반의 직원 레코드 관리 REST API 서비스입니다.
//! JWT 토큰 기반 인증과 MongoDB 영구 저장, 그리고 생성 시점에
//! 명시적으로 주입되는 의존성 구성을 제공합니다.
//!
//! # Features
//!
//! - **직원 관리**: 생성, 조회, 목록(부서 필터/개수 제한), 부분 수정, 삭제
//! - **JWT 인증**: Bearer 토큰 기반 상태 없는 인증
//! - **입력 검증**: 필수 문자열, 음수 급여 거부, 날짜/기술 목록 정규화
//! - **유일성 보장**: 저장소 유니크 인덱스를 통한 `employee_id` 중복 차단
//! - **MongoDB**: 직원 데이터 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + 인증 미들웨어
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use employee_service_backend::db::Database;
//! use employee_service_backend::repositories::employees::EmployeeRepository;
//! use employee_service_backend::services::employees::EmployeeService;
//!
//! // 의존성을 명시적으로 조립
//! let database = Database::new().await?;
//! let repository = EmployeeRepository::new(&database);
//! let service = EmployeeService::new(repository);
//!
//! // 직원 생성
//! let employee = service.create_employee(request).await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
