//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 직원 관리 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 필수 필드 누락, 음수 급여, 알 수 없는 필드 |
//! | `NotFound` | 404 Not Found | 해당 `employee_id`의 레코드 없음 |
//! | `ConflictError` | 409 Conflict | `employee_id` 중복 (유니크 인덱스 위반) |
//! | `AuthenticationError` | 401 Unauthorized | 토큰 누락/만료/서명 오류 |
//! | `DatabaseError` | 500 Internal Server Error | MongoDB 연결/쿼리 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn get_employee(&self, employee_id: &str) -> Result<Employee, AppError> {
//!     self.repo.find_by_employee_id(employee_id).await?
//!         .ok_or_else(|| AppError::NotFound("직원을 찾을 수 없습니다".to_string()))
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// `actix_web::ResponseError` 구현을 통해 자동으로 HTTP 응답으로 변환됩니다.
///
/// 5xx 계열 에러는 내부 로그에만 상세 내용을 남기고,
/// 클라이언트에게는 일반적인 메시지만 노출합니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400)
    ///
    /// 필수 필드 누락, 빈 문자열, 음수 급여, 부분 수정 시 알 수 없는 필드 등
    /// 클라이언트 입력이 잘못된 경우입니다. 저장소 호출 전에 감지됩니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404)
    ///
    /// 조회/수정/삭제 대상 `employee_id`와 일치하는 레코드가 없는 경우입니다.
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409)
    ///
    /// 비즈니스 키(`employee_id`) 중복 등 저장소의 유니크 제약 위반입니다.
    /// 사전 조회가 아닌 인덱스 위반 시점에 감지되어 변환됩니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401)
    ///
    /// Bearer 토큰 누락, 잘못된 스킴, 서명 오류, 만료, subject 클레임 없음 등입니다.
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 데이터베이스 관련 에러 (500)
    ///
    /// MongoDB 연결 타임아웃, 쿼리 실행 오류 등 저장소 계층의 오류입니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러 (500)
    ///
    /// 예상하지 못한 시스템 오류입니다.
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 `AppError` 변형을 적절한 HTTP 상태 코드와 표준 JSON 형식으로 변환합니다.
    ///
    /// ```json
    /// { "error": "Human readable error message" }
    /// ```
    ///
    /// 5xx 에러는 서버 로그에 전체 내용을 기록하고, 응답에는 내부 진단 정보를
    /// 포함하지 않습니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // 내부 진단 정보는 로그로만 남기고 클라이언트에는 일반 메시지 노출
        let body = if status == StatusCode::INTERNAL_SERVER_ERROR {
            log::error!("내부 서버 오류: {}", self);
            serde_json::json!({ "error": "internal server error" })
        } else {
            serde_json::json!({ "error": self.to_string() })
        };

        actix_web::HttpResponse::build(status).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// # 예제
///
/// ```rust,ignore
/// use crate::errors::ErrorContext;
///
/// let options = ClientOptions::parse(&uri).await
///     .context("MongoDB URI 파싱 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("name is required".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("employee not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_error_response() {
        let error = AppError::ConflictError("employee_id already exists".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::CONFLICT);
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("Invalid token".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_database_error_response() {
        let error = AppError::DatabaseError("connection refused".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
