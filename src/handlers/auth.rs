//! 인증 토큰 HTTP 핸들러
//!
//! 테스트용 액세스 토큰을 발급하는 엔드포인트입니다.
//! CRUD 코어에서는 사용되지 않지만, 보호된 엔드포인트를 호출하려는
//! 클라이언트가 토큰을 발급받을 수 있어야 합니다.

use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::domain::dto::IssueTokenRequest;
use crate::errors::AppError;
use crate::services::auth::TokenService;

/// 액세스 토큰을 발급합니다.
///
/// subject와 만료 시간(분, 선택)을 받아 서명된 JWT를 반환합니다.
#[post("/token")]
pub async fn issue_token(
    token_service: web::Data<TokenService>,
    payload: web::Json<IssueTokenRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let token = token_service.issue_token(&payload.subject, payload.expires_minutes)?;
    Ok(HttpResponse::Ok().json(token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::json;

    use crate::domain::dto::TokenResponse;

    #[actix_web::test]
    async fn test_issue_token_returns_bearer_token() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(TokenService::new()))
                .service(web::scope("/auth").service(issue_token)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/auth/token")
            .set_json(json!({ "subject": "admin" }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);

        let body: TokenResponse = test::read_body_json(res).await;
        assert_eq!(body.token_type, "bearer");
        assert!(!body.access_token.is_empty());
    }

    #[actix_web::test]
    async fn test_issue_token_rejects_empty_subject() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(TokenService::new()))
                .service(web::scope("/auth").service(issue_token)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/auth/token")
            .set_json(json!({ "subject": "" }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
