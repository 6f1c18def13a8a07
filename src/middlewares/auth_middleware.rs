//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 Bearer 토큰을 검증하고 호출자 신원을
//! 추출합니다. 검증에 실패하면 요청은 핸들러에 도달하기 전에 401로
//! 거부됩니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::middlewares::auth_inner::AuthMiddlewareService;
use crate::services::auth::TokenService;

/// JWT 인증 미들웨어
///
/// 토큰 검증 서비스를 명시적으로 주입받습니다.
pub struct AuthMiddleware {
    /// 토큰 검증에 사용할 서비스
    token_service: TokenService,
}

impl AuthMiddleware {
    /// 토큰 서비스를 주입받아 인증 미들웨어를 생성합니다.
    pub fn new(token_service: TokenService) -> Self {
        Self { token_service }
    }

    /// 필수 인증 미들웨어를 생성합니다.
    pub fn required() -> Self {
        Self::new(TokenService::new())
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            token_service: self.token_service.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App, HttpResponse};

    macro_rules! protected_app {
        () => {
            test::init_service(
                App::new().service(
                    web::scope("/protected")
                        .wrap(AuthMiddleware::required())
                        .route("", web::get().to(|| async { HttpResponse::Ok().finish() })),
                ),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_missing_authorization_header_rejected() {
        let app = protected_app!();

        let req = test::TestRequest::get().uri("/protected").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_malformed_scheme_rejected() {
        let app = protected_app!();

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header(("Authorization", "Basic abc"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_expired_token_rejected() {
        let app = protected_app!();

        let expired = TokenService::new().issue_token("tester", Some(-5)).unwrap();
        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header((
                "Authorization",
                format!("Bearer {}", expired.access_token),
            ))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_valid_token_passes_through() {
        let app = protected_app!();

        let issued = TokenService::new().issue_token("tester", Some(60)).unwrap();
        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header((
                "Authorization",
                format!("Bearer {}", issued.access_token),
            ))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
    }
}
