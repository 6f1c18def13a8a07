//! JWT 토큰 관리 서비스 구현
//!
//! JSON Web Token 기반의 인증 게이트를 제공합니다.
//! 액세스 토큰의 발급과 검증을 담당합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::config::JwtConfig;
use crate::domain::dto::TokenResponse;
use crate::domain::models::TokenClaims;
use crate::errors::AppError;

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명을 사용하여 안전한 JWT 토큰을 생성하고 검증합니다.
/// 상태를 갖지 않으며, 서명 키와 만료 시간은 [`JwtConfig`]에서 읽습니다.
#[derive(Clone, Default)]
pub struct TokenService;

impl TokenService {
    /// 새 토큰 서비스를 생성합니다.
    pub fn new() -> Self {
        Self
    }

    /// 주체(subject)에 대한 서명된 액세스 토큰을 발급합니다.
    ///
    /// 발급 시간(`iat`)과 만료 시간(`exp`) 클레임이 포함됩니다.
    /// CRUD 코어에서는 사용되지 않지만, 테스트용 토큰을 발급받으려는
    /// 호출자를 위해 제공됩니다.
    ///
    /// # Arguments
    ///
    /// * `subject` - 토큰의 주체 식별 문자열
    /// * `expires_minutes` - 만료 시간(분). `None`이면 설정 기본값 사용
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 서명 실패
    pub fn issue_token(
        &self,
        subject: &str,
        expires_minutes: Option<i64>,
    ) -> Result<TokenResponse, AppError> {
        let expires_minutes = expires_minutes.unwrap_or_else(JwtConfig::expiration_minutes);

        let now = Utc::now();
        let expiration = now + Duration::minutes(expires_minutes);

        let claims = TokenClaims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let secret = JwtConfig::secret();
        let header = Header::default();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        let access_token = encode(&header, &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))?;

        Ok(TokenResponse::bearer(access_token, expires_minutes * 60))
    }

    /// JWT 토큰을 검증하고 클레임을 추출합니다.
    ///
    /// 서명과 만료 시간을 검증합니다.
    ///
    /// # Arguments
    ///
    /// * `token` - 검증할 JWT 토큰 문자열 (Bearer 접두사 제외)
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰 만료, 잘못된 형식/서명
    /// * `AppError::InternalError` - 기타 시스템 오류
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        let secret = JwtConfig::secret();
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::default();

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                jsonwebtoken::errors::ErrorKind::InvalidToken
                | jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string())
                }
                _ => AppError::InternalError(format!("토큰 검증 실패: {}", e)),
            })
    }

    /// Bearer 토큰에서 실제 토큰 부분을 추출합니다.
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을
    /// 추출합니다. 다른 스킴은 거부됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 잘못된 헤더 형식
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        if auth_header.starts_with("Bearer ") {
            Ok(&auth_header[7..])
        } else {
            Err(AppError::AuthenticationError(
                "유효하지 않은 인증 헤더 형식입니다".to_string(),
            ))
        }
    }
}
