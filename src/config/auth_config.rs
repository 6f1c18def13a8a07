//! # Authentication Configuration Module
//!
//! JWT 토큰 관련 설정을 관리하는 모듈입니다.
//! 토큰 서명 비밀키와 만료 시간을 환경 변수에서 읽습니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export ACCESS_TOKEN_EXPIRE_MINUTES="60"
//! ```

use std::env;

/// JWT 토큰 설정
///
/// HMAC-SHA256 서명에 사용되는 비밀키와 액세스 토큰 만료 시간을 제공합니다.
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// 이 키는 JWT 토큰의 무결성을 보장하는 핵심 요소입니다.
    /// 강력한 암호화 키를 사용해야 하며, 절대 노출되어서는 안 됩니다.
    ///
    /// # 기본값
    ///
    /// 환경 변수가 설정되지 않은 경우 "your-secret-key"를 사용하지만,
    /// 이는 개발 환경에서만 안전하며 프로덕션에서는 경고 로그가 출력됩니다.
    ///
    /// # 키 생성 예제
    ///
    /// ```bash
    /// openssl rand -base64 32
    /// ```
    pub fn secret() -> String {
        env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            "your-secret-key".to_string()
        })
    }

    /// 액세스 토큰의 만료 시간을 분 단위로 반환합니다.
    ///
    /// # 기본값
    ///
    /// 60분
    ///
    /// # Environment Variables
    ///
    /// - `ACCESS_TOKEN_EXPIRE_MINUTES`: 만료 시간 (분)
    pub fn expiration_minutes() -> i64 {
        env::var("ACCESS_TOKEN_EXPIRE_MINUTES")
            .unwrap_or_else(|_| "60".to_string())
            .parse()
            .unwrap_or(60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_defaults() {
        if env::var("JWT_SECRET").is_err() {
            assert_eq!(JwtConfig::secret(), "your-secret-key");
        }

        if env::var("ACCESS_TOKEN_EXPIRE_MINUTES").is_err() {
            assert_eq!(JwtConfig::expiration_minutes(), 60);
        }
    }
}
