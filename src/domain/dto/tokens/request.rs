//! 토큰 발급 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 액세스 토큰 발급 요청
///
/// 테스트용 토큰을 발급받으려는 호출자가 사용합니다.
/// 만료 시간을 지정하지 않으면 설정 기본값이 적용됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct IssueTokenRequest {
    /// 토큰의 주체 (subject 클레임)
    #[validate(length(min = 1, message = "subject는 비어 있을 수 없습니다"))]
    pub subject: String,

    /// 만료 시간 (분, 생략 시 설정 기본값)
    pub expires_minutes: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_subject_rejected() {
        let request = IssueTokenRequest {
            subject: "".to_string(),
            expires_minutes: None,
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_expires_minutes_optional() {
        let request: IssueTokenRequest =
            serde_json::from_value(serde_json::json!({ "subject": "admin" })).unwrap();

        assert!(request.expires_minutes.is_none());
        assert!(request.validate().is_ok());
    }
}
