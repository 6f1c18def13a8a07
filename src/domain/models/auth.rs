//! 인증된 호출자 모델

use serde::{Deserialize, Serialize};

/// 인증에 성공한 호출자의 신원
///
/// 인증 미들웨어가 토큰 검증에 성공하면 이 구조체를
/// Request Extensions에 저장하여 핸들러에서 접근할 수 있게 합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 토큰의 subject 클레임에서 추출한 신원 문자열
    pub subject: String,
}
