//! 토큰 요청/응답 DTO 모듈

mod request;
mod response;

pub use request::*;
pub use response::*;
