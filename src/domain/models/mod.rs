//! 내부 모델 모듈

pub mod auth;
pub mod token;

pub use auth::*;
pub use token::*;
