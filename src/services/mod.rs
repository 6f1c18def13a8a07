//! 비즈니스 로직 계층 모듈

pub mod employees;
pub mod auth;

pub use employees::*;
pub use auth::*;
