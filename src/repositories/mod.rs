//! 데이터 액세스 계층 모듈

pub mod employees;

pub use employees::*;
