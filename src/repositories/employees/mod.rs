//! 직원 리포지토리 모듈

pub mod employee_repo;

pub use employee_repo::*;
