//! # Services Module
//!
//! 비즈니스 로직 계층입니다. 핸들러와 리포지토리 사이에서 검증,
//! 정규화, 정책 결정을 수행합니다.

pub mod auth;
pub mod employees;
pub mod users;
