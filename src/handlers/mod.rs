//! # Handlers Module
//!
//! HTTP 엔드포인트 핸들러 함수들입니다. 요청을 DTO로 받고 서비스에
//! 위임한 뒤 응답을 직렬화하는 얇은 계층으로, 비즈니스 로직을
//! 포함하지 않습니다.

pub mod auth;
pub mod employees;
pub mod users;
