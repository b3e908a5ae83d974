//! # 도메인 엔티티
//!
//! 문서 저장소에 보관되는 형태 그대로의 핵심 엔티티들입니다.

pub mod employees;
pub mod users;
