//! # 도메인 모델
//!
//! 저장소에 영속되지 않는 인증 관련 모델들입니다.

pub mod auth;
pub mod token;
