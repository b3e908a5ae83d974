//! # Middlewares Module
//!
//! 요청 파이프라인에 끼워지는 미들웨어 모음입니다.

pub mod auth_inner;
pub mod auth_middleware;

pub use auth_middleware::AuthMiddleware;
