//! # 도메인 모듈
//!
//! 엔티티(저장 형태), DTO(요청/응답 형태), 모델(인증 컨텍스트)을 제공합니다.

pub mod dto;
pub mod entities;
pub mod models;
