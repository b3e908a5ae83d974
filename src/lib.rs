//! 직원 관리 서비스 백엔드
//!
//! Rust 기반의 직원 레코드 관리 및 사용자 인증 서비스입니다.
//! 검증된 직원 CRUD, 다중 필드 검색, 부서별 급여 집계와
//! JWT 토큰 기반의 상태 없는 인증을 제공합니다.
//!
//! # Features
//!
//! - **직원 관리**: 생성, 조회, 머지 패치 수정, 삭제
//! - **목록/검색**: 부서 필터, 대소문자 무시 다중 필드 검색, 페이지네이션
//! - **집계**: 부서별 평균 급여
//! - **사용자 인증**: 회원가입(bcrypt), 로그인, bearer 토큰 발급
//! - **접근 제어**: JWT 검증 미들웨어 (라우트별 적용)
//! - **MongoDB**: 직원/사용자 데이터 영구 저장 (캐싱 없음)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + 인증 미들웨어
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직 (검증, 정규화, 정책)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! 모든 의존성은 [`core::AppState`]에서 생성자 주입으로 조립되며,
//! 전역 상태나 런타임 레지스트리는 사용하지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use employee_service_backend::core::AppState;
//! use employee_service_backend::db::Database;
//!
//! let db = Arc::new(Database::new().await?);
//! let state = AppState::new(db);
//!
//! let response = state.employee_service.create_employee(request).await?;
//! ```

pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
