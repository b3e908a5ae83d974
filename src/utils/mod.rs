//! # 유틸리티 모듈
//!
//! 여러 계층에서 공유되는 보조 함수들을 제공합니다.
//!
//! - [`string_utils`] - 이름 정규화, 스킬 정리, 정규식 이스케이프
//! - [`patch`] - 부분 업데이트용 serde 헬퍼

pub mod patch;
pub mod string_utils;
