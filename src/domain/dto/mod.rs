//! # 데이터 전송 객체 (DTO)
//!
//! HTTP 경계에서 사용하는 요청/응답 구조체들입니다.
//! 요청 DTO는 `validator` derive로 입력 검증을 수행하고,
//! 응답 DTO는 엔티티에서 민감/내부 필드를 제거합니다.

pub mod employees;
pub mod users;
