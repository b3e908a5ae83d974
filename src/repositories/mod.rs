//! # 리포지토리 계층
//!
//! 문서 저장소에 대한 데이터 액세스를 담당합니다.
//! 모든 리포지토리는 `Arc<Database>`를 생성자로 주입받으며,
//! 캐싱 없이 매 호출이 저장소 왕복입니다.

pub mod employees;
pub mod users;
