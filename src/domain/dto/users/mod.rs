//! 사용자 요청/응답 DTO 모듈

pub mod request;
pub mod response;

pub use request::{LoginRequest, SignupRequest, UpdateProfileRequest};
pub use response::{LoginResponse, SignupResponse, UserResponse};
