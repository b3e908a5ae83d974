//! 사용자 요청 DTO
//!
//! 회원가입, 로그인, 프로필 수정 요청의 역직렬화와 입력 검증을 정의합니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 회원가입 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    /// 사용자명 (3-30자, 영문/숫자/언더스코어만 허용)
    #[validate(length(min = 3, max = 30, message = "사용자명은 3-30자 사이여야 합니다"))]
    #[validate(custom(function = "validate_username"))]
    pub username: String,

    /// 사용자 이메일 주소
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 계정 비밀번호 (최소 8자)
    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    pub password: String,
}

/// 로그인 요청 DTO
///
/// `username` 필드는 활성화된 정책에 따라 사용자명 또는 이메일로
/// 해석됩니다 ([`crate::config::SignupUniqueness`] 참고).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// 로그인 식별자 (사용자명 또는 이메일)
    #[validate(length(min = 1, message = "사용자명은 필수입니다"))]
    pub username: String,

    /// 비밀번호
    #[validate(length(min = 1, message = "비밀번호는 필수입니다"))]
    pub password: String,
}

/// 프로필 수정 요청 DTO
///
/// 프로필에서 수정 가능한 필드는 이메일뿐입니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,
}

/// 사용자명 형식 검증 (영문, 숫자, 언더스코어만 허용)
fn validate_username(username: &str) -> Result<(), ValidationError> {
    if !username.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Err(ValidationError::new("invalid_username")
            .with_message("사용자명은 알파벳, 숫자, 언더스코어만 사용 가능합니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_signup_request() {
        let request = SignupRequest {
            username: "ann_lee".to_string(),
            email: "ann@example.com".to_string(),
            password: "secret-password".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_signup_rejects_bad_email() {
        let request = SignupRequest {
            username: "ann_lee".to_string(),
            email: "not-an-email".to_string(),
            password: "secret-password".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_signup_rejects_short_password() {
        let request = SignupRequest {
            username: "ann_lee".to_string(),
            email: "ann@example.com".to_string(),
            password: "short".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_signup_rejects_username_with_spaces() {
        let request = SignupRequest {
            username: "ann lee".to_string(),
            email: "ann@example.com".to_string(),
            password: "secret-password".to_string(),
        };
        assert!(request.validate().is_err());
    }
}
