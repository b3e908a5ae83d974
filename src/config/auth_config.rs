//! # Authentication Configuration Module
//!
//! JWT 토큰과 회원가입 정책 관련 설정을 관리하는 모듈입니다.
//!
//! ## 환경 변수 설정
//!
//! ```bash
//! # JWT 토큰 설정
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//!
//! # 회원가입 유니크 정책 (username | username-email)
//! export SIGNUP_UNIQUENESS="username-email"
//! ```

use std::env;

/// JWT 토큰 설정을 관리하는 구조체
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀 키를 반환합니다.
    ///
    /// `JWT_SECRET` 환경 변수가 설정되지 않은 경우 개발용 기본값을
    /// 사용하며 경고를 출력합니다. 프로덕션에서는 반드시 설정해야 합니다.
    pub fn secret() -> String {
        env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            "your-secret-key".to_string()
        })
    }

    /// JWT 액세스 토큰의 만료 시간을 시간 단위로 반환합니다. 기본값: 24
    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .unwrap_or(24)
    }
}

/// 회원가입 유니크 제약 정책
///
/// 사용자명만 검사하는 느슨한 정책과, 사용자명과 이메일을 모두 검사하는
/// 엄격한 정책 중 어느 쪽을 쓸지는 배포 설정으로 결정하며 코드에
/// 묵시적으로 박아두지 않습니다.
///
/// 로그인 식별자 해석도 같은 정책을 따릅니다:
/// `UsernameOrEmail`이면 사용자명 또는 이메일로 로그인할 수 있습니다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SignupUniqueness {
    /// 사용자명만 유니크 검사
    UsernameOnly,
    /// 사용자명과 이메일 모두 유니크 검사 (기본값, 엄격한 정책)
    UsernameOrEmail,
}

impl SignupUniqueness {
    /// 현재 활성화된 회원가입 정책을 반환합니다.
    ///
    /// `SIGNUP_UNIQUENESS` 환경 변수 값:
    /// - `"username"` → [`SignupUniqueness::UsernameOnly`]
    /// - `"username-email"` 또는 미설정 → [`SignupUniqueness::UsernameOrEmail`]
    pub fn current() -> Self {
        match env::var("SIGNUP_UNIQUENESS")
            .unwrap_or_else(|_| "username-email".to_string())
            .to_lowercase()
            .as_str()
        {
            "username" => SignupUniqueness::UsernameOnly,
            _ => SignupUniqueness::UsernameOrEmail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_expiration_default() {
        if env::var("JWT_EXPIRATION_HOURS").is_err() {
            assert_eq!(JwtConfig::expiration_hours(), 24);
        }
    }

    #[test]
    fn test_signup_uniqueness_default_is_strict() {
        if env::var("SIGNUP_UNIQUENESS").is_err() {
            assert_eq!(
                SignupUniqueness::current(),
                SignupUniqueness::UsernameOrEmail
            );
        }
    }
}
