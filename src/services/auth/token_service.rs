//! JWT 토큰 관리 서비스 구현
//!
//! HMAC-SHA256 서명 기반의 상태 없는 세션 토큰을 생성하고 검증합니다.
//! 토큰은 저장소에 영속되지 않으며, 유효성은 서명과 만료 시각만으로
//! 판단됩니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::{config::JwtConfig, domain::models::token::TokenClaims, errors::AppError};

/// JWT 토큰 관리 서비스
pub struct TokenService {
    // 외부 의존성 없음
}

impl TokenService {
    pub fn new() -> Self {
        Self {}
    }

    /// 주체(사용자명)에 대한 JWT 액세스 토큰 발급
    ///
    /// # Errors
    ///
    /// * `AppError::Internal` - 토큰 인코딩 실패
    pub fn issue_token(&self, subject: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::hours(JwtConfig::expiration_hours());

        let claims = TokenClaims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let secret = JwtConfig::secret();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&Header::default(), &claims, &encoding_key)
            .map_err(|e| AppError::Internal(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// 만료, 잘못된 형식, 잘못된 서명을 구분하지 않고 모두
    /// `Unauthorized`로 반환합니다. 실패 원인은 호출자에게 노출되지
    /// 않습니다.
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        let secret = JwtConfig::secret();
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::default();

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|_| AppError::Unauthorized)
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 `Bearer {token}` 형식에서 토큰 부분만을
    /// 추출합니다. 형식이 다르면 `Unauthorized`를 반환합니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        auth_header
            .strip_prefix("Bearer ")
            .ok_or(AppError::Unauthorized)
    }
}

impl Default for TokenService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_and_verify_round_trip() {
        let service = TokenService::new();

        let token = service.issue_token("ann_lee").unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, "ann_lee");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_tampered_token_rejected() {
        let service = TokenService::new();

        let mut token = service.issue_token("ann_lee").unwrap();
        token.push('x');

        assert!(matches!(
            service.verify_token(&token),
            Err(AppError::Unauthorized)
        ));
    }

    #[test]
    fn test_garbage_token_rejected() {
        let service = TokenService::new();

        assert!(matches!(
            service.verify_token("not-a-jwt"),
            Err(AppError::Unauthorized)
        ));
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = TokenService::new();

        assert_eq!(
            service.extract_bearer_token("Bearer abc.def.ghi").unwrap(),
            "abc.def.ghi"
        );
        assert!(service.extract_bearer_token("Basic abc").is_err());
        assert!(service.extract_bearer_token("abc.def.ghi").is_err());
    }
}
