//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 직원 관리 백엔드를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## 상태 코드 매핑
//!
//! | 에러 | HTTP 상태 |
//! |------|-----------|
//! | `Validation` | 422 Unprocessable Entity (필드별 상세 포함) |
//! | `Conflict` | 400 Bad Request (유니크 키 중복) |
//! | `NotFound` | 404 Not Found |
//! | `Unauthorized` | 401 Unauthorized (원인 무관 동일 메시지) |
//! | `Database` / `Internal` | 500 Internal Server Error (상세는 로그에만 기록) |

use serde::Serialize;
use thiserror::Error;

/// 검증에 실패한 개별 필드 정보
///
/// 하나의 요청에서 여러 필드가 동시에 실패할 수 있으므로
/// `Validation` 에러는 이 구조체의 목록을 가집니다.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldViolation {
    /// 실패한 필드 이름
    pub field: String,
    /// 실패 사유
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// 애플리케이션 전역 에러 타입
///
/// 백엔드 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (422 Unprocessable Entity)
    #[error("Validation error: {0:?}")]
    Validation(Vec<FieldViolation>),

    /// 충돌/중복 에러 (400 Bad Request)
    #[error("Conflict error: {0}")]
    Conflict(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 인증 실패 에러 (401 Unauthorized)
    ///
    /// 토큰 만료, 잘못된 서명, 잘못된 자격 증명 등 원인을 구분하지 않고
    /// 동일한 메시지로 응답합니다.
    #[error("Authentication error")]
    Unauthorized,

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    Database(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// 단일 필드 검증 실패를 위한 편의 생성자
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        AppError::Validation(vec![FieldViolation::new(field, message)])
    }
}

/// `validator` 크레이트의 검증 결과를 필드별 에러 목록으로 변환합니다.
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut violations: Vec<FieldViolation> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(|e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    FieldViolation::new(field, message)
                })
            })
            .collect();
        violations.sort_by(|a, b| a.field.cmp(&b.field));
        AppError::Validation(violations)
    }
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 서버 내부 에러의 상세 내용은 로그에만 남기고,
    /// 클라이언트에게는 일반화된 메시지만 전달합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        match self {
            AppError::Validation(violations) => {
                actix_web::HttpResponse::build(StatusCode::UNPROCESSABLE_ENTITY).json(
                    serde_json::json!({
                        "error": "validation_error",
                        "fields": violations,
                    }),
                )
            }
            AppError::Conflict(msg) => actix_web::HttpResponse::build(StatusCode::BAD_REQUEST)
                .json(serde_json::json!({ "error": msg })),
            AppError::NotFound(msg) => actix_web::HttpResponse::build(StatusCode::NOT_FOUND)
                .json(serde_json::json!({ "error": msg })),
            AppError::Unauthorized => actix_web::HttpResponse::build(StatusCode::UNAUTHORIZED)
                .json(serde_json::json!({ "error": "유효한 인증 정보가 필요합니다" })),
            AppError::Database(detail) | AppError::Internal(detail) => {
                log::error!("내부 서버 에러: {}", detail);
                actix_web::HttpResponse::build(StatusCode::INTERNAL_SERVER_ERROR)
                    .json(serde_json::json!({ "error": "서버 내부 오류가 발생했습니다" }))
            }
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::validation("salary", "급여는 0 이상이어야 합니다");
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_conflict_error_response_is_bad_request() {
        let error = AppError::Conflict("Employee ID already exists".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("Employee not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_unauthorized_error_response() {
        let response = AppError::Unauthorized.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_internal_error_response_hides_detail() {
        let error = AppError::Internal("driver said something sensitive".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_from_validator_errors_collects_fields() {
        use validator::Validate;

        #[derive(Validate)]
        struct Probe {
            #[validate(length(min = 1, message = "이름은 필수입니다"))]
            name: String,
            #[validate(range(min = 0.0, message = "급여는 0 이상이어야 합니다"))]
            salary: f64,
        }

        let probe = Probe {
            name: String::new(),
            salary: -1.0,
        };
        let app_error: AppError = probe.validate().unwrap_err().into();

        if let AppError::Validation(violations) = app_error {
            assert_eq!(violations.len(), 2);
            assert_eq!(violations[0].field, "name");
            assert_eq!(violations[1].field, "salary");
        } else {
            panic!("Expected Validation error");
        }
    }
}
