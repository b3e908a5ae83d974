//! 직원 요청 DTO
//!
//! 직원 생성/수정/조회 요청의 역직렬화와 입력 검증을 담당합니다.
//! 필드별 제약은 [`fields`] 서브모듈의 검증 함수에 모여 있으며,
//! 생성 DTO의 `validator` derive와 부분 업데이트 검증이 같은 함수를
//! 공유합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::patch::deserialize_patch_field;

/// 급여 하한
pub const SALARY_MIN: f64 = 0.0;
/// 급여 상한
pub const SALARY_MAX: f64 = 1_000_000.0;

/// 기본 페이지 크기
pub const DEFAULT_PAGE_LIMIT: i64 = 10;
/// 일괄 조회 기본 페이지 크기
pub const DEFAULT_BULK_LIMIT: i64 = 100;

/// 직원 생성 요청 DTO
///
/// 모든 필드가 필수이며, 전체 필드 검증을 통과해야 저장이 시작됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateEmployeeRequest {
    /// 직원 고유 식별자 (1-20자, 영숫자/언더스코어/하이픈)
    #[validate(custom(function = "fields::employee_id"))]
    pub employee_id: String,

    /// 직원 이름 (1-100자, 문자/공백/점/하이픈)
    #[validate(custom(function = "fields::name"))]
    pub name: String,

    /// 소속 부서 (1-50자)
    #[validate(custom(function = "fields::department"))]
    pub department: String,

    /// 급여 ([0, 1,000,000] 범위)
    #[validate(range(
        min = 0.0,
        max = 1000000.0,
        message = "급여는 0 이상 1,000,000 이하이어야 합니다"
    ))]
    pub salary: f64,

    /// 입사일 (`YYYY-MM-DD`, 유효한 달력 날짜)
    #[validate(custom(function = "fields::joining_date"))]
    pub joining_date: String,

    /// 보유 스킬 목록 (비어 있지 않아야 하며 각 항목도 비어 있지 않아야 함)
    #[validate(custom(function = "fields::skills"))]
    pub skills: Vec<String>,
}

/// 직원 부분 업데이트 요청 DTO
///
/// 머지 패치 의미론을 따릅니다. 각 필드는 세 가지 상태를 가집니다:
///
/// - 생략 (`None`): 저장된 값을 변경하지 않음
/// - 명시적 null (`Some(None)`): 검증 에러 (직원 필드는 비울 수 없음)
/// - 값 존재 (`Some(Some(v))`): 해당 필드의 개별 제약을 검증 후 반영
///
/// `employee_id`는 식별자이므로 패치 대상이 아닙니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEmployeeRequest {
    #[serde(default, deserialize_with = "deserialize_patch_field")]
    pub name: Option<Option<String>>,

    #[serde(default, deserialize_with = "deserialize_patch_field")]
    pub department: Option<Option<String>>,

    #[serde(default, deserialize_with = "deserialize_patch_field")]
    pub salary: Option<Option<f64>>,

    #[serde(default, deserialize_with = "deserialize_patch_field")]
    pub joining_date: Option<Option<String>>,

    #[serde(default, deserialize_with = "deserialize_patch_field")]
    pub skills: Option<Option<Vec<String>>>,
}

impl UpdateEmployeeRequest {
    /// 모든 필드가 생략되었는지 확인
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.department.is_none()
            && self.salary.is_none()
            && self.joining_date.is_none()
            && self.skills.is_none()
    }
}

/// 직원 목록/검색 쿼리 파라미터
///
/// `department`는 정확 일치 필터, `search`는 대소문자 무시 부분 일치
/// 검색이며 둘 다 주어지면 AND로 결합됩니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListEmployeesQuery {
    /// 부서 정확 일치 필터
    pub department: Option<String>,
    /// 다중 필드 부분 일치 검색어
    pub search: Option<String>,
    /// 건너뛸 레코드 수 (기본값 0)
    pub skip: Option<u64>,
    /// 페이지 크기 (기본값 10, 일괄 조회는 100)
    pub limit: Option<i64>,
}

/// 스킬 검색 쿼리 파라미터
#[derive(Debug, Clone, Deserialize)]
pub struct SkillQuery {
    /// 정확히 일치해야 하는 스킬 이름 (대소문자 구분)
    pub skill: String,
}

/// 필드별 검증 함수 모음
///
/// 생성 요청의 derive 검증과 부분 업데이트의 수동 검증이 공유합니다.
pub mod fields {
    use chrono::NaiveDate;
    use validator::ValidationError;

    /// `employee_id`: 1-20자, `[A-Za-z0-9_-]`
    pub fn employee_id(value: &str) -> Result<(), ValidationError> {
        if value.is_empty() || value.len() > 20 {
            return Err(ValidationError::new("employee_id_length")
                .with_message("직원 ID는 1-20자 사이여야 합니다".into()));
        }
        if !value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(ValidationError::new("employee_id_charset")
                .with_message("직원 ID는 영숫자, 언더스코어, 하이픈만 사용 가능합니다".into()));
        }
        Ok(())
    }

    /// `name`: 1-100자, 문자/공백/점/하이픈
    pub fn name(value: &str) -> Result<(), ValidationError> {
        let char_count = value.chars().count();
        if char_count == 0 || char_count > 100 {
            return Err(ValidationError::new("name_length")
                .with_message("이름은 1-100자 사이여야 합니다".into()));
        }
        if !value
            .chars()
            .all(|c| c.is_alphabetic() || c == ' ' || c == '.' || c == '-')
        {
            return Err(ValidationError::new("name_charset")
                .with_message("이름은 문자, 공백, 점, 하이픈만 사용 가능합니다".into()));
        }
        Ok(())
    }

    /// `department`: 1-50자
    pub fn department(value: &str) -> Result<(), ValidationError> {
        let char_count = value.chars().count();
        if char_count == 0 || char_count > 50 {
            return Err(ValidationError::new("department_length")
                .with_message("부서명은 1-50자 사이여야 합니다".into()));
        }
        Ok(())
    }

    /// `salary`: [0, 1,000,000] 범위
    pub fn salary(value: f64) -> Result<(), ValidationError> {
        if !(super::SALARY_MIN..=super::SALARY_MAX).contains(&value) {
            return Err(ValidationError::new("salary_range")
                .with_message("급여는 0 이상 1,000,000 이하이어야 합니다".into()));
        }
        Ok(())
    }

    /// `joining_date`: `YYYY-MM-DD` 형식의 유효한 달력 날짜
    ///
    /// 파서는 `2023-5-1`이나 `23-05-01` 같은 비표준 표기도 받아들이므로,
    /// 정규형으로 다시 포맷한 결과가 입력과 일치하는지 확인합니다.
    /// 입사일은 문자열 사전순 정렬이 곧 시간순 정렬이어야 하며,
    /// 제로 패딩되지 않은 날짜가 저장되면 그 성질이 깨집니다.
    pub fn joining_date(value: &str) -> Result<(), ValidationError> {
        let error = || {
            ValidationError::new("joining_date_format")
                .with_message("입사일은 YYYY-MM-DD 형식의 유효한 날짜여야 합니다".into())
        };

        let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| error())?;

        if date.format("%Y-%m-%d").to_string() != value {
            return Err(error());
        }

        Ok(())
    }

    /// `skills`: 비어 있지 않은 목록, 각 항목도 trim 후 비어 있지 않아야 함
    pub fn skills(values: &[String]) -> Result<(), ValidationError> {
        if values.is_empty() {
            return Err(ValidationError::new("skills_empty")
                .with_message("스킬 목록은 최소 1개 이상이어야 합니다".into()));
        }
        if values.iter().any(|s| s.trim().is_empty()) {
            return Err(ValidationError::new("skills_blank_entry")
                .with_message("스킬 항목은 비어 있을 수 없습니다".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateEmployeeRequest {
        CreateEmployeeRequest {
            employee_id: "E1".to_string(),
            name: "ann lee".to_string(),
            department: "Eng".to_string(),
            salary: 90000.0,
            joining_date: "2023-05-01".to_string(),
            skills: vec!["go".to_string(), " Rust ".to_string()],
        }
    }

    #[test]
    fn test_valid_create_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_employee_id_charset_rejected() {
        let mut request = valid_request();
        request.employee_id = "E 1!".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_employee_id_too_long_rejected() {
        let mut request = valid_request();
        request.employee_id = "a".repeat(21);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_name_with_digits_rejected() {
        let mut request = valid_request();
        request.name = "ann lee 2".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_name_with_dot_and_hyphen_allowed() {
        let mut request = valid_request();
        request.name = "Mary-Jane O.Brien".to_string();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_salary_out_of_range_rejected() {
        let mut request = valid_request();
        request.salary = 1_000_001.0;
        assert!(request.validate().is_err());

        request.salary = -1.0;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_invalid_calendar_date_rejected() {
        let mut request = valid_request();
        request.joining_date = "2023-02-30".to_string();
        assert!(request.validate().is_err());

        request.joining_date = "05/01/2023".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_non_zero_padded_date_rejected() {
        // 정렬 불변식이 깨지므로 제로 패딩되지 않은 날짜는 거부된다
        assert!(fields::joining_date("2023-5-1").is_err());
        assert!(fields::joining_date("2023-05-1").is_err());
        assert!(fields::joining_date("2023-5-01").is_err());
    }

    #[test]
    fn test_two_digit_year_rejected() {
        assert!(fields::joining_date("23-05-01").is_err());
        assert!(fields::joining_date("023-05-01").is_err());
    }

    #[test]
    fn test_canonical_date_accepted() {
        assert!(fields::joining_date("2023-05-01").is_ok());
        assert!(fields::joining_date("2024-02-29").is_ok());
    }

    #[test]
    fn test_empty_skills_rejected() {
        let mut request = valid_request();
        request.skills = vec![];
        assert!(request.validate().is_err());

        request.skills = vec!["go".to_string(), "   ".to_string()];
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_update_request_distinguishes_omitted_and_null() {
        let parsed: UpdateEmployeeRequest =
            serde_json::from_str(r#"{"salary": 5000.0, "name": null}"#).unwrap();

        assert_eq!(parsed.salary, Some(Some(5000.0)));
        assert_eq!(parsed.name, Some(None));
        assert!(parsed.department.is_none());
        assert!(!parsed.is_empty());
    }

    #[test]
    fn test_update_request_empty_body() {
        let parsed: UpdateEmployeeRequest = serde_json::from_str("{}").unwrap();
        assert!(parsed.is_empty());
    }
}
