//! # 직원 관리 서비스 구현
//!
//! 직원 레코드의 검증, 정규화, 머지 패치 구성을 담당하는 비즈니스 로직
//! 계층입니다. 모든 검증은 저장소 변경이 시작되기 전에 완료되며,
//! 하나라도 실패하면 아무것도 저장되지 않습니다.

use std::sync::Arc;

use mongodb::bson::Document;
use validator::Validate;

use crate::{
    domain::{
        dto::employees::{
            request::{
                CreateEmployeeRequest, DEFAULT_BULK_LIMIT, DEFAULT_PAGE_LIMIT,
                ListEmployeesQuery, UpdateEmployeeRequest, fields,
            },
            response::{
                CreateEmployeeResponse, DepartmentAverage, EmployeeListResponse, EmployeeResponse,
            },
        },
        entities::employees::Employee,
    },
    errors::{AppError, FieldViolation},
    repositories::employees::EmployeeRepository,
    utils::string_utils::{title_case, trim_all},
};

/// 직원 관리 비즈니스 로직 서비스
///
/// 리포지토리를 생성자로 주입받으며, 요청 DTO의 검증과 저장 전
/// 정규화(이름 타이틀 케이스, 스킬 trim)를 수행한 뒤 저장소 연산을
/// 위임합니다.
pub struct EmployeeService {
    /// 직원 데이터 액세스 리포지토리
    employee_repo: Arc<EmployeeRepository>,
}

impl EmployeeService {
    /// 주입된 리포지토리로 서비스를 생성합니다.
    pub fn new(employee_repo: Arc<EmployeeRepository>) -> Self {
        Self { employee_repo }
    }

    /// 새 직원 생성
    ///
    /// 전체 필드 검증 → 정규화 → 저장 순서로 진행됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::Validation` - 필드 검증 실패 (필드별 상세 포함)
    /// * `AppError::Conflict` - `employee_id` 중복
    pub async fn create_employee(
        &self,
        request: CreateEmployeeRequest,
    ) -> Result<CreateEmployeeResponse, AppError> {
        request.validate()?;

        let mut employee = Employee {
            id: None,
            employee_id: request.employee_id,
            name: request.name,
            department: request.department,
            salary: request.salary,
            joining_date: request.joining_date,
            skills: request.skills,
        };
        employee.normalize();

        let inserted_id = self.employee_repo.create(employee).await?;

        log::info!("직원 생성됨: 내부 ID {}", inserted_id);

        Ok(CreateEmployeeResponse {
            message: "직원이 생성되었습니다".to_string(),
            id: inserted_id,
        })
    }

    /// `employee_id`로 직원 조회
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 직원이 존재하지 않음
    pub async fn get_employee(&self, employee_id: &str) -> Result<EmployeeResponse, AppError> {
        let employee = self
            .employee_repo
            .find_by_employee_id(employee_id)
            .await?
            .ok_or_else(|| AppError::NotFound("직원을 찾을 수 없습니다".to_string()))?;

        Ok(EmployeeResponse::from(employee))
    }

    /// 직원 부분 업데이트 (머지 패치)
    ///
    /// 요청에 존재하는 필드만 개별 검증 후 반영하며, 생략된 필드는
    /// 저장된 값을 유지합니다. 명시적 null은 검증 에러입니다.
    ///
    /// # Errors
    ///
    /// * `AppError::Validation` - 필드 검증 실패 또는 빈 패치
    /// * `AppError::NotFound` - 해당 직원이 존재하지 않음
    pub async fn update_employee(
        &self,
        employee_id: &str,
        request: UpdateEmployeeRequest,
    ) -> Result<(), AppError> {
        let set_doc = build_patch_document(&request)?;

        let matched = self.employee_repo.update(employee_id, set_doc).await?;
        if matched == 0 {
            return Err(AppError::NotFound("직원을 찾을 수 없습니다".to_string()));
        }

        Ok(())
    }

    /// 직원 삭제
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 직원이 존재하지 않음
    pub async fn delete_employee(&self, employee_id: &str) -> Result<(), AppError> {
        let deleted = self.employee_repo.delete(employee_id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound("직원을 찾을 수 없습니다".to_string()));
        }

        Ok(())
    }

    /// 직원 목록/검색 조회
    ///
    /// 기본값: skip=0, limit=10. 입사일 내림차순 정렬이며 `total`은
    /// 페이지와 무관한 전체 필터 건수입니다.
    pub async fn list_employees(
        &self,
        query: ListEmployeesQuery,
    ) -> Result<EmployeeListResponse, AppError> {
        self.list_with_default_limit(query, DEFAULT_PAGE_LIMIT).await
    }

    /// 직원 일괄 조회 (기본 limit=100)
    pub async fn list_all_employees(
        &self,
        query: ListEmployeesQuery,
    ) -> Result<EmployeeListResponse, AppError> {
        self.list_with_default_limit(query, DEFAULT_BULK_LIMIT).await
    }

    async fn list_with_default_limit(
        &self,
        query: ListEmployeesQuery,
        default_limit: i64,
    ) -> Result<EmployeeListResponse, AppError> {
        let skip = query.skip.unwrap_or(0);
        let limit = query.limit.unwrap_or(default_limit);

        // MongoDB에서 limit 0은 "제한 없음"을 의미하므로, 0 이하의 limit은
        // 저장소에 닿기 전에 빈 페이지로 처리한다 (total은 실제 건수)
        if limit <= 0 {
            let total = self
                .employee_repo
                .count(query.department.as_deref(), query.search.as_deref())
                .await?;
            return Ok(EmployeeListResponse {
                employees: Vec::new(),
                total,
            });
        }

        let (employees, total) = self
            .employee_repo
            .list(
                query.department.as_deref(),
                query.search.as_deref(),
                skip,
                limit,
            )
            .await?;

        Ok(EmployeeListResponse {
            employees: employees.into_iter().map(EmployeeResponse::from).collect(),
            total,
        })
    }

    /// 스킬 보유 직원 검색 (정확 일치, 대소문자 구분)
    pub async fn search_by_skill(&self, skill: &str) -> Result<Vec<EmployeeResponse>, AppError> {
        let employees = self.employee_repo.find_by_skill(skill).await?;
        Ok(employees.into_iter().map(EmployeeResponse::from).collect())
    }

    /// 부서별 평균 급여 집계
    pub async fn average_salary_by_department(
        &self,
    ) -> Result<Vec<DepartmentAverage>, AppError> {
        self.employee_repo.average_salary_by_department().await
    }
}

/// 부분 업데이트 요청에서 `$set` 문서 구성
///
/// 존재하는 필드마다 개별 제약을 검증하고, 쓰기 정규화 규칙(이름 타이틀
/// 케이스, 스킬 trim)을 적용합니다. 모든 위반 사항을 모아서 한 번에
/// 반환하며, 위반이 하나라도 있으면 문서는 만들어지지 않습니다.
pub fn build_patch_document(request: &UpdateEmployeeRequest) -> Result<Document, AppError> {
    if request.is_empty() {
        return Err(AppError::validation(
            "body",
            "수정할 필드가 하나 이상 필요합니다",
        ));
    }

    let mut violations: Vec<FieldViolation> = Vec::new();
    let mut set_doc = Document::new();

    let null_violation =
        |field: &str| FieldViolation::new(field, "필드를 null로 비울 수 없습니다");

    match &request.name {
        Some(Some(name)) => match fields::name(name) {
            Ok(()) => {
                set_doc.insert("name", title_case(name));
            }
            Err(e) => violations.push(violation_from("name", e)),
        },
        Some(None) => violations.push(null_violation("name")),
        None => {}
    }

    match &request.department {
        Some(Some(department)) => match fields::department(department) {
            Ok(()) => {
                set_doc.insert("department", department.as_str());
            }
            Err(e) => violations.push(violation_from("department", e)),
        },
        Some(None) => violations.push(null_violation("department")),
        None => {}
    }

    match &request.salary {
        Some(Some(salary)) => match fields::salary(*salary) {
            Ok(()) => {
                set_doc.insert("salary", *salary);
            }
            Err(e) => violations.push(violation_from("salary", e)),
        },
        Some(None) => violations.push(null_violation("salary")),
        None => {}
    }

    match &request.joining_date {
        Some(Some(joining_date)) => match fields::joining_date(joining_date) {
            Ok(()) => {
                set_doc.insert("joining_date", joining_date.as_str());
            }
            Err(e) => violations.push(violation_from("joining_date", e)),
        },
        Some(None) => violations.push(null_violation("joining_date")),
        None => {}
    }

    match &request.skills {
        Some(Some(skills)) => match fields::skills(skills) {
            Ok(()) => {
                set_doc.insert("skills", trim_all(skills));
            }
            Err(e) => violations.push(violation_from("skills", e)),
        },
        Some(None) => violations.push(null_violation("skills")),
        None => {}
    }

    if !violations.is_empty() {
        return Err(AppError::Validation(violations));
    }

    Ok(set_doc)
}

fn violation_from(field: &str, error: validator::ValidationError) -> FieldViolation {
    let message = error
        .message
        .map(|m| m.to_string())
        .unwrap_or_else(|| error.code.to_string());
    FieldViolation::new(field, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_with_only_salary_touches_only_salary() {
        let request = UpdateEmployeeRequest {
            salary: Some(Some(5000.0)),
            ..Default::default()
        };

        let set_doc = build_patch_document(&request).unwrap();

        assert_eq!(set_doc.len(), 1);
        assert_eq!(set_doc.get_f64("salary").unwrap(), 5000.0);
    }

    #[test]
    fn test_patch_normalizes_name_and_skills() {
        let request = UpdateEmployeeRequest {
            name: Some(Some("ann lee".to_string())),
            skills: Some(Some(vec!["go".to_string(), " Rust ".to_string()])),
            ..Default::default()
        };

        let set_doc = build_patch_document(&request).unwrap();

        assert_eq!(set_doc.get_str("name").unwrap(), "Ann Lee");
        let skills = set_doc.get_array("skills").unwrap();
        assert_eq!(skills[1].as_str().unwrap(), "Rust");
    }

    #[test]
    fn test_patch_rejects_explicit_null() {
        let request: UpdateEmployeeRequest =
            serde_json::from_str(r#"{"name": null, "salary": 5000.0}"#).unwrap();

        let error = build_patch_document(&request).unwrap_err();

        let AppError::Validation(violations) = error else {
            panic!("Expected Validation error");
        };
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "name");
    }

    #[test]
    fn test_patch_rejects_empty_body() {
        let request = UpdateEmployeeRequest::default();
        assert!(build_patch_document(&request).is_err());
    }

    #[test]
    fn test_patch_validates_supplied_fields_only() {
        let request = UpdateEmployeeRequest {
            salary: Some(Some(2_000_000.0)),
            department: Some(Some("Eng".to_string())),
            ..Default::default()
        };

        let error = build_patch_document(&request).unwrap_err();

        let AppError::Validation(violations) = error else {
            panic!("Expected Validation error");
        };
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "salary");
    }

    #[test]
    fn test_patch_rejects_invalid_date() {
        let request = UpdateEmployeeRequest {
            joining_date: Some(Some("2023-13-01".to_string())),
            ..Default::default()
        };

        assert!(build_patch_document(&request).is_err());
    }
}
