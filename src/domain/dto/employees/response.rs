//! 직원 응답 DTO

use serde::{Deserialize, Serialize};

use crate::domain::entities::employees::Employee;

/// 직원 단건 응답 DTO
///
/// 저장소 내부 식별자(`_id`)를 제외한 직원 레코드입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeResponse {
    pub employee_id: String,
    pub name: String,
    pub department: String,
    pub salary: f64,
    pub joining_date: String,
    pub skills: Vec<String>,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        let Employee {
            employee_id,
            name,
            department,
            salary,
            joining_date,
            skills,
            ..
        } = employee;

        Self {
            employee_id,
            name,
            department,
            salary,
            joining_date,
            skills,
        }
    }
}

/// 직원 목록 응답 DTO
///
/// `total`은 skip/limit과 무관하게 필터 전체에 대해 계산된 건수입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeListResponse {
    pub employees: Vec<EmployeeResponse>,
    pub total: u64,
}

/// 직원 생성 응답 DTO
///
/// `id`는 저장소가 부여한 내부 식별자(ObjectId 16진수 문자열)입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployeeResponse {
    pub message: String,
    pub id: String,
}

/// 부서별 평균 급여 집계 결과 한 행
///
/// 집계 파이프라인의 `$project` 출력과 응답 직렬화에 같은 구조체를
/// 사용합니다. 직원이 없는 부서는 행 자체가 존재하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentAverage {
    pub department: String,
    pub avg_salary: f64,
}

/// 단순 메시지 응답 DTO (업데이트/삭제 성공 등)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_response_drops_internal_id() {
        let employee = Employee {
            id: Some(ObjectId::new()),
            employee_id: "E1".to_string(),
            name: "Ann Lee".to_string(),
            department: "Eng".to_string(),
            salary: 90000.0,
            joining_date: "2023-05-01".to_string(),
            skills: vec!["go".to_string(), "Rust".to_string()],
        };

        let response = EmployeeResponse::from(employee);
        let json = serde_json::to_value(&response).unwrap();

        assert!(json.get("_id").is_none());
        assert!(json.get("id").is_none());
        assert_eq!(json["employee_id"], "E1");
        assert_eq!(json["name"], "Ann Lee");
    }
}
