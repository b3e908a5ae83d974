//! Employee Entity Implementation
//!
//! 직원 레코드의 핵심 도메인 엔티티입니다.
//! 식별자는 호출자가 부여하는 `employee_id`이며, MongoDB의 `_id`는
//! 내부 저장용으로만 사용되고 응답에는 노출되지 않습니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::utils::string_utils::{title_case, trim_all};

/// 직원 엔티티
///
/// `employees` 컬렉션에 저장되는 형태 그대로의 구조체입니다.
/// 검증은 DTO/서비스 계층에서 수행되며, 이 엔티티는 이미 검증된
/// 데이터만 담는다고 가정합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    /// MongoDB 내부 식별자 (응답에서 제외됨)
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 호출자가 부여하는 고유 식별자 (유니크 인덱스)
    pub employee_id: String,
    /// 직원 이름 (저장 시 타이틀 케이스로 정규화)
    pub name: String,
    /// 소속 부서
    pub department: String,
    /// 급여
    pub salary: f64,
    /// 입사일 (`YYYY-MM-DD`, 사전순 정렬이 곧 시간순 정렬)
    pub joining_date: String,
    /// 보유 스킬 목록 (저장 시 각 항목 trim)
    pub skills: Vec<String>,
}

impl Employee {
    /// 저장 전 정규화 규칙을 적용합니다.
    ///
    /// - `name`은 타이틀 케이스로 변환
    /// - `skills`의 각 항목은 앞뒤 공백 제거
    pub fn normalize(&mut self) {
        self.name = title_case(&self.name);
        self.skills = trim_all(&self.skills);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_applies_title_case_and_trims_skills() {
        let mut employee = Employee {
            id: None,
            employee_id: "E1".to_string(),
            name: "ann lee".to_string(),
            department: "Eng".to_string(),
            salary: 90000.0,
            joining_date: "2023-05-01".to_string(),
            skills: vec!["go".to_string(), " Rust ".to_string()],
        };

        employee.normalize();

        assert_eq!(employee.name, "Ann Lee");
        assert_eq!(employee.skills, vec!["go", "Rust"]);
    }

    #[test]
    fn test_internal_id_excluded_from_serialization_when_absent() {
        let employee = Employee {
            id: None,
            employee_id: "E1".to_string(),
            name: "Ann Lee".to_string(),
            department: "Eng".to_string(),
            salary: 90000.0,
            joining_date: "2023-05-01".to_string(),
            skills: vec!["go".to_string()],
        };

        let json = serde_json::to_value(&employee).unwrap();
        assert!(json.get("_id").is_none());
        assert_eq!(json["employee_id"], "E1");
    }
}
