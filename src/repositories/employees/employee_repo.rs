//! # 직원 리포지토리 구현
//!
//! 직원 엔티티의 데이터 액세스 계층입니다. MongoDB를 저장소로 사용하며
//! 캐싱 없이 모든 읽기/쓰기가 저장소 왕복으로 수행됩니다.
//!
//! ## 특징
//!
//! - **생성자 주입**: `Arc<Database>`를 주입받아 전역 상태 없이 동작
//! - **유니크 제약**: `employee_id`는 유니크 인덱스로 강제
//! - **필터 빌더 분리**: 목록/검색 필터와 집계 파이프라인은 순수 함수로
//!   구성되어 저장소 없이 단위 테스트 가능

use std::sync::Arc;

use futures_util::TryStreamExt;
use mongodb::{
    IndexModel,
    bson::{Bson, Document, Regex, doc},
    options::IndexOptions,
};

use crate::{
    db::Database,
    domain::{dto::employees::response::DepartmentAverage, entities::employees::Employee},
    errors::AppError,
    utils::string_utils::escape_regex,
};

/// MongoDB 에러가 유니크 인덱스 중복(E11000)인지 확인
fn is_duplicate_key_error(error: &mongodb::error::Error) -> bool {
    use mongodb::error::{ErrorKind, WriteFailure};

    matches!(
        &*error.kind,
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == 11000
    )
}

/// 직원 데이터 액세스 리포지토리
///
/// `employees` 컬렉션에 대한 CRUD, 목록/검색, 집계 연산을 담당합니다.
pub struct EmployeeRepository {
    /// 주입된 MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl EmployeeRepository {
    /// 주입된 데이터베이스 연결로 리포지토리를 생성합니다.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> mongodb::Collection<Employee> {
        self.db.get_database().collection("employees")
    }

    /// 새 직원 레코드 생성
    ///
    /// `employee_id`가 이미 존재하면 `Conflict`를 반환합니다.
    /// 사전 존재 확인과 별개로, 동시 요청 경합은 유니크 인덱스가
    /// 최종적으로 막으며 해당 중복 키 에러도 `Conflict`로 변환됩니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(String)` - 저장소가 부여한 내부 식별자 (ObjectId 16진수)
    pub async fn create(&self, employee: Employee) -> Result<String, AppError> {
        if self.find_by_employee_id(&employee.employee_id).await?.is_some() {
            return Err(AppError::Conflict("이미 존재하는 직원 ID입니다".to_string()));
        }

        let result = self
            .collection()
            .insert_one(&employee)
            .await
            .map_err(|e| {
                if is_duplicate_key_error(&e) {
                    AppError::Conflict("이미 존재하는 직원 ID입니다".to_string())
                } else {
                    AppError::Database(e.to_string())
                }
            })?;

        match result.inserted_id {
            Bson::ObjectId(oid) => Ok(oid.to_hex()),
            other => Ok(other.to_string()),
        }
    }

    /// `employee_id`로 직원 조회
    pub async fn find_by_employee_id(
        &self,
        employee_id: &str,
    ) -> Result<Option<Employee>, AppError> {
        self.collection()
            .find_one(doc! { "employee_id": employee_id })
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// 직원 부분 업데이트
    ///
    /// 호출자가 구성한 `$set` 문서를 그대로 적용합니다.
    /// 검증과 머지 패치 문서 구성은 서비스 계층의 책임입니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(u64)` - 매칭된 레코드 수 (0 또는 1)
    pub async fn update(&self, employee_id: &str, set_doc: Document) -> Result<u64, AppError> {
        let result = self
            .collection()
            .update_one(doc! { "employee_id": employee_id }, doc! { "$set": set_doc })
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(result.matched_count)
    }

    /// 직원 삭제
    ///
    /// # 반환값
    ///
    /// * `Ok(u64)` - 삭제된 레코드 수 (0 또는 1)
    pub async fn delete(&self, employee_id: &str) -> Result<u64, AppError> {
        let result = self
            .collection()
            .delete_one(doc! { "employee_id": employee_id })
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(result.deleted_count)
    }

    /// 직원 목록 조회 (필터 + 페이지네이션)
    ///
    /// 입사일 내림차순으로 정렬하며, `total`은 skip/limit과 무관하게
    /// 필터 전체에 대해 별도로 계산됩니다.
    pub async fn list(
        &self,
        department: Option<&str>,
        search: Option<&str>,
        skip: u64,
        limit: i64,
    ) -> Result<(Vec<Employee>, u64), AppError> {
        let filter = Self::build_list_filter(department, search);

        let total = self
            .collection()
            .count_documents(filter.clone())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        let employees: Vec<Employee> = self
            .collection()
            .find(filter)
            .sort(doc! { "joining_date": -1 })
            .skip(skip)
            .limit(limit)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok((employees, total))
    }

    /// 필터에 해당하는 전체 직원 수 조회
    pub async fn count(
        &self,
        department: Option<&str>,
        search: Option<&str>,
    ) -> Result<u64, AppError> {
        let filter = Self::build_list_filter(department, search);

        self.collection()
            .count_documents(filter)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// 스킬 보유 직원 검색
    ///
    /// `skills` 배열에 주어진 문자열과 정확히 일치하는 항목이 있는
    /// 직원을 모두 반환합니다 (대소문자 구분, 부분 일치 아님).
    pub async fn find_by_skill(&self, skill: &str) -> Result<Vec<Employee>, AppError> {
        self.collection()
            .find(doc! { "skills": skill })
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// 부서별 평균 급여 집계
    ///
    /// 부서마다 한 행씩, `{department, avg_salary}` 형태로 반환합니다.
    /// 직원이 없는 부서는 결과에 나타나지 않습니다.
    pub async fn average_salary_by_department(
        &self,
    ) -> Result<Vec<DepartmentAverage>, AppError> {
        self.collection()
            .aggregate(Self::average_salary_pipeline())
            .with_type::<DepartmentAverage>()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// 목록/검색 필터 문서 구성
    ///
    /// `department`는 정확 일치, `search`는 다중 필드 부분 일치이며
    /// 둘 다 있으면 AND로 결합됩니다.
    pub fn build_list_filter(department: Option<&str>, search: Option<&str>) -> Document {
        let mut filter = Document::new();

        if let Some(department) = department {
            filter.insert("department", department);
        }

        if let Some(term) = search {
            let (key, value) = Self::build_search_clause(term);
            filter.insert(key, value);
        }

        filter
    }

    /// 대소문자 무시 다중 필드 검색 조건 구성
    ///
    /// `name`, `skills`, `department`, `employee_id`에는 이스케이프된
    /// 정규식을, `salary`에는 `$toString` 후 `$regexMatch`를 적용하여
    /// 숫자도 텍스트로 부분 일치 검색합니다. 조건들은 OR로 결합됩니다.
    fn build_search_clause(term: &str) -> (&'static str, Bson) {
        let pattern = escape_regex(term);
        let regex = |p: &str| Regex {
            pattern: p.to_string(),
            options: "i".to_string(),
        };

        let clauses = vec![
            doc! { "name": regex(&pattern) },
            doc! { "skills": regex(&pattern) },
            doc! { "department": regex(&pattern) },
            doc! { "employee_id": regex(&pattern) },
            doc! {
                "$expr": {
                    "$regexMatch": {
                        "input": { "$toString": "$salary" },
                        "regex": pattern.clone(),
                        "options": "i",
                    }
                }
            },
        ];

        ("$or", Bson::from(clauses))
    }

    /// 부서별 평균 급여 집계 파이프라인 구성
    pub fn average_salary_pipeline() -> Vec<Document> {
        vec![
            doc! { "$group": { "_id": "$department", "avg_salary": { "$avg": "$salary" } } },
            doc! { "$project": { "department": "$_id", "avg_salary": 1, "_id": 0 } },
        ]
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// `employee_id` 유니크 인덱스와 정렬용 `joining_date` 인덱스를
    /// 생성합니다. 애플리케이션 초기화 시 한 번 호출합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let employee_id_index = IndexModel::builder()
            .keys(doc! { "employee_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("employee_id_unique".to_string())
                    .build(),
            )
            .build();

        let joining_date_index = IndexModel::builder()
            .keys(doc! { "joining_date": -1 })
            .options(
                IndexOptions::builder()
                    .name("joining_date_desc".to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_indexes([employee_id_index, joining_date_index])
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_filter_empty_when_no_criteria() {
        let filter = EmployeeRepository::build_list_filter(None, None);
        assert!(filter.is_empty());
    }

    #[test]
    fn test_list_filter_department_exact_match() {
        let filter = EmployeeRepository::build_list_filter(Some("Eng"), None);
        assert_eq!(filter.get_str("department").unwrap(), "Eng");
        assert!(filter.get("$or").is_none());
    }

    #[test]
    fn test_list_filter_search_builds_or_clauses() {
        let filter = EmployeeRepository::build_list_filter(None, Some("eng"));
        let clauses = filter.get_array("$or").unwrap();

        // name, skills, department, employee_id, salary-as-text
        assert_eq!(clauses.len(), 5);
    }

    #[test]
    fn test_list_filter_combines_department_and_search() {
        let filter = EmployeeRepository::build_list_filter(Some("Eng"), Some("rust"));

        assert_eq!(filter.get_str("department").unwrap(), "Eng");
        assert!(filter.get_array("$or").is_ok());
    }

    #[test]
    fn test_search_regex_is_case_insensitive_and_escaped() {
        let filter = EmployeeRepository::build_list_filter(None, Some("c++"));
        let clauses = filter.get_array("$or").unwrap();

        let name_clause = clauses[0].as_document().unwrap();
        let Bson::RegularExpression(regex) = name_clause.get("name").unwrap() else {
            panic!("Expected regex clause for name");
        };

        assert_eq!(regex.pattern, r"c\+\+");
        assert_eq!(regex.options, "i");
    }

    #[test]
    fn test_average_salary_pipeline_shape() {
        let pipeline = EmployeeRepository::average_salary_pipeline();

        assert_eq!(pipeline.len(), 2);
        let group = pipeline[0].get_document("$group").unwrap();
        assert_eq!(group.get_str("_id").unwrap(), "$department");

        let project = pipeline[1].get_document("$project").unwrap();
        assert_eq!(project.get_str("department").unwrap(), "$_id");
        assert_eq!(project.get_i32("_id").unwrap(), 0);
    }
}
