//! Employee HTTP Handlers
//!
//! 직원 레코드의 CRUD, 목록/검색, 집계 엔드포인트를 처리하는 핸들러
//! 함수들입니다. 쓰기 연산과 집계/스킬 검색은 인증이 필요하며,
//! 단건 조회와 목록 조회는 공개 엔드포인트입니다.
//!
//! `/employees` 프리픽스 아래에 공개 라우트와 보호 라우트가 섞여 있어
//! 라우트 매크로 대신 일반 함수로 정의하고, 라우트 등록과 인증
//! 미들웨어 적용은 [`crate::routes`]에서 수행합니다.
//!
//! # Endpoints
//!
//! - **생성**: `POST /employees` (인증)
//! - **단건 조회**: `GET /employees/{employee_id}` (공개)
//! - **수정**: `PUT /employees/{employee_id}` (인증, 머지 패치)
//! - **삭제**: `DELETE /employees/{employee_id}` (인증)
//! - **목록/검색**: `GET /employees?department=&search=&skip=&limit=` (공개)
//! - **일괄 조회**: `GET /employees/all` (공개, 기본 limit=100)
//! - **부서별 평균 급여**: `GET /employees/avg-salary` (인증)
//! - **스킬 검색**: `GET /employees/search?skill=` (인증)
use actix_web::{HttpResponse, web};

use crate::{
    core::AppState,
    domain::dto::employees::{
        CreateEmployeeRequest, ListEmployeesQuery, MessageResponse, SkillQuery,
        UpdateEmployeeRequest,
    },
    errors::AppError,
};

/// 직원 생성 핸들러
///
/// # Endpoint
/// `POST /employees`
pub async fn create_employee(
    state: web::Data<AppState>,
    payload: web::Json<CreateEmployeeRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .employee_service
        .create_employee(payload.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(response))
}

/// 직원 단건 조회 핸들러
///
/// # Endpoint
/// `GET /employees/{employee_id}`
pub async fn get_employee(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let employee = state.employee_service.get_employee(&path).await?;

    Ok(HttpResponse::Ok().json(employee))
}

/// 직원 수정 핸들러 (머지 패치)
///
/// 본문에 존재하는 필드만 수정되며 생략된 필드는 유지됩니다.
///
/// # Endpoint
/// `PUT /employees/{employee_id}`
pub async fn update_employee(
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<UpdateEmployeeRequest>,
) -> Result<HttpResponse, AppError> {
    state
        .employee_service
        .update_employee(&path, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "직원 정보가 수정되었습니다".to_string(),
    }))
}

/// 직원 삭제 핸들러
///
/// # Endpoint
/// `DELETE /employees/{employee_id}`
pub async fn delete_employee(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.employee_service.delete_employee(&path).await?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "직원이 삭제되었습니다".to_string(),
    }))
}

/// 직원 목록/검색 핸들러
///
/// 부서 필터와 다중 필드 부분 일치 검색을 조합할 수 있으며,
/// 입사일 내림차순으로 페이지네이션됩니다 (기본 limit=10).
///
/// # Endpoint
/// `GET /employees?department=&search=&skip=&limit=`
pub async fn list_employees(
    state: web::Data<AppState>,
    query: web::Query<ListEmployeesQuery>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .employee_service
        .list_employees(query.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 직원 일괄 조회 핸들러 (기본 limit=100)
///
/// # Endpoint
/// `GET /employees/all?skip=&limit=`
pub async fn list_all_employees(
    state: web::Data<AppState>,
    query: web::Query<ListEmployeesQuery>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .employee_service
        .list_all_employees(query.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 부서별 평균 급여 집계 핸들러
///
/// # Endpoint
/// `GET /employees/avg-salary`
pub async fn average_salary(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let averages = state.employee_service.average_salary_by_department().await?;

    Ok(HttpResponse::Ok().json(averages))
}

/// 스킬 보유 직원 검색 핸들러 (정확 일치)
///
/// # Endpoint
/// `GET /employees/search?skill=`
pub async fn search_by_skill(
    state: web::Data<AppState>,
    query: web::Query<SkillQuery>,
) -> Result<HttpResponse, AppError> {
    let employees = state.employee_service.search_by_skill(&query.skill).await?;

    Ok(HttpResponse::Ok().json(employees))
}
