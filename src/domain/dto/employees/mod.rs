//! 직원 요청/응답 DTO 모듈

pub mod request;
pub mod response;

pub use request::{CreateEmployeeRequest, ListEmployeesQuery, SkillQuery, UpdateEmployeeRequest};
pub use response::{
    CreateEmployeeResponse, DepartmentAverage, EmployeeListResponse, EmployeeResponse,
    MessageResponse,
};
