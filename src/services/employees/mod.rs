//! 직원 관리 서비스 모듈

pub mod employee_service;

pub use employee_service::EmployeeService;
