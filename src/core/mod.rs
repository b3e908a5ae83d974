//! # Core Module
//!
//! 애플리케이션 조립(composition root)을 담당하는 모듈입니다.
//!
//! 모든 의존성은 생성자 주입으로 연결됩니다. 데이터베이스 연결 하나를
//! 리포지토리들이 공유하고, 서비스는 리포지토리를, 핸들러는
//! [`AppState`]를 통해 서비스를 받습니다. 전역 상태나 런타임
//! 레지스트리는 사용하지 않으며 의존성 그래프는 이 파일 하나에서
//! 전부 드러납니다.

use std::sync::Arc;

use crate::{
    db::Database,
    repositories::{employees::EmployeeRepository, users::UserRepository},
    services::{auth::TokenService, employees::EmployeeService, users::UserService},
};

/// 애플리케이션 전역 공유 상태
///
/// `web::Data<AppState>`로 래핑되어 모든 워커 스레드가 공유합니다.
/// 서비스들은 내부 가변 상태를 갖지 않으므로 락 없이 안전하게
/// 병렬 접근할 수 있습니다.
pub struct AppState {
    /// 직원 관리 서비스
    pub employee_service: Arc<EmployeeService>,
    /// 사용자 계정 서비스
    pub user_service: Arc<UserService>,
    /// JWT 토큰 서비스
    pub token_service: Arc<TokenService>,
}

impl AppState {
    /// 데이터베이스 연결에서 전체 의존성 그래프를 조립합니다.
    pub fn new(db: Arc<Database>) -> Self {
        let employee_repo = Arc::new(EmployeeRepository::new(db.clone()));
        let user_repo = Arc::new(UserRepository::new(db));

        Self {
            employee_service: Arc::new(EmployeeService::new(employee_repo)),
            user_service: Arc::new(UserService::new(user_repo)),
            token_service: Arc::new(TokenService::new()),
        }
    }
}
