//! Authentication HTTP Handlers
//!
//! 회원가입과 로그인 엔드포인트를 처리하는 핸들러 함수들입니다.
//! JWT 토큰 기반의 상태 없는 인증을 구현합니다.
//!
//! # Endpoints
//!
//! - **회원가입**: `POST /auth/signup`
//! - **로그인**: `POST /auth/login` (bearer 토큰 발급)
use actix_web::{HttpResponse, post, web};

use crate::{
    core::AppState,
    domain::dto::users::{LoginRequest, LoginResponse, SignupRequest},
    errors::AppError,
};

/// 회원가입 핸들러
///
/// 입력 검증과 중복 검사를 통과하면 비밀번호를 해싱하여 사용자를
/// 생성합니다.
///
/// # Endpoint
/// `POST /auth/signup`
#[post("/signup")]
pub async fn signup(
    state: web::Data<AppState>,
    payload: web::Json<SignupRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.user_service.signup(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 로그인 핸들러
///
/// 자격 증명을 검증하고 bearer 액세스 토큰을 발급합니다.
/// 사용자 부재와 비밀번호 불일치는 동일하게 401로 응답합니다.
///
/// # Endpoint
/// `POST /auth/login`
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let user = state.user_service.authenticate(payload.into_inner()).await?;

    let access_token = state.token_service.issue_token(&user.username)?;

    log::info!("로그인 성공: 사용자 {}", user.username);

    Ok(HttpResponse::Ok().json(LoginResponse::new(access_token)))
}
