//! User Profile HTTP Handlers
//!
//! 인증된 사용자의 프로필 조회/수정 엔드포인트를 처리합니다.
//! 이 모듈의 모든 핸들러는 인증 미들웨어 뒤에 등록되며,
//! [`AuthenticatedUser`] 추출기로 토큰 주체를 받습니다.
use actix_web::{HttpResponse, get, put, web};

use crate::{
    core::AppState,
    domain::{dto::users::UpdateProfileRequest, models::auth::AuthenticatedUser},
    errors::AppError,
};

/// 내 프로필 조회 핸들러
///
/// # Endpoint
/// `GET /user/profile`
#[get("/profile")]
pub async fn get_profile(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let profile = state.user_service.get_profile(&user.username).await?;

    Ok(HttpResponse::Ok().json(profile))
}

/// 내 프로필 수정 핸들러
///
/// 수정 가능한 필드는 이메일뿐입니다.
///
/// # Endpoint
/// `PUT /user/profile`
#[put("/profile")]
pub async fn update_profile(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    payload: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, AppError> {
    let profile = state
        .user_service
        .update_profile(&user.username, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(profile))
}
