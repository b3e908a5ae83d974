//! # 사용자 계정 서비스 구현
//!
//! 회원가입, 로그인 인증, 프로필 조회/수정을 담당하는 비즈니스 로직
//! 계층입니다. 비밀번호는 bcrypt로 해싱되며 평문이 저장되는 일은 없습니다.

use std::sync::Arc;

use validator::Validate;

use crate::{
    config::{PasswordConfig, SignupUniqueness},
    domain::{
        dto::users::{
            request::{LoginRequest, SignupRequest, UpdateProfileRequest},
            response::{SignupResponse, UserResponse},
        },
        entities::users::User,
    },
    errors::AppError,
    repositories::users::UserRepository,
};

/// 사용자 계정 비즈니스 로직 서비스
///
/// 리포지토리를 생성자로 주입받으며, 회원가입 유니크 정책과 로그인
/// 식별자 해석은 [`SignupUniqueness`] 설정을 따릅니다.
pub struct UserService {
    /// 사용자 데이터 액세스 리포지토리
    user_repo: Arc<UserRepository>,
}

impl UserService {
    /// 주입된 리포지토리로 서비스를 생성합니다.
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }

    /// 새 사용자 회원가입
    ///
    /// 검증 → 정책별 중복 검사 → bcrypt 해싱 → 저장 순서로 진행됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::Validation` - 입력 검증 실패
    /// * `AppError::Conflict` - 사용자명 (또는 정책에 따라 이메일) 중복
    pub async fn signup(&self, request: SignupRequest) -> Result<SignupResponse, AppError> {
        request.validate()?;

        if self
            .user_repo
            .find_by_username(&request.username)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "이미 사용 중인 사용자명입니다".to_string(),
            ));
        }

        if SignupUniqueness::current() == SignupUniqueness::UsernameOrEmail
            && self.user_repo.find_by_email(&request.email).await?.is_some()
        {
            return Err(AppError::Conflict(
                "이미 사용 중인 이메일입니다".to_string(),
            ));
        }

        let password_hash = bcrypt::hash(&request.password, PasswordConfig::bcrypt_cost())
            .map_err(|e| AppError::Internal(format!("비밀번호 해싱 실패: {}", e)))?;

        let user = User::new(request.username, request.email, password_hash);
        let created = self.user_repo.create(user).await?;

        log::info!("신규 사용자 가입: {}", created.username);

        Ok(SignupResponse {
            message: "회원가입이 완료되었습니다".to_string(),
            user_id: created.id_string().unwrap_or_default(),
        })
    }

    /// 로그인 자격 증명 검증
    ///
    /// 식별자는 정책에 따라 사용자명 또는 이메일로 해석됩니다. 사용자
    /// 부재와 비밀번호 불일치는 동일한 `Unauthorized`로 응답하여 계정
    /// 존재 여부를 노출하지 않습니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 인증에 성공한 사용자
    pub async fn authenticate(&self, request: LoginRequest) -> Result<User, AppError> {
        let user = match SignupUniqueness::current() {
            SignupUniqueness::UsernameOnly => {
                self.user_repo.find_by_username(&request.username).await?
            }
            SignupUniqueness::UsernameOrEmail => {
                self.user_repo
                    .find_by_username_or_email(&request.username)
                    .await?
            }
        };

        let user = user.ok_or(AppError::Unauthorized)?;

        let matches = bcrypt::verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::Internal(format!("비밀번호 검증 실패: {}", e)))?;
        if !matches {
            return Err(AppError::Unauthorized);
        }

        Ok(user)
    }

    /// 인증된 사용자의 프로필 조회
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 토큰은 유효하지만 사용자 레코드가 없음
    pub async fn get_profile(&self, username: &str) -> Result<UserResponse, AppError> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// 인증된 사용자의 프로필 수정 (이메일만 변경 가능)
    ///
    /// # Errors
    ///
    /// * `AppError::Validation` - 이메일 형식 오류
    /// * `AppError::Conflict` - 이미 다른 계정이 사용 중인 이메일
    /// * `AppError::NotFound` - 사용자 레코드가 없음
    pub async fn update_profile(
        &self,
        username: &str,
        request: UpdateProfileRequest,
    ) -> Result<UserResponse, AppError> {
        request.validate()?;

        let matched = self
            .user_repo
            .update_email(username, &request.email)
            .await?;
        if matched == 0 {
            return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
        }

        self.get_profile(username).await
    }
}
