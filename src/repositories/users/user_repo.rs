//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층입니다.
//! `username`의 유니크 제약은 항상 인덱스로 강제되며, `email`의 유니크
//! 제약은 엄격한 회원가입 정책이 활성화된 경우에만 강제됩니다.

use std::sync::Arc;

use mongodb::{
    IndexModel,
    bson::{DateTime, Document, doc},
    options::IndexOptions,
};

use crate::{
    config::SignupUniqueness, db::Database, domain::entities::users::User, errors::AppError,
};

/// 사용자 데이터 액세스 리포지토리
///
/// `users` 컬렉션에 대한 조회/생성/프로필 갱신 연산을 담당합니다.
/// 사용자 삭제 연산은 존재하지 않습니다.
pub struct UserRepository {
    /// 주입된 MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl UserRepository {
    /// 주입된 데이터베이스 연결로 리포지토리를 생성합니다.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> mongodb::Collection<User> {
        self.db.get_database().collection("users")
    }

    /// 사용자명으로 사용자 조회
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! { "username": username })
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// 이메일 주소로 사용자 조회
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// 사용자명 또는 이메일로 사용자 조회
    ///
    /// 로그인 식별자가 사용자명과 이메일 중 무엇이든 허용되는 정책에서
    /// 사용됩니다.
    pub async fn find_by_username_or_email(
        &self,
        identifier: &str,
    ) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! {
                "$or": [
                    { "username": identifier },
                    { "email": identifier },
                ]
            })
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// 새 사용자 생성
    ///
    /// 중복 검사는 서비스 계층에서 정책에 따라 수행되며, 여기서는
    /// 유니크 인덱스 위반을 `Conflict`로 변환하는 최종 방어만 합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 내부 식별자가 채워진 생성된 사용자
    pub async fn create(&self, mut user: User) -> Result<User, AppError> {
        let result = self.collection().insert_one(&user).await.map_err(|e| {
            use mongodb::error::{ErrorKind, WriteFailure};
            match &*e.kind {
                ErrorKind::Write(WriteFailure::WriteError(we)) if we.code == 11000 => {
                    AppError::Conflict("이미 사용 중인 사용자명 또는 이메일입니다".to_string())
                }
                _ => AppError::Database(e.to_string()),
            }
        })?;

        user.id = result.inserted_id.as_object_id();
        Ok(user)
    }

    /// 사용자 이메일 갱신
    ///
    /// 프로필에서 수정 가능한 필드는 이메일뿐입니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(u64)` - 매칭된 레코드 수 (0 또는 1)
    pub async fn update_email(&self, username: &str, email: &str) -> Result<u64, AppError> {
        let result = self
            .collection()
            .update_one(
                doc! { "username": username },
                doc! { "$set": { "email": email, "updated_at": DateTime::now() } },
            )
            .await
            .map_err(|e| {
                use mongodb::error::{ErrorKind, WriteFailure};
                match &*e.kind {
                    ErrorKind::Write(WriteFailure::WriteError(we)) if we.code == 11000 => {
                        AppError::Conflict("이미 사용 중인 이메일입니다".to_string())
                    }
                    _ => AppError::Database(e.to_string()),
                }
            })?;

        Ok(result.matched_count)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 활성화된 회원가입 정책에 맞는 유니크 인덱스를 생성합니다.
    /// `username` 유니크 인덱스는 항상 생성되며, `email` 유니크 인덱스는
    /// [`SignupUniqueness::UsernameOrEmail`] 정책일 때만 생성됩니다.
    /// 무조건 만들면 느슨한 정책에서도 이메일 중복이 인덱스에 막혀
    /// 정책 플래그가 무의미해집니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let mut indexes = vec![Self::unique_index("username", "username_unique")];

        if SignupUniqueness::current() == SignupUniqueness::UsernameOrEmail {
            indexes.push(Self::unique_index("email", "email_unique"));
        }

        self.collection()
            .create_indexes(indexes)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(())
    }

    fn unique_index(field: &str, name: &str) -> IndexModel {
        let mut keys = Document::new();
        keys.insert(field, 1);

        IndexModel::builder()
            .keys(keys)
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name(name.to_string())
                    .build(),
            )
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_index_shape() {
        let index = UserRepository::unique_index("email", "email_unique");

        assert_eq!(index.keys.get_i32("email").unwrap(), 1);
        let options = index.options.unwrap();
        assert_eq!(options.unique, Some(true));
        assert_eq!(options.name.as_deref(), Some("email_unique"));
    }
}
