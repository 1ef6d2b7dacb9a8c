use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::entities::User;

/// 사용자 응답 DTO
///
/// 저장된 비밀번호가 없으므로 응답에도 비밀번호 관련 필드는 존재하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            base,
            first_name,
            last_name,
            email,
            is_admin,
        } = user;

        Self {
            id: base.id,
            first_name,
            last_name,
            email,
            is_admin,
            created_at: base.created_at,
            updated_at: base.updated_at,
        }
    }
}

/// 장소 상세 조회에 포함되는 소유자 요약 정보
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnerSummary {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<&User> for OwnerSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.base.id.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
        }
    }
}
