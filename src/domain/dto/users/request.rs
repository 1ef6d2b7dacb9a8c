//! # 사용자 요청 DTO
//!
//! 필드 제약(이름 길이, 이메일 형식)은 [`User`](crate::domain::entities::User) 엔티티가
//! 생성/업데이트 시점에 검증합니다. 이 모듈의 구조체는 JSON 본문의 형태만 정의합니다.

use serde::{Deserialize, Serialize};

/// 사용자 생성 요청
///
/// # JSON 예제
///
/// ```json
/// {
///   "first_name": "Alice",
///   "last_name": "Dupont",
///   "email": "alice@test.com",
///   "is_admin": false
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// 사용자 부분 업데이트 요청
///
/// 전달된 필드만 변경됩니다. `id`, `created_at`은 변경할 수 없습니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub is_admin: Option<bool>,
}
