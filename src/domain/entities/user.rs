//! User Entity Implementation
//!
//! 숙소 소유자이자 리뷰 작성자인 사용자 엔티티입니다.
//! 이름은 입력 그대로 50자 이하여야 하며 공백 제거 후 저장됩니다(빈 값 불가).
//! 이메일은 입력 그대로 단순 패턴을 검사한 뒤 소문자로 저장됩니다.
//! 이메일의 전역 유일성은 저장소 전체를 알아야 하므로 파사드에서 검사합니다.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::core::errors::AppResult;
use crate::domain::dto::users::UpdateUserRequest;
use crate::domain::entities::{validate_and_normalize, BaseEntity, Entity};
use crate::utils::string_utils::{normalize_email, trim_string};

/// 이메일 형식 검사 패턴 (`local@domain.tld`, TLD 2자 이상)
pub static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\w.-]+@[\w.-]+\.\w{2,}$").expect("email pattern is valid")
});

/// 사용자 엔티티
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct User {
    #[serde(flatten)]
    pub base: BaseEntity,
    #[validate(length(min = 1, max = 50, message = "first_name is required and must be 50 characters max"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 50, message = "last_name is required and must be 50 characters max"))]
    pub last_name: String,
    #[validate(regex(path = *EMAIL_REGEX, message = "Invalid email format"))]
    pub email: String,
    pub is_admin: bool,
}

impl User {
    /// 새 사용자 생성
    ///
    /// 입력 그대로 길이와 이메일 형식을 검사한 뒤, 이름의 앞뒤 공백을 제거하고
    /// 이메일을 소문자로 변환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 이름이 비어 있거나 50자 초과, 이메일 형식 오류
    pub fn new(first_name: &str, last_name: &str, email: &str, is_admin: bool) -> AppResult<Self> {
        let mut user = Self {
            base: BaseEntity::new(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            is_admin,
        };

        validate_and_normalize(&mut user)?;
        Ok(user)
    }
}

impl Entity for User {
    type Patch = UpdateUserRequest;

    fn base(&self) -> &BaseEntity {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseEntity {
        &mut self.base
    }

    fn attribute(&self, name: &str) -> Option<String> {
        match name {
            "id" => Some(self.base.id.clone()),
            "first_name" => Some(self.first_name.clone()),
            "last_name" => Some(self.last_name.clone()),
            "email" => Some(self.email.clone()),
            "is_admin" => Some(self.is_admin.to_string()),
            _ => None,
        }
    }

    fn merge(&mut self, patch: UpdateUserRequest) -> AppResult<()> {
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(is_admin) = patch.is_admin {
            self.is_admin = is_admin;
        }

        validate_and_normalize(self)
    }

    fn normalize(&mut self) {
        self.first_name = trim_string(&self.first_name);
        self.last_name = trim_string(&self.last_name);
        self.email = normalize_email(&self.email);
    }
}
