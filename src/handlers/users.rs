//! # User HTTP Handlers
//!
//! 사용자 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/v1/users` | 사용자 목록 | 200 OK |
//! | `POST` | `/api/v1/users` | 새 사용자 생성 | 201 Created / 400 |
//! | `GET` | `/api/v1/users/{id}` | 사용자 조회 | 200 OK / 404 |
//! | `PUT` | `/api/v1/users/{id}` | 사용자 부분 수정 | 200 OK / 404 / 400 |
//!
//! 사용자 삭제 엔드포인트는 제공하지 않습니다.

use actix_web::{web, HttpResponse, get, post, put};
use crate::core::context::AppContext;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::{CreateUserRequest, UpdateUserRequest, UserResponse};

fn user_not_found() -> AppError {
    AppError::NotFound("User not found".to_string())
}

#[get("")]
pub async fn list_users(ctx: web::Data<AppContext>) -> HttpResponse {
    let users: Vec<UserResponse> = ctx
        .facade
        .get_all_users()
        .into_iter()
        .map(UserResponse::from)
        .collect();

    HttpResponse::Ok().json(users)
}

/// 새 사용자 생성
///
/// 이메일은 소문자로 정규화된 후 중복 검사됩니다.
///
/// # Errors
///
/// * 400 - 이름/이메일 검증 실패 또는 `Email already registered`
#[post("")]
pub async fn create_user(
    ctx: web::Data<AppContext>,
    payload: web::Json<CreateUserRequest>,
) -> AppResult<HttpResponse> {
    let user = ctx.facade.create_user(payload.into_inner())?;

    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

#[get("/{user_id}")]
pub async fn get_user(
    ctx: web::Data<AppContext>,
    user_id: web::Path<String>,
) -> AppResult<HttpResponse> {
    let user = ctx.facade.get_user(&user_id).ok_or_else(user_not_found)?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

#[put("/{user_id}")]
pub async fn update_user(
    ctx: web::Data<AppContext>,
    user_id: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> AppResult<HttpResponse> {
    let user = ctx
        .facade
        .update_user(&user_id, payload.into_inner())?
        .ok_or_else(user_not_found)?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}
