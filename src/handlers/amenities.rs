//! # Amenity HTTP Handlers
//!
//! | 메서드 | 경로 | 상태 코드 |
//! |--------|------|-----------|
//! | `GET` | `/api/v1/amenities` | 200 |
//! | `POST` | `/api/v1/amenities` | 201 / 400 |
//! | `GET` | `/api/v1/amenities/{id}` | 200 / 404 |
//! | `PUT` | `/api/v1/amenities/{id}` | 200 / 404 / 400 |
//! | `DELETE` | `/api/v1/amenities/{id}` | 200 / 404 |

use actix_web::{web, HttpResponse, delete, get, post, put};
use crate::core::context::AppContext;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::MessageResponse;
use crate::domain::dto::amenities::{AmenityResponse, CreateAmenityRequest, UpdateAmenityRequest};

fn amenity_not_found() -> AppError {
    AppError::NotFound("Amenity not found".to_string())
}

#[get("")]
pub async fn list_amenities(ctx: web::Data<AppContext>) -> HttpResponse {
    let amenities: Vec<AmenityResponse> = ctx
        .facade
        .get_all_amenities()
        .into_iter()
        .map(AmenityResponse::from)
        .collect();

    HttpResponse::Ok().json(amenities)
}

#[post("")]
pub async fn create_amenity(
    ctx: web::Data<AppContext>,
    payload: web::Json<CreateAmenityRequest>,
) -> AppResult<HttpResponse> {
    let amenity = ctx.facade.create_amenity(payload.into_inner())?;

    Ok(HttpResponse::Created().json(AmenityResponse::from(amenity)))
}

#[get("/{amenity_id}")]
pub async fn get_amenity(
    ctx: web::Data<AppContext>,
    amenity_id: web::Path<String>,
) -> AppResult<HttpResponse> {
    let amenity = ctx.facade.get_amenity(&amenity_id).ok_or_else(amenity_not_found)?;

    Ok(HttpResponse::Ok().json(AmenityResponse::from(amenity)))
}

#[put("/{amenity_id}")]
pub async fn update_amenity(
    ctx: web::Data<AppContext>,
    amenity_id: web::Path<String>,
    payload: web::Json<UpdateAmenityRequest>,
) -> AppResult<HttpResponse> {
    let amenity = ctx
        .facade
        .update_amenity(&amenity_id, payload.into_inner())?
        .ok_or_else(amenity_not_found)?;

    Ok(HttpResponse::Ok().json(AmenityResponse::from(amenity)))
}

/// 편의시설 삭제
///
/// 이 편의시설을 참조하는 장소는 수정되지 않습니다.
/// 장소 상세 조회 시 삭제된 편의시설은 목록에서 제외됩니다.
#[delete("/{amenity_id}")]
pub async fn delete_amenity(
    ctx: web::Data<AppContext>,
    amenity_id: web::Path<String>,
) -> AppResult<HttpResponse> {
    if !ctx.facade.delete_amenity(&amenity_id) {
        return Err(amenity_not_found());
    }

    Ok(HttpResponse::Ok().json(MessageResponse::new("Amenity deleted")))
}
