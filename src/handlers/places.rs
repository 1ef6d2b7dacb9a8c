//! # Place HTTP Handlers
//!
//! 목록/생성/수정 응답은 평면 형태([`PlaceResponse`]),
//! 단건 조회는 소유자와 편의시설을 해석한 상세 형태([`PlaceDetailResponse`])를 반환합니다.
//!
//! [`PlaceDetailResponse`]: crate::domain::dto::places::PlaceDetailResponse

use actix_web::{web, HttpResponse, delete, get, post, put};
use crate::core::context::AppContext;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::MessageResponse;
use crate::domain::dto::places::{CreatePlaceRequest, PlaceResponse, UpdatePlaceRequest};

fn place_not_found() -> AppError {
    AppError::NotFound("Place not found".to_string())
}

#[get("")]
pub async fn list_places(ctx: web::Data<AppContext>) -> HttpResponse {
    let places: Vec<PlaceResponse> = ctx
        .facade
        .get_all_places()
        .into_iter()
        .map(PlaceResponse::from)
        .collect();

    HttpResponse::Ok().json(places)
}

/// 새 장소 생성
///
/// # Errors
///
/// * 400 - `Owner not found`, `Amenity {id} not found`, 가격/좌표/제목 검증 실패
#[post("")]
pub async fn create_place(
    ctx: web::Data<AppContext>,
    payload: web::Json<CreatePlaceRequest>,
) -> AppResult<HttpResponse> {
    let place = ctx.facade.create_place(payload.into_inner())?;

    Ok(HttpResponse::Created().json(PlaceResponse::from(place)))
}

#[get("/{place_id}")]
pub async fn get_place(
    ctx: web::Data<AppContext>,
    place_id: web::Path<String>,
) -> AppResult<HttpResponse> {
    let detail = ctx.facade.get_place(&place_id).ok_or_else(place_not_found)?;

    Ok(HttpResponse::Ok().json(detail))
}

#[put("/{place_id}")]
pub async fn update_place(
    ctx: web::Data<AppContext>,
    place_id: web::Path<String>,
    payload: web::Json<UpdatePlaceRequest>,
) -> AppResult<HttpResponse> {
    let place = ctx
        .facade
        .update_place(&place_id, payload.into_inner())?
        .ok_or_else(place_not_found)?;

    Ok(HttpResponse::Ok().json(PlaceResponse::from(place)))
}

#[delete("/{place_id}")]
pub async fn delete_place(
    ctx: web::Data<AppContext>,
    place_id: web::Path<String>,
) -> AppResult<HttpResponse> {
    if !ctx.facade.delete_place(&place_id) {
        return Err(place_not_found());
    }

    Ok(HttpResponse::Ok().json(MessageResponse::new("Place deleted")))
}
