//! # Review HTTP Handlers
//!
//! | 메서드 | 경로 | 상태 코드 |
//! |--------|------|-----------|
//! | `GET` | `/api/v1/reviews` | 200 |
//! | `POST` | `/api/v1/reviews` | 201 / 400 |
//! | `GET` | `/api/v1/reviews/{id}` | 200 / 404 |
//! | `PUT` | `/api/v1/reviews/{id}` | 200 / 404 / 400 |
//! | `DELETE` | `/api/v1/reviews/{id}` | 200 / 404 |
//! | `GET` | `/api/v1/reviews/places/{place_id}` | 200 |

use actix_web::{web, HttpResponse, delete, get, post, put};
use crate::core::context::AppContext;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::MessageResponse;
use crate::domain::dto::reviews::{CreateReviewRequest, ReviewResponse, UpdateReviewRequest};
use crate::domain::entities::Review;

fn review_not_found() -> AppError {
    AppError::NotFound("Review not found".to_string())
}

fn to_responses(reviews: Vec<Review>) -> Vec<ReviewResponse> {
    reviews.into_iter().map(ReviewResponse::from).collect()
}

#[get("")]
pub async fn list_reviews(ctx: web::Data<AppContext>) -> HttpResponse {
    HttpResponse::Ok().json(to_responses(ctx.facade.get_all_reviews()))
}

/// 새 리뷰 작성
///
/// # Errors
///
/// * 400 - `Place not found`, `User not found`, 텍스트 누락, 평점이 1-5 범위 밖이거나 정수가 아님
#[post("")]
pub async fn create_review(
    ctx: web::Data<AppContext>,
    payload: web::Json<CreateReviewRequest>,
) -> AppResult<HttpResponse> {
    let review = ctx.facade.create_review(payload.into_inner())?;

    Ok(HttpResponse::Created().json(ReviewResponse::from(review)))
}

/// 특정 장소의 리뷰 목록
///
/// 존재하지 않는 장소 ID에 대해서도 빈 배열과 200을 반환합니다.
#[get("/places/{place_id}")]
pub async fn list_reviews_by_place(
    ctx: web::Data<AppContext>,
    place_id: web::Path<String>,
) -> HttpResponse {
    HttpResponse::Ok().json(to_responses(ctx.facade.get_reviews_by_place(&place_id)))
}

#[get("/{review_id}")]
pub async fn get_review(
    ctx: web::Data<AppContext>,
    review_id: web::Path<String>,
) -> AppResult<HttpResponse> {
    let review = ctx.facade.get_review(&review_id).ok_or_else(review_not_found)?;

    Ok(HttpResponse::Ok().json(ReviewResponse::from(review)))
}

#[put("/{review_id}")]
pub async fn update_review(
    ctx: web::Data<AppContext>,
    review_id: web::Path<String>,
    payload: web::Json<UpdateReviewRequest>,
) -> AppResult<HttpResponse> {
    let review = ctx
        .facade
        .update_review(&review_id, payload.into_inner())?
        .ok_or_else(review_not_found)?;

    Ok(HttpResponse::Ok().json(ReviewResponse::from(review)))
}

#[delete("/{review_id}")]
pub async fn delete_review(
    ctx: web::Data<AppContext>,
    review_id: web::Path<String>,
) -> AppResult<HttpResponse> {
    if !ctx.facade.delete_review(&review_id) {
        return Err(review_not_found());
    }

    Ok(HttpResponse::Ok().json(MessageResponse::new("Review deleted")))
}
