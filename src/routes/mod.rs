//! # Route Table
//!
//! 모든 HTTP 엔드포인트와 JSON 추출 설정을 한 곳에서 등록합니다.
//!
//! ```text
//! /health
//! /api/v1/users       GET POST       /{id} GET PUT
//! /api/v1/amenities   GET POST       /{id} GET PUT DELETE
//! /api/v1/places      GET POST       /{id} GET PUT DELETE
//! /api/v1/reviews     GET POST       /{id} GET PUT DELETE
//!                                    /places/{place_id} GET
//! ```
//!
//! 끝의 슬래시는 `main`에서 적용하는 `NormalizePath::trim()` 미들웨어가 제거합니다.

use crate::core::errors::AppError;
use crate::handlers;
use actix_web::web;
use log::warn;
use serde_json::json;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // 잘못된 JSON 본문은 400 + {"error": "..."}
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        warn!("Rejected request body: {}", err);
        AppError::ValidationError(err.to_string()).into()
    }));

    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
    configure_amenity_routes(cfg);
    configure_place_routes(cfg);
    configure_review_routes(cfg);
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .service(handlers::users::list_users)
            .service(handlers::users::create_user)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
    );
}

fn configure_amenity_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/amenities")
            .service(handlers::amenities::list_amenities)
            .service(handlers::amenities::create_amenity)
            .service(handlers::amenities::get_amenity)
            .service(handlers::amenities::update_amenity)
            .service(handlers::amenities::delete_amenity)
    );
}

fn configure_place_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/places")
            .service(handlers::places::list_places)
            .service(handlers::places::create_place)
            .service(handlers::places::get_place)
            .service(handlers::places::update_place)
            .service(handlers::places::delete_place)
    );
}

fn configure_review_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/reviews")
            .service(handlers::reviews::list_reviews)
            .service(handlers::reviews::create_review)
            // `/{review_id}`보다 먼저 등록
            .service(handlers::reviews::list_reviews_by_place)
            .service(handlers::reviews::get_review)
            .service(handlers::reviews::update_review)
            .service(handlers::reviews::delete_review)
    );
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "hbnb_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "storage": "in-memory",
            "api_version": "v1"
        }
    }))
}
