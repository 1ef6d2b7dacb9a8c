//! # Core Module
//!
//! 애플리케이션 전역에서 사용하는 공유 상태와 에러 타입을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`context`] - 애플리케이션 컨텍스트
//! - **AppContext**: 파사드를 소유하는 공유 상태
//! - **주입 방식**: `main`에서 한 번 생성하여 `web::Data`로 핸들러에 전달
//! - **수명**: 프로세스 시작부터 종료까지
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현 (`{"error": "..."}` 본문)
//! - **자동 변환**: `validator::ValidationErrors` → `AppError::ValidationError`
//!
//! ## 에러 처리
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! #[get("/{id}")]
//! async fn get_amenity(
//!     ctx: web::Data<AppContext>,
//!     path: web::Path<String>,
//! ) -> AppResult<HttpResponse> {
//!     let amenity = ctx
//!         .facade
//!         .get_amenity(&path)
//!         .ok_or_else(|| AppError::NotFound("Amenity not found".to_string()))?;
//!
//!     Ok(HttpResponse::Ok().json(AmenityResponse::from(amenity)))
//! }
//! ```

pub mod context;
pub mod errors;

pub use context::AppContext;
pub use errors::*;
