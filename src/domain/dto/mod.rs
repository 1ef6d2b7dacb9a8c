//! # Data Transfer Objects (DTO) Module
//!
//! HTTP 경계에서 주고받는 요청/응답 구조체들을 정의합니다.
//! 엔티티를 직접 직렬화하지 않고 DTO로 변환하여 API 계약을 엔티티 내부 표현과
//! 분리합니다.
//!
//! ## 구조
//!
//! ```text
//! dto/
//! ├── users/       - CreateUserRequest, UpdateUserRequest, UserResponse, OwnerSummary
//! ├── amenities/   - CreateAmenityRequest, UpdateAmenityRequest, AmenityResponse
//! ├── places/      - CreatePlaceRequest, UpdatePlaceRequest, PlaceResponse, PlaceDetailResponse
//! └── reviews/     - CreateReviewRequest, UpdateReviewRequest, ReviewResponse
//! ```
//!
//! ## 변환 패턴
//!
//! ```rust,ignore
//! let user = ctx.facade.create_user(payload.into_inner())?;
//! Ok(HttpResponse::Created().json(UserResponse::from(user)))
//! ```

pub mod users;
pub mod amenities;
pub mod places;
pub mod reviews;

pub use users::{CreateUserRequest, OwnerSummary, UpdateUserRequest, UserResponse};
pub use amenities::{AmenityResponse, CreateAmenityRequest, UpdateAmenityRequest};
pub use places::{CreatePlaceRequest, PlaceDetailResponse, PlaceResponse, UpdatePlaceRequest};
pub use reviews::{CreateReviewRequest, ReviewResponse, UpdateReviewRequest};

use serde::{Deserialize, Serialize};

/// 삭제 성공 시 반환하는 메시지 응답
///
/// ```json
/// { "message": "Review deleted" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
