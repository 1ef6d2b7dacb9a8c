//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 파사드 호출로 변환하고 결과를 JSON으로 직렬화하는 핸들러 함수들입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈)                 ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   HbnbFacade                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   InMemoryRepository<T>             ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities                          ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 공통 규칙
//!
//! - 공유 상태는 `web::Data<AppContext>` 추출자로 받습니다.
//! - 생성은 201, 조회/수정/삭제는 200을 반환합니다.
//! - 파사드가 `None`을 반환하면 `AppError::NotFound`(404)로 변환합니다.
//! - 파사드의 `AppError::ValidationError`는 `?`로 그대로 전파되어 400이 됩니다.
//! - 삭제 성공 응답은 `{"message": "<Entity> deleted"}` 형태입니다.
//!
//! ## 모듈 구성
//!
//! - [`users`] - `/api/v1/users`
//! - [`amenities`] - `/api/v1/amenities`
//! - [`places`] - `/api/v1/places`
//! - [`reviews`] - `/api/v1/reviews`

pub mod users;
pub mod amenities;
pub mod places;
pub mod reviews;
