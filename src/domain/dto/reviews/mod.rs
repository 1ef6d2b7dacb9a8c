//! # 리뷰 DTO 모듈

pub mod request;
pub mod response;

pub use request::{CreateReviewRequest, UpdateReviewRequest};
pub use response::ReviewResponse;
