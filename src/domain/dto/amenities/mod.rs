//! # 편의시설 DTO 모듈

pub mod request;
pub mod response;

pub use request::{CreateAmenityRequest, UpdateAmenityRequest};
pub use response::AmenityResponse;
