//! # 사용자 DTO 모듈
//!
//! - [`request`] - 생성/부분 업데이트 요청 본문
//! - [`response`] - 사용자 응답과 장소 상세 조회용 소유자 요약

pub mod request;
pub mod response;

pub use request::{CreateUserRequest, UpdateUserRequest};
pub use response::{OwnerSummary, UserResponse};
