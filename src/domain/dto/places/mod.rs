//! # 장소 DTO 모듈
//!
//! 장소는 두 가지 응답 형태를 가집니다.
//!
//! | 형태 | 타입 | 사용처 |
//! |------|------|--------|
//! | 평면 | [`PlaceResponse`] | 목록 조회, 생성/수정 응답 (`owner_id`, 편의시설 ID 배열) |
//! | 상세 | [`PlaceDetailResponse`] | 단건 조회 (소유자 요약, 편의시설 객체 배열) |

pub mod request;
pub mod response;

pub use request::{CreatePlaceRequest, UpdatePlaceRequest};
pub use response::{PlaceDetailResponse, PlaceResponse};
