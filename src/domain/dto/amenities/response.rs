use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::entities::Amenity;

/// 편의시설 응답 DTO
///
/// 목록/단건 조회뿐 아니라 장소 상세 조회의 `amenities` 배열 요소로도 사용됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmenityResponse {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Amenity> for AmenityResponse {
    fn from(amenity: Amenity) -> Self {
        Self {
            id: amenity.base.id,
            name: amenity.name,
            created_at: amenity.base.created_at,
            updated_at: amenity.base.updated_at,
        }
    }
}
