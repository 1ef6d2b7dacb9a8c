use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::dto::amenities::AmenityResponse;
use crate::domain::dto::users::OwnerSummary;
use crate::domain::entities::{Amenity, Place, User};

/// 장소 평면 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub owner_id: String,
    pub amenities: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Place> for PlaceResponse {
    fn from(place: Place) -> Self {
        let Place {
            base,
            title,
            description,
            price,
            latitude,
            longitude,
            owner_id,
            amenities,
        } = place;

        Self {
            id: base.id,
            title,
            description,
            price,
            latitude,
            longitude,
            owner_id,
            amenities,
            created_at: base.created_at,
            updated_at: base.updated_at,
        }
    }
}

/// 장소 상세 응답 DTO
///
/// `owner_id`와 편의시설 ID 배열 대신 조회된 객체를 포함합니다.
///
/// - `owner`: 소유자가 삭제되었거나 존재하지 않으면 `null`
/// - `amenities`: 더 이상 존재하지 않는 편의시설 ID는 결과에서 제외
///
/// ```json
/// {
///   "id": "...",
///   "title": "Nice flat",
///   "owner": { "id": "...", "first_name": "Alice", "last_name": "Dupont", "email": "alice@test.com" },
///   "amenities": [ { "id": "...", "name": "WiFi", "created_at": "...", "updated_at": "..." } ],
///   ...
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceDetailResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub owner: Option<OwnerSummary>,
    pub amenities: Vec<AmenityResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PlaceDetailResponse {
    /// 장소와 이미 조회된 소유자/편의시설로 상세 응답을 구성합니다.
    pub fn new(place: Place, owner: Option<&User>, amenities: Vec<Amenity>) -> Self {
        Self {
            id: place.base.id,
            title: place.title,
            description: place.description,
            price: place.price,
            latitude: place.latitude,
            longitude: place.longitude,
            owner: owner.map(OwnerSummary::from),
            amenities: amenities.into_iter().map(AmenityResponse::from).collect(),
            created_at: place.base.created_at,
            updated_at: place.base.updated_at,
        }
    }
}
