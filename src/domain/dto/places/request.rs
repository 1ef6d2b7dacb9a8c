use serde::{Deserialize, Serialize};

/// 장소 생성 요청
///
/// # JSON 예제
///
/// ```json
/// {
///   "title": "Nice flat",
///   "description": "Close to the Seine",
///   "price": 80.0,
///   "latitude": 48.85,
///   "longitude": 2.35,
///   "owner_id": "9c1e...",
///   "amenities": ["0b6f..."]
/// }
/// ```
///
/// `description`이 없거나 `null`이면 빈 문자열, `amenities`가 없으면 빈 배열로 처리됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaceRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub owner_id: String,
    #[serde(default)]
    pub amenities: Vec<String>,
}

/// 장소 부분 업데이트 요청
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePlaceRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub owner_id: Option<String>,
    pub amenities: Option<Vec<String>>,
}
