use serde::{Deserialize, Serialize};

/// 편의시설 생성 요청
///
/// ```json
/// { "name": "WiFi" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAmenityRequest {
    pub name: String,
}

/// 편의시설 부분 업데이트 요청
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAmenityRequest {
    pub name: Option<String>,
}
