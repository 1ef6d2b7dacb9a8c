use serde::{Deserialize, Serialize};

/// 리뷰 생성 요청
///
/// `rating`은 정수여야 합니다. `4.5`처럼 소수를 보내면 JSON 역직렬화 단계에서
/// 거부되어 400 응답이 반환됩니다.
///
/// ```json
/// {
///   "text": "Great place!",
///   "rating": 5,
///   "place_id": "0b6f...",
///   "user_id": "9c1e..."
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReviewRequest {
    pub text: String,
    pub rating: i64,
    pub place_id: String,
    pub user_id: String,
}

/// 리뷰 부분 업데이트 요청
///
/// `place_id`/`user_id`를 변경하는 경우 파사드가 참조 대상의 존재를 다시 확인합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateReviewRequest {
    pub text: Option<String>,
    pub rating: Option<i64>,
    pub place_id: Option<String>,
    pub user_id: Option<String>,
}
