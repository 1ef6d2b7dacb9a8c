use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::entities::Review;

/// 리뷰 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewResponse {
    pub id: String,
    pub text: String,
    pub rating: i64,
    pub place_id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        let Review {
            base,
            text,
            rating,
            place_id,
            user_id,
        } = review;

        Self {
            id: base.id,
            text,
            rating,
            place_id,
            user_id,
            created_at: base.created_at,
            updated_at: base.updated_at,
        }
    }
}
