use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::core::errors::AppResult;
use crate::domain::dto::reviews::UpdateReviewRequest;
use crate::domain::entities::{validate_and_normalize, BaseEntity, Entity};
use crate::utils::string_utils::trim_string;

/// 리뷰 엔티티
///
/// 평점은 1-5 사이의 정수입니다. `place_id`/`user_id`의 존재 여부는 파사드가 검증합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Review {
    #[serde(flatten)]
    pub base: BaseEntity,
    #[validate(length(min = 1, message = "Review text is required"))]
    pub text: String,
    #[validate(range(min = 1, max = 5, message = "Rating must be an integer between 1 and 5"))]
    pub rating: i64,
    pub place_id: String,
    pub user_id: String,
}

impl Review {
    pub fn new(text: &str, rating: i64, place_id: String, user_id: String) -> AppResult<Self> {
        let mut review = Self {
            base: BaseEntity::new(),
            text: text.to_string(),
            rating,
            place_id,
            user_id,
        };

        validate_and_normalize(&mut review)?;
        Ok(review)
    }
}

impl Entity for Review {
    type Patch = UpdateReviewRequest;

    fn base(&self) -> &BaseEntity {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseEntity {
        &mut self.base
    }

    fn attribute(&self, name: &str) -> Option<String> {
        match name {
            "id" => Some(self.base.id.clone()),
            "text" => Some(self.text.clone()),
            "rating" => Some(self.rating.to_string()),
            "place_id" => Some(self.place_id.clone()),
            "user_id" => Some(self.user_id.clone()),
            _ => None,
        }
    }

    fn merge(&mut self, patch: UpdateReviewRequest) -> AppResult<()> {
        if let Some(text) = patch.text {
            self.text = text;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(place_id) = patch.place_id {
            self.place_id = place_id;
        }
        if let Some(user_id) = patch.user_id {
            self.user_id = user_id;
        }

        validate_and_normalize(self)
    }

    fn normalize(&mut self) {
        self.text = trim_string(&self.text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(text: &str, rating: i64) -> AppResult<Review> {
        Review::new(text, rating, "place".to_string(), "user".to_string())
    }

    #[test]
    fn test_rating_bounds() {
        assert!(review("ok", 1).is_ok());
        assert!(review("ok", 5).is_ok());
        assert!(review("ok", 0).is_err());
        assert!(review("ok", 6).is_err());
        assert!(review("ok", 10).is_err());
    }

    #[test]
    fn test_text_required() {
        assert!(review("", 3).is_err());
        assert!(review(" \n ", 3).is_err());
        assert_eq!(review(" Great place! ", 3).unwrap().text, "Great place!");
    }

    #[test]
    fn test_merge_rejects_out_of_range_rating() {
        let mut review = review("Nice", 4).unwrap();

        assert!(review
            .merge(UpdateReviewRequest { rating: Some(0), ..Default::default() })
            .is_err());
    }
}
