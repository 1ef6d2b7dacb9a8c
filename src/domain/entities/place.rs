//! Place Entity Implementation
//!
//! 숙소 엔티티입니다. 가격과 좌표 범위는 엔티티가 직접 검증하고,
//! `owner_id`와 `amenities`가 실제로 존재하는지는 파사드가 검증합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::core::errors::AppResult;
use crate::domain::dto::places::UpdatePlaceRequest;
use crate::domain::entities::{validate_and_normalize, BaseEntity, Entity};
use crate::utils::string_utils::trim_string;

/// 숙소 엔티티
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Place {
    #[serde(flatten)]
    pub base: BaseEntity,
    #[validate(length(min = 1, max = 100, message = "Title is required and must be 100 characters max"))]
    pub title: String,
    pub description: String,
    #[validate(range(exclusive_min = 0.0, message = "Price must be positive"))]
    pub price: f64,
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be between -180 and 180"))]
    pub longitude: f64,
    /// 소유자 [`User`](super::User)의 ID
    pub owner_id: String,
    /// [`Amenity`](super::Amenity) ID 목록
    pub amenities: Vec<String>,
}

impl Place {
    /// 새 숙소 생성
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 제목 누락/100자 초과, 가격 0 이하, 좌표 범위 초과
    pub fn new(
        title: &str,
        description: Option<String>,
        price: f64,
        latitude: f64,
        longitude: f64,
        owner_id: String,
        amenities: Vec<String>,
    ) -> AppResult<Self> {
        let mut place = Self {
            base: BaseEntity::new(),
            title: title.to_string(),
            description: description.unwrap_or_default(),
            price,
            latitude,
            longitude,
            owner_id,
            amenities,
        };

        validate_and_normalize(&mut place)?;
        Ok(place)
    }
}

impl Entity for Place {
    type Patch = UpdatePlaceRequest;

    fn base(&self) -> &BaseEntity {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseEntity {
        &mut self.base
    }

    fn attribute(&self, name: &str) -> Option<String> {
        match name {
            "id" => Some(self.base.id.clone()),
            "title" => Some(self.title.clone()),
            "description" => Some(self.description.clone()),
            "owner_id" => Some(self.owner_id.clone()),
            _ => None,
        }
    }

    fn merge(&mut self, patch: UpdatePlaceRequest) -> AppResult<()> {
        let UpdatePlaceRequest {
            title,
            description,
            price,
            latitude,
            longitude,
            owner_id,
            amenities,
        } = patch;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(price) = price {
            self.price = price;
        }
        if let Some(latitude) = latitude {
            self.latitude = latitude;
        }
        if let Some(longitude) = longitude {
            self.longitude = longitude;
        }
        if let Some(owner_id) = owner_id {
            self.owner_id = owner_id;
        }
        if let Some(amenities) = amenities {
            self.amenities = amenities;
        }

        validate_and_normalize(self)
    }

    fn normalize(&mut self) {
        self.title = trim_string(&self.title);
    }
}
