use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::core::errors::AppResult;
use crate::domain::dto::amenities::UpdateAmenityRequest;
use crate::domain::entities::{validate_and_normalize, BaseEntity, Entity};
use crate::utils::string_utils::trim_string;

/// 편의시설 엔티티 (WiFi, 수영장 등)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Amenity {
    #[serde(flatten)]
    pub base: BaseEntity,
    #[validate(length(min = 1, max = 50, message = "Amenity name is required and must be 50 characters max"))]
    pub name: String,
}

impl Amenity {
    pub fn new(name: &str) -> AppResult<Self> {
        let mut amenity = Self {
            base: BaseEntity::new(),
            name: name.to_string(),
        };

        validate_and_normalize(&mut amenity)?;
        Ok(amenity)
    }
}

impl Entity for Amenity {
    type Patch = UpdateAmenityRequest;

    fn base(&self) -> &BaseEntity {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseEntity {
        &mut self.base
    }

    fn attribute(&self, name: &str) -> Option<String> {
        match name {
            "id" => Some(self.base.id.clone()),
            "name" => Some(self.name.clone()),
            _ => None,
        }
    }

    fn merge(&mut self, patch: UpdateAmenityRequest) -> AppResult<()> {
        if let Some(name) = patch.name {
            self.name = name;
        }

        validate_and_normalize(self)
    }

    fn normalize(&mut self) {
        self.name = trim_string(&self.name);
    }
}
