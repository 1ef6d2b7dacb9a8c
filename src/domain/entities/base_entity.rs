//! 모든 엔티티가 공유하는 식별자와 타임스탬프

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 엔티티 공통 필드
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseEntity {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BaseEntity {
    /// 새 UUID v4 식별자와 현재 시각으로 초기화합니다.
    pub fn new() -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4().to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// 수정 시각을 현재 시각으로 갱신합니다.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for BaseEntity {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let a = BaseEntity::new();
        let b = BaseEntity::new();

        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
        assert_eq!(a.created_at, a.updated_at);
    }

    #[test]
    fn test_touch_keeps_id_and_created_at() {
        let mut base = BaseEntity::new();
        let (id, created_at) = (base.id.clone(), base.created_at);

        base.touch();

        assert_eq!(base.id, id);
        assert_eq!(base.created_at, created_at);
        assert!(base.updated_at >= created_at);
    }
}
