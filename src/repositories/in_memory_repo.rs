//! # 인메모리 리포지토리 구현
//!
//! 엔티티 종류와 무관하게 동작하는 제네릭 키-값 저장소입니다.
//! 프로세스 메모리에만 존재하며 재시작 시 모든 데이터가 사라집니다.
//!
//! ## 저장 구조
//!
//! ```text
//! RwLock<Storage<T>>
//! ├── items: HashMap<id, T>   - ID 기반 O(1) 조회
//! └── order: Vec<id>          - 삽입 순서 (목록 조회 순서)
//! ```
//!
//! ## 동시성
//!
//! 모든 연산은 하나의 `RwLock` 아래에서 원자적으로 수행됩니다.
//! 읽기 연산은 동시에 진행될 수 있고, 쓰기 연산은 배타적으로 실행됩니다.
//! 다른 스레드가 락을 잡은 채 패닉한 경우에도 저장소 자체는 항상
//! 일관된 상태이므로 오염된 락을 복구하여 계속 사용합니다.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use crate::core::errors::AppResult;
use crate::domain::entities::Entity;

#[derive(Debug)]
struct Storage<T> {
    items: HashMap<String, T>,
    order: Vec<String>,
}

impl<T> Default for Storage<T> {
    fn default() -> Self {
        Self {
            items: HashMap::new(),
            order: Vec::new(),
        }
    }
}

/// 엔티티 ID를 키로 하는 스레드 안전 인메모리 저장소
///
/// # 예제
///
/// ```rust,ignore
/// let repo: InMemoryRepository<Amenity> = InMemoryRepository::new();
///
/// let wifi = Amenity::new("WiFi")?;
/// let id = wifi.base.id.clone();
/// repo.add(wifi);
///
/// let found = repo.get(&id);
/// let by_name = repo.get_by_attribute("name", "WiFi");
/// ```
#[derive(Debug)]
pub struct InMemoryRepository<T: Entity> {
    storage: RwLock<Storage<T>>,
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            storage: RwLock::new(Storage::default()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Storage<T>> {
        self.storage.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Storage<T>> {
        self.storage.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// 엔티티 저장
    ///
    /// 같은 ID가 이미 있으면 덮어쓰며, 이 경우 목록 순서는 처음 삽입된 위치를 유지합니다.
    /// ID는 UUID v4로 발급되므로 정상 흐름에서는 충돌하지 않습니다.
    pub fn add(&self, entity: T) -> T {
        let mut storage = self.write();
        let id = entity.id().to_string();

        if storage.items.insert(id.clone(), entity.clone()).is_none() {
            storage.order.push(id);
        }
        entity
    }

    pub fn get(&self, id: &str) -> Option<T> {
        self.read().items.get(id).cloned()
    }

    /// 저장된 모든 엔티티를 삽입 순서대로 반환
    pub fn get_all(&self) -> Vec<T> {
        let storage = self.read();

        storage
            .order
            .iter()
            .filter_map(|id| storage.items.get(id).cloned())
            .collect()
    }

    /// 지정한 속성 값이 일치하는 첫 번째 엔티티 (삽입 순서 기준)
    pub fn get_by_attribute(&self, name: &str, value: &str) -> Option<T> {
        self.find_first(|entity| entity.attribute(name).as_deref() == Some(value))
    }

    pub fn find_first<F>(&self, predicate: F) -> Option<T>
    where
        F: Fn(&T) -> bool,
    {
        let storage = self.read();

        storage
            .order
            .iter()
            .filter_map(|id| storage.items.get(id))
            .find(|entity| predicate(entity))
            .cloned()
    }

    /// 부분 업데이트
    ///
    /// 저장된 엔티티의 복제본에 패치를 적용하고 검증이 통과하면
    /// `updated_at`을 갱신한 뒤 교체합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(T))` - 업데이트된 엔티티
    /// * `Ok(None)` - 해당 ID의 엔티티가 없는 경우
    /// * `Err(AppError::ValidationError)` - 패치 적용 결과가 유효하지 않은 경우 (저장소 변경 없음)
    pub fn update(&self, id: &str, patch: T::Patch) -> AppResult<Option<T>> {
        let mut storage = self.write();

        let Some(current) = storage.items.get(id) else {
            return Ok(None);
        };

        let mut updated = current.clone();
        updated.merge(patch)?;
        updated.base_mut().touch();

        storage.items.insert(id.to_string(), updated.clone());
        Ok(Some(updated))
    }

    /// 엔티티 삭제. 존재하지 않으면 `false`
    pub fn delete(&self, id: &str) -> bool {
        let mut storage = self.write();

        if storage.items.remove(id).is_none() {
            return false;
        }

        storage.order.retain(|existing| existing != id);
        true
    }

    pub fn len(&self) -> usize {
        self.read().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::amenities::UpdateAmenityRequest;
    use crate::domain::entities::Amenity;
    use std::sync::Arc;
    use std::thread;

    fn seeded(names: &[&str]) -> (InMemoryRepository<Amenity>, Vec<String>) {
        let repo = InMemoryRepository::new();
        let ids = names
            .iter()
            .map(|name| repo.add(Amenity::new(name).unwrap()).base.id)
            .collect();
        (repo, ids)
    }

    #[test]
    fn test_add_and_get() {
        let (repo, ids) = seeded(&["WiFi"]);

        let found = repo.get(&ids[0]).unwrap();
        assert_eq!(found.name, "WiFi");
        assert!(repo.get("missing").is_none());
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_add_overwrites_same_id() {
        let (repo, _) = seeded(&["Sauna"]);
        let mut amenity = Amenity::new("WiFi").unwrap();

        repo.add(amenity.clone());
        amenity.name = "Fast WiFi".to_string();
        repo.add(amenity.clone());

        assert_eq!(repo.len(), 2);
        assert_eq!(repo.get(&amenity.base.id).unwrap().name, "Fast WiFi");
        let names: Vec<String> = repo.get_all().into_iter().map(|a| a.name).collect();
        assert_eq!(names, vec!["Sauna", "Fast WiFi"]);
    }

    #[test]
    fn test_get_all_preserves_insertion_order() {
        let (repo, ids) = seeded(&["WiFi", "Pool", "Parking"]);

        repo.delete(&ids[1]);
        let names: Vec<String> = repo.get_all().into_iter().map(|a| a.name).collect();

        assert_eq!(names, vec!["WiFi", "Parking"]);
    }

    #[test]
    fn test_get_by_attribute() {
        let (repo, ids) = seeded(&["WiFi", "Pool"]);

        assert_eq!(repo.get_by_attribute("name", "Pool").unwrap().base.id, ids[1]);
        assert!(repo.get_by_attribute("name", "Sauna").is_none());
        assert!(repo.get_by_attribute("unknown", "Pool").is_none());
    }

    #[test]
    fn test_update_touches_updated_at() {
        let (repo, ids) = seeded(&["WiFi"]);
        let before = repo.get(&ids[0]).unwrap();

        let updated = repo
            .update(&ids[0], UpdateAmenityRequest { name: Some("Fast WiFi".to_string()) })
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "Fast WiFi");
        assert_eq!(updated.base.created_at, before.base.created_at);
        assert!(updated.base.updated_at >= before.base.updated_at);
        assert_eq!(repo.get(&ids[0]).unwrap().name, "Fast WiFi");
    }

    #[test]
    fn test_rejected_update_leaves_store_unchanged() {
        let (repo, ids) = seeded(&["WiFi"]);

        let result = repo.update(&ids[0], UpdateAmenityRequest { name: Some("".to_string()) });

        assert!(result.is_err());
        assert_eq!(repo.get(&ids[0]).unwrap().name, "WiFi");
    }

    #[test]
    fn test_update_and_delete_missing() {
        let repo: InMemoryRepository<Amenity> = InMemoryRepository::new();

        assert!(repo.update("missing", UpdateAmenityRequest::default()).unwrap().is_none());
        assert!(!repo.delete("missing"));
    }

    #[test]
    fn test_delete() {
        let (repo, ids) = seeded(&["WiFi"]);

        assert!(repo.delete(&ids[0]));
        assert!(!repo.delete(&ids[0]));
        assert!(repo.is_empty());
    }

    #[test]
    fn test_concurrent_adds() {
        let repo = Arc::new(InMemoryRepository::<Amenity>::new());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let repo = Arc::clone(&repo);
                thread::spawn(move || {
                    for j in 0..25 {
                        repo.add(Amenity::new(&format!("amenity-{}-{}", i, j)).unwrap());
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(repo.len(), 200);
        assert_eq!(repo.get_all().len(), 200);
    }
}
