//! # HBnB 파사드 구현
//!
//! 네 개의 리포지토리를 소유하고 엔티티 단위 CRUD 연산을 제공하는 단일 조정 지점입니다.
//! 엔티티 하나만 보고는 판단할 수 없는 규칙을 이곳에서 검사합니다.
//!
//! ## 파사드가 검사하는 규칙
//!
//! | 연산 | 규칙 | 실패 메시지 |
//! |------|------|-------------|
//! | 사용자 생성/수정 | 이메일 전역 유일 (대소문자 무시) | `Email already registered` |
//! | 장소 생성/수정 | 소유자 존재 | `Owner not found` |
//! | 장소 생성/수정 | 모든 편의시설 존재 | `Amenity {id} not found` |
//! | 리뷰 생성/수정 | 장소 존재 | `Place not found` |
//! | 리뷰 생성/수정 | 작성자 존재 | `User not found` |
//!
//! 모든 규칙 위반은 `AppError::ValidationError`(400)로 보고됩니다.
//! 조회 경로의 "없음"은 `None`으로 반환되며 HTTP 경계에서 404로 변환됩니다.
//!
//! ## 삭제 정책
//!
//! 삭제는 연쇄되지 않습니다. 편의시설이 삭제되어도 장소의 `amenities` 목록에는
//! ID가 남으며, 상세 조회 시점에 해석되지 않는 ID는 조용히 제외됩니다.

use log::{debug, info, warn};
use crate::core::errors::{AppError, AppResult};
use crate::domain::{
    dto::{
        CreateAmenityRequest, CreatePlaceRequest, CreateReviewRequest, CreateUserRequest,
        PlaceDetailResponse, UpdateAmenityRequest, UpdatePlaceRequest, UpdateReviewRequest,
        UpdateUserRequest,
    },
    entities::{Amenity, Entity, Place, Review, User},
};
use crate::repositories::InMemoryRepository;
use crate::utils::string_utils::normalize_email;

/// 사용자/편의시설/장소/리뷰 리포지토리를 묶는 파사드
///
/// 프로세스 시작 시 한 번 생성되어 [`AppContext`](crate::core::context::AppContext)를 통해
/// 모든 핸들러에 공유됩니다. 모든 메서드는 동기 함수이며 대기하지 않습니다.
#[derive(Debug, Default)]
pub struct HbnbFacade {
    user_repo: InMemoryRepository<User>,
    amenity_repo: InMemoryRepository<Amenity>,
    place_repo: InMemoryRepository<Place>,
    review_repo: InMemoryRepository<Review>,
}

impl HbnbFacade {
    pub fn new() -> Self {
        Self::default()
    }

    // ---------------------------------------------------------------
    // Users
    // ---------------------------------------------------------------

    /// 사용자 생성
    ///
    /// 이메일 중복 검사와 저장은 서로 다른 잠금 구간에서 수행됩니다. 같은 이메일로
    /// 동시에 들어온 요청은 둘 다 저장될 수 있으므로, 유일성은 요청이 하나씩
    /// 처리될 때만 보장됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 필드 검증 실패 또는 이미 등록된 이메일
    pub fn create_user(&self, request: CreateUserRequest) -> AppResult<User> {
        let email = normalize_email(&request.email);

        if self.user_repo.get_by_attribute("email", &email).is_some() {
            warn!("Rejected user creation: email already registered ({})", email);
            return Err(AppError::ValidationError("Email already registered".to_string()));
        }

        let user = User::new(&request.first_name, &request.last_name, &email, request.is_admin)
            .inspect_err(|e| warn!("Rejected user creation: {}", e))?;
        let user = self.user_repo.add(user);

        info!("User created: {}", user.base.id);
        Ok(user)
    }

    pub fn get_user(&self, user_id: &str) -> Option<User> {
        debug!("Looking up user {}", user_id);
        self.user_repo.get(user_id)
    }

    pub fn get_all_users(&self) -> Vec<User> {
        self.user_repo.get_all()
    }

    /// 사용자 부분 업데이트
    ///
    /// 새 이메일이 **다른** 사용자의 이메일과 같으면 거부합니다.
    /// 자기 자신의 이메일을 그대로 보내는 것은 허용됩니다.
    /// [`create_user`](Self::create_user)와 마찬가지로 동시 요청 사이의 유일성은
    /// 보장하지 않습니다.
    pub fn update_user(&self, user_id: &str, patch: UpdateUserRequest) -> AppResult<Option<User>> {
        if let Some(email) = patch.email.as_deref() {
            let email = normalize_email(email);
            let taken = self
                .user_repo
                .find_first(|user| user.email == email && user.id() != user_id)
                .is_some();

            if taken {
                warn!("Rejected update of user {}: email already registered", user_id);
                return Err(AppError::ValidationError("Email already registered".to_string()));
            }
        }

        let updated = self
            .user_repo
            .update(user_id, patch)
            .inspect_err(|e| warn!("Rejected update of user {}: {}", user_id, e))?;

        if updated.is_some() {
            info!("User updated: {}", user_id);
        }
        Ok(updated)
    }

    // ---------------------------------------------------------------
    // Amenities
    // ---------------------------------------------------------------

    pub fn create_amenity(&self, request: CreateAmenityRequest) -> AppResult<Amenity> {
        let amenity = Amenity::new(&request.name)
            .inspect_err(|e| warn!("Rejected amenity creation: {}", e))?;
        let amenity = self.amenity_repo.add(amenity);

        info!("Amenity created: {} ({})", amenity.base.id, amenity.name);
        Ok(amenity)
    }

    pub fn get_amenity(&self, amenity_id: &str) -> Option<Amenity> {
        debug!("Looking up amenity {}", amenity_id);
        self.amenity_repo.get(amenity_id)
    }

    pub fn get_all_amenities(&self) -> Vec<Amenity> {
        self.amenity_repo.get_all()
    }

    pub fn update_amenity(
        &self,
        amenity_id: &str,
        patch: UpdateAmenityRequest,
    ) -> AppResult<Option<Amenity>> {
        let updated = self
            .amenity_repo
            .update(amenity_id, patch)
            .inspect_err(|e| warn!("Rejected update of amenity {}: {}", amenity_id, e))?;

        if updated.is_some() {
            info!("Amenity updated: {}", amenity_id);
        }
        Ok(updated)
    }

    pub fn delete_amenity(&self, amenity_id: &str) -> bool {
        let deleted = self.amenity_repo.delete(amenity_id);
        if deleted {
            info!("Amenity deleted: {}", amenity_id);
        }
        deleted
    }

    // ---------------------------------------------------------------
    // Places
    // ---------------------------------------------------------------

    fn ensure_owner_exists(&self, owner_id: &str) -> AppResult<()> {
        if self.user_repo.get(owner_id).is_none() {
            warn!("Rejected place: owner {} not found", owner_id);
            return Err(AppError::ValidationError("Owner not found".to_string()));
        }
        Ok(())
    }

    fn ensure_amenities_exist(&self, amenity_ids: &[String]) -> AppResult<()> {
        if let Some(missing) = amenity_ids
            .iter()
            .find(|id| self.amenity_repo.get(id).is_none())
        {
            warn!("Rejected place: amenity {} not found", missing);
            return Err(AppError::ValidationError(format!("Amenity {} not found", missing)));
        }
        Ok(())
    }

    /// 장소 생성
    ///
    /// 소유자와 편의시설 참조를 먼저 확인한 뒤 엔티티 필드를 검증합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - `Owner not found`, `Amenity {id} not found`,
    ///   또는 가격/좌표/제목 검증 실패
    pub fn create_place(&self, request: CreatePlaceRequest) -> AppResult<Place> {
        let CreatePlaceRequest {
            title,
            description,
            price,
            latitude,
            longitude,
            owner_id,
            amenities,
        } = request;

        self.ensure_owner_exists(&owner_id)?;
        self.ensure_amenities_exist(&amenities)?;

        let place = Place::new(&title, description, price, latitude, longitude, owner_id, amenities)
            .inspect_err(|e| warn!("Rejected place creation: {}", e))?;
        let place = self.place_repo.add(place);

        info!("Place created: {} (owner {})", place.base.id, place.owner_id);
        Ok(place)
    }

    /// 장소 상세 조회
    ///
    /// 소유자는 요약 정보로, 편의시설은 객체로 해석하여 반환합니다.
    /// 삭제된 소유자는 `null`, 해석되지 않는 편의시설 ID는 결과에서 제외됩니다.
    pub fn get_place(&self, place_id: &str) -> Option<PlaceDetailResponse> {
        debug!("Looking up place {}", place_id);
        let place = self.place_repo.get(place_id)?;

        let owner = self.user_repo.get(&place.owner_id);
        let amenities = place
            .amenities
            .iter()
            .filter_map(|id| self.amenity_repo.get(id))
            .collect();

        Some(PlaceDetailResponse::new(place, owner.as_ref(), amenities))
    }

    pub fn get_all_places(&self) -> Vec<Place> {
        self.place_repo.get_all()
    }

    /// 장소 부분 업데이트
    ///
    /// 패치가 `owner_id`나 `amenities`를 변경하는 경우 참조 대상을 다시 확인합니다.
    pub fn update_place(&self, place_id: &str, patch: UpdatePlaceRequest) -> AppResult<Option<Place>> {
        if self.place_repo.get(place_id).is_none() {
            return Ok(None);
        }

        if let Some(owner_id) = patch.owner_id.as_deref() {
            self.ensure_owner_exists(owner_id)?;
        }
        if let Some(amenities) = patch.amenities.as_deref() {
            self.ensure_amenities_exist(amenities)?;
        }

        let updated = self
            .place_repo
            .update(place_id, patch)
            .inspect_err(|e| warn!("Rejected update of place {}: {}", place_id, e))?;

        if updated.is_some() {
            info!("Place updated: {}", place_id);
        }
        Ok(updated)
    }

    pub fn delete_place(&self, place_id: &str) -> bool {
        let deleted = self.place_repo.delete(place_id);
        if deleted {
            info!("Place deleted: {}", place_id);
        }
        deleted
    }

    // ---------------------------------------------------------------
    // Reviews
    // ---------------------------------------------------------------

    fn ensure_review_refs(&self, place_id: Option<&str>, user_id: Option<&str>) -> AppResult<()> {
        if let Some(place_id) = place_id {
            if self.place_repo.get(place_id).is_none() {
                warn!("Rejected review: place {} not found", place_id);
                return Err(AppError::ValidationError("Place not found".to_string()));
            }
        }
        if let Some(user_id) = user_id {
            if self.user_repo.get(user_id).is_none() {
                warn!("Rejected review: user {} not found", user_id);
                return Err(AppError::ValidationError("User not found".to_string()));
            }
        }
        Ok(())
    }

    /// 리뷰 생성
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - `Place not found`, `User not found`,
    ///   또는 텍스트/평점 검증 실패
    pub fn create_review(&self, request: CreateReviewRequest) -> AppResult<Review> {
        self.ensure_review_refs(Some(&request.place_id), Some(&request.user_id))?;

        let review = Review::new(&request.text, request.rating, request.place_id, request.user_id)
            .inspect_err(|e| warn!("Rejected review creation: {}", e))?;
        let review = self.review_repo.add(review);

        info!("Review created: {} (place {})", review.base.id, review.place_id);
        Ok(review)
    }

    pub fn get_review(&self, review_id: &str) -> Option<Review> {
        debug!("Looking up review {}", review_id);
        self.review_repo.get(review_id)
    }

    pub fn get_all_reviews(&self) -> Vec<Review> {
        self.review_repo.get_all()
    }

    /// 특정 장소의 리뷰 목록 (삽입 순서)
    ///
    /// 장소가 존재하지 않아도 빈 목록을 반환합니다.
    pub fn get_reviews_by_place(&self, place_id: &str) -> Vec<Review> {
        self.review_repo
            .get_all()
            .into_iter()
            .filter(|review| review.place_id == place_id)
            .collect()
    }

    pub fn update_review(&self, review_id: &str, patch: UpdateReviewRequest) -> AppResult<Option<Review>> {
        if self.review_repo.get(review_id).is_none() {
            return Ok(None);
        }

        self.ensure_review_refs(patch.place_id.as_deref(), patch.user_id.as_deref())?;

        let updated = self
            .review_repo
            .update(review_id, patch)
            .inspect_err(|e| warn!("Rejected update of review {}: {}", review_id, e))?;

        if updated.is_some() {
            info!("Review updated: {}", review_id);
        }
        Ok(updated)
    }

    pub fn delete_review(&self, review_id: &str) -> bool {
        let deleted = self.review_repo.delete(review_id);
        if deleted {
            info!("Review deleted: {}", review_id);
        }
        deleted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_request(email: &str) -> CreateUserRequest {
        CreateUserRequest {
            first_name: "Alice".to_string(),
            last_name: "Dupont".to_string(),
            email: email.to_string(),
            is_admin: false,
        }
    }

    fn place_request(owner_id: &str, amenities: Vec<String>) -> CreatePlaceRequest {
        CreatePlaceRequest {
            title: "Nice flat".to_string(),
            description: None,
            price: 80.0,
            latitude: 48.85,
            longitude: 2.35,
            owner_id: owner_id.to_string(),
            amenities,
        }
    }

    fn review_request(place_id: &str, user_id: &str, rating: i64) -> CreateReviewRequest {
        CreateReviewRequest {
            text: "Great place!".to_string(),
            rating,
            place_id: place_id.to_string(),
            user_id: user_id.to_string(),
        }
    }

    fn amenity(facade: &HbnbFacade, name: &str) -> Amenity {
        facade
            .create_amenity(CreateAmenityRequest { name: name.to_string() })
            .unwrap()
    }

    #[test]
    fn test_create_user_rejects_duplicate_email_case_insensitive() {
        let facade = HbnbFacade::new();

        facade.create_user(user_request("alice@test.com")).unwrap();
        let result = facade.create_user(user_request("ALICE@Test.com"));

        assert_eq!(
            result.unwrap_err(),
            AppError::ValidationError("Email already registered".to_string())
        );
        assert_eq!(facade.get_all_users().len(), 1);
    }

    #[test]
    fn test_create_user_rejects_padded_email() {
        let facade = HbnbFacade::new();

        let result = facade.create_user(user_request(" alice@test.com "));

        assert!(matches!(result, Err(AppError::ValidationError(msg)) if msg.contains("Invalid email format")));
        assert!(facade.get_all_users().is_empty());
    }

    #[test]
    fn test_update_user_email_collision() {
        let facade = HbnbFacade::new();
        let alice = facade.create_user(user_request("alice@test.com")).unwrap();
        let bob = facade.create_user(user_request("bob@test.com")).unwrap();

        let taken = facade.update_user(
            &bob.base.id,
            UpdateUserRequest { email: Some("Alice@test.com".to_string()), ..Default::default() },
        );
        assert!(taken.is_err());

        let same = facade.update_user(
            &alice.base.id,
            UpdateUserRequest { email: Some("alice@test.com".to_string()), ..Default::default() },
        );
        assert!(same.unwrap().is_some());
    }

    #[test]
    fn test_update_user_missing_returns_none() {
        let facade = HbnbFacade::new();

        let result = facade.update_user("missing", UpdateUserRequest::default()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_create_place_reference_checks() {
        let facade = HbnbFacade::new();
        let owner = facade.create_user(user_request("owner@test.com")).unwrap();

        let no_owner = facade.create_place(place_request("ghost", vec![]));
        assert_eq!(
            no_owner.unwrap_err(),
            AppError::ValidationError("Owner not found".to_string())
        );

        let no_amenity = facade.create_place(place_request(&owner.base.id, vec!["nope".to_string()]));
        assert_eq!(
            no_amenity.unwrap_err(),
            AppError::ValidationError("Amenity nope not found".to_string())
        );

        assert!(facade.get_all_places().is_empty());
    }

    #[test]
    fn test_get_place_detail_resolves_and_drops_dangling_refs() {
        let facade = HbnbFacade::new();
        let owner = facade.create_user(user_request("alice@test.com")).unwrap();
        let wifi = amenity(&facade, "WiFi");
        let pool = amenity(&facade, "Pool");

        let place = facade
            .create_place(place_request(&owner.base.id, vec![wifi.base.id.clone(), pool.base.id.clone()]))
            .unwrap();

        let detail = facade.get_place(&place.base.id).unwrap();
        assert_eq!(detail.owner.as_ref().unwrap().email, "alice@test.com");
        assert_eq!(detail.amenities.len(), 2);

        assert!(facade.delete_amenity(&pool.base.id));
        let detail = facade.get_place(&place.base.id).unwrap();
        let names: Vec<&str> = detail.amenities.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["WiFi"]);

        assert!(facade.get_place("missing").is_none());
    }

    #[test]
    fn test_update_place_rechecks_owner_and_keeps_store_on_invalid_price() {
        let facade = HbnbFacade::new();
        let owner = facade.create_user(user_request("alice@test.com")).unwrap();
        let place = facade.create_place(place_request(&owner.base.id, vec![])).unwrap();

        let bad_owner = facade.update_place(
            &place.base.id,
            UpdatePlaceRequest { owner_id: Some("ghost".to_string()), ..Default::default() },
        );
        assert!(bad_owner.is_err());

        let bad_price = facade.update_place(
            &place.base.id,
            UpdatePlaceRequest { price: Some(-1.0), ..Default::default() },
        );
        assert!(bad_price.is_err());

        let stored = facade.get_all_places().pop().unwrap();
        assert_eq!(stored.price, 80.0);
        assert_eq!(stored.owner_id, owner.base.id);
    }

    #[test]
    fn test_update_place_rechecks_amenities_and_keeps_store() {
        let facade = HbnbFacade::new();
        let owner = facade.create_user(user_request("alice@test.com")).unwrap();
        let wifi = amenity(&facade, "WiFi");
        let place = facade
            .create_place(place_request(&owner.base.id, vec![wifi.base.id.clone()]))
            .unwrap();

        let result = facade.update_place(
            &place.base.id,
            UpdatePlaceRequest { amenities: Some(vec!["ghost".to_string()]), ..Default::default() },
        );
        assert_eq!(
            result.unwrap_err(),
            AppError::ValidationError("Amenity ghost not found".to_string())
        );

        let stored = facade.get_all_places().pop().unwrap();
        assert_eq!(stored.amenities, vec![wifi.base.id.clone()]);
    }

    #[test]
    fn test_update_place_missing_returns_none_before_reference_checks() {
        let facade = HbnbFacade::new();

        let result = facade.update_place(
            "missing",
            UpdatePlaceRequest { owner_id: Some("ghost".to_string()), ..Default::default() },
        );
        assert!(result.unwrap().is_none());
    }

    #[test]
    fn test_create_review_reference_checks() {
        let facade = HbnbFacade::new();
        let user = facade.create_user(user_request("alice@test.com")).unwrap();
        let place = facade.create_place(place_request(&user.base.id, vec![])).unwrap();

        assert_eq!(
            facade.create_review(review_request("ghost", &user.base.id, 5)).unwrap_err(),
            AppError::ValidationError("Place not found".to_string())
        );
        assert_eq!(
            facade.create_review(review_request(&place.base.id, "ghost", 5)).unwrap_err(),
            AppError::ValidationError("User not found".to_string())
        );
        assert!(facade.create_review(review_request(&place.base.id, &user.base.id, 6)).is_err());
        assert!(facade.create_review(review_request(&place.base.id, &user.base.id, 5)).is_ok());
    }

    #[test]
    fn test_reviews_by_place_and_delete() {
        let facade = HbnbFacade::new();
        let user = facade.create_user(user_request("alice@test.com")).unwrap();
        let first = facade.create_place(place_request(&user.base.id, vec![])).unwrap();
        let second = facade.create_place(place_request(&user.base.id, vec![])).unwrap();

        let r1 = facade.create_review(review_request(&first.base.id, &user.base.id, 5)).unwrap();
        facade.create_review(review_request(&second.base.id, &user.base.id, 3)).unwrap();
        let r3 = facade.create_review(review_request(&first.base.id, &user.base.id, 4)).unwrap();

        let ids: Vec<String> = facade
            .get_reviews_by_place(&first.base.id)
            .into_iter()
            .map(|r| r.base.id)
            .collect();
        assert_eq!(ids, vec![r1.base.id.clone(), r3.base.id.clone()]);
        assert!(facade.get_reviews_by_place("unknown").is_empty());

        assert!(facade.delete_review(&r1.base.id));
        assert!(facade.get_review(&r1.base.id).is_none());
        assert!(!facade.delete_review(&r1.base.id));
    }

    #[test]
    fn test_update_review_rechecks_place() {
        let facade = HbnbFacade::new();
        let user = facade.create_user(user_request("alice@test.com")).unwrap();
        let place = facade.create_place(place_request(&user.base.id, vec![])).unwrap();
        let review = facade.create_review(review_request(&place.base.id, &user.base.id, 4)).unwrap();

        let result = facade.update_review(
            &review.base.id,
            UpdateReviewRequest { place_id: Some("ghost".to_string()), ..Default::default() },
        );
        assert_eq!(
            result.unwrap_err(),
            AppError::ValidationError("Place not found".to_string())
        );

        let updated = facade
            .update_review(
                &review.base.id,
                UpdateReviewRequest { rating: Some(2), ..Default::default() },
            )
            .unwrap()
            .unwrap();
        assert_eq!(updated.rating, 2);
    }

    #[test]
    fn test_update_review_rechecks_user() {
        let facade = HbnbFacade::new();
        let user = facade.create_user(user_request("alice@test.com")).unwrap();
        let place = facade.create_place(place_request(&user.base.id, vec![])).unwrap();
        let review = facade.create_review(review_request(&place.base.id, &user.base.id, 4)).unwrap();

        let result = facade.update_review(
            &review.base.id,
            UpdateReviewRequest { user_id: Some("ghost".to_string()), ..Default::default() },
        );
        assert_eq!(
            result.unwrap_err(),
            AppError::ValidationError("User not found".to_string())
        );
        assert_eq!(facade.get_review(&review.base.id).unwrap().user_id, user.base.id);
    }
}
