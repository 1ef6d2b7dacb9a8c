//! # Domain Entities Module
//!
//! HBnB 도메인의 핵심 엔티티(사용자, 편의시설, 장소, 리뷰)를 정의합니다.
//! 각 엔티티는 생성 시점에 스스로의 필드를 검증하며, 검증 규칙은
//! `validator` 크레이트의 derive 속성으로 선언됩니다.
//!
//! ## 공통 구조
//!
//! 모든 엔티티는 [`BaseEntity`]를 평탄화(`#[serde(flatten)]`)하여 포함합니다.
//!
//! ```text
//! BaseEntity
//! ├── id          - UUID v4 문자열 (생성 시 발급, 불변)
//! ├── created_at  - 생성 시각 (불변)
//! └── updated_at  - 마지막 수정 시각 (변경 시마다 갱신)
//! ```
//!
//! ## 엔티티 관계
//!
//! ```text
//! User ◄──── owner_id ──── Place ──── amenities[] ────► Amenity
//!  ▲                         ▲
//!  └──── user_id ── Review ──┘ place_id
//! ```
//!
//! 엔티티 간 참조는 모두 ID 문자열로만 표현합니다. 참조 무결성은
//! 엔티티가 아닌 파사드([`crate::services::facade`])에서 검사합니다.
//!
//! ## 부분 업데이트
//!
//! [`Entity::merge`]는 패치의 `Some` 필드만 덮어씁니다. 리포지토리는 저장된
//! 엔티티의 복제본에 패치를 적용하고 검증이 성공한 경우에만 교체하므로,
//! 거부된 업데이트는 저장소에 흔적을 남기지 않습니다.
//!
//! ## 검증 순서
//!
//! 길이 상한과 이메일 형식은 입력 그대로의 값에 대해 검사하고, 그 다음
//! [`Entity::normalize`]로 공백 제거/소문자 변환을 한 뒤 한 번 더 검사합니다.
//! 따라서 `" ".repeat(60) + "Alice"`는 50자 초과로, `"  b@test.com "`은 형식 오류로
//! 거부되고, `"   "`는 정규화 후 빈 문자열이 되어 거부됩니다.

pub mod base_entity;
pub mod user;
pub mod amenity;
pub mod place;
pub mod review;

pub use base_entity::BaseEntity;
pub use user::User;
pub use amenity::Amenity;
pub use place::Place;
pub use review::Review;

use validator::Validate;
use crate::core::errors::AppResult;

/// 리포지토리에 저장 가능한 엔티티의 공통 인터페이스
///
/// [`InMemoryRepository`](crate::repositories::InMemoryRepository)는 이 trait을 통해
/// 엔티티 종류와 무관하게 키 조회, 속성 조회, 부분 업데이트를 수행합니다.
pub trait Entity: Clone + Send + Sync + 'static {
    /// 부분 업데이트에 사용하는 패치 타입
    ///
    /// `id`와 `created_at`은 패치 타입에 존재하지 않으므로 구조적으로 변경할 수 없습니다.
    type Patch;

    fn base(&self) -> &BaseEntity;

    fn base_mut(&mut self) -> &mut BaseEntity;

    fn id(&self) -> &str {
        &self.base().id
    }

    /// 이름으로 지정한 속성의 값을 문자열로 반환합니다.
    ///
    /// 알 수 없는 속성 이름이면 `None`을 반환합니다.
    fn attribute(&self, name: &str) -> Option<String>;

    /// 패치를 적용하고 엔티티 전체를 다시 검증합니다.
    ///
    /// 실패 시 `self`는 일부 필드가 변경된 상태일 수 있으므로,
    /// 호출자는 복제본에 대해 호출해야 합니다.
    fn merge(&mut self, patch: Self::Patch) -> AppResult<()>;

    /// 저장 형태로 정규화합니다 (공백 제거, 이메일 소문자 변환).
    fn normalize(&mut self);
}

/// 원본 값 검증 → 정규화 → 정규화된 값 재검증
pub(crate) fn validate_and_normalize<E: Entity + Validate>(entity: &mut E) -> AppResult<()> {
    entity.validate()?;
    entity.normalize();
    entity.validate()?;
    Ok(())
}
