//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 모든 엔티티가 하나의 제네릭 [`InMemoryRepository`]를 공유합니다.
//! 엔티티별 차이는 [`Entity`](crate::domain::entities::Entity) trait이 흡수합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::InMemoryRepository;
//!
//! let user_repo: InMemoryRepository<User> = InMemoryRepository::new();
//! let user = user_repo.get_by_attribute("email", "user@example.com");
//! ```

pub mod in_memory_repo;

pub use in_memory_repo::InMemoryRepository;
