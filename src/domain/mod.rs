//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈로, 엔티티와 API 경계의 DTO를 정의합니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - User, Amenity, Place, Review (필드 검증 포함)
//! └── DTOs      - 요청/응답 구조체
//!      │
//!      ▼
//! Service Layer (HbnbFacade)
//!      │
//!      ▼
//! Repository Layer (InMemoryRepository)
//! ```
//!
//! ## 설계 원칙
//!
//! - **엔티티는 스스로 검증**: 생성과 업데이트 모두 `validator` 규칙을 통과해야 합니다.
//! - **엔티티 간 참조는 ID 문자열**: 참조 무결성은 파사드가 검사합니다.
//! - **DTO로만 직렬화**: 응답은 항상 DTO로 변환한 뒤 반환합니다.
//!
//! ## 사용자 등록 플로우
//!
//! ```rust,ignore
//! // 1. DTO로 입력 받기
//! let request = CreateUserRequest {
//!     first_name: "Alice".to_string(),
//!     last_name: "Dupont".to_string(),
//!     email: "Alice@Test.com".to_string(),
//!     is_admin: false,
//! };
//!
//! // 2. 파사드가 이메일 중복을 검사하고 엔티티를 생성/검증
//! let user = facade.create_user(request)?;
//!
//! // 3. 응답 DTO로 변환
//! let response = UserResponse::from(user);
//! assert_eq!(response.email, "alice@test.com");
//! ```

pub mod entities;
pub mod dto;

pub use entities::*;
pub use dto::*;
