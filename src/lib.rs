//! HBnB 서비스 백엔드
//!
//! 숙소 공유 서비스(사용자, 편의시설, 장소, 리뷰)를 위한 REST CRUD 백엔드입니다.
//! 모든 데이터는 인메모리 리포지토리에 저장되며, 엔티티 간 참조 무결성과
//! 필드 검증은 파사드와 엔티티가 담당합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 생성, 조회, 부분 수정 (이메일 전역 유일)
//! - **편의시설/장소/리뷰**: 생성, 조회, 부분 수정, 삭제
//! - **장소 상세 조회**: 소유자 요약과 편의시설 객체를 해석하여 반환
//! - **검증**: `validator` derive 기반 필드 검증, 업데이트 시 전체 재검증
//! - **인메모리 저장소**: `RwLock` 기반 스레드 안전 제네릭 리포지토리
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, None → 404
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   HbnbFacade    │ ← 참조 무결성, 이메일 유일성
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ InMemoryRepo<T> │ ← 엔티티 종류별 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use hbnb_service::core::context::AppContext;
//! use hbnb_service::domain::dto::CreateAmenityRequest;
//!
//! let context = AppContext::new();
//! let wifi = context.facade.create_amenity(CreateAmenityRequest { name: "WiFi".into() })?;
//! let found = context.facade.get_amenity(&wifi.base.id);
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
