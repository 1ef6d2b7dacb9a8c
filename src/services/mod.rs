//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 리포지토리를 조합하여 엔티티 간 규칙(참조 무결성, 이메일 유일성)을 검사하는
//! [`HbnbFacade`]를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::HbnbFacade;
//!
//! let facade = HbnbFacade::new();
//! let user = facade.create_user(request)?;
//! let place = facade.get_place(&place_id);
//! ```

pub mod facade;

pub use facade::HbnbFacade;
