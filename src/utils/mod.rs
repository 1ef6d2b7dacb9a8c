//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 정리, 이메일 정규화, 빈 문자열 검사
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::{normalize_email, trim_string};
//!
//! let name = trim_string("  John  ");
//! let email = normalize_email(" John@Example.COM ");
//! ```

pub mod string_utils;
