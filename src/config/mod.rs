//! # Configuration Module
//!
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버 바인딩, CORS 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{CorsConfig, Environment, ServerConfig};
//!
//! let env = Environment::current();
//! let bind_address = ServerConfig::bind_address();
//! let origins = CorsConfig::allowed_origins();
//! ```
//!
//! ## 환경 변수
//!
//! ```bash
//! export PROFILE="dev"             # dev → .env.dev, prod → .env.prod, 그 외 → .env
//! export ENVIRONMENT="development" # development, test, staging, production
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export WORKERS="4"
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000,https://hbnb.example.com"
//! export RUST_LOG="info,actix_web=info"
//! ```

pub mod data_config;

pub use data_config::*;
