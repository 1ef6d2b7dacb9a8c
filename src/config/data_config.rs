//! 서버 및 실행 환경 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, CORS 관련 설정을 환경 변수에서 읽어옵니다.
//! 모든 값은 기본값을 가지므로 환경 변수 없이도 개발 서버를 띄울 수 있습니다.

use std::env;
use crate::utils::string_utils::{is_valid_string, trim_string};

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며, 설정되지 않은 경우
    /// `Development`를 기본값으로 사용합니다.
    pub fn current() -> Self {
        env::var("ENVIRONMENT")
            .map(|value| Self::from_str(&value))
            .unwrap_or(Environment::Development)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 프로덕션 여부. 시작 시 개발용 CORS 설정이 남아 있는지 점검할 때 사용합니다.
    pub fn is_production(&self) -> bool {
        *self == Environment::Production
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    pub const DEFAULT_HOST: &'static str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 8080;
    pub const DEFAULT_WORKERS: usize = 4;

    /// 서버가 바인딩할 포트 (`PORT`, 기본값 8080)
    pub fn port() -> u16 {
        env::var("PORT")
            .ok()
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(Self::DEFAULT_PORT)
    }

    /// 서버가 바인딩할 호스트 주소 (`HOST`, 기본값 "0.0.0.0")
    pub fn host() -> String {
        env::var("HOST")
            .ok()
            .filter(|value| is_valid_string(value))
            .map(|value| trim_string(&value))
            .unwrap_or_else(|| Self::DEFAULT_HOST.to_string())
    }

    /// actix 워커 스레드 수 (`WORKERS`, 기본값 4)
    pub fn workers() -> usize {
        Self::parse_workers(env::var("WORKERS").ok().as_deref())
    }

    /// 워커 수 파싱. 숫자가 아니거나 0이면 기본값을 사용합니다.
    pub fn parse_workers(value: Option<&str>) -> usize {
        value
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|workers| *workers >= 1)
            .unwrap_or(Self::DEFAULT_WORKERS)
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// CORS 허용 Origin 설정
pub struct CorsConfig;

impl CorsConfig {
    pub const DEFAULT_ORIGINS: [&'static str; 4] = [
        "http://localhost:3000",
        "http://127.0.0.1:3000",
        "http://localhost:8080",
        "http://127.0.0.1:8080",
    ];

    /// 허용할 Origin 목록
    ///
    /// # Environment Variables
    ///
    /// - `CORS_ALLOWED_ORIGINS`: 쉼표로 구분된 Origin 목록.
    ///   설정되지 않았거나 유효한 항목이 없으면 로컬 개발용 Origin을 사용합니다.
    pub fn allowed_origins() -> Vec<String> {
        Self::parse_origins(env::var("CORS_ALLOWED_ORIGINS").ok().as_deref())
    }

    pub fn parse_origins(value: Option<&str>) -> Vec<String> {
        let origins: Vec<String> = value
            .unwrap_or_default()
            .split(',')
            .filter(|origin| is_valid_string(origin))
            .map(trim_string)
            .collect();

        if origins.is_empty() {
            Self::DEFAULT_ORIGINS.iter().map(|origin| origin.to_string()).collect()
        } else {
            origins
        }
    }

    /// Origin 목록이 로컬 개발용 기본값과 같은지 확인합니다.
    pub fn is_default(origins: &[String]) -> bool {
        origins.iter().map(String::as_str).eq(Self::DEFAULT_ORIGINS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(
            Environment::from_str("development"),
            Environment::Development
        );
        assert_eq!(Environment::from_str("DEV"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("stage"), Environment::Staging);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
        assert!(Environment::from_str("prod").is_production());
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }
    }

    #[test]
    fn test_parse_workers() {
        assert_eq!(ServerConfig::parse_workers(None), 4);
        assert_eq!(ServerConfig::parse_workers(Some("8")), 8);
        assert_eq!(ServerConfig::parse_workers(Some(" 2 ")), 2);
        assert_eq!(ServerConfig::parse_workers(Some("0")), 4);
        assert_eq!(ServerConfig::parse_workers(Some("many")), 4);
    }

    #[test]
    fn test_parse_origins() {
        assert_eq!(CorsConfig::parse_origins(None).len(), 4);
        assert_eq!(CorsConfig::parse_origins(Some(" , ")).len(), 4);
        assert_eq!(
            CorsConfig::parse_origins(Some("https://hbnb.io, http://localhost:5173 ,")),
            vec!["https://hbnb.io".to_string(), "http://localhost:5173".to_string()]
        );
    }

    #[test]
    fn test_is_default_origins() {
        assert!(CorsConfig::is_default(&CorsConfig::parse_origins(None)));
        assert!(!CorsConfig::is_default(&CorsConfig::parse_origins(Some("https://hbnb.io"))));
        assert!(!CorsConfig::is_default(&[]));
    }
}
