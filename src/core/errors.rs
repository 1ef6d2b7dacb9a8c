//! # Application Error Handling System
//!
//! HBnB 서비스 전역에서 사용하는 에러 처리 시스템입니다.
//! `thiserror`로 에러 타입을 정의하고 `actix_web::ResponseError`를 구현하여
//! 핸들러에서 `?` 연산자만으로 일관된 JSON 에러 응답을 반환합니다.
//!
//! ## 에러 분류
//!
//! 도메인에는 두 종류의 에러만 존재합니다.
//!
//! - **잘못된 입력**: 필드 제약 위반, 참조 무결성 위반(존재하지 않는 ID 참조),
//!   이메일 중복, 잘못된 JSON 본문. 항상 요청 경계에서 복구 가능합니다.
//! - **찾을 수 없음**: 조회 대상 ID가 저장소에 없음. 파사드는 이를 `None`으로
//!   표현하고, HTTP 경계에서만 `NotFound`로 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 입력값 검증 실패, 참조 무결성 위반, 이메일 중복 |
//! | `NotFound` | 404 Not Found | 리소스 없음 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! async fn get_amenity(ctx: web::Data<AppContext>, id: web::Path<String>) -> Result<HttpResponse, AppError> {
//!     let amenity = ctx.facade.get_amenity(&id)
//!         .ok_or_else(|| AppError::NotFound("Amenity not found".to_string()))?;
//!     Ok(HttpResponse::Ok().json(AmenityResponse::from(amenity)))
//! }
//! ```

use thiserror::Error;
use validator::ValidationErrors;

/// 애플리케이션 전역 에러 타입
///
/// 모든 변형은 사람이 읽을 수 있는 메시지를 담고 있으며,
/// `ResponseError` 구현을 통해 `{"error": "..."}` 형태의 JSON 응답으로 변환됩니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    ///
    /// # 발생 시나리오
    /// - 이름이 비어 있거나 50자를 초과
    /// - 이메일 형식 오류 또는 이미 등록된 이메일
    /// - 가격이 0 이하, 위도/경도 범위 초과
    /// - 존재하지 않는 소유자/편의시설/장소/사용자 ID 참조
    /// - JSON 본문 파싱 실패 (필드 누락, 타입 불일치)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    ///
    /// 예상치 못한 실패를 위해 남겨둔 변형입니다. 현재 도메인 로직은 이 에러를 만들지 않습니다.
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러 응답은 다음 형식을 따릅니다:
    ///
    /// ```json
    /// {
    ///   "error": "Validation error: Email already registered"
    /// }
    /// ```
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// `validator` 검증 결과를 `AppError::ValidationError`로 변환합니다.
///
/// 필드 이름 순으로 정렬한 뒤 각 에러의 메시지(없으면 에러 코드)를
/// `"; "`로 이어 붙여 하나의 메시지로 만듭니다.
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|(a, _), (b, _)| a.cmp(b));

        let message = fields
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("{} is invalid ({})", field, e.code),
                })
            })
            .collect::<Vec<_>>()
            .join("; ");

        AppError::ValidationError(message)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use validator::Validate;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("Email already registered".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("Review not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_display_keeps_message() {
        let error = AppError::ValidationError("Owner not found".to_string());
        assert_eq!(error.to_string(), "Validation error: Owner not found");
    }

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "a is required"))]
        a: String,
        #[validate(range(min = 1, max = 5))]
        b: i64,
    }

    #[test]
    fn test_from_validation_errors_joins_messages_in_field_order() {
        let sample = Sample { a: String::new(), b: 9 };
        let errors = sample.validate().unwrap_err();

        match AppError::from(errors) {
            AppError::ValidationError(msg) => {
                assert_eq!(msg, "a is required; b is invalid (range)");
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }
}
