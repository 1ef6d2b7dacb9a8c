//! # 문자열 유틸리티
//!
//! 엔티티 생성과 업데이트 시 입력 문자열을 정규화하는 공통 함수들입니다.

/// 문자열 정리 (trim 후 반환)
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::trim_string;
///
/// assert_eq!(trim_string("  Hello World  "), "Hello World");
/// ```
pub fn trim_string(value: &str) -> String {
    value.trim().to_string()
}

/// 이메일 주소 정규화
///
/// 소문자로만 변환합니다. 공백은 제거하지 않으므로 앞뒤 공백이 있는 이메일은
/// 형식 검사에서 거부됩니다. 저장과 중복 검사 모두 이 함수를 거치므로
/// 이메일 비교는 대소문자를 구분하지 않습니다.
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(normalize_email("Alice@Test.COM"), "alice@test.com");
/// ```
pub fn normalize_email(value: &str) -> String {
    value.to_lowercase()
}

/// 문자열이 유효한지 확인 (빈 문자열이 아니고 공백만으로 구성되지 않음)
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}
