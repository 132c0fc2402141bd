//! 문자열 처리 유틸리티

/// 공백을 제거한 문자열 반환
pub fn trim_string(value: &str) -> String {
    value.trim().to_string()
}

/// 공백만으로 이루어지지 않은 유효한 문자열인지 확인
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 빈 문자열을 None으로 정리
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
