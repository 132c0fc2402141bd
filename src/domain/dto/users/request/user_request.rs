//! 사용자 생성 요청 DTO
//!
//! 새로운 사용자 계정 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
//! 외부 API 계약에 맞추어 camelCase JSON을 사용하며,
//! 검증을 통과한 요청만 아이덴티티 프로바이더로 전달됩니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 새로운 사용자 계정 생성을 위한 요청 DTO
///
/// JSON 역직렬화와 입력 검증을 자동으로 수행합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    /// 사용자명 (2-30자, 영문/숫자/언더스코어만 허용)
    #[validate(length(
        min = 2,
        max = 30,
        message = "사용자명은 2-30자 사이여야 합니다"
    ))]
    #[validate(custom(function = "validate_username"))]
    pub username: String,

    /// 사용자 이메일 주소 (RFC 5322 표준)
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 초기 비밀번호 (최소 4자)
    #[validate(length(min = 4, message = "비밀번호는 최소 4자 이상이어야 합니다"))]
    pub password: String,

    /// 이름
    #[validate(length(min = 1, message = "이름은 필수입니다"))]
    pub first_name: String,

    /// 성
    #[validate(length(min = 1, message = "성은 필수입니다"))]
    pub last_name: String,
}

/// 사용자명 형식 검증 (영문, 숫자, 언더스코어만 허용)
fn validate_username(username: &str) -> Result<(), ValidationError> {
    if !username.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Err(ValidationError::new("invalid_username")
            .with_message("사용자명은 알파벳, 숫자, 언더스코어만 사용 가능합니다".into()));
    }
    Ok(())
}
