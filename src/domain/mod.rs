//! 도메인 계층
//!
//! HTTP DTO와 내부 모델(인증 사용자, Keycloak 표현)을 정의합니다.

pub mod dto;
pub mod models;

pub use dto::*;
pub use models::*;
