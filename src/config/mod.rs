//! # Configuration Module
//!
//! 파사드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, 환경, Rate Limiting 관련 설정
//! - [`keycloak_config`] - Keycloak 어드민 API 연동 설정
//!
//! ## 설계 원칙
//!
//! - 민감한 정보는 환경 변수로만 제공
//! - 기본값은 개발 환경에서만 안전
//! - 프로덕션에서는 필수 설정값 누락 시 패닉

pub mod data_config;
pub mod keycloak_config;

pub use data_config::*;
pub use keycloak_config::*;
