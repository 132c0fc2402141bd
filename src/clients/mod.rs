//! 외부 서비스 클라이언트 계층
//!
//! 파사드가 의존하는 유일한 협력자인 Keycloak 어드민 API 클라이언트를 제공합니다.

pub mod keycloak;
