//! Keycloak 연동 설정
//!
//! 아이덴티티 프로바이더(Keycloak) 어드민 API 호출에 필요한 설정값들입니다.
//! 민감한 정보(클라이언트 시크릿)는 환경 변수로만 제공되며,
//! 프로덕션 환경에서 누락되면 기동 시점에 패닉합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export KEYCLOAK_URL="http://localhost:8180"
//! export KEYCLOAK_REALM="ITM"
//! export KEYCLOAK_CLIENT_ID="backend-gateway-client"
//! export KEYCLOAK_CLIENT_SECRET="..."
//! export KEYCLOAK_TIMEOUT_SECS="10"
//! ```

use std::env;

use crate::config::data_config::Environment;

/// Keycloak 어드민 API 접속 설정
pub struct KeycloakConfig;

impl KeycloakConfig {
    /// Keycloak 서버 베이스 URL (끝 슬래시 제거)
    pub fn server_url() -> String {
        let url = env::var("KEYCLOAK_URL")
            .unwrap_or_else(|_| "http://localhost:8180".to_string());
        url.trim_end_matches('/').to_string()
    }

    /// 사용자/역할/그룹이 소속된 realm 이름
    pub fn realm() -> String {
        env::var("KEYCLOAK_REALM").unwrap_or_else(|_| "ITM".to_string())
    }

    /// 서비스 계정이 활성화된 confidential 클라이언트 ID
    pub fn client_id() -> String {
        env::var("KEYCLOAK_CLIENT_ID")
            .unwrap_or_else(|_| "backend-gateway-client".to_string())
    }

    /// 클라이언트 시크릿
    ///
    /// 프로덕션 환경에서 미설정 시 패닉합니다. 개발/테스트 환경에서는
    /// 로컬 Keycloak 기본값으로 대체됩니다.
    pub fn client_secret() -> String {
        match env::var("KEYCLOAK_CLIENT_SECRET") {
            Ok(secret) => secret,
            Err(_) => {
                if Environment::current() == Environment::Production {
                    panic!("KEYCLOAK_CLIENT_SECRET 환경 변수가 프로덕션에서 필수입니다");
                }
                log::warn!("KEYCLOAK_CLIENT_SECRET 미설정, 개발용 기본값 사용");
                "dev-client-secret".to_string()
            }
        }
    }

    /// 어드민 API 요청 타임아웃 (초)
    pub fn request_timeout_secs() -> u64 {
        env::var("KEYCLOAK_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keycloak_config_defaults() {
        if env::var("KEYCLOAK_REALM").is_err() {
            assert_eq!(KeycloakConfig::realm(), "ITM");
        }
        if env::var("KEYCLOAK_TIMEOUT_SECS").is_err() {
            assert_eq!(KeycloakConfig::request_timeout_secs(), 10);
        }
    }

    #[test]
    fn test_server_url_trims_trailing_slash() {
        // SAFETY: 테스트 프로세스 내 단일 스레드 구간에서만 설정
        unsafe {
            env::set_var("KEYCLOAK_URL", "http://keycloak:8080/");
        }
        assert_eq!(KeycloakConfig::server_url(), "http://keycloak:8080");
        unsafe {
            env::remove_var("KEYCLOAK_URL");
        }
    }
}
