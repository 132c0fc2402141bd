//! Keycloak 어드민 REST API 클라이언트
//!
//! 아이덴티티 프로바이더 어드민 API에 대한 유일한 접점입니다.
//! 서비스 계정(client_credentials)으로 액세스 토큰을 발급받아
//! `/admin/realms/{realm}` 하위 엔드포인트를 호출합니다.
//!
//! 프로바이더가 반환하는 모든 비정상 응답은 상태 코드와 무관하게
//! [`AppError::ExternalServiceError`]로 매핑됩니다. 상위 계층에서
//! 별도의 에러 분류를 하지 않는다는 파사드의 실패 정책에 따릅니다.

use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::{
    config::KeycloakConfig,
    core::errors::AppError,
    domain::models::keycloak::{
        GroupRepresentation, RoleRepresentation, TokenResponse, UserRepresentation,
    },
};

/// 만료 임박 토큰을 재사용하지 않기 위한 여유 시간 (초)
const TOKEN_EXPIRY_LEEWAY_SECS: i64 = 60;

/// 아이덴티티 프로바이더 어드민 API 추상화
///
/// 테스트에서 프로바이더를 대체할 수 있도록 trait으로 분리합니다.
#[async_trait]
pub trait KeycloakAdmin: Send + Sync {
    /// 사용자 생성. 프로바이더가 2xx로 응답하면 성공입니다.
    async fn create_user(&self, representation: UserRepresentation) -> Result<(), AppError>;

    /// ID로 사용자 표현 조회
    async fn get_user(&self, user_id: &str) -> Result<UserRepresentation, AppError>;

    /// 사용자의 realm 역할 매핑 조회
    async fn get_realm_role_mappings(
        &self,
        user_id: &str,
    ) -> Result<Vec<RoleRepresentation>, AppError>;

    /// 사용자가 속한 그룹 목록 조회
    async fn get_user_groups(&self, user_id: &str) -> Result<Vec<GroupRepresentation>, AppError>;
}

/// 캐시된 서비스 계정 토큰
struct CachedToken {
    access_token: String,
    expires_at: DateTime<Utc>,
}

/// reqwest 기반 어드민 API 클라이언트 구현
pub struct KeycloakAdminClient {
    http: reqwest::Client,
    server_url: String,
    realm: String,
    client_id: String,
    client_secret: String,
    // 락은 await 지점을 넘어 보유하지 않는다
    token: RwLock<Option<CachedToken>>,
}

impl KeycloakAdminClient {
    /// 환경 변수 설정으로 클라이언트 생성
    pub fn from_env() -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(KeycloakConfig::request_timeout_secs()))
            .build()
            .map_err(|e| AppError::InternalError(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(Self {
            http,
            server_url: KeycloakConfig::server_url(),
            realm: KeycloakConfig::realm(),
            client_id: KeycloakConfig::client_id(),
            client_secret: KeycloakConfig::client_secret(),
            token: RwLock::new(None),
        })
    }

    /// realm 하위 어드민 엔드포인트 URL 생성
    fn admin_url(&self, path: &str) -> String {
        format!(
            "{}/admin/realms/{}{}",
            self.server_url,
            urlencoding::encode(&self.realm),
            path
        )
    }

    /// 유효한 액세스 토큰 반환 (필요 시 재발급)
    async fn admin_token(&self) -> Result<String, AppError> {
        {
            let cached = self
                .token
                .read()
                .map_err(|_| AppError::InternalError("토큰 캐시 락 오염".to_string()))?;
            if let Some(token) = cached.as_ref() {
                if token.expires_at > Utc::now() {
                    return Ok(token.access_token.clone());
                }
            }
        }

        let token_response = self.fetch_token().await?;
        let access_token = token_response.access_token.clone();

        let expires_at = Utc::now()
            + chrono::Duration::seconds(
                (token_response.expires_in - TOKEN_EXPIRY_LEEWAY_SECS).max(0),
            );

        let mut cached = self
            .token
            .write()
            .map_err(|_| AppError::InternalError("토큰 캐시 락 오염".to_string()))?;
        *cached = Some(CachedToken {
            access_token: access_token.clone(),
            expires_at,
        });

        Ok(access_token)
    }

    /// client_credentials 그랜트로 서비스 계정 토큰 발급
    async fn fetch_token(&self) -> Result<TokenResponse, AppError> {
        let token_url = format!(
            "{}/realms/{}/protocol/openid-connect/token",
            self.server_url,
            urlencoding::encode(&self.realm)
        );

        let params = [
            ("grant_type", "client_credentials"),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
        ];

        let response = self
            .http
            .post(&token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Keycloak 토큰 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Keycloak 토큰 발급 실패 ({}): {}",
                status, error_text
            )));
        }

        response
            .json::<TokenResponse>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Keycloak 토큰 응답 파싱 실패: {}", e)))
    }

    /// GET 요청을 보내고 JSON 응답을 역직렬화
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        what: &str,
    ) -> Result<T, AppError> {
        let token = self.admin_token().await?;

        let response = self
            .http
            .get(url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("{} 요청 실패: {}", what, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "{} 조회 실패 ({}): {}",
                what, status, error_text
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("{} 응답 파싱 실패: {}", what, e)))
    }
}

#[async_trait]
impl KeycloakAdmin for KeycloakAdminClient {
    async fn create_user(&self, representation: UserRepresentation) -> Result<(), AppError> {
        let token = self.admin_token().await?;
        let url = self.admin_url("/users");

        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .json(&representation)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("사용자 생성 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "사용자 생성 실패 ({}): {}",
                status, error_text
            )));
        }

        Ok(())
    }

    async fn get_user(&self, user_id: &str) -> Result<UserRepresentation, AppError> {
        let url = self.admin_url(&format!("/users/{}", urlencoding::encode(user_id)));
        self.get_json(&url, "사용자").await
    }

    async fn get_realm_role_mappings(
        &self,
        user_id: &str,
    ) -> Result<Vec<RoleRepresentation>, AppError> {
        let url = self.admin_url(&format!(
            "/users/{}/role-mappings/realm",
            urlencoding::encode(user_id)
        ));
        self.get_json(&url, "역할 매핑").await
    }

    async fn get_user_groups(&self, user_id: &str) -> Result<Vec<GroupRepresentation>, AppError> {
        let url = self.admin_url(&format!(
            "/users/{}/groups",
            urlencoding::encode(user_id)
        ));
        self.get_json(&url, "그룹").await
    }
}
