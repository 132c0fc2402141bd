//! 사용자 관리 비즈니스 로직
//!
//! 검증된 요청을 아이덴티티 프로바이더 표현으로 변환하여 전달하고,
//! 조회 시 프로바이더의 세 가지 표현(프로필, 역할 매핑, 그룹)을
//! 하나의 응답 DTO로 집계합니다. 로컬 상태는 보유하지 않습니다.

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    clients::keycloak::KeycloakAdmin,
    core::errors::AppError,
    domain::{
        dto::users::{request::UserRequest, response::UserResponse},
        models::keycloak::{CredentialRepresentation, UserRepresentation},
    },
};

/// 사용자 관리 서비스
pub struct UserService {
    /// 아이덴티티 프로바이더 어드민 클라이언트
    ///
    /// trait 객체로 보유하여 테스트에서 목 구현으로 대체할 수 있습니다.
    keycloak: Arc<dyn KeycloakAdmin>,
}

impl UserService {
    pub fn new(keycloak: Arc<dyn KeycloakAdmin>) -> Self {
        Self { keycloak }
    }

    /// 새 사용자 계정 생성
    ///
    /// 활성화된 사용자 표현에 영구 비밀번호 자격 증명을 붙여 전달합니다.
    /// 프로바이더 실패는 [`AppError::ExternalServiceError`]로 그대로 전파됩니다.
    pub async fn create_user(&self, request: UserRequest) -> Result<(), AppError> {
        let representation = UserRepresentation {
            username: Some(request.username.clone()),
            email: Some(request.email),
            first_name: Some(request.first_name),
            last_name: Some(request.last_name),
            enabled: Some(true),
            credentials: Some(vec![CredentialRepresentation::password(request.password)]),
            ..Default::default()
        };

        self.keycloak.create_user(representation).await?;

        log::info!("사용자 생성 완료: {}", request.username);
        Ok(())
    }

    /// ID로 사용자 조회
    ///
    /// 사용자 표현, realm 역할 매핑, 그룹 목록을 차례로 조회하여
    /// 응답 DTO로 매핑합니다. 어느 단계에서든 프로바이더가 실패하면
    /// (존재하지 않는 ID 포함) 에러가 그대로 전파됩니다.
    pub async fn get_user_by_id(&self, user_id: Uuid) -> Result<UserResponse, AppError> {
        let id = user_id.to_string();

        let user = self.keycloak.get_user(&id).await?;
        let roles = self.keycloak.get_realm_role_mappings(&id).await?;
        let groups = self.keycloak.get_user_groups(&id).await?;

        log::debug!("사용자 조회 완료: {} (역할 {}개, 그룹 {}개)", id, roles.len(), groups.len());

        Ok(UserResponse::from_representations(user, roles, groups))
    }
}
