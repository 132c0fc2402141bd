//! 사용자 조회 응답 DTO

use serde::{Deserialize, Serialize};

use crate::domain::models::keycloak::{
    GroupRepresentation, RoleRepresentation, UserRepresentation,
};

/// 사용자 프로필과 역할/그룹 이름을 집계한 응답 DTO
///
/// 아이덴티티 프로바이더의 표현(representation) 세 가지를 하나로 합칩니다.
/// 역할과 그룹은 이름만 노출하며, 프로바이더 내부 ID는 포함하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub first_name: String,
    pub last_name: String,
    pub email: String,

    /// 사용자에게 매핑된 realm 역할 이름 목록
    pub roles: Vec<String>,

    /// 사용자가 속한 그룹 이름 목록
    pub groups: Vec<String>,
}

impl UserResponse {
    /// 프로바이더 표현들을 응답 DTO로 매핑
    ///
    /// 프로바이더가 생략할 수 있는 프로필 필드는 빈 문자열로 대체합니다.
    pub fn from_representations(
        user: UserRepresentation,
        roles: Vec<RoleRepresentation>,
        groups: Vec<GroupRepresentation>,
    ) -> Self {
        Self {
            first_name: user.first_name.unwrap_or_default(),
            last_name: user.last_name.unwrap_or_default(),
            email: user.email.unwrap_or_default(),
            roles: roles.into_iter().filter_map(|role| role.name).collect(),
            groups: groups.into_iter().filter_map(|group| group.name).collect(),
        }
    }
}
