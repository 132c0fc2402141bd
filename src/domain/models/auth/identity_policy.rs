//! 아이덴티티 미들웨어의 동작 정책 타입

/// 인증 모드
#[derive(Debug, Clone, PartialEq)]
pub enum AuthMode {
    /// 아이덴티티 헤더가 없으면 401로 거부
    Required,
    /// 아이덴티티 헤더가 없어도 요청 진행 허용
    Optional,
}

/// 접근에 필요한 역할 요구사항
#[derive(Debug, Clone)]
pub enum RequiredRole {
    /// 단일 역할 필수
    Single(String),
    /// 나열된 역할 중 하나 이상 필수
    Any(Vec<String>),
}

impl RequiredRole {
    pub fn is_satisfied(&self, user_roles: &[String]) -> bool {
        match self {
            RequiredRole::Single(required_role) => user_roles.contains(required_role),
            RequiredRole::Any(required_roles) => {
                required_roles.iter().any(|role| user_roles.contains(role))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_role_single() {
        let required = RequiredRole::Single("MODERATOR".to_string());
        let moderator_roles = vec!["MODERATOR".to_string(), "USER".to_string()];
        let user_roles = vec!["USER".to_string()];

        assert!(required.is_satisfied(&moderator_roles));
        assert!(!required.is_satisfied(&user_roles));
    }

    #[test]
    fn test_required_role_any() {
        let required = RequiredRole::Any(vec!["ADMIN".to_string(), "MODERATOR".to_string()]);
        let admin_roles = vec!["ADMIN".to_string()];
        let moderator_roles = vec!["MODERATOR".to_string(), "USER".to_string()];
        let user_roles = vec!["USER".to_string()];

        assert!(required.is_satisfied(&admin_roles));
        assert!(required.is_satisfied(&moderator_roles));
        assert!(!required.is_satisfied(&user_roles));
    }
}
