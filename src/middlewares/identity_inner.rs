//! IdentityMiddleware 추출 로직의 핵심적인 기능

use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;

use crate::core::errors::AppError;
use crate::domain::models::auth::{AuthMode, AuthenticatedUser, RequiredRole};
use crate::utils::string_utils::is_valid_string;

/// 게이트웨이가 호출자 사용자명을 단언하는 헤더
pub const USERNAME_HEADER: &str = "X-Auth-Username";

/// 게이트웨이가 호출자 역할 목록(쉼표 구분)을 단언하는 헤더
pub const ROLES_HEADER: &str = "X-Auth-Roles";

/// 실제 아이덴티티 추출 로직을 수행하는 서비스
pub struct IdentityMiddlewareService<S> {
    pub service: Rc<S>,
    pub mode: AuthMode,
    pub required_role: Option<RequiredRole>,
}

impl<S, B> Service<ServiceRequest> for IdentityMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let mode = self.mode.clone();
        let required_role = self.required_role.clone();

        Box::pin(async move {
            let identity_result = extract_identity_from_request(&req);

            match (&mode, identity_result) {
                // Required 모드에서 아이덴티티 없음
                (AuthMode::Required, Err(err)) => {
                    log::warn!("아이덴티티 추출 실패: {}", err);
                    let response = HttpResponse::Unauthorized().json(serde_json::json!({
                        "error": "authentication_required",
                        "message": "게이트웨이 아이덴티티 헤더가 필요합니다"
                    }));
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response).map_into_right_body();
                    return Ok(res);
                }
                // Required 모드에서 아이덴티티 확인됨
                (AuthMode::Required, Ok(user)) => {
                    // 역할 검증
                    if let Some(ref required) = required_role {
                        if !required.is_satisfied(&user.roles) {
                            log::warn!(
                                "권한 부족: 사용자 {} ({:?}), 필요 권한: {:?}",
                                user.username,
                                user.roles,
                                required
                            );
                            let response = HttpResponse::Forbidden().json(serde_json::json!({
                                "error": "insufficient_permissions",
                                "message": "접근 권한이 부족합니다"
                            }));
                            let (req, _) = req.into_parts();
                            let res = ServiceResponse::new(req, response).map_into_right_body();
                            return Ok(res);
                        }
                    }

                    // 호출자 정보를 Request Extensions에 저장
                    req.extensions_mut().insert(user.clone());
                    log::debug!("아이덴티티 확인: {}", user.username);
                }
                // Optional 모드에서 아이덴티티 확인됨
                (AuthMode::Optional, Ok(user)) => {
                    req.extensions_mut().insert(user.clone());
                    log::debug!("선택적 아이덴티티 확인: {}", user.username);
                }
                // Optional 모드에서 아이덴티티 없음 (진행 허용)
                (AuthMode::Optional, Err(_)) => {
                    log::debug!("선택적 아이덴티티: 헤더 없음, 요청 진행");
                }
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 게이트웨이 헤더에서 호출자 정보를 추출
fn extract_identity_from_request(req: &ServiceRequest) -> Result<AuthenticatedUser, AppError> {
    let username = req
        .headers()
        .get(USERNAME_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|name| is_valid_string(name))
        .ok_or_else(|| {
            AppError::AuthenticationError(format!("{} 헤더가 없습니다", USERNAME_HEADER))
        })?;

    let roles = req
        .headers()
        .get(ROLES_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(parse_roles_header)
        .unwrap_or_default();

    Ok(AuthenticatedUser {
        username: username.to_string(),
        roles,
    })
}

/// 쉼표 구분 역할 헤더 파싱 (공백/빈 항목 제거)
fn parse_roles_header(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|role| is_valid_string(role))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_parse_roles_header() {
        assert_eq!(
            parse_roles_header("MODERATOR, USER"),
            vec!["MODERATOR".to_string(), "USER".to_string()]
        );
        assert_eq!(parse_roles_header("MODERATOR"), vec!["MODERATOR".to_string()]);
        assert!(parse_roles_header("").is_empty());
        assert!(parse_roles_header(" , ,").is_empty());
    }

    #[test]
    fn test_extract_identity_success() {
        let req = TestRequest::default()
            .insert_header((USERNAME_HEADER, "user"))
            .insert_header((ROLES_HEADER, "MODERATOR"))
            .to_srv_request();

        let user = extract_identity_from_request(&req).unwrap();
        assert_eq!(user.username, "user");
        assert_eq!(user.roles, vec!["MODERATOR".to_string()]);
    }

    #[test]
    fn test_extract_identity_missing_username() {
        let req = TestRequest::default()
            .insert_header((ROLES_HEADER, "MODERATOR"))
            .to_srv_request();

        assert!(extract_identity_from_request(&req).is_err());
    }

    #[test]
    fn test_extract_identity_blank_username_rejected() {
        let req = TestRequest::default()
            .insert_header((USERNAME_HEADER, "   "))
            .to_srv_request();

        assert!(extract_identity_from_request(&req).is_err());
    }

    #[test]
    fn test_extract_identity_without_roles() {
        let req = TestRequest::default()
            .insert_header((USERNAME_HEADER, "user"))
            .to_srv_request();

        let user = extract_identity_from_request(&req).unwrap();
        assert!(user.roles.is_empty());
    }
}
