//! 게이트웨이 아이덴티티 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 업스트림 게이트웨이가 단언한
//! 아이덴티티 헤더(`X-Auth-Username`, `X-Auth-Roles`)를 읽어
//! 호출자 정보를 추출합니다. 토큰 검증은 게이트웨이가 이미 수행했으므로
//! 이 미들웨어는 헤더 파싱과 역할 검증만 담당합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::domain::models::auth::{AuthMode, RequiredRole};
use crate::middlewares::identity_inner::IdentityMiddlewareService;

/// 아이덴티티 미들웨어
pub struct IdentityMiddleware {
    /// 인증 모드 (Required/Optional)
    mode: AuthMode,
    /// 접근에 필요한 역할 (선택사항)
    required_role: Option<RequiredRole>,
}

impl IdentityMiddleware {
    /// 새로운 아이덴티티 미들웨어 생성
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            required_role: None,
        }
    }

    /// 역할 요구사항이 있는 미들웨어 생성
    pub fn new_with_role(mode: AuthMode, required_role: RequiredRole) -> Self {
        Self {
            mode,
            required_role: Some(required_role),
        }
    }

    /// 필수 인증 미들웨어 생성
    pub fn required() -> Self {
        Self::new(AuthMode::Required)
    }

    /// 선택적 인증 미들웨어 생성
    pub fn optional() -> Self {
        Self::new(AuthMode::Optional)
    }

    /// 특정 역할 요구 미들웨어 생성
    pub fn required_with_role(role: &str) -> Self {
        Self::new_with_role(AuthMode::Required, RequiredRole::Single(role.to_string()))
    }

    /// 복수 역할 중 하나 요구 미들웨어 생성
    pub fn required_with_roles(roles: Vec<&str>) -> Self {
        let role_strings: Vec<String> = roles.into_iter().map(|s| s.to_string()).collect();
        Self::new_with_role(AuthMode::Required, RequiredRole::Any(role_strings))
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for IdentityMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = IdentityMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(IdentityMiddlewareService {
            service: Rc::new(service),
            mode: self.mode.clone(),
            required_role: self.required_role.clone(),
        }))
    }
}
