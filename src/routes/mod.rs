//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 사용자 관리 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! # Features
//!
//! - 사용자 생성/조회 API 엔드포인트
//! - 게이트웨이 아이덴티티 기반 역할 접근 제어
//! - 헬스체크 엔드포인트

use actix_web::web;
use serde_json::json;

use crate::handlers;
use crate::middlewares::IdentityMiddleware;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_user_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// 모든 사용자 라우트는 게이트웨이 아이덴티티와 MODERATOR 역할을 요구합니다.
///
/// # Available Routes
///
/// - `GET /api/users/hello` - 호출자 사용자명 반환
/// - `POST /api/users` - 사용자 생성
/// - `GET /api/users/{id}` - 사용자 + 역할 + 그룹 조회
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .wrap(IdentityMiddleware::required_with_role("MODERATOR"))
            // /hello는 /{id} 매칭보다 먼저 등록되어야 한다
            .service(handlers::users::hello)
            .service(handlers::users::create_user)
            .service(handlers::users::get_user),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "user_admin_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "identity_provider": "Keycloak Admin API",
            "identity_source": "Gateway headers"
        }
    }))
}
