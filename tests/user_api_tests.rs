//! 사용자 API 통합 테스트
//!
//! 아이덴티티 프로바이더를 목 클라이언트로 대체하고
//! HTTP 계약(상태 코드, 응답 바디)을 검증합니다.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use actix_web::{test, web, App};
use async_trait::async_trait;
use serde_json::json;
use uuid::Uuid;

use user_admin_service::clients::keycloak::KeycloakAdmin;
use user_admin_service::core::errors::AppError;
use user_admin_service::domain::models::keycloak::{
    GroupRepresentation, RoleRepresentation, UserRepresentation,
};
use user_admin_service::middlewares::{ROLES_HEADER, USERNAME_HEADER};
use user_admin_service::routes::configure_all_routes;
use user_admin_service::services::users::UserService;

/// 프로바이더 동작을 시나리오별로 제어하는 목 클라이언트
struct MockKeycloak {
    fail_create: bool,
    fail_lookup: bool,
    user: UserRepresentation,
    roles: Vec<RoleRepresentation>,
    groups: Vec<GroupRepresentation>,
    create_calls: AtomicUsize,
}

impl Default for MockKeycloak {
    fn default() -> Self {
        Self {
            fail_create: false,
            fail_lookup: false,
            user: UserRepresentation {
                first_name: Some("Grisha".to_string()),
                last_name: Some("Rururu".to_string()),
                email: Some("grigory@example.com".to_string()),
                ..Default::default()
            },
            roles: Vec::new(),
            groups: Vec::new(),
            create_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl KeycloakAdmin for MockKeycloak {
    async fn create_user(&self, _representation: UserRepresentation) -> Result<(), AppError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_create {
            return Err(AppError::ExternalServiceError(
                "Keycloak create failed".to_string(),
            ));
        }
        Ok(())
    }

    async fn get_user(&self, _user_id: &str) -> Result<UserRepresentation, AppError> {
        if self.fail_lookup {
            return Err(AppError::ExternalServiceError("ID not found".to_string()));
        }
        Ok(self.user.clone())
    }

    async fn get_realm_role_mappings(
        &self,
        _user_id: &str,
    ) -> Result<Vec<RoleRepresentation>, AppError> {
        Ok(self.roles.clone())
    }

    async fn get_user_groups(&self, _user_id: &str) -> Result<Vec<GroupRepresentation>, AppError> {
        Ok(self.groups.clone())
    }
}

fn valid_user_request() -> serde_json::Value {
    json!({
        "username": "grigory",
        "email": "grigory@example.com",
        "password": "12345",
        "firstName": "Grisha",
        "lastName": "Rururu"
    })
}

macro_rules! init_app {
    ($mock:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(UserService::new(
                    $mock.clone() as Arc<dyn KeycloakAdmin>
                )))
                .configure(configure_all_routes),
        )
        .await
    };
}

/// MODERATOR 권한을 가진 게이트웨이 아이덴티티 헤더 부착
fn as_moderator(req: test::TestRequest) -> test::TestRequest {
    req.insert_header((USERNAME_HEADER, "user"))
        .insert_header((ROLES_HEADER, "MODERATOR"))
}

#[actix_web::test]
async fn test_hello_returns_caller_username() {
    let mock = Arc::new(MockKeycloak::default());
    let app = init_app!(mock);

    let req = as_moderator(test::TestRequest::get().uri("/api/users/hello")).to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());

    let body = test::read_body(resp).await;
    let body = String::from_utf8(body.to_vec()).unwrap();
    assert!(body.contains("user"));
}

#[actix_web::test]
async fn test_create_user_returns_ok() {
    let mock = Arc::new(MockKeycloak::default());
    let app = init_app!(mock);

    let req = as_moderator(test::TestRequest::post().uri("/api/users"))
        .set_json(valid_user_request())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::OK);
    assert_eq!(mock.create_calls.load(Ordering::SeqCst), 1);
}

#[actix_web::test]
async fn test_create_user_with_short_username_is_rejected() {
    let mock = Arc::new(MockKeycloak::default());
    let app = init_app!(mock);

    let mut body = valid_user_request();
    body["username"] = json!("G");

    let req = as_moderator(test::TestRequest::post().uri("/api/users"))
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_client_error());
    // 검증 실패 시 프로바이더까지 도달하지 않는다
    assert_eq!(mock.create_calls.load(Ordering::SeqCst), 0);
}

#[actix_web::test]
async fn test_create_user_provider_error_maps_to_500() {
    let mock = Arc::new(MockKeycloak {
        fail_create: true,
        ..Default::default()
    });
    let app = init_app!(mock);

    let req = as_moderator(test::TestRequest::post().uri("/api/users"))
        .set_json(valid_user_request())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(
        resp.status(),
        actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[actix_web::test]
async fn test_get_user_by_id_returns_aggregated_response() {
    let mock = Arc::new(MockKeycloak::default());
    let app = init_app!(mock);

    let user_id = Uuid::new_v4();
    let req = as_moderator(test::TestRequest::get().uri(&format!("/api/users/{}", user_id)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["firstName"], "Grisha");
    assert_eq!(body["lastName"], "Rururu");
    assert_eq!(body["email"], "grigory@example.com");
    assert_eq!(body["roles"], json!([]));
    assert_eq!(body["groups"], json!([]));
}

#[actix_web::test]
async fn test_get_user_by_id_maps_role_and_group_names() {
    let mock = Arc::new(MockKeycloak {
        roles: vec![RoleRepresentation {
            name: Some("MODERATOR".to_string()),
            ..Default::default()
        }],
        groups: vec![GroupRepresentation {
            name: Some("Moderators".to_string()),
            ..Default::default()
        }],
        ..Default::default()
    });
    let app = init_app!(mock);

    let req = as_moderator(
        test::TestRequest::get().uri(&format!("/api/users/{}", Uuid::new_v4())),
    )
    .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["roles"], json!(["MODERATOR"]));
    assert_eq!(body["groups"], json!(["Moderators"]));
}

#[actix_web::test]
async fn test_get_user_by_id_provider_error_maps_to_500() {
    let mock = Arc::new(MockKeycloak {
        fail_lookup: true,
        ..Default::default()
    });
    let app = init_app!(mock);

    let req = as_moderator(
        test::TestRequest::get().uri(&format!("/api/users/{}", Uuid::new_v4())),
    )
    .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(
        resp.status(),
        actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[actix_web::test]
async fn test_missing_identity_headers_returns_401() {
    let mock = Arc::new(MockKeycloak::default());
    let app = init_app!(mock);

    let req = test::TestRequest::get().uri("/api/users/hello").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_missing_moderator_role_returns_403() {
    let mock = Arc::new(MockKeycloak::default());
    let app = init_app!(mock);

    let req = test::TestRequest::get()
        .uri("/api/users/hello")
        .insert_header((USERNAME_HEADER, "user"))
        .insert_header((ROLES_HEADER, "USER"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_health_check_is_public() {
    let mock = Arc::new(MockKeycloak::default());
    let app = init_app!(mock);

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
}
