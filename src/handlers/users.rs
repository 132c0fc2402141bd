//! # User Administration HTTP Handlers
//!
//! 사용자 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 로직의 대부분은 [`UserService`]를 거쳐 아이덴티티 프로바이더로 위임되며,
//! 핸들러는 검증과 응답 변환만 담당합니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/users/hello` | 호출자 사용자명 반환 | 200 OK |
//! | `POST` | `/api/users` | 새 사용자 생성 | 200 OK / 400 / 500 |
//! | `GET` | `/api/users/{id}` | 사용자 + 역할 + 그룹 조회 | 200 OK / 500 |

use actix_web::{get, post, web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::users::request::UserRequest;
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::users::UserService;

/// 호출자 확인 핸들러
///
/// 게이트웨이가 단언한 호출자의 사용자명을 그대로 반환합니다.
///
/// # 엔드포인트
///
/// `GET /api/users/hello`
#[get("/hello")]
pub async fn hello(caller: AuthenticatedUser) -> HttpResponse {
    HttpResponse::Ok().body(caller.username)
}

/// 사용자 생성 핸들러
///
/// 입력 검증을 통과한 요청만 아이덴티티 프로바이더로 전달합니다.
/// 프로바이더가 정상 응답하면 200, 검증 실패는 400,
/// 프로바이더 측 실패는 500으로 응답합니다.
///
/// # 엔드포인트
///
/// `POST /api/users`
///
/// # 요청 본문
///
/// ```json
/// {
///   "username": "grigory",
///   "email": "grigory@example.com",
///   "password": "12345",
///   "firstName": "Grisha",
///   "lastName": "Rururu"
/// }
/// ```
#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<UserRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사 - 실패하면 프로바이더 호출 없이 즉시 거부
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "사용자가 생성되었습니다"
    })))
}

/// 사용자 조회 핸들러
///
/// 프로필, realm 역할 이름, 그룹 이름을 집계하여 반환합니다.
/// 프로바이더 측 실패(존재하지 않는 ID 포함)는 500으로 응답합니다.
///
/// # 엔드포인트
///
/// `GET /api/users/{id}` - `{id}`는 UUID
#[get("/{id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    user_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_user_by_id(user_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(user))
}
