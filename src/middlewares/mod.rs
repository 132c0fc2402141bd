//! 미들웨어 모듈
//!
//! ActixWeb 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 아이덴티티 미들웨어 (IdentityMiddleware)
//! - 게이트웨이가 단언한 아이덴티티 헤더 파싱
//! - 호출자 정보를 request extension에 저장
//! - 선택적/강제 모드 및 역할 기반 접근 제어 지원
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::middlewares::IdentityMiddleware;
//!
//! App::new().service(
//!     web::scope("/api/users")
//!         .wrap(IdentityMiddleware::required_with_role("MODERATOR"))
//!         .service(handlers::users::get_user)
//! )
//! ```

pub mod identity_middleware;
mod identity_inner;

pub use identity_inner::{ROLES_HEADER, USERNAME_HEADER};
pub use identity_middleware::IdentityMiddleware;
