//! 사용자 관리 파사드 서비스
//!
//! Keycloak 호환 아이덴티티 프로바이더의 어드민 API 위에 올라가는
//! 얇은 REST 파사드입니다. 사용자 생성과 조회(역할/그룹 집계 포함)를
//! 제공하며, 요청별로 상태를 갖지 않습니다.
//!
//! # Features
//!
//! - **사용자 생성**: 검증된 요청을 프로바이더 표현으로 변환하여 전달
//! - **사용자 조회**: 프로필 + realm 역할 이름 + 그룹 이름 집계
//! - **게이트웨이 아이덴티티**: 업스트림이 단언한 헤더 기반 역할 접근 제어
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증/응답 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 표현 변환/집계
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Keycloak Client │ ← 어드민 REST API 호출
//! └─────────────────┘
//! ```

pub mod clients;
pub mod config;
pub mod core;
pub mod domain;
pub mod handlers;
pub mod middlewares;
pub mod routes;
pub mod services;
pub mod utils;
