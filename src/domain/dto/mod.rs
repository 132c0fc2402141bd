//! HTTP 요청/응답 DTO 모음

pub mod users;
