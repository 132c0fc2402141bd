//! HTTP 핸들러 계층
//!
//! 요청/응답 변환만 담당하며 비즈니스 로직은 서비스 계층에 위임합니다.

pub mod users;
