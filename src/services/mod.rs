//! 비즈니스 로직 계층
//!
//! 핸들러와 외부 클라이언트 사이에서 도메인 규칙을 수행합니다.

pub mod users;
