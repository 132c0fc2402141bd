//! 핵심 공통 모듈
//!
//! 애플리케이션 전역에서 사용되는 에러 타입을 제공합니다.

pub mod errors;

pub use errors::{AppError, AppResult};
