//! 공통 유틸리티 모음

pub mod string_utils;
