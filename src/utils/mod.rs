//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`url_utils`] - 쿼리스트링/form 인코딩과 파싱
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::url_utils::append_query;
//!
//! let url = append_query("https://kauth.kakao.com/oauth/authorize", &[("state", "xyz")]);
//! ```

pub mod url_utils;
