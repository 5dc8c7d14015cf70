//! 에러 타입 모듈
//!
//! - [`errors`] - `OAuthError`, `ErrorKind`, `OAuthResult`

pub mod errors;

pub use errors::{ErrorKind, OAuthError, OAuthResult, ProviderErrorContext};
