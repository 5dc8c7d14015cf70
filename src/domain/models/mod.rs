//! # Domain Models
//!
//! 외부 OAuth 프로바이더가 반환하는 JSON 응답 모델입니다.
//! 각 모델은 [`oauth::TokenInfo`] / [`oauth::UserInfo`]를 구현해
//! 프로바이더에 관계없이 같은 방식으로 읽을 수 있습니다.

pub mod oauth;

pub use oauth::*;
