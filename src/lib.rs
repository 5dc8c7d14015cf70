//! 소셜 OAuth 2.0 클라이언트
//!
//! Google, Kakao, Naver의 OAuth 2.0 Authorization Code Flow를
//! 하나의 인터페이스로 다루는 클라이언트 라이브러리입니다.
//!
//! # Features
//!
//! - **인증 URL 생성**: 프로바이더별 파라미터를 포함한 로그인 URL
//! - **토큰 교환/갱신**: Authorization Code 교환, Refresh Token 갱신
//! - **사용자 정보 조회**: 프로바이더별 응답을 [`UserInfo`]로 정규화
//! - **에러 분류**: 프로바이더 이름과 원인을 담은 [`OAuthError`]
//! - **취소/타임아웃**: [`RequestContext`]로 요청 단위 제어
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  OAuth2Client   │ ← 프로바이더 식별자로 디스패치
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ProviderRegistry │ ← "google" / "kakao" / "naver" → 어댑터
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Adapters     │ ← Google / Kakao / Naver AuthService
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  HttpExecutor   │ ← reqwest (교체 가능)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//! use social_oauth2::{OAuth2Client, ReqwestExecutor, RequestContext};
//!
//! let client = OAuth2Client::from_env(Arc::new(ReqwestExecutor::new()));
//! let login_url = client.request_auth_url("kakao", &state);
//!
//! let ctx = RequestContext::background().with_timeout(Duration::from_secs(10));
//! let token = client.request_token(&ctx, "kakao", &code).await?;
//! let user = client.request_user_info(&ctx, "kakao", token.access_token()).await?;
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod services;
pub mod utils;
pub mod errors;

#[cfg(test)]
mod test_support;

pub use crate::core::{HttpExecutor, ProviderRegistry, ReqwestExecutor, RequestContext, TransportError};
pub use config::{ProviderEndpoints, ProviderSetting};
pub use domain::models::oauth::{ProviderKind, ProviderType, TokenInfo, UserInfo};
pub use errors::{ErrorKind, OAuthError, OAuthResult};
pub use services::auth::{build_provider, Provider};
pub use services::OAuth2Client;
