//! # Services
//!
//! - [`auth`] - 프로바이더 어댑터와 공통 [`auth::Provider`] 트레이트
//! - [`oauth2_client`] - 프로바이더 식별자 기반 디스패치 클라이언트

pub mod auth;
pub mod oauth2_client;

pub use oauth2_client::OAuth2Client;
