//! # Configuration Module
//!
//! OAuth 클라이언트 설정을 담당하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! - [`provider_config`] - 어댑터 생성 설정 (`ProviderSetting`, `ProviderEndpoints`)
//! - [`auth_config`] - 환경 변수 기반 설정 (`ProviderEnvConfig`, `OAuthConfig`)
//!
//! ## 설계 원칙
//!
//! - 설정은 시작 시 한 번 만들어지고 이후 변경되지 않습니다.
//! - 민감한 정보(client secret)는 환경 변수로만 제공하며 로그에 남기지 않습니다.
//! - 라이브러리 코드는 설정 누락으로 패닉하지 않습니다. 누락된 프로바이더는 비활성화됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use social_oauth2::config::{ProviderEnvConfig, OAuthConfig};
//! use social_oauth2::domain::ProviderKind;
//!
//! if let Some(config) = ProviderEnvConfig::load(ProviderKind::Google) {
//!     let setting = config.into_setting(executor.clone());
//! }
//! let timeout = OAuthConfig::request_timeout_secs();
//! ```

pub mod provider_config;
pub mod auth_config;

pub use provider_config::*;
pub use auth_config::*;
