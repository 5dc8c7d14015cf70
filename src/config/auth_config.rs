//! # OAuth Configuration Module
//!
//! 환경 변수 기반 OAuth 설정을 관리합니다.
//!
//! ## 프로바이더별 환경 변수
//!
//! `{PREFIX}`는 `GOOGLE`, `KAKAO`, `NAVER` 중 하나입니다.
//!
//! ```bash
//! export KAKAO_CLIENT_ID="your-kakao-rest-api-key"
//! export KAKAO_CLIENT_SECRET="your-kakao-client-secret"
//! export KAKAO_REDIRECT_URL="http://localhost:8080/callback?provider=kakao"
//!
//! # 선택: 엔드포인트 재정의
//! export KAKAO_AUTH_URL="..."
//! export KAKAO_TOKEN_URL="..."
//! export KAKAO_USER_INFO_URL="..."
//! ```
//!
//! ## 공통 환경 변수
//!
//! ```bash
//! export OAUTH_REQUEST_TIMEOUT_SECS="10"
//! ```

use std::env;
use std::sync::Arc;

use crate::config::provider_config::{ProviderEndpoints, ProviderSetting};
use crate::core::http::HttpExecutor;
use crate::domain::models::oauth::ProviderKind;

pub struct OAuthConfig;

impl OAuthConfig {
    /// 프로바이더 요청 타임아웃 (초)
    pub fn request_timeout_secs() -> u64 {
        env::var("OAUTH_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10)
    }
}

/// 환경 변수에서 읽은 프로바이더 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderEnvConfig {
    pub kind: ProviderKind,
    pub client_id: String,
    pub client_secret: String,
    pub redirect_url: String,
    pub endpoints: ProviderEndpoints,
}

impl ProviderEnvConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    ///
    /// `{PREFIX}_CLIENT_ID`가 없으면 해당 프로바이더는 비활성으로 보고 `None`을 반환합니다.
    pub fn load(kind: ProviderKind) -> Option<Self> {
        Self::from_lookup(kind, |key| env::var(key).ok())
    }

    /// 임의의 조회 함수로 설정을 읽습니다.
    pub fn from_lookup<F>(kind: ProviderKind, lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let prefix = kind.env_prefix();
        let read = |suffix: &str| {
            lookup(&format!("{}_{}", prefix, suffix)).filter(|value| !value.trim().is_empty())
        };

        let Some(client_id) = read("CLIENT_ID") else {
            log::warn!("{}_CLIENT_ID not set, {} provider disabled", prefix, kind);
            return None;
        };

        let client_secret = read("CLIENT_SECRET").unwrap_or_else(|| {
            log::warn!("{}_CLIENT_SECRET not set", prefix);
            String::new()
        });

        let redirect_url = read("REDIRECT_URL").unwrap_or_else(|| {
            log::warn!("{}_REDIRECT_URL not set, auth URL generation will fail", prefix);
            String::new()
        });

        Some(Self {
            kind,
            client_id,
            client_secret,
            redirect_url,
            endpoints: ProviderEndpoints {
                auth_url: read("AUTH_URL"),
                token_url: read("TOKEN_URL"),
                user_info_url: read("USER_INFO_URL"),
            },
        })
    }

    pub fn into_setting(self, executor: Arc<dyn HttpExecutor>) -> ProviderSetting {
        ProviderSetting::new(executor, self.client_id, self.client_secret, self.redirect_url)
            .with_endpoints(self.endpoints)
    }
}
