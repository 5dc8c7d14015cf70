//! 프로바이더 어댑터 생성 설정
//!
//! [`ProviderSetting`]은 애플리케이션 시작 시 한 번 만들어져 어댑터에 넘겨지며,
//! 이후에는 변경되지 않습니다.

use std::fmt;
use std::sync::Arc;

use crate::core::http::HttpExecutor;

/// 엔드포인트 재정의
///
/// `None`인 항목은 각 프로바이더의 공개 엔드포인트를 사용합니다.
/// 게이트웨이를 거치거나 로컬 테스트 서버를 사용할 때 지정합니다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderEndpoints {
    pub auth_url: Option<String>,
    pub token_url: Option<String>,
    pub user_info_url: Option<String>,
}

impl ProviderEndpoints {
    /// 모든 엔드포인트를 같은 base URL 아래 경로로 재정의합니다.
    ///
    /// ```rust,ignore
    /// let endpoints = ProviderEndpoints::with_base_url("http://127.0.0.1:9000", "/authorize", "/token", "/me");
    /// ```
    pub fn with_base_url(base_url: &str, auth_path: &str, token_path: &str, user_info_path: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            auth_url: Some(format!("{}{}", base, auth_path)),
            token_url: Some(format!("{}{}", base, token_path)),
            user_info_url: Some(format!("{}{}", base, user_info_path)),
        }
    }

    pub(crate) fn resolve_auth_url(&self, default: &str) -> String {
        self.auth_url.clone().unwrap_or_else(|| default.to_string())
    }

    pub(crate) fn resolve_token_url(&self, default: &str) -> String {
        self.token_url.clone().unwrap_or_else(|| default.to_string())
    }

    pub(crate) fn resolve_user_info_url(&self, default: &str) -> String {
        self.user_info_url.clone().unwrap_or_else(|| default.to_string())
    }
}

/// 어댑터 초기화 설정
///
/// ```rust,ignore
/// let setting = ProviderSetting::new(
///     Arc::new(ReqwestExecutor::new()),
///     "client-id",
///     "client-secret",
///     "http://localhost:8080/callback?provider=kakao",
/// );
/// let kakao = KakaoAuthService::new(setting);
/// ```
#[derive(Clone)]
pub struct ProviderSetting {
    pub executor: Arc<dyn HttpExecutor>,
    pub client_id: String,
    pub client_secret: String,
    pub redirect_url: String,
    pub endpoints: ProviderEndpoints,
}

impl ProviderSetting {
    pub fn new(
        executor: Arc<dyn HttpExecutor>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_url: impl Into<String>,
    ) -> Self {
        Self {
            executor,
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_url: redirect_url.into(),
            endpoints: ProviderEndpoints::default(),
        }
    }

    pub fn with_endpoints(mut self, endpoints: ProviderEndpoints) -> Self {
        self.endpoints = endpoints;
        self
    }
}

// client_secret은 로그에 남기지 않습니다
impl fmt::Debug for ProviderSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderSetting")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("redirect_url", &self.redirect_url)
            .field("endpoints", &self.endpoints)
            .finish()
    }
}
