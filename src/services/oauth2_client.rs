//! # OAuth2 Client
//!
//! 프로바이더 식별자로 등록된 어댑터를 찾아 요청을 위임하는 단일 진입점입니다.
//!
//! ```text
//! OAuth2Client::request_token(ctx, "kakao", code)
//!        │
//!        ├─ registry.get("kakao") ── None ──► Err(ProviderNotSet)
//!        │
//!        └─ Some(adapter) ──► adapter.exchange_code(ctx, code)  (결과/에러 그대로 반환)
//! ```
//!
//! 클라이언트는 생성 후 변경되지 않으므로 여러 태스크에서 공유해도 안전합니다.

use std::sync::Arc;

use crate::config::ProviderEnvConfig;
use crate::core::context::RequestContext;
use crate::core::http::HttpExecutor;
use crate::core::registry::ProviderRegistry;
use crate::domain::models::oauth::{ProviderKind, ProviderType, TokenInfo, UserInfo};
use crate::errors::{OAuthError, OAuthResult};
use crate::services::auth::{build_provider, Provider};

/// 프로바이더 디스패치 클라이언트
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let client = OAuth2Client::new(vec![
///     build_provider(ProviderKind::Google, google_setting),
///     build_provider(ProviderKind::Kakao, kakao_setting),
/// ]);
///
/// let url = client.request_auth_url("kakao", &state);
/// let token = client.request_token(&ctx, "kakao", &code).await?;
/// let user = client.request_user_info(&ctx, "kakao", token.access_token()).await?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct OAuth2Client {
    registry: ProviderRegistry,
}

impl OAuth2Client {
    /// 같은 식별자를 가진 프로바이더가 여럿이면 마지막 것이 사용됩니다.
    pub fn new<I>(providers: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Provider>>,
    {
        Self {
            registry: ProviderRegistry::from_providers(providers),
        }
    }

    /// 환경 변수 설정이 있는 프로바이더만 등록합니다.
    pub fn from_env(executor: Arc<dyn HttpExecutor>) -> Self {
        Self::from_lookup(executor, |key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(executor: Arc<dyn HttpExecutor>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let providers: Vec<Arc<dyn Provider>> = ProviderKind::ALL
            .into_iter()
            .filter_map(|kind| {
                ProviderEnvConfig::from_lookup(kind, &lookup)
                    .map(|config| build_provider(kind, config.into_setting(executor.clone())))
            })
            .collect();

        let client = Self::new(providers);
        log::info!("OAuth 프로바이더 등록 완료: {:?}", client.providers());
        client
    }

    /// 등록된 프로바이더 식별자 (정렬됨)
    pub fn providers(&self) -> Vec<ProviderType> {
        self.registry.provider_types()
    }

    /// 인증 URL을 반환합니다.
    ///
    /// 프로바이더가 없거나 URL을 만들 수 없으면 빈 문자열을 반환합니다.
    pub fn request_auth_url(&self, provider: impl AsRef<str>, state: &str) -> String {
        let provider = provider.as_ref();
        let Some(adapter) = self.registry.get(provider) else {
            log::debug!("등록되지 않은 프로바이더: {}", provider);
            return String::new();
        };

        match adapter.auth_url(state) {
            Ok(url) => url,
            Err(e) => {
                log::debug!("인증 URL 생성 실패: {}", e);
                String::new()
            }
        }
    }

    pub async fn request_token(
        &self,
        ctx: &RequestContext,
        provider: impl AsRef<str>,
        code: &str,
    ) -> OAuthResult<Box<dyn TokenInfo>> {
        self.lookup(provider.as_ref())?.exchange_code(ctx, code).await
    }

    pub async fn request_refresh_token(
        &self,
        ctx: &RequestContext,
        provider: impl AsRef<str>,
        refresh_token: &str,
    ) -> OAuthResult<Box<dyn TokenInfo>> {
        self.lookup(provider.as_ref())?.refresh_token(ctx, refresh_token).await
    }

    pub async fn request_user_info(
        &self,
        ctx: &RequestContext,
        provider: impl AsRef<str>,
        access_token: &str,
    ) -> OAuthResult<Box<dyn UserInfo>> {
        self.lookup(provider.as_ref())?.user_info(ctx, access_token).await
    }

    fn lookup(&self, provider: &str) -> OAuthResult<&Arc<dyn Provider>> {
        self.registry
            .get(provider)
            .ok_or_else(|| OAuthError::ProviderNotSet(ProviderType::new(provider)))
    }
}
