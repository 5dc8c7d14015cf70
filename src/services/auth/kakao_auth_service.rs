//! # Kakao OAuth 2.0 어댑터
//!
//! 참고: <https://developers.kakao.com/docs/latest/ko/kakaologin/rest-api>
//!
//! | 용도 | 엔드포인트 | 메서드 |
//! |------|------------|--------|
//! | **Authorization** | `https://kauth.kakao.com/oauth/authorize` | GET |
//! | **Token Exchange / Refresh** | `https://kauth.kakao.com/oauth/token` | POST |
//! | **User Info** | `https://kapi.kakao.com/v2/user/me` | GET |
//!
//! 회원번호는 JSON 숫자로 내려오며 공통 인터페이스에서는 10진수 문자열로 노출됩니다.
//! 이름 동의 항목이 없으면 프로필 닉네임을 이름으로 사용합니다.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::ProviderSetting;
use crate::core::context::RequestContext;
use crate::core::http::HttpExecutor;
use crate::domain::models::oauth::kakao_oauth_model::{KakaoTokenInfo, KakaoUserInfo};
use crate::domain::models::oauth::{ProviderKind, ProviderType, TokenInfo, UserInfo};
use crate::errors::{ErrorKind, OAuthError, OAuthResult};
use crate::services::auth::oauth_request::{build_auth_url, request_token, request_user_info};
use crate::services::auth::Provider;

pub const AUTH_URL: &str = "https://kauth.kakao.com/oauth/authorize";

pub const TOKEN_URL: &str = "https://kauth.kakao.com/oauth/token";

pub const USER_INFO_URL: &str = "https://kapi.kakao.com/v2/user/me";

/// Kakao OAuth 2.0 어댑터
pub struct KakaoAuthService {
    executor: Arc<dyn HttpExecutor>,
    client_id: String,
    client_secret: String,
    redirect_url: String,
    auth_url: String,
    token_url: String,
    user_info_url: String,
}

impl KakaoAuthService {
    pub fn new(setting: ProviderSetting) -> Self {
        Self {
            auth_url: setting.endpoints.resolve_auth_url(AUTH_URL),
            token_url: setting.endpoints.resolve_token_url(TOKEN_URL),
            user_info_url: setting.endpoints.resolve_user_info_url(USER_INFO_URL),
            executor: setting.executor,
            client_id: setting.client_id,
            client_secret: setting.client_secret,
            redirect_url: setting.redirect_url,
        }
    }

    fn provider() -> ProviderType {
        ProviderKind::Kakao.into()
    }

    /// 카카오 로그인 URL 생성
    pub fn get_login_url(&self, state: &str) -> OAuthResult<String> {
        let params = [
            ("client_id", self.client_id.as_str()),
            ("redirect_uri", self.redirect_url.as_str()),
            ("response_type", "code"),
            ("state", state),
        ];

        build_auth_url(&Self::provider(), &self.auth_url, &self.redirect_url, &params)
    }

    /// 인가 코드로 토큰 발급
    pub async fn exchange_code_for_token(&self, ctx: &RequestContext, auth_code: &str) -> OAuthResult<KakaoTokenInfo> {
        if auth_code.is_empty() {
            return Err(OAuthError::wrap(Self::provider(), ErrorKind::EmptyAuthCode, ""));
        }

        let params = [
            ("grant_type", "authorization_code"),
            ("client_id", self.client_id.as_str()),
            ("redirect_uri", self.redirect_url.as_str()),
            ("code", auth_code),
            ("client_secret", self.client_secret.as_str()),
        ];

        request_token(ctx, self.executor.as_ref(), &Self::provider(), &self.token_url, &params).await
    }

    /// 토큰 갱신
    ///
    /// 카카오는 refresh token 만료가 임박한 경우에만 새 refresh token을 내려줍니다.
    pub async fn refresh_access_token(&self, ctx: &RequestContext, refresh_token: &str) -> OAuthResult<KakaoTokenInfo> {
        if refresh_token.is_empty() {
            return Err(OAuthError::wrap(Self::provider(), ErrorKind::EmptyRefreshToken, ""));
        }

        let params = [
            ("grant_type", "refresh_token"),
            ("client_id", self.client_id.as_str()),
            ("refresh_token", refresh_token),
            ("client_secret", self.client_secret.as_str()),
        ];

        request_token(ctx, self.executor.as_ref(), &Self::provider(), &self.token_url, &params).await
    }

    pub async fn get_user_info(&self, ctx: &RequestContext, access_token: &str) -> OAuthResult<KakaoUserInfo> {
        request_user_info(ctx, self.executor.as_ref(), &Self::provider(), &self.user_info_url, access_token).await
    }
}

#[async_trait]
impl Provider for KakaoAuthService {
    fn provider_type(&self) -> ProviderType {
        Self::provider()
    }

    fn auth_url(&self, state: &str) -> OAuthResult<String> {
        self.get_login_url(state)
    }

    async fn exchange_code(&self, ctx: &RequestContext, code: &str) -> OAuthResult<Box<dyn TokenInfo>> {
        let token = self.exchange_code_for_token(ctx, code).await?;
        Ok(Box::new(token))
    }

    async fn refresh_token(&self, ctx: &RequestContext, refresh_token: &str) -> OAuthResult<Box<dyn TokenInfo>> {
        let token = self.refresh_access_token(ctx, refresh_token).await?;
        Ok(Box::new(token))
    }

    async fn user_info(&self, ctx: &RequestContext, access_token: &str) -> OAuthResult<Box<dyn UserInfo>> {
        let user = self.get_user_info(ctx, access_token).await?;
        Ok(Box::new(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::http::{HttpMethod, TransportError};
    use crate::test_support::{form_value, setting_with, MockExecutor};
    use crate::utils::url_utils::query_param;

    fn kakao(executor: &Arc<MockExecutor>) -> KakaoAuthService {
        KakaoAuthService::new(setting_with(executor, "http://localhost/callback?provider=kakao"))
    }

    #[test]
    fn test_auth_url_contains_kakao_parameters() {
        let executor = MockExecutor::json(200, "{}");
        let url = kakao(&executor).auth_url("xyz").unwrap();

        assert!(url.starts_with("https://kauth.kakao.com/oauth/authorize?"));
        assert_eq!(query_param(&url, "client_id").as_deref(), Some("test-client"));
        assert_eq!(
            query_param(&url, "redirect_uri").as_deref(),
            Some("http://localhost/callback?provider=kakao")
        );
        assert_eq!(query_param(&url, "response_type").as_deref(), Some("code"));
        assert_eq!(query_param(&url, "state").as_deref(), Some("xyz"));
        assert!(query_param(&url, "scope").is_none());
        assert_eq!(executor.call_count(), 0);
    }

    #[test]
    fn test_auth_url_requires_redirect_url() {
        let executor = MockExecutor::json(200, "{}");
        let provider = KakaoAuthService::new(setting_with(&executor, ""));

        let error = provider.auth_url("xyz").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::RedirectUrlNotSet);
        assert_eq!(error.to_string(), "kakao provider: redirect URL is not set for provider: ");
    }

    #[tokio::test]
    async fn test_exchange_code_success() {
        let executor = MockExecutor::json(
            200,
            r#"{"token_type":"bearer","access_token":"A","expires_in":21599,"refresh_token":"R","refresh_token_expires_in":5183999}"#,
        );

        let token = kakao(&executor)
            .exchange_code(&RequestContext::background(), "code-123")
            .await
            .unwrap();
        assert_eq!(token.access_token(), "A");
        assert_eq!(token.refresh_token(), "R");
        assert_eq!(token.expiry(), 21599);

        let request = &executor.requests()[0];
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, TOKEN_URL);
        assert_eq!(form_value(request, "grant_type").as_deref(), Some("authorization_code"));
        assert_eq!(form_value(request, "code").as_deref(), Some("code-123"));
        assert_eq!(form_value(request, "client_secret").as_deref(), Some("test-secret"));
    }

    #[tokio::test]
    async fn test_exchange_code_non_200_carries_body() {
        let executor = MockExecutor::json(500, "rate limited");

        let error = kakao(&executor)
            .exchange_code(&RequestContext::background(), "c")
            .await
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::TokenRequestFailed);
        assert_eq!(error.context(), "rate limited");
        assert_eq!(error.to_string(), "kakao provider: failed to get access token: rate limited");
    }

    #[tokio::test]
    async fn test_exchange_code_invalid_json() {
        let executor = MockExecutor::json(200, "not json");

        let error = kakao(&executor)
            .exchange_code(&RequestContext::background(), "c")
            .await
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::TokenRequestFailed);
    }

    #[tokio::test]
    async fn test_refresh_token_success() {
        let executor = MockExecutor::json(200, r#"{"access_token":"A2","expires_in":21599}"#);

        let token = kakao(&executor)
            .refresh_token(&RequestContext::background(), "R")
            .await
            .unwrap();
        assert_eq!(token.access_token(), "A2");
        assert_eq!(token.refresh_token(), "");

        let request = &executor.requests()[0];
        assert_eq!(form_value(request, "grant_type").as_deref(), Some("refresh_token"));
        assert_eq!(form_value(request, "refresh_token").as_deref(), Some("R"));
    }

    #[tokio::test]
    async fn test_empty_refresh_token_issues_no_request() {
        let executor = MockExecutor::json(200, "{}");

        let error = kakao(&executor)
            .refresh_token(&RequestContext::background(), "")
            .await
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::EmptyRefreshToken);
        assert_eq!(executor.call_count(), 0);
    }

    #[tokio::test]
    async fn test_user_info_numeric_id_and_nickname_fallback() {
        let executor = MockExecutor::json(
            200,
            r#"{"id":1001,"kakao_account":{"email":"a@b.c","profile":{"nickname":"nick","profile_image_url":"http://img"},"gender":"female"}}"#,
        );

        let user = kakao(&executor)
            .user_info(&RequestContext::background(), "A")
            .await
            .unwrap();
        assert_eq!(user.id(), "1001");
        assert_eq!(user.email(), "a@b.c");
        assert_eq!(user.name(), "nick");
        assert_eq!(user.gender(), "female");
        assert_eq!(user.profile_image(), "http://img");

        let request = &executor.requests()[0];
        assert_eq!(request.url, USER_INFO_URL);
        assert_eq!(request.header_value("Authorization"), Some("Bearer A"));
    }

    #[tokio::test]
    async fn test_user_info_ignores_status_code() {
        let executor = MockExecutor::json(401, r#"{"msg":"this access token does not exist","code":-401}"#);

        // 401 본문도 디코딩을 시도하며 id가 없으면 0으로 채워집니다
        let user = kakao(&executor)
            .user_info(&RequestContext::background(), "expired")
            .await
            .unwrap();
        assert_eq!(user.id(), "0");
        assert_eq!(user.email(), "");

        let executor = MockExecutor::failing(TransportError::Read("unexpected eof".to_string()));
        let error = kakao(&executor)
            .user_info(&RequestContext::background(), "A")
            .await
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::UserInfoRequestFailed);
        assert!(error.context().contains("unexpected eof"));
    }

    #[tokio::test]
    async fn test_null_refresh_token_and_profile_fields() {
        let executor = MockExecutor::json(200, r#"{"access_token":"A","expires_in":21599,"refresh_token":null}"#);
        let token = kakao(&executor)
            .exchange_code(&RequestContext::background(), "code")
            .await
            .unwrap();
        assert_eq!(token.access_token(), "A");
        assert_eq!(token.refresh_token(), "");

        let executor = MockExecutor::json(
            200,
            r#"{"id":1001,"kakao_account":{"email":null,"name":null,"profile":{"nickname":"nick","profile_image_url":null}}}"#,
        );
        let user = kakao(&executor)
            .user_info(&RequestContext::background(), "A")
            .await
            .unwrap();
        assert_eq!(user.id(), "1001");
        assert_eq!(user.email(), "");
        assert_eq!(user.name(), "nick");
        assert_eq!(user.profile_image(), "");
    }
}
