//! # Naver OAuth 2.0 어댑터
//!
//! 참고: <https://developers.naver.com/docs/login/api/api.md>
//!
//! | 용도 | 엔드포인트 | 메서드 |
//! |------|------------|--------|
//! | **Authorization** | `https://nid.naver.com/oauth2.0/authorize` | GET |
//! | **Token Exchange / Refresh** | `https://nid.naver.com/oauth2.0/token` | POST |
//! | **User Info** | `https://openapi.naver.com/v1/nid/me` | GET |
//!
//! 토큰 응답의 `expires_in`은 문자열이며, 프로필은 `response` 객체 안에 담겨 옵니다.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::ProviderSetting;
use crate::core::context::RequestContext;
use crate::core::http::HttpExecutor;
use crate::domain::models::oauth::naver_oauth_model::{NaverTokenInfo, NaverUserInfo};
use crate::domain::models::oauth::{ProviderKind, ProviderType, TokenInfo, UserInfo};
use crate::errors::{ErrorKind, OAuthError, OAuthResult};
use crate::services::auth::oauth_request::{build_auth_url, request_token, request_user_info};
use crate::services::auth::Provider;

pub const AUTH_URL: &str = "https://nid.naver.com/oauth2.0/authorize";

pub const TOKEN_URL: &str = "https://nid.naver.com/oauth2.0/token";

pub const USER_INFO_URL: &str = "https://openapi.naver.com/v1/nid/me";

pub struct NaverAuthService {
    executor: Arc<dyn HttpExecutor>,
    client_id: String,
    client_secret: String,
    redirect_url: String,
    auth_url: String,
    token_url: String,
    user_info_url: String,
}

impl NaverAuthService {
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
        ProviderKind::Naver.into()
    }

    /// 네이버 로그인 URL 생성
    pub fn get_login_url(&self, state: &str) -> OAuthResult<String> {
        let params = [
            ("response_type", "code"),
            ("client_id", self.client_id.as_str()),
            ("redirect_uri", self.redirect_url.as_str()),
            ("state", state),
        ];

        build_auth_url(&Self::provider(), &self.auth_url, &self.redirect_url, &params)
    }

    /// 접근 토큰 발급 요청
    pub async fn exchange_code_for_token(&self, ctx: &RequestContext, auth_code: &str) -> OAuthResult<NaverTokenInfo> {
        if auth_code.is_empty() {
            return Err(OAuthError::wrap(Self::provider(), ErrorKind::EmptyAuthCode, ""));
        }

        let params = [
            ("grant_type", "authorization_code"),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("code", auth_code),
            ("redirect_uri", self.redirect_url.as_str()),
        ];

        request_token(ctx, self.executor.as_ref(), &Self::provider(), &self.token_url, &params).await
    }

    /// 접근 토큰 갱신 요청
    pub async fn refresh_access_token(&self, ctx: &RequestContext, refresh_token: &str) -> OAuthResult<NaverTokenInfo> {
        if refresh_token.is_empty() {
            return Err(OAuthError::wrap(Self::provider(), ErrorKind::EmptyRefreshToken, ""));
        }

        let params = [
            ("grant_type", "refresh_token"),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("refresh_token", refresh_token),
        ];

        request_token(ctx, self.executor.as_ref(), &Self::provider(), &self.token_url, &params).await
    }

    /// 회원 프로필 조회. `resultcode`는 검증하지 않습니다.
    pub async fn get_user_info(&self, ctx: &RequestContext, access_token: &str) -> OAuthResult<NaverUserInfo> {
        request_user_info(ctx, self.executor.as_ref(), &Self::provider(), &self.user_info_url, access_token).await
    }
}

#[async_trait]
impl Provider for NaverAuthService {
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
    use std::time::Duration;

    use tokio_util::sync::CancellationToken;

    use crate::core::http::{HttpResponse, TransportError};
    use crate::test_support::{form_value, setting_with, MockExecutor};
    use crate::utils::url_utils::query_param;

    fn naver(executor: &Arc<MockExecutor>) -> NaverAuthService {
        NaverAuthService::new(setting_with(executor, "http://localhost/callback"))
    }

    #[test]
    fn test_auth_url_parameter_order() {
        let executor = MockExecutor::json(200, "{}");
        let url = naver(&executor).auth_url("s1").unwrap();

        assert_eq!(
            url,
            "https://nid.naver.com/oauth2.0/authorize?response_type=code&client_id=test-client\
             &redirect_uri=http%3A%2F%2Flocalhost%2Fcallback&state=s1"
        );
        assert_eq!(query_param(&url, "state").as_deref(), Some("s1"));
    }

    #[tokio::test]
    async fn test_exchange_code_string_expiry() {
        let executor = MockExecutor::json(
            200,
            r#"{"access_token":"AAA","refresh_token":"RRR","token_type":"bearer","expires_in":"3600"}"#,
        );

        let token = naver(&executor)
            .exchange_code(&RequestContext::background(), "code")
            .await
            .unwrap();
        assert_eq!(token.access_token(), "AAA");
        assert_eq!(token.refresh_token(), "RRR");
        assert_eq!(token.expiry(), 3600);

        let request = &executor.requests()[0];
        assert_eq!(request.url, TOKEN_URL);
        assert_eq!(form_value(request, "grant_type").as_deref(), Some("authorization_code"));
        assert_eq!(form_value(request, "client_secret").as_deref(), Some("test-secret"));
        assert_eq!(form_value(request, "code").as_deref(), Some("code"));
    }

    #[tokio::test]
    async fn test_malformed_expiry_defaults_to_zero() {
        let executor = MockExecutor::json(200, r#"{"access_token":"AAA","expires_in":"soon"}"#);

        let token = naver(&executor)
            .refresh_token(&RequestContext::background(), "RRR")
            .await
            .unwrap();
        assert_eq!(token.expiry(), 0);

        let request = &executor.requests()[0];
        assert_eq!(form_value(request, "grant_type").as_deref(), Some("refresh_token"));
        assert_eq!(form_value(request, "refresh_token").as_deref(), Some("RRR"));
    }

    #[tokio::test]
    async fn test_empty_code_issues_no_request() {
        let executor = MockExecutor::json(200, "{}");

        let error = naver(&executor)
            .exchange_code(&RequestContext::background(), "")
            .await
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::EmptyAuthCode);
        assert_eq!(error.to_string(), "naver provider: authorization code is empty: ");
        assert_eq!(executor.call_count(), 0);
    }

    #[tokio::test]
    async fn test_user_info_nested_response() {
        let executor = MockExecutor::json(
            200,
            r#"{"resultcode":"00","message":"success","response":{"id":"n-1","email":"n@naver.com","name":"네이버","gender":"M","profile_image":"http://img"}}"#,
        );

        let user = naver(&executor)
            .user_info(&RequestContext::background(), "AAA")
            .await
            .unwrap();
        assert_eq!(user.id(), "n-1");
        assert_eq!(user.email(), "n@naver.com");
        assert_eq!(user.name(), "네이버");
        assert_eq!(user.gender(), "M");
        assert_eq!(user.profile_image(), "http://img");
    }

    #[tokio::test]
    async fn test_cancelled_context_reports_token_failure() {
        let executor = MockExecutor::new(|_| Ok(HttpResponse::new(200, "{}")));
        let token = CancellationToken::new();
        token.cancel();
        let ctx = RequestContext::background().with_cancellation(token);

        let error = naver(&executor).exchange_code(&ctx, "code").await.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::TokenRequestFailed);
        assert_eq!(error.context(), TransportError::Cancelled.to_string());
    }

    #[tokio::test]
    async fn test_deadline_reports_user_info_failure() {
        let executor = MockExecutor::delayed(Duration::from_secs(5), HttpResponse::new(200, "{}"));
        let ctx = RequestContext::background().with_timeout(Duration::from_millis(20));

        let error = naver(&executor).user_info(&ctx, "AAA").await.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::UserInfoRequestFailed);
        assert!(error.context().contains("timed out"));
    }

    #[tokio::test]
    async fn test_refresh_token_transport_error() {
        let executor = MockExecutor::failing(TransportError::Request("connection refused".to_string()));

        let error = naver(&executor)
            .refresh_token(&RequestContext::background(), "RRR")
            .await
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::TokenRequestFailed);
        assert!(error.context().contains("connection refused"));
        assert_eq!(executor.call_count(), 1);
    }

    #[tokio::test]
    async fn test_null_fields_decode_as_empty() {
        let executor = MockExecutor::json(200, r#"{"access_token":"AAA","refresh_token":null,"expires_in":"3600"}"#);
        let token = naver(&executor)
            .exchange_code(&RequestContext::background(), "code")
            .await
            .unwrap();
        assert_eq!(token.refresh_token(), "");
        assert_eq!(token.expiry(), 3600);

        let executor = MockExecutor::json(
            200,
            r#"{"resultcode":"00","message":"success","response":{"id":"n-1","email":null,"name":null,"gender":null,"profile_image":null}}"#,
        );
        let user = naver(&executor)
            .user_info(&RequestContext::background(), "AAA")
            .await
            .unwrap();
        assert_eq!(user.id(), "n-1");
        assert_eq!(user.email(), "");
        assert_eq!(user.name(), "");
    }
}
