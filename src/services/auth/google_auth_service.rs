//! # Google OAuth 2.0 어댑터
//!
//! Google OAuth 2.0 Authorization Code Flow를 공통 [`Provider`] 인터페이스로 제공합니다.
//! 참고: <https://developers.google.com/identity/protocols/oauth2>
//!
//! ## OAuth 2.0 Authorization Code Flow
//!
//! ```text
//! ┌──────────┐                 ┌──────────────┐                 ┌──────────────┐
//! │  호출자   │                 │ GoogleAuth   │                 │ Google OAuth │
//! └──────────┘                 └──────────────┘                 └──────────────┘
//!      │ 1. auth_url(state)           │                                │
//!      ├─────────────────────────────►│                                │
//!      │◄─────────────────────────────┤ (네트워크 호출 없음)            │
//!      │ 2. 사용자 리다이렉트 → 로그인 → callback?code=...&state=...    │
//!      │ 3. exchange_code(code)       │                                │
//!      ├─────────────────────────────►│ POST /token                    │
//!      │                              ├───────────────────────────────►│
//!      │                              │◄───────────────────────────────┤
//!      │◄─────────────────────────────┤ GoogleTokenInfo                │
//!      │ 4. user_info(access_token)   │                                │
//!      ├─────────────────────────────►│ GET /oauth2/v2/userinfo        │
//!      │                              ├───────────────────────────────►│
//!      │◄─────────────────────────────┤ GoogleUserInfo                 │
//! ```
//!
//! state 값의 생성과 검증(CSRF 방지)은 호출자의 책임입니다.
//!
//! ## 사용하는 Google API 엔드포인트
//!
//! | 용도 | 엔드포인트 | 메서드 |
//! |------|------------|--------|
//! | **Authorization** | `https://accounts.google.com/o/oauth2/v2/auth` | GET |
//! | **Token Exchange / Refresh** | `https://oauth2.googleapis.com/token` | POST |
//! | **User Info** | `https://www.googleapis.com/oauth2/v2/userinfo` | GET |
//!
//! ### 요청 스코프
//!
//! - `openid`: OpenID Connect 식별자
//! - `email`: 사용자 이메일 주소
//! - `profile`: 기본 프로필 정보 (이름, 사진 등)
//!
//! refresh token을 받기 위해 `access_type=offline`, `prompt=consent`를 함께 요청합니다.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::ProviderSetting;
use crate::core::context::RequestContext;
use crate::core::http::HttpExecutor;
use crate::domain::models::oauth::google_oauth_model::{GoogleTokenInfo, GoogleUserInfo};
use crate::domain::models::oauth::{ProviderKind, ProviderType, TokenInfo, UserInfo};
use crate::errors::{ErrorKind, OAuthError, OAuthResult};
use crate::services::auth::oauth_request::{build_auth_url, request_token, request_user_info};
use crate::services::auth::Provider;

pub const AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";

pub const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

pub const USER_INFO_URL: &str = "https://www.googleapis.com/oauth2/v2/userinfo";

/// Google 로그인 요청 스코프
pub const SCOPES: [&str; 3] = ["openid", "email", "profile"];

/// Google OAuth 2.0 어댑터
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use social_oauth2::services::auth::GoogleAuthService;
///
/// let google = GoogleAuthService::new(ProviderSetting::new(
///     executor,
///     "your-client-id.apps.googleusercontent.com",
///     "your-client-secret",
///     "https://yourapp.com/callback?provider=google",
/// ));
///
/// // 1. 로그인 URL 생성
/// let login_url = google.auth_url(&state)?;
///
/// // 2. 콜백에서 받은 코드 교환
/// let token = google.exchange_code_for_token(&ctx, &code).await?;
///
/// // 3. 사용자 정보 조회
/// let user = google.get_user_info(&ctx, &token.access_token).await?;
/// ```
pub struct GoogleAuthService {
    executor: Arc<dyn HttpExecutor>,
    client_id: String,
    client_secret: String,
    redirect_url: String,
    auth_url: String,
    token_url: String,
    user_info_url: String,
}

impl GoogleAuthService {
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
        ProviderKind::Google.into()
    }

    /// Google OAuth 로그인 URL 생성
    ///
    /// # 생성되는 URL 구조
    ///
    /// ```text
    /// https://accounts.google.com/o/oauth2/v2/auth?
    ///   client_id=YOUR_CLIENT_ID&
    ///   redirect_uri=https://yourapp.com/callback&
    ///   response_type=code&
    ///   scope=openid%20email%20profile&
    ///   state=CALLER_STATE&
    ///   access_type=offline&
    ///   prompt=consent
    /// ```
    pub fn get_login_url(&self, state: &str) -> OAuthResult<String> {
        let scope = SCOPES.join(" ");
        let params = [
            ("client_id", self.client_id.as_str()),
            ("redirect_uri", self.redirect_url.as_str()),
            ("response_type", "code"),
            ("scope", scope.as_str()),
            ("state", state),
            ("access_type", "offline"),
            ("prompt", "consent"),
        ];

        build_auth_url(&Self::provider(), &self.auth_url, &self.redirect_url, &params)
    }

    /// Authorization Code를 액세스 토큰으로 교환
    ///
    /// # 요청 형식
    ///
    /// ```text
    /// POST https://oauth2.googleapis.com/token
    /// Content-Type: application/x-www-form-urlencoded
    ///
    /// code=...&client_id=...&client_secret=...&redirect_uri=...&grant_type=authorization_code
    /// ```
    ///
    /// # 반환값
    ///
    /// * `Ok(GoogleTokenInfo)` - 원본 토큰 응답
    /// * `Err(EmptyAuthCode)` - 빈 코드 (요청하지 않음)
    /// * `Err(TokenRequestFailed)` - 전송 실패, 200 외 응답, 응답 파싱 실패
    pub async fn exchange_code_for_token(&self, ctx: &RequestContext, auth_code: &str) -> OAuthResult<GoogleTokenInfo> {
        if auth_code.is_empty() {
            return Err(OAuthError::wrap(Self::provider(), ErrorKind::EmptyAuthCode, ""));
        }

        let params = [
            ("code", auth_code),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("redirect_uri", self.redirect_url.as_str()),
            ("grant_type", "authorization_code"),
        ];

        request_token(ctx, self.executor.as_ref(), &Self::provider(), &self.token_url, &params).await
    }

    /// Refresh Token으로 액세스 토큰 재발급
    ///
    /// Google은 갱신 응답에 새 refresh token을 포함하지 않으므로
    /// 결과의 `refresh_token`은 보통 빈 문자열입니다.
    pub async fn refresh_access_token(&self, ctx: &RequestContext, refresh_token: &str) -> OAuthResult<GoogleTokenInfo> {
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

    /// 액세스 토큰으로 Google 사용자 정보 조회
    pub async fn get_user_info(&self, ctx: &RequestContext, access_token: &str) -> OAuthResult<GoogleUserInfo> {
        request_user_info(ctx, self.executor.as_ref(), &Self::provider(), &self.user_info_url, access_token).await
    }
}

#[async_trait]
impl Provider for GoogleAuthService {
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
