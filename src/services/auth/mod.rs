//! # OAuth 프로바이더 어댑터
//!
//! 공통 OAuth 작업(인증 URL 생성, 코드 교환, 토큰 갱신, 사용자 정보 조회)을
//! 각 프로바이더의 REST 호출과 응답 형식으로 변환하는 어댑터들입니다.
//!
//! | 어댑터 | 식별자 | 특이사항 |
//! |--------|--------|----------|
//! | [`GoogleAuthService`] | `google` | `scope`, `access_type=offline`, `prompt=consent` 추가 |
//! | [`KakaoAuthService`] | `kakao` | 숫자 회원번호, 닉네임 fallback |
//! | [`NaverAuthService`] | `naver` | 문자열 `expires_in`, `response` 중첩 |
//!
//! 모든 어댑터는 생성 후 변경되지 않는 설정만 보관하므로 동시에 사용해도 안전합니다.

pub mod oauth_request;
pub mod google_auth_service;
pub mod kakao_auth_service;
pub mod naver_auth_service;

pub use google_auth_service::GoogleAuthService;
pub use kakao_auth_service::KakaoAuthService;
pub use naver_auth_service::NaverAuthService;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::ProviderSetting;
use crate::core::context::RequestContext;
use crate::domain::models::oauth::{ProviderKind, ProviderType, TokenInfo, UserInfo};
use crate::errors::OAuthResult;

/// 모든 OAuth 프로바이더 어댑터가 구현하는 트레이트
#[async_trait]
pub trait Provider: Send + Sync {
    /// 프로바이더 식별자. I/O 없이 항상 같은 값을 반환합니다.
    fn provider_type(&self) -> ProviderType;

    /// 사용자를 리다이렉트할 인증 URL을 생성합니다.
    ///
    /// 네트워크 호출 없이 문자열만 구성합니다. `state`는 호출자가 관리하는
    /// 불투명한 값이며 어댑터는 CSRF 검증을 하지 않습니다.
    ///
    /// # Errors
    ///
    /// * `RedirectUrlNotSet` - redirect URL이 비어 있는 경우
    fn auth_url(&self, state: &str) -> OAuthResult<String>;

    /// Authorization code를 토큰으로 교환합니다.
    ///
    /// # Errors
    ///
    /// * `EmptyAuthCode` - 빈 코드 (네트워크 호출 없음)
    /// * `TokenRequestFailed` - 전송 실패, 200 외 응답(본문 포함), 디코딩 실패
    async fn exchange_code(&self, ctx: &RequestContext, code: &str) -> OAuthResult<Box<dyn TokenInfo>>;

    /// Refresh token으로 새 액세스 토큰을 발급받습니다.
    ///
    /// # Errors
    ///
    /// * `EmptyRefreshToken` - 빈 토큰 (네트워크 호출 없음)
    /// * `TokenRequestFailed` - 전송 실패, 200 외 응답(본문 포함), 디코딩 실패
    async fn refresh_token(&self, ctx: &RequestContext, refresh_token: &str) -> OAuthResult<Box<dyn TokenInfo>>;

    /// 액세스 토큰으로 사용자 프로필을 조회합니다.
    ///
    /// # Errors
    ///
    /// * `UserInfoRequestFailed` - 전송, 본문 읽기, 디코딩 실패
    async fn user_info(&self, ctx: &RequestContext, access_token: &str) -> OAuthResult<Box<dyn UserInfo>>;
}

/// 프로바이더 종류에 맞는 어댑터를 생성합니다.
///
/// ```rust,ignore
/// let providers: Vec<Arc<dyn Provider>> = vec![
///     build_provider(ProviderKind::Google, google_setting),
///     build_provider(ProviderKind::Kakao, kakao_setting),
/// ];
/// let client = OAuth2Client::new(providers);
/// ```
pub fn build_provider(kind: ProviderKind, setting: ProviderSetting) -> Arc<dyn Provider> {
    match kind {
        ProviderKind::Google => Arc::new(GoogleAuthService::new(setting)),
        ProviderKind::Kakao => Arc::new(KakaoAuthService::new(setting)),
        ProviderKind::Naver => Arc::new(NaverAuthService::new(setting)),
    }
}
