//! OAuth 클라이언트 전역에서 사용하는 에러 시스템
//!
//! 어댑터에서 발생한 모든 실패는 발생한 프로바이더 식별자와 함께 감싸져 전달되므로,
//! 호출자는 문자열 비교 없이 [`OAuthError::kind`]와 [`OAuthError::provider`]로
//! "어느 프로바이더에서 무엇이 실패했는지"를 구분할 수 있습니다.
//!
//! ## 에러 분류
//!
//! | ErrorKind | 발생 조건 |
//! |-----------|-----------|
//! | `ProviderNotSet` | 등록되지 않은 프로바이더로 토큰/사용자 정보 요청 |
//! | `RedirectUrlNotSet` | redirect URL 없이 인증 URL 생성 |
//! | `EmptyAuthCode` | 빈 authorization code (네트워크 호출 없음) |
//! | `EmptyRefreshToken` | 빈 refresh token (네트워크 호출 없음) |
//! | `TokenRequestFailed` | 토큰 교환/갱신 중 전송 실패, 200 외 응답, 디코딩 실패 |
//! | `UserInfoRequestFailed` | 사용자 정보 조회 중 전송/읽기/디코딩 실패 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use social_oauth2::errors::errors::{ErrorKind, OAuthError};
//!
//! match client.request_token(&ctx, "kakao", &code).await {
//!     Ok(token) => println!("expires in {}s", token.expiry()),
//!     Err(e) if e.kind() == ErrorKind::TokenRequestFailed => {
//!         log::warn!("{} 토큰 요청 실패: {}", e.provider().map(|p| p.as_str()).unwrap_or("-"), e.context());
//!     }
//!     Err(e) => return Err(e),
//! }
//! ```

use std::fmt;

use thiserror::Error;

use crate::domain::models::oauth::ProviderType;

/// 에러 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ProviderNotSet,
    RedirectUrlNotSet,
    EmptyAuthCode,
    EmptyRefreshToken,
    TokenRequestFailed,
    UserInfoRequestFailed,
}

impl ErrorKind {
    pub fn message(&self) -> &'static str {
        match self {
            ErrorKind::ProviderNotSet => "provider not set",
            ErrorKind::RedirectUrlNotSet => "redirect URL is not set for provider",
            ErrorKind::EmptyAuthCode => "authorization code is empty",
            ErrorKind::EmptyRefreshToken => "refresh token is empty",
            ErrorKind::TokenRequestFailed => "failed to get access token",
            ErrorKind::UserInfoRequestFailed => "failed to get user info",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// OAuth 클라이언트 에러 타입
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OAuthError {
    /// 레지스트리에 없는 프로바이더
    #[error("provider not set: {0}")]
    ProviderNotSet(ProviderType),

    /// 어댑터 수준 실패
    ///
    /// `context`에는 원본 응답 본문이나 하위 에러 메시지가 담깁니다.
    #[error("{provider} provider: {kind}: {context}")]
    Provider {
        provider: ProviderType,
        kind: ErrorKind,
        context: String,
    },
}

impl OAuthError {
    /// 프로바이더 식별자와 함께 어댑터 에러를 생성합니다.
    pub fn wrap(provider: ProviderType, kind: ErrorKind, context: impl Into<String>) -> Self {
        OAuthError::Provider {
            provider,
            kind,
            context: context.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            OAuthError::ProviderNotSet(_) => ErrorKind::ProviderNotSet,
            OAuthError::Provider { kind, .. } => *kind,
        }
    }

    pub fn provider(&self) -> Option<&ProviderType> {
        match self {
            OAuthError::ProviderNotSet(_) => None,
            OAuthError::Provider { provider, .. } => Some(provider),
        }
    }

    /// 원본 응답 본문 또는 하위 에러 메시지
    pub fn context(&self) -> &str {
        match self {
            OAuthError::ProviderNotSet(_) => "",
            OAuthError::Provider { context, .. } => context,
        }
    }

    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind() == kind
    }
}

/// 결과 타입 별칭
pub type OAuthResult<T> = Result<T, OAuthError>;

/// 하위 에러를 프로바이더 에러로 변환하는 헬퍼 트레이트
pub trait ProviderErrorContext<T> {
    /// 에러 메시지를 컨텍스트로 하여 프로바이더 에러로 감쌉니다.
    fn provider_context(self, provider: &ProviderType, kind: ErrorKind) -> OAuthResult<T>;
}

impl<T, E> ProviderErrorContext<T> for Result<T, E>
where
    E: fmt::Display,
{
    fn provider_context(self, provider: &ProviderType, kind: ErrorKind) -> OAuthResult<T> {
        self.map_err(|e| OAuthError::wrap(provider.clone(), kind, e.to_string()))
    }
}
