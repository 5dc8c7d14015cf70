//! 어댑터 공통 요청 처리
//!
//! 토큰 엔드포인트 호출과 사용자 정보 조회는 프로바이더마다 URL과 페이로드만 다르고
//! 실패 처리 규칙은 같습니다.
//!
//! ```text
//! 토큰 요청:       send ─► status == 200 ? ─► JSON decode      (모든 실패 → TokenRequestFailed)
//! 사용자 정보 요청: send ─► JSON decode (상태 코드 확인 없음)  (모든 실패 → UserInfoRequestFailed)
//! ```

use serde::de::DeserializeOwned;

use crate::core::context::RequestContext;
use crate::core::http::{HttpExecutor, HttpRequest};
use crate::domain::models::oauth::ProviderType;
use crate::errors::{ErrorKind, OAuthError, OAuthResult, ProviderErrorContext};
use crate::utils::url_utils::append_query;

/// 인증 URL을 구성합니다. redirect URL이 비어 있으면 실패합니다.
pub(crate) fn build_auth_url(
    provider: &ProviderType,
    auth_url: &str,
    redirect_url: &str,
    params: &[(&str, &str)],
) -> OAuthResult<String> {
    if redirect_url.is_empty() {
        return Err(OAuthError::wrap(provider.clone(), ErrorKind::RedirectUrlNotSet, ""));
    }

    Ok(append_query(auth_url, params))
}

/// 토큰 엔드포인트에 form POST 요청을 보내고 응답을 디코딩합니다.
///
/// 200이 아닌 응답은 원본 본문을 컨텍스트로 담아 실패 처리합니다.
pub(crate) async fn request_token<T>(
    ctx: &RequestContext,
    executor: &dyn HttpExecutor,
    provider: &ProviderType,
    token_url: &str,
    form: &[(&str, &str)],
) -> OAuthResult<T>
where
    T: DeserializeOwned,
{
    let request = HttpRequest::post(token_url).form(form);
    log::debug!("[{}] 토큰 요청: POST {}", provider, token_url);

    let response = ctx
        .run(executor.execute(request))
        .await
        .map_err(|e| {
            log::warn!("[{}] 토큰 요청 전송 실패: {}", provider, e);
            OAuthError::wrap(provider.clone(), ErrorKind::TokenRequestFailed, e.to_string())
        })?;

    if !response.is_ok() {
        log::warn!("[{}] 토큰 요청 실패: HTTP {}", provider, response.status);
        return Err(OAuthError::wrap(
            provider.clone(),
            ErrorKind::TokenRequestFailed,
            response.body,
        ));
    }

    serde_json::from_str::<T>(&response.body).provider_context(provider, ErrorKind::TokenRequestFailed)
}

/// Bearer 토큰으로 사용자 정보를 조회하고 응답을 디코딩합니다.
///
/// 상태 코드를 확인하지 않고 바로 디코딩합니다. 401 응답처럼 본문이
/// 프로필 형식이 아니면 디코딩 에러로 보고됩니다.
pub(crate) async fn request_user_info<T>(
    ctx: &RequestContext,
    executor: &dyn HttpExecutor,
    provider: &ProviderType,
    user_info_url: &str,
    access_token: &str,
) -> OAuthResult<T>
where
    T: DeserializeOwned,
{
    let request = HttpRequest::get(user_info_url).bearer_auth(access_token);
    log::debug!("[{}] 사용자 정보 요청: GET {}", provider, user_info_url);

    let response = ctx
        .run(executor.execute(request))
        .await
        .map_err(|e| {
            log::warn!("[{}] 사용자 정보 요청 전송 실패: {}", provider, e);
            OAuthError::wrap(provider.clone(), ErrorKind::UserInfoRequestFailed, e.to_string())
        })?;

    if !response.is_ok() {
        log::debug!("[{}] 사용자 정보 응답 HTTP {}", provider, response.status);
    }

    serde_json::from_str::<T>(&response.body).provider_context(provider, ErrorKind::UserInfoRequestFailed)
}
