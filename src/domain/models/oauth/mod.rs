//! # OAuth Domain Models Module
//!
//! 여러 OAuth 2.0 프로바이더(Google, Kakao, Naver)의 응답을 하나의 형태로
//! 다루기 위한 정규화 모델을 정의하는 모듈입니다.
//!
//! 프로바이더마다 토큰/사용자 정보 페이로드 구조가 제각각이므로,
//! 각 프로바이더 모델은 원본 페이로드를 그대로 보관하고
//! [`TokenInfo`], [`UserInfo`] 트레이트의 접근자만 공통으로 노출합니다.
//! 호출자는 프로바이더 종류로 분기할 필요가 없습니다.
//!
//! ## 모듈 구성
//!
//! ```text
//! oauth/
//! ├── mod.rs                 ← 공통 트레이트 (TokenInfo, UserInfo)
//! ├── provider_type.rs       ← ProviderType / ProviderKind
//! ├── google_oauth_model/    ← Google 토큰/사용자 페이로드
//! ├── kakao_oauth_model/     ← Kakao 토큰/사용자 페이로드
//! └── naver_oauth_model/     ← Naver 토큰/사용자 페이로드
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let token = client.request_token(&ctx, ProviderKind::Kakao, &code).await?;
//! let user = client.request_user_info(&ctx, ProviderKind::Kakao, token.access_token()).await?;
//!
//! println!("{} <{}>", user.name(), user.email());
//! ```

pub mod provider_type;
pub mod google_oauth_model;
pub mod kakao_oauth_model;
pub mod naver_oauth_model;

pub use provider_type::{ProviderKind, ProviderType};

use std::fmt::Debug;

use serde::{Deserialize, Deserializer};

/// JSON `null`을 기본값으로 역직렬화합니다.
///
/// 컨테이너의 `#[serde(default)]`는 누락된 필드만 채우므로
/// 명시적인 `null`도 빈 값으로 취급하려면 필드마다 지정해야 합니다.
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// 프로바이더가 발급한 토큰의 정규화된 뷰
///
/// 값이 없는 필드는 빈 문자열(또는 0)로 표현되며 `null`과 빈 값을 구분하지 않습니다.
pub trait TokenInfo: Debug + Send + Sync {
    /// 액세스 토큰
    fn access_token(&self) -> &str;

    /// 리프레시 토큰 (발급되지 않았으면 빈 문자열)
    fn refresh_token(&self) -> &str;

    /// 액세스 토큰 만료까지 남은 시간 (초)
    fn expiry(&self) -> i64;
}

/// 프로바이더 사용자 프로필의 정규화된 뷰
///
/// `id`는 성공한 응답에서 항상 채워져 있으며,
/// 나머지 필드는 프로바이더가 제공하지 않으면 빈 문자열입니다.
pub trait UserInfo: Debug + Send + Sync {
    /// 프로바이더 내 사용자 식별자
    fn id(&self) -> String;

    fn email(&self) -> &str;

    /// 표시 이름
    fn name(&self) -> &str;

    /// 성별 (제공하지 않는 프로바이더는 빈 문자열)
    fn gender(&self) -> &str;

    /// 프로필 이미지 URL
    fn profile_image(&self) -> &str;
}
