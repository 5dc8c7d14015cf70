use serde::{Deserialize, Serialize};

use crate::domain::models::oauth::{null_default, TokenInfo};

/// Kakao 토큰 응답
///
/// 토큰 갱신 응답에서는 refresh_token 만료가 임박한 경우에만
/// 새 `refresh_token`이 포함됩니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KakaoTokenInfo {
    #[serde(deserialize_with = "null_default")]
    pub token_type: String,

    #[serde(deserialize_with = "null_default")]
    pub access_token: String,

    #[serde(deserialize_with = "null_default")]
    pub expires_in: i64,

    #[serde(deserialize_with = "null_default")]
    pub refresh_token: String,

    #[serde(deserialize_with = "null_default")]
    pub refresh_token_expires_in: i64,

    #[serde(deserialize_with = "null_default")]
    pub scope: String,
}

impl TokenInfo for KakaoTokenInfo {
    fn access_token(&self) -> &str {
        &self.access_token
    }

    fn refresh_token(&self) -> &str {
        &self.refresh_token
    }

    fn expiry(&self) -> i64 {
        self.expires_in
    }
}
