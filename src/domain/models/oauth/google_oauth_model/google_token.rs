use serde::{Deserialize, Serialize};

use crate::domain::models::oauth::{null_default, TokenInfo};

/// Google 토큰 엔드포인트 응답
///
/// `expires_in`은 정수 초 단위로 내려옵니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoogleTokenInfo {
    #[serde(deserialize_with = "null_default")]
    pub access_token: String,

    #[serde(deserialize_with = "null_default")]
    pub expires_in: i64,

    /// `access_type=offline` + `prompt=consent`로 요청한 경우에만 내려옵니다.
    #[serde(deserialize_with = "null_default")]
    pub refresh_token: String,

    #[serde(deserialize_with = "null_default")]
    pub scope: String,

    #[serde(deserialize_with = "null_default")]
    pub token_type: String,

    #[serde(deserialize_with = "null_default")]
    pub id_token: String,
}

impl TokenInfo for GoogleTokenInfo {
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
