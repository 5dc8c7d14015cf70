use serde::{Deserialize, Serialize};

use crate::domain::models::oauth::{null_default, TokenInfo};

/// 네이버 토큰 응답
///
/// ```json
/// {"access_token":"AT","refresh_token":"RT","token_type":"bearer","expires_in":"3600"}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NaverTokenInfo {
    #[serde(deserialize_with = "null_default")]
    pub access_token: String,

    #[serde(deserialize_with = "null_default")]
    pub refresh_token: String,

    #[serde(deserialize_with = "null_default")]
    pub token_type: String,

    /// 초 단위 만료 시간 (숫자 문자열)
    #[serde(deserialize_with = "null_default")]
    pub expires_in: String,
}

impl TokenInfo for NaverTokenInfo {
    fn access_token(&self) -> &str {
        &self.access_token
    }

    fn refresh_token(&self) -> &str {
        &self.refresh_token
    }

    /// `expires_in`을 정수로 변환합니다. 변환에 실패하면 에러 없이 0을 반환합니다.
    fn expiry(&self) -> i64 {
        self.expires_in.parse().unwrap_or(0)
    }
}
