//! Google 사용자 정보 모델
//!
//! `GET https://www.googleapis.com/oauth2/v2/userinfo` 응답을 표현합니다.
//!
//! ```json
//! {
//!   "id": "1234567890",
//!   "email": "user@gmail.com",
//!   "name": "홍길동",
//!   "picture": "https://lh3.googleusercontent.com/a/photo.jpg",
//!   "locale": "ko"
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::models::oauth::{null_default, UserInfo};

/// Google UserInfo API 응답
///
/// 누락된 필드는 빈 문자열로 역직렬화됩니다.
/// Google v2 UserInfo는 성별을 제공하지 않으므로 `gender()`는 항상 빈 문자열입니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoogleUserInfo {
    #[serde(deserialize_with = "null_default")]
    pub id: String,

    #[serde(deserialize_with = "null_default")]
    pub email: String,

    #[serde(deserialize_with = "null_default")]
    pub name: String,

    /// 프로필 사진 URL
    #[serde(deserialize_with = "null_default")]
    pub picture: String,

    #[serde(deserialize_with = "null_default")]
    pub locale: String,
}

impl UserInfo for GoogleUserInfo {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn gender(&self) -> &str {
        ""
    }

    fn profile_image(&self) -> &str {
        &self.picture
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_google_user() {
        let body = r#"{
            "id": "g-1",
            "email": "user@gmail.com",
            "verified_email": true,
            "name": "Google User",
            "picture": "https://example.com/p.png",
            "locale": "ko"
        }"#;

        let user: GoogleUserInfo = serde_json::from_str(body).unwrap();
        assert_eq!(user.id(), "g-1");
        assert_eq!(user.email(), "user@gmail.com");
        assert_eq!(user.name(), "Google User");
        assert_eq!(user.profile_image(), "https://example.com/p.png");
        assert_eq!(user.gender(), "");
    }

    #[test]
    fn test_missing_fields_become_empty() {
        let user: GoogleUserInfo = serde_json::from_str(r#"{"id":"only-id"}"#).unwrap();
        assert_eq!(user.id(), "only-id");
        assert!(user.email().is_empty());
        assert!(user.name().is_empty());
        assert!(user.profile_image().is_empty());
    }

    #[test]
    fn test_null_fields_become_empty() {
        let body = r#"{"id":"g-1","email":"a@b.com","name":null,"picture":null,"locale":null}"#;
        let user: GoogleUserInfo = serde_json::from_str(body).unwrap();

        assert_eq!(user.id(), "g-1");
        assert_eq!(user.email(), "a@b.com");
        assert_eq!(user.name(), "");
        assert_eq!(user.profile_image(), "");
    }
}
