//! Kakao 사용자 정보 모델
//!
//! ```json
//! {
//!   "id": 1001,
//!   "kakao_account": {
//!     "email": "user@kakao.com",
//!     "name": "홍길동",
//!     "gender": "male",
//!     "profile": {
//!       "nickname": "길동",
//!       "profile_image_url": "https://k.kakaocdn.net/img.jpg"
//!     }
//!   }
//! }
//! ```
//!
//! 회원번호(`id`)는 숫자로 내려오며 정규화 뷰에서는 10진 문자열로 변환됩니다.

use serde::{Deserialize, Serialize};

use crate::domain::models::oauth::{null_default, UserInfo};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KakaoUserInfo {
    /// Kakao 회원번호
    #[serde(deserialize_with = "null_default")]
    pub id: i64,

    #[serde(deserialize_with = "null_default")]
    pub kakao_account: KakaoAccount,
}

/// 동의 항목에 따라 채워지는 카카오계정 정보
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KakaoAccount {
    #[serde(deserialize_with = "null_default")]
    pub email: String,

    #[serde(deserialize_with = "null_default")]
    pub profile: KakaoProfile,

    #[serde(deserialize_with = "null_default")]
    pub gender: String,

    /// 실명 (비즈 앱에서만 제공)
    #[serde(deserialize_with = "null_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KakaoProfile {
    #[serde(deserialize_with = "null_default")]
    pub nickname: String,

    #[serde(deserialize_with = "null_default")]
    pub profile_image_url: String,
}

impl UserInfo for KakaoUserInfo {
    fn id(&self) -> String {
        self.id.to_string()
    }

    fn email(&self) -> &str {
        &self.kakao_account.email
    }

    /// 실명이 없으면 프로필 닉네임을 사용합니다.
    fn name(&self) -> &str {
        if self.kakao_account.name.is_empty() {
            return &self.kakao_account.profile.nickname;
        }
        &self.kakao_account.name
    }

    fn gender(&self) -> &str {
        &self.kakao_account.gender
    }

    fn profile_image(&self) -> &str {
        &self.kakao_account.profile.profile_image_url
    }
}
