//! 네이버 회원 프로필 모델
//!
//! ```json
//! {
//!   "resultcode": "00",
//!   "message": "success",
//!   "response": {
//!     "id": "32742776",
//!     "email": "user@naver.com",
//!     "name": "홍길동",
//!     "gender": "M",
//!     "profile_image": "https://ssl.pstatic.net/static/pwe/address/nodata_33x33.gif"
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::models::oauth::{null_default, UserInfo};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NaverUserInfo {
    /// API 호출 결과 코드. 어댑터에서 검증하지 않습니다.
    #[serde(deserialize_with = "null_default")]
    pub resultcode: String,

    #[serde(deserialize_with = "null_default")]
    pub message: String,

    #[serde(deserialize_with = "null_default")]
    pub response: NaverProfile,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NaverProfile {
    #[serde(deserialize_with = "null_default")]
    pub id: String,

    #[serde(deserialize_with = "null_default")]
    pub email: String,

    #[serde(deserialize_with = "null_default")]
    pub name: String,

    #[serde(deserialize_with = "null_default")]
    pub nickname: String,

    #[serde(deserialize_with = "null_default")]
    pub gender: String,

    #[serde(deserialize_with = "null_default")]
    pub profile_image: String,
}

impl UserInfo for NaverUserInfo {
    fn id(&self) -> String {
        self.response.id.clone()
    }

    fn email(&self) -> &str {
        &self.response.email
    }

    fn name(&self) -> &str {
        &self.response.name
    }

    fn gender(&self) -> &str {
        &self.response.gender
    }

    fn profile_image(&self) -> &str {
        &self.response.profile_image
    }
}
