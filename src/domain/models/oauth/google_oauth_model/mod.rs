//! # Google OAuth 2.0 Domain Models
//!
//! Google 토큰 엔드포인트와 UserInfo API 응답 모델입니다.
//!
//! ## Google API 엔드포인트
//!
//! ```text
//! 인증 URL:    https://accounts.google.com/o/oauth2/v2/auth
//! 토큰 교환:    https://oauth2.googleapis.com/token
//! UserInfo API: https://www.googleapis.com/oauth2/v2/userinfo
//! ```
//!
//! - **`google_user`**: 사용자 정보 모델 (`GoogleUserInfo`)
//! - **`google_token`**: 토큰 응답 모델 (`GoogleTokenInfo`)

pub mod google_user;
pub mod google_token;

pub use google_token::GoogleTokenInfo;
pub use google_user::GoogleUserInfo;
