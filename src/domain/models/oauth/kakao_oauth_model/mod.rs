//! # Kakao Login Domain Models
//!
//! Kakao 로그인 REST API 응답 모델입니다.
//! 참고: <https://developers.kakao.com/docs/latest/ko/kakaologin/rest-api>
//!
//! - **`kakao_user`**: `GET https://kapi.kakao.com/v2/user/me` 응답
//! - **`kakao_token`**: `POST https://kauth.kakao.com/oauth/token` 응답

pub mod kakao_user;
pub mod kakao_token;

pub use kakao_token::KakaoTokenInfo;
pub use kakao_user::{KakaoAccount, KakaoProfile, KakaoUserInfo};
