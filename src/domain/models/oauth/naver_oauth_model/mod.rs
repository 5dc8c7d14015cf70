//! # Naver Login Domain Models
//!
//! 네이버 로그인 API 응답 모델입니다.
//! 참고: <https://developers.naver.com/docs/login/devguide/devguide.md>
//!
//! 네이버는 두 가지 점에서 다른 프로바이더와 다릅니다.
//!
//! - 토큰 응답의 `expires_in`이 숫자가 아닌 **문자열**입니다.
//! - 프로필 응답은 `resultcode`, `message`와 함께 `response` 객체 안에 중첩됩니다.

pub mod naver_user;
pub mod naver_token;

pub use naver_token::NaverTokenInfo;
pub use naver_user::{NaverProfile, NaverUserInfo};
