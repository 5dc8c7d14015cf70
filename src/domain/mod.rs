//! # Domain Layer Module
//!
//! 프로바이더별 응답 모델과 이를 정규화하는 공통 인터페이스를 담습니다.
//!
//! ```text
//! domain/
//! └── models/
//!     └── oauth/
//!         ├── provider_type.rs      # ProviderType, ProviderKind
//!         ├── google_oauth_model/   # Google 토큰/사용자 응답
//!         ├── kakao_oauth_model/    # Kakao 토큰/사용자 응답
//!         └── naver_oauth_model/    # Naver 토큰/사용자 응답
//! ```
//!
//! 도메인 계층은 HTTP 전송이나 설정에 의존하지 않습니다.

pub mod models;

pub use models::*;
