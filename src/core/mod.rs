//! # Core Module
//!
//! 어댑터와 디스패치 클라이언트가 공유하는 기반 구성 요소입니다.
//!
//! - [`http`] - 주입 가능한 HTTP 실행기 (`HttpExecutor`, `ReqwestExecutor`)
//! - [`context`] - 타임아웃/취소 신호를 전달하는 `RequestContext`
//! - [`registry`] - 프로바이더 식별자 → 어댑터 매핑 (`ProviderRegistry`)

pub mod context;
pub mod http;
pub mod registry;

pub use context::RequestContext;
pub use http::{HttpExecutor, HttpMethod, HttpRequest, HttpResponse, ReqwestExecutor, TransportError};
pub use registry::ProviderRegistry;
