//! # HTTP 실행기
//!
//! 프로바이더 어댑터는 네트워크 라이브러리를 직접 사용하지 않고
//! [`HttpExecutor`] 트레이트를 통해 요청을 실행합니다.
//! 실제 서비스에서는 [`ReqwestExecutor`]를, 테스트에서는 응답을 흉내 내는
//! 실행기를 주입할 수 있습니다.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use social_oauth2::core::http::{HttpExecutor, ReqwestExecutor};
//!
//! let executor: Arc<dyn HttpExecutor> = Arc::new(ReqwestExecutor::new());
//! ```

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::utils::url_utils::encode_query;

pub const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => f.write_str("GET"),
            HttpMethod::Post => f.write_str("POST"),
        }
    }
}

/// 실행할 HTTP 요청
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Post,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// `Authorization: Bearer <token>` 헤더를 추가합니다.
    pub fn bearer_auth(self, token: &str) -> Self {
        self.header("Authorization", format!("Bearer {}", token))
    }

    /// form-urlencoded 본문과 `Content-Type` 헤더를 설정합니다.
    pub fn form(mut self, params: &[(&str, &str)]) -> Self {
        self.body = Some(encode_query(params));
        self.header("Content-Type", CONTENT_TYPE_FORM)
    }

    /// 헤더 값 조회 (대소문자 무시)
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// 상태 코드와 본문 전체를 담은 응답
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// 전송 계층 에러
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// 연결 실패 등 요청 전송 실패
    #[error("request failed: {0}")]
    Request(String),

    /// 응답 본문 읽기 실패
    #[error("failed to read response body: {0}")]
    Read(String),

    #[error("request cancelled")]
    Cancelled,

    #[error("request timed out after {0:?}")]
    TimedOut(Duration),
}

/// HTTP 요청 실행 트레이트
///
/// 구현체는 여러 태스크에서 동시에 사용될 수 있어야 합니다.
#[async_trait]
pub trait HttpExecutor: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// `reqwest` 기반 기본 실행기
#[derive(Debug, Clone, Default)]
pub struct ReqwestExecutor {
    client: reqwest::Client,
}

impl ReqwestExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// 프록시, TLS 설정 등이 적용된 클라이언트를 사용합니다.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpExecutor for ReqwestExecutor {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        };

        let mut builder = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Read(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
