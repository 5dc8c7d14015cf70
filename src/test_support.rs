//! 단위 테스트용 가짜 실행기와 프로바이더

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::config::ProviderSetting;
use crate::core::context::RequestContext;
use crate::core::http::{HttpExecutor, HttpRequest, HttpResponse, TransportError};
use crate::domain::models::oauth::{ProviderType, TokenInfo, UserInfo};
use crate::errors::{ErrorKind, OAuthError, OAuthResult};
use crate::services::auth::Provider;
use crate::utils::url_utils::parse_query;

type Responder = dyn Fn(&HttpRequest) -> Result<HttpResponse, TransportError> + Send + Sync;

/// 요청을 기록하고 미리 정한 응답을 돌려주는 실행기
pub(crate) struct MockExecutor {
    responder: Box<Responder>,
    delay: Option<Duration>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockExecutor {
    pub(crate) fn new<F>(responder: F) -> Arc<Self>
    where
        F: Fn(&HttpRequest) -> Result<HttpResponse, TransportError> + Send + Sync + 'static,
    {
        Arc::new(Self {
            responder: Box::new(responder),
            delay: None,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn json(status: u16, body: &str) -> Arc<Self> {
        let body = body.to_string();
        Self::new(move |_| Ok(HttpResponse::new(status, body.clone())))
    }

    pub(crate) fn failing(error: TransportError) -> Arc<Self> {
        Self::new(move |_| Err(error.clone()))
    }

    pub(crate) fn delayed(delay: Duration, response: HttpResponse) -> Arc<Self> {
        Arc::new(Self {
            responder: Box::new(move |_| Ok(response.clone())),
            delay: Some(delay),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpExecutor for MockExecutor {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        (self.responder)(&request)
    }
}

/// 테스트용 설정. client id/secret은 `test-client`/`test-secret`입니다.
pub(crate) fn setting_with(executor: &Arc<MockExecutor>, redirect_url: &str) -> ProviderSetting {
    let executor: Arc<dyn HttpExecutor> = executor.clone();
    ProviderSetting::new(executor, "test-client", "test-secret", redirect_url)
}

/// form 본문에서 값을 찾습니다.
pub(crate) fn form_value(request: &HttpRequest, name: &str) -> Option<String> {
    parse_query(request.body.as_deref()?)
        .into_iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value)
}

#[derive(Debug, Clone, Default)]
pub(crate) struct StubToken {
    pub access_token: String,
    pub refresh_token: String,
    pub expiry: i64,
}

impl TokenInfo for StubToken {
    fn access_token(&self) -> &str {
        &self.access_token
    }

    fn refresh_token(&self) -> &str {
        &self.refresh_token
    }

    fn expiry(&self) -> i64 {
        self.expiry
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct StubUser {
    pub id: String,
    pub email: String,
}

impl UserInfo for StubUser {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn name(&self) -> &str {
        ""
    }

    fn gender(&self) -> &str {
        ""
    }

    fn profile_image(&self) -> &str {
        ""
    }
}

/// 네트워크 없이 고정된 결과를 돌려주는 프로바이더
///
/// 받은 입력은 `"exchange:<code>"`, `"refresh:<token>"`, `"user:<token>"` 형식으로 기록됩니다.
pub(crate) struct StubProvider {
    provider_type: ProviderType,
    auth_url: String,
    auth_error: Option<ErrorKind>,
    failure: Option<(ErrorKind, String)>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl StubProvider {
    pub(crate) fn named(name: &str) -> Self {
        Self {
            provider_type: ProviderType::new(name),
            auth_url: format!("https://{}.example/authorize", name),
            auth_error: None,
            failure: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn with_auth_url(mut self, url: &str) -> Self {
        self.auth_url = url.to_string();
        self
    }

    pub(crate) fn with_auth_error(mut self, kind: ErrorKind) -> Self {
        self.auth_error = Some(kind);
        self
    }

    /// 토큰/사용자 정보 요청이 모두 지정한 에러로 실패합니다.
    pub(crate) fn failing(mut self, kind: ErrorKind, context: &str) -> Self {
        self.failure = Some((kind, context.to_string()));
        self
    }

    pub(crate) fn calls(&self) -> Arc<Mutex<Vec<String>>> {
        self.calls.clone()
    }

    pub(crate) fn into_dyn(self) -> Arc<dyn Provider> {
        Arc::new(self)
    }

    fn record(&self, call: String) -> OAuthResult<()> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some((kind, context)) => Err(OAuthError::wrap(self.provider_type.clone(), *kind, context.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl Provider for StubProvider {
    fn provider_type(&self) -> ProviderType {
        self.provider_type.clone()
    }

    fn auth_url(&self, state: &str) -> OAuthResult<String> {
        match self.auth_error {
            Some(kind) => Err(OAuthError::wrap(self.provider_type.clone(), kind, "")),
            None if state.is_empty() => Ok(self.auth_url.clone()),
            None => Ok(format!("{}?state={}", self.auth_url, state)),
        }
    }

    async fn exchange_code(&self, _ctx: &RequestContext, code: &str) -> OAuthResult<Box<dyn TokenInfo>> {
        self.record(format!("exchange:{}", code))?;
        Ok(Box::new(StubToken {
            access_token: format!("{}-access", self.provider_type),
            refresh_token: format!("{}-refresh", self.provider_type),
            expiry: 3600,
        }))
    }

    async fn refresh_token(&self, _ctx: &RequestContext, refresh_token: &str) -> OAuthResult<Box<dyn TokenInfo>> {
        self.record(format!("refresh:{}", refresh_token))?;
        Ok(Box::new(StubToken {
            access_token: format!("{}-refreshed", self.provider_type),
            refresh_token: refresh_token.to_string(),
            expiry: 3600,
        }))
    }

    async fn user_info(&self, _ctx: &RequestContext, access_token: &str) -> OAuthResult<Box<dyn UserInfo>> {
        self.record(format!("user:{}", access_token))?;
        Ok(Box::new(StubUser {
            id: format!("{}-user", self.provider_type),
            email: format!("user@{}.example", self.provider_type),
        }))
    }
}
