//! 요청 컨텍스트
//!
//! 네트워크를 사용하는 모든 작업은 [`RequestContext`]를 받습니다.
//! 호출자는 타임아웃이나 [`CancellationToken`]으로 진행 중인 요청을 중단할 수 있으며,
//! 중단된 요청은 전송 실패([`TransportError::Cancelled`], [`TransportError::TimedOut`])로 보고됩니다.
//!
//! ```rust,ignore
//! let token = CancellationToken::new();
//! let ctx = RequestContext::background()
//!     .with_timeout(Duration::from_secs(5))
//!     .with_cancellation(token.clone());
//!
//! // 다른 태스크에서 token.cancel() 호출 시 요청이 중단됩니다
//! let user = client.request_user_info(&ctx, "google", &access_token).await?;
//! ```

use std::future::Future;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::core::http::TransportError;

#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    timeout: Option<Duration>,
    cancellation: Option<CancellationToken>,
}

impl RequestContext {
    /// 타임아웃도 취소 신호도 없는 컨텍스트
    pub fn background() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .map(CancellationToken::is_cancelled)
            .unwrap_or(false)
    }

    /// 컨텍스트의 타임아웃과 취소 신호 아래에서 요청 future를 실행합니다.
    ///
    /// 이미 취소된 컨텍스트에서는 `request`를 한 번도 poll 하지 않습니다.
    pub async fn run<F, T>(&self, request: F) -> Result<T, TransportError>
    where
        F: Future<Output = Result<T, TransportError>>,
    {
        let guarded = async {
            match &self.cancellation {
                Some(token) => {
                    tokio::select! {
                        biased;
                        _ = token.cancelled() => Err(TransportError::Cancelled),
                        result = request => result,
                    }
                }
                None => request.await,
            }
        };

        match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, guarded)
                .await
                .map_err(|_| TransportError::TimedOut(timeout))?,
            None => guarded.await,
        }
    }
}
