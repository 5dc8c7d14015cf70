//! # Provider Registry
//!
//! 프로바이더 식별자 → 어댑터 매핑을 보관합니다.
//!
//! 레지스트리는 클라이언트 생성 시 한 번 만들어지고 이후에는 읽기 전용이므로
//! 별도의 동기화 없이 여러 태스크에서 공유할 수 있습니다.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │ ProviderRegistry                          │
//! │   "google" ──► Arc<GoogleAuthService>     │
//! │   "kakao"  ──► Arc<KakaoAuthService>      │
//! │   "naver"  ──► Arc<NaverAuthService>      │
//! └──────────────────────────────────────────┘
//! ```
//!
//! 같은 식별자를 가진 어댑터가 여러 번 등록되면 마지막 어댑터가 남습니다.
//! 이는 에러가 아닙니다.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::models::oauth::ProviderType;
use crate::services::auth::Provider;

#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<ProviderType, Arc<dyn Provider>>,
}

impl ProviderRegistry {
    /// 어댑터 목록으로 레지스트리를 구성합니다.
    ///
    /// 각 어댑터의 `provider_type()`이 키가 됩니다.
    pub fn from_providers<I>(providers: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Provider>>,
    {
        let mut map: HashMap<ProviderType, Arc<dyn Provider>> = HashMap::new();

        for provider in providers {
            let provider_type = provider.provider_type();
            if map.insert(provider_type.clone(), provider).is_some() {
                log::debug!("프로바이더 재등록: {} (마지막 등록 사용)", provider_type);
            }
        }

        log::debug!("프로바이더 레지스트리 구성 완료: {}개", map.len());
        Self { providers: map }
    }

    pub fn get(&self, provider: &str) -> Option<&Arc<dyn Provider>> {
        self.providers.get(provider)
    }

    pub fn contains(&self, provider: &str) -> bool {
        self.providers.contains_key(provider)
    }

    /// 등록된 프로바이더 식별자 목록 (정렬됨)
    pub fn provider_types(&self) -> Vec<ProviderType> {
        let mut types: Vec<ProviderType> = self.providers.keys().cloned().collect();
        types.sort();
        types
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.provider_types())
            .finish()
    }
}
