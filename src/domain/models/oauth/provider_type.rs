//! 프로바이더 식별자
//!
//! 레지스트리 조회에 사용하는 문자열 키(`ProviderType`)와
//! 기본 제공 프로바이더를 나타내는 열거형(`ProviderKind`)을 정의합니다.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 프로바이더 식별 키
///
/// `"google"`, `"kakao"`, `"naver"` 같은 불투명한 문자열입니다.
/// 형식 검증은 하지 않으며 레지스트리 조회에만 사용됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderType(String);

impl ProviderType {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProviderType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ProviderType {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProviderType {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ProviderType {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<ProviderKind> for ProviderType {
    fn from(kind: ProviderKind) -> Self {
        Self(kind.as_str().to_string())
    }
}

/// 기본 제공 OAuth 프로바이더
///
/// 어댑터 생성과 환경 변수 prefix 결정에 사용됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Google,
    Kakao,
    Naver,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 3] = [ProviderKind::Google, ProviderKind::Kakao, ProviderKind::Naver];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Google => "google",
            ProviderKind::Kakao => "kakao",
            ProviderKind::Naver => "naver",
        }
    }

    /// 환경 변수 이름 앞에 붙는 대문자 prefix (예: `GOOGLE`)
    pub fn env_prefix(&self) -> &'static str {
        match self {
            ProviderKind::Google => "GOOGLE",
            ProviderKind::Kakao => "KAKAO",
            ProviderKind::Naver => "NAVER",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for ProviderKind {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "google" => Ok(ProviderKind::Google),
            "kakao" => Ok(ProviderKind::Kakao),
            "naver" => Ok(ProviderKind::Naver),
            _ => Err(format!("Unsupported oauth provider: {}", s)),
        }
    }
}
