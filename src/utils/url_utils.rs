//! # URL 유틸리티
//!
//! 인증 URL 쿼리스트링과 form-urlencoded 본문 생성에 사용합니다.

/// 키/값 쌍을 `application/x-www-form-urlencoded` 형식으로 인코딩합니다.
///
/// 입력 순서를 유지하며, 키와 값 모두 퍼센트 인코딩됩니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::url_utils::encode_query;
///
/// let query = encode_query(&[("scope", "openid email"), ("state", "a&b")]);
/// assert_eq!(query, "scope=openid%20email&state=a%26b");
/// ```
pub fn encode_query(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// 기본 URL 뒤에 쿼리스트링을 붙입니다.
///
/// 기본 URL에 이미 쿼리가 있으면 `&`로 이어 붙입니다.
pub fn append_query(base_url: &str, params: &[(&str, &str)]) -> String {
    let separator = if base_url.contains('?') { '&' } else { '?' };
    format!("{}{}{}", base_url, separator, encode_query(params))
}

/// 쿼리스트링(또는 form 본문)을 디코딩된 키/값 쌍으로 분리합니다.
///
/// 디코딩할 수 없는 항목은 원문 그대로 반환합니다.
#[cfg(test)]
pub(crate) fn parse_query(query: &str) -> Vec<(String, String)> {
    let decode = |raw: &str| {
        let spaced = raw.replace('+', " ");
        urlencoding::decode(&spaced)
            .map(|value| value.into_owned())
            .unwrap_or_else(|_| raw.to_string())
    };

    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => (decode(k), decode(v)),
            None => (decode(pair), String::new()),
        })
        .collect()
}

/// URL의 쿼리 파라미터 값을 조회합니다.
#[cfg(test)]
pub(crate) fn query_param(url: &str, name: &str) -> Option<String> {
    let (_, query) = url.split_once('?')?;
    parse_query(query)
        .into_iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value)
}
