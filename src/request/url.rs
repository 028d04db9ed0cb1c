//! Request URL composition.

use crate::types::ApiConfig;
use secrecy::ExposeSecret;

/// Build `{endpoint}/models/{model}:{method}?key={apiKey}[&alt=sse]`.
///
/// Trailing slashes on the endpoint are dropped. No validation happens here;
/// call [`validate_api_endpoint`](crate::validation::validate_api_endpoint) first.
pub fn build_request_url(config: &ApiConfig, stream: bool) -> String {
    let endpoint = config.endpoint.trim_end_matches('/');
    let method = if stream {
        "streamGenerateContent"
    } else {
        "generateContent"
    };
    let url = format!(
        "{endpoint}/models/{}:{method}?key={}",
        config.model,
        config.api_key.expose_secret()
    );
    if stream { format!("{url}&alt=sse") } else { url }
}

/// Copy of `url` with every `key=` value masked up to the next `&`, for logs.
pub(crate) fn redact_key(url: &str) -> String {
    const PARAM: &str = "key=";
    let mut out = String::with_capacity(url.len());
    let mut rest = url;
    while let Some(i) = rest.find(PARAM) {
        let (head, tail) = rest.split_at(i + PARAM.len());
        out.push_str(head);
        out.push_str("***");
        rest = &tail[tail.find('&').unwrap_or(tail.len())..];
    }
    out.push_str(rest);
    out
}
