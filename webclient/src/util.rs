use serde::de::DeserializeOwned;

use crate::{
    error::*,
    http::{RequestBuilder, StatusCode},
    model::Platform,
};

/// Execute a prepared request and read the whole body. Transport errors
/// (DNS, refused connection, timeout) map to `Error::Network`; status
/// handling is left to the caller because some upstreams put a JSON
/// envelope in non-2xx bodies.
pub async fn send(
    rb: RequestBuilder,
    platform: Platform,
    requested_url: &str,
) -> Result<(StatusCode, String)> {
    log::debug!("[{}] requesting {}", platform, requested_url);
    let resp = rb.send().await.map_err(|e| Error::Network {
        platform,
        requested_url: requested_url.to_owned(),
        source: e,
    })?;
    let status = resp.status();
    let body = resp.text().await.map_err(|e| Error::Network {
        platform,
        requested_url: requested_url.to_owned(),
        source: e,
    })?;
    Ok((status, body))
}

pub fn decode_json<T: DeserializeOwned>(platform: Platform, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| Error::Malformed {
        platform,
        message: e.to_string(),
    })
}

/// Strip a trailing slash so bases can be joined with `/`-prefixed paths.
pub fn trim_base(base: impl AsRef<str>) -> String {
    base.as_ref().trim_end_matches('/').to_owned()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn trim_base_removes_only_trailing_slashes() {
        assert_eq!(trim_base("https://codeforces.com/api/"), "https://codeforces.com/api");
        assert_eq!(trim_base("https://codeforces.com/api"), "https://codeforces.com/api");
        assert_eq!(trim_base("http://localhost:8080//"), "http://localhost:8080");
    }

    #[test]
    fn decode_json_reports_malformed_bodies() {
        let err = decode_json::<Vec<u32>>(Platform::CodeChef, "<html>blocked</html>").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Malformed);
        assert_eq!(err.platform(), Platform::CodeChef);
    }
}
