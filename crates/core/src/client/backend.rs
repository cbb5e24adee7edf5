//! Backend client handle

use super::config::ClientConfig;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Header carrying the access passcode
pub const PASSCODE_HEADER: &str = "x-bakeoff-passcode";

static NEXT_CLIENT_ID: AtomicU64 = AtomicU64::new(1);

/// Header name -> value
pub type Headers = BTreeMap<String, String>;

/// Headers that carry `scope`, empty when there is no scope
///
/// # Example
/// ```
/// # use bakeoff_core::client::{scope_headers, PASSCODE_HEADER};
/// assert!(scope_headers("").is_empty());
/// assert_eq!(scope_headers("abc")[PASSCODE_HEADER], "abc");
/// ```
pub fn scope_headers(scope: &str) -> Headers {
    let mut headers = Headers::new();
    if !scope.is_empty() {
        headers.insert(PASSCODE_HEADER.to_string(), scope.to_string());
    }
    headers
}

/// Client for the hosted backend
///
/// Holds the endpoint, the public key and the global headers attached to
/// every request. Immutable once built; changing scope means building a new
/// one.
#[derive(Debug)]
pub struct BackendClient {
    id: u64,
    config: ClientConfig,
    global_headers: Headers,
}

impl BackendClient {
    /// Build a client whose requests carry `scope`
    pub fn new(config: ClientConfig, scope: &str) -> Self {
        Self {
            id: NEXT_CLIENT_ID.fetch_add(1, Ordering::Relaxed),
            config,
            global_headers: scope_headers(scope),
        }
    }

    /// Process-unique build number
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn url(&self) -> &str {
        &self.config.url
    }

    pub fn anon_key(&self) -> &str {
        &self.config.anon_key
    }

    /// Custom headers set at construction
    pub fn global_headers(&self) -> &Headers {
        &self.global_headers
    }

    /// Full header set of an outgoing request
    pub fn request_headers(&self) -> Headers {
        let mut headers = Headers::new();
        headers.insert("apikey".to_string(), self.config.anon_key.clone());
        headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", self.config.anon_key),
        );
        headers.extend(self.global_headers.clone());
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ClientConfig {
        ClientConfig {
            url: "https://db.example".to_string(),
            anon_key: "anon".to_string(),
        }
    }

    #[test]
    fn test_request_headers_with_scope() {
        let client = BackendClient::new(config(), "abc");
        let headers = client.request_headers();
        assert_eq!(headers["apikey"], "anon");
        assert_eq!(headers["Authorization"], "Bearer anon");
        assert_eq!(headers[PASSCODE_HEADER], "abc");
    }

    #[test]
    fn test_request_headers_without_scope() {
        let client = BackendClient::new(config(), "");
        assert!(client.global_headers().is_empty());
        assert!(!client.request_headers().contains_key(PASSCODE_HEADER));
    }

    #[test]
    fn test_client_ids_unique() {
        let a = BackendClient::new(config(), "");
        let b = BackendClient::new(config(), "");
        assert_ne!(a.id(), b.id());
        assert_eq!(a.url(), "https://db.example");
        assert_eq!(a.anon_key(), "anon");
    }
}
