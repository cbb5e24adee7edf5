//! Backend connection parameters

use crate::error::{CoreError, Result};

/// Environment variable holding the backend endpoint
pub const URL_VAR: &str = "PUBLIC_SUPABASE_URL";

/// Environment variable holding the public API key
pub const ANON_KEY_VAR: &str = "PUBLIC_SUPABASE_ANON_KEY";

/// Variable lookup used to resolve [`ClientConfig`]
pub type EnvLookup = dyn Fn(&str) -> Option<String> + Send + Sync;

/// Endpoint and key a backend client is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub url: String,
    pub anon_key: String,
}

impl ClientConfig {
    /// Read both parameters through `lookup`
    ///
    /// Empty values count as missing.
    ///
    /// # Errors
    /// - `Configuration` naming every variable that is missing
    pub fn resolve(lookup: &EnvLookup) -> Result<Self> {
        let read = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let url = read(URL_VAR);
        let anon_key = read(ANON_KEY_VAR);

        match (url, anon_key) {
            (Some(url), Some(anon_key)) => Ok(Self { url, anon_key }),
            (url, anon_key) => {
                let mut missing = Vec::new();
                if url.is_none() {
                    missing.push(URL_VAR);
                }
                if anon_key.is_none() {
                    missing.push(ANON_KEY_VAR);
                }
                Err(CoreError::Configuration { missing })
            }
        }
    }
}
