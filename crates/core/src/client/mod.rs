//! Passcode-scoped backend clients
//!
//! The process-wide provider below is the single-user entry point: every
//! caller shares one slot, so the last scope requested wins. Code serving
//! several users at once should hand each request a [`ScopedRequest`] instead.

mod backend;
mod cache;
mod config;
mod provider;

pub use backend::{scope_headers, BackendClient, Headers, PASSCODE_HEADER};
pub use cache::{ScopeCache, ScopedRequest, DEFAULT_SCOPE_CAPACITY};
pub use config::{ClientConfig, EnvLookup, ANON_KEY_VAR, URL_VAR};
pub use provider::ScopedClientProvider;

use crate::error::Result;
use once_cell::sync::Lazy;
use std::sync::Arc;

/// Process-wide provider, configured from the environment on first build
static PROVIDER: Lazy<ScopedClientProvider> = Lazy::new(ScopedClientProvider::from_env);

/// Shared client bound to `scope`
///
/// See [`ScopedClientProvider::ensure_client`].
pub fn ensure_client(scope: &str) -> Result<Arc<BackendClient>> {
    PROVIDER.ensure_client(scope)
}

/// Same as [`ensure_client`]
pub fn set_scope(scope: &str) -> Result<Arc<BackendClient>> {
    PROVIDER.set_scope(scope)
}

/// Headers carrying the shared client's scope
pub fn headers_for_scope() -> Headers {
    PROVIDER.headers_for_scope()
}
