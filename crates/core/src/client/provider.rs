//! Lazily built backend client bound to one passcode at a time
//!
//! The provider holds a single slot. Asking for the scope it is already bound
//! to returns the same client; asking for another scope replaces it. Callers
//! that need several scopes at once should use [`super::ScopeCache`].

use super::backend::{scope_headers, BackendClient, Headers};
use super::config::{ClientConfig, EnvLookup};
use crate::error::Result;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

#[derive(Default)]
struct ClientSession {
    client: Option<Arc<BackendClient>>,
    bound_scope: String,
}

/// Single-slot client provider
pub struct ScopedClientProvider {
    lookup: Box<EnvLookup>,
    session: Mutex<ClientSession>,
}

impl ScopedClientProvider {
    /// Provider reading its configuration from the process environment
    pub fn from_env() -> Self {
        Self::with_lookup(|key| std::env::var(key).ok())
    }

    /// Provider reading its configuration through `lookup`
    pub fn with_lookup(lookup: impl Fn(&str) -> Option<String> + Send + Sync + 'static) -> Self {
        Self {
            lookup: Box::new(lookup),
            session: Mutex::new(ClientSession::default()),
        }
    }

    fn session(&self) -> MutexGuard<'_, ClientSession> {
        self.session.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Client bound to `scope`
    ///
    /// Reuses the current client when `scope` matches the bound one.
    /// Otherwise builds a new client and rebinds; the old one is dropped
    /// once its last holder lets go.
    ///
    /// # Errors
    /// - `Configuration` if the endpoint or key is missing; the session is
    ///   left untouched
    pub fn ensure_client(&self, scope: &str) -> Result<Arc<BackendClient>> {
        let mut session = self.session();

        if let Some(client) = &session.client {
            if session.bound_scope == scope {
                return Ok(Arc::clone(client));
            }
        }

        let config = ClientConfig::resolve(&*self.lookup)?;
        let client = Arc::new(BackendClient::new(config, scope));
        debug!(
            client_id = client.id(),
            scoped = !scope.is_empty(),
            "Built backend client"
        );

        session.client = Some(Arc::clone(&client));
        session.bound_scope = scope.to_string();
        Ok(client)
    }

    /// Same as [`Self::ensure_client`]
    pub fn set_scope(&self, scope: &str) -> Result<Arc<BackendClient>> {
        self.ensure_client(scope)
    }

    /// Headers carrying the bound scope, for requests made without the client
    pub fn headers_for_scope(&self) -> Headers {
        scope_headers(&self.session().bound_scope)
    }

    /// Scope the current client was built with, `None` before the first build
    pub fn bound_scope(&self) -> Option<String> {
        let session = self.session();
        session.client.as_ref().map(|_| session.bound_scope.clone())
    }

    /// Current client without building one
    pub fn current(&self) -> Option<Arc<BackendClient>> {
        self.session().client.clone()
    }
}
