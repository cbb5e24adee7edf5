//! Scope-keyed client cache
//!
//! Keeps one client per passcode so callers with different scopes can be
//! served side by side. A [`ScopedRequest`] pairs a request's scope with the
//! shared cache and is meant to travel with the request context.
//!
//! The cache holds at most `capacity` scopes. Once full, building a client
//! for a new scope evicts the oldest one; holders of an evicted client keep
//! it alive until they drop it.

use super::backend::{scope_headers, BackendClient, Headers};
use super::config::{ClientConfig, EnvLookup};
use crate::error::Result;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Default number of scopes kept by [`ScopeCache`]
pub const DEFAULT_SCOPE_CAPACITY: usize = 64;

#[derive(Default)]
struct Entries {
    clients: HashMap<String, Arc<BackendClient>>,
    /// Scopes in insertion order, oldest first
    order: VecDeque<String>,
}

/// Clients keyed by scope, built on first use
pub struct ScopeCache {
    lookup: Box<EnvLookup>,
    capacity: usize,
    entries: RwLock<Entries>,
}

impl ScopeCache {
    /// Cache with [`DEFAULT_SCOPE_CAPACITY`] reading configuration through `lookup`
    pub fn with_lookup(lookup: impl Fn(&str) -> Option<String> + Send + Sync + 'static) -> Self {
        Self::with_capacity(lookup, DEFAULT_SCOPE_CAPACITY)
    }

    /// Cache holding at most `capacity` scopes (minimum 1)
    pub fn with_capacity(
        lookup: impl Fn(&str) -> Option<String> + Send + Sync + 'static,
        capacity: usize,
    ) -> Self {
        Self {
            lookup: Box::new(lookup),
            capacity: capacity.max(1),
            entries: RwLock::new(Entries::default()),
        }
    }

    /// Client for `scope`, built on first request
    ///
    /// # Errors
    /// - `Configuration` if the endpoint or key is missing; nothing is cached
    pub fn client_for(&self, scope: &str) -> Result<Arc<BackendClient>> {
        {
            let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
            if let Some(client) = entries.clients.get(scope) {
                return Ok(Arc::clone(client));
            }
        }

        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        // Another writer may have filled the slot between the two locks.
        if let Some(client) = entries.clients.get(scope) {
            return Ok(Arc::clone(client));
        }

        let config = ClientConfig::resolve(&*self.lookup)?;
        let client = Arc::new(BackendClient::new(config, scope));

        while entries.order.len() >= self.capacity {
            let Some(oldest) = entries.order.pop_front() else {
                break;
            };
            if let Some(evicted) = entries.clients.remove(&oldest) {
                debug!(client_id = evicted.id(), "Evicted backend client");
            }
        }

        entries.clients.insert(scope.to_string(), Arc::clone(&client));
        entries.order.push_back(scope.to_string());
        debug!(
            client_id = client.id(),
            scoped = !scope.is_empty(),
            cached = entries.clients.len(),
            "Built backend client"
        );
        Ok(client)
    }

    /// Headers carrying `scope`
    pub fn headers_for(&self, scope: &str) -> Headers {
        scope_headers(scope)
    }

    /// Number of cached scopes
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clients
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Scope of a single request plus the cache serving it
#[derive(Clone)]
pub struct ScopedRequest {
    scope: String,
    cache: Arc<ScopeCache>,
}

impl ScopedRequest {
    pub fn new(cache: Arc<ScopeCache>, scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            cache,
        }
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Client bound to this request's scope
    pub fn client(&self) -> Result<Arc<BackendClient>> {
        self.cache.client_for(&self.scope)
    }

    /// Headers for manual requests made on behalf of this request
    pub fn headers(&self) -> Headers {
        self.cache.headers_for(&self.scope)
    }
}
