//! Lazy, memoized session identity.
//!
//! The portal issues a session cookie at login; the response body carries the
//! username, which doubles as the identity token in account-scoped URLs. The
//! cookie travels implicitly with every request (the HTTP client owns the
//! jar), but the *username* has to be remembered somewhere page-scoped —
//! that is [`SessionStore`], keyed by [`IDENTITY_KEY`].
//!
//! [`SessionCache::resolve`] is the single path every account-bound
//! operation takes to learn who the user is:
//!
//! 1. Store holds a non-empty value: return it, no network call.
//! 2. Otherwise probe `POST /api/login` with an empty form. The cookie alone
//!    decides: a clean envelope names the user (remember and return it), an
//!    envelope error means the session is gone
//!    ([`ClientError::SessionExpired`]).
//!
//! The cache is written on resolution and by the login operation, and never
//! cleared from in here; a dead session is discovered reactively by the next
//! failed probe. Concurrent resolves past an empty store may each probe, and
//! each stores the same username for the same cookie, so at most one token
//! is ever cached.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use reqwest::multipart;
use tracing::debug;

use astropost_api::{Envelope, PortalRoutes};

use crate::error::ClientError;

/// Storage key under which the resolved identity lives.
pub const IDENTITY_KEY: &str = "username";

// ---------------------------------------------------------------------------
// Storage seam
// ---------------------------------------------------------------------------

/// Page-scoped string storage, the shape of a browser session store.
///
/// `clear` exists for hosts (logout wipes the page scope); the session
/// machinery itself only ever reads and writes.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn clear(&self);
}

/// In-process [`SessionStore`] for tests and embedders without a host page.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .write()
            .unwrap()
            .insert(key.to_owned(), value.to_owned());
    }

    fn clear(&self) {
        self.entries.write().unwrap().clear();
    }
}

// ---------------------------------------------------------------------------
// The cache
// ---------------------------------------------------------------------------

/// Memoized identity resolution over a [`SessionStore`].
#[derive(Clone)]
pub struct SessionCache {
    store: Arc<dyn SessionStore>,
    http: reqwest::Client,
    routes: PortalRoutes,
}

impl SessionCache {
    /// `http` must carry a cookie jar shared with the client that performed
    /// (or will perform) the login, otherwise the probe is always anonymous.
    pub fn new(store: Arc<dyn SessionStore>, http: reqwest::Client, routes: PortalRoutes) -> Self {
        Self {
            store,
            http,
            routes,
        }
    }

    /// The identity currently on record, if any. Empty values count as
    /// absent.
    pub fn cached(&self) -> Option<String> {
        self.store
            .get(IDENTITY_KEY)
            .filter(|identity| !identity.is_empty())
    }

    /// Record `identity` as the session's user. The authoritative write,
    /// used by the login operation; later resolves hit the cache.
    pub fn remember(&self, identity: &str) {
        self.store.set(IDENTITY_KEY, identity);
    }

    /// Yield the session identity, probing the portal only on a cache miss.
    ///
    /// An envelope error on the probe is reported as
    /// [`ClientError::SessionExpired`] regardless of the server's wording;
    /// the dependent operation must not proceed.
    pub async fn resolve(&self) -> Result<String, ClientError> {
        if let Some(identity) = self.cached() {
            return Ok(identity);
        }

        debug!("no cached identity, probing session");
        let response = self
            .http
            .post(self.routes.login_url())
            .multipart(multipart::Form::new())
            .send()
            .await?;
        let envelope: Envelope<String> = response.json().await?;

        if envelope.rejection().is_some() {
            return Err(ClientError::SessionExpired);
        }
        let identity = envelope.into_result()?;
        self.store.set(IDENTITY_KEY, &identity);
        Ok(identity)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use axum::{routing::post, Json, Router};
    use tokio::net::TcpListener;

    use crate::error::SESSION_EXPIRED_MESSAGE;

    /// Spawn a loopback stub portal and return its base URL.
    async fn spawn_stub_portal(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn cache_for(base: &str, store: Arc<dyn SessionStore>) -> SessionCache {
        SessionCache::new(store, reqwest::Client::new(), PortalRoutes::new(base))
    }

    fn counting_login(identity: &'static str) -> (Router, Arc<AtomicUsize>) {
        let hits = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&hits);
        let router = Router::new().route(
            "/api/login",
            post(move || {
                seen.fetch_add(1, Ordering::SeqCst);
                async move { Json(Envelope::success(identity.to_string())) }
            }),
        );
        (router, hits)
    }

    // -----------------------------------------------------------------------
    // Test: a cached identity short-circuits the probe
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn cache_hit_issues_no_probe() {
        let (router, hits) = counting_login("alice");
        let base = spawn_stub_portal(router).await;

        let store: Arc<dyn SessionStore> = Arc::new(MemoryStore::new());
        store.set(IDENTITY_KEY, "alice");
        let cache = cache_for(&base, store);

        assert_eq!(cache.resolve().await.unwrap(), "alice");
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    // -----------------------------------------------------------------------
    // Test: a miss probes once, then later resolves reuse the stored value
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn miss_probes_once_and_memoizes() {
        let (router, hits) = counting_login("alice");
        let base = spawn_stub_portal(router).await;

        let store: Arc<dyn SessionStore> = Arc::new(MemoryStore::new());
        let cache = cache_for(&base, Arc::clone(&store));

        assert_eq!(cache.resolve().await.unwrap(), "alice");
        assert_eq!(cache.resolve().await.unwrap(), "alice");
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(store.get(IDENTITY_KEY).as_deref(), Some("alice"));
    }

    // -----------------------------------------------------------------------
    // Test: an empty stored value does not count as cached
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn empty_stored_value_still_probes() {
        let (router, hits) = counting_login("alice");
        let base = spawn_stub_portal(router).await;

        let store: Arc<dyn SessionStore> = Arc::new(MemoryStore::new());
        store.set(IDENTITY_KEY, "");
        let cache = cache_for(&base, store);

        assert_eq!(cache.resolve().await.unwrap(), "alice");
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    // -----------------------------------------------------------------------
    // Test: an envelope error on the probe means the session is gone
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn probe_rejection_is_session_expired() {
        let router = Router::new().route(
            "/api/login",
            post(|| async { Json(Envelope::<String>::failure("not logged in")) }),
        );
        let base = spawn_stub_portal(router).await;

        let store: Arc<dyn SessionStore> = Arc::new(MemoryStore::new());
        let cache = cache_for(&base, Arc::clone(&store));

        let error = cache.resolve().await.unwrap_err();
        assert!(matches!(error, ClientError::SessionExpired));
        assert_eq!(error.to_string(), SESSION_EXPIRED_MESSAGE);
        assert_eq!(store.get(IDENTITY_KEY), None);
    }

    // -----------------------------------------------------------------------
    // Test: racing resolves may both probe but agree on one token
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn racing_resolves_agree() {
        let (router, hits) = counting_login("alice");
        let base = spawn_stub_portal(router).await;

        let store: Arc<dyn SessionStore> = Arc::new(MemoryStore::new());
        let cache = cache_for(&base, Arc::clone(&store));

        let (first, second) = tokio::join!(cache.resolve(), cache.resolve());
        assert_eq!(first.unwrap(), "alice");
        assert_eq!(second.unwrap(), "alice");
        assert!(matches!(hits.load(Ordering::SeqCst), 1 | 2));
        assert_eq!(store.get(IDENTITY_KEY).as_deref(), Some("alice"));
    }

    // -----------------------------------------------------------------------
    // Test: remember is authoritative and overwrites
    // -----------------------------------------------------------------------

    #[test]
    fn remember_overwrites() {
        let store: Arc<dyn SessionStore> = Arc::new(MemoryStore::new());
        let cache = SessionCache::new(
            Arc::clone(&store),
            reqwest::Client::new(),
            PortalRoutes::new("http://unused"),
        );

        cache.remember("alice");
        cache.remember("bob");
        assert_eq!(cache.cached().as_deref(), Some("bob"));
    }

    #[test]
    fn memory_store_clear_wipes_everything() {
        let store = MemoryStore::new();
        store.set(IDENTITY_KEY, "alice");
        store.set("theme", "dark");
        store.clear();
        assert_eq!(store.get(IDENTITY_KEY), None);
        assert_eq!(store.get("theme"), None);
    }
}
