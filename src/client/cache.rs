//! Memoized client handles.

use crate::client::core::ElevenLabsClient;
use crate::config::{resolve_api_key, ClientSettings, EnvView};
use crate::{Error, ErrorContext, Result};
use lru::LruCache;
use once_cell::sync::Lazy;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

/// Cache key: the explicit override exactly as the caller passed it.
type Slot = Option<String>;

/// Store of client handles keyed by the caller's explicit key override.
///
/// `None` (no override) is a key of its own, so every caller relying on the
/// environment shares one handle. Entries are never refreshed: if the
/// environment changes after a handle was built, the cached handle is still
/// returned until [`ClientCache::clear`] or [`ClientCache::invalidate`].
pub struct ClientCache {
    slots: Mutex<LruCache<Slot, Arc<ElevenLabsClient>>>,
}

impl ClientCache {
    /// Unbounded cache: one handle per distinct input for the cache's lifetime.
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(LruCache::unbounded()),
        }
    }

    /// Cache holding at most `capacity` handles, evicting the least recently
    /// used one.
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            slots: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Cache remembering only the most recent input.
    pub fn single_slot() -> Self {
        Self::with_capacity(NonZeroUsize::MIN)
    }

    /// Return the handle for `api_key`, constructing it on first use.
    ///
    /// The key is resolved against `env` on every call, so a configuration
    /// error surfaces even when a handle is cached. Nothing is cached when
    /// resolution or construction fails.
    pub fn get_client(
        &self,
        api_key: Option<&str>,
        env: &EnvView,
    ) -> Result<Arc<ElevenLabsClient>> {
        let resolved = resolve_api_key(api_key, env)?;
        let slot: Slot = api_key.map(str::to_string);

        let mut slots = self.lock()?;
        if let Some(client) = slots.get(&slot) {
            debug!(explicit = slot.is_some(), "client cache hit");
            return Ok(Arc::clone(client));
        }

        let settings = ClientSettings::from_env(env)?;
        let client = Arc::new(
            ElevenLabsClient::builder()
                .api_key(resolved)
                .settings(settings)
                .build()?,
        );
        debug!(
            explicit = slot.is_some(),
            base_url = client.base_url(),
            "constructed ElevenLabs client"
        );
        slots.put(slot, Arc::clone(&client));
        Ok(client)
    }

    /// True when a handle is cached for this exact input.
    ///
    /// Like every accessor here, a poisoned lock is reported as
    /// [`Error::Runtime`] rather than read as an empty cache.
    pub fn contains(&self, api_key: Option<&str>) -> Result<bool> {
        Ok(self.lock()?.contains(&api_key.map(str::to_string)))
    }

    /// Drop the handle cached for `api_key`, returning whether one existed.
    pub fn invalidate(&self, api_key: Option<&str>) -> Result<bool> {
        Ok(self.lock()?.pop(&api_key.map(str::to_string)).is_some())
    }

    /// Drop every cached handle.
    pub fn clear(&self) -> Result<()> {
        self.lock()?.clear();
        Ok(())
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    fn lock(&self) -> Result<MutexGuard<'_, LruCache<Slot, Arc<ElevenLabsClient>>>> {
        self.slots.lock().map_err(|e| {
            Error::runtime_with_context(
                format!("client cache lock poisoned: {}", e),
                ErrorContext::new().with_source("client_cache"),
            )
        })
    }
}

impl Default for ClientCache {
    fn default() -> Self {
        Self::new()
    }
}

static DEFAULT_CACHE: Lazy<ClientCache> = Lazy::new(ClientCache::new);

/// The process-wide cache behind [`get_client`].
pub fn default_cache() -> &'static ClientCache {
    &DEFAULT_CACHE
}

/// Return a shared client, loading `.env` once and reading the process
/// environment when no explicit key is given.
///
/// Applications that manage their own configuration should hold a
/// [`ClientCache`] and call [`ClientCache::get_client`] with an
/// [`EnvView`] instead.
pub fn get_client(api_key: Option<&str>) -> Result<Arc<ElevenLabsClient>> {
    let env = EnvView::load();
    DEFAULT_CACHE.get_client(api_key, &env)
}
