//! Cache store for session-stable console resources.
//!
//! The field catalog and the default configuration never change within a
//! session, so they are fetched once and kept. Each resource lives in a
//! [`CacheSlot`] with three states (unfetched, in flight, resolved) and
//! a single-flight guard: at most one request per resource is in flight,
//! and callers that arrive while one is running wait for it instead of
//! issuing their own.
//!
//! Fetch failures are swallowed here - logged, with the cached value
//! left at its empty default. A value that is still empty after `init`
//! resolves means "unavailable", not "still loading".

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::error;

use flowconf_api::{FieldDescriptor, SensorConfig};
use flowconf_client::{ConsoleClient, Result};

/// Values that count as "cached": an empty result is kept out of the
/// slot so a later call can try the backend again.
trait CacheValue {
    fn is_present(&self) -> bool;
}

impl<T> CacheValue for Vec<T> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl CacheValue for SensorConfig {
    fn is_present(&self) -> bool {
        true
    }
}

enum CacheState<T> {
    Unfetched,
    /// A fetch is running; the sender side is dropped when it finishes.
    InFlight(watch::Receiver<()>),
    Resolved(T),
}

struct CacheSlot<T> {
    state: Mutex<CacheState<T>>,
}

impl<T: Clone + CacheValue> CacheSlot<T> {
    fn new() -> Self {
        Self {
            state: Mutex::new(CacheState::Unfetched),
        }
    }

    /// Snapshot of the resolved value, if any.
    fn get(&self) -> Option<T> {
        match &*self.state.lock() {
            CacheState::Resolved(value) => Some(value.clone()),
            _ => None,
        }
    }

    /// Return the cached value, joining an in-flight fetch or issuing
    /// one if the slot is unfetched. Errors are logged and yield None.
    async fn get_or_fetch<F, Fut>(&self, resource: &'static str, fetch: F) -> Option<T>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        loop {
            let mut waiter = {
                let mut state = self.state.lock();
                match &*state {
                    CacheState::Resolved(value) => return Some(value.clone()),
                    CacheState::InFlight(rx) => {
                        if rx.has_changed().is_err() {
                            // The fetching task was dropped mid-flight;
                            // reclaim the slot and fetch ourselves.
                            *state = CacheState::Unfetched;
                            continue;
                        }
                        rx.clone()
                    }
                    CacheState::Unfetched => {
                        let (tx, rx) = watch::channel(());
                        *state = CacheState::InFlight(rx);
                        drop(state);
                        return self.run_fetch(resource, tx, fetch()).await;
                    }
                }
            };
            // Wake when the fetch finishes (the sender is dropped),
            // then re-check the slot.
            let _ = waiter.changed().await;
        }
    }

    async fn run_fetch<Fut>(
        &self,
        resource: &'static str,
        tx: watch::Sender<()>,
        fut: Fut,
    ) -> Option<T>
    where
        Fut: Future<Output = Result<T>>,
    {
        let value = match fut.await {
            Ok(value) => {
                *self.state.lock() = if value.is_present() {
                    CacheState::Resolved(value.clone())
                } else {
                    CacheState::Unfetched
                };
                Some(value)
            }
            Err(err) => {
                error!("failed to fetch {}: {}", resource, err);
                *self.state.lock() = CacheState::Unfetched;
                None
            }
        };
        // Dropping the sender wakes every waiter
        drop(tx);
        value
    }
}

/// Shared console state for the field catalog and default configuration.
pub struct ConfigStore {
    client: Arc<ConsoleClient>,
    supported_fields: CacheSlot<Vec<FieldDescriptor>>,
    default_config: CacheSlot<SensorConfig>,
    loading: AtomicBool,
}

impl ConfigStore {
    pub fn new(client: Arc<ConsoleClient>) -> Self {
        Self {
            client,
            supported_fields: CacheSlot::new(),
            default_config: CacheSlot::new(),
            loading: AtomicBool::new(false),
        }
    }

    /// Fetch the field catalog unless a non-empty one is already cached.
    pub async fn fetch_supported_fields(&self) -> Vec<FieldDescriptor> {
        self.supported_fields
            .get_or_fetch("supported fields", || {
                let client = Arc::clone(&self.client);
                async move { client.supported_fields().await }
            })
            .await
            .unwrap_or_default()
    }

    /// Fetch the default configuration unless one is already cached.
    pub async fn fetch_default_config(&self) -> Option<SensorConfig> {
        self.default_config
            .get_or_fetch("default config", || {
                let client = Arc::clone(&self.client);
                async move { client.default_config().await }
            })
            .await
    }

    /// Fetch both resources concurrently. Resolves even when one fetch
    /// fails; the failed resource keeps its empty default.
    pub async fn init(&self) {
        self.loading.store(true, Ordering::SeqCst);
        tokio::join!(self.fetch_supported_fields(), self.fetch_default_config());
        self.loading.store(false, Ordering::SeqCst);
    }

    /// True only while `init`'s own requests are running.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Cached field catalog; empty until a fetch has resolved.
    pub fn supported_fields(&self) -> Vec<FieldDescriptor> {
        self.supported_fields.get().unwrap_or_default()
    }

    /// Cached default configuration; None until a fetch has resolved.
    pub fn default_config(&self) -> Option<SensorConfig> {
        self.default_config.get()
    }
}
