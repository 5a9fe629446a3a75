use std::sync::{Arc, OnceLock};

use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::VaultBackend;

static SHARED: OnceLock<Arc<SecureStore>> = OnceLock::new();

/// Serialized access to durable secret persistence.
///
/// All operations go through one internal lock, so save/update/read/delete
/// calls are atomic with respect to each other even when independent auth
/// chains run concurrently. The store itself holds no secret state; the
/// backend is the source of truth.
pub struct SecureStore {
    service: String,
    backend: Box<dyn VaultBackend>,
    gate: Mutex<()>,
}

impl SecureStore {
    /// Creates a standalone store for `service`.
    #[must_use]
    pub fn new(service: impl Into<String>, backend: Box<dyn VaultBackend>) -> Self {
        Self {
            service: service.into(),
            backend,
            gate: Mutex::new(()),
        }
    }

    /// Configures the process-wide store. The first call wins; later calls
    /// are ignored with a warning and the already-configured instance is
    /// returned.
    pub fn configure(
        service: impl Into<String>,
        backend: Box<dyn VaultBackend>,
    ) -> Arc<Self> {
        let store = Arc::new(Self::new(service, backend));
        if SHARED.set(Arc::clone(&store)).is_err() {
            warn!("secure store is already configured, ignoring");
        }
        Self::shared()
    }

    /// The process-wide store.
    ///
    /// # Panics
    ///
    /// Panics if [`SecureStore::configure`] has not been called yet; doing
    /// so is a programmer error, not a runtime failure mode.
    #[must_use]
    pub fn shared() -> Arc<Self> {
        Arc::clone(
            SHARED
                .get()
                .expect("SecureStore::configure must be called before shared()"),
        )
    }

    /// The service identifier entries are namespaced under.
    #[must_use]
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Writes `bytes` under `account`, replacing any existing entry.
    pub async fn save(&self, account: &str, bytes: &[u8]) -> bool {
        let _guard = self.gate.lock().await;
        debug!(account, "saving secure store entry");
        self.backend.save(&self.service, account, bytes)
    }

    /// Overwrites an existing entry; fails if `account` has none.
    pub async fn update(&self, account: &str, bytes: &[u8]) -> bool {
        let _guard = self.gate.lock().await;
        self.backend.update(&self.service, account, bytes)
    }

    /// Reads the entry for `account`, `None` when absent.
    pub async fn read(&self, account: &str) -> Option<Vec<u8>> {
        let _guard = self.gate.lock().await;
        self.backend.read(&self.service, account)
    }

    /// Removes the entry for `account`. Returns `true` also when absent.
    pub async fn delete(&self, account: &str) -> bool {
        let _guard = self.gate.lock().await;
        debug!(account, "deleting secure store entry");
        self.backend.delete(&self.service, account)
    }
}
