use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use zeroize::Zeroizing;

/// Boundary to the platform's secret persistence.
///
/// Entries are keyed by `(service, account)`. Methods report success as a
/// plain `bool` mirroring the underlying platform APIs, which answer with
/// a status rather than a structured error; callers that need a typed
/// error attach their own on a `false` return.
pub trait VaultBackend: Send + Sync {
    /// Writes `bytes` under the account, replacing any existing entry.
    fn save(&self, service: &str, account: &str, bytes: &[u8]) -> bool;

    /// Overwrites an existing entry. Fails if the account has no entry.
    fn update(&self, service: &str, account: &str, bytes: &[u8]) -> bool;

    /// Reads the entry back, `None` if the account has no entry.
    fn read(&self, service: &str, account: &str) -> Option<Vec<u8>>;

    /// Removes the entry. Returns `true` also when the account had none.
    fn delete(&self, service: &str, account: &str) -> bool;
}

/// Vault backend held entirely in process memory.
///
/// Not durable and not secured by the platform; intended for tests and for
/// hosts without a credential store. Values are zeroized on drop.
#[derive(Default)]
pub struct MemoryVault {
    entries: RwLock<HashMap<(String, String), Zeroizing<Vec<u8>>>>,
}

impl MemoryVault {
    /// Creates an empty vault.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, across all services.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` if no entries are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl VaultBackend for MemoryVault {
    fn save(&self, service: &str, account: &str, bytes: &[u8]) -> bool {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        entries.insert(
            (service.to_owned(), account.to_owned()),
            Zeroizing::new(bytes.to_vec()),
        );
        true
    }

    fn update(&self, service: &str, account: &str, bytes: &[u8]) -> bool {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        match entries.get_mut(&(service.to_owned(), account.to_owned())) {
            Some(existing) => {
                *existing = Zeroizing::new(bytes.to_vec());
                true
            }
            None => false,
        }
    }

    fn read(&self, service: &str, account: &str) -> Option<Vec<u8>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&(service.to_owned(), account.to_owned()))
            .map(|bytes| bytes.to_vec())
    }

    fn delete(&self, service: &str, account: &str) -> bool {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&(service.to_owned(), account.to_owned()));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SERVICE: &str = "com.test.authkit";

    #[test]
    fn save_then_read_returns_identical_bytes() {
        let vault = MemoryVault::new();
        assert!(vault.save(SERVICE, "token", b"abc123"));
        assert_eq!(vault.read(SERVICE, "token"), Some(b"abc123".to_vec()));
    }

    #[test]
    fn save_replaces_existing_entry() {
        let vault = MemoryVault::new();
        vault.save(SERVICE, "token", b"old");
        vault.save(SERVICE, "token", b"new");
        assert_eq!(vault.read(SERVICE, "token"), Some(b"new".to_vec()));
        assert_eq!(vault.len(), 1);
    }

    #[test]
    fn update_requires_existing_entry() {
        let vault = MemoryVault::new();
        assert!(!vault.update(SERVICE, "token", b"value"));
        vault.save(SERVICE, "token", b"value");
        assert!(vault.update(SERVICE, "token", b"other"));
        assert_eq!(vault.read(SERVICE, "token"), Some(b"other".to_vec()));
    }

    #[test]
    fn delete_is_true_even_for_missing_accounts() {
        let vault = MemoryVault::new();
        assert!(vault.delete(SERVICE, "never-stored"));
        vault.save(SERVICE, "token", b"value");
        assert!(vault.delete(SERVICE, "token"));
        assert_eq!(vault.read(SERVICE, "token"), None);
    }

    #[test]
    fn entries_are_scoped_by_service() {
        let vault = MemoryVault::new();
        vault.save("com.a.authkit", "token", b"a");
        vault.save("com.b.authkit", "token", b"b");
        assert_eq!(vault.read("com.a.authkit", "token"), Some(b"a".to_vec()));
        assert_eq!(vault.read("com.b.authkit", "token"), Some(b"b".to_vec()));
    }

    #[test]
    fn concurrent_saves_land() {
        use std::sync::Arc;

        let vault = Arc::new(MemoryVault::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let vault = Arc::clone(&vault);
                std::thread::spawn(move || {
                    let account = format!("account-{i}");
                    assert!(vault.save(SERVICE, &account, account.as_bytes()));
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("writer thread");
        }
        assert_eq!(vault.len(), 8);
    }
}
