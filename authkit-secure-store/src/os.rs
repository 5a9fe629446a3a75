use keyring::Entry;

use crate::VaultBackend;

/// Vault backend over the operating system credential store.
///
/// Uses the platform service behind the `keyring` crate: Keychain on
/// macOS/iOS, the Secret Service on Linux, the Credential Manager on
/// Windows. Every call opens a fresh [`Entry`]; the OS store is the
/// durable state, nothing is cached here.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsVault;

impl OsVault {
    /// Creates the backend.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl VaultBackend for OsVault {
    fn save(&self, service: &str, account: &str, bytes: &[u8]) -> bool {
        match Entry::new(service, account) {
            Ok(entry) => match entry.set_secret(bytes) {
                Ok(()) => true,
                Err(err) => {
                    tracing::warn!(account, error = %err, "keychain save failed");
                    false
                }
            },
            Err(err) => {
                tracing::warn!(account, error = %err, "keychain entry unavailable");
                false
            }
        }
    }

    fn update(&self, service: &str, account: &str, bytes: &[u8]) -> bool {
        let Ok(entry) = Entry::new(service, account) else {
            return false;
        };
        // The OS stores upsert on write; an update only differs in that the
        // entry must already exist.
        if !matches!(entry.get_secret(), Ok(_)) {
            return false;
        }
        entry.set_secret(bytes).is_ok()
    }

    fn read(&self, service: &str, account: &str) -> Option<Vec<u8>> {
        let entry = Entry::new(service, account).ok()?;
        match entry.get_secret() {
            Ok(bytes) => Some(bytes),
            Err(keyring::Error::NoEntry) => None,
            Err(err) => {
                tracing::warn!(account, error = %err, "keychain read failed");
                None
            }
        }
    }

    fn delete(&self, service: &str, account: &str) -> bool {
        let Ok(entry) = Entry::new(service, account) else {
            return false;
        };
        match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => true,
            Err(err) => {
                tracing::warn!(account, error = %err, "keychain delete failed");
                false
            }
        }
    }
}
