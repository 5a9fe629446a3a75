//! Process wake-up: restore a previously persisted session.
//!
//! After a successful sign-up or login chain persisted the username,
//! password and token pair, a fresh process calls [`wake_up`] to
//! configure the process-wide secure store, read the four values back
//! and hydrate the token cache, so refresh chains can run without asking
//! the user to log in again.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use tracing::debug;

use authkit_secure_store::{SecureStore, VaultBackend};

use crate::config::AuthConfig;
use crate::token_cache::TokenCache;

/// Why a persisted session could not be restored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BootstrapError {
    /// One of the four persisted values is missing; the user has to go
    /// through a full login.
    #[error("token_not_stored: {account}")]
    TokenNotStored {
        /// Logical account name the value was expected under.
        account: String,
    },
    /// A stored entry exists but does not decode as UTF-8.
    #[error("corrupt_entry: {account}")]
    CorruptEntry {
        /// Logical account name of the corrupt entry.
        account: String,
    },
}

/// In-memory snapshot of a restored session.
#[derive(Debug)]
pub struct StoredSession {
    username: String,
    password: SecretString,
    access_token: String,
    refresh_token: String,
}

impl StoredSession {
    /// The persisted username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The persisted password.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.expose_secret()
    }

    /// The persisted access token.
    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// The persisted refresh token.
    #[must_use]
    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }
}

/// Configures the process-wide secure store with `backend`, restores the
/// persisted session and hydrates the process-wide token cache.
///
/// # Errors
///
/// [`BootstrapError::TokenNotStored`] when any of the four values is
/// absent, [`BootstrapError::CorruptEntry`] when a stored entry is not
/// UTF-8.
pub async fn wake_up(
    config: &AuthConfig,
    backend: Box<dyn VaultBackend>,
) -> Result<StoredSession, BootstrapError> {
    let store = SecureStore::configure(config.service(), backend);
    wake_up_with(&store, &TokenCache::global(), config).await
}

/// Same as [`wake_up`] against explicit store and cache instances.
///
/// # Errors
///
/// See [`wake_up`].
pub async fn wake_up_with(
    store: &SecureStore,
    cache: &TokenCache,
    config: &AuthConfig,
) -> Result<StoredSession, BootstrapError> {
    let accounts = config.store_accounts();
    let username = read_utf8(store, &accounts.username).await?;
    let password = read_utf8(store, &accounts.password).await?;
    let access_token = read_utf8(store, &accounts.access_token).await?;
    let refresh_token = read_utf8(store, &accounts.refresh_token).await?;

    cache.set_access_token(Some(access_token.clone()));
    cache.set_refresh_token(Some(refresh_token.clone()));
    debug!("restored persisted session");

    Ok(StoredSession {
        username,
        password: SecretString::from(password),
        access_token,
        refresh_token,
    })
}

async fn read_utf8(store: &SecureStore, account: &str) -> Result<String, BootstrapError> {
    let Some(bytes) = store.read(account).await else {
        return Err(BootstrapError::TokenNotStored {
            account: account.to_owned(),
        });
    };
    String::from_utf8(bytes).map_err(|_| BootstrapError::CorruptEntry {
        account: account.to_owned(),
    })
}
