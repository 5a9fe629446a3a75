use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use crate::token::TokenPair;

static GLOBAL: OnceLock<Arc<TokenCache>> = OnceLock::new();

/// In-memory holder of the current session's token pair.
///
/// Fast reads for the running process only; nothing here survives a
/// restart. Durable persistence is the secure store's job. All access is
/// serialized, so concurrent chains see a consistent pair; across chains
/// the last writer wins.
#[derive(Debug, Default)]
pub struct TokenCache {
    inner: Mutex<TokenPair>,
}

impl TokenCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide cache, created on first use.
    #[must_use]
    pub fn global() -> Arc<Self> {
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(Self::new())))
    }

    /// Sets or clears the access token. `None` means logged out.
    pub fn set_access_token(&self, token: Option<String>) {
        self.lock().access_token = token;
    }

    /// Sets or clears the refresh token. `None` means logged out.
    pub fn set_refresh_token(&self, token: Option<String>) {
        self.lock().refresh_token = token;
    }

    /// The current access token, if any.
    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.lock().access_token.clone()
    }

    /// The current refresh token, if any.
    #[must_use]
    pub fn refresh_token(&self) -> Option<String> {
        self.lock().refresh_token.clone()
    }

    /// A consistent copy of the current pair.
    #[must_use]
    pub fn snapshot(&self) -> TokenPair {
        self.lock().clone()
    }

    /// Clears both tokens, representing logout.
    pub fn clear(&self) {
        *self.lock() = TokenPair::default();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, TokenPair> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
