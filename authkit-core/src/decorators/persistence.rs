use std::sync::Arc;

use authkit_secure_store::SecureStore;
use tracing::debug;

use super::{PostAction, PostActionDecorator};
use crate::config::{AuthConfig, StoreAccounts};
use crate::error::OperationError;
use crate::operation::Operation;
use crate::token::TokenGrant;
use crate::token_cache::TokenCache;

/// Persists the issued access and refresh tokens to the secure store.
///
/// Runs only after the wrapped operation succeeded; a failed write
/// surfaces as [`OperationError::StoreRejected`] naming the account that
/// could not be written, without touching the wrapped result.
pub struct StoreTokens {
    store: Arc<SecureStore>,
    accounts: StoreAccounts,
}

impl StoreTokens {
    /// Uses the process-wide store and the configured account names.
    ///
    /// # Panics
    ///
    /// Panics if [`SecureStore::configure`] has not been called yet.
    #[must_use]
    pub fn new(config: &AuthConfig) -> Self {
        Self::with_store(SecureStore::shared(), config.store_accounts().clone())
    }

    /// Uses an explicit store instance.
    #[must_use]
    pub fn with_store(store: Arc<SecureStore>, accounts: StoreAccounts) -> Self {
        Self { store, accounts }
    }
}

impl<O> PostAction<O> for StoreTokens
where
    O: Operation + Sync,
    O::Output: TokenGrant + Sync,
{
    async fn run(&mut self, inner: &O) -> Result<(), OperationError> {
        let grant = inner
            .result()
            .expect("post-action runs only after wrapped success");
        debug!("persisting issued tokens to the secure store");
        if !self
            .store
            .save(&self.accounts.access_token, grant.access_token().as_bytes())
            .await
        {
            return Err(OperationError::StoreRejected {
                account: self.accounts.access_token.clone(),
            });
        }
        if !self
            .store
            .save(
                &self.accounts.refresh_token,
                grant.refresh_token().as_bytes(),
            )
            .await
        {
            return Err(OperationError::StoreRejected {
                account: self.accounts.refresh_token.clone(),
            });
        }
        Ok(())
    }
}

/// Publishes the issued access and refresh tokens to the token cache.
///
/// Runs only after the wrapped operation succeeded. Cache writes cannot
/// fail, so this action never turns a successful chain into a failure.
pub struct CacheTokens {
    cache: Arc<TokenCache>,
}

impl CacheTokens {
    /// Uses the process-wide cache.
    #[must_use]
    pub fn new() -> Self {
        Self::with_cache(TokenCache::global())
    }

    /// Uses an explicit cache instance.
    #[must_use]
    pub fn with_cache(cache: Arc<TokenCache>) -> Self {
        Self { cache }
    }
}

impl Default for CacheTokens {
    fn default() -> Self {
        Self::new()
    }
}

impl<O> PostAction<O> for CacheTokens
where
    O: Operation + Sync,
    O::Output: TokenGrant + Sync,
{
    async fn run(&mut self, inner: &O) -> Result<(), OperationError> {
        let grant = inner
            .result()
            .expect("post-action runs only after wrapped success");
        self.cache
            .set_access_token(Some(grant.access_token().to_owned()));
        self.cache
            .set_refresh_token(Some(grant.refresh_token().to_owned()));
        Ok(())
    }
}

/// Persists the chain's username and password to the secure store.
///
/// Meant for the end of a sign-up chain, so the credentials survive for
/// the wake-up flow. Runs only after the wrapped operation succeeded.
pub struct StoreCredentials {
    store: Arc<SecureStore>,
    accounts: StoreAccounts,
}

impl StoreCredentials {
    /// Uses the process-wide store and the configured account names.
    ///
    /// # Panics
    ///
    /// Panics if [`SecureStore::configure`] has not been called yet.
    #[must_use]
    pub fn new(config: &AuthConfig) -> Self {
        Self::with_store(SecureStore::shared(), config.store_accounts().clone())
    }

    /// Uses an explicit store instance.
    #[must_use]
    pub fn with_store(store: Arc<SecureStore>, accounts: StoreAccounts) -> Self {
        Self { store, accounts }
    }
}

impl<O> PostAction<O> for StoreCredentials
where
    O: Operation + Sync,
{
    async fn run(&mut self, inner: &O) -> Result<(), OperationError> {
        if !self
            .store
            .save(&self.accounts.username, inner.user_name().as_bytes())
            .await
        {
            return Err(OperationError::StoreRejected {
                account: self.accounts.username.clone(),
            });
        }
        if !self
            .store
            .save(&self.accounts.password, inner.password().as_bytes())
            .await
        {
            return Err(OperationError::StoreRejected {
                account: self.accounts.password.clone(),
            });
        }
        Ok(())
    }
}

/// Wraps `inner` to persist issued tokens to the process-wide store.
///
/// # Panics
///
/// Panics if [`SecureStore::configure`] has not been called yet.
pub fn store_tokens<O>(inner: O, config: &AuthConfig) -> PostActionDecorator<O, StoreTokens>
where
    O: Operation + Sync,
    O::Output: TokenGrant + Sync,
{
    PostActionDecorator::new(inner, StoreTokens::new(config))
}

/// Wraps `inner` to persist issued tokens to an explicit store.
pub fn store_tokens_in<O>(
    inner: O,
    store: Arc<SecureStore>,
    accounts: StoreAccounts,
) -> PostActionDecorator<O, StoreTokens>
where
    O: Operation + Sync,
    O::Output: TokenGrant + Sync,
{
    PostActionDecorator::new(inner, StoreTokens::with_store(store, accounts))
}

/// Wraps `inner` to publish issued tokens to the process-wide cache.
pub fn cache_tokens<O>(inner: O) -> PostActionDecorator<O, CacheTokens>
where
    O: Operation + Sync,
    O::Output: TokenGrant + Sync,
{
    PostActionDecorator::new(inner, CacheTokens::new())
}

/// Wraps `inner` to publish issued tokens to an explicit cache.
pub fn cache_tokens_in<O>(
    inner: O,
    cache: Arc<TokenCache>,
) -> PostActionDecorator<O, CacheTokens>
where
    O: Operation + Sync,
    O::Output: TokenGrant + Sync,
{
    PostActionDecorator::new(inner, CacheTokens::with_cache(cache))
}

/// Wraps `inner` to persist its credentials to the process-wide store.
///
/// # Panics
///
/// Panics if [`SecureStore::configure`] has not been called yet.
pub fn store_credentials<O>(
    inner: O,
    config: &AuthConfig,
) -> PostActionDecorator<O, StoreCredentials>
where
    O: Operation + Sync,
{
    PostActionDecorator::new(inner, StoreCredentials::new(config))
}

/// Wraps `inner` to persist its credentials to an explicit store.
pub fn store_credentials_in<O>(
    inner: O,
    store: Arc<SecureStore>,
    accounts: StoreAccounts,
) -> PostActionDecorator<O, StoreCredentials>
where
    O: Operation + Sync,
{
    PostActionDecorator::new(inner, StoreCredentials::with_store(store, accounts))
}
