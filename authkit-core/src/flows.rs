//! Prebuilt chains for the common flows.
//!
//! Each helper assembles the canonical pipeline bottom-up and returns the
//! outermost node; callers `execute()` it and inspect `result()` /
//! `error()` there. Chains are built fresh per attempt and discarded
//! afterwards.

use std::sync::Arc;

use authkit_secure_store::SecureStore;

use crate::config::AuthConfig;
use crate::credentials::Credentials;
use crate::decorators::{
    cache_tokens_in, store_tokens_in, validate_email, validate_password,
};
use crate::operation::Operation;
use crate::operations::{LogInOperation, SignUpOperation};
use crate::policy::{default_password_policies, Policy};
use crate::token::TokenResponse;
use crate::token_cache::TokenCache;

/// Sign-up pipeline: email format and the default password rules checked
/// locally, then the network leaf.
pub fn sign_up(
    credentials: Credentials,
    config: &AuthConfig,
) -> impl Operation<Output = TokenResponse> {
    sign_up_with_policies(credentials, config, default_password_policies())
}

/// Sign-up pipeline with caller-chosen password policies.
pub fn sign_up_with_policies(
    credentials: Credentials,
    config: &AuthConfig,
    password_policies: Vec<Box<dyn Policy>>,
) -> impl Operation<Output = TokenResponse> {
    let leaf = SignUpOperation::new(credentials, config);
    validate_email(validate_password(leaf, password_policies))
}

/// Login pipeline: the network leaf, durable token persistence, then the
/// cache publish, using the process-wide store and cache.
///
/// # Panics
///
/// Panics if [`SecureStore::configure`] has not been called yet.
pub fn log_in(
    credentials: Credentials,
    config: &AuthConfig,
) -> impl Operation<Output = TokenResponse> {
    log_in_with(
        credentials,
        config,
        SecureStore::shared(),
        TokenCache::global(),
    )
}

/// Login pipeline against explicit store and cache instances.
pub fn log_in_with(
    credentials: Credentials,
    config: &AuthConfig,
    store: Arc<SecureStore>,
    cache: Arc<TokenCache>,
) -> impl Operation<Output = TokenResponse> {
    let leaf = LogInOperation::new(credentials, config);
    let saved = store_tokens_in(leaf, store, config.store_accounts().clone());
    cache_tokens_in(saved, cache)
}
