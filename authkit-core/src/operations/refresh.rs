use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use super::{AuthRequester, EndpointKind};
use crate::config::AuthConfig;
use crate::error::OperationError;
use crate::operation::Operation;
use crate::policy::PolicyViolation;
use crate::token::TokenResponse;
use crate::token_cache::TokenCache;

/// Terminal token refresh operation.
///
/// Posts `{refresh_token}` to the refresh endpoint. The token comes from
/// [`RefreshOperation::with_token`] when given, otherwise from the token
/// cache; with neither available the operation fails locally with
/// [`OperationError::InvalidInput`] before any network cost.
///
/// A 400 means the server rejected the presented token and maps to
/// [`OperationError::RefreshRejected`]. This flow carries no credentials:
/// username and password read back as `""`.
pub struct RefreshOperation {
    cache: Arc<TokenCache>,
    explicit_token: Option<String>,
    requester: AuthRequester<TokenResponse>,
}

impl RefreshOperation {
    /// Binds the process-wide token cache to the configured refresh
    /// endpoint.
    #[must_use]
    pub fn new(config: &AuthConfig) -> Self {
        Self::with_cache(config, TokenCache::global())
    }

    /// Same as [`RefreshOperation::new`] with an explicit cache.
    #[must_use]
    pub fn with_cache(config: &AuthConfig, cache: Arc<TokenCache>) -> Self {
        Self {
            cache,
            explicit_token: None,
            requester: AuthRequester::new(config.refresh_url(), EndpointKind::Refresh),
        }
    }

    /// Presents `token` instead of the cached refresh token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.explicit_token = Some(token.into());
        self
    }
}

impl Operation for RefreshOperation {
    type Output = TokenResponse;

    fn execute(&mut self) -> impl Future<Output = bool> + Send {
        async move {
            let token = self
                .explicit_token
                .clone()
                .or_else(|| self.cache.refresh_token());
            let Some(token) = token else {
                // No session to refresh; a local failure, same as any
                // other empty input caught before the network.
                return self
                    .requester
                    .fail(OperationError::InvalidInput(PolicyViolation::Empty));
            };
            let mut body = HashMap::with_capacity(1);
            body.insert("refresh_token".to_owned(), token);
            self.requester.post(&body).await
        }
    }

    fn user_name(&self) -> &str {
        ""
    }

    fn password(&self) -> &str {
        ""
    }

    fn extra_user_info(&self, _key: &str) -> &str {
        ""
    }

    fn result(&self) -> Option<&TokenResponse> {
        self.requester.result()
    }

    fn error(&self) -> Option<&OperationError> {
        self.requester.error()
    }
}
