use std::future::Future;

use super::{AuthRequester, EndpointKind};
use crate::config::AuthConfig;
use crate::credentials::Credentials;
use crate::error::OperationError;
use crate::operation::Operation;
use crate::token::TokenResponse;

/// Terminal login operation.
///
/// Posts the credentials to the login endpoint and decodes the issued
/// [`TokenResponse`]. The login endpoint has no flow-specific 400
/// mapping; a rejection surfaces as [`OperationError::NetworkStatus`].
pub struct LogInOperation {
    credentials: Credentials,
    requester: AuthRequester<TokenResponse>,
}

impl LogInOperation {
    /// Binds the credentials to the configured login endpoint.
    #[must_use]
    pub fn new(credentials: Credentials, config: &AuthConfig) -> Self {
        Self {
            credentials,
            requester: AuthRequester::new(config.log_in_url(), EndpointKind::LogIn),
        }
    }
}

impl Operation for LogInOperation {
    type Output = TokenResponse;

    fn execute(&mut self) -> impl Future<Output = bool> + Send {
        async move {
            let body = self.credentials.request_body();
            self.requester.post(&body).await
        }
    }

    fn user_name(&self) -> &str {
        self.credentials.username()
    }

    fn password(&self) -> &str {
        self.credentials.password()
    }

    fn extra_user_info(&self, key: &str) -> &str {
        self.credentials.extra(key)
    }

    fn result(&self) -> Option<&TokenResponse> {
        self.requester.result()
    }

    fn error(&self) -> Option<&OperationError> {
        self.requester.error()
    }
}
