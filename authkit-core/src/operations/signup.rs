use std::future::Future;

use serde::de::DeserializeOwned;

use super::{AuthRequester, EndpointKind};
use crate::config::AuthConfig;
use crate::credentials::Credentials;
use crate::error::OperationError;
use crate::operation::Operation;
use crate::token::TokenResponse;

/// Terminal sign-up operation.
///
/// Posts the credentials (with extra fields merged in) to the sign-up
/// endpoint. Deployments whose sign-up response is not token-shaped pick
/// their own payload type for `T`.
///
/// A 400 from this endpoint means the account already exists and maps to
/// [`OperationError::DuplicateAccount`].
pub struct SignUpOperation<T = TokenResponse> {
    credentials: Credentials,
    requester: AuthRequester<T>,
}

impl<T: DeserializeOwned + Send> SignUpOperation<T> {
    /// Binds the credentials to the configured sign-up endpoint.
    #[must_use]
    pub fn new(credentials: Credentials, config: &AuthConfig) -> Self {
        Self {
            credentials,
            requester: AuthRequester::new(config.sign_up_url(), EndpointKind::SignUp),
        }
    }
}

impl<T> Operation for SignUpOperation<T>
where
    T: DeserializeOwned + Send + Sync,
{
    type Output = T;

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

    fn result(&self) -> Option<&T> {
        self.requester.result()
    }

    fn error(&self) -> Option<&OperationError> {
        self.requester.error()
    }
}
