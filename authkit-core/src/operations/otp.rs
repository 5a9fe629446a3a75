use std::collections::HashMap;
use std::future::Future;

use serde::de::DeserializeOwned;

use super::{AuthRequester, EndpointKind};
use crate::config::AuthConfig;
use crate::credentials::Credentials;
use crate::error::OperationError;
use crate::operation::Operation;

/// Terminal OTP verification operation.
///
/// Posts `{username, password, otp}` to the OTP endpoint. The response
/// shape is provider-defined, so the payload type is left to the caller.
/// A 400 means the code was rejected and maps to
/// [`OperationError::InvalidOtp`].
pub struct OtpOperation<T> {
    credentials: Credentials,
    otp: String,
    requester: AuthRequester<T>,
}

impl<T: DeserializeOwned + Send> OtpOperation<T> {
    /// Binds the credentials and the submitted code to the configured
    /// OTP endpoint.
    #[must_use]
    pub fn new(
        credentials: Credentials,
        otp: impl Into<String>,
        config: &AuthConfig,
    ) -> Self {
        Self {
            credentials,
            otp: otp.into(),
            requester: AuthRequester::new(config.otp_url(), EndpointKind::Otp),
        }
    }

    /// Replaces the code and clears any previous outcome, readying the
    /// operation for a fresh attempt with the same credentials.
    pub fn set_otp(&mut self, otp: impl Into<String>) {
        self.otp = otp.into();
        self.requester.reset();
    }

    /// The code that will be submitted.
    #[must_use]
    pub fn otp(&self) -> &str {
        &self.otp
    }

    fn request_body(&self) -> HashMap<String, String> {
        let mut body = HashMap::with_capacity(3);
        body.insert("username".to_owned(), self.credentials.username().to_owned());
        body.insert("password".to_owned(), self.credentials.password().to_owned());
        body.insert("otp".to_owned(), self.otp.clone());
        body
    }
}

impl<T> Operation for OtpOperation<T>
where
    T: DeserializeOwned + Send + Sync,
{
    type Output = T;

    fn execute(&mut self) -> impl Future<Output = bool> + Send {
        async move {
            let body = self.request_body();
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
