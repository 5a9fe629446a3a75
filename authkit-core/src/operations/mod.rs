//! Terminal operations: the nodes at the bottom of a chain, each bound to
//! exactly one endpoint and one response shape.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::OperationError;
use crate::transport::{HttpTransport, TransportError};

mod login;
mod otp;
mod refresh;
mod signup;

pub use login::LogInOperation;
pub use otp::OtpOperation;
pub use refresh::RefreshOperation;
pub use signup::SignUpOperation;

/// Which flow a requester serves; selects the per-endpoint mapping of
/// transport failures onto [`OperationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EndpointKind {
    SignUp,
    LogIn,
    Otp,
    Refresh,
}

impl EndpointKind {
    fn map(self, err: &TransportError) -> OperationError {
        match err {
            TransportError::Unreachable(_) => OperationError::NetworkUnreachable,
            TransportError::Decode(_) => OperationError::DecodeFailure,
            TransportError::Status(400) => match self {
                Self::SignUp => OperationError::DuplicateAccount,
                Self::Otp => OperationError::InvalidOtp,
                Self::Refresh => OperationError::RefreshRejected,
                Self::LogIn => OperationError::NetworkStatus(400),
            },
            TransportError::Status(code) => OperationError::NetworkStatus(*code),
        }
    }
}

/// Shared engine behind every terminal operation: posts one JSON object
/// body, decodes `T` and captures the mapped outcome.
pub(crate) struct AuthRequester<T> {
    transport: HttpTransport,
    url: String,
    endpoint: EndpointKind,
    result: Option<T>,
    error: Option<OperationError>,
}

impl<T: DeserializeOwned + Send> AuthRequester<T> {
    pub(crate) fn new(url: String, endpoint: EndpointKind) -> Self {
        Self {
            transport: HttpTransport::new(),
            url,
            endpoint,
            result: None,
            error: None,
        }
    }

    pub(crate) async fn post(&mut self, body: &HashMap<String, String>) -> bool {
        self.reset();
        match self.transport.post_json::<T, _>(&self.url, body).await {
            Ok(payload) => {
                debug!(url = %self.url, "auth request succeeded");
                self.result = Some(payload);
                true
            }
            Err(err) => {
                self.error = Some(self.endpoint.map(&err));
                false
            }
        }
    }

    /// Records a failure detected before any exchange took place.
    pub(crate) fn fail(&mut self, error: OperationError) -> bool {
        self.reset();
        self.error = Some(error);
        false
    }

    pub(crate) fn reset(&mut self) {
        self.result = None;
        self.error = None;
    }

    pub(crate) fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    pub(crate) fn error(&self) -> Option<&OperationError> {
        self.error.as_ref()
    }
}
