//! Scripted operations for exercising decorator behavior without a
//! network.

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::credentials::Credentials;
use crate::error::OperationError;
use crate::operation::Operation;

/// A terminal operation with a scripted outcome and an execution counter.
pub(crate) struct StubOperation<T> {
    credentials: Credentials,
    script: Result<T, OperationError>,
    executions: Arc<AtomicUsize>,
    result: Option<T>,
    error: Option<OperationError>,
}

impl<T> StubOperation<T> {
    pub(crate) fn succeeding(username: &str, password: &str, payload: T) -> Self {
        Self {
            credentials: Credentials::new(username, password),
            script: Ok(payload),
            executions: Arc::new(AtomicUsize::new(0)),
            result: None,
            error: None,
        }
    }

    pub(crate) fn failing(
        username: &str,
        password: &str,
        error: OperationError,
    ) -> Self {
        Self {
            credentials: Credentials::new(username, password),
            script: Err(error),
            executions: Arc::new(AtomicUsize::new(0)),
            result: None,
            error: None,
        }
    }

    pub(crate) fn with_extra(mut self, key: &str, value: &str) -> Self {
        self.credentials = self.credentials.with_extra(key, value);
        self
    }

    /// Handle to the execution counter; keep a clone before moving the
    /// stub into a chain.
    pub(crate) fn executions(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.executions)
    }
}

impl<T> Operation for StubOperation<T>
where
    T: Clone + Send + Sync,
{
    type Output = T;

    fn execute(&mut self) -> impl Future<Output = bool> + Send {
        async move {
            self.executions.fetch_add(1, Ordering::SeqCst);
            match &self.script {
                Ok(payload) => {
                    self.result = Some(payload.clone());
                    self.error = None;
                    true
                }
                Err(error) => {
                    self.error = Some(error.clone());
                    self.result = None;
                    false
                }
            }
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
        self.result.as_ref()
    }

    fn error(&self) -> Option<&OperationError> {
        self.error.as_ref()
    }
}
