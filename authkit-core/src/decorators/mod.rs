//! Decorator combinators: wrap an operation to add one concern without
//! touching the wrapped node.
//!
//! Two kinds exist, and the ordering contract is carried by the types
//! rather than by convention:
//!
//! - [`PreconditionDecorator`] runs its concern *first* and only
//!   delegates when it passes. Validation lives here; a rejected input
//!   never reaches the network.
//! - [`PostActionDecorator`] delegates *first* and runs its concern only
//!   after the wrapped operation succeeded. Persistence lives here; a
//!   failed call never leaves partial writes behind.
//!
//! Both kinds forward credential reads and results unchanged, and both
//! surface their own error before consulting the wrapped chain, so the
//! outermost node is the only one a caller needs to inspect.

use std::future::Future;

use crate::error::OperationError;
use crate::operation::Operation;

mod persistence;
mod validation;

pub use persistence::{
    cache_tokens, cache_tokens_in, store_credentials, store_credentials_in,
    store_tokens, store_tokens_in, CacheTokens, StoreCredentials, StoreTokens,
};
pub use validation::{
    validate_email, validate_extra_field, validate_password, CredentialField,
    FieldValidator, ValidationDecorator,
};

/// A concern that runs before the wrapped operation.
pub trait Precondition<O: Operation>: Send {
    /// Judges the wrapped operation's current input.
    ///
    /// # Errors
    ///
    /// Returns the error to surface; the wrapped operation will not run.
    fn check(&mut self, inner: &O) -> Result<(), OperationError>;
}

/// A concern that runs only after the wrapped operation succeeded.
pub trait PostAction<O: Operation>: Send {
    /// Performs the follow-up side effect.
    ///
    /// Only invoked after `inner` executed successfully, so the wrapped
    /// result is available.
    ///
    /// # Errors
    ///
    /// Returns the error to surface. The wrapped result is not rolled
    /// back; it stays readable through the chain.
    fn run(
        &mut self,
        inner: &O,
    ) -> impl Future<Output = Result<(), OperationError>> + Send;
}

/// Wraps an operation with a concern that must pass before delegation.
///
/// If the concern rejects, the wrapped operation is never invoked: no
/// network call, no side effects.
pub struct PreconditionDecorator<O, C> {
    inner: O,
    precondition: C,
    error: Option<OperationError>,
}

impl<O, C> PreconditionDecorator<O, C>
where
    O: Operation,
    C: Precondition<O>,
{
    /// Wraps `inner` behind `precondition`.
    #[must_use]
    pub fn new(inner: O, precondition: C) -> Self {
        Self {
            inner,
            precondition,
            error: None,
        }
    }

    /// The wrapped operation.
    #[must_use]
    pub fn inner(&self) -> &O {
        &self.inner
    }
}

impl<O, C> Operation for PreconditionDecorator<O, C>
where
    O: Operation,
    C: Precondition<O>,
{
    type Output = O::Output;

    fn execute(&mut self) -> impl Future<Output = bool> + Send {
        async move {
            self.error = None;
            if let Err(err) = self.precondition.check(&self.inner) {
                self.error = Some(err);
                return false;
            }
            self.inner.execute().await
        }
    }

    fn user_name(&self) -> &str {
        self.inner.user_name()
    }

    fn password(&self) -> &str {
        self.inner.password()
    }

    fn extra_user_info(&self, key: &str) -> &str {
        self.inner.extra_user_info(key)
    }

    fn result(&self) -> Option<&Self::Output> {
        self.inner.result()
    }

    fn error(&self) -> Option<&OperationError> {
        self.error.as_ref().or_else(|| self.inner.error())
    }
}

/// Wraps an operation with a follow-up that runs after success.
///
/// The overall outcome is the conjunction: a failed wrapped call skips
/// the follow-up entirely, and a failed follow-up turns the chain's
/// outcome into a failure while the wrapped result stays readable.
pub struct PostActionDecorator<O, A> {
    inner: O,
    action: A,
    error: Option<OperationError>,
}

impl<O, A> PostActionDecorator<O, A>
where
    O: Operation,
    A: PostAction<O>,
{
    /// Wraps `inner` with the follow-up `action`.
    #[must_use]
    pub fn new(inner: O, action: A) -> Self {
        Self {
            inner,
            action,
            error: None,
        }
    }

    /// The wrapped operation.
    #[must_use]
    pub fn inner(&self) -> &O {
        &self.inner
    }
}

impl<O, A> Operation for PostActionDecorator<O, A>
where
    O: Operation + Sync,
    A: PostAction<O>,
{
    type Output = O::Output;

    fn execute(&mut self) -> impl Future<Output = bool> + Send {
        async move {
            self.error = None;
            if !self.inner.execute().await {
                return false;
            }
            match self.action.run(&self.inner).await {
                Ok(()) => true,
                Err(err) => {
                    self.error = Some(err);
                    false
                }
            }
        }
    }

    fn user_name(&self) -> &str {
        self.inner.user_name()
    }

    fn password(&self) -> &str {
        self.inner.password()
    }

    fn extra_user_info(&self, key: &str) -> &str {
        self.inner.extra_user_info(key)
    }

    fn result(&self) -> Option<&Self::Output> {
        self.inner.result()
    }

    fn error(&self) -> Option<&OperationError> {
        self.error.as_ref().or_else(|| self.inner.error())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::policy::PolicyViolation;
    use crate::test_support::StubOperation;

    struct Pass;

    impl<O: Operation> Precondition<O> for Pass {
        fn check(&mut self, _inner: &O) -> Result<(), OperationError> {
            Ok(())
        }
    }

    struct Reject;

    impl<O: Operation> Precondition<O> for Reject {
        fn check(&mut self, _inner: &O) -> Result<(), OperationError> {
            Err(OperationError::InvalidInput(PolicyViolation::Empty))
        }
    }

    struct CountingAction {
        runs: Arc<AtomicUsize>,
    }

    impl<O: Operation + Sync> PostAction<O> for CountingAction {
        async fn run(&mut self, _inner: &O) -> Result<(), OperationError> {
            self.runs.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct FailingAction;

    impl<O: Operation + Sync> PostAction<O> for FailingAction {
        async fn run(&mut self, _inner: &O) -> Result<(), OperationError> {
            Err(OperationError::StoreRejected {
                account: "access-token".to_owned(),
            })
        }
    }

    #[tokio::test]
    async fn rejected_precondition_never_invokes_the_wrapped_operation() {
        let stub = StubOperation::succeeding("a@b.com", "Abc12345", 7u32);
        let executions = stub.executions();
        let mut chain = PreconditionDecorator::new(stub, Reject);

        assert!(!chain.execute().await);
        assert_eq!(executions.load(Ordering::SeqCst), 0);
        assert_eq!(
            chain.error(),
            Some(&OperationError::InvalidInput(PolicyViolation::Empty))
        );
        assert!(chain.result().is_none());
    }

    #[tokio::test]
    async fn passing_precondition_delegates() {
        let stub = StubOperation::succeeding("a@b.com", "Abc12345", 7u32);
        let executions = stub.executions();
        let mut chain = PreconditionDecorator::new(stub, Pass);

        assert!(chain.execute().await);
        assert_eq!(executions.load(Ordering::SeqCst), 1);
        assert_eq!(chain.result(), Some(&7));
        assert!(chain.error().is_none());
    }

    #[tokio::test]
    async fn precondition_decorator_surfaces_the_inner_error() {
        let stub = StubOperation::<u32>::failing(
            "a@b.com",
            "Abc12345",
            OperationError::NetworkStatus(503),
        );
        let mut chain = PreconditionDecorator::new(stub, Pass);

        assert!(!chain.execute().await);
        assert_eq!(chain.error(), Some(&OperationError::NetworkStatus(503)));
    }

    #[tokio::test]
    async fn post_action_is_skipped_when_the_wrapped_operation_fails() {
        let stub = StubOperation::<u32>::failing(
            "a@b.com",
            "Abc12345",
            OperationError::NetworkUnreachable,
        );
        let runs = Arc::new(AtomicUsize::new(0));
        let mut chain = PostActionDecorator::new(
            stub,
            CountingAction {
                runs: Arc::clone(&runs),
            },
        );

        assert!(!chain.execute().await);
        assert_eq!(runs.load(Ordering::SeqCst), 0);
        assert_eq!(chain.error(), Some(&OperationError::NetworkUnreachable));
    }

    #[tokio::test]
    async fn post_action_runs_after_success() {
        let stub = StubOperation::succeeding("a@b.com", "Abc12345", 7u32);
        let runs = Arc::new(AtomicUsize::new(0));
        let mut chain = PostActionDecorator::new(
            stub,
            CountingAction {
                runs: Arc::clone(&runs),
            },
        );

        assert!(chain.execute().await);
        assert_eq!(runs.load(Ordering::SeqCst), 1);
        assert_eq!(chain.result(), Some(&7));
    }

    #[tokio::test]
    async fn failed_post_action_fails_the_chain_but_keeps_the_result() {
        let stub = StubOperation::succeeding("a@b.com", "Abc12345", 7u32);
        let mut chain = PostActionDecorator::new(stub, FailingAction);

        assert!(!chain.execute().await);
        assert_eq!(
            chain.error(),
            Some(&OperationError::StoreRejected {
                account: "access-token".to_owned()
            })
        );
        // The wrapped network result is not rolled back.
        assert_eq!(chain.result(), Some(&7));
    }

    #[tokio::test]
    async fn credential_reads_pass_through_both_kinds() {
        let stub = StubOperation::succeeding("a@b.com", "Abc12345", 7u32)
            .with_extra("first_name", "Ada");
        let runs = Arc::new(AtomicUsize::new(0));
        let chain = PostActionDecorator::new(
            PreconditionDecorator::new(stub, Pass),
            CountingAction { runs },
        );

        assert_eq!(chain.user_name(), "a@b.com");
        assert_eq!(chain.password(), "Abc12345");
        assert_eq!(chain.extra_user_info("first_name"), "Ada");
        assert_eq!(chain.extra_user_info("missing"), "");
    }

    #[tokio::test]
    async fn result_and_error_reads_are_idempotent() {
        let stub = StubOperation::succeeding("a@b.com", "Abc12345", 7u32);
        let mut chain = PreconditionDecorator::new(stub, Pass);
        assert!(chain.execute().await);

        assert_eq!(chain.result(), chain.result());
        assert_eq!(chain.error(), chain.error());
        assert_eq!(chain.result(), Some(&7));
    }
}
