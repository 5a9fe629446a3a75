use std::future::Future;

use crate::error::OperationError;

/// One executable, composable unit of authentication work.
///
/// An operation either is a terminal network call (see
/// [`operations`](crate::operations)) or wraps another operation to add a
/// concern (see [`decorators`](crate::decorators)). Chains are built
/// bottom-up, executed once through the outermost node and discarded; a
/// fresh chain is constructed per logical attempt.
///
/// After `execute()` resolves, exactly one of the following holds:
/// it returned `true` and [`result`](Operation::result) is set, or it
/// returned `false` and [`error`](Operation::error) is set. Expected
/// failures never panic; they are captured as [`OperationError`].
pub trait Operation: Send {
    /// Decoded success payload. Decorators forward it unchanged, so every
    /// node in one chain agrees on the same type.
    type Output;

    /// Performs the unit of work, reporting overall success.
    fn execute(&mut self) -> impl Future<Output = bool> + Send;

    /// The username this chain was constructed with. Decorators delegate
    /// to the wrapped operation; flows without credentials answer `""`.
    fn user_name(&self) -> &str;

    /// The password this chain was constructed with; `""` for flows
    /// without credentials.
    fn password(&self) -> &str;

    /// The auxiliary field for `key`; `""` when the key was never set.
    fn extra_user_info(&self, key: &str) -> &str;

    /// The payload of the last successful execution, `None` before one.
    /// Reading repeatedly returns the same value without side effects.
    fn result(&self) -> Option<&Self::Output>;

    /// The captured error of the last failed execution, `None` when the
    /// operation succeeded or never ran.
    fn error(&self) -> Option<&OperationError>;
}
