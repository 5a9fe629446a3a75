use thiserror::Error;

use crate::policy::PolicyViolation;

/// Failure modes an operation can surface after `execute()`.
///
/// Every expected failure ends up here; nothing in a chain panics for bad
/// input, unreachable hosts or server rejections. Host applications branch
/// on the variant, e.g. to show "email already registered" for
/// [`OperationError::DuplicateAccount`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperationError {
    /// A validation decorator rejected the input. Detected entirely
    /// client-side; the network is never touched.
    #[error("invalid_input: {0}")]
    InvalidInput(PolicyViolation),
    /// The host could not be reached, the URL is malformed, or the
    /// request was aborted before a response arrived.
    #[error("network_unreachable")]
    NetworkUnreachable,
    /// The server answered with a non-success status that has no
    /// flow-specific meaning.
    #[error("network_status: {0}")]
    NetworkStatus(u16),
    /// The response body did not decode into the expected payload type.
    #[error("decode_failure")]
    DecodeFailure,
    /// The sign-up endpoint reported the account as already registered.
    #[error("duplicate_account")]
    DuplicateAccount,
    /// The OTP endpoint rejected the submitted code.
    #[error("invalid_otp")]
    InvalidOtp,
    /// The refresh endpoint rejected the presented refresh token.
    #[error("refresh_rejected")]
    RefreshRejected,
    /// A persistence decorator failed to write `account` to the secure
    /// store. The wrapped operation's result stays readable so callers
    /// can retry persistence alone.
    #[error("store_rejected: {account}")]
    StoreRejected {
        /// Logical account name the write was addressed to.
        account: String,
    },
}
