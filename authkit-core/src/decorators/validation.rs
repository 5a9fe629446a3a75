use tracing::debug;

use super::{Precondition, PreconditionDecorator};
use crate::error::OperationError;
use crate::operation::Operation;
use crate::policy::{EmailFormat, Policy};

/// Which credential a validation decorator reads from the wrapped chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialField {
    /// The username.
    Username,
    /// The password.
    Password,
    /// One auxiliary field by key.
    Extra(String),
}

/// Validates one credential field against an AND-list of policies.
///
/// Policies are checked in order and the first violation wins; later
/// failures are not aggregated.
pub struct FieldValidator {
    field: CredentialField,
    policies: Vec<Box<dyn Policy>>,
}

impl FieldValidator {
    /// Validates `field` against a single policy.
    #[must_use]
    pub fn new(field: CredentialField, policy: Box<dyn Policy>) -> Self {
        Self::all(field, vec![policy])
    }

    /// Validates `field` against every policy in order.
    #[must_use]
    pub fn all(field: CredentialField, policies: Vec<Box<dyn Policy>>) -> Self {
        Self { field, policies }
    }
}

impl<O: Operation> Precondition<O> for FieldValidator {
    fn check(&mut self, inner: &O) -> Result<(), OperationError> {
        let value = match &self.field {
            CredentialField::Username => inner.user_name(),
            CredentialField::Password => inner.password(),
            CredentialField::Extra(key) => inner.extra_user_info(key),
        };
        for policy in &self.policies {
            if let Err(violation) = policy.check(value) {
                debug!(field = ?self.field, %violation, "validation rejected input");
                return Err(OperationError::InvalidInput(violation));
            }
        }
        Ok(())
    }
}

/// A validation decorator around `O`.
pub type ValidationDecorator<O> = PreconditionDecorator<O, FieldValidator>;

/// Wraps `inner` so the username must look like an email address before
/// any network call is made.
pub fn validate_email<O: Operation>(inner: O) -> ValidationDecorator<O> {
    PreconditionDecorator::new(
        inner,
        FieldValidator::new(CredentialField::Username, Box::new(EmailFormat)),
    )
}

/// Wraps `inner` so the password must satisfy every given policy before
/// any network call is made.
pub fn validate_password<O: Operation>(
    inner: O,
    policies: Vec<Box<dyn Policy>>,
) -> ValidationDecorator<O> {
    PreconditionDecorator::new(
        inner,
        FieldValidator::all(CredentialField::Password, policies),
    )
}

/// Wraps `inner` so the auxiliary field `key` must satisfy `policy`
/// before any network call is made.
pub fn validate_extra_field<O: Operation>(
    inner: O,
    key: impl Into<String>,
    policy: Box<dyn Policy>,
) -> ValidationDecorator<O> {
    PreconditionDecorator::new(
        inner,
        FieldValidator::new(CredentialField::Extra(key.into()), policy),
    )
}
