//! Single-input validation predicates.
//!
//! A [`Policy`] judges one string and reports a typed reason on rejection.
//! Validation decorators take policies by `Box<dyn Policy>`, so hosts can
//! plug their own rule engines in; the stock policies below cover the
//! common credential rules.

use regex::Regex;
use thiserror::Error;

const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

/// Typed reason a policy rejected its input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyViolation {
    /// The value does not look like an email address.
    #[error("not_an_email")]
    NotAnEmail,
    /// The value is shorter than `min` characters.
    #[error("too_short: expected at least {min} characters")]
    TooShort {
        /// Minimum accepted length, in characters.
        min: usize,
    },
    /// The value contains no ASCII digit.
    #[error("missing_digit")]
    MissingDigit,
    /// The value contains no uppercase letter.
    #[error("missing_uppercase")]
    MissingUppercase,
    /// The value is empty or whitespace only.
    #[error("empty_value")]
    Empty,
}

/// A stateless predicate over a single input string.
pub trait Policy: Send + Sync {
    /// Checks `input`, reporting the first reason it fails.
    ///
    /// # Errors
    ///
    /// Returns the typed [`PolicyViolation`] when the input is rejected.
    fn check(&self, input: &str) -> Result<(), PolicyViolation>;
}

/// Accepts values shaped like an email address.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmailFormat;

impl Policy for EmailFormat {
    fn check(&self, input: &str) -> Result<(), PolicyViolation> {
        let is_email =
            Regex::new(EMAIL_PATTERN).map_or(false, |re| re.is_match(input));
        if is_email {
            Ok(())
        } else {
            Err(PolicyViolation::NotAnEmail)
        }
    }
}

/// Accepts values of at least `min` characters.
#[derive(Debug, Clone, Copy)]
pub struct MinLength {
    /// Minimum accepted length, in characters.
    pub min: usize,
}

impl Policy for MinLength {
    fn check(&self, input: &str) -> Result<(), PolicyViolation> {
        if input.chars().count() >= self.min {
            Ok(())
        } else {
            Err(PolicyViolation::TooShort { min: self.min })
        }
    }
}

/// Accepts values containing at least one ASCII digit.
#[derive(Debug, Default, Clone, Copy)]
pub struct HasDigit;

impl Policy for HasDigit {
    fn check(&self, input: &str) -> Result<(), PolicyViolation> {
        if input.chars().any(|c| c.is_ascii_digit()) {
            Ok(())
        } else {
            Err(PolicyViolation::MissingDigit)
        }
    }
}

/// Accepts values containing at least one uppercase letter.
#[derive(Debug, Default, Clone, Copy)]
pub struct HasUppercase;

impl Policy for HasUppercase {
    fn check(&self, input: &str) -> Result<(), PolicyViolation> {
        if input.chars().any(char::is_uppercase) {
            Ok(())
        } else {
            Err(PolicyViolation::MissingUppercase)
        }
    }
}

/// Rejects empty or whitespace-only values.
#[derive(Debug, Default, Clone, Copy)]
pub struct NotBlank;

impl Policy for NotBlank {
    fn check(&self, input: &str) -> Result<(), PolicyViolation> {
        if input.trim().is_empty() {
            Err(PolicyViolation::Empty)
        } else {
            Ok(())
        }
    }
}

/// The default password rule set: at least eight characters, one digit and
/// one uppercase letter.
#[must_use]
pub fn default_password_policies() -> Vec<Box<dyn Policy>> {
    vec![
        Box::new(MinLength { min: 8 }),
        Box::new(HasDigit),
        Box::new(HasUppercase),
    ]
}
