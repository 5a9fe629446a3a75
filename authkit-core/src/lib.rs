//! # AuthKit Core
//!
//! Client-side authentication flows assembled from small composable
//! operations: sign-up, login, OTP verification and token refresh.
//!
//! The unit of work is an [`Operation`]: it executes once, and afterwards
//! exposes either a typed result or a typed [`OperationError`]. Terminal
//! operations perform one network exchange; decorators wrap another
//! operation to add one concern. Validation decorators run *before* the
//! wrapped node and stop the chain locally on bad input, so the network
//! is never touched. Persistence decorators run *after* a successful call
//! and publish the issued tokens to the in-memory [`TokenCache`] and the
//! durable secure store.
//!
//! ```rust,ignore
//! use authkit_core::{flows, AuthConfig, Credentials, Endpoints, Operation};
//!
//! let config = AuthConfig::new("demo", "https://auth.example.com", Endpoints {
//!     sign_up: "/signup".into(),
//!     log_in: "/login".into(),
//!     otp: "/verify-otp".into(),
//!     refresh: "/refresh".into(),
//! });
//!
//! let mut chain = flows::sign_up(Credentials::new("a@b.com", "Abc12345"), &config);
//! if chain.execute().await {
//!     println!("signed up: {:?}", chain.result());
//! } else {
//!     eprintln!("rejected: {:?}", chain.error());
//! }
//! ```

pub mod bootstrap;
pub mod decorators;
pub mod flows;
pub mod operations;
pub mod policy;

mod config;
mod credentials;
mod error;
mod operation;
mod token;
mod token_cache;
mod transport;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{AuthConfig, Endpoints, StoreAccounts};
pub use credentials::Credentials;
pub use error::OperationError;
pub use operation::Operation;
pub use token::{TokenGrant, TokenPair, TokenResponse};
pub use token_cache::TokenCache;
pub use transport::{HttpTransport, TransportError};

// The durable store is part of the public surface: hosts pick a backend
// at configure time.
pub use authkit_secure_store::{MemoryVault, SecureStore, VaultBackend};
