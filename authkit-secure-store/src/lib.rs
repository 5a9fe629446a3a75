//! Durable secret persistence for AuthKit.
//!
//! Small secrets (tokens, username, password) are written through a
//! [`SecureStore`], which serializes every operation and delegates the
//! actual persistence to a [`VaultBackend`]. The backend is the boundary
//! to the platform: [`MemoryVault`] keeps everything in process memory
//! (tests, headless hosts), and the `os-vault` feature adds a backend over
//! the operating system credential store.
//!
//! The store is usually configured once per process and reached through
//! [`SecureStore::shared`]; standalone instances can be created with
//! [`SecureStore::new`] where process-global state is unwanted.

mod backend;
mod store;

#[cfg(feature = "os-vault")]
mod os;

pub use backend::{MemoryVault, VaultBackend};
pub use store::SecureStore;

#[cfg(feature = "os-vault")]
pub use os::OsVault;
