//! Traits shared across the veriwork crates.
//!
//! Every cross-crate abstraction is defined here so that higher layers depend
//! only on `veriwork-types`, not on each other.

use crate::{Credential, error::Result};
use async_trait::async_trait;

/// Holds the current session credential.
///
/// Purely in-memory state: no network or blocking behavior. `set` replaces
/// the credential wholesale (readers never observe a half-updated value) and
/// `clear` empties the slot so subsequent guards fail fast instead of
/// retrying forever.
pub trait TokenStore: Send + Sync {
    /// The currently held credential, if any.
    fn current(&self) -> Option<Credential>;
    /// Replaces the held credential.
    fn set(&self, credential: Credential);
    /// Drops the held credential.
    fn clear(&self);
}

/// Renews the session credential against the external auth backend.
///
/// The wire contract behind this seam is the backend's business; the core
/// only requires a fresh [`Credential`] or a failure.
#[async_trait]
pub trait TokenRenewer: Send + Sync {
    /// Obtain a fresh credential.
    async fn renew(&self) -> Result<Credential>;
}
