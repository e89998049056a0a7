//! Session credential representation and expiry logic.

use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// A bearer credential with its expiry instant (unix seconds).
///
/// Immutable once issued; renewal replaces the whole value rather than
/// mutating it in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub value: String,
    pub expires_at: u64,
}

impl Credential {
    /// Creates a credential expiring at the given unix timestamp.
    pub fn new(value: impl Into<String>, expires_at: u64) -> Self {
        Self {
            value: value.into(),
            expires_at,
        }
    }

    /// Creates a credential expiring `ttl_secs` seconds from now.
    pub fn expiring_in(value: impl Into<String>, ttl_secs: u64) -> Self {
        Self::new(value, now_unix() + ttl_secs)
    }

    /// Returns `true` if the remaining lifetime exceeds `margin`.
    ///
    /// A credential inside the margin is treated as stale so that renewal
    /// happens before an outbound call can race the real expiry.
    #[must_use]
    pub fn is_fresh(&self, margin: Duration) -> bool {
        now_unix() + margin.as_secs() < self.expires_at
    }
}

/// Current unix time in whole seconds.
#[must_use]
pub fn now_unix() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_secs()
}
