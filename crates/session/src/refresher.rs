//! Credential renewal with a single-flight guarantee.
//!
//! Responsibilities:
//! - Serve a stored credential whose remaining lifetime exceeds the margin.
//! - Detect expiry and trigger renewal through the [`TokenRenewer`].
//! - Coalesce concurrent renewals: N stale callers produce one backend call,
//!   and every caller observes the same credential or the same failure.

use futures_util::FutureExt as _;
use futures_util::future::{BoxFuture, Shared};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use veriwork_types::{
    Credential, DEFAULT_SESSION_EXPIRED_MESSAGE, TokenRenewer, TokenStore, VeriworkError,
    error::Result,
};

/// Remaining lifetime below which a credential is renewed before use.
///
/// Tunable via [`TokenRefresher::with_margin`]; 60 s is wide enough that a
/// request built against the returned credential cannot race the real expiry.
pub const DEFAULT_REFRESH_MARGIN: Duration = Duration::from_secs(60);

/// Failure delivered to every waiter of one renewal round.
///
/// Carried as plain text so the shared future output stays `Clone`.
#[derive(Debug, Clone)]
struct RefreshFailure(String);

type RenewalOutcome = std::result::Result<Credential, RefreshFailure>;
type SharedRenewal = Shared<BoxFuture<'static, RenewalOutcome>>;

/// Single-flight renewal slot.
///
/// `Ready` and `Failed` need no representation here: a successful round is
/// visible as the stored credential and a failed one as the cleared store,
/// so both collapse back to `Idle`.
enum RefreshState {
    Idle,
    Refreshing(SharedRenewal),
}

/// Coordinates credential renewal over a [`TokenStore`] and a [`TokenRenewer`].
pub struct TokenRefresher {
    store: Arc<dyn TokenStore>,
    renewer: Arc<dyn TokenRenewer>,
    margin: Duration,
    state: Mutex<RefreshState>,
}

impl TokenRefresher {
    /// Creates a refresher with the default margin.
    pub fn new(store: Arc<dyn TokenStore>, renewer: Arc<dyn TokenRenewer>) -> Self {
        Self {
            store,
            renewer,
            margin: DEFAULT_REFRESH_MARGIN,
            state: Mutex::new(RefreshState::Idle),
        }
    }

    /// Overrides the staleness margin.
    #[must_use]
    pub fn with_margin(mut self, margin: Duration) -> Self {
        self.margin = margin;
        self
    }

    /// Returns a credential with remaining lifetime above the margin,
    /// renewing first when necessary.
    ///
    /// # Errors
    ///
    /// Returns [`VeriworkError::SessionExpired`] when renewal fails; the
    /// store is cleared so subsequent calls start a fresh attempt.
    pub async fn ensure_valid(&self) -> Result<Credential> {
        if let Some(credential) = self.store.current()
            && credential.is_fresh(self.margin)
        {
            return Ok(credential);
        }

        let renewal = self.join_or_start();
        let outcome = renewal.clone().await;

        // Only the round that owns the handle may clear the slot; a late
        // waiter must not clobber a renewal started after this one finished.
        {
            let mut state = self.state.lock().unwrap();
            if let RefreshState::Refreshing(current) = &*state
                && current.ptr_eq(&renewal)
            {
                *state = RefreshState::Idle;
            }
        }

        outcome.map_err(|RefreshFailure(reason)| {
            tracing::warn!(%reason, "credential renewal failed");
            VeriworkError::session_expired(DEFAULT_SESSION_EXPIRED_MESSAGE)
        })
    }

    /// Joins the in-flight renewal, or starts one if the slot is idle.
    fn join_or_start(&self) -> SharedRenewal {
        let mut state = self.state.lock().unwrap();
        if let RefreshState::Refreshing(handle) = &*state {
            return handle.clone();
        }

        tracing::debug!("starting credential renewal");
        let store = Arc::clone(&self.store);
        let renewer = Arc::clone(&self.renewer);
        // The renewal body runs on its own task: a caller that abandons its
        // request must not cancel a renewal other waiters depend on.
        let task = tokio::spawn(async move {
            match renewer.renew().await {
                Ok(credential) => {
                    store.set(credential.clone());
                    Ok(credential)
                }
                Err(err) => {
                    store.clear();
                    Err(RefreshFailure(err.to_string()))
                }
            }
        });
        let handle: SharedRenewal = async move {
            task.await
                .unwrap_or_else(|join| Err(RefreshFailure(join.to_string())))
        }
        .boxed()
        .shared();
        *state = RefreshState::Refreshing(handle.clone());
        handle
    }
}
