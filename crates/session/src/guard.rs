//! Authenticated-request checkpoint.

use crate::refresher::TokenRefresher;
use std::sync::Arc;
use veriwork_types::{Credential, VeriworkError, error::Result};

/// The single checkpoint every authenticated call path passes through before
/// constructing its outgoing request.
///
/// A thin contract-enforcing façade over [`TokenRefresher`]: it performs no
/// caching of its own, only guaranteeing that a failure surfaces as a typed
/// session-expiry error (status 401, code `session_expired`).
pub struct AuthorizedRequestGuard {
    refresher: Arc<TokenRefresher>,
}

impl AuthorizedRequestGuard {
    pub fn new(refresher: Arc<TokenRefresher>) -> Self {
        Self { refresher }
    }

    /// Returns a usable credential, or fails fast with a session-expiry
    /// error carrying `message` when one is supplied.
    ///
    /// # Errors
    ///
    /// Returns [`VeriworkError::SessionExpired`] when no valid credential is
    /// obtainable.
    pub async fn require_token(&self, message: Option<&str>) -> Result<Credential> {
        self.refresher.ensure_valid().await.map_err(|err| match err {
            VeriworkError::SessionExpired { message: standard } => VeriworkError::SessionExpired {
                message: message.map_or(standard, str::to_string),
            },
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use veriwork_store::MemoryTokenStore;
    use veriwork_types::{
        DEFAULT_SESSION_EXPIRED_MESSAGE, SESSION_EXPIRED_CODE, TokenRenewer, TokenStore,
    };

    struct NoRenewal;

    #[async_trait]
    impl TokenRenewer for NoRenewal {
        async fn renew(&self) -> Result<Credential> {
            Err(VeriworkError::Http("no renewal path".into()))
        }
    }

    fn guard_with(store: Arc<MemoryTokenStore>) -> AuthorizedRequestGuard {
        let refresher = TokenRefresher::new(store as Arc<dyn TokenStore>, Arc::new(NoRenewal));
        AuthorizedRequestGuard::new(Arc::new(refresher))
    }

    #[tokio::test]
    async fn test_passes_through_valid_credential() {
        let store = Arc::new(MemoryTokenStore::new());
        store.set(Credential::expiring_in("tok", 3600));
        let guard = guard_with(Arc::clone(&store));

        let got = guard.require_token(None).await.unwrap();
        assert_eq!(got.value, "tok");
    }

    #[tokio::test]
    async fn test_default_message_status_and_code() {
        let guard = guard_with(Arc::new(MemoryTokenStore::new()));

        let err = guard.require_token(None).await.unwrap_err();
        assert_eq!(err.to_string(), DEFAULT_SESSION_EXPIRED_MESSAGE);
        assert_eq!(err.http_status(), Some(401));
        assert_eq!(err.code(), Some(SESSION_EXPIRED_CODE));
    }

    #[tokio::test]
    async fn test_caller_message_overrides_default() {
        let guard = guard_with(Arc::new(MemoryTokenStore::new()));

        let err = guard
            .require_token(Some("Sign in to open this record."))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Sign in to open this record.");
        assert_eq!(err.code(), Some(SESSION_EXPIRED_CODE));
    }
}
