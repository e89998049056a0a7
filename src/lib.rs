//! Veriwork client core.
//!
//! Facade over the workspace crates: the session-token lifecycle
//! ([`session`]), the normalized API surface ([`api`]), credential storage
//! ([`store`]), record classification ([`workflow`]), and shared types
//! ([`types`]).

pub use veriwork_api as api;
pub use veriwork_config as config;
pub use veriwork_session as session;
pub use veriwork_store as store;
pub use veriwork_types as types;
pub use veriwork_workflow as workflow;

use std::sync::Arc;
use veriwork_api::ApiClient;
use veriwork_config::Config;
use veriwork_session::{AuthorizedRequestGuard, HttpTokenRenewer, TokenRefresher};
use veriwork_store::MemoryTokenStore;
use veriwork_types::{TokenRenewer, TokenStore};

/// A fully wired client core.
pub struct Core {
    /// The session credential slot; cleared at logout.
    pub store: Arc<MemoryTokenStore>,
    /// Checkpoint for call paths that build their own requests.
    pub guard: Arc<AuthorizedRequestGuard>,
    /// Authenticated JSON client for the API backend.
    pub client: ApiClient,
}

/// Wires the core components from configuration.
#[must_use]
pub fn bootstrap(config: &Config) -> Core {
    let http = rquest::Client::new();
    let store = Arc::new(MemoryTokenStore::new());
    let renewer = HttpTokenRenewer::new(http.clone(), config.session.renew_url.clone());
    let refresher = TokenRefresher::new(
        Arc::clone(&store) as Arc<dyn TokenStore>,
        Arc::new(renewer) as Arc<dyn TokenRenewer>,
    )
    .with_margin(config.session.refresh_margin());
    let guard = Arc::new(AuthorizedRequestGuard::new(Arc::new(refresher)));
    let client = ApiClient::new(http, Arc::clone(&guard), config.api.base_url.clone());
    Core {
        store,
        guard,
        client,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veriwork_types::Credential;

    #[tokio::test]
    async fn test_bootstrap_serves_stored_credential() {
        let core = bootstrap(&Config::default());
        core.store.set(Credential::expiring_in("tok", 3600));
        let got = core.guard.require_token(None).await.unwrap();
        assert_eq!(got.value, "tok");
    }
}
