//! Authenticated request helper over the session checkpoint.
//!
//! Eliminates duplicated guard → send → status-check → unwrap logic across
//! call sites: every request resolves its credential through the
//! [`AuthorizedRequestGuard`] and every failure leaves as a typed error.

use crate::{envelope, normalize};
use serde_json::Value;
use std::sync::Arc;
use veriwork_session::AuthorizedRequestGuard;
use veriwork_types::{Credential, error::Result};

/// Authenticated JSON client for the veriwork API backend.
pub struct ApiClient {
    http: rquest::Client,
    guard: Arc<AuthorizedRequestGuard>,
    base_url: String,
}

impl ApiClient {
    /// Creates a client rooted at `base_url`.
    pub fn new(
        http: rquest::Client,
        guard: Arc<AuthorizedRequestGuard>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            http,
            guard,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// GET `path` and return the unwrapped payload.
    ///
    /// # Errors
    ///
    /// Returns a session-expiry error when no credential is obtainable, or a
    /// normalized [`VeriworkError::Api`](veriwork_types::VeriworkError::Api)
    /// for any backend failure.
    pub async fn get_json(&self, path: &str, fallback: &str) -> Result<Value> {
        let credential = self.guard.require_token(None).await?;
        let builder = self
            .http
            .get(self.endpoint(path))
            .header("authorization", bearer(&credential));
        self.send(builder, fallback).await
    }

    /// POST `body` to `path` and return the unwrapped payload.
    ///
    /// # Errors
    ///
    /// Same contract as [`ApiClient::get_json`].
    pub async fn post_json(&self, path: &str, body: &Value, fallback: &str) -> Result<Value> {
        let credential = self.guard.require_token(None).await?;
        let builder = self
            .http
            .post(self.endpoint(path))
            .header("authorization", bearer(&credential))
            .header("content-type", "application/json")
            .json(body);
        self.send(builder, fallback).await
    }

    async fn send(&self, builder: rquest::RequestBuilder, fallback: &str) -> Result<Value> {
        let resp = match builder.send().await {
            Ok(resp) => resp,
            Err(err) => {
                tracing::warn!(error = %err, "transport failure");
                return Err(normalize::from_transport(&err, fallback).into());
            }
        };
        let status = resp.status();
        if !status.is_success() {
            return Err(normalize::from_response(resp, fallback).await.into());
        }
        // A success body that fails to parse is treated as absent data.
        let json = resp.json::<Value>().await.unwrap_or(Value::Null);
        Ok(envelope::unwrap_payload(json))
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// Authorization header value for a credential.
fn bearer(credential: &Credential) -> String {
    format!("Bearer {}", credential.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use veriwork_session::TokenRefresher;
    use veriwork_store::MemoryTokenStore;
    use veriwork_types::{TokenRenewer, TokenStore, VeriworkError};

    struct NoRenewal;

    #[async_trait]
    impl TokenRenewer for NoRenewal {
        async fn renew(&self) -> Result<Credential> {
            Err(VeriworkError::Http("no renewal path".into()))
        }
    }

    fn client_with_store(store: Arc<MemoryTokenStore>) -> ApiClient {
        let refresher = TokenRefresher::new(store as Arc<dyn TokenStore>, Arc::new(NoRenewal));
        let guard = AuthorizedRequestGuard::new(Arc::new(refresher));
        ApiClient::new(rquest::Client::new(), Arc::new(guard), "https://api.test/")
    }

    #[test]
    fn test_bearer_header_value() {
        let c = Credential::new("abc123", 0);
        assert_eq!(bearer(&c), "Bearer abc123");
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let client = client_with_store(Arc::new(MemoryTokenStore::new()));
        assert_eq!(client.endpoint("/records/7"), "https://api.test/records/7");
        assert_eq!(client.endpoint("records/7"), "https://api.test/records/7");
    }

    #[tokio::test]
    async fn test_missing_session_fails_before_any_request() {
        // The guard rejects up front; no request is ever built, so the typed
        // session error comes back even with an unroutable base URL.
        let client = client_with_store(Arc::new(MemoryTokenStore::new()));
        let err = client.get_json("/records", "Could not load records").await;
        assert!(matches!(
            err.unwrap_err(),
            VeriworkError::SessionExpired { .. }
        ));
    }
}
