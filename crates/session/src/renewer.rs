//! HTTP renewal collaborator for the auth backend.

use async_trait::async_trait;
use serde_json::Value;
use veriwork_types::{Credential, TokenRenewer, VeriworkError, error::Result};

/// [`TokenRenewer`] that posts to the auth backend's renewal endpoint.
pub struct HttpTokenRenewer {
    http: rquest::Client,
    renew_url: String,
}

impl HttpTokenRenewer {
    pub fn new(http: rquest::Client, renew_url: impl Into<String>) -> Self {
        Self {
            http,
            renew_url: renew_url.into(),
        }
    }
}

#[async_trait]
impl TokenRenewer for HttpTokenRenewer {
    async fn renew(&self) -> Result<Credential> {
        let resp = self.http.post(&self.renew_url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(VeriworkError::Http(format!(
                "renewal endpoint returned {status}"
            )));
        }
        let json: Value = resp
            .json()
            .await
            .map_err(|e| VeriworkError::Http(format!("failed to parse renewal response: {e}")))?;
        parse_renewal_response(&json)
    }
}

/// Parse the renewal endpoint's JSON body into a [`Credential`].
///
/// Tolerates both field spellings the auth backend has emitted over time:
/// `access_token`/`token` and `expires_in` (relative seconds) /
/// `expires_at` (absolute unix seconds).
///
/// # Errors
///
/// Returns an error if the token or the expiry field is missing.
pub fn parse_renewal_response(json: &Value) -> Result<Credential> {
    let value = json
        .get("access_token")
        .or_else(|| json.get("token"))
        .and_then(Value::as_str)
        .ok_or_else(|| VeriworkError::Http("missing access_token in renewal response".into()))?;

    if let Some(expires_in) = json.get("expires_in").and_then(Value::as_u64) {
        return Ok(Credential::expiring_in(value, expires_in));
    }
    let expires_at = json
        .get("expires_at")
        .and_then(Value::as_u64)
        .ok_or_else(|| VeriworkError::Http("missing expiry in renewal response".into()))?;
    Ok(Credential::new(value, expires_at))
}
