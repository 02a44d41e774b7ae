//! Identity verification against the Firebase Identity Toolkit.
//!
//! The service trusts only the verified-identity contract: a credential
//! goes in, a stable owner id (`localId`) comes out. Token cryptography,
//! revocation and expiry all live upstream.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{bearer_token, AuthError, IdentityVerifier};

/// Verifier backed by the Identity Toolkit `accounts:lookup` endpoint.
pub struct FirebaseVerifier {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl FirebaseVerifier {
    pub fn new(base_url: &str, api_key: &str, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client,
        }
    }
}

#[derive(Serialize)]
struct LookupRequest<'a> {
    #[serde(rename = "idToken")]
    id_token: &'a str,
}

#[derive(Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<UserRecord>,
}

#[derive(Deserialize)]
struct UserRecord {
    #[serde(rename = "localId")]
    local_id: String,
}

#[async_trait]
impl IdentityVerifier for FirebaseVerifier {
    async fn verify(&self, authorization: Option<&str>) -> Result<String, AuthError> {
        let token = bearer_token(authorization)?;

        let url = format!("{}/v1/accounts:lookup?key={}", self.base_url, self.api_key);
        let response = self
            .client
            .post(&url)
            .json(&LookupRequest { id_token: token })
            .send()
            .await
            .map_err(|e| AuthError::Unavailable(e.to_string()))?;

        let status = response.status();
        if status.is_client_error() {
            // Expired, forged or revoked token. Never log the token itself.
            tracing::warn!(status = status.as_u16(), "identity authority rejected credential");
            return Err(AuthError::InvalidCredential);
        }
        if !status.is_success() {
            return Err(AuthError::Unavailable(format!(
                "identity authority returned status {status}"
            )));
        }

        let parsed: LookupResponse = response
            .json()
            .await
            .map_err(|e| AuthError::Unavailable(e.to_string()))?;

        match parsed.users.into_iter().next() {
            Some(user) => Ok(user.local_id),
            None => {
                tracing::warn!("identity authority returned no user for credential");
                Err(AuthError::InvalidCredential)
            }
        }
    }
}

/// Fixed-table verifier for tests: maps known tokens to owner ids.
pub struct StaticVerifier {
    tokens: std::collections::HashMap<String, String>,
}

impl StaticVerifier {
    pub fn new() -> Self {
        Self {
            tokens: std::collections::HashMap::new(),
        }
    }

    pub fn with_token(mut self, token: &str, owner_id: &str) -> Self {
        self.tokens.insert(token.to_string(), owner_id.to_string());
        self
    }
}

impl Default for StaticVerifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityVerifier for StaticVerifier {
    async fn verify(&self, authorization: Option<&str>) -> Result<String, AuthError> {
        let token = bearer_token(authorization)?;
        self.tokens
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidCredential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_verifier_resolves_known_token() {
        let verifier = StaticVerifier::new().with_token("tok-1", "owner-a");
        let owner = verifier.verify(Some("Bearer tok-1")).await.unwrap();
        assert_eq!(owner, "owner-a");
    }

    #[tokio::test]
    async fn static_verifier_rejects_unknown_token() {
        let verifier = StaticVerifier::new().with_token("tok-1", "owner-a");
        let err = verifier.verify(Some("Bearer nope")).await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredential));
    }

    #[tokio::test]
    async fn static_verifier_requires_bearer_scheme() {
        let verifier = StaticVerifier::new().with_token("tok-1", "owner-a");
        let err = verifier.verify(Some("tok-1")).await.unwrap_err();
        assert!(matches!(err, AuthError::MissingCredential));
    }

    #[test]
    fn firebase_verifier_trims_trailing_slash() {
        let verifier = FirebaseVerifier::new(
            "https://identitytoolkit.googleapis.com/",
            "key",
            10,
        );
        assert_eq!(verifier.base_url, "https://identitytoolkit.googleapis.com");
    }

    #[test]
    fn lookup_response_decodes_local_id() {
        let parsed: LookupResponse =
            serde_json::from_str(r#"{"users":[{"localId":"u1","email":"a@b.c"}]}"#).unwrap();
        assert_eq!(parsed.users[0].local_id, "u1");
    }

    #[test]
    fn lookup_response_tolerates_empty_body() {
        let parsed: LookupResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.users.is_empty());
    }
}
