pub mod firebase;

pub use firebase::{FirebaseVerifier, StaticVerifier};

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization` header, or one without a bearer scheme.
    #[error("no authorization credential provided")]
    MissingCredential,

    /// Credential rejected by the identity authority (expired, forged,
    /// revoked). Externally indistinguishable from a missing credential.
    #[error("credential rejected by identity authority")]
    InvalidCredential,

    #[error("identity authority unreachable: {0}")]
    Unavailable(String),
}

/// Validates a presented credential and yields a stable owner identifier.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// Verify the raw `Authorization` header value (if any) and return the
    /// opaque owner id.
    async fn verify(&self, authorization: Option<&str>) -> Result<String, AuthError>;
}

/// Strip the bearer scheme from an `Authorization` header value.
pub fn bearer_token(authorization: Option<&str>) -> Result<&str, AuthError> {
    let token = authorization
        .ok_or(AuthError::MissingCredential)?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .ok_or(AuthError::MissingCredential)?;

    if token.is_empty() {
        return Err(AuthError::MissingCredential);
    }
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_token_strips_scheme() {
        assert_eq!(bearer_token(Some("Bearer abc123")).unwrap(), "abc123");
    }

    #[test]
    fn absent_header_is_missing_credential() {
        assert!(matches!(bearer_token(None), Err(AuthError::MissingCredential)));
    }

    #[test]
    fn missing_scheme_prefix_is_missing_credential() {
        assert!(matches!(
            bearer_token(Some("abc123")),
            Err(AuthError::MissingCredential)
        ));
        assert!(matches!(
            bearer_token(Some("Basic dXNlcg==")),
            Err(AuthError::MissingCredential)
        ));
    }

    #[test]
    fn empty_token_is_missing_credential() {
        assert!(matches!(
            bearer_token(Some("Bearer ")),
            Err(AuthError::MissingCredential)
        ));
        assert!(matches!(
            bearer_token(Some("Bearer   ")),
            Err(AuthError::MissingCredential)
        ));
    }
}
