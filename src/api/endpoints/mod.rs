pub mod health;
pub mod prescriptions;
pub mod scan;

use axum::http::HeaderMap;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;

/// Resolve the verified owner id for a request, or fail as unauthorized.
pub(crate) async fn authenticate(
    ctx: &ApiContext,
    headers: &HeaderMap,
) -> Result<String, ApiError> {
    let authorization = headers
        .get("Authorization")
        .and_then(|v| v.to_str().ok());
    let owner_id = ctx.verifier.verify(authorization).await?;
    Ok(owner_id)
}
