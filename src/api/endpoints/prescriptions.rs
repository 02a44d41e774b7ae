//! Authenticated prescription record endpoints: save, list, delete.
//!
//! Every operation runs inside the verified owner's partition; there is no
//! path that reads or writes another owner's records.

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Serialize;

use crate::api::endpoints::authenticate;
use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::Prescription;

#[derive(Serialize)]
pub struct SaveResponse {
    pub message: &'static str,
    pub id: String,
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
}

/// `POST /save-prescription` — persist a scanned record for the caller.
pub async fn save(
    State(ctx): State<ApiContext>,
    headers: HeaderMap,
    Json(record): Json<Prescription>,
) -> Result<Json<SaveResponse>, ApiError> {
    let owner_id = authenticate(&ctx, &headers).await?;
    let id = ctx.store.create(&owner_id, &record)?;
    Ok(Json(SaveResponse {
        message: "Prescription saved successfully",
        id,
    }))
}

/// `GET /prescriptions` — the caller's records, newest first.
pub async fn list(
    State(ctx): State<ApiContext>,
    headers: HeaderMap,
) -> Result<Json<Vec<Prescription>>, ApiError> {
    let owner_id = authenticate(&ctx, &headers).await?;
    let prescriptions = ctx.store.list(&owner_id)?;
    Ok(Json(prescriptions))
}

/// `DELETE /delete-prescription/:id` — remove one record from the
/// caller's partition. Succeeds whether or not the id existed.
pub async fn delete(
    State(ctx): State<ApiContext>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let owner_id = authenticate(&ctx, &headers).await?;
    ctx.store.delete(&owner_id, &id)?;
    Ok(Json(DeleteResponse {
        message: "Prescription deleted successfully",
    }))
}
