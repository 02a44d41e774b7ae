//! Route table for the DigiMeds API.
//!
//! Endpoint paths mirror the mobile client contract: `/scan`,
//! `/save-prescription`, `/prescriptions`, `/delete-prescription/:id`.
//!
//! NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).

use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Upload bodies may carry a 10 MB image plus multipart overhead.
const MAX_BODY_BYTES: usize = 12 * 1024 * 1024;

pub fn api_router(ctx: ApiContext) -> Router {
    Router::new()
        .route("/", get(endpoints::health::root))
        .route("/health", get(endpoints::health::check))
        .route("/scan", post(endpoints::scan::scan))
        .route("/save-prescription", post(endpoints::prescriptions::save))
        .route("/prescriptions", get(endpoints::prescriptions::list))
        .route(
            "/delete-prescription/:id",
            delete(endpoints::prescriptions::delete),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .with_state(ctx)
}
