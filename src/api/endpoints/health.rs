//! Root and health probes — no authentication, no state.

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

/// `GET /` — service banner.
pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the DigiMeds API",
    })
}

/// `GET /health` — liveness probe.
pub async fn check() -> &'static str {
    "ok"
}
