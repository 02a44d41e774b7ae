//! Shared state for the API router.

use std::sync::Arc;

use crate::auth::IdentityVerifier;
use crate::pipeline::PrescriptionScanner;
use crate::store::PrescriptionStore;

/// Collaborators injected into every request handler.
///
/// Constructed once at process start; no hidden global state, so tests can
/// substitute fakes for any boundary.
#[derive(Clone)]
pub struct ApiContext {
    pub scanner: Arc<PrescriptionScanner>,
    pub store: Arc<PrescriptionStore>,
    pub verifier: Arc<dyn IdentityVerifier>,
    /// Whether `/scan` requires authentication. The upstream design left
    /// scanning anonymous; this keeps that the default but configurable.
    pub scan_requires_auth: bool,
}

impl ApiContext {
    pub fn new(
        scanner: Arc<PrescriptionScanner>,
        store: Arc<PrescriptionStore>,
        verifier: Arc<dyn IdentityVerifier>,
        scan_requires_auth: bool,
    ) -> Self {
        Self {
            scanner,
            store,
            verifier,
            scan_requires_auth,
        }
    }
}
