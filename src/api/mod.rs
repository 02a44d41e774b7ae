//! HTTP surface for the DigiMeds service.
//!
//! The router composes dependency-injected collaborators (scanner, store,
//! identity verifier) carried in `ApiContext`; handlers translate each
//! component's error kind into an HTTP outcome via `ApiError`.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod types;

pub use error::ApiError;
pub use router::api_router;
pub use types::ApiContext;
