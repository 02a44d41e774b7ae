pub mod frequency;
pub mod gemini;
pub mod parser;
pub mod prompt;
pub mod scanner;

pub use frequency::*;
pub use gemini::*;
pub use parser::*;
pub use prompt::*;
pub use scanner::*;

use thiserror::Error;

/// Failures of the extraction-normalization pipeline.
///
/// Nothing here is retried internally; every failure surfaces to the
/// caller so the API layer can map it to an outcome.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("image payload is empty")]
    EmptyImage,

    #[error("extraction service error: {0}")]
    Service(String),

    #[error("extraction service returned status {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("extraction service returned no content")]
    EmptyResponse,

    /// The model answered but its output could not be decoded into the
    /// prescription schema. Carries the raw text for diagnostics.
    #[error("extraction response could not be decoded: {reason}")]
    Malformed { reason: String, raw: String },
}
