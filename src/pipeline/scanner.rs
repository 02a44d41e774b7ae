//! Scan orchestration: image bytes in, structured prescription out.
//!
//! Composes the extraction client and the response parser. Persists
//! nothing — saving a scanned record is a separate, explicit caller
//! action.

use std::sync::Arc;

use crate::models::Prescription;

use super::gemini::VisionModel;
use super::parser::parse_scan_response;
use super::prompt::EXTRACTION_PROMPT;
use super::ExtractionError;

pub struct PrescriptionScanner {
    model: Arc<dyn VisionModel>,
}

impl PrescriptionScanner {
    pub fn new(model: Arc<dyn VisionModel>) -> Self {
        Self { model }
    }

    /// Run one extraction: invoke the model with the fixed instruction set
    /// and the image payload, then decode and normalize the response.
    ///
    /// The MIME type is expected to be pre-validated at the transport
    /// boundary (magic-byte detection, not client headers).
    pub async fn scan(
        &self,
        image_bytes: &[u8],
        mime_type: &str,
    ) -> Result<Prescription, ExtractionError> {
        if image_bytes.is_empty() {
            return Err(ExtractionError::EmptyImage);
        }

        let start = std::time::Instant::now();
        let raw = self
            .model
            .generate(EXTRACTION_PROMPT, image_bytes, mime_type)
            .await?;
        let prescription = parse_scan_response(&raw)?;

        tracing::info!(
            elapsed_ms = %start.elapsed().as_millis(),
            image_size = image_bytes.len(),
            medications = prescription.medications.len(),
            "prescription scan complete"
        );

        Ok(prescription)
    }
}
