//! Parse the extraction model's free-text answer into a `Prescription`.
//!
//! The model is asked for bare JSON but routinely wraps it in Markdown
//! code fences. Fence-stripping is the only recovery attempted: anything
//! that still fails to decode is surfaced as `Malformed` with the original
//! text attached, never coerced into a partial record.

use crate::models::Prescription;
use crate::pipeline::frequency::normalize_frequency;

use super::ExtractionError;

/// Decode raw model output into a validated, normalized `Prescription`.
///
/// Every medication frequency that matches the shorthand table is replaced
/// with its canonical phrase; unrecognized values pass through unchanged.
pub fn parse_scan_response(raw: &str) -> Result<Prescription, ExtractionError> {
    let stripped = strip_code_fences(raw);

    let mut prescription: Prescription =
        serde_json::from_str(stripped).map_err(|e| ExtractionError::Malformed {
            reason: e.to_string(),
            raw: raw.to_string(),
        })?;

    for medication in &mut prescription.medications {
        if let Some(token) = medication.frequency.take() {
            medication.frequency = Some(normalize_frequency(&token));
        }
    }

    Ok(prescription)
}

/// Strip surrounding triple-backtick fences (with optional language tag)
/// and leading/trailing whitespace.
fn strip_code_fences(raw: &str) -> &str {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix("```") {
        // Drop the fence line; the tag may sit on its own line ("```json\n")
        // or run straight into the payload ("```json{").
        text = match rest.find('\n') {
            Some(newline) => rest[newline + 1..].trim(),
            None => rest.trim_start_matches("json").trim(),
        };
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest.trim();
    }

    text
}
