//! Wire types for digitized prescriptions.
//!
//! Field names follow the extraction schema (`drugName`, `doctorName`, ...),
//! which is also the JSON shape clients send and receive. Every extracted
//! field is optional: the model reports null for anything it cannot read,
//! and absence is preserved rather than coerced to an empty string.

use serde::{Deserialize, Serialize};

/// One prescribed drug line item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Medication {
    pub drug_name: Option<String>,
    /// Strength expression, e.g. "500mg".
    pub dosage: Option<String>,
    /// Canonical frequency phrase once the record has passed through the
    /// pipeline (never raw shorthand like "1-0-1" in storage).
    pub frequency: Option<String>,
    /// Free-text duration, e.g. "5 days".
    pub duration: Option<String>,
}

/// One digitized prescription document.
///
/// `id` is assigned by the store on save; any id present on an inbound
/// record is discarded. The storage timestamp is an ordering key only and
/// is not part of this shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Prescription {
    pub id: Option<String>,
    pub doctor_name: Option<String>,
    pub patient_name: Option<String>,
    pub prescription_date: Option<String>,
    /// Extraction order, preserved as-is.
    pub medications: Vec<Medication>,
}
