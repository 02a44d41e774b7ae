//! Fixed instruction set for prescription extraction.
//!
//! Describes the target schema and the frequency-interpretation rules the
//! model must apply. The frequency table here mirrors
//! `frequency::normalize_frequency`; the parser re-normalizes anyway, so a
//! model that ignores these rules still produces canonical records.

pub const EXTRACTION_PROMPT: &str = r#"
You are an expert pharmaceutical data extractor specializing in handwritten Indian medical prescriptions.
Your goal is to extract structured data accurately, even from messy or cursive handwriting.

ANALYZE THE IMAGE FOR:
1. patientName (String or null)
2. doctorName (String or null)
3. prescriptionDate (String or null)
4. medications (List of objects)

CRITICAL RULES FOR MEDICATIONS:
- drugName: Identify the medicine name. Correct spelling based on common Indian brands if possible.
- dosage: Look for strengths like "200mg", "500mg".
- duration: Look for "5 days", "1 week".

- frequency: THIS IS THE MOST IMPORTANT FIELD.
  - LOOK FOR NUMERICAL PATTERNS (e.g., "1-0-1", "1-1-1", "0-0-1", "BD", "TDS").
  - INTERPRET THEM AS FOLLOWS:
    - "1-0-1", "1-O-1"  -> "Twice a day"
    - "1-1-1"           -> "Thrice a day"
    - "1-0-0"           -> "Once a day (Morning)"
    - "0-1-0"           -> "Once a day (Afternoon)"
    - "0-0-1"           -> "Once a day (Night)"
    - "BD", "BID"       -> "Twice a day"
    - "TDS", "TID"      -> "Thrice a day"
    - "OD"              -> "Once a day"
    - "SOS"             -> "As needed"

OUTPUT FORMAT:
Provide ONLY a valid JSON object with the keys patientName, doctorName,
prescriptionDate and medications, where each medication has the keys
drugName, dosage, frequency and duration. Use null for anything you cannot
read. No markdown.
"#;
