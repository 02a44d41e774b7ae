//! Dosage-frequency normalization.
//!
//! Handwritten prescriptions encode dosing schedules as numeric patterns
//! ("1-0-1" = morning-noon-night) or clinical abbreviations ("BD", "TDS").
//! This table maps the recognized shorthand to a canonical human-readable
//! phrase. Pure and stateless — testable without the extraction pipeline.

/// Map a raw frequency token to its canonical phrase.
///
/// Matching is case-insensitive, and the letter `O` is accepted where
/// handwriting recognition misreads the digit `0` in numeric patterns
/// (e.g. "1-O-1"). Unrecognized tokens are returned unchanged so no
/// extracted information is silently dropped.
pub fn normalize_frequency(token: &str) -> String {
    let upper = token.trim().to_ascii_uppercase();

    // Abbreviations first: "OD" and "SOS" contain the letter O and must
    // not go through the O-for-0 substitution below.
    let canonical = match upper.as_str() {
        "BD" | "BID" => Some("Twice a day"),
        "TDS" | "TID" => Some("Thrice a day"),
        "OD" => Some("Once a day"),
        "SOS" => Some("As needed"),
        _ => {
            let digits = upper.replace('O', "0");
            match digits.as_str() {
                "1-0-1" => Some("Twice a day"),
                "1-1-1" => Some("Thrice a day"),
                "1-0-0" => Some("Once a day (Morning)"),
                "0-1-0" => Some("Once a day (Afternoon)"),
                "0-0-1" => Some("Once a day (Night)"),
                _ => None,
            }
        }
    };

    match canonical {
        Some(phrase) => phrase.to_string(),
        None => token.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_patterns_map_to_canonical_phrases() {
        assert_eq!(normalize_frequency("1-0-1"), "Twice a day");
        assert_eq!(normalize_frequency("1-1-1"), "Thrice a day");
        assert_eq!(normalize_frequency("1-0-0"), "Once a day (Morning)");
        assert_eq!(normalize_frequency("0-1-0"), "Once a day (Afternoon)");
        assert_eq!(normalize_frequency("0-0-1"), "Once a day (Night)");
    }

    #[test]
    fn abbreviations_map_to_canonical_phrases() {
        assert_eq!(normalize_frequency("BD"), "Twice a day");
        assert_eq!(normalize_frequency("BID"), "Twice a day");
        assert_eq!(normalize_frequency("TDS"), "Thrice a day");
        assert_eq!(normalize_frequency("TID"), "Thrice a day");
        assert_eq!(normalize_frequency("OD"), "Once a day");
        assert_eq!(normalize_frequency("SOS"), "As needed");
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(normalize_frequency("bd"), "Twice a day");
        assert_eq!(normalize_frequency("tds"), "Thrice a day");
        assert_eq!(normalize_frequency("od"), "Once a day");
        assert_eq!(normalize_frequency("sos"), "As needed");
    }

    #[test]
    fn letter_o_is_read_as_zero_in_numeric_patterns() {
        assert_eq!(normalize_frequency("1-O-1"), "Twice a day");
        assert_eq!(normalize_frequency("1-o-1"), "Twice a day");
        assert_eq!(normalize_frequency("O-O-1"), "Once a day (Night)");
        assert_eq!(normalize_frequency("1-O-O"), "Once a day (Morning)");
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        assert_eq!(normalize_frequency("  1-0-1 "), "Twice a day");
        assert_eq!(normalize_frequency(" BD"), "Twice a day");
    }

    #[test]
    fn unrecognized_tokens_pass_through_unchanged() {
        assert_eq!(normalize_frequency("every 6 hours"), "every 6 hours");
        assert_eq!(normalize_frequency("2-0-2"), "2-0-2");
        assert_eq!(normalize_frequency("QID"), "QID");
        assert_eq!(normalize_frequency(""), "");
    }

    #[test]
    fn canonical_phrases_are_stable_under_renormalization() {
        // Records saved by a client may already carry canonical phrases.
        assert_eq!(normalize_frequency("Twice a day"), "Twice a day");
        assert_eq!(normalize_frequency("As needed"), "As needed");
    }
}
