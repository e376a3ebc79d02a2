/// Parsed responses from the scan endpoint
///
/// The backend reports camelCase JSON with every field optional. The
/// display accessors treat empty strings the same as missing fields.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Fallback shown when no text was extracted
const NO_TEXT: &str = "No text found";
/// Fallback shown when the medicine could not be identified
const NO_NAME: &str = "Could not identify name";
/// Fallback shown for missing usage or warnings
const NO_INFO: &str = "Information not available";

/// Successful analysis payload from `POST /api/scan`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScanReport {
    pub extracted_text: Option<String>,
    pub medicine_name: Option<String>,
    pub usage: Option<String>,
    pub warnings: Option<String>,
}

impl ScanReport {
    /// Raw OCR text, or its fallback
    pub fn extracted_text(&self) -> &str {
        display_or(&self.extracted_text, NO_TEXT)
    }

    /// Identified medicine name, or its fallback
    pub fn medicine_name(&self) -> &str {
        display_or(&self.medicine_name, NO_NAME)
    }

    /// Usage guidance, or its fallback
    pub fn usage(&self) -> &str {
        display_or(&self.usage, NO_INFO)
    }

    /// Warnings, or their fallback
    pub fn warnings(&self) -> &str {
        display_or(&self.warnings, NO_INFO)
    }
}

/// Failure payload from `POST /api/scan` on a non-success status
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub error: Option<String>,
}

/// A parsed report together with when the scan completed
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub report: ScanReport,
    pub scanned_at: DateTime<Utc>,
}

fn display_or<'a>(field: &'a Option<String>, fallback: &'a str) -> &'a str {
    match field.as_deref() {
        Some(text) if !text.is_empty() => text,
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_payload() {
        let report: ScanReport = serde_json::from_str(
            r#"{
                "extractedText": "ABC",
                "medicineName": "Aspirin",
                "usage": "Pain relief",
                "warnings": "Do not exceed dose"
            }"#,
        )
        .unwrap();

        assert_eq!(report.extracted_text(), "ABC");
        assert_eq!(report.medicine_name(), "Aspirin");
        assert_eq!(report.usage(), "Pain relief");
        assert_eq!(report.warnings(), "Do not exceed dose");
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let report: ScanReport = serde_json::from_str("{}").unwrap();

        assert_eq!(report.extracted_text(), "No text found");
        assert_eq!(report.medicine_name(), "Could not identify name");
        assert_eq!(report.usage(), "Information not available");
        assert_eq!(report.warnings(), "Information not available");
    }

    #[test]
    fn test_empty_strings_fall_back() {
        let report: ScanReport = serde_json::from_str(
            r#"{"extractedText": "", "medicineName": ""}"#,
        )
        .unwrap();

        assert_eq!(report.extracted_text(), "No text found");
        assert_eq!(report.medicine_name(), "Could not identify name");
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let report: ScanReport = serde_json::from_str(
            r#"{"medicineName": "Ibuprofen", "confidence": 0.93}"#,
        )
        .unwrap();

        assert_eq!(report.medicine_name(), "Ibuprofen");
    }

    #[test]
    fn test_api_error_field_is_optional() {
        let with_message: ApiError = serde_json::from_str(r#"{"error": "bad image"}"#).unwrap();
        let without: ApiError = serde_json::from_str("{}").unwrap();

        assert_eq!(with_message.error.as_deref(), Some("bad image"));
        assert!(without.error.is_none());
    }
}
