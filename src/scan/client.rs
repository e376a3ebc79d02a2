/// HTTP client for the scan endpoint
///
/// Uploads one image per submission as multipart form data and interprets
/// the JSON response. Response interpretation is kept free of I/O so the
/// status and parse handling can be tested without a server.

use chrono::Utc;
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use tracing::info;

use super::error::ScanError;
use super::report::{ApiError, ScanOutcome, ScanReport};
use crate::state::data::SelectedFile;

/// Field name the backend expects for the uploaded image
const IMAGE_FIELD: &str = "medicineImage";

/// Failure message used when the backend does not provide one
const DEFAULT_API_ERROR: &str = "Failed to process image";

#[derive(Debug, Clone)]
pub struct ScanClient {
    http: reqwest::Client,
    base_url: String,
}

impl ScanClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Upload one image and wait for the backend's analysis.
    ///
    /// The raw file bytes go up unmodified, original filename preserved.
    /// No retry, no timeout; one request per user action.
    pub async fn scan(&self, file: SelectedFile) -> Result<ScanOutcome, ScanError> {
        let bytes = tokio::fs::read(&file.path)
            .await
            .map_err(|e| ScanError::FileRead {
                path: file.path.display().to_string(),
                reason: e.to_string(),
            })?;

        info!("uploading {} ({} bytes)", file.filename, bytes.len());

        let part = Part::bytes(bytes)
            .file_name(file.filename.clone())
            .mime_str(mime_for(&file.filename))
            .map_err(|e| ScanError::Transport(e.to_string()))?;
        let form = Form::new().part(IMAGE_FIELD, part);

        let url = format!("{}/api/scan", self.base_url.trim_end_matches('/'));
        let response = self.http.post(&url).multipart(form).send().await?;

        let status = response.status();
        let body = response.text().await?;
        let report = interpret_response(status, &body)?;

        info!("scan finished with status {}", status);

        Ok(ScanOutcome {
            report,
            scanned_at: Utc::now(),
        })
    }
}

/// Map an HTTP status and body to a scan report or a failure
///
/// Success bodies must parse as a `ScanReport`. Non-success bodies report
/// the backend's `error` field when present, the default message when the
/// field is missing, and the malformed-response error when the body is not
/// JSON at all.
fn interpret_response(status: StatusCode, body: &str) -> Result<ScanReport, ScanError> {
    if status.is_success() {
        return serde_json::from_str(body).map_err(|_| ScanError::MalformedResponse);
    }

    match serde_json::from_str::<ApiError>(body) {
        Ok(api) => Err(ScanError::Api(
            api.error.unwrap_or_else(|| DEFAULT_API_ERROR.to_string()),
        )),
        Err(_) => Err(ScanError::MalformedResponse),
    }
}

/// Guess the MIME type from the file extension
///
/// The picker only offers known extensions, but paths can also arrive by
/// other routes, so unknown extensions fall back to a generic type.
fn mime_for(filename: &str) -> &'static str {
    let extension = std::path::Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        Some("tif") | Some("tiff") => "image/tiff",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_body_parses() {
        let report = interpret_response(
            StatusCode::OK,
            r#"{"extractedText": "ABC", "medicineName": "Aspirin"}"#,
        )
        .unwrap();

        assert_eq!(report.extracted_text(), "ABC");
        assert_eq!(report.medicine_name(), "Aspirin");
    }

    #[test]
    fn test_success_with_invalid_json_is_malformed() {
        let result = interpret_response(StatusCode::OK, "<html>oops</html>");
        assert_eq!(result.unwrap_err(), ScanError::MalformedResponse);
    }

    #[test]
    fn test_failure_uses_backend_message() {
        let result = interpret_response(StatusCode::BAD_REQUEST, r#"{"error": "bad image"}"#);
        assert_eq!(result.unwrap_err(), ScanError::Api("bad image".to_string()));
    }

    #[test]
    fn test_failure_without_message_uses_default() {
        let result = interpret_response(StatusCode::INTERNAL_SERVER_ERROR, "{}");
        assert_eq!(
            result.unwrap_err(),
            ScanError::Api("Failed to process image".to_string())
        );
    }

    #[test]
    fn test_failure_with_invalid_json_is_malformed() {
        let result = interpret_response(StatusCode::BAD_GATEWAY, "Bad Gateway");
        assert_eq!(result.unwrap_err(), ScanError::MalformedResponse);
    }

    #[test]
    fn test_mime_guessing() {
        assert_eq!(mime_for("label.jpg"), "image/jpeg");
        assert_eq!(mime_for("LABEL.JPEG"), "image/jpeg");
        assert_eq!(mime_for("box.png"), "image/png");
        assert_eq!(mime_for("leaflet"), "application/octet-stream");
    }
}
