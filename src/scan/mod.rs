/// Backend scan module
///
/// This module handles:
/// - Uploading the selected image as multipart form data (client.rs)
/// - Parsing the backend's JSON response (report.rs)
/// - The failure taxonomy surfaced to the user (error.rs)

pub mod client;
pub mod error;
pub mod report;

pub use client::ScanClient;
pub use error::ScanError;
pub use report::ScanOutcome;
