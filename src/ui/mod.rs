/// View helpers for the scanner UI
///
/// Widget-building functions split out of main.rs:
/// - `results.rs` - the results panel for a completed scan

pub mod results;
