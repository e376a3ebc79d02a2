/// Image preview pipeline
///
/// Decodes the selected photo into an in-memory handle for the preview
/// widget. Multi-megabyte camera photos are downscaled before they reach
/// the widget so the preview never holds full-resolution RGBA in RAM; the
/// upload itself always sends the untouched original file.

use iced::widget::image::Handle;
use image::imageops::FilterType;
use std::path::PathBuf;
use tokio::task;
use tracing::info;

/// Extensions offered by the file picker (what the decoder understands)
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "webp", "gif", "bmp", "tif", "tiff",
];

/// Longest edge of a generated preview, in pixels
const MAX_PREVIEW_EDGE: u32 = 1280;

/// A decoded preview ready for display
#[derive(Debug, Clone)]
pub struct ImagePreview {
    pub handle: Handle,
    pub width: u32,
    pub height: u32,
}

/// Load and decode a preview for the given file
///
/// Decoding is CPU-intensive, so it runs on a blocking worker instead of
/// the UI thread.
pub async fn load_preview(path: PathBuf) -> Result<ImagePreview, String> {
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    task::spawn_blocking(move || decode_preview(&bytes))
        .await
        .map_err(|e| format!("Task join error: {}", e))?
}

/// Blocking implementation of preview decoding
fn decode_preview(bytes: &[u8]) -> Result<ImagePreview, String> {
    let decoded =
        image::load_from_memory(bytes).map_err(|e| format!("Failed to decode image: {}", e))?;

    let (target_width, target_height) = preview_dimensions(decoded.width(), decoded.height());
    let preview = if (target_width, target_height) == (decoded.width(), decoded.height()) {
        decoded
    } else {
        decoded.resize(target_width, target_height, FilterType::Lanczos3)
    };

    info!(
        "decoded preview {}x{} (source {} bytes)",
        preview.width(),
        preview.height(),
        bytes.len()
    );

    let rgba = preview.to_rgba8();
    let (width, height) = (rgba.width(), rgba.height());

    Ok(ImagePreview {
        handle: Handle::from_rgba(width, height, rgba.into_raw()),
        width,
        height,
    })
}

/// Target dimensions for a preview
///
/// Preserves aspect ratio and caps the long edge at `MAX_PREVIEW_EDGE`.
fn preview_dimensions(width: u32, height: u32) -> (u32, u32) {
    let long_edge = width.max(height);
    if long_edge <= MAX_PREVIEW_EDGE {
        return (width, height);
    }

    let scale = MAX_PREVIEW_EDGE as f64 / long_edge as f64;
    (
        ((width as f64 * scale).round() as u32).max(1),
        ((height as f64 * scale).round() as u32).max(1),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_images_keep_their_size() {
        assert_eq!(preview_dimensions(640, 480), (640, 480));
        assert_eq!(preview_dimensions(1280, 720), (1280, 720));
    }

    #[test]
    fn test_large_images_are_capped() {
        assert_eq!(preview_dimensions(4000, 3000), (1280, 960));
        assert_eq!(preview_dimensions(3000, 4000), (960, 1280));
    }

    #[test]
    fn test_extreme_ratios_never_hit_zero() {
        let (width, height) = preview_dimensions(10_000, 3);
        assert_eq!(width, 1280);
        assert!(height >= 1);
    }

    #[test]
    fn test_undecodable_bytes_fail() {
        let result = decode_preview(b"definitely not an image");
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_missing_file_fails() {
        let result = load_preview(PathBuf::from("/nonexistent/photo.jpg")).await;
        assert!(result.is_err());
    }
}
