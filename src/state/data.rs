/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the UI layer and the scan client.

use std::path::PathBuf;

/// The image file the user has chosen for scanning
///
/// Held between selection and submit; replaced whenever the user picks
/// a new file. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    /// Full path to the image on disk
    pub path: PathBuf,
    /// Filename only (e.g., "IMG_0001.jpg"), shown in the picker label
    /// and preserved in the upload
    pub filename: String,
}

impl SelectedFile {
    pub fn new(path: PathBuf) -> Self {
        let filename = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        Self { path, filename }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_from_path() {
        let file = SelectedFile::new(PathBuf::from("/photos/IMG_0001.jpg"));
        assert_eq!(file.filename, "IMG_0001.jpg");
    }

    #[test]
    fn test_filename_survives_replacement() {
        let first = SelectedFile::new(PathBuf::from("/photos/a.png"));
        let second = SelectedFile::new(PathBuf::from("/photos/b.png"));

        assert_ne!(first, second);
        assert_eq!(second.filename, "b.png");
    }
}
