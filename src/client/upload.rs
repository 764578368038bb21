//! The file selected for upload.

use crate::detect::{sniff_bytes, PdfFormat};
use crate::error::{Error, Result};
use std::path::Path;

/// A PDF held in memory, ready to be sent to every endpoint.
#[derive(Debug, Clone)]
pub struct UploadFile {
    /// File name reported in the multipart part
    pub file_name: String,

    /// File contents
    pub data: Vec<u8>,

    /// Header information, when the file was validated
    pub format: Option<PdfFormat>,
}

impl UploadFile {
    /// Load and validate a PDF from disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load(path.as_ref(), true)
    }

    /// Load a file from disk, optionally skipping the PDF header check.
    pub fn load(path: &Path, validate: bool) -> Result<Self> {
        let data = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "document.pdf".to_string());
        Self::with_validation(file_name, data, validate)
    }

    /// Wrap in-memory bytes, checking the PDF header.
    pub fn from_bytes(file_name: impl Into<String>, data: Vec<u8>) -> Result<Self> {
        Self::with_validation(file_name, data, true)
    }

    /// Load the selected file, or fail with [`Error::MissingInput`] when
    /// nothing was selected. No network call happens in either case.
    pub fn select(path: Option<&Path>, validate: bool) -> Result<Self> {
        match path {
            Some(path) => Self::load(path, validate),
            None => Err(Error::MissingInput),
        }
    }

    fn with_validation(file_name: impl Into<String>, data: Vec<u8>, validate: bool) -> Result<Self> {
        let format = if validate {
            Some(sniff_bytes(&data)?)
        } else {
            None
        };
        Ok(Self {
            file_name: file_name.into(),
            data,
            format,
        })
    }

    /// Size in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the file is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_select_none_is_missing_input() {
        let result = UploadFile::select(None, true);
        assert!(matches!(result, Err(Error::MissingInput)));
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lecture.pdf");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"%PDF-1.4\nbody").unwrap();

        let upload = UploadFile::from_path(&path).unwrap();
        assert_eq!(upload.file_name, "lecture.pdf");
        assert_eq!(upload.len(), 13);
        assert_eq!(upload.format.unwrap().version, "1.4");
    }

    #[test]
    fn test_from_bytes_rejects_non_pdf() {
        let result = UploadFile::from_bytes("notes.txt", b"just some notes".to_vec());
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_load_without_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.bin");
        std::fs::write(&path, b"not a pdf").unwrap();

        let upload = UploadFile::select(Some(&path), false).unwrap();
        assert!(upload.format.is_none());
        assert!(!upload.is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = UploadFile::from_path("/nonexistent/file.pdf");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
