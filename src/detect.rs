//! PDF header sniffing for upload validation.
//!
//! The study service does the actual PDF work; this only rejects files that
//! are obviously not PDFs before they cost a round trip.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Information read from a PDF header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfFormat {
    /// PDF version (e.g., "1.7", "2.0")
    pub version: String,
}

impl std::fmt::Display for PdfFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PDF {}", self.version)
    }
}

const PDF_MAGIC: &[u8] = b"%PDF-";
const HEADER_LEN: usize = PDF_MAGIC.len() + 3;

/// Read the header of a file on disk and check it.
///
/// # Example
/// ```no_run
/// use pdfstudy::detect::sniff_path;
///
/// let format = sniff_path("lecture.pdf").unwrap();
/// println!("{}", format);
/// ```
pub fn sniff_path<P: AsRef<Path>>(path: P) -> Result<PdfFormat> {
    let mut header = Vec::with_capacity(HEADER_LEN);
    File::open(path)?
        .take(HEADER_LEN as u64)
        .read_to_end(&mut header)?;
    sniff_bytes(&header)
}

/// Check that `data` starts with a `%PDF-d.d` header.
///
/// # Returns
/// * `Ok(PdfFormat)` with the header version
/// * `Err(Error::UnknownFormat)` if the magic bytes are missing
/// * `Err(Error::UnsupportedVersion)` if the version is malformed
pub fn sniff_bytes(data: &[u8]) -> Result<PdfFormat> {
    if data.len() < HEADER_LEN || !data.starts_with(PDF_MAGIC) {
        return Err(Error::UnknownFormat);
    }

    let version = String::from_utf8_lossy(&data[PDF_MAGIC.len()..HEADER_LEN]).to_string();
    match version.as_bytes() {
        [major, b'.', minor] if major.is_ascii_digit() && minor.is_ascii_digit() => {
            Ok(PdfFormat { version })
        }
        _ => Err(Error::UnsupportedVersion(version)),
    }
}

/// Check if bytes start with a valid PDF header.
pub fn looks_like_pdf(data: &[u8]) -> bool {
    sniff_bytes(data).is_ok()
}
