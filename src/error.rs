//! Error types for pdfstudy.

use std::io;
use thiserror::Error;

use crate::client::Endpoint;

/// Result type alias for pdfstudy operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Message shown when no input file was selected.
pub const MISSING_INPUT_MESSAGE: &str = "Please select a PDF file.";

/// Generic message shown for every failed batch.
pub const FAILURE_MESSAGE: &str = "Failed to process PDF.";

/// Error types that can occur while uploading, decoding, or rendering.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// No input file was selected.
    #[error("No PDF file selected")]
    MissingInput,

    /// The file is not recognized as a PDF.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The PDF header carries a malformed version.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// Transport failure talking to the study service.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The study service answered with a non-success status.
    #[error("{endpoint} request failed with status {status}: {message}")]
    Upstream {
        /// Endpoint that failed
        endpoint: Endpoint,
        /// HTTP status code
        status: u16,
        /// Error description from the response body, if any
        message: String,
    },

    /// The study service answered with an unexpected body.
    #[error("Invalid {endpoint} response: {message}")]
    Decode {
        /// Endpoint whose reply could not be decoded
        endpoint: Endpoint,
        /// Decoder error
        message: String,
    },

    /// The configured server URL is not usable.
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Error during rendering (Markdown, text, JSON, HTML).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// True when the operation was aborted because no file was selected.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, Error::MissingInput)
    }

    /// True for failures of the remote batch (transport, status, or body).
    pub fn is_upstream_failure(&self) -> bool {
        matches!(
            self,
            Error::Http(_) | Error::Upstream { .. } | Error::Decode { .. }
        )
    }

    /// The message a user should see for this error.
    ///
    /// Only missing input is distinguished; everything else collapses into
    /// the generic failure message.
    pub fn user_message(&self) -> &'static str {
        match self {
            Error::MissingInput => MISSING_INPUT_MESSAGE,
            _ => FAILURE_MESSAGE,
        }
    }
}
