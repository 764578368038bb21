//! Client options and configuration.

use super::Endpoint;

/// Default address of a locally running study service.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

/// Options for talking to the study service.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Base URL of the service (scheme, host, port, optional path prefix)
    pub base_url: String,

    /// Multipart field name carrying the PDF
    pub field_name: String,

    /// User-Agent header sent with every request
    pub user_agent: String,

    /// Check the PDF header before uploading
    pub validate_pdf: bool,
}

impl ClientOptions {
    /// Create new client options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the service base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the multipart field name.
    pub fn with_field_name(mut self, name: impl Into<String>) -> Self {
        self.field_name = name.into();
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Enable or disable PDF header validation.
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate_pdf = validate;
        self
    }

    /// Full URL for an endpoint.
    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), endpoint.path())
    }
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVER_URL.to_string(),
            field_name: "file".to_string(),
            user_agent: concat!("pdfstudy/", env!("CARGO_PKG_VERSION")).to_string(),
            validate_pdf: true,
        }
    }
}
