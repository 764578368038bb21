//! HTTP client for the study service.
//!
//! Every endpoint takes the same multipart upload, a single PDF part, and
//! answers with JSON. [`StudyClient::process`] sends the file to all four
//! endpoints at once and only succeeds if every one of them does.
//!
//! # Example
//!
//! ```no_run
//! use pdfstudy::client::{ClientOptions, StudyClient, UploadFile};
//!
//! # async fn run() -> pdfstudy::Result<()> {
//! let client = StudyClient::new(ClientOptions::default())?;
//! let file = UploadFile::from_path("lecture.pdf")?;
//! let materials = client.process(&file).await?;
//! println!("{} questions", materials.mcqs.len());
//! # Ok(())
//! # }
//! ```

mod endpoint;
mod options;
mod upload;

pub use endpoint::Endpoint;
pub use options::{ClientOptions, DEFAULT_SERVER_URL};
pub use upload::UploadFile;

use crate::error::{Error, Result};
use crate::model::{McqItem, Metadata, MindMap, StudyMaterials, StudyPlan, Summary};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Client for the four study-service endpoints.
#[derive(Debug, Clone)]
pub struct StudyClient {
    http: Client,
    options: ClientOptions,
}

impl StudyClient {
    /// Create a client. Fails if the base URL does not parse.
    pub fn new(options: ClientOptions) -> Result<Self> {
        reqwest::Url::parse(&options.base_url)
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", options.base_url, e)))?;

        let http = Client::builder()
            .user_agent(options.user_agent.clone())
            .build()?;

        Ok(Self { http, options })
    }

    /// The options this client was built with.
    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Fetch the key-point summary and text snippet.
    pub async fn summary(&self, file: &UploadFile) -> Result<Summary> {
        self.post(Endpoint::Summary, file).await
    }

    /// Fetch the mind-map outline and parse it into a graph.
    pub async fn mind_map(&self, file: &UploadFile) -> Result<MindMap> {
        let reply: MindMapReply = self.post(Endpoint::MindMap, file).await?;
        Ok(MindMap::parse(reply.mind_map))
    }

    /// Fetch the multiple-choice questions.
    pub async fn mcqs(&self, file: &UploadFile) -> Result<Vec<McqItem>> {
        let reply: McqReply = self.post(Endpoint::Mcqs, file).await?;
        Ok(reply.mcqs)
    }

    /// Fetch the study plan.
    pub async fn study_plan(&self, file: &UploadFile) -> Result<StudyPlan> {
        let reply: StudyPlanReply = self.post(Endpoint::StudyPlan, file).await?;
        Ok(StudyPlan::new(reply.study_plan))
    }

    /// Send the file to all four endpoints concurrently.
    ///
    /// The batch is all-or-nothing: the first failing request fails the
    /// whole call and the remaining requests are dropped. There are no
    /// retries.
    pub async fn process(&self, file: &UploadFile) -> Result<StudyMaterials> {
        log::info!(
            "processing {} ({} bytes) via {}",
            file.file_name,
            file.len(),
            self.options.base_url
        );

        let batch = tokio::try_join!(
            self.summary(file),
            self.mind_map(file),
            self.mcqs(file),
            self.study_plan(file),
        );

        let (summary, mind_map, mcqs, study_plan) = match batch {
            Ok(results) => results,
            Err(e) => {
                log::error!("Upload failed: {}", e);
                return Err(e);
            }
        };

        let mut metadata = Metadata::new(
            file.file_name.clone(),
            file.len() as u64,
            self.options.base_url.clone(),
        );
        metadata.pdf_version = file.format.as_ref().map(|f| f.version.clone());

        log::info!(
            "received {} key points, {} mind-map nodes, {} questions",
            summary.key_points().len(),
            mind_map.graph.node_count(),
            mcqs.len()
        );

        Ok(StudyMaterials::new(
            metadata, summary, mind_map, mcqs, study_plan,
        ))
    }

    async fn post<T: DeserializeOwned>(&self, endpoint: Endpoint, file: &UploadFile) -> Result<T> {
        let url = self.options.endpoint_url(endpoint);

        let part = Part::bytes(file.data.clone())
            .file_name(file.file_name.clone())
            .mime_str("application/pdf")?;
        let form = Form::new().part(self.options.field_name.clone(), part);

        log::debug!("POST {}", url);
        let response = self.http.post(&url).multipart(form).send().await?;

        let status = response.status();
        log::debug!("{} replied {}", endpoint, status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = error_description(&body);
            log::warn!("{} failed with {}: {}", endpoint, status, message);
            return Err(Error::Upstream {
                endpoint,
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| Error::Decode {
            endpoint,
            message: e.to_string(),
        })
    }
}

/// Pull the `error` field out of a JSON error body, or fall back to the raw
/// body.
fn error_description(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| json.get("error").and_then(|v| v.as_str()).map(String::from))
        .unwrap_or_else(|| body.trim().to_string())
}

// -----------------------------------------------------------------------------
// Reply bodies
// -----------------------------------------------------------------------------

#[derive(Deserialize)]
struct MindMapReply {
    mind_map: String,
}

#[derive(Deserialize)]
struct McqReply {
    mcqs: Vec<McqItem>,
}

#[derive(Deserialize)]
struct StudyPlanReply {
    study_plan: String,
}
