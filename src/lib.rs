//! # pdfstudy
//!
//! Client library for a PDF study service.
//!
//! A PDF is uploaded once per endpoint, concurrently, and the service
//! answers with a key-point summary, a text snippet, a mind-map outline,
//! multiple-choice questions and a study plan. The outline is parsed into a
//! node/edge graph locally, and everything can be rendered to Markdown,
//! plain text, JSON or a self-contained HTML page.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdfstudy::{render, ClientOptions};
//!
//! # async fn run() -> pdfstudy::Result<()> {
//! let materials = pdfstudy::process_file("lecture.pdf", &ClientOptions::default()).await?;
//!
//! let options = render::RenderOptions::default();
//! let markdown = render::to_markdown(&materials, &options)?;
//! println!("{}", markdown);
//! # Ok(())
//! # }
//! ```
//!
//! The outline parser needs no network:
//!
//! ```
//! let graph = pdfstudy::parse_mind_map("- Biology\n  - Cells\n  - Genetics");
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(graph.edge_count(), 2);
//! ```

pub mod client;
pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use client::{ClientOptions, Endpoint, StudyClient, UploadFile, DEFAULT_SERVER_URL};
pub use detect::{looks_like_pdf, sniff_bytes, sniff_path, PdfFormat};
pub use error::{Error, Result};
pub use model::{
    Edge, ErrorItem, Grade, Graph, McqItem, Metadata, MindMap, Node, NodeId, Question,
    StudyMaterials, StudyPlan, Summary,
};
pub use parser::{parse_outline, OutlineParser};
pub use render::{
    CleanupOptions, CleanupPreset, GraphOptions, JsonFormat, RenderOptions, Section,
    SectionSelection,
};

use std::path::Path;

/// Parse mind-map outline text into a graph.
///
/// Every non-empty line becomes a node with a sequential id starting at 1.
/// A node is linked to the most recent node one level above it, if any.
pub fn parse_mind_map(text: &str) -> Graph {
    parse_outline(text)
}

/// Upload a PDF file to all four endpoints and collect the results.
///
/// # Example
///
/// ```no_run
/// use pdfstudy::{process_file, ClientOptions};
///
/// # async fn run() -> pdfstudy::Result<()> {
/// let options = ClientOptions::new().with_base_url("http://localhost:9000");
/// let materials = process_file("lecture.pdf", &options).await?;
/// println!("{} mind-map nodes", materials.mind_map.graph.node_count());
/// # Ok(())
/// # }
/// ```
pub async fn process_file<P: AsRef<Path>>(
    path: P,
    options: &ClientOptions,
) -> Result<StudyMaterials> {
    let file = UploadFile::load(path.as_ref(), options.validate_pdf)?;
    let client = StudyClient::new(options.clone())?;
    client.process(&file).await
}

/// Builder for processing and rendering in one go.
///
/// # Example
///
/// ```no_run
/// use pdfstudy::{CleanupPreset, Pdfstudy};
///
/// # async fn run() -> pdfstudy::Result<()> {
/// let markdown = Pdfstudy::new()
///     .with_server("http://localhost:8000")
///     .with_frontmatter()
///     .with_cleanup(CleanupPreset::Standard)
///     .process("lecture.pdf")
///     .await?
///     .to_markdown()?;
/// # Ok(())
/// # }
/// ```
pub struct Pdfstudy {
    client_options: ClientOptions,
    render_options: RenderOptions,
}

impl Pdfstudy {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            client_options: ClientOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Set the study service base URL.
    pub fn with_server(mut self, url: impl Into<String>) -> Self {
        self.client_options = self.client_options.with_base_url(url);
        self
    }

    /// Skip the PDF header check before upload.
    pub fn without_validation(mut self) -> Self {
        self.client_options = self.client_options.with_validation(false);
        self
    }

    /// Enable frontmatter in Markdown output.
    pub fn with_frontmatter(mut self) -> Self {
        self.render_options = self.render_options.with_frontmatter(true);
        self
    }

    /// Set the sections to render.
    pub fn with_sections(mut self, sections: SectionSelection) -> Self {
        self.render_options = self.render_options.with_sections(sections);
        self
    }

    /// Set cleanup preset.
    pub fn with_cleanup(mut self, preset: CleanupPreset) -> Self {
        self.render_options = self.render_options.with_cleanup_preset(preset);
        self
    }

    /// Set mind-map renderer options.
    pub fn with_graph_options(mut self, graph: GraphOptions) -> Self {
        self.render_options = self.render_options.with_graph_options(graph);
        self
    }

    /// Upload a PDF file and return a result wrapper.
    pub async fn process<P: AsRef<Path>>(self, path: P) -> Result<PdfstudyResult> {
        let materials = process_file(path, &self.client_options).await?;
        Ok(PdfstudyResult {
            materials,
            render_options: self.render_options,
        })
    }

    /// Upload an already loaded file.
    pub async fn process_upload(self, file: &UploadFile) -> Result<PdfstudyResult> {
        let client = StudyClient::new(self.client_options)?;
        let materials = client.process(file).await?;
        Ok(PdfstudyResult {
            materials,
            render_options: self.render_options,
        })
    }
}

impl Default for Pdfstudy {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of processing a PDF.
pub struct PdfstudyResult {
    materials: StudyMaterials,
    render_options: RenderOptions,
}

impl PdfstudyResult {
    /// Wrap existing materials with render options.
    pub fn new(materials: StudyMaterials, render_options: RenderOptions) -> Self {
        Self {
            materials,
            render_options,
        }
    }

    /// Convert to Markdown.
    pub fn to_markdown(&self) -> Result<String> {
        render::to_markdown(&self.materials, &self.render_options)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.materials, &self.render_options)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.materials, format)
    }

    /// Convert to a self-contained HTML page.
    pub fn to_html(&self) -> Result<String> {
        render::to_html(&self.materials, &self.render_options)
    }

    /// Render the mind map as a terminal tree.
    pub fn to_tree(&self) -> String {
        render::to_tree(&self.materials.mind_map.graph)
    }

    /// Get the materials.
    pub fn materials(&self) -> &StudyMaterials {
        &self.materials
    }

    /// Take ownership of the materials.
    pub fn into_materials(self) -> StudyMaterials {
        self.materials
    }
}
