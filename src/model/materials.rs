//! The combined result of one processed PDF.

use super::{Graph, McqItem, StudyPlan, Summary};
use crate::parser::parse_outline;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything the study service produced for one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyMaterials {
    /// Where the materials came from
    pub metadata: Metadata,

    /// Key points and snippet
    pub summary: Summary,

    /// Outline text and its parsed graph
    pub mind_map: MindMap,

    /// Multiple-choice questions (or inline errors)
    pub mcqs: Vec<McqItem>,

    /// Study plan
    pub study_plan: StudyPlan,
}

impl StudyMaterials {
    /// Assemble materials from the four service results.
    pub fn new(
        metadata: Metadata,
        summary: Summary,
        mind_map: MindMap,
        mcqs: Vec<McqItem>,
        study_plan: StudyPlan,
    ) -> Self {
        Self {
            metadata,
            summary,
            mind_map,
            mcqs,
            study_plan,
        }
    }

    /// Questions only, skipping inline error entries.
    pub fn questions(&self) -> impl Iterator<Item = &super::Question> {
        self.mcqs.iter().filter_map(McqItem::as_question)
    }
}

/// Mind-map outline text together with its graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MindMap {
    /// Outline text as returned by the service
    pub text: String,

    /// Graph parsed from `text`
    pub graph: Graph,
}

impl MindMap {
    /// Parse outline text into a mind map.
    pub fn parse(text: impl Into<String>) -> Self {
        let text = text.into();
        let graph = parse_outline(&text);
        Self { text, graph }
    }
}

/// Provenance of a set of study materials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    /// Uploaded file name
    pub file_name: String,

    /// Uploaded size in bytes
    pub file_size: u64,

    /// PDF version from the file header, if it was checked
    pub pdf_version: Option<String>,

    /// Base URL of the study service
    pub server: String,

    /// When the batch completed
    pub generated_at: DateTime<Utc>,
}

impl Metadata {
    /// Create metadata stamped with the current time.
    pub fn new(file_name: impl Into<String>, file_size: u64, server: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            file_size,
            pdf_version: None,
            server: server.into(),
            generated_at: Utc::now(),
        }
    }

    /// Convert metadata to YAML frontmatter format.
    pub fn to_yaml_frontmatter(&self) -> String {
        let mut lines = vec!["---".to_string()];

        lines.push(format!("source: \"{}\"", escape_yaml(&self.file_name)));
        lines.push(format!("size_bytes: {}", self.file_size));
        if let Some(ref version) = self.pdf_version {
            lines.push(format!("pdf_version: \"{}\"", version));
        }
        lines.push(format!("server: \"{}\"", escape_yaml(&self.server)));
        lines.push(format!("generated: {}", self.generated_at.to_rfc3339()));

        lines.push("---".to_string());
        lines.push(String::new());

        lines.join("\n")
    }
}

/// Escape special characters for YAML strings.
fn escape_yaml(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
