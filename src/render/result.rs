//! Rendering result with metadata and statistics.

use crate::model::{Metadata, StudyMaterials};
use serde::{Deserialize, Serialize};

/// Result of rendering study materials, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered content (Markdown, text, HTML)
    pub content: String,

    /// Provenance of the materials
    pub metadata: Metadata,

    /// Counts gathered while rendering
    pub stats: MaterialStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, metadata: Metadata, stats: MaterialStats) -> Self {
        Self {
            content,
            metadata,
            stats,
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics about one set of study materials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialStats {
    /// Number of summary key points
    pub key_point_count: u32,

    /// Number of snippet sentences
    pub sentence_count: u32,

    /// Number of mind-map nodes
    pub node_count: u32,

    /// Number of mind-map edges
    pub edge_count: u32,

    /// Deepest mind-map level
    pub max_level: u32,

    /// Nodes whose parent level never appeared
    pub orphan_count: u32,

    /// Number of well-formed questions
    pub question_count: u32,

    /// Number of inline MCQ errors
    pub mcq_error_count: u32,

    /// Approximate word count of the rendered output
    pub word_count: u32,

    /// Character count of the rendered output (excluding whitespace)
    pub char_count: u32,
}

impl MaterialStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count everything derivable from the materials themselves.
    pub fn from_materials(materials: &StudyMaterials) -> Self {
        let graph = &materials.mind_map.graph;
        let errors = materials.mcqs.iter().filter(|m| m.is_error()).count();

        Self {
            key_point_count: materials.summary.key_points().len() as u32,
            sentence_count: materials.summary.snippet_sentences().len() as u32,
            node_count: graph.node_count() as u32,
            edge_count: graph.edge_count() as u32,
            max_level: graph.max_level().unwrap_or(0) as u32,
            orphan_count: graph.orphans().len() as u32,
            question_count: (materials.mcqs.len() - errors) as u32,
            mcq_error_count: errors as u32,
            word_count: 0,
            char_count: 0,
        }
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }
}
