//! JSON rendering for study materials.

use crate::error::{Error, Result};
use crate::model::{Graph, StudyMaterials};
use serde::Serialize;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert study materials to JSON.
pub fn to_json(materials: &StudyMaterials, format: JsonFormat) -> Result<String> {
    serialize(materials, format)
}

/// Convert a mind-map graph to JSON (`{"nodes": [...], "edges": [...]}`).
pub fn graph_to_json(graph: &Graph, format: JsonFormat) -> Result<String> {
    serialize(graph, format)
}

fn serialize<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
