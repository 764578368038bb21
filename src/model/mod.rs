//! Data model for study materials.
//!
//! The outline graph is what the mind-map parser produces; the remaining
//! types mirror the four replies of the study service.

mod materials;
mod outline;
mod quiz;
mod summary;

pub use materials::{Metadata, MindMap, StudyMaterials};
pub use outline::{Edge, Forest, Graph, Node, NodeId};
pub use quiz::{ErrorItem, Grade, McqItem, Question};
pub use summary::{StudyPlan, Summary};
