//! Rendering module for converting study materials to various output formats.

mod cleanup;
mod format;
mod graph;
mod html;
mod json;
mod markdown;
mod options;
mod result;
mod text;
mod tree;

pub use cleanup::{CleanupOptions, CleanupPipeline, CleanupPreset};
pub use format::{escape_html, inline_markdown_to_html, strip_emphasis};
pub use graph::{Direction, GraphOptions, SortMethod};
pub use html::{mind_map_html, to_html, VIS_NETWORK_URL};
pub use json::{graph_to_json, to_json, JsonFormat};
pub use markdown::{to_markdown, to_markdown_with_stats, MarkdownRenderer};
pub use options::{RenderOptions, Section, SectionSelection};
pub use result::{MaterialStats, RenderResult};
pub use text::{section_text, to_text};
pub use tree::{to_tree, walk};
