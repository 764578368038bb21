//! Plain text rendering for study materials.

use crate::error::Result;
use crate::model::{McqItem, StudyMaterials};

use super::format::strip_emphasis;
use super::{to_tree, CleanupPipeline, RenderOptions, Section};

/// Convert study materials to plain text.
pub fn to_text(materials: &StudyMaterials, options: &RenderOptions) -> Result<String> {
    let mut output = String::new();

    for section in options.sections.sections() {
        let title = section.title().to_uppercase();
        output.push_str(&title);
        output.push('\n');
        output.push_str(&"=".repeat(title.chars().count()));
        output.push_str("\n\n");
        output.push_str(section_text(materials, section).trim_end());
        output.push_str("\n\n");
    }

    if let Some(ref cleanup_options) = options.cleanup {
        let pipeline = CleanupPipeline::new(cleanup_options.clone());
        output = pipeline.process(&output);
    }

    Ok(output.trim().to_string())
}

/// Plain text of a single section, without a heading.
///
/// This is what a reader would copy from the section's tab.
pub fn section_text(materials: &StudyMaterials, section: Section) -> String {
    match section {
        Section::Summary => lines(materials.summary.key_points(), "• "),
        Section::Snippet => lines(materials.summary.snippet_sentences(), ""),
        Section::MindMap => to_tree(&materials.mind_map.graph),
        Section::Mcqs => mcq_text(&materials.mcqs),
        Section::StudyPlan => format!("{}\n", materials.study_plan.plain_text()),
    }
}

fn lines(items: Vec<String>, bullet: &str) -> String {
    items
        .iter()
        .map(|item| format!("{}{}\n", bullet, strip_emphasis(item)))
        .collect()
}

fn mcq_text(mcqs: &[McqItem]) -> String {
    let mut output = String::new();

    for (i, item) in mcqs.iter().enumerate() {
        match item {
            McqItem::Error(e) => {
                output.push_str(&format!("Error: {}\n\n", e.error));
            }
            McqItem::Question(q) => {
                output.push_str(&format!("{}. {}\n", i + 1, q.question));
                for key in q.options.keys() {
                    if let Some(label) = q.option_label(key) {
                        output.push_str(&format!("   {}\n", label));
                    }
                }
                output.push_str(&format!("   Answer: {}\n", q.answer));
                if !q.explanation.trim().is_empty() {
                    output.push_str(&format!("   {}\n", q.explanation.trim()));
                }
                output.push('\n');
            }
        }
    }

    output
}
